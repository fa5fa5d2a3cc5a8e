/*!
 * Simulation Shell
 * Line-oriented front end: command parsing, session state, and rendering
 */

pub mod command;
pub mod render;
pub mod session;

pub use command::{Command, CommandError, HELP};
pub use session::{Response, Session};
