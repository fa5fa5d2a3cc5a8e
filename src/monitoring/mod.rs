/*!
 * Monitoring Module
 * Structured tracing for simulation sessions
 */

pub mod tracer;

pub use tracer::{generate_session_id, init_tracing, session_span};
