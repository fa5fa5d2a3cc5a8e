/*!
 * Shell Commands
 * Parsing of the line-oriented simulation commands
 */

use crate::core::types::Size;
use crate::memory::Strategy;
use std::str::FromStr;
use thiserror::Error;

/// Command parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("Please provide a valid Process ID and Size.")]
    IncompleteAllocation,

    #[error("Please provide a Process ID to deallocate.")]
    MissingProcessId,

    #[error("Invalid size '{0}': must be a whole number of KB, at least 1.")]
    InvalidSize(String),

    #[error("Unknown allocation strategy '{0}': use first, best, or worst.")]
    InvalidStrategy(String),

    #[error("Unexpected argument '{0}'.")]
    UnexpectedArgument(String),
}

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Allocate {
        owner: String,
        size: Size,
        strategy: Option<Strategy>,
    },
    Deallocate {
        owner: String,
    },
    Show,
    Stats,
    Json,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; blank lines and `#` comments yield `None`
    pub fn parse_line(line: &str) -> Option<Result<Self, CommandError>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Some(trimmed.parse())
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "alloc" | "allocate" | "a" => {
                let owner = words.next().ok_or(CommandError::IncompleteAllocation)?;
                let raw_size = words.next().ok_or(CommandError::IncompleteAllocation)?;
                let size = match raw_size.parse::<Size>() {
                    Ok(size) if size > 0 => size,
                    _ => return Err(CommandError::InvalidSize(raw_size.to_string())),
                };
                let strategy = words
                    .next()
                    .map(|raw| {
                        raw.parse::<Strategy>()
                            .map_err(|_| CommandError::InvalidStrategy(raw.to_string()))
                    })
                    .transpose()?;
                Command::Allocate {
                    owner: owner.to_string(),
                    size,
                    strategy,
                }
            }
            "free" | "dealloc" | "deallocate" | "d" => {
                let owner = words.next().ok_or(CommandError::MissingProcessId)?;
                Command::Deallocate {
                    owner: owner.to_string(),
                }
            }
            "show" | "ls" => Command::Show,
            "stats" => Command::Stats,
            "json" => Command::Json,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

pub const HELP: &str = "\
Commands:
  alloc <id> <size> [first|best|worst]   allocate <size> KB for process <id>
  free <id>                              deallocate the block held by <id>
  show                                   address bar, block table, and metrics
  stats                                  usage and fragmentation statistics
  json                                   block list and statistics as JSON
  reset                                  start over with an empty address space
  help                                   this message
  quit                                   leave the simulator";
