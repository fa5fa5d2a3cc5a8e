/*!
 * Simulation Session
 * Holds the live allocator and executes shell commands against it
 */

use super::command::{Command, HELP};
use super::render::{render_chart, render_metrics, render_stats, render_table};
use crate::core::config::SimulationConfig;
use crate::core::limits::CHART_WIDTH;
use crate::memory::{BlockAllocator, BlockSnapshot, MemoryResult, MemoryStats, Outcome};
use crate::monitoring::{generate_session_id, session_span};
use serde::Serialize;
use tracing::{info, Span};
use uuid::Uuid;

/// What the shell should print after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Result of an allocate or deallocate call
    Outcome(Outcome),
    /// Informational output
    Text(String),
    /// Input rejected before reaching the allocator
    Rejected(String),
    Quit,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    session_id: Uuid,
    stats: &'a MemoryStats,
    blocks: &'a [BlockSnapshot],
}

/// One simulation session
///
/// Owns its allocator; `reset` discards it and starts a fresh address
/// space under a new session ID.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    config: SimulationConfig,
    allocator: BlockAllocator,
    span: Span,
}

impl Session {
    /// Start a session over an empty address space of `config.capacity` KB
    ///
    /// Fails with `InvalidArgument` when the capacity is zero.
    pub fn new(config: SimulationConfig) -> MemoryResult<Self> {
        let allocator = BlockAllocator::try_with_capacity(config.capacity)?;
        Ok(Self::with_allocator(config, allocator))
    }

    fn with_allocator(config: SimulationConfig, allocator: BlockAllocator) -> Self {
        let id = generate_session_id();
        let span = session_span(id, allocator.total_capacity());
        span.in_scope(|| info!(capacity = allocator.total_capacity(), "Session started"));
        Self {
            id,
            config,
            allocator,
            span,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn allocator(&self) -> &BlockAllocator {
        &self.allocator
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Discard the current allocator and start with an empty address space
    pub fn reset(&mut self) {
        let previous = self.id;
        let allocator = BlockAllocator::with_capacity(self.allocator.total_capacity());
        *self = Self::with_allocator(self.config.clone(), allocator);
        self.span.in_scope(|| info!(previous_session = %previous, "Simulation reset"));
    }

    /// Parse and run one input line; blank lines produce no response
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        Command::parse_line(line).map(|parsed| match parsed {
            Ok(command) => self.execute(command),
            Err(e) => Response::Rejected(e.to_string()),
        })
    }

    pub fn execute(&mut self, command: Command) -> Response {
        let _entered = self.span.clone().entered();
        match command {
            Command::Allocate {
                owner,
                size,
                strategy,
            } => {
                let strategy = strategy.unwrap_or(self.config.default_strategy);
                Response::Outcome(Outcome::from(self.allocator.allocate(&owner, size, strategy)))
            }
            Command::Deallocate { owner } => {
                Response::Outcome(Outcome::from(self.allocator.deallocate(&owner)))
            }
            Command::Show => Response::Text(format!(
                "{}\n\n{}\n\n{}",
                render_chart(&self.allocator, CHART_WIDTH),
                render_table(&self.allocator),
                render_metrics(&self.allocator)
            )),
            Command::Stats => Response::Text(render_stats(&self.allocator)),
            Command::Json => {
                let stats = self.allocator.stats();
                let blocks = self.allocator.snapshot();
                let report = JsonReport {
                    session_id: self.id,
                    stats: &stats,
                    blocks: &blocks,
                };
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => Response::Text(json),
                    Err(e) => Response::Rejected(format!("Could not serialize state: {}", e)),
                }
            }
            Command::Reset => {
                drop(_entered);
                self.reset();
                Response::Text("Simulation has been reset.".to_string())
            }
            Command::Help => Response::Text(HELP.to_string()),
            Command::Quit => Response::Quit,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_allocator(SimulationConfig::default(), BlockAllocator::new())
    }
}
