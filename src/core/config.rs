/*!
 * Simulation Configuration
 *
 * Capacity, default strategy, and trace format, with overrides from the
 * environment.
 */

use crate::core::limits::{DEFAULT_CAPACITY, ENV_CAPACITY, ENV_STRATEGY, ENV_TRACE_JSON};
use crate::core::types::Size;
use crate::memory::Strategy;
use miette::Diagnostic;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    #[diagnostic(code(config::invalid_value))]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for one simulation session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Size of the address space in KB (default: 1024)
    pub capacity: Size,

    /// Strategy used when a command does not name one (default: First-Fit)
    pub default_strategy: Strategy,

    /// Emit traces as JSON (default: false)
    pub trace_json: bool,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            default_strategy: Strategy::FirstFit,
            trace_json: false,
        }
    }

    pub fn with_capacity(mut self, capacity: Size) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Load configuration from `MEMSIM_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(value) = lookup(ENV_CAPACITY) {
            config.capacity = match value.trim().parse::<Size>() {
                Ok(capacity) if capacity > 0 => capacity,
                Ok(_) => return Err(invalid(ENV_CAPACITY, value, "must be at least 1")),
                Err(e) => return Err(invalid(ENV_CAPACITY, value, &e.to_string())),
            };
        }

        if let Some(value) = lookup(ENV_STRATEGY) {
            config.default_strategy = match value.parse::<Strategy>() {
                Ok(strategy) => strategy,
                Err(_) => return Err(invalid(ENV_STRATEGY, value, "expected first, best, or worst")),
            };
        }

        if let Some(value) = lookup(ENV_TRACE_JSON) {
            config.trace_json = value == "1" || value.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}

fn invalid(key: &'static str, value: String, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value,
        reason: reason.to_string(),
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
