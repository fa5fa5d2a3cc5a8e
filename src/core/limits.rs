/*!
 * Simulator Limits and Constants
 *
 * Centralized location for capacities, thresholds, and display widths.
 */

// =============================================================================
// ADDRESS SPACE
// =============================================================================

/// Default simulated address space (1024 KB)
/// Matches the capacity a fresh session starts with
pub const DEFAULT_CAPACITY: usize = 1024;

// =============================================================================
// MEMORY PRESSURE
// =============================================================================

/// Usage ratio at which pressure is reported as MEDIUM
pub const PRESSURE_MEDIUM_THRESHOLD: f64 = 0.60;

/// Usage ratio at which pressure is reported as HIGH
pub const PRESSURE_HIGH_THRESHOLD: f64 = 0.80;

/// Usage ratio at which pressure is reported as CRITICAL
pub const PRESSURE_CRITICAL_THRESHOLD: f64 = 0.95;

// =============================================================================
// SHELL
// =============================================================================

/// Width of the text address bar in characters
pub const CHART_WIDTH: usize = 64;

/// Environment variable overriding the address space capacity
pub const ENV_CAPACITY: &str = "MEMSIM_CAPACITY";

/// Environment variable selecting the default allocation strategy
pub const ENV_STRATEGY: &str = "MEMSIM_STRATEGY";

/// Environment variable enabling JSON trace output
pub const ENV_TRACE_JSON: &str = "MEMSIM_TRACE_JSON";
