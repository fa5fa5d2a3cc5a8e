/*!
 * Core Types
 * Common types used across the simulator
 */

/// Offset into the simulated address space (KB)
pub type Address = usize;

/// Length of a region of the simulated address space (KB)
pub type Size = usize;
