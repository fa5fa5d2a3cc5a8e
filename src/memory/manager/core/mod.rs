/*!
 * Core Memory Management
 * Types and traits for the block-list allocator
 */

pub mod traits;
pub mod types;

// Re-export public types and traits
pub use traits::{Allocator, MemoryInfo};
pub use types::{
    Block, BlockSnapshot, BlockState, BlockStatus, MemoryError, MemoryPressure, MemoryResult,
    MemoryStats, Outcome, Placement, Release, Strategy,
};
