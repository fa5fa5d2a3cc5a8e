/*!
 * Contiguous Memory Allocation Simulator
 * Block-list allocator with first/best/worst-fit placement
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod shell;

// Re-exports
pub use crate::core::{OwnerId, SimulationConfig};
pub use memory::{
    Allocator, Block, BlockAllocator, BlockSnapshot, BlockState, BlockStatus, MemoryError,
    MemoryInfo, MemoryResult, MemoryStats, Outcome, Placement, Release, SharedAllocator, Strategy,
};
pub use monitoring::init_tracing;
pub use shell::{Command, Response, Session};
