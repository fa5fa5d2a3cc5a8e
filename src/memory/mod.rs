/*!
 * Memory Module
 * Contiguous block-list allocation
 */

pub mod manager;
pub mod shared;

// Re-export for convenience
pub use manager::*;
pub use shared::SharedAllocator;
