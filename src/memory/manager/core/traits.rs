/*!
 * Memory Traits
 * Allocator abstractions consumed by the presentation layer
 */

use super::types::*;
use crate::core::types::Size;

/// Mutating allocator interface
pub trait Allocator {
    /// Place a block of `size` for `owner` using `strategy`
    fn allocate(
        &mut self,
        owner: &str,
        size: Size,
        strategy: Strategy,
    ) -> MemoryResult<Placement>;

    /// Release the block held by `owner` and coalesce free space
    fn deallocate(&mut self, owner: &str) -> MemoryResult<Release>;
}

/// Read-only view of allocator state
pub trait MemoryInfo {
    fn total_capacity(&self) -> Size;

    /// Ordered copy of the block list, lowest address first
    fn snapshot(&self) -> Vec<BlockSnapshot>;

    /// Total free memory minus the largest free block
    fn fragmentation(&self) -> Size;

    fn stats(&self) -> MemoryStats;

    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
