/*!
 * Block-List Allocator
 *
 * Contiguous-memory allocator over a fixed-size address space.
 *
 * ## Layout
 *
 * The address space is an ordered `Vec<Block>` sorted by `start`:
 * - Blocks are contiguous and non-overlapping, covering `[0, capacity)`
 * - No two neighbouring blocks are both free
 * - Each owner holds at most one used block
 *
 * ## Operations
 *
 * - **Allocation**: first-fit, best-fit, or worst-fit selection over the
 *   free blocks, splitting the chosen block when it is larger than needed
 * - **Deallocation**: frees the owner's block and coalesces every run of
 *   adjacent free blocks
 * - **Fragmentation**: total free memory minus the largest free block
 */

mod allocator;
mod coalesce;
mod core;
mod free_list;
mod stats;
mod validate;

// Re-export public types and traits
pub use self::core::{
    Allocator, Block, BlockSnapshot, BlockState, BlockStatus, MemoryError, MemoryInfo,
    MemoryPressure, MemoryResult, MemoryStats, Outcome, Placement, Release, Strategy,
};

use crate::core::limits::DEFAULT_CAPACITY;
use crate::core::types::Size;
use tracing::info;

/// Block-list allocator for one simulated address space
///
/// Owned by a single session; wrap it in a
/// [`SharedAllocator`](crate::memory::SharedAllocator) to share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockAllocator {
    total_capacity: Size,
    blocks: Vec<Block>,
}

impl BlockAllocator {
    /// Create an allocator with the default 1024 KB capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an allocator spanning `total` KB as a single free block
    ///
    /// # Panics
    /// Panics if `total` is zero. Use [`try_with_capacity`](Self::try_with_capacity)
    /// for untrusted input.
    pub fn with_capacity(total: Size) -> Self {
        match Self::try_with_capacity(total) {
            Ok(allocator) => allocator,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_with_capacity(total: Size) -> MemoryResult<Self> {
        if total == 0 {
            return Err(MemoryError::InvalidArgument(
                "capacity must be at least 1KB".to_string(),
            ));
        }
        info!(capacity = total, "Block allocator initialized with one free block");
        Ok(Self {
            total_capacity: total,
            blocks: vec![Block::free(0, total)],
        })
    }

    /// Current block list, lowest address first
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn total_capacity(&self) -> Size {
        self.total_capacity
    }

    /// Block currently held by `owner`, if any
    pub fn owner_block(&self, owner: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.is_owned_by(owner))
    }
}

impl Default for BlockAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// Implement trait interfaces
impl Allocator for BlockAllocator {
    fn allocate(
        &mut self,
        owner: &str,
        size: Size,
        strategy: Strategy,
    ) -> MemoryResult<Placement> {
        BlockAllocator::allocate(self, owner, size, strategy)
    }

    fn deallocate(&mut self, owner: &str) -> MemoryResult<Release> {
        BlockAllocator::deallocate(self, owner)
    }
}

impl MemoryInfo for BlockAllocator {
    fn total_capacity(&self) -> Size {
        self.total_capacity
    }

    fn snapshot(&self) -> Vec<BlockSnapshot> {
        BlockAllocator::snapshot(self)
    }

    fn fragmentation(&self) -> Size {
        BlockAllocator::fragmentation(self)
    }

    fn stats(&self) -> MemoryStats {
        BlockAllocator::stats(self)
    }
}
