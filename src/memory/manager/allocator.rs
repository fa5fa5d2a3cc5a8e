/*!
 * Memory Allocator Implementation
 * Allocation and deallocation logic
 */

use super::coalesce::{merge_free_blocks, split_block};
use super::core::{BlockStatus, BlockSnapshot, MemoryError, MemoryPressure, MemoryResult};
use super::core::{Placement, Release, Strategy};
use super::BlockAllocator;
use crate::core::id::OwnerId;
use crate::core::types::Size;
use tracing::{info, warn};

impl BlockAllocator {
    /// Allocate `size` KB for `owner`, choosing the block with `strategy`
    ///
    /// Fails without touching the block list when the arguments are
    /// invalid, the owner already holds a block, or no free block is
    /// large enough.
    pub fn allocate(
        &mut self,
        owner: &str,
        size: Size,
        strategy: Strategy,
    ) -> MemoryResult<Placement> {
        if owner.is_empty() {
            return Err(MemoryError::InvalidArgument(
                "process ID must not be empty".to_string(),
            ));
        }
        if size == 0 {
            return Err(MemoryError::InvalidArgument(
                "size must be at least 1KB".to_string(),
            ));
        }

        if let Some(existing) = self.owner_block(owner) {
            warn!(
                owner,
                start = existing.start,
                "Rejected allocation: process already holds a block"
            );
            return Err(MemoryError::DuplicateOwner {
                owner: OwnerId::from(owner),
                start: existing.start,
            });
        }

        let Some(candidate) = strategy.select(&self.blocks, size) else {
            let largest_free = self.largest_free_block();
            warn!(
                owner,
                requested = size,
                largest_free,
                %strategy,
                "Allocation failed: no free block large enough"
            );
            return Err(MemoryError::CapacityExhausted {
                owner: OwnerId::from(owner),
                requested: size,
                largest_free,
            });
        };

        let owner_id = OwnerId::from(owner);
        let start = self.blocks[candidate.index].start;
        let remainder = split_block(&mut self.blocks, candidate.index, owner_id.clone(), size);
        debug_assert!(self.check_invariants().is_ok());

        let used = self.used_memory();
        match MemoryPressure::from_ratio(used as f64 / self.total_capacity() as f64) {
            level @ (MemoryPressure::High | MemoryPressure::Critical) => warn!(
                owner,
                size,
                start,
                %strategy,
                used,
                total = self.total_capacity(),
                "Memory pressure {}: allocated block",
                level
            ),
            _ => info!(owner, size, start, %strategy, "Allocated block"),
        }

        Ok(Placement {
            owner: owner_id,
            start,
            size,
            remainder,
        })
    }

    /// Free the block held by `owner` and coalesce all adjacent free space
    pub fn deallocate(&mut self, owner: &str) -> MemoryResult<Release> {
        let Some(block) = self.blocks.iter_mut().find(|b| b.is_owned_by(owner)) else {
            warn!(owner, "Attempted to deallocate unknown process");
            return Err(MemoryError::UnknownOwner(OwnerId::from(owner)));
        };

        let release = Release {
            owner: OwnerId::from(owner),
            start: block.start,
            size: block.size,
        };
        block.status = BlockStatus::Free;

        let merged = merge_free_blocks(&mut self.blocks);
        debug_assert!(self.check_invariants().is_ok());

        info!(
            owner,
            start = release.start,
            size = release.size,
            merged,
            free = self.free_memory(),
            "Deallocated block"
        );

        Ok(release)
    }

    /// Ordered copy of the block list for rendering and export
    pub fn snapshot(&self) -> Vec<BlockSnapshot> {
        self.blocks.iter().map(BlockSnapshot::from).collect()
    }
}
