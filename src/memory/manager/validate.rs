/*!
 * Block List Validation
 * Structural checks run after every mutation in debug builds
 */

use super::core::{MemoryError, MemoryResult};
use super::BlockAllocator;
use std::collections::HashSet;

impl BlockAllocator {
    /// Verify the block list layout
    ///
    /// Checks that blocks are non-empty, start at 0, are contiguous, end at
    /// the capacity, never leave two free blocks side by side, and that no
    /// owner holds more than one block.
    pub fn check_invariants(&self) -> MemoryResult<()> {
        let corrupt = |start, reason: &str| MemoryError::CorruptionDetected {
            start,
            reason: reason.to_string(),
        };

        let Some(first) = self.blocks.first() else {
            return Err(corrupt(0, "block list is empty"));
        };
        if first.start != 0 {
            return Err(corrupt(first.start, "first block does not start at 0"));
        }

        let mut owners = HashSet::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if block.size == 0 {
                return Err(corrupt(block.start, "zero-sized block"));
            }
            if let Some(owner) = block.owner() {
                if owner.is_empty() {
                    return Err(corrupt(block.start, "used block has an empty owner"));
                }
                if !owners.insert(owner.as_str()) {
                    return Err(corrupt(block.start, "owner holds more than one block"));
                }
            }
            if let Some(next) = self.blocks.get(i + 1) {
                if block.end() != next.start {
                    return Err(corrupt(next.start, "blocks are not contiguous"));
                }
                if block.is_free() && next.is_free() {
                    return Err(corrupt(next.start, "adjacent free blocks were not coalesced"));
                }
            }
        }

        let last = &self.blocks[self.blocks.len() - 1];
        if last.end() != self.total_capacity() {
            return Err(corrupt(last.start, "last block does not end at capacity"));
        }
        Ok(())
    }
}
