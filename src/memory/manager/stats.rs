/*!
 * Memory Statistics
 * Usage totals and the external fragmentation metric
 */

use super::core::MemoryStats;
use super::BlockAllocator;
use crate::core::types::Size;

impl BlockAllocator {
    /// Sum of all used block sizes
    pub fn used_memory(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| !b.is_free())
            .map(|b| b.size)
            .sum()
    }

    /// Sum of all free block sizes
    pub fn free_memory(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_free())
            .map(|b| b.size)
            .sum()
    }

    /// Size of the largest free block, or 0 when memory is full
    pub fn largest_free_block(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_free())
            .map(|b| b.size)
            .max()
            .unwrap_or(0)
    }

    /// External fragmentation in KB
    ///
    /// Free memory outside the largest free block. Zero when there are
    /// fewer than two free blocks.
    pub fn fragmentation(&self) -> Size {
        let (count, total, largest) = self
            .blocks
            .iter()
            .filter(|b| b.is_free())
            .fold((0usize, 0usize, 0usize), |(count, total, largest), b| {
                (count + 1, total + b.size, largest.max(b.size))
            });

        if count <= 1 {
            0
        } else {
            total - largest
        }
    }

    pub fn stats(&self) -> MemoryStats {
        let used_memory = self.used_memory();
        let used_blocks = self.blocks.iter().filter(|b| !b.is_free()).count();

        MemoryStats {
            total_memory: self.total_capacity(),
            used_memory,
            free_memory: self.total_capacity() - used_memory,
            usage_percentage: (used_memory as f64 / self.total_capacity() as f64) * 100.0,
            used_blocks,
            free_blocks: self.blocks.len() - used_blocks,
            largest_free_block: self.largest_free_block(),
            external_fragmentation: self.fragmentation(),
        }
    }
}
