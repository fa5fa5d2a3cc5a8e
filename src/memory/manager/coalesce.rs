/*!
 * Block Splitting and Coalescing
 */

use super::core::{Block, BlockStatus};
use crate::core::id::OwnerId;
use crate::core::types::Size;
use tracing::debug;

/// Turn the free block at `index` into a used block of exactly `size`
///
/// Any excess becomes a new free block inserted right after it. Returns the
/// size of that remainder. The caller guarantees the block is free and at
/// least `size` long.
pub(super) fn split_block(
    blocks: &mut Vec<Block>,
    index: usize,
    owner: OwnerId,
    size: Size,
) -> Option<Size> {
    let block = &mut blocks[index];
    debug_assert!(block.is_free() && block.size >= size);

    let remainder = block.size - size;
    let remainder_start = block.start + size;
    block.size = size;
    block.status = BlockStatus::Used(owner);

    if remainder == 0 {
        return None;
    }

    blocks.insert(index + 1, Block::free(remainder_start, remainder));
    debug!(
        keep = size,
        remainder,
        remainder_start,
        "Split block, returning remainder to free space"
    );
    Some(remainder)
}

/// Merge every run of adjacent free blocks into one block
///
/// Re-sorts by `start` first, then sweeps left to right. After a merge the
/// sweep stays on the same block so a run of any length collapses in one
/// pass. Returns the number of merges performed.
pub(super) fn merge_free_blocks(blocks: &mut Vec<Block>) -> usize {
    blocks.sort_by_key(|b| b.start);

    let mut i = 0;
    let mut merged = 0;
    while i + 1 < blocks.len() {
        if blocks[i].is_free() && blocks[i + 1].is_free() {
            let next_size = blocks[i + 1].size;
            blocks[i].size += next_size;
            blocks.remove(i + 1);
            merged += 1;
        } else {
            i += 1;
        }
    }

    if merged > 0 {
        debug!(
            merged,
            remaining = blocks.len(),
            "Coalesced adjacent free blocks"
        );
    }
    merged
}
