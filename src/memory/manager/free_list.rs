/*!
 * Free Block Selection
 * Placement strategies over the address-ordered block list
 */

use super::core::{Block, Strategy};
use crate::core::types::Size;

/// Free block able to hold a request, with the space it would leave over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Candidate {
    pub index: usize,
    pub slack: Size,
}

/// Free blocks of at least `size`, in ascending address order
fn candidates(blocks: &[Block], size: Size) -> impl Iterator<Item = Candidate> + '_ {
    blocks
        .iter()
        .enumerate()
        .filter(move |(_, block)| block.is_free() && block.size >= size)
        .map(move |(index, block)| Candidate {
            index,
            slack: block.size - size,
        })
}

impl Strategy {
    /// Pick the block a request of `size` should be placed in
    ///
    /// Ties go to the lowest address: the scan is address-ordered and a
    /// candidate only replaces the current pick on a strict improvement.
    pub(super) fn select(self, blocks: &[Block], size: Size) -> Option<Candidate> {
        let mut found = candidates(blocks, size);
        match self {
            Strategy::FirstFit => found.next(),
            Strategy::BestFit => found.fold(None, |best: Option<Candidate>, c| match best {
                Some(b) if b.slack <= c.slack => Some(b),
                _ => Some(c),
            }),
            Strategy::WorstFit => found.fold(None, |worst: Option<Candidate>, c| match worst {
                Some(w) if w.slack >= c.slack => Some(w),
                _ => Some(c),
            }),
        }
    }
}
