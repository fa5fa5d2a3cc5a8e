/*!
 * Text Rendering
 * Address bar, block table, and metrics for the terminal
 */

use crate::memory::{BlockState, MemoryInfo};
use std::fmt::Write;

const USED_CELL: char = '#';
const FREE_CELL: char = '.';

/// Horizontal address bar scaled to `width` columns
///
/// Each block gets at least one column so small blocks stay visible. A
/// legend line per block follows the bar.
pub fn render_chart(info: &impl MemoryInfo, width: usize) -> String {
    let total = info.total_capacity().max(1);
    let blocks = info.snapshot();

    let mut bar = String::with_capacity(width + 2);
    bar.push('|');
    for block in &blocks {
        let from = column(block.start, width, total);
        let to = column(block.start + block.size, width, total);
        let cell = match block.state {
            BlockState::Used => USED_CELL,
            BlockState::Free => FREE_CELL,
        };
        bar.extend(std::iter::repeat(cell).take((to - from).max(1)));
    }
    bar.push('|');

    let mut out = bar;
    for block in &blocks {
        let label = match &block.owner {
            Some(owner) => owner.to_string(),
            None => "Free".to_string(),
        };
        let _ = write!(
            out,
            "\n  {:>6}-{:<6} {} ({}KB)",
            block.start,
            block.start + block.size,
            label,
            block.size
        );
    }
    out
}

/// Bar column of `address`, widened so large capacities cannot overflow
fn column(address: usize, width: usize, total: usize) -> usize {
    (address as u128 * width as u128 / total as u128) as usize
}

/// Block table with one row per block, in address order
pub fn render_table(info: &impl MemoryInfo) -> String {
    let mut out = format!("{:>8} {:>8} {:<6} {}", "start", "size", "status", "process_id");
    for block in info.snapshot() {
        let owner = block.owner.as_ref().map_or("-", |o| o.as_str());
        let _ = write!(
            out,
            "\n{:>8} {:>8} {:<6} {}",
            block.start, block.size, block.state, owner
        );
    }
    out
}

/// External fragmentation and used-vs-total memory
pub fn render_metrics(info: &impl MemoryInfo) -> String {
    let stats = info.stats();
    format!(
        "External Fragmentation: {} KB\nTotal Used Memory: {} / {} KB",
        stats.external_fragmentation, stats.used_memory, stats.total_memory
    )
}

/// Detailed statistics, one per line
pub fn render_stats(info: &impl MemoryInfo) -> String {
    let stats = info.stats();
    format!(
        "total:         {} KB\n\
         used:          {} KB ({:.1}%)\n\
         free:          {} KB\n\
         used blocks:   {}\n\
         free blocks:   {}\n\
         largest free:  {} KB\n\
         fragmentation: {} KB\n\
         pressure:      {}",
        stats.total_memory,
        stats.used_memory,
        stats.usage_percentage,
        stats.free_memory,
        stats.used_blocks,
        stats.free_blocks,
        stats.largest_free_block,
        stats.external_fragmentation,
        stats.memory_pressure(),
    )
}
