/*!
 * Memory Types
 * Blocks, strategies, outcomes, and errors for the block-list allocator
 */

use crate::core::id::OwnerId;
use crate::core::limits::{
    PRESSURE_CRITICAL_THRESHOLD, PRESSURE_HIGH_THRESHOLD, PRESSURE_MEDIUM_THRESHOLD,
};
use crate::core::types::{Address, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// Every variant is a recoverable outcome: the allocator is left exactly as
/// it was before the failing call.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Not enough memory for Process {owner}: requested {requested}KB, largest free block {largest_free}KB")]
    #[diagnostic(
        code(memory::capacity_exhausted),
        help("No free block is large enough. Deallocate a process or request less memory.")
    )]
    CapacityExhausted {
        owner: OwnerId,
        requested: Size,
        largest_free: Size,
    },

    #[error("Process {0} not found")]
    #[diagnostic(
        code(memory::unknown_owner),
        help("The process holds no allocated block. It may never have been allocated or was already freed.")
    )]
    UnknownOwner(OwnerId),

    #[error("Process {owner} already holds a block at {start}KB")]
    #[diagnostic(
        code(memory::duplicate_owner),
        help("A process may hold one block at a time. Deallocate it before allocating again.")
    )]
    DuplicateOwner { owner: OwnerId, start: Address },

    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(memory::invalid_argument),
        help("Provide a non-empty process ID and a size of at least 1KB.")
    )]
    InvalidArgument(String),

    #[error("Block list corruption detected at {start}KB: {reason}")]
    #[diagnostic(code(memory::corruption_detected))]
    CorruptionDetected { start: Address, reason: String },
}

/// Occupancy of a block
///
/// A `Used` block always carries its owner, so an owner-less allocation
/// cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "owner", rename_all = "snake_case")]
pub enum BlockStatus {
    Free,
    Used(OwnerId),
}

/// A contiguous region of the address space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub start: Address,
    pub size: Size,
    pub status: BlockStatus,
}

impl Block {
    pub fn free(start: Address, size: Size) -> Self {
        Self {
            start,
            size,
            status: BlockStatus::Free,
        }
    }

    pub fn used(start: Address, size: Size, owner: OwnerId) -> Self {
        Self {
            start,
            size,
            status: BlockStatus::Used(owner),
        }
    }

    /// One past the last address covered by this block
    #[inline]
    pub fn end(&self) -> Address {
        self.start + self.size
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self.status, BlockStatus::Free)
    }

    #[inline]
    pub fn owner(&self) -> Option<&OwnerId> {
        match &self.status {
            BlockStatus::Free => None,
            BlockStatus::Used(owner) => Some(owner),
        }
    }

    #[inline]
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner().map_or(false, |o| o.as_str() == owner)
    }

    pub fn state(&self) -> BlockState {
        match self.status {
            BlockStatus::Free => BlockState::Free,
            BlockStatus::Used(_) => BlockState::Used,
        }
    }
}

/// Payload-free block state, used by snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockState {
    Free,
    Used,
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BlockState::Free => write!(f, "free"),
            BlockState::Used => write!(f, "used"),
        }
    }
}

/// Flat, read-only view of a block for tables, charts, and JSON export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub start: Address,
    pub size: Size,
    pub state: BlockState,
    pub owner: Option<OwnerId>,
}

impl From<&Block> for BlockSnapshot {
    fn from(block: &Block) -> Self {
        Self {
            start: block.start,
            size: block.size,
            state: block.state(),
            owner: block.owner().cloned(),
        }
    }
}

/// Rule used to choose among qualifying free blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Lowest-addressed block that is large enough
    #[default]
    FirstFit,
    /// Block leaving the smallest remainder
    BestFit,
    /// Block leaving the largest remainder
    WorstFit,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::FirstFit, Strategy::BestFit, Strategy::WorstFit];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::FirstFit => write!(f, "First-Fit"),
            Strategy::BestFit => write!(f, "Best-Fit"),
            Strategy::WorstFit => write!(f, "Worst-Fit"),
        }
    }
}

impl FromStr for Strategy {
    type Err = MemoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "first" | "firstfit" => Ok(Strategy::FirstFit),
            "best" | "bestfit" => Ok(Strategy::BestFit),
            "worst" | "worstfit" => Ok(Strategy::WorstFit),
            _ => Err(MemoryError::InvalidArgument(format!(
                "unknown allocation strategy '{}' (expected first, best, or worst)",
                s
            ))),
        }
    }
}

/// Result of a successful allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub owner: OwnerId,
    pub start: Address,
    pub size: Size,
    /// Size of the free block split off behind the allocation, if any
    pub remainder: Option<Size>,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Allocated Process {} ({}KB).", self.owner, self.size)
    }
}

/// Result of a successful deallocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub owner: OwnerId,
    pub start: Address,
    pub size: Size,
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Deallocated Process {}.", self.owner)
    }
}

/// Display-ready outcome of an allocator call
///
/// `ok` is the programmatic result; `message` is only for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub ok: bool,
    pub message: String,
}

impl<T: fmt::Display> From<&MemoryResult<T>> for Outcome {
    fn from(result: &MemoryResult<T>) -> Self {
        match result {
            Ok(value) => Self {
                ok: true,
                message: format!("SUCCESS: {}", value),
            },
            Err(err) => Self {
                ok: false,
                message: format!("FAIL: {}.", err),
            },
        }
    }
}

impl<T: fmt::Display> From<MemoryResult<T>> for Outcome {
    fn from(result: MemoryResult<T>) -> Self {
        Self::from(&result)
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub free_memory: Size,
    pub usage_percentage: f64,
    pub used_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
    pub external_fragmentation: Size,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        MemoryPressure::from_ratio(self.usage_percentage / 100.0)
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= PRESSURE_CRITICAL_THRESHOLD {
            MemoryPressure::Critical
        } else if ratio >= PRESSURE_HIGH_THRESHOLD {
            MemoryPressure::High
        } else if ratio >= PRESSURE_MEDIUM_THRESHOLD {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
