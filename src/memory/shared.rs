/*!
 * Shared Allocator Handle
 * Lock-serialized access to one block-list allocator
 */

use super::manager::{
    Allocator, BlockAllocator, BlockSnapshot, MemoryInfo, MemoryResult, MemoryStats, Placement,
    Release, Strategy,
};
use crate::core::types::Size;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

/// Cloneable handle to a single allocator
///
/// Every operation holds the one exclusive lock for its whole duration, so
/// an allocate and a deallocate can never interleave on the block list.
#[derive(Debug, Clone)]
pub struct SharedAllocator {
    inner: Arc<Mutex<BlockAllocator>>,
}

impl SharedAllocator {
    pub fn new(allocator: BlockAllocator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(allocator)),
        }
    }

    pub fn with_capacity(total: Size) -> MemoryResult<Self> {
        Ok(Self::new(BlockAllocator::try_with_capacity(total)?))
    }

    pub fn allocate(&self, owner: &str, size: Size, strategy: Strategy) -> MemoryResult<Placement> {
        self.inner.lock().allocate(owner, size, strategy)
    }

    pub fn deallocate(&self, owner: &str) -> MemoryResult<Release> {
        self.inner.lock().deallocate(owner)
    }

    pub fn fragmentation(&self) -> Size {
        self.inner.lock().fragmentation()
    }

    pub fn snapshot(&self) -> Vec<BlockSnapshot> {
        self.inner.lock().snapshot()
    }

    pub fn stats(&self) -> MemoryStats {
        self.inner.lock().stats()
    }

    /// Replace the allocator with a fresh single-block instance of the same capacity
    pub fn reset(&self) {
        let mut guard = self.inner.lock();
        let capacity = guard.total_capacity();
        *guard = BlockAllocator::with_capacity(capacity);
        info!(capacity, "Shared allocator reset");
    }

    /// Run `f` with exclusive access, for multi-step reads that must be consistent
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut BlockAllocator) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

impl Allocator for SharedAllocator {
    fn allocate(&mut self, owner: &str, size: Size, strategy: Strategy) -> MemoryResult<Placement> {
        SharedAllocator::allocate(self, owner, size, strategy)
    }

    fn deallocate(&mut self, owner: &str) -> MemoryResult<Release> {
        SharedAllocator::deallocate(self, owner)
    }
}

impl MemoryInfo for SharedAllocator {
    fn total_capacity(&self) -> Size {
        self.inner.lock().total_capacity()
    }

    fn snapshot(&self) -> Vec<BlockSnapshot> {
        SharedAllocator::snapshot(self)
    }

    fn fragmentation(&self) -> Size {
        SharedAllocator::fragmentation(self)
    }

    fn stats(&self) -> MemoryStats {
        SharedAllocator::stats(self)
    }
}
