/*!
 * Block Allocator Tests
 * Allocation, deallocation, and failure handling
 */

use memsim::memory::{Block, BlockAllocator, MemoryError, Strategy};
use memsim::OwnerId;
use pretty_assertions::assert_eq;

fn used(start: usize, size: usize, owner: &str) -> Block {
    Block::used(start, size, OwnerId::from(owner))
}

#[test]
fn test_new_allocator_is_one_free_block() {
    let allocator = BlockAllocator::with_capacity(1024);
    assert_eq!(allocator.blocks(), &[Block::free(0, 1024)]);
    assert_eq!(allocator.total_capacity(), 1024);
    assert_eq!(allocator.used_memory(), 0);
    assert_eq!(allocator.fragmentation(), 0);
    assert!(allocator.check_invariants().is_ok());
}

#[test]
fn test_default_capacity() {
    assert_eq!(BlockAllocator::new().total_capacity(), 1024);
    assert_eq!(BlockAllocator::default(), BlockAllocator::new());
}

#[test]
fn test_zero_capacity_rejected() {
    assert!(matches!(
        BlockAllocator::try_with_capacity(0),
        Err(MemoryError::InvalidArgument(_))
    ));
}

#[test]
fn test_allocation_splits_block() {
    let mut allocator = BlockAllocator::with_capacity(1024);
    let placement = allocator.allocate("P1", 300, Strategy::FirstFit).unwrap();

    assert_eq!(placement.owner, "P1");
    assert_eq!(placement.start, 0);
    assert_eq!(placement.size, 300);
    assert_eq!(placement.remainder, Some(724));
    assert_eq!(allocator.blocks(), &[used(0, 300, "P1"), Block::free(300, 724)]);
}

#[test]
fn test_exact_fit_adds_no_block() {
    let mut allocator = BlockAllocator::with_capacity(512);
    let placement = allocator.allocate("P1", 512, Strategy::BestFit).unwrap();

    assert_eq!(placement.remainder, None);
    assert_eq!(allocator.blocks(), &[used(0, 512, "P1")]);
    assert_eq!(allocator.fragmentation(), 0);
    assert_eq!(allocator.largest_free_block(), 0);
}

#[test]
fn test_capacity_exhausted_leaves_blocks_unchanged() {
    let mut allocator = BlockAllocator::with_capacity(1024);
    allocator.allocate("P1", 600, Strategy::FirstFit).unwrap();
    let before = allocator.clone();

    for strategy in Strategy::ALL {
        let err = allocator.allocate("P2", 500, strategy).unwrap_err();
        assert_eq!(
            err,
            MemoryError::CapacityExhausted {
                owner: OwnerId::from("P2"),
                requested: 500,
                largest_free: 424,
            }
        );
        assert_eq!(allocator, before);
    }
}

#[test]
fn test_exhaustion_despite_enough_total_free() {
    // 60KB free in total but split across two 30KB holes
    let mut allocator = BlockAllocator::with_capacity(100);
    allocator.allocate("A", 30, Strategy::FirstFit).unwrap();
    allocator.allocate("B", 20, Strategy::FirstFit).unwrap();
    allocator.allocate("C", 30, Strategy::FirstFit).unwrap();
    allocator.allocate("D", 20, Strategy::FirstFit).unwrap();
    allocator.deallocate("A").unwrap();
    allocator.deallocate("C").unwrap();

    assert_eq!(allocator.free_memory(), 60);
    assert!(matches!(
        allocator.allocate("E", 40, Strategy::WorstFit),
        Err(MemoryError::CapacityExhausted { largest_free: 30, .. })
    ));
}

#[test]
fn test_unknown_owner_leaves_blocks_unchanged() {
    let mut allocator = BlockAllocator::with_capacity(1024);
    allocator.allocate("P1", 100, Strategy::FirstFit).unwrap();
    let before = allocator.clone();

    let err = allocator.deallocate("P404").unwrap_err();
    assert_eq!(err, MemoryError::UnknownOwner(OwnerId::from("P404")));
    assert_eq!(allocator, before);
}

#[test]
fn test_double_deallocation_fails() {
    let mut allocator = BlockAllocator::with_capacity(1024);
    allocator.allocate("P1", 100, Strategy::FirstFit).unwrap();
    allocator.deallocate("P1").unwrap();

    assert!(matches!(
        allocator.deallocate("P1"),
        Err(MemoryError::UnknownOwner(_))
    ));
}

#[test]
fn test_duplicate_owner_rejected() {
    let mut allocator = BlockAllocator::with_capacity(1024);
    allocator.allocate("P1", 100, Strategy::FirstFit).unwrap();
    let before = allocator.clone();

    let err = allocator.allocate("P1", 50, Strategy::BestFit).unwrap_err();
    assert_eq!(
        err,
        MemoryError::DuplicateOwner {
            owner: OwnerId::from("P1"),
            start: 0,
        }
    );
    assert_eq!(allocator, before);

    // Once freed, the same ID may allocate again
    allocator.deallocate("P1").unwrap();
    assert!(allocator.allocate("P1", 50, Strategy::BestFit).is_ok());
}

#[test]
fn test_invalid_arguments_rejected_before_scan() {
    let mut allocator = BlockAllocator::with_capacity(64);
    let before = allocator.clone();

    assert!(matches!(
        allocator.allocate("", 10, Strategy::FirstFit),
        Err(MemoryError::InvalidArgument(_))
    ));
    assert!(matches!(
        allocator.allocate("P1", 0, Strategy::FirstFit),
        Err(MemoryError::InvalidArgument(_))
    ));
    // Invalid size wins over capacity: nothing is scanned
    assert!(matches!(
        allocator.allocate("", 1000, Strategy::FirstFit),
        Err(MemoryError::InvalidArgument(_))
    ));
    assert_eq!(allocator, before);
}

#[test]
fn test_deallocation_frees_owner_block() {
    let mut allocator = BlockAllocator::with_capacity(1024);
    allocator.allocate("P1", 300, Strategy::FirstFit).unwrap();
    allocator.allocate("P2", 200, Strategy::FirstFit).unwrap();

    let release = allocator.deallocate("P1").unwrap();
    assert_eq!(release.owner, "P1");
    assert_eq!(release.start, 0);
    assert_eq!(release.size, 300);
    assert!(allocator.owner_block("P1").is_none());
    assert_eq!(allocator.owner_block("P2").map(|b| b.start), Some(300));
}

#[test]
fn test_deallocation_merges_both_neighbours() {
    let mut allocator = BlockAllocator::with_capacity(300);
    allocator.allocate("A", 100, Strategy::FirstFit).unwrap();
    allocator.allocate("B", 100, Strategy::FirstFit).unwrap();
    allocator.allocate("C", 100, Strategy::FirstFit).unwrap();
    allocator.deallocate("A").unwrap();
    allocator.deallocate("C").unwrap();
    assert_eq!(allocator.blocks().len(), 3);

    allocator.deallocate("B").unwrap();
    assert_eq!(allocator.blocks(), &[Block::free(0, 300)]);
}

#[test]
fn test_release_reports_block_before_merge() {
    let mut allocator = BlockAllocator::with_capacity(300);
    allocator.allocate("A", 100, Strategy::FirstFit).unwrap();
    allocator.allocate("B", 100, Strategy::FirstFit).unwrap();
    allocator.deallocate("A").unwrap();

    let release = allocator.deallocate("B").unwrap();
    assert_eq!(release.owner, OwnerId::from("B"));
    assert_eq!((release.start, release.size), (100, 100));
    assert_eq!(release.to_string(), "Deallocated Process B.");
    assert_eq!(allocator.blocks(), &[Block::free(0, 300)]);
}

#[test]
fn test_round_trip_restores_layout() {
    let mut allocator = BlockAllocator::with_capacity(1024);
    allocator.allocate("P1", 128, Strategy::FirstFit).unwrap();
    allocator.allocate("P2", 256, Strategy::FirstFit).unwrap();
    allocator.deallocate("P1").unwrap();
    let before = allocator.clone();

    for strategy in Strategy::ALL {
        allocator.allocate("P3", 64, strategy).unwrap();
        allocator.deallocate("P3").unwrap();
        assert_eq!(allocator, before, "{}", strategy);
    }
}

#[test]
fn test_snapshot_matches_blocks() {
    let mut allocator = BlockAllocator::with_capacity(1024);
    allocator.allocate("P1", 300, Strategy::FirstFit).unwrap();

    let snapshot = allocator.snapshot();
    assert_eq!(snapshot.len(), allocator.blocks().len());
    for (view, block) in snapshot.iter().zip(allocator.blocks()) {
        assert_eq!(view.start, block.start);
        assert_eq!(view.size, block.size);
        assert_eq!(view.state, block.state());
        assert_eq!(view.owner.as_ref(), block.owner());
    }
}

#[test]
fn test_stats() {
    let mut allocator = BlockAllocator::with_capacity(1000);
    allocator.allocate("A", 100, Strategy::FirstFit).unwrap();
    allocator.allocate("B", 700, Strategy::FirstFit).unwrap();
    allocator.allocate("C", 150, Strategy::FirstFit).unwrap();
    allocator.deallocate("A").unwrap();

    let stats = allocator.stats();
    assert_eq!(stats.total_memory, 1000);
    assert_eq!(stats.used_memory, 850);
    assert_eq!(stats.free_memory, 150);
    assert_eq!(stats.used_blocks, 2);
    assert_eq!(stats.free_blocks, 2);
    assert_eq!(stats.largest_free_block, 100);
    assert_eq!(stats.external_fragmentation, 50);
    assert!((stats.usage_percentage - 85.0).abs() < 1e-9);
    assert_eq!(stats.memory_pressure(), memsim::memory::MemoryPressure::High);
}
