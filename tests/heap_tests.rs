//! Comprehensive scenario tests for the binomial heap
//!
//! These tests exercise the public API with deterministic operation
//! sequences: basic insert/extract cycles, merges of heaps in various size
//! combinations, deep-copy independence, and underflow handling.

use binomial_heap::{BinomialHeap, HeapError};

/// Drains the heap, returning the keys in extraction order
fn drain<K: Ord>(heap: &mut BinomialHeap<K>) -> Vec<K> {
    let mut out = Vec::new();
    while let Ok(key) = heap.extract_min() {
        out.push(key);
    }
    out
}

#[test]
fn empty_heap_behaves() {
    let mut heap: BinomialHeap<i32> = BinomialHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.get_min(), Err(HeapError::Underflow));
    assert_eq!(heap.extract_min(), Err(HeapError::Underflow));
}

#[test]
fn insert_then_extract_sorts() {
    let mut heap = BinomialHeap::new();
    for key in [5, 3, 8, 1, 9, 2] {
        heap.insert(key);
    }

    assert_eq!(heap.len(), 6);
    assert_eq!(heap.get_min(), Ok(&1));
    assert_eq!(drain(&mut heap), vec![1, 2, 3, 5, 8, 9]);
    assert!(heap.is_empty());
}

#[test]
fn min_tracks_every_insert() {
    let mut heap = BinomialHeap::new();
    let keys = [50, 30, 70, 10, 90, 20, 60];
    let mut running_min = i32::MAX;

    for (i, key) in keys.into_iter().enumerate() {
        heap.insert(key);
        running_min = running_min.min(key);
        assert_eq!(heap.len(), i + 1);
        assert_eq!(heap.get_min(), Ok(&running_min));
    }
}

#[test]
fn duplicate_keys_all_come_back() {
    let mut heap = BinomialHeap::new();
    for _ in 0..5 {
        heap.insert(1);
    }
    heap.insert(0);
    heap.insert(2);

    assert_eq!(drain(&mut heap), vec![0, 1, 1, 1, 1, 1, 2]);
}

#[test]
fn ascending_insertion_drains_in_order() {
    let mut heap: BinomialHeap<i32> = (0..100).collect();
    assert_eq!(heap.len(), 100);
    assert_eq!(drain(&mut heap), (0..100).collect::<Vec<_>>());
}

#[test]
fn descending_insertion_drains_in_order() {
    let mut heap: BinomialHeap<i32> = (0..100).rev().collect();
    assert_eq!(heap.len(), 100);
    assert_eq!(drain(&mut heap), (0..100).collect::<Vec<_>>());
}

#[test]
fn interleaved_insert_and_extract() {
    let mut heap = BinomialHeap::new();

    heap.insert(4);
    heap.insert(7);
    assert_eq!(heap.extract_min(), Ok(4));

    heap.insert(2);
    heap.insert(9);
    assert_eq!(heap.extract_min(), Ok(2));
    assert_eq!(heap.extract_min(), Ok(7));

    heap.insert(1);
    assert_eq!(drain(&mut heap), vec![1, 9]);
}

#[test]
fn merge_combines_size_and_min() {
    let mut a = BinomialHeap::new();
    for key in [5, 9, 12] {
        a.insert(key);
    }
    let mut b = BinomialHeap::new();
    for key in [3, 7, 10, 15] {
        b.insert(key);
    }

    a.merge(b);
    assert_eq!(a.len(), 7);
    assert_eq!(a.get_min(), Ok(&3));
    assert_eq!(drain(&mut a), vec![3, 5, 7, 9, 10, 12, 15]);
}

#[test]
fn merge_empty_into_populated_is_identity() {
    let mut heap: BinomialHeap<i32> = [6, 2, 8, 4].into_iter().collect();
    heap.merge(BinomialHeap::new());

    assert_eq!(heap.len(), 4);
    assert_eq!(heap.get_min(), Ok(&2));
    assert_eq!(drain(&mut heap), vec![2, 4, 6, 8]);
}

#[test]
fn merge_populated_into_empty_is_identity() {
    let mut heap = BinomialHeap::new();
    heap.merge([6, 2, 8, 4].into_iter().collect::<BinomialHeap<_>>());

    assert_eq!(heap.len(), 4);
    assert_eq!(heap.get_min(), Ok(&2));
    assert_eq!(drain(&mut heap), vec![2, 4, 6, 8]);
}

#[test]
fn merge_two_empty_heaps() {
    let mut heap: BinomialHeap<i32> = BinomialHeap::new();
    heap.merge(BinomialHeap::new());
    assert!(heap.is_empty());
    assert_eq!(heap.get_min(), Err(HeapError::Underflow));
}

#[test]
fn merge_many_small_heaps() {
    let mut total = BinomialHeap::new();
    for chunk_start in (0..60).step_by(6) {
        let chunk: BinomialHeap<i32> = (chunk_start..chunk_start + 6).rev().collect();
        total.merge(chunk);
    }

    assert_eq!(total.len(), 60);
    assert_eq!(drain(&mut total), (0..60).collect::<Vec<_>>());
}

#[test]
fn clone_is_a_deep_copy() {
    let original: BinomialHeap<i32> = [5, 1, 7, 3].into_iter().collect();
    let mut copy = original.clone();

    // Mutating the copy must not disturb the original
    assert_eq!(copy.extract_min(), Ok(1));
    copy.insert(0);
    copy.insert(100);

    assert_eq!(original.len(), 4);
    assert_eq!(original.get_min(), Ok(&1));

    let mut original = original;
    assert_eq!(drain(&mut original), vec![1, 3, 5, 7]);
    assert_eq!(drain(&mut copy), vec![0, 3, 5, 7, 100]);
}

#[test]
fn clone_of_empty_heap() {
    let original: BinomialHeap<i32> = BinomialHeap::new();
    let mut copy = original.clone();
    copy.insert(1);

    assert!(original.is_empty());
    assert_eq!(copy.len(), 1);
}

#[test]
fn works_with_non_copy_keys() {
    let mut heap = BinomialHeap::new();
    for name in ["pear", "apple", "quince", "banana"] {
        heap.insert(name.to_string());
    }

    assert_eq!(heap.get_min().map(String::as_str), Ok("apple"));
    assert_eq!(
        drain(&mut heap),
        vec!["apple", "banana", "pear", "quince"]
    );
}

#[test]
fn extract_across_power_of_two_boundaries() {
    // Sizes around 2^k force the longest carry chains and the deepest decays
    for n in [1, 2, 3, 4, 7, 8, 9, 15, 16, 17, 31, 32, 33] {
        let mut heap: BinomialHeap<i32> = (0..n).rev().collect();
        assert_eq!(heap.len(), n as usize);
        assert_eq!(drain(&mut heap), (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn heap_sort_large() {
    // A fixed pseudo-random permutation, drained through the heap
    let mut keys: Vec<u64> = (0..1000u64).map(|i| (i * 2654435761) % 1000).collect();
    let mut heap: BinomialHeap<u64> = keys.iter().copied().collect();

    keys.sort_unstable();
    assert_eq!(drain(&mut heap), keys);
}
