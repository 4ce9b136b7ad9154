//! Generic tests for every heap orientation
//!
//! The helpers take any [`PriorityQueue`] plus the order it should produce,
//! and are run against min-, max- and custom-comparator heaps.

use comparator_heap::compare::{Natural, Reversed};
use comparator_heap::{BinaryHeap, HeapError, MaxHeap, MinHeap, PriorityQueue};
use std::cmp::Ordering;

/// Test that an empty heap behaves correctly
fn test_empty_heap<H: PriorityQueue<i32>>(mut heap: H) {
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.try_pop(), Err(HeapError::Empty));
    assert_eq!(heap.len(), 0);
}

/// Test push then pop returns elements in `expected` order
fn test_basic_operations<H: PriorityQueue<i32>>(mut heap: H, expected: &[i32]) {
    for x in [5, 1, 10, 3] {
        heap.push(x);
    }

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&expected[0]));

    for want in expected {
        assert_eq!(heap.pop().as_ref(), Some(want));
    }
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test push_pop hands back items that would be popped immediately
fn test_push_pop_passthrough<H: PriorityQueue<i32>>(mut heap: H, extreme: i32) {
    assert_eq!(heap.push_pop(extreme), extreme);
    assert!(heap.is_empty());

    heap.push(0);
    let len_before = heap.len();
    assert_eq!(heap.push_pop(extreme), extreme);
    assert_eq!(heap.push_pop(0), 0);
    assert_eq!(heap.len(), len_before);
    assert_eq!(heap.peek(), Some(&0));
}

/// Test the checked entry points reject absent items without mutating
fn test_checked_entry_points<H: PriorityQueue<i32>>(mut heap: H) {
    heap.push(1);
    heap.push(2);

    assert_eq!(heap.push_checked(None), Err(HeapError::AbsentItem));
    assert_eq!(heap.push_pop_checked(None), Err(HeapError::AbsentItem));
    assert_eq!(heap.len(), 2);

    assert_eq!(heap.push_checked(Some(3)), Ok(()));
    assert_eq!(heap.len(), 3);
}

/// Test interleaved pushes and pops keep count at pushes minus pops
fn test_size_accounting<H: PriorityQueue<i32>>(mut heap: H) {
    let mut pushes = 0;
    let mut pops = 0;
    for round in 0..50 {
        heap.push(round * 7 % 13);
        pushes += 1;
        if round % 3 == 0 {
            assert!(heap.pop().is_some());
            pops += 1;
        }
        assert_eq!(heap.len(), pushes - pops);
    }
}

#[test]
fn test_empty_all_orientations() {
    test_empty_heap(BinaryHeap::<i32>::new_min());
    test_empty_heap(BinaryHeap::<i32, _>::new_max());
    test_empty_heap(BinaryHeap::with_comparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs())));
}

#[test]
fn test_basic_all_orientations() {
    test_basic_operations(BinaryHeap::new_min(), &[1, 3, 5, 10]);
    test_basic_operations(BinaryHeap::new_max(), &[10, 5, 3, 1]);
    test_basic_operations(
        BinaryHeap::with_comparator(|a: &i32, b: &i32| (a % 3, a).cmp(&(b % 3, b))),
        &[3, 1, 10, 5],
    );
}

#[test]
fn test_push_pop_all_orientations() {
    test_push_pop_passthrough(BinaryHeap::new_min(), -1);
    test_push_pop_passthrough(BinaryHeap::new_max(), 1);
}

#[test]
fn test_checked_all_orientations() {
    test_checked_entry_points(BinaryHeap::new_min());
    test_checked_entry_points(BinaryHeap::new_max());
}

#[test]
fn test_size_all_orientations() {
    test_size_accounting(BinaryHeap::new_min());
    test_size_accounting(BinaryHeap::new_max());
}

/// Deterministic shuffle so the scenario below is reproducible
fn shuffled(n: i32, seed: u64) -> Vec<i32> {
    let mut values: Vec<i32> = (0..n).collect();
    let mut state = seed;
    for i in (1..values.len()).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        values.swap(i, j);
    }
    values
}

#[test]
fn test_bounded_max_heap_keeps_ten_smallest() {
    for seed in [1, 42, 0xdead_beef] {
        let numbers = shuffled(1000, seed);
        let mut heap = BinaryHeap::from_vec_by(numbers[..10].to_vec(), Reversed::new(Natural));
        assert_eq!(heap.len(), 10);

        for &number in &numbers[10..] {
            heap.push_pop(number);
            assert_eq!(heap.len(), 10);
        }

        let mut drained: Vec<i32> = heap.iter_sorted().collect();
        drained.reverse();
        assert_eq!(drained, (0..10).collect::<Vec<_>>());
        assert_eq!(heap.len(), 10);

        for expected in (0..10).rev() {
            assert_eq!(heap.pop(), Some(expected));
        }
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.try_pop(), Err(HeapError::Empty));
    }
}

#[test]
fn test_rebuild_after_emptying() {
    let mut heap: MaxHeap<i32> = (0..5).collect();
    while heap.pop().is_some() {}
    assert!(heap.is_empty());

    for x in [1, 0, 4, 2, 6, 3, 8, 5, 7, 9] {
        heap.push(x);
    }
    let popped: Vec<_> = std::iter::from_fn(|| heap.pop()).take(10).collect();
    assert_eq!(popped, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_drain_is_sorted_and_non_destructive() {
    let heap: MinHeap<i32> = shuffled(200, 7).into();
    let snapshot = heap.clone();

    let drained: Vec<_> = heap.iter_sorted().collect();
    assert_eq!(drained.len(), 200);
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));

    // Extraction behaviour afterwards matches an untouched copy
    assert_eq!(heap.len(), snapshot.len());
    assert_eq!(heap.into_sorted_vec(), snapshot.into_sorted_vec());
}

#[test]
fn test_heapify_large_reverse_input() {
    let heap: MinHeap<i32> = (0..1000).rev().collect();
    assert!(heap.is_heap());
    assert_eq!(heap.peek(), Some(&0));

    let heap = BinaryHeap::from_iter_by(0..1000, Reversed::new(Natural));
    assert!(heap.is_heap());
    assert_eq!(heap.peek(), Some(&999));
}

#[test]
fn test_comparator_only_elements() {
    // Elements with no Ord impl at all
    #[derive(Debug, Clone, PartialEq)]
    struct Job {
        name: &'static str,
        cost: f64,
    }

    let by_cost = |a: &Job, b: &Job| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal);
    let jobs = vec![
        Job { name: "render", cost: 2.5 },
        Job { name: "lint", cost: 0.3 },
        Job { name: "deploy", cost: 9.0 },
        Job { name: "test", cost: 4.1 },
    ];

    let cheapest_first = BinaryHeap::from_vec_by(jobs.clone(), by_cost);
    let names: Vec<_> = cheapest_first.iter_sorted().map(|j| j.name).collect();
    assert_eq!(names, vec!["lint", "render", "test", "deploy"]);

    let mut costliest_first = BinaryHeap::max_by(by_cost);
    costliest_first.extend(jobs);
    assert_eq!(costliest_first.pop().map(|j| j.name), Some("deploy"));
    assert_eq!(costliest_first.peek().map(|j| j.name), Some("test"));
}

#[test]
fn test_string_elements() {
    let mut heap: MaxHeap<String> = MaxHeap::new();
    for word in ["pear", "apple", "quince", "fig"] {
        heap.push(word.to_string());
    }
    assert_eq!(heap.push_pop("zucchini".to_string()), "zucchini");
    assert_eq!(heap.push_pop("banana".to_string()), "quince");
    assert_eq!(
        heap.into_sorted_vec(),
        vec!["pear", "fig", "banana", "apple"]
    );
}
