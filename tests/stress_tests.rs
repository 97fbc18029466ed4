//! Stress tests that push the queues through large workloads
//!
//! These tests perform large numbers of operations in various patterns to
//! catch edge cases that only show up under load. All sequences are
//! deterministic so failures reproduce.

use binomial_queue::binomial::BinomialHeap;
use binomial_queue::simple_binary::SimpleBinaryHeap;
use binomial_queue::PriorityQueue;

/// Small deterministic generator for mixed workloads
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

/// Ascending inserts drain back in the same order
fn test_ascending_insert_drain<H: PriorityQueue<i32>>() {
    let mut queue = H::new();
    for i in 0..1000 {
        queue.insert(i);
    }
    assert_eq!(queue.len(), 1000);
    for i in 0..1000 {
        assert_eq!(queue.extract_min(), Some(i));
    }
    assert!(queue.is_empty());
}

/// Descending inserts still drain ascending
fn test_descending_insert_drain<H: PriorityQueue<i32>>() {
    let mut queue = H::new();
    for i in (0..1000).rev() {
        queue.insert(i);
    }
    for i in 0..1000 {
        assert_eq!(queue.extract_min(), Some(i));
    }
}

/// Alternating insert/extract keeps the queue consistent
fn test_alternating_ops<H: PriorityQueue<i32>>() {
    let mut queue = H::new();
    for i in 0..200 {
        queue.insert(i * 2);
        queue.insert(i * 2 + 1);
        assert!(queue.extract_min().is_some());
    }
    assert_eq!(queue.len(), 200);

    let mut last = i32::MIN;
    while let Some(key) = queue.extract_min() {
        assert!(key >= last);
        last = key;
    }
}

/// Merge two large queues and verify the drain stays sorted and complete
fn test_large_merge<H: PriorityQueue<i32>>() {
    let mut evens = H::new();
    let mut odds = H::new();
    for i in 0..500 {
        evens.insert(i * 2);
        odds.insert(i * 2 + 1);
    }

    evens.merge(odds);
    assert_eq!(evens.len(), 1000);

    for i in 0..1000 {
        assert_eq!(evens.extract_min(), Some(i));
    }
}

/// Decrease every key and verify the new ordering wins
fn test_many_decrease_keys<H: PriorityQueue<i32>>() {
    let mut queue = H::new();
    for i in 0..300 {
        queue.insert(10_000 + i);
    }

    // reverse the ordering: the largest original key becomes the smallest
    for i in 0..300 {
        queue.decrease_key(&(10_000 + i), 300 - i).unwrap();
    }

    for i in 1..=300 {
        assert_eq!(queue.extract_min(), Some(i));
    }
    assert!(queue.is_empty());
}

/// Delete every other key, then drain what remains
fn test_delete_half<H: PriorityQueue<i32>>() {
    let mut queue = H::new();
    for i in 0..400 {
        queue.insert(i);
    }
    for i in (0..400).step_by(2) {
        queue.delete(&i).unwrap();
    }
    assert_eq!(queue.len(), 200);

    for i in (1..400).step_by(2) {
        assert_eq!(queue.extract_min(), Some(i));
    }
    assert!(queue.is_empty());
}

/// Long pseudo-random mixed workload against a sorted-drain check
fn test_mixed_workload<H: PriorityQueue<i32>>() {
    let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);
    let mut queue = H::new();
    let mut live = 0usize;

    for _ in 0..5000 {
        if rng.next() % 3 == 0 && live > 0 {
            assert!(queue.extract_min().is_some());
            live -= 1;
        } else {
            queue.insert((rng.next() % 10_000) as i32);
            live += 1;
        }
        assert_eq!(queue.len(), live);
    }

    let mut last = i32::MIN;
    while let Some(key) = queue.extract_min() {
        assert!(key >= last);
        last = key;
    }
}

/// Repeatedly merge small queues into one accumulator
fn test_accumulating_merges<H: PriorityQueue<i32>>() {
    let mut accumulator = H::new();
    for round in 0..100 {
        let mut batch = H::new();
        for i in 0..10 {
            batch.insert(round * 10 + i);
        }
        accumulator.merge(batch);
    }

    assert_eq!(accumulator.len(), 1000);
    for i in 0..1000 {
        assert_eq!(accumulator.extract_min(), Some(i));
    }
}

macro_rules! stress_tests {
    ($modname:ident, $queue:ty) => {
        mod $modname {
            use super::*;

            #[test]
            fn ascending_insert_drain() {
                test_ascending_insert_drain::<$queue>();
            }

            #[test]
            fn descending_insert_drain() {
                test_descending_insert_drain::<$queue>();
            }

            #[test]
            fn alternating_ops() {
                test_alternating_ops::<$queue>();
            }

            #[test]
            fn large_merge() {
                test_large_merge::<$queue>();
            }

            #[test]
            fn many_decrease_keys() {
                test_many_decrease_keys::<$queue>();
            }

            #[test]
            fn delete_half() {
                test_delete_half::<$queue>();
            }

            #[test]
            fn mixed_workload() {
                test_mixed_workload::<$queue>();
            }

            #[test]
            fn accumulating_merges() {
                test_accumulating_merges::<$queue>();
            }
        }
    };
}

stress_tests!(binomial, BinomialHeap<i32>);
stress_tests!(simple_binary, SimpleBinaryHeap<i32>);
