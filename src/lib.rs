//! Mergeable binomial-heap priority queue
//!
//! This crate provides a binomial heap: a forest of binomial trees acting as
//! a min-priority queue with O(log n) insert, extract-min and merge, plus
//! decrease-key and delete addressed by key value rather than by handle.
//!
//! # Features
//!
//! - **Binomial Heap**: the real implementation — O(log n) insert,
//!   extract-min and merge; key search plus O(log n) sift for decrease-key
//!   and delete
//! - **Simple Binary Heap**: an array-backed baseline implementing the same
//!   contract, used as a differential oracle in tests
//! - **`PriorityQueue` trait**: the capability contract both implement, with
//!   a factory function for callers that only care about the contract
//!
//! # Example
//!
//! ```rust
//! use binomial_queue::binomial::BinomialHeap;
//! use binomial_queue::PriorityQueue;
//!
//! let mut heap = BinomialHeap::new();
//! heap.insert(10);
//! heap.insert(20);
//! heap.insert(5);
//! assert_eq!(heap.peek(), Some(&5));
//!
//! let mut other = BinomialHeap::new();
//! other.insert(1);
//! heap.merge(other);
//! assert_eq!(heap.extract_min(), Some(1));
//! assert_eq!(heap.extract_min(), Some(5));
//! ```

pub mod binomial;
pub mod simple_binary;
pub mod traits;

// Re-export the contract for convenience
pub use traits::{HeapError, PriorityQueue};

/// Produces a fresh empty priority queue backed by the binomial heap
///
/// For callers that program against [`PriorityQueue`] alone and leave the
/// implementation choice to the crate.
///
/// ```rust
/// use binomial_queue::PriorityQueue;
///
/// let mut queue = binomial_queue::create_priority_queue();
/// queue.insert(2);
/// queue.insert(1);
/// assert_eq!(queue.extract_min(), Some(1));
/// ```
pub fn create_priority_queue<K: Ord>() -> impl PriorityQueue<K> {
    binomial::BinomialHeap::new()
}
