//! The priority-queue capability trait shared by all queue implementations
//!
//! [`PriorityQueue`] is the contract the rest of the crate is written
//! against: keyed insertion, minimum extraction, decrease/delete by key, and
//! consuming merge. [`crate::binomial::BinomialHeap`] is the real
//! implementation; [`crate::simple_binary::SimpleBinaryHeap`] implements the
//! same contract by linear scan and serves as a correctness oracle in tests.

use std::fmt;

/// Error type for fallible queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The requested key is not present in the queue
    KeyNotFound,
    /// The new key is greater than the current key
    KeyNotDecreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::KeyNotFound => {
                write!(f, "key is not present in the queue")
            }
            HeapError::KeyNotDecreased => {
                write!(f, "new key is greater than the current key")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A mergeable min-priority queue over a single ordered key
///
/// Unlike Rust's standard `BinaryHeap`, these queues are min-first, support
/// merging two queues, and can decrease or delete an element addressed by
/// its key rather than by position. Keys are not required to be unique; when
/// duplicates exist, key-addressed operations act on the first matching
/// element the queue's own search order encounters.
///
/// # Example
///
/// ```rust
/// use binomial_queue::PriorityQueue;
/// use binomial_queue::binomial::BinomialHeap;
///
/// let mut queue = BinomialHeap::new();
/// queue.insert(3);
/// queue.insert(1);
/// queue.insert(2);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.extract_min(), Some(1));
/// assert_eq!(queue.extract_min(), Some(2));
/// ```
pub trait PriorityQueue<K: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue holds no keys
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the queue
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(log n) for the binomial heap, O(log n) for the binary oracle.
    fn insert(&mut self, key: K);

    /// Returns the minimum key without removing it, or `None` if empty
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the minimum key, or `None` if empty
    ///
    /// When several elements hold the minimum key, the earliest root in the
    /// queue's internal order is taken first.
    fn extract_min(&mut self) -> Option<K>;

    /// Lowers the key of one element currently holding `key` to `new_key`
    ///
    /// # Errors
    /// Returns [`HeapError::KeyNotFound`] if no element holds `key`, and
    /// [`HeapError::KeyNotDecreased`] if `new_key` is greater than `key`;
    /// in both cases the queue is unchanged. `new_key == key` is accepted
    /// as a no-op decrease.
    fn decrease_key(&mut self, key: &K, new_key: K) -> Result<(), HeapError>;

    /// Removes one element currently holding `key`
    ///
    /// # Errors
    /// Returns [`HeapError::KeyNotFound`] if no element holds `key`.
    fn delete(&mut self, key: &K) -> Result<(), HeapError>;

    /// Merges another queue into this one, consuming the other queue
    ///
    /// # Time Complexity
    /// O(log n) for the binomial heap, O(n log n) for the binary oracle.
    fn merge(&mut self, other: Self);

    /// Renders the queue's internal tree layout as text
    ///
    /// Debugging aid only; the format is informal and not meant to be
    /// parsed back.
    fn to_debug_string(&self) -> String
    where
        K: fmt::Debug;
}
