//! Common traits and the error type shared by the wheel and the heap
//!
//! - [`HeapError`]: the single failure mode, reading from an empty structure
//! - [`Heap`]: a `BinaryHeap`-style mutable facade over persistent heaps

use std::fmt;

/// Error type for wheel and heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The operation reads or removes an element, but the structure is empty
    EmptyStructure,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyStructure => {
                write!(f, "operation requires a non-empty structure")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Persistent heaps implement it by replacing `self` with the new version
/// each operation returns, so earlier clones are left untouched.
///
/// # Example
///
/// ```rust
/// use persistent_fibonacci_heap::Heap;
/// use persistent_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(1) amortized for Fibonacci heaps.
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n) amortized for Fibonacci heaps.
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(1) for Fibonacci heaps.
    fn merge(&mut self, other: Self);
}
