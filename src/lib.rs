//! Persistent Fibonacci Heap for Rust
//!
//! This crate provides a purely functional Fibonacci heap: every operation
//! returns a new heap and leaves its input untouched, sharing unchanged
//! structure between versions.
//!
//! # Features
//!
//! - **Fibonacci Heap**: O(1) amortized insert, union and minimum; O(log n)
//!   amortized extract_min
//! - **Wheel**: the persistent circular list the heap keeps its roots on, with
//!   amortized O(1) rotation in both directions
//!
//! Decrease-key and arbitrary deletion are not supported.
//!
//! # Cargo Features
//!
//! - `tracing`: emit `trace`-level spans and events during consolidation
//!
//! # Example
//!
//! ```rust
//! use persistent_fibonacci_heap::fibonacci::FibonacciHeap;
//! use persistent_fibonacci_heap::HeapError;
//!
//! let heap = FibonacciHeap::new().insert(5).insert(3).insert(7);
//! assert_eq!(heap.minimum(), Ok(&3));
//!
//! let (min, rest) = heap.extract_min()?;
//! assert_eq!(min, 3);
//! assert_eq!(rest.len(), 2);
//!
//! let empty: FibonacciHeap<i32> = FibonacciHeap::new();
//! assert_eq!(empty.minimum(), Err(HeapError::EmptyStructure));
//! # Ok::<(), HeapError>(())
//! ```

pub mod degree;
pub mod fibonacci;
pub mod stack;
pub mod traits;
pub mod wheel;

// Re-export the main types for convenience
pub use fibonacci::FibonacciHeap;
pub use traits::{Heap, HeapError};
pub use wheel::Wheel;
