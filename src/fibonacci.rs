//! Persistent Fibonacci Heap implementation
//!
//! A Fibonacci heap is a collection of heap-ordered trees whose roots sit on a
//! circular list, the root wheel. The head of the root wheel is always the
//! minimum:
//! - O(1) amortized insert, union and minimum
//! - O(log n) amortized extract_min
//!
//! All work is deferred to `extract_min`. Inserting and merging only splice
//! roots onto the wheel; extraction promotes the minimum's children to roots
//! and then *consolidates*, linking roots of equal degree until every degree
//! appears at most once.
//!
//! # Differences from the Classical Fibonacci Heap
//!
//! - Purely functional (persistent): every operation returns a new heap and
//!   leaves its inputs intact, sharing unchanged structure through `Rc`
//! - No decrease_key or delete, so there are no parent pointers and no
//!   marked nodes
//!
//! # Example
//!
//! ```rust
//! use persistent_fibonacci_heap::fibonacci::FibonacciHeap;
//!
//! let heap = FibonacciHeap::new().insert(10).insert(20).insert(5);
//! assert_eq!(heap.minimum(), Ok(&5));
//!
//! let (min, rest) = heap.extract_min().unwrap();
//! assert_eq!(min, 5);
//! assert_eq!(rest.minimum(), Ok(&10));
//!
//! // The original heap is unchanged
//! assert_eq!(heap.len(), 3);
//! ```

use crate::degree::{checked_increment, max_degree_bound, Degree};
use crate::traits::{Heap, HeapError};
use crate::wheel::Wheel;
use smallvec::SmallVec;
use std::fmt;

/// A heap-ordered tree: a root value and the sub-heap of its children
///
/// `degree` is the number of children, i.e. the length of
/// `children`'s root wheel.
#[derive(Clone, Debug)]
struct Tree<T> {
    value: T,
    degree: Degree,
    children: FibonacciHeap<T>,
}

impl<T> Tree<T> {
    fn singleton(value: T) -> Self {
        Tree {
            value,
            degree: 0,
            children: FibonacciHeap::new(),
        }
    }

    /// Number of values in this tree
    fn size(&self) -> usize {
        self.children.len + 1
    }
}

impl<T: Ord + Clone> Tree<T> {
    /// Link two trees of equal degree
    ///
    /// The tree with the smaller root becomes the parent; ties keep `self`
    /// as parent.
    fn link(self, other: Self) -> Self {
        debug_assert_eq!(self.degree, other.degree);
        let (mut parent, child) = if self.value <= other.value {
            (self, other)
        } else {
            (other, self)
        };
        parent.children = parent.children.adopt(child);
        parent.degree = checked_increment(parent.degree);
        parent
    }
}

/// Insert `tree` into a root wheel, keeping the minimum at the head
///
/// The new tree is placed at the head. If it is not at least as small as the
/// current head, the wheel is rotated once so the old head is back in front.
fn insert_root<T: Ord + Clone>(roots: &Wheel<Tree<T>>, tree: Tree<T>) -> Wheel<Tree<T>> {
    let becomes_head = match roots.head() {
        Ok(min) => tree.value <= min.value,
        Err(HeapError::EmptyStructure) => true,
    };
    let roots = roots.insert_head(tree);
    if becomes_head {
        roots
    } else {
        roots.rotate_right()
    }
}

/// Consolidation table: slot `d` holds the one tree of degree `d`, if any
type DegreeTable<T> = SmallVec<[Option<Tree<T>>; 16]>;

/// Put `tree` into its degree slot, linking with occupants until a free
/// slot is found
fn place<T: Ord + Clone>(table: &mut DegreeTable<T>, mut tree: Tree<T>) {
    loop {
        let slot = usize::from(tree.degree);
        while table.len() <= slot {
            table.push(None);
        }
        match table[slot].take() {
            None => {
                table[slot] = Some(tree);
                return;
            }
            Some(occupant) => tree = tree.link(occupant),
        }
    }
}

/// Persistent Fibonacci Heap
///
/// Cloning is O(1): clones share all of their structure.
///
/// # Example
///
/// ```rust
/// use persistent_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let a: FibonacciHeap<i32> = [1, 3].into_iter().collect();
/// let b: FibonacciHeap<i32> = [2, 4].into_iter().collect();
///
/// let merged = a.union(&b);
/// assert_eq!(merged.len(), 4);
/// assert_eq!(merged.into_sorted_vec(), vec![1, 2, 3, 4]);
/// ```
pub struct FibonacciHeap<T> {
    /// Number of values in the whole heap, roots and descendants
    len: usize,
    roots: Wheel<Tree<T>>,
}

impl<T> FibonacciHeap<T> {
    /// Create a new empty heap
    pub fn new() -> Self {
        FibonacciHeap {
            len: 0,
            roots: Wheel::new(),
        }
    }

    /// Check if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Find the minimum element - O(1)
    pub fn minimum(&self) -> Result<&T, HeapError> {
        self.roots.head().map(|tree| &tree.value)
    }

    /// Peek at the minimum element
    pub fn peek(&self) -> Option<&T> {
        self.minimum().ok()
    }

    /// Degrees of the root trees, head first
    pub fn root_degrees(&self) -> Vec<Degree> {
        self.roots.iter().map(|tree| tree.degree).collect()
    }
}

impl<T: Ord> FibonacciHeap<T> {
    /// Verifies the internal structure of the heap
    ///
    /// Checks, recursively through every sub-heap, that:
    /// - the root wheel's head holds the smallest root value
    /// - every tree's degree equals the size of its children's root wheel
    /// - no child is smaller than its parent
    /// - `len` equals the number of values actually stored
    pub fn verify_internal_structure(&self) -> bool {
        let head = match self.roots.head() {
            Ok(head) => head,
            Err(HeapError::EmptyStructure) => return self.len == 0,
        };

        let mut total = 0;
        for tree in self.roots.iter() {
            if tree.value < head.value {
                return false;
            }
            if usize::from(tree.degree) != tree.children.roots.len() {
                return false;
            }
            if let Ok(child_min) = tree.children.minimum() {
                if *child_min < tree.value {
                    return false;
                }
            }
            if !tree.children.verify_internal_structure() {
                return false;
            }
            total += tree.size();
        }
        total == self.len
    }
}

impl<T: Ord + Clone> FibonacciHeap<T> {
    /// Insert an element - O(1)
    pub fn insert(&self, value: T) -> Self {
        self.adopt(Tree::singleton(value))
    }

    /// Add a whole tree as a new root
    fn adopt(&self, tree: Tree<T>) -> Self {
        FibonacciHeap {
            len: self.len + tree.size(),
            roots: insert_root(&self.roots, tree),
        }
    }

    /// Merge two heaps - O(1)
    ///
    /// The root wheels are spliced so that the smaller minimum stays at the
    /// head; on a tie `self`'s minimum wins.
    pub fn union(&self, other: &Self) -> Self {
        let (mine, theirs) = match (self.roots.head(), other.roots.head()) {
            (Err(_), _) => return other.clone(),
            (_, Err(_)) => return self.clone(),
            (Ok(mine), Ok(theirs)) => (mine, theirs),
        };

        let roots = if mine.value <= theirs.value {
            self.roots.concat(&other.roots)
        } else {
            other.roots.concat(&self.roots)
        };
        FibonacciHeap {
            len: self.len + other.len,
            roots,
        }
    }

    /// Remove the minimum element - O(log n) amortized
    ///
    /// Returns the minimum and the remaining heap.
    pub fn extract_min(&self) -> Result<(T, Self), HeapError> {
        let (min, rest) = self.roots.extract_head()?;
        let Tree {
            value, children, ..
        } = min;

        let promoted = FibonacciHeap {
            len: self.len - 1,
            roots: children.roots.concat(&rest),
        };
        Ok((value, promoted.consolidate()))
    }

    /// Link roots of equal degree until every degree is unique, then rebuild
    /// the root wheel with the minimum at the head
    fn consolidate(self) -> Self {
        let len = self.len;
        let mut roots = self.roots;

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("consolidate", len, roots = roots.len()).entered();

        let mut table: DegreeTable<T> = (0..max_degree_bound(len)).map(|_| None).collect();
        while let Ok((tree, rest)) = roots.extract_head() {
            roots = rest;
            place(&mut table, tree);
        }

        let rebuilt = table
            .into_iter()
            .flatten()
            .fold(Wheel::new(), |wheel, tree| insert_root(&wheel, tree));

        #[cfg(feature = "tracing")]
        tracing::trace!(kept = rebuilt.len(), "root wheel consolidated");

        FibonacciHeap {
            len,
            roots: rebuilt,
        }
    }

    /// Push an element (mutable version for convenience)
    pub fn push(&mut self, value: T) {
        *self = self.insert(value);
    }

    /// Pop the minimum element (mutable version for convenience)
    pub fn pop(&mut self) -> Option<T> {
        let (min, rest) = self.extract_min().ok()?;
        *self = rest;
        Some(min)
    }

    /// Merge another heap into this one (mutable version for convenience)
    pub fn merge(&mut self, other: Self) {
        *self = self.union(&other);
    }

    /// Drain the heap into a vector in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }
}

impl<T> Clone for FibonacciHeap<T> {
    fn clone(&self) -> Self {
        FibonacciHeap {
            len: self.len,
            roots: self.roots.clone(),
        }
    }
}

impl<T> Default for FibonacciHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for FibonacciHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len)
            .field("roots", &self.roots)
            .finish()
    }
}

impl<T: Ord + Clone> FromIterator<T> for FibonacciHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = FibonacciHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord + Clone> Extend<T> for FibonacciHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord + Clone> Heap<T> for FibonacciHeap<T> {
    fn new() -> Self {
        FibonacciHeap::new()
    }

    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }

    fn push(&mut self, item: T) {
        FibonacciHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        FibonacciHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        FibonacciHeap::pop(self)
    }

    fn merge(&mut self, other: Self) {
        FibonacciHeap::merge(self, other)
    }
}
