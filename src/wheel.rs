//! Persistent circular list ("wheel")
//!
//! A wheel is a circular sequence with a distinguished head. It is stored in
//! three persistent stacks:
//! - `front` holds the head and its clockwise successors
//! - `spliced` holds whole wheels joined on by [`Wheel::concat`], most recent
//!   on top; they follow `front` in the order they were joined
//! - `back` holds the remaining elements counter-clockwise from the head, so
//!   its top is the last element of the circle
//!
//! The circular order is therefore `front ++ spliced ++ reverse(back)`.
//!
//! Rotating in either direction moves one element between `front` and
//! `back`, and concatenation pushes a single cell onto `spliced`. When `front`
//! runs dry the whole wheel is flattened into a fresh `front`; that O(n) step
//! is paid for by the n cheap operations that follow, the same argument as
//! for the two-list banker's queue.
//!
//! # Example
//!
//! ```rust
//! use persistent_fibonacci_heap::wheel::Wheel;
//!
//! let wheel: Wheel<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(wheel.head(), Ok(&1));
//!
//! let turned = wheel.rotate_right();
//! assert_eq!(turned.head(), Ok(&2));
//! assert_eq!(turned.rotate_left(), wheel);
//!
//! let joined = wheel.concat(&[4, 5].into_iter().collect());
//! assert_eq!(joined.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//!
//! // The original is untouched
//! assert_eq!(wheel.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use crate::stack::{self, Stack};
use crate::traits::HeapError;
use std::fmt;

/// A persistent circular sequence with a distinguished head
pub struct Wheel<T> {
    /// Head first, then its clockwise successors
    front: Stack<T>,
    /// Joined wheels, last joined on top
    spliced: Stack<Wheel<T>>,
    /// Last element of the circle first, walking counter-clockwise
    back: Stack<T>,
    len: usize,
}

impl<T> Wheel<T> {
    /// Create an empty wheel
    pub fn new() -> Self {
        Wheel {
            front: Stack::new(),
            spliced: Stack::new(),
            back: Stack::new(),
            len: 0,
        }
    }

    fn from_front(front: Stack<T>) -> Self {
        Wheel {
            len: front.len(),
            front,
            spliced: Stack::new(),
            back: Stack::new(),
        }
    }

    fn from_back(back: Stack<T>) -> Self {
        Wheel {
            len: back.len(),
            front: Stack::new(),
            spliced: Stack::new(),
            back,
        }
    }

    /// Check if the wheel is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// The head element
    ///
    /// O(1) while `front` is non-empty. Once `front` has been drained by
    /// rotations or extractions, the head sits inside a joined wheel or at
    /// the bottom of `back`, and finding it walks those stacks in O(n).
    /// [`FibonacciHeap`](crate::fibonacci::FibonacciHeap) never leaves its
    /// root wheel in that state between operations.
    pub fn head(&self) -> Result<&T, HeapError> {
        match self.front.first() {
            Some(head) => Ok(head),
            None => self.iter().next().ok_or(HeapError::EmptyStructure),
        }
    }

    /// Iterate clockwise, starting at the head
    ///
    /// Joined wheels are walked with an explicit frame stack rather than by
    /// recursion. Each non-empty `back` buffers its references when the
    /// iterator reaches it (see [`Stack::iter_rev`]).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            frames: vec![Frame::Wheel(self)],
        }
    }
}

impl<T: Clone> Wheel<T> {
    /// All elements on one stack, head on top
    fn flatten(&self) -> Stack<T> {
        if self.spliced.is_empty() && self.back.is_empty() {
            return self.front.clone();
        }
        let values: Vec<&T> = self.iter().collect();
        values
            .into_iter()
            .rev()
            .fold(Stack::new(), |stack, value| stack.push(value.clone()))
    }

    /// Move the head one step clockwise
    ///
    /// Empty and single-element wheels are returned unchanged.
    pub fn rotate_right(&self) -> Self {
        if self.len <= 1 {
            return self.clone();
        }
        if self.front.is_empty() {
            return Wheel::from_front(self.flatten()).rotate_right();
        }

        match self.front.pop() {
            Some((head, rest)) => Wheel {
                front: rest,
                spliced: self.spliced.clone(),
                back: self.back.push(head),
                len: self.len,
            },
            None => self.clone(),
        }
    }

    /// Move the head one step counter-clockwise
    ///
    /// Empty and single-element wheels are returned unchanged.
    pub fn rotate_left(&self) -> Self {
        if let Some((prev, rest)) = self.back.pop() {
            return Wheel {
                front: self.front.push(prev),
                spliced: self.spliced.clone(),
                back: rest,
                len: self.len,
            };
        }
        if self.len <= 1 {
            return self.clone();
        }

        match self.flatten().reverse().pop() {
            Some((prev, rest)) => Wheel {
                front: Stack::new().push(prev),
                spliced: Stack::new(),
                back: rest,
                len: self.len,
            },
            None => self.clone(),
        }
    }

    /// Insert `value` as the new head
    ///
    /// The former head becomes the new head's clockwise neighbour.
    pub fn insert_head(&self, value: T) -> Self {
        Wheel {
            front: self.front.push(value),
            spliced: self.spliced.clone(),
            back: self.back.clone(),
            len: self.len + 1,
        }
    }

    /// Remove the head, returning it together with the remaining wheel
    ///
    /// The head's clockwise neighbour becomes the new head.
    pub fn extract_head(&self) -> Result<(T, Self), HeapError> {
        if let Some((head, rest)) = self.front.pop() {
            return Ok((
                head,
                Wheel {
                    front: rest,
                    spliced: self.spliced.clone(),
                    back: self.back.clone(),
                    len: self.len - 1,
                },
            ));
        }

        let (head, rest) = self.flatten().pop().ok_or(HeapError::EmptyStructure)?;
        Ok((head, Wheel::from_front(rest)))
    }

    /// Splice `other` in clockwise after the last element of `self` - O(1)
    ///
    /// The result keeps `self`'s head, or `other`'s when `self` is empty.
    pub fn concat(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        // `back` ends the circle, so it moves in front of `other` as a
        // wheel of its own.
        let mut spliced = self.spliced.clone();
        if !self.back.is_empty() {
            spliced = spliced.push(Wheel::from_back(self.back.clone()));
        }
        Wheel {
            front: self.front.clone(),
            spliced: spliced.push(other.clone()),
            back: Stack::new(),
            len: self.len + other.len,
        }
    }
}

impl<T> Clone for Wheel<T> {
    fn clone(&self) -> Self {
        Wheel {
            front: self.front.clone(),
            spliced: self.spliced.clone(),
            back: self.back.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Wheel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Wheel<T> {
    // Joined wheels can nest as deep as the number of concatenations, so
    // unlink them with a worklist instead of recursing.
    fn drop(&mut self) {
        let mut work = vec![std::mem::take(&mut self.spliced)];
        while let Some(mut spliced) = work.pop() {
            while let Some(mut wheel) = spliced.take_unique() {
                work.push(std::mem::take(&mut wheel.spliced));
            }
        }
    }
}

/// Two wheels are equal when they have the same head and the same
/// clockwise order, regardless of how elements are split between stacks.
impl<T: PartialEq> PartialEq for Wheel<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Wheel<T> {}

impl<T> FromIterator<T> for Wheel<T> {
    /// Builds a wheel whose head is the first item, in iteration order
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let front = items
            .into_iter()
            .rev()
            .fold(Stack::new(), |stack, value| stack.push(value));
        Wheel::from_front(front)
    }
}

impl<T: fmt::Debug> fmt::Debug for Wheel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a [`Wheel`], clockwise from the head
pub struct Iter<'a, T> {
    /// Pending work, next to run on top
    frames: Vec<Frame<'a, T>>,
}

enum Frame<'a, T> {
    Wheel(&'a Wheel<T>),
    Clockwise(stack::Iter<'a, T>),
    CounterClockwise(std::iter::Rev<std::vec::IntoIter<&'a T>>),
}

impl<'a, T> Iter<'a, T> {
    /// Replace a wheel frame by its parts, `front` ending up on top
    fn expand(&mut self, wheel: &'a Wheel<T>) {
        if !wheel.back.is_empty() {
            self.frames.push(Frame::CounterClockwise(wheel.back.iter_rev()));
        }
        for joined in wheel.spliced.iter() {
            self.frames.push(Frame::Wheel(joined));
        }
        if !wheel.front.is_empty() {
            self.frames.push(Frame::Clockwise(wheel.front.iter()));
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = match self.frames.last_mut()? {
                Frame::Wheel(wheel) => {
                    let wheel: &'a Wheel<T> = *wheel;
                    self.frames.pop();
                    self.expand(wheel);
                    continue;
                }
                Frame::Clockwise(values) => values.next(),
                Frame::CounterClockwise(values) => values.next(),
            };
            match value {
                Some(value) => return Some(value),
                None => {
                    self.frames.pop();
                }
            }
        }
    }
}
