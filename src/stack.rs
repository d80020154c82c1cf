//! Persistent singly-linked stack
//!
//! The building block of [`Wheel`](crate::wheel::Wheel). Each cell is shared
//! through an `Rc`, so pushing onto a stack never copies its tail and older
//! versions stay valid after newer ones are derived from them.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(1)       |
//! | `pop`     | O(1)       |
//! | `first`   | O(1)       |
//! | `reverse` | O(n)       |
//! | `iter_rev`| O(n) buffer |

use std::fmt;
use std::rc::Rc;

struct Cell<T> {
    value: T,
    next: Stack<T>,
}

/// An immutable stack whose versions share their common suffix
pub struct Stack<T> {
    top: Option<Rc<Cell<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Stack { top: None, len: 0 }
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Return the number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return a new stack with `value` on top
    pub fn push(&self, value: T) -> Self {
        Stack {
            len: self.len + 1,
            top: Some(Rc::new(Cell {
                value,
                next: self.clone(),
            })),
        }
    }

    /// The top element
    pub fn first(&self) -> Option<&T> {
        self.top.as_ref().map(|cell| &cell.value)
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }

    /// Iterate from bottom to top
    ///
    /// Cells only link downwards, so this buffers one reference per element
    /// before yielding the first one.
    pub fn iter_rev(&self) -> std::iter::Rev<std::vec::IntoIter<&T>> {
        let cells: Vec<&T> = self.iter().collect();
        cells.into_iter().rev()
    }

    /// Move the top element out when no other stack shares its cell
    ///
    /// On success `self` becomes the tail. When the cell is shared, `self`
    /// lets go of it, becomes empty and `None` is returned.
    pub(crate) fn take_unique(&mut self) -> Option<T> {
        let cell = self.top.take()?;
        match Rc::try_unwrap(cell) {
            Ok(mut cell) => {
                *self = std::mem::take(&mut cell.next);
                Some(cell.value)
            }
            Err(_) => {
                self.len = 0;
                None
            }
        }
    }
}

impl<T: Clone> Stack<T> {
    /// Split off the top element, returning it and the remaining stack
    pub fn pop(&self) -> Option<(T, Self)> {
        self.top
            .as_ref()
            .map(|cell| (cell.value.clone(), cell.next.clone()))
    }

    /// Return the stack with its elements in the opposite order
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Stack::new(), |acc, value| acc.push(value.clone()))
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            top: self.top.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    // Unlink uniquely owned cells one at a time so long stacks do not
    // recurse through `Rc::drop`.
    fn drop(&mut self) {
        let mut top = self.top.take();
        while let Some(cell) = top {
            match Rc::try_unwrap(cell) {
                Ok(mut cell) => top = cell.next.top.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a [`Stack`], top first
pub struct Iter<'a, T> {
    next: Option<&'a Cell<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|cell| {
            self.next = cell.next.top.as_deref();
            &cell.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(stack: &Stack<i32>) -> Vec<i32> {
        stack.iter().copied().collect()
    }

    #[test]
    fn test_push_pop() {
        let stack = Stack::new().push(1).push(2).push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.first(), Some(&3));
        assert_eq!(stack.iter_rev().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        let (top, rest) = stack.pop().unwrap();
        assert_eq!(top, 3);
        assert_eq!(collect(&rest), vec![2, 1]);
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn test_versions_are_independent() {
        let base = Stack::new().push(1);
        let a = base.push(2);
        let b = base.push(3);
        assert_eq!(collect(&base), vec![1]);
        assert_eq!(collect(&a), vec![2, 1]);
        assert_eq!(collect(&b), vec![3, 1]);
    }

    #[test]
    fn test_reverse() {
        let stack = Stack::new().push(2).push(1);
        assert_eq!(collect(&stack.reverse()), vec![2, 1]);
        assert_eq!(stack.reverse().len(), 2);
    }

    #[test]
    fn test_take_unique() {
        let mut owned = Stack::new().push(1).push(2);
        assert_eq!(owned.take_unique(), Some(2));
        assert_eq!(owned.len(), 1);
        assert_eq!(owned.take_unique(), Some(1));
        assert!(owned.is_empty());

        let shared = Stack::new().push(1);
        let mut alias = shared.clone();
        assert_eq!(alias.take_unique(), None);
        assert!(alias.is_empty());
        assert_eq!(collect(&shared), vec![1]);
    }

    #[test]
    fn test_empty() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert!(stack.pop().is_none());
        assert_eq!(stack.first(), None);
        assert_eq!(stack.iter_rev().next(), None);
    }

    #[test]
    fn test_long_stack_drop() {
        let mut stack = Stack::new();
        for i in 0..200_000 {
            stack = stack.push(i);
        }
        assert_eq!(stack.len(), 200_000);
        drop(stack);
    }
}
