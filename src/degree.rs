//! Degree type for Fibonacci heap trees.
//!
//! # Why u8?
//!
//! The degree of a tree is the number of children its root holds. After
//! consolidation a tree of degree `d` contains at least `F(d + 2)` values,
//! where `F` is the Fibonacci sequence, so degree is bounded by
//! `log_φ(n)` with `φ ≈ 1.618`.
//!
//! For practical purposes:
//! - 2⁶⁴ elements → max degree ~92
//! - `u8::MAX` (255) would need more than 2¹⁷⁰ elements
//!
//! A `u8` therefore covers any heap that can exist in memory while keeping
//! tree records small.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics if the bound is ever exceeded, which would
//! indicate that two trees of unequal degree were linked.

/// Type alias for tree degree (number of direct children).
pub type Degree = u8;

/// Maximum valid degree value.
pub const MAX_DEGREE: Degree = u8::MAX;

/// Increment a degree, panicking on overflow.
///
/// # Panics
///
/// Panics if `degree == MAX_DEGREE`. Linking only ever combines trees of
/// equal degree, so reaching this would need more than 2¹⁷⁰ elements.
///
/// # Example
///
/// ```rust
/// use persistent_fibonacci_heap::degree::{checked_increment, Degree};
///
/// let degree: Degree = 5;
/// assert_eq!(checked_increment(degree), 6);
/// ```
#[inline]
pub fn checked_increment(degree: Degree) -> Degree {
    degree.checked_add(1).expect(
        "degree overflow: linking equal-degree trees bounds degree by log_φ(n), \
         which cannot reach u8::MAX for any heap that fits in memory",
    )
}

/// Upper bound on the largest root degree for a heap of `len` values.
///
/// Used to size the consolidation table up front. The bound is
/// `⌊log_φ(len)⌋ + 1`, computed without floating point by walking the
/// Fibonacci sequence.
///
/// ```rust
/// use persistent_fibonacci_heap::degree::max_degree_bound;
///
/// assert_eq!(max_degree_bound(0), 1);
/// assert!(max_degree_bound(1_000_000) < 32);
/// ```
pub fn max_degree_bound(len: usize) -> usize {
    // Smallest tree of degree d has F(d + 2) values.
    let (mut prev, mut curr) = (1usize, 2usize);
    let mut degree = 1;
    while curr <= len {
        let next = prev.saturating_add(curr);
        if next == curr {
            break;
        }
        prev = curr;
        curr = next;
        degree += 1;
    }
    degree
}
