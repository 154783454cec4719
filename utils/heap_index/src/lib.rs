#![no_std]

//! Index arithmetic for implicit m-ary trees stored in a dense array.
//!
//! The root lives at index `0` and the children of node `i` occupy the
//! contiguous range `m * i + 1 ..= m * i + m`. None of these functions look at
//! the array itself, they only map positions to positions.
#![deny(missing_docs)]

use core::ops::Range;

/// Returns the index of the parent of `index` in a tree of arity `arity`.
///
/// The root has no parent.
///
/// # Example
/// ```
/// use heap_index::*;
///
/// assert_eq!(parent(0, 3), None);
/// assert_eq!(parent(1, 3), Some(0));
/// assert_eq!(parent(3, 3), Some(0));
/// assert_eq!(parent(4, 3), Some(1));
/// ```
#[inline(always)]
pub fn parent(index: usize, arity: usize) -> Option<usize> {
    debug_assert!(arity >= 2);

    if is_root(index) {
        None
    } else {
        Some((index - 1) / arity)
    }
}

/// Returns the index of the first child of `index`, whether or not it exists.
/// Saturates at `usize::MAX`, which no array can index.
///
/// # Example
/// ```
/// use heap_index::*;
///
/// assert_eq!(first_child(0, 4), 1);
/// assert_eq!(first_child(2, 4), 9);
/// ```
#[inline(always)]
pub fn first_child(index: usize, arity: usize) -> usize {
    debug_assert!(arity >= 2);
    arity.saturating_mul(index).saturating_add(1)
}

/// Returns the range of children of `index` that lie inside an array of
/// length `len`. The range is empty for leaves.
///
/// # Example
/// ```
/// use heap_index::*;
///
/// assert_eq!(children(0, 2, 10), 1..3);
/// assert_eq!(children(4, 2, 10), 9..10);
/// assert!(children(5, 2, 10).is_empty());
/// ```
#[inline(always)]
pub fn children(index: usize, arity: usize, len: usize) -> Range<usize> {
    let start = first_child(index, arity);

    if start >= len {
        len..len
    } else {
        start..start.saturating_add(arity).min(len)
    }
}

/// Returns the index of the last node with at least one child in an array of
/// length `len`, or `None` if no such node exists.
///
/// Bottom-up heap construction starts here and walks back to the root.
///
/// # Example
/// ```
/// use heap_index::*;
///
/// assert_eq!(last_parent(1, 2), None);
/// assert_eq!(last_parent(7, 2), Some(2));
/// assert_eq!(last_parent(7, 3), Some(1));
/// ```
#[inline(always)]
pub fn last_parent(len: usize, arity: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        parent(len - 1, arity)
    }
}

/// Returns `true` if `index` is the root of the tree.
#[inline(always)]
pub const fn is_root(index: usize) -> bool {
    index == 0
}
