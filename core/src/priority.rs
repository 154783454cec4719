/// A strict "has priority over" relation between two elements.
///
/// The element with priority over every other element sits at the root of a
/// [`Heap`](crate::Heap). Implementations should behave like a strict weak
/// ordering: irreflexive and transitive. Elements where neither side has
/// priority are treated as equal and are never swapped.
///
/// Any `Fn(&T, &T) -> bool` closure is a `Priority<T>`.
pub trait Priority<T> {
    /// Returns `true` if `a` should be popped before `b`.
    fn has_priority(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Priority<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smaller elements have priority, yielding a min-heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Less;

impl<T: Ord> Priority<T> for Less {
    #[inline(always)]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Larger elements have priority, yielding a max-heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: Ord> Priority<T> for Greater {
    #[inline(always)]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Elements with the smaller projected key have priority.
///
/// Wrap the projection in [`core::cmp::Reverse`] to prefer larger keys.
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Priority<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline(always)]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}
