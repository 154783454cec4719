use core::iter::FusedIterator;

use crate::heap::Heap;
use crate::priority::Priority;

// ----------------------------------------
// Sorted drain
// ----------------------------------------

/// Pops items off a [`Heap`] in priority order.
///
/// Items not consumed by the time the iterator is dropped stay in the heap.
pub struct DrainSorted<'h, T, C: Priority<T>> {
    heap: &'h mut Heap<T, C>,
}

impl<'h, T, C: Priority<T>> DrainSorted<'h, T, C> {
    pub(crate) fn new(heap: &'h mut Heap<T, C>) -> Self {
        Self { heap }
    }
}

impl<'h, T, C: Priority<T>> Iterator for DrainSorted<'h, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.try_pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<'h, T, C: Priority<T>> ExactSizeIterator for DrainSorted<'h, T, C> {}

impl<'h, T, C: Priority<T>> FusedIterator for DrainSorted<'h, T, C> {}
