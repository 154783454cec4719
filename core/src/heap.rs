use core::fmt::Debug;

use heap_index::{children, last_parent, parent};
use tracing::{debug, trace};

use crate::arity::Arity;
use crate::error::{HeapError, Result};
use crate::iter::DrainSorted;
use crate::priority::{Less, Priority};

/// `Heap` is an array-backed m-ary heap. The element at the root has
/// priority over every other element according to `C`.
///
/// With the default [`Less`] relation this is a min-heap; use
/// [`Greater`](crate::Greater) for a max-heap, or any
/// `Fn(&T, &T) -> bool` closure.
///
/// ```
/// use mary_heap::{Greater, Heap};
///
/// let mut heap = Heap::with_priority(3, Greater);
/// for item in [5, 1, 9, 3] {
///     heap.push(item);
/// }
///
/// assert_eq!(heap.top(), Ok(&9));
/// assert_eq!(heap.pop(), Ok(9));
/// assert_eq!(heap.len(), 3);
/// ```
#[derive(Clone)]
pub struct Heap<T, C = Less> {
    items: Vec<T>,
    arity: Arity,
    priority: C,
}

impl<T, C: Priority<T> + Default> Default for Heap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, C> Debug for Heap<T, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Heap")
            .field("arity", &self.arity.get())
            .field("items", &self.items)
            .finish()
    }
}

impl<T, C: Priority<T> + Default> Heap<T, C> {
    /// Creates an empty binary heap.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Arity::BINARY, C::default())
    }

    /// Creates an empty heap where every node has up to `arity` children.
    ///
    /// # Panics
    ///
    /// Panics if `arity < 2`. Use [`Heap::try_with_priority`] to handle this
    /// case as an error.
    pub fn with_arity(arity: usize) -> Self {
        Self::with_priority(arity, C::default())
    }
}

impl<T, C: Priority<T>> Heap<T, C> {
    /// Creates an empty heap ordered by `priority`, where every node has up to
    /// `arity` children.
    ///
    /// # Panics
    ///
    /// Panics if `arity < 2`.
    pub fn with_priority(arity: usize, priority: C) -> Self {
        match Self::try_with_priority(arity, priority) {
            Ok(heap) => heap,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible version of [`Heap::with_priority`], returning
    /// [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn try_with_priority(arity: usize, priority: C) -> Result<Self> {
        Ok(Self::from_parts(Vec::new(), Arity::new(arity)?, priority))
    }

    /// Creates an empty heap like [`Heap::with_priority`] that can hold at least
    /// `capacity` items without reallocating.
    ///
    /// # Panics
    ///
    /// Panics if `arity < 2`.
    pub fn with_capacity(arity: usize, priority: C, capacity: usize) -> Self {
        let mut heap = Self::with_priority(arity, priority);
        heap.items = Vec::with_capacity(capacity);
        heap
    }

    /// Builds a heap out of `items` in linear time.
    ///
    /// # Panics
    ///
    /// Panics if `arity < 2`.
    pub fn from_vec(arity: usize, priority: C, items: Vec<T>) -> Self {
        let mut heap = Self::with_priority(arity, priority);
        heap.items = items;
        heap.rebuild();
        heap
    }

    fn from_parts(items: Vec<T>, arity: Arity, priority: C) -> Self {
        debug!(arity = arity.get(), "creating heap");

        Self {
            items,
            arity,
            priority,
        }
    }

    /// Inserts an item, moving it up until its parent has priority over it or
    /// it reaches the root.
    pub fn push(&mut self, item: T) {
        self.items.push(item);

        let levels = self.sift_up(self.items.len() - 1);
        trace!(len = self.items.len(), levels, "push");

        self.check();
    }

    /// Returns the item with the highest priority.
    ///
    /// Fails with [`HeapError::Underflow`] if the heap is empty.
    pub fn top(&self) -> Result<&T> {
        self.items.first().ok_or_else(|| {
            debug!("top called on an empty heap");
            HeapError::underflow("top")
        })
    }

    /// Removes and returns the item with the highest priority.
    ///
    /// The last item takes the place of the root and is then moved down until
    /// none of its children has priority over it.
    ///
    /// Fails with [`HeapError::Underflow`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            debug!("pop called on an empty heap");
            return Err(HeapError::underflow("pop"));
        }

        let item = self.items.swap_remove(0);

        let levels = self.sift_down(0);
        trace!(len = self.items.len(), levels, "pop");

        self.check();
        Ok(item)
    }

    /// Returns the item with the highest priority, or `None` if empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the item with the highest priority, or `None` if
    /// empty.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            self.pop().ok()
        }
    }

    /// Removes every item in priority order.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted::new(self)
    }

    /// Consumes the heap, returning its items ordered from the highest
    /// priority to the lowest.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        sorted.extend(self.drain_sorted());
        sorted
    }

    /// Checks that no item has priority over its parent.
    pub fn is_valid(&self) -> bool {
        let arity = self.arity.get();

        (1..self.items.len()).all(|index| match parent(index, arity) {
            Some(up) => !self
                .priority
                .has_priority(&self.items[index], &self.items[up]),
            None => true,
        })
    }

    /// Moves the item at `index` towards the root, returning the number of
    /// levels it climbed.
    fn sift_up(&mut self, mut index: usize) -> usize {
        let arity = self.arity.get();
        let mut levels = 0;

        while let Some(up) = parent(index, arity) {
            if !self
                .priority
                .has_priority(&self.items[index], &self.items[up])
            {
                break;
            }

            self.items.swap(index, up);
            index = up;
            levels += 1;
        }

        levels
    }

    /// Moves the item at `index` towards the leaves, returning the number of
    /// levels it descended.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let arity = self.arity.get();
        let len = self.items.len();
        let mut levels = 0;

        loop {
            // Ties keep the current node in place
            let mut best = index;
            for child in children(index, arity, len) {
                if self
                    .priority
                    .has_priority(&self.items[child], &self.items[best])
                {
                    best = child;
                }
            }

            if best == index {
                break;
            }

            self.items.swap(index, best);
            index = best;
            levels += 1;
        }

        levels
    }

    /// Restores the heap invariant over the whole array, bottom up.
    fn rebuild(&mut self) {
        if let Some(last) = last_parent(self.items.len(), self.arity.get()) {
            for index in (0..=last).rev() {
                self.sift_down(index);
            }
        }

        debug!(len = self.items.len(), arity = self.arity.get(), "rebuilt heap");
        self.check();
    }

    #[inline(always)]
    fn check(&self) {
        #[cfg(feature = "debug")]
        debug_assert!(self.is_valid(), "heap invariant violated");
    }
}

impl<T, C> Heap<T, C> {
    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn arity(&self) -> usize {
        self.arity.get()
    }

    pub fn priority(&self) -> &C {
        &self.priority
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Borrow the backing array, in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the items in heap order, which is not sorted.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the heap, returning the backing array in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, C: Priority<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Priority<T> + Default> FromIterator<T> for Heap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(Arity::BINARY.get(), C::default(), iter.into_iter().collect())
    }
}

impl<T, C> IntoIterator for Heap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
