use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::errors::HeapError;
use crate::utils::{is_heap, left, parent, right};
use crate::{HasPriority, HeapOrdering};

/**
 * A binary heap over a flat array, ordered either min-first or max-first.
 *
 * The node at index `i` has children at `2i + 1` and `2i + 2`. No element
 * outranks its parent, so the root is always a highest-priority element.
 * Elements with equal priority come out in no particular order.
 *
 * There is no internal locking. To share a heap between threads, guard every
 * call with one lock, e.g. `Mutex<PriorityHeap<T>>`.
 */
#[derive(Clone)]
pub struct PriorityHeap<T: HasPriority> {
    ordering: HeapOrdering,
    outranks: fn(&T::Priority, &T::Priority) -> bool,
    elements: Vec<T>,
}

impl<T: HasPriority> PriorityHeap<T> {
    /// `capacity` only reserves storage; the heap grows past it as needed.
    pub fn new(capacity: usize, ordering: HeapOrdering) -> Self {
        PriorityHeap {
            ordering,
            outranks: ordering.outranks_fn(),
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn min_first(capacity: usize) -> Self {
        PriorityHeap::new(capacity, HeapOrdering::MinFirst)
    }

    pub fn max_first(capacity: usize) -> Self {
        PriorityHeap::new(capacity, HeapOrdering::MaxFirst)
    }

    pub fn from_iter_with<I>(ordering: HeapOrdering, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let mut heap = PriorityHeap::new(items.size_hint().0, ordering);
        heap.extend(items);
        heap
    }

    pub fn ordering(&self) -> HeapOrdering {
        self.ordering
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// The highest-priority element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn insert(&mut self, element: T) {
        if self.elements.len() == self.elements.capacity() {
            trace!(
                "{} heap full at capacity {}, growing",
                self.ordering,
                self.elements.capacity()
            );
        }
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the highest-priority element.
    pub fn extract_top(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or_else(|| {
            debug!("extract_top on an empty {} heap", self.ordering);
            HeapError::EmptyHeap
        })
    }

    /// Like `extract_top`, but returns `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        // Moves the last element into the root slot.
        let top = self.elements.swap_remove(0);
        self.sift_down(0);
        Some(top)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// The backing array, in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// All elements in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(top) = self.pop() {
            sorted.push(top);
        }
        sorted
    }

    pub fn is_valid(&self) -> bool {
        is_heap(&self.elements, self.outranks)
    }

    fn outranks(&self, i: usize, j: usize) -> bool {
        (self.outranks)(&self.elements[i].priority(), &self.elements[j].priority())
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = parent(i);
            if !self.outranks(i, parent) {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.elements.len();
        loop {
            let left = left(i);
            if left >= len {
                break;
            }
            // Left child wins ties.
            let mut child = left;
            let right = right(i);
            if right < len && self.outranks(right, left) {
                child = right;
            }
            if !self.outranks(child, i) {
                break;
            }
            self.elements.swap(i, child);
            i = child;
        }
    }
}

impl<T: HasPriority> Default for PriorityHeap<T> {
    fn default() -> Self {
        PriorityHeap::new(0, HeapOrdering::default())
    }
}

impl<T: HasPriority> Extend<T> for PriorityHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let items = items.into_iter();
        self.elements.reserve(items.size_hint().0);
        for item in items {
            self.insert(item);
        }
    }
}

/// Collects into a min-first heap.
impl<T: HasPriority> FromIterator<T> for PriorityHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        PriorityHeap::from_iter_with(HeapOrdering::MinFirst, items)
    }
}

impl<T: HasPriority + fmt::Debug> fmt::Debug for PriorityHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("ordering", &self.ordering)
            .field("elements", &self.elements)
            .finish()
    }
}
