//! Index arithmetic for a binary tree laid out in a flat array.

use crate::HasPriority;

pub(crate) fn parent(child: usize) -> usize {
    (child - 1) / 2
}

pub(crate) fn left(parent: usize) -> usize {
    2 * parent + 1
}

pub(crate) fn right(parent: usize) -> usize {
    2 * parent + 2
}

/**
 * Check the heap property over the whole of `items`: no element outranks its
 * parent.
 *
 * `outranks(a, b)` must be strict, so equal priorities never violate it.
 */
pub fn is_heap<T, F>(items: &[T], outranks: F) -> bool
where
    T: HasPriority,
    F: Fn(&T::Priority, &T::Priority) -> bool,
{
    (1..items.len()).all(|i| !outranks(&items[i].priority(), &items[parent(i)].priority()))
}
