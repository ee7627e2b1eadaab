use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use std::slice;
use std::vec;

use crate::queue::PriorityQueue;

/// An iterator over the elements of a `PriorityQueue` in storage order.
///
/// This `struct` is created by [`PriorityQueue::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, E: 'a> {
    iter: slice::Iter<'a, E>,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(iter: slice::Iter<'a, E>) -> Self {
        Iter { iter }
    }
}

impl<E: fmt::Debug> fmt::Debug for Iter<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

// `#[derive(Clone)]` would demand `E: Clone`.
impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<&'a E> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a E> {
        self.iter.last()
    }
}

impl<'a, E> DoubleEndedIterator for Iter<'a, E> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a E> {
        self.iter.next_back()
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

/// An owning iterator over the elements of a `PriorityQueue` in storage
/// order.
///
/// This `struct` is created by [`PriorityQueue::into_iter()`] (provided
/// by the [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<E> {
    iter: vec::IntoIter<E>,
}

impl<E> IntoIter<E> {
    pub(crate) fn new(iter: vec::IntoIter<E>) -> Self {
        IntoIter { iter }
    }
}

impl<E: fmt::Debug> fmt::Debug for IntoIter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.iter.as_slice())
            .finish()
    }
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    #[inline]
    fn next_back(&mut self) -> Option<E> {
        self.iter.next_back()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}

/// An owning iterator yielding the elements of a `PriorityQueue` in
/// ascending order.
///
/// This `struct` is created by [`PriorityQueue::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<E> {
    inner: PriorityQueue<E>,
}

impl<E> IntoIterSorted<E> {
    pub(crate) fn new(inner: PriorityQueue<E>) -> Self {
        IntoIterSorted { inner }
    }
}

impl<E> Iterator for IntoIterSorted<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<E> ExactSizeIterator for IntoIterSorted<E> {}

impl<E> FusedIterator for IntoIterSorted<E> {}

/// A draining iterator over the elements of a `PriorityQueue` in storage
/// order.
///
/// This `struct` is created by [`PriorityQueue::drain()`].
#[derive(Debug)]
pub struct Drain<'a, E: 'a> {
    iter: vec::Drain<'a, E>,
}

impl<'a, E> Drain<'a, E> {
    pub(crate) fn new(iter: vec::Drain<'a, E>) -> Self {
        Drain { iter }
    }
}

impl<E> Iterator for Drain<'_, E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<E> DoubleEndedIterator for Drain<'_, E> {
    #[inline]
    fn next_back(&mut self) -> Option<E> {
        self.iter.next_back()
    }
}

impl<E> ExactSizeIterator for Drain<'_, E> {}

impl<E> FusedIterator for Drain<'_, E> {}

/// A draining iterator yielding the elements of a `PriorityQueue` in
/// ascending order.
///
/// This `struct` is created by [`PriorityQueue::drain_sorted()`].
#[derive(Debug)]
pub struct DrainSorted<'a, E> {
    inner: &'a mut PriorityQueue<E>,
}

impl<'a, E> DrainSorted<'a, E> {
    pub(crate) fn new(inner: &'a mut PriorityQueue<E>) -> Self {
        DrainSorted { inner }
    }
}

impl<'a, E> Drop for DrainSorted<'a, E> {
    /// Removes the remaining elements, in sorted order.
    fn drop(&mut self) {
        struct DropGuard<'r, 'a, E>(&'r mut DrainSorted<'a, E>);

        impl<'r, 'a, E> Drop for DropGuard<'r, 'a, E> {
            fn drop(&mut self) {
                while self.0.inner.pop().is_some() {}
            }
        }

        while let Some(item) = self.inner.pop() {
            let guard = DropGuard(self);
            drop(item);
            mem::forget(guard);
        }
    }
}

impl<E> Iterator for DrainSorted<'_, E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<E> ExactSizeIterator for DrainSorted<'_, E> {}

impl<E> FusedIterator for DrainSorted<'_, E> {}
