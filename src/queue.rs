use core::cmp::Ordering;
use core::fmt;
use core::mem::swap;
use core::ptr;

use std::collections::TryReserveError;
use std::sync::Arc;

use crate::builder::Builder;
use crate::error::QueueError;
use crate::hole::Hole;
use crate::iter::{Drain, DrainSorted, IntoIter, IntoIterSorted, Iter};
use crate::ordering::{self, Comparator, Equality};

/// Number of slots a queue pre-allocates when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 11;

/// A priority queue implemented with a binary heap.
///
/// This is a min-heap: [`poll`] returns the least element according to the
/// queue's [`Comparator`]. The comparator is a plain function chosen when
/// the queue is created, so element types do not need to implement [`Ord`].
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the
/// comparator, changes while it is in the heap. The behavior resulting from
/// such a logic error is not specified, but will not be undefined behavior.
///
/// # Examples
///
/// ```
/// use comparator_heap::PriorityQueue;
///
/// let mut heap = PriorityQueue::new();
///
/// // Nothing in there yet, so `peek` hands back the default value.
/// assert_eq!(heap.peek(), 0);
/// assert_eq!(heap.head(), None);
///
/// heap.add(3);
/// heap.add(1);
/// heap.add(2);
///
/// assert_eq!(heap.peek(), 1);
/// assert_eq!(heap.size(), 3);
///
/// assert_eq!(heap.poll(), 1);
/// assert_eq!(heap.poll(), 2);
/// assert_eq!(heap.poll(), 3);
/// assert!(heap.is_empty());
/// ```
///
/// ## Empty queues
///
/// [`poll`] and [`peek`] return `E::default()` when the queue is empty,
/// which cannot be told apart from a stored default value. Check
/// [`is_empty`] first, or use [`pop`] and [`head`] which return an
/// [`Option`].
///
/// ## Custom ordering
///
/// ```
/// use comparator_heap::{ordering, PriorityQueue};
///
/// let mut heap = PriorityQueue::with_comparator(ordering::reversed(ordering::natural::<i32>()));
/// heap.add(1);
/// heap.add(5);
/// heap.add(2);
///
/// assert_eq!(heap.into_sorted_vec(), [5, 2, 1]);
/// ```
///
/// # Time complexity
///
/// | [add]/[offer] | [poll]        | [peek] | [contains]/[remove] |
/// |---------------|---------------|--------|---------------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1) | *O*(*n*)            |
///
/// [add]: PriorityQueue::add
/// [offer]: PriorityQueue::offer
/// [poll]: PriorityQueue::poll
/// [`poll`]: PriorityQueue::poll
/// [peek]: PriorityQueue::peek
/// [`peek`]: PriorityQueue::peek
/// [`pop`]: PriorityQueue::pop
/// [`head`]: PriorityQueue::head
/// [`is_empty`]: PriorityQueue::is_empty
/// [contains]: PriorityQueue::contains
/// [remove]: PriorityQueue::remove
pub struct PriorityQueue<E> {
    data: Vec<E>,
    comparator: Comparator<E>,
    equality: Option<Equality<E>>,
}

impl<E: Ord + 'static> PriorityQueue<E> {
    /// Creates an empty queue ordered by the natural order of `E`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    /// let mut heap = PriorityQueue::new();
    /// heap.add("Steven");
    /// ```
    #[must_use]
    pub fn new() -> PriorityQueue<E> {
        Builder::natural().build()
    }

    /// Creates an empty queue ordered by the natural order of `E`, with
    /// room for at least `capacity` elements before it reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    /// let mut heap = PriorityQueue::with_capacity(100);
    /// heap.add(4);
    /// assert!(heap.capacity() >= 100);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> PriorityQueue<E> {
        Builder::natural().capacity(capacity).build()
    }

    /// Starts configuring a queue ordered by the natural order of `E`.
    /// See [`Builder`].
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    ///
    /// let mut heap = PriorityQueue::builder().capacity(4).build();
    /// heap.add(3);
    /// heap.add(1);
    /// assert_eq!(heap.poll(), 1);
    /// ```
    pub fn builder() -> Builder<E> {
        Builder::natural()
    }
}

impl<E> PriorityQueue<E> {
    /// Creates an empty queue ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    ///
    /// let by_first = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
    /// let mut heap = PriorityQueue::with_comparator(by_first);
    /// heap.add((2, 'e'));
    /// heap.add((1, 'b'));
    ///
    /// assert_eq!(heap.poll(), (1, 'b'));
    /// ```
    #[must_use]
    pub fn with_comparator<F>(compare: F) -> PriorityQueue<E>
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        Builder::new(compare).build()
    }

    /// Starts configuring a queue ordered by `compare`. See [`Builder`].
    pub fn builder_by<F>(compare: F) -> Builder<E>
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        Builder::new(compare)
    }

    pub(crate) fn from_parts(
        data: Vec<E>,
        comparator: Comparator<E>,
        equality: Option<Equality<E>>,
    ) -> PriorityQueue<E> {
        let mut heap = PriorityQueue {
            data,
            comparator,
            equality,
        };
        heap.rebuild();
        heap
    }

    /// Inserts `item` into the queue.
    ///
    /// Always returns `true`; the return value exists for parity with
    /// [`offer`](PriorityQueue::offer).
    ///
    /// # Panics
    ///
    /// Panics if the backing storage cannot grow. Use
    /// [`offer`](PriorityQueue::offer) or
    /// [`try_insert`](PriorityQueue::try_insert) to observe that failure
    /// instead.
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) comparisons, plus an amortized reallocation when the
    /// capacity is exhausted.
    pub fn add(&mut self, item: E) -> bool {
        match self.try_insert(item) {
            Ok(()) => true,
            Err(err) => panic!("{}", err),
        }
    }

    /// Inserts `item` into the queue, returning `false` if the backing
    /// storage could not grow.
    ///
    /// The queue has no fixed capacity, so under normal memory conditions
    /// this always returns `true`.
    pub fn offer(&mut self, item: E) -> bool {
        self.try_insert(item).is_ok()
    }

    /// Inserts `item` into the queue.
    ///
    /// On error the item is dropped and the queue is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    ///
    /// let mut heap = PriorityQueue::new();
    /// heap.try_insert(5).unwrap();
    /// assert_eq!(heap.peek(), 5);
    /// ```
    pub fn try_insert(&mut self, item: E) -> Result<(), QueueError> {
        self.data.try_reserve(1)?;
        let old_len = self.len();
        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(0, old_len) };
        Ok(())
    }

    /// Removes the least element and returns it, or `E::default()` if the
    /// queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    /// let mut heap = PriorityQueue::from([1, 3]);
    ///
    /// assert_eq!(heap.poll(), 1);
    /// assert_eq!(heap.poll(), 3);
    /// assert_eq!(heap.poll(), 0);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `poll` on a heap containing *n* elements is *O*(log(*n*)).
    pub fn poll(&mut self) -> E
    where
        E: Default,
    {
        self.pop().unwrap_or_default()
    }

    /// Removes the least element and returns it, or `None` if the queue is
    /// empty.
    pub fn pop(&mut self) -> Option<E> {
        self.data.pop().map(|mut item| {
            if !self.is_empty() {
                swap(&mut item, &mut self.data[0]);
                // SAFETY: !self.is_empty() means that self.len() > 0
                unsafe { self.sift_down_to_bottom(0) };
            }
            item
        })
    }

    /// Returns a copy of the least element, or `E::default()` if the queue
    /// is empty.
    ///
    /// # Time complexity
    ///
    /// One clone of the element, no comparisons.
    pub fn peek(&self) -> E
    where
        E: Clone + Default,
    {
        self.head().cloned().unwrap_or_default()
    }

    /// Returns a reference to the least element, or `None` if the queue is
    /// empty.
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    /// let mut heap = PriorityQueue::new();
    /// assert_eq!(heap.head(), None);
    ///
    /// heap.add(String::from("pear"));
    /// heap.add(String::from("apple"));
    /// assert_eq!(heap.head().map(String::as_str), Some("apple"));
    /// ```
    #[must_use]
    pub fn head(&self) -> Option<&E> {
        self.data.first()
    }

    /// Returns `true` if an element equal to `item` is in the queue.
    ///
    /// Uses the element type's own [`PartialEq`]. Types without it go
    /// through [`try_contains`](PriorityQueue::try_contains) and the
    /// configured equality function.
    ///
    /// # Time complexity
    ///
    /// *O*(*n*), the elements are scanned in storage order.
    pub fn contains(&self, item: &E) -> bool
    where
        E: PartialEq,
    {
        self.data.iter().any(|e| e == item)
    }

    /// Removes the first element equal to `item`, scanning in storage
    /// (heap) order rather than sorted order.
    ///
    /// Returns whether an element was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    /// let mut heap = PriorityQueue::from([4, 8, 15, 16, 23, 42]);
    ///
    /// assert!(heap.remove(&15));
    /// assert!(!heap.remove(&15));
    /// assert_eq!(heap.into_sorted_vec(), [4, 8, 16, 23, 42]);
    /// ```
    pub fn remove(&mut self, item: &E) -> bool
    where
        E: PartialEq,
    {
        match self.data.iter().position(|e| e == item) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Like [`contains`](PriorityQueue::contains), but compares with the
    /// configured equality function.
    ///
    /// # Errors
    ///
    /// [`QueueError::NoEquality`] if the queue was built without an
    /// equality function, even when the queue is empty.
    pub fn try_contains(&self, item: &E) -> Result<bool, QueueError> {
        let equals = self.equality.as_deref().ok_or(QueueError::NoEquality)?;
        Ok(self.data.iter().any(|e| equals(e, item)))
    }

    /// Like [`remove`](PriorityQueue::remove), but compares with the
    /// configured equality function.
    ///
    /// # Errors
    ///
    /// [`QueueError::NoEquality`] if the queue was built without an
    /// equality function, even when the queue is empty.
    pub fn try_remove(&mut self, item: &E) -> Result<bool, QueueError> {
        let equals = self.equality.as_deref().ok_or(QueueError::NoEquality)?;
        match self.data.iter().position(|e| equals(e, item)) {
            Some(index) => {
                self.remove_at(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The ordering function in effect.
    ///
    /// The returned handle is shared; cloning it is cheap and it can seed
    /// another queue via [`Builder::shared`].
    #[must_use]
    pub fn comparator(&self) -> &Comparator<E> {
        &self.comparator
    }

    /// The configured equality function, if any.
    #[must_use]
    pub fn equality(&self) -> Option<&Equality<E>> {
        self.equality.as_ref()
    }

    /// Returns a copy of all elements in storage (heap) order.
    ///
    /// The copy is independent of the queue.
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    /// let heap = PriorityQueue::from([3, 1, 2]);
    ///
    /// let mut copy = heap.to_array();
    /// assert_eq!(copy.len(), heap.size());
    /// copy.clear();
    /// assert_eq!(heap.size(), 3);
    /// ```
    #[must_use]
    pub fn to_array(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.data.clone()
    }

    /// Consumes the queue and returns its elements in ascending order
    /// according to the comparator.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    ///
    /// let mut heap = PriorityQueue::from([1, 2, 4, 5, 7]);
    /// heap.add(6);
    /// heap.add(3);
    ///
    /// let vec = heap.into_sorted_vec();
    /// assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included),
            //  so it's always a valid index to access.
            //  It is safe to access index 0 (i.e. `ptr`), because
            //  1 <= end < self.len(), which means self.len() >= 2.
            unsafe {
                let ptr = self.data.as_mut_ptr();
                ptr::swap(ptr, ptr.add(end));
            }
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included) so:
            //  0 < 1 <= end <= self.len() - 1 < self.len()
            //  Which means 0 < end and end < self.len().
            unsafe { self.sift_down_range(0, end) };
        }
        // the least element was moved to the back first
        self.data.reverse();
        self.data
    }

    /// Consumes the queue and returns its elements in storage order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<E> {
        self.data
    }

    /// Checks that every element compares less than or equal to its
    /// children.
    #[must_use]
    pub fn is_heap(&self) -> bool {
        let cmp = &*self.comparator;
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            cmp(&self.data[parent], &self.data[child]) != Ordering::Greater
        })
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    /// let mut heap = PriorityQueue::from([-10, -5, 1, 2, 4, 13]);
    ///
    /// heap.retain(|x| x % 2 == 0);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [-10, 2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&E) -> bool,
    {
        let mut first_removed = self.len();
        let mut i = 0;
        self.data.retain(|e| {
            let keep = f(e);
            if !keep && i < first_removed {
                first_removed = i;
            }
            i += 1;
            keep
        });
        // data[0..first_removed] is untouched, so we only need to rebuild the tail:
        self.rebuild_tail(first_removed);
    }

    /// Removes and returns the element at `index`, restoring the heap
    /// property around the element moved into its place.
    fn remove_at(&mut self, index: usize) -> E {
        let item = self.data.swap_remove(index);
        if index < self.len() {
            // SAFETY: index < self.len() was just checked.
            unsafe {
                if self.sift_down(index) == index {
                    self.sift_up(0, index);
                }
            }
        }
        item
    }

    // The sift routines take the moving element out of the storage, leaving
    // a `Hole` that travels along the parent/child path. Dropping the hole
    // puts the element back, also when the comparator panics.

    /// Moves the element at `pos` towards `start` while it is smaller than
    /// its parent. Returns the final position.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()` and that `start` is
    /// `pos` or one of its ancestors.
    unsafe fn sift_up(&mut self, start: usize, pos: usize) -> usize {
        let cmp = &*self.comparator;
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::take(&mut self.data, pos) };

        while let Some(parent) = hole.parent_above(start) {
            // SAFETY: parent < hole.at() < self.len(), so it is a valid
            //  index other than the hole.
            if cmp(hole.taken(), unsafe { hole.peek(parent) }) != Ordering::Less {
                break;
            }
            // SAFETY: same as above.
            unsafe { hole.pull(parent) };
        }

        hole.at()
    }

    /// Moves the element at `pos` down while one of its children within
    /// `..end` is smaller. Returns the final position.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) -> usize {
        let cmp = &*self.comparator;
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::take(&mut self.data, pos) };

        while let Some(child) = hole.lesser_child(end, cmp) {
            // SAFETY: lesser_child only yields in-bounds children of the hole.
            if cmp(hole.taken(), unsafe { hole.peek(child) }) != Ordering::Greater {
                break;
            }
            // SAFETY: same as above.
            unsafe { hole.pull(child) };
        }

        hole.at()
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) -> usize {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller and
        //  obviously len = self.len() <= self.len().
        unsafe { self.sift_down_range(pos, len) }
    }

    /// Takes the element at `pos` all the way down to a leaf, always
    /// following the lesser child, then sifts it back up.
    ///
    /// This saves one comparison per level when the element is known to
    /// belong near the bottom, which is the case for the last element
    /// moved to the root by `pop`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down_to_bottom(&mut self, pos: usize) {
        let end = self.len();
        let cmp = &*self.comparator;

        // SAFETY: The caller guarantees that pos < self.len().
        let mut hole = unsafe { Hole::take(&mut self.data, pos) };
        while let Some(child) = hole.lesser_child(end, cmp) {
            // SAFETY: lesser_child only yields in-bounds children of the hole.
            unsafe { hole.pull(child) };
        }
        let leaf = hole.at();
        drop(hole);

        // SAFETY: leaf is a valid index below pos.
        unsafe { self.sift_up(pos, leaf) };
    }

    /// Rebuild assuming data[0..start] is still a proper heap.
    fn rebuild_tail(&mut self, start: usize) {
        if start == self.len() {
            return;
        }

        let tail_len = self.len() - start;

        #[inline(always)]
        fn log2_fast(x: usize) -> usize {
            (usize::BITS - x.leading_zeros() - 1) as usize
        }

        // `rebuild` takes O(self.len()) operations
        // and about 2 * self.len() comparisons in the worst case
        // while repeating `sift_up` takes O(tail_len * log(start)) operations
        // and about 1 * tail_len * log_2(start) comparisons in the worst case,
        // assuming start >= tail_len.
        let better_to_rebuild = if start < tail_len {
            true
        } else if self.len() <= 2048 {
            2 * self.len() < tail_len * log2_fast(start)
        } else {
            2 * self.len() < tail_len * 11
        };

        if better_to_rebuild {
            self.rebuild();
        } else {
            for i in start..self.len() {
                // SAFETY: The index `i` is always less than self.len().
                unsafe { self.sift_up(0, i) };
            }
        }
    }

    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { self.sift_down(n) };
        }
    }

    /// Returns an iterator visiting all elements in storage (heap) order.
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    /// let heap = PriorityQueue::from([1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.iter() {
    ///     println!("{x}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.data.iter())
    }

    /// Consumes the queue, yielding its elements in ascending order.
    pub fn into_iter_sorted(self) -> IntoIterSorted<E> {
        IntoIterSorted::new(self)
    }

    /// Clears the queue, returning an iterator over the removed elements
    /// in storage order.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, E> {
        Drain::new(self.data.drain(..))
    }

    /// Clears the queue, returning an iterator over the removed elements
    /// in ascending order.
    ///
    /// Elements the iterator has not yielded yet are removed when it is
    /// dropped.
    ///
    /// ```
    /// use comparator_heap::PriorityQueue;
    /// let mut heap = PriorityQueue::from([5, 1, 4, 2, 3]);
    ///
    /// let first: Vec<_> = heap.drain_sorted().take(2).collect();
    /// assert_eq!(first, [1, 2]);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, E> {
        DrainSorted::new(self)
    }

    /// Removes all elements. The capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The number of elements in the queue.
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the queue can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }
}

impl<E: Clone> Clone for PriorityQueue<E> {
    /// Clones the elements; the comparator and equality function are shared.
    fn clone(&self) -> Self {
        PriorityQueue {
            data: self.data.clone(),
            comparator: Arc::clone(&self.comparator),
            equality: self.equality.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.comparator = Arc::clone(&source.comparator);
        self.equality.clone_from(&source.equality);
    }
}

impl<E: Ord + 'static> Default for PriorityQueue<E> {
    /// Creates an empty `PriorityQueue<E>` with the natural ordering.
    #[inline]
    fn default() -> PriorityQueue<E> {
        PriorityQueue::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for PriorityQueue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<E: Ord + 'static> From<Vec<E>> for PriorityQueue<E> {
    /// Converts a vector into a naturally ordered queue.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<E>) -> PriorityQueue<E> {
        PriorityQueue::from_parts(vec, ordering::shared(ordering::natural::<E>()), None)
    }
}

impl<E: Ord + 'static, const N: usize> From<[E; N]> for PriorityQueue<E> {
    /// ```
    /// use comparator_heap::PriorityQueue;
    ///
    /// let mut h1 = PriorityQueue::from([1, 4, 2, 3]);
    /// let mut h2: PriorityQueue<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [E; N]) -> Self {
        PriorityQueue::from(Vec::from(arr))
    }
}

impl<E> From<PriorityQueue<E>> for Vec<E> {
    fn from(heap: PriorityQueue<E>) -> Vec<E> {
        heap.data
    }
}

impl<E: Ord + 'static> FromIterator<E> for PriorityQueue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> PriorityQueue<E> {
        PriorityQueue::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<E> IntoIterator for PriorityQueue<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    /// Creates a consuming iterator that moves each element out of the
    /// queue in storage (heap) order.
    fn into_iter(self) -> IntoIter<E> {
        IntoIter::new(self.data.into_iter())
    }
}

impl<'a, E> IntoIterator for &'a PriorityQueue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

impl<E> Extend<E> for PriorityQueue<E> {
    #[inline]
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        let start = self.data.len();
        self.data.extend(iter);
        self.rebuild_tail(start);
    }
}

impl<'a, E: Copy + 'a> Extend<&'a E> for PriorityQueue<E> {
    fn extend<I: IntoIterator<Item = &'a E>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
