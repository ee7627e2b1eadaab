use std::cmp::Ordering;
use std::fmt;

use crate::ordering::{self, Comparator, Equality};
use crate::queue::{PriorityQueue, DEFAULT_CAPACITY};

/// Configures and creates a [`PriorityQueue`].
///
/// A builder always carries an ordering: it is created from one
/// ([`new`](Builder::new), [`shared`](Builder::shared)) or seeded with the
/// natural order of the element type ([`natural`](Builder::natural),
/// [`partial`](Builder::partial)). The remaining options may be set any
/// number of times and the last call wins. Options that are never set keep
/// their defaults: a capacity of 11 and no equality function.
///
/// # Examples
///
/// ```
/// use comparator_heap::PriorityQueue;
///
/// #[derive(Debug, Clone, Default)]
/// struct Job {
///     id: u32,
///     priority: u8,
/// }
///
/// let mut jobs = PriorityQueue::builder_by(|a: &Job, b: &Job| a.priority.cmp(&b.priority))
///     .capacity(64)
///     .equality(|a: &Job, b: &Job| a.id == b.id)
///     .build();
///
/// jobs.add(Job { id: 1, priority: 3 });
/// jobs.add(Job { id: 2, priority: 1 });
///
/// assert_eq!(jobs.try_contains(&Job { id: 1, priority: 0 }), Ok(true));
/// assert_eq!(jobs.poll().id, 2);
/// ```
#[must_use = "a builder does nothing until `build` is called"]
pub struct Builder<E> {
    capacity: usize,
    comparator: Comparator<E>,
    equality: Option<Equality<E>>,
}

impl<E> Builder<E> {
    /// Creates a builder ordered by `compare`; the queue yields the least
    /// element first.
    pub fn new<F>(compare: F) -> Builder<E>
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        Builder::shared(ordering::shared(compare))
    }

    /// Creates a builder from an already shared ordering function, e.g.
    /// another queue's [`comparator`](PriorityQueue::comparator).
    pub fn shared(compare: Comparator<E>) -> Builder<E> {
        Builder {
            capacity: DEFAULT_CAPACITY,
            comparator: compare,
            equality: None,
        }
    }

    /// Pre-allocates room for `capacity` elements.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replaces the ordering function.
    pub fn comparator<F>(mut self, compare: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = ordering::shared(compare);
        self
    }

    /// Replaces the ordering function with an already shared one.
    pub fn shared_comparator(mut self, compare: Comparator<E>) -> Self {
        self.comparator = compare;
        self
    }

    /// Sets the equality function used by
    /// [`try_contains`](PriorityQueue::try_contains) and
    /// [`try_remove`](PriorityQueue::try_remove).
    pub fn equality<F>(mut self, equals: F) -> Self
    where
        F: Fn(&E, &E) -> bool + Send + Sync + 'static,
    {
        self.equality = Some(ordering::shared_equality(equals));
        self
    }

    /// Creates the queue.
    #[must_use]
    pub fn build(self) -> PriorityQueue<E> {
        PriorityQueue::from_parts(
            Vec::with_capacity(self.capacity),
            self.comparator,
            self.equality,
        )
    }
}

impl<E: Ord + 'static> Builder<E> {
    /// Creates a builder seeded with the natural order of `E`.
    pub fn natural() -> Builder<E> {
        Builder::new(ordering::natural::<E>())
    }
}

impl<E: PartialOrd + 'static> Builder<E> {
    /// Creates a builder seeded with [`ordering::partial`], the order for
    /// floating-point elements.
    ///
    /// ```
    /// use comparator_heap::Builder;
    ///
    /// let mut heap = Builder::partial().capacity(4).build();
    /// heap.add(0.5);
    /// heap.add(-2.0);
    /// assert_eq!(heap.poll(), -2.0);
    /// ```
    pub fn partial() -> Builder<E> {
        Builder::new(ordering::partial::<E>())
    }
}

impl<E: Ord + 'static> Default for Builder<E> {
    fn default() -> Self {
        Builder::natural()
    }
}

impl<E> fmt::Debug for Builder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("capacity", &self.capacity)
            .field("equality", &self.equality.is_some())
            .finish_non_exhaustive()
    }
}
