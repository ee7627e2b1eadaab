use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by the fallible operations of a
/// [`PriorityQueue`](crate::PriorityQueue).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// An equality-based lookup was requested, but the queue was built
    /// without an equality function.
    ///
    /// Element types implementing [`PartialEq`] can use
    /// [`contains`](crate::PriorityQueue::contains) and
    /// [`remove`](crate::PriorityQueue::remove) instead.
    #[error("type is not equality-comparable and no equality function was configured")]
    NoEquality,

    /// The backing storage could not grow to hold another element.
    #[error("failed to grow queue storage: {0}")]
    Reserve(#[from] TryReserveError),
}
