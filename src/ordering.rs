//! Ordering and equality functions for [`PriorityQueue`](crate::PriorityQueue).
//!
//! A queue never inspects its element type to pick an order. Instead the
//! caller selects one of the constructors below (or passes any closure of
//! the right shape). [`PriorityQueue::new`](crate::PriorityQueue::new)
//! picks [`natural`] automatically for [`Ord`] types.
//!
//! # Examples
//!
//! ```
//! use comparator_heap::{ordering, PriorityQueue};
//!
//! let mut heap = PriorityQueue::with_comparator(ordering::partial::<f64>());
//! heap.add(2.5);
//! heap.add(-1.0);
//! heap.add(0.25);
//!
//! assert_eq!(heap.poll(), -1.0);
//! assert_eq!(heap.poll(), 0.25);
//! assert_eq!(heap.poll(), 2.5);
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

/// A shared three-way comparison between two elements.
///
/// The function must be a strict weak ordering, otherwise the order in
/// which elements leave the queue is unspecified.
pub type Comparator<E> = Arc<dyn Fn(&E, &E) -> Ordering + Send + Sync>;

/// A shared equality test between two elements.
pub type Equality<E> = Arc<dyn Fn(&E, &E) -> bool + Send + Sync>;

/// The natural order of `T` as given by [`Ord`].
///
/// Covers integers (without the overflow a subtraction based comparison
/// would have), `String`, `&str` and every other [`Ord`] type.
pub fn natural<T: Ord>() -> impl Fn(&T, &T) -> Ordering + Send + Sync + Copy {
    |a: &T, b: &T| a.cmp(b)
}

/// Orders by [`PartialOrd`]; pairs without an order compare as equal.
///
/// This is the ordering for floating-point elements. A `NaN` compares
/// equal to everything, so a queue holding `NaN`s has no meaningful order.
pub fn partial<T: PartialOrd>() -> impl Fn(&T, &T) -> Ordering + Send + Sync + Copy {
    |a: &T, b: &T| a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Lexicographic byte order of anything that can be viewed as a `str`.
pub fn lexicographic<S: AsRef<str>>() -> impl Fn(&S, &S) -> Ordering + Send + Sync + Copy {
    |a: &S, b: &S| a.as_ref().cmp(b.as_ref())
}

/// Orders elements by a key extracted from each of them.
///
/// ```
/// use comparator_heap::{ordering, PriorityQueue};
///
/// let mut heap = PriorityQueue::with_comparator(ordering::by_key(|s: &String| s.len()));
/// heap.add("three".to_string());
/// heap.add("to".to_string());
///
/// assert_eq!(heap.poll(), "to");
/// ```
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering + Send + Sync
where
    K: Ord,
    F: Fn(&T) -> K + Send + Sync,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

/// Inverts `cmp`, turning a min-queue into a max-queue.
pub fn reversed<T, C>(cmp: C) -> impl Fn(&T, &T) -> Ordering + Send + Sync
where
    C: Fn(&T, &T) -> Ordering + Send + Sync,
{
    move |a: &T, b: &T| cmp(b, a)
}

/// Treats every pair of elements as equal.
///
/// Never picked implicitly. A queue ordered by it releases its elements
/// in an unspecified order.
pub fn indifferent<T>() -> impl Fn(&T, &T) -> Ordering + Send + Sync + Copy {
    |_: &T, _: &T| Ordering::Equal
}

/// Wraps an ordering function into a shared [`Comparator`].
pub fn shared<T, C>(cmp: C) -> Comparator<T>
where
    C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    Arc::new(cmp)
}

/// Wraps an equality function into a shared [`Equality`].
pub fn shared_equality<T, F>(equals: F) -> Equality<T>
where
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    Arc::new(equals)
}
