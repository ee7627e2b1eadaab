//! A binary min-heap priority queue whose order is a plain function.
//!
//! [`PriorityQueue`] follows the contract of Java's `PriorityQueue`: the
//! least element comes out first, the ordering is pluggable, and
//! [`contains`](PriorityQueue::contains) / [`remove`](PriorityQueue::remove)
//! scan the storage linearly. Queues are configured through a [`Builder`],
//! which always carries an ordering function and optionally an initial
//! capacity and an equality function.
//!
//! ```
//! use comparator_heap::{PriorityQueue, QueueError};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut people = PriorityQueue::with_comparator(|a: &Person, b: &Person| a.age.cmp(&b.age));
//! people.add(Person { name: "Kim".into(), age: 28 });
//! people.add(Person { name: "Lee".into(), age: 25 });
//!
//! assert_eq!(people.peek().name, "Lee");
//! assert!(people.contains(&Person { name: "Kim".into(), age: 28 }));
//!
//! // No equality function was configured.
//! assert_eq!(people.try_contains(&Person::default()), Err(QueueError::NoEquality));
//! ```

mod builder;
mod error;
mod hole;
mod iter;
pub mod ordering;
mod queue;

pub use builder::Builder;
pub use error::QueueError;
pub use iter::{Drain, DrainSorted, IntoIter, IntoIterSorted, Iter};
pub use ordering::{Comparator, Equality};
pub use queue::{PriorityQueue, DEFAULT_CAPACITY};
