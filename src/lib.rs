//! Fast min-priority queues for Rust
//!
//! This crate provides two min-priority queues built on one lazy-merge
//! Fibonacci-style forest of circular doubly-linked trees:
//!
//! - **[`MinQueue`]**: values are their own priority
//! - **[`MinPriorityQueue`]**: each value carries a separately ordered priority
//!
//! Both offer O(1) insert and peek and O(log n) amortized extract-min.
//! Inserting never restructures anything; all merging is deferred to
//! extraction, which links roots of equal degree until each degree occurs at
//! most once.
//!
//! Nodes live in an arena and refer to each other by key, so the cyclic
//! sibling rings are plain safe Rust.
//!
//! There is no decrease-key or arbitrary delete: a value's
//! priority is fixed from insertion until it is popped.
//!
//! # Ordering
//!
//! With no further configuration the ordered type must be `Ord`. Any
//! [`Comparator`](compare::Comparator), including a plain closure, can be
//! supplied instead through `with_comparator`, and [`QueueBuilder`] covers
//! orderings only known at runtime.
//!
//! # Example
//!
//! ```rust
//! use fast_priority_queue::{MinPriorityQueue, MinQueue, QueueError};
//!
//! let mut numbers = MinQueue::new();
//! for n in [5, 3, 2, 4, 1] {
//!     numbers.push(n);
//! }
//! assert_eq!(numbers.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
//!
//! let mut tasks = MinPriorityQueue::new();
//! tasks.push("deploy", 2);
//! tasks.push("build", 1);
//! assert_eq!(tasks.pop_pair(), Ok(("build", 1)));
//! assert_eq!(tasks.pop(), Ok("deploy"));
//! assert_eq!(tasks.pop(), Err(QueueError::Empty));
//! ```
//!
//! # Concurrency
//!
//! The queues are single-threaded. They are `Send` when their contents are,
//! so they can be moved between threads or shared behind a mutex.

pub mod builder;
pub mod compare;
mod forest;
pub mod min_queue;
pub mod priority_queue;
mod storage;
pub mod traits;

pub use builder::{BoxedComparator, QueueBuilder};
pub use min_queue::MinQueue;
pub use priority_queue::MinPriorityQueue;
pub use traits::{PriorityQueue, QueueError};
