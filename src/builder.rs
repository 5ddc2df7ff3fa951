//! Runtime configuration of queues
//!
//! The typed constructors (`new`, `with_comparator`) settle the ordering at
//! compile time. [`QueueBuilder`] is for orderings decided at runtime: the
//! comparator is boxed, and forgetting to configure one is reported once, by
//! [`build`](QueueBuilder::build), rather than on first use.
//!
//! # Example
//!
//! ```rust
//! use fast_priority_queue::{QueueBuilder, QueueError};
//!
//! let descending = true;
//! let mut builder = QueueBuilder::<i32>::new().capacity(64);
//! if descending {
//!     builder = builder.comparator(|a: &i32, b: &i32| b.cmp(a));
//! }
//! let mut queue = builder.build::<&str>()?;
//! queue.push("small", 1);
//! queue.push("large", 100);
//! assert_eq!(queue.pop(), Ok("large"));
//!
//! assert_eq!(
//!     QueueBuilder::<i32>::new().build::<&str>().err(),
//!     Some(QueueError::MissingComparator)
//! );
//! # Ok::<(), QueueError>(())
//! ```

use crate::min_queue::MinQueue;
use crate::priority_queue::MinPriorityQueue;
use crate::traits::QueueError;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// A type-erased comparator over `P`
pub type BoxedComparator<P> = Box<dyn Fn(&P, &P) -> Ordering + Send + Sync>;

/// Builder for queues whose ordering is chosen at runtime
pub struct QueueBuilder<P> {
    comparator: Option<BoxedComparator<P>>,
    capacity: usize,
}

impl<P> QueueBuilder<P> {
    /// Starts a builder with no ordering and no pre-allocation
    pub fn new() -> Self {
        Self {
            comparator: None,
            capacity: 0,
        }
    }

    /// Orders priorities with `cmp`, replacing any earlier choice
    pub fn comparator<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&P, &P) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Box::new(cmp));
        self
    }

    /// Orders priorities by `P: Ord`, replacing any earlier choice
    pub fn natural_order(self) -> Self
    where
        P: Ord + 'static,
    {
        self.comparator(|a: &P, b: &P| a.cmp(b))
    }

    /// Pre-sizes the node arena
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns true if an ordering has been configured
    pub fn has_comparator(&self) -> bool {
        self.comparator.is_some()
    }

    /// Builds a keyed queue storing values of type `V`
    ///
    /// # Errors
    /// Returns [`QueueError::MissingComparator`] if neither
    /// [`comparator`](Self::comparator) nor
    /// [`natural_order`](Self::natural_order) was called.
    pub fn build<V>(self) -> Result<MinPriorityQueue<V, P, BoxedComparator<P>>, QueueError> {
        let (comparator, capacity) = self.into_parts()?;
        Ok(MinPriorityQueue::with_capacity_and_comparator(
            capacity, comparator,
        ))
    }

    /// Builds a single-key queue whose values are the priorities
    ///
    /// # Errors
    /// Returns [`QueueError::MissingComparator`] if no ordering was configured.
    pub fn build_min_queue(self) -> Result<MinQueue<P, BoxedComparator<P>>, QueueError> {
        let (comparator, capacity) = self.into_parts()?;
        Ok(MinQueue::with_capacity_and_comparator(capacity, comparator))
    }

    fn into_parts(self) -> Result<(BoxedComparator<P>, usize), QueueError> {
        match self.comparator {
            Some(comparator) => Ok((comparator, self.capacity)),
            None => {
                debug!(
                    priority = std::any::type_name::<P>(),
                    "queue built without an ordering"
                );
                Err(QueueError::MissingComparator)
            }
        }
    }
}

impl<P> Default for QueueBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for QueueBuilder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueBuilder")
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .field("capacity", &self.capacity)
            .finish()
    }
}
