//! Common traits and errors for the queues in this crate
//!
//! This module provides:
//!
//! - [`QueueError`]: the single error type returned by every fallible operation
//! - [`PriorityQueue`]: the operations shared by [`MinQueue`](crate::MinQueue)
//!   and [`MinPriorityQueue`](crate::MinPriorityQueue), so generic code can
//!   peek, pop and drain either flavor
//!
//! Insertion is deliberately not part of the trait: the single-key queue takes
//! one argument, the keyed queue takes a value and a priority.

use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// No ordering was configured for the priority type
    #[error("no comparator configured; supply one or opt into the natural order")]
    MissingComparator,
    /// The queue holds no elements
    #[error("cannot read or remove from an empty collection")]
    Empty,
    /// A bulk copy does not fit in the destination buffer
    #[error("destination buffer too small: need {needed} slots, {available} available")]
    BufferTooSmall {
        /// Slots required from the requested offset onwards
        needed: usize,
        /// Slots the buffer actually has from that offset
        available: usize,
    },
}

/// Operations shared by both min-priority queue flavors
///
/// `V` is the value type handed back to callers. For the single-key queue
/// this is also the ordered type; for the keyed queue the priority travels
/// separately and only the value is returned here.
///
/// # Example
///
/// ```rust
/// use fast_priority_queue::{MinQueue, PriorityQueue, QueueError};
///
/// fn drain<Q: PriorityQueue<i32>>(queue: &mut Q) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(value) = queue.pop() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut queue: MinQueue<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(drain(&mut queue), vec![1, 2, 3]);
/// assert_eq!(queue.peek(), Err(QueueError::Empty));
/// ```
pub trait PriorityQueue<V> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the minimum value without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&V, QueueError>;

    /// Removes and returns the minimum value
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    fn pop(&mut self) -> Result<V, QueueError>;

    /// Returns true if some stored value equals `value`
    ///
    /// # Time Complexity
    /// O(n): the forest has no index, every node is visited.
    fn contains(&self, value: &V) -> bool
    where
        V: PartialEq;

    /// Removes every element
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QueueError::Empty.to_string(),
            "cannot read or remove from an empty collection"
        );
        assert_eq!(
            QueueError::BufferTooSmall {
                needed: 4,
                available: 1
            }
            .to_string(),
            "destination buffer too small: need 4 slots, 1 available"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(QueueError::MissingComparator);
    }
}
