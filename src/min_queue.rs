//! Single-key min-priority queue
//!
//! [`MinQueue`] stores values that are their own priority. Ordering comes
//! from `V: Ord` by default, or from any [`Comparator`] supplied at
//! construction.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity         |
//! |------------|--------------------|
//! | `push`     | O(1)               |
//! | `peek`     | O(1)               |
//! | `pop`      | O(log n) amortized |
//! | `contains` | O(n)               |
//! | `iter`     | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use fast_priority_queue::MinQueue;
//!
//! let mut queue = MinQueue::new();
//! queue.push(5);
//! queue.push(3);
//! queue.push(4);
//!
//! assert_eq!(queue.peek(), Ok(&3));
//! assert_eq!(queue.pop(), Ok(3));
//! assert_eq!(queue.len(), 2);
//! ```

use crate::compare::{Comparator, NaturalOrder};
use crate::forest::{self, Forest};
use crate::traits::{PriorityQueue, QueueError};
use std::fmt;

/// A min-priority queue whose values are their own priority
///
/// Not safe for concurrent mutation; wrap it in a lock to share it.
pub struct MinQueue<V, C = NaturalOrder> {
    forest: Forest<V, C>,
}

impl<V: Ord> MinQueue<V> {
    /// Creates an empty queue ordered by `V: Ord`
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty queue with room for `capacity` values before the
    /// node arena reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<V: Ord> Default for MinQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: Comparator<V>> MinQueue<V, C> {
    /// Creates an empty queue ordered by `cmp`
    ///
    /// ```rust
    /// use fast_priority_queue::MinQueue;
    ///
    /// let mut queue = MinQueue::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// queue.push("three");
    /// queue.push("on");
    /// assert_eq!(queue.pop(), Ok("on"));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Creates an empty queue ordered by `cmp` with a pre-sized node arena
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            forest: Forest::with_capacity(capacity, cmp),
        }
    }

    /// Returns the comparator ordering this queue
    pub fn comparator(&self) -> &C {
        self.forest.comparator()
    }

    /// Returns the number of values in the queue
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    /// Returns true if the queue holds no values
    pub fn is_empty(&self) -> bool {
        self.forest.len() == 0
    }

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(1) worst case; all restructuring is deferred to [`pop`](Self::pop).
    pub fn push(&mut self, value: V) {
        self.forest.push(value);
    }

    /// Alias for [`push`](Self::push)
    pub fn enqueue(&mut self, value: V) {
        self.push(value);
    }

    /// Returns the minimum value without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&V, QueueError> {
        self.forest.peek().ok_or(QueueError::Empty)
    }

    /// Removes and returns the minimum value
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty; the queue is left
    /// untouched.
    pub fn pop(&mut self) -> Result<V, QueueError> {
        self.forest.pop().ok_or(QueueError::Empty)
    }

    /// Alias for [`pop`](Self::pop)
    pub fn dequeue(&mut self) -> Result<V, QueueError> {
        self.pop()
    }

    /// Returns true if some stored value equals `value`
    ///
    /// This is a linear scan over the whole forest.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|stored| stored == value)
    }

    /// Copies every value, in no particular order, into `buffer` starting at
    /// `offset`
    ///
    /// # Errors
    /// Returns [`QueueError::BufferTooSmall`] before writing anything if the
    /// values do not fit.
    pub fn copy_to(&self, buffer: &mut [V], offset: usize) -> Result<(), QueueError>
    where
        V: Clone,
    {
        let slots = export_slots(buffer, offset, self.len())?;
        for (slot, value) in slots.iter_mut().zip(self.iter()) {
            *slot = value.clone();
        }
        Ok(())
    }

    /// Removes every value
    pub fn clear(&mut self) {
        self.forest.clear();
    }

    /// Iterates over the values in no particular order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.forest.iter(),
        }
    }

    /// Drains the queue into a vector in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<V> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.forest.pop() {
            sorted.push(value);
        }
        sorted
    }
}

/// Returns the `needed` slots of `buffer` starting at `offset`, or the
/// error describing how short the buffer is
pub(crate) fn export_slots<T>(
    buffer: &mut [T],
    offset: usize,
    needed: usize,
) -> Result<&mut [T], QueueError> {
    let available = buffer.len().saturating_sub(offset);
    if available < needed {
        return Err(QueueError::BufferTooSmall { needed, available });
    }
    // An offset past the end is only reachable here with `needed == 0`
    let start = offset.min(buffer.len());
    Ok(&mut buffer[start..start + needed])
}

impl<V, C: Comparator<V>> PriorityQueue<V> for MinQueue<V, C> {
    fn len(&self) -> usize {
        MinQueue::len(self)
    }

    fn peek(&self) -> Result<&V, QueueError> {
        MinQueue::peek(self)
    }

    fn pop(&mut self) -> Result<V, QueueError> {
        MinQueue::pop(self)
    }

    fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        MinQueue::contains(self, value)
    }

    fn clear(&mut self) {
        MinQueue::clear(self);
    }
}

impl<V: fmt::Debug, C: Comparator<V>> fmt::Debug for MinQueue<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<V: Ord> FromIterator<V> for MinQueue<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl<V, C: Comparator<V>> Extend<V> for MinQueue<V, C> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, V, C: Comparator<V>> IntoIterator for &'a MinQueue<V, C> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

/// Iterator over the values of a [`MinQueue`], created by [`MinQueue::iter`]
#[derive(Clone)]
pub struct Iter<'a, V> {
    inner: forest::Iter<'a, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
