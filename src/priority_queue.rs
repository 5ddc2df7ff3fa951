//! Keyed min-priority queue
//!
//! [`MinPriorityQueue`] stores each value next to a separately ordered
//! priority. Only priorities are compared; values need no ordering at all.
//!
//! Values with equal priorities come back in an unspecified but
//! deterministic order.
//!
//! # Example
//!
//! ```rust
//! use fast_priority_queue::MinPriorityQueue;
//!
//! let mut queue = MinPriorityQueue::new();
//! queue.push("write report", 2);
//! queue.push("fix outage", 0);
//! queue.push("lunch", 1);
//!
//! assert_eq!(queue.peek_pair(), Ok((&"fix outage", &0)));
//! assert_eq!(queue.pop(), Ok("fix outage"));
//! assert_eq!(queue.pop_pair(), Ok(("lunch", 1)));
//! ```

use crate::compare::{ByPriority, Comparator, NaturalOrder};
use crate::forest::{self, Forest};
use crate::min_queue::export_slots;
use crate::traits::{PriorityQueue, QueueError};
use std::fmt;

/// A min-priority queue of values ordered by an attached priority
///
/// Not safe for concurrent mutation; wrap it in a lock to share it.
pub struct MinPriorityQueue<V, P, C = NaturalOrder> {
    forest: Forest<(V, P), ByPriority<C>>,
}

impl<V, P: Ord> MinPriorityQueue<V, P> {
    /// Creates an empty queue ordered by `P: Ord`
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty queue with room for `capacity` entries before the
    /// node arena reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<V, P: Ord> Default for MinPriorityQueue<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P, C: Comparator<P>> MinPriorityQueue<V, P, C> {
    /// Creates an empty queue whose priorities are ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Creates an empty queue ordered by `cmp` with a pre-sized node arena
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            forest: Forest::with_capacity(capacity, ByPriority(cmp)),
        }
    }

    /// Returns the comparator ordering the priorities
    pub fn comparator(&self) -> &C {
        &self.forest.comparator().0
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    /// Returns true if the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.forest.len() == 0
    }

    /// Inserts `value` with the given `priority`
    ///
    /// # Time Complexity
    /// O(1) worst case.
    pub fn push(&mut self, value: V, priority: P) {
        self.forest.push((value, priority));
    }

    /// Inserts a `(value, priority)` pair
    pub fn push_pair(&mut self, pair: (V, P)) {
        self.forest.push(pair);
    }

    /// Alias for [`push`](Self::push)
    pub fn enqueue(&mut self, value: V, priority: P) {
        self.push(value, priority);
    }

    /// Returns the value with the minimum priority without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&V, QueueError> {
        self.peek_pair().map(|(value, _)| value)
    }

    /// Returns the minimum entry without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    pub fn peek_pair(&self) -> Result<(&V, &P), QueueError> {
        self.forest
            .peek()
            .map(|(value, priority)| (value, priority))
            .ok_or(QueueError::Empty)
    }

    /// Removes the minimum entry and returns its value
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    pub fn pop(&mut self) -> Result<V, QueueError> {
        self.pop_pair().map(|(value, _)| value)
    }

    /// Removes the minimum entry and returns it whole
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty; the queue is left
    /// untouched.
    pub fn pop_pair(&mut self) -> Result<(V, P), QueueError> {
        self.forest.pop().ok_or(QueueError::Empty)
    }

    /// Alias for [`pop`](Self::pop)
    pub fn dequeue(&mut self) -> Result<V, QueueError> {
        self.pop()
    }

    /// Alias for [`pop_pair`](Self::pop_pair)
    pub fn dequeue_pair(&mut self) -> Result<(V, P), QueueError> {
        self.pop_pair()
    }

    /// Returns true if some entry holds a value equal to `value`
    ///
    /// This is a linear scan over the whole forest.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|stored| stored == value)
    }

    /// Returns true if some entry equals both `value` and `priority`
    ///
    /// Priority equality here is `PartialEq`, not the comparator.
    pub fn contains_pair(&self, value: &V, priority: &P) -> bool
    where
        V: PartialEq,
        P: PartialEq,
    {
        self.iter()
            .any(|(stored, stored_priority)| stored == value && stored_priority == priority)
    }

    /// Copies every entry, in no particular order, into `buffer` starting at
    /// `offset`
    ///
    /// # Errors
    /// Returns [`QueueError::BufferTooSmall`] before writing anything if the
    /// entries do not fit.
    pub fn copy_to(&self, buffer: &mut [(V, P)], offset: usize) -> Result<(), QueueError>
    where
        V: Clone,
        P: Clone,
    {
        let slots = export_slots(buffer, offset, self.len())?;
        for (slot, (value, priority)) in slots.iter_mut().zip(self.iter()) {
            *slot = (value.clone(), priority.clone());
        }
        Ok(())
    }

    /// Copies every value, in no particular order, into `buffer` starting at
    /// `offset`
    ///
    /// # Errors
    /// Returns [`QueueError::BufferTooSmall`] before writing anything if the
    /// values do not fit.
    pub fn copy_values_to(&self, buffer: &mut [V], offset: usize) -> Result<(), QueueError>
    where
        V: Clone,
    {
        let slots = export_slots(buffer, offset, self.len())?;
        for (slot, value) in slots.iter_mut().zip(self.values()) {
            *slot = value.clone();
        }
        Ok(())
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.forest.clear();
    }

    /// Iterates over `(value, priority)` pairs in no particular order
    pub fn iter(&self) -> Iter<'_, V, P> {
        Iter {
            inner: self.forest.iter(),
        }
    }

    /// Iterates over the values in no particular order
    pub fn values(&self) -> Values<'_, V, P> {
        Values {
            inner: self.forest.iter(),
        }
    }

    /// Drains the queue into a vector of entries in ascending priority order
    pub fn into_sorted_vec(mut self) -> Vec<(V, P)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(pair) = self.forest.pop() {
            sorted.push(pair);
        }
        sorted
    }
}

impl<V, P, C: Comparator<P>> PriorityQueue<V> for MinPriorityQueue<V, P, C> {
    fn len(&self) -> usize {
        MinPriorityQueue::len(self)
    }

    fn peek(&self) -> Result<&V, QueueError> {
        MinPriorityQueue::peek(self)
    }

    fn pop(&mut self) -> Result<V, QueueError> {
        MinPriorityQueue::pop(self)
    }

    fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        MinPriorityQueue::contains(self, value)
    }

    fn clear(&mut self) {
        MinPriorityQueue::clear(self);
    }
}

impl<V: fmt::Debug, P: fmt::Debug, C: Comparator<P>> fmt::Debug for MinPriorityQueue<V, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V, P: Ord> FromIterator<(V, P)> for MinPriorityQueue<V, P> {
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl<V, P, C: Comparator<P>> Extend<(V, P)> for MinPriorityQueue<V, P, C> {
    fn extend<I: IntoIterator<Item = (V, P)>>(&mut self, iter: I) {
        for pair in iter {
            self.push_pair(pair);
        }
    }
}

impl<'a, V, P, C: Comparator<P>> IntoIterator for &'a MinPriorityQueue<V, P, C> {
    type Item = (&'a V, &'a P);
    type IntoIter = Iter<'a, V, P>;

    fn into_iter(self) -> Iter<'a, V, P> {
        self.iter()
    }
}

/// Iterator over the entries of a [`MinPriorityQueue`]
#[derive(Clone)]
pub struct Iter<'a, V, P> {
    inner: forest::Iter<'a, (V, P)>,
}

impl<'a, V, P> Iterator for Iter<'a, V, P> {
    type Item = (&'a V, &'a P);

    fn next(&mut self) -> Option<(&'a V, &'a P)> {
        self.inner.next().map(|(value, priority)| (value, priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, P> ExactSizeIterator for Iter<'_, V, P> {}

/// Iterator over the values of a [`MinPriorityQueue`]
#[derive(Clone)]
pub struct Values<'a, V, P> {
    inner: forest::Iter<'a, (V, P)>,
}

impl<'a, V, P> Iterator for Values<'a, V, P> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(value, _)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, P> ExactSizeIterator for Values<'_, V, P> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_counts() {
        let mut queue = MinPriorityQueue::new();
        for priority in [5, 0, 4, 2, 3, 1] {
            queue.enqueue(priority, priority);
        }
        assert_eq!(queue.len(), 6);
    }

    #[test]
    fn test_peek_and_drain_scenario() {
        let mut queue = MinPriorityQueue::new();
        for priority in [5, 0, 4, 2, 3, 1] {
            queue.push(priority, priority);
        }

        assert_eq!(queue.peek_pair(), Ok((&0, &0)));

        let mut drained = Vec::new();
        while !queue.is_empty() {
            let (value, priority) = queue.dequeue_pair().unwrap();
            assert_eq!(value, priority);
            drained.push(priority);
        }
        assert_eq!(drained, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_values_ordered_by_priority_only() {
        let mut queue = MinPriorityQueue::new();
        queue.push("z", 1);
        queue.push("a", 3);
        queue.push("m", 2);

        assert_eq!(queue.pop(), Ok("z"));
        assert_eq!(queue.pop(), Ok("m"));
        assert_eq!(queue.pop(), Ok("a"));
    }

    #[test]
    fn test_empty_contract() {
        let mut queue: MinPriorityQueue<&str, u32> = MinPriorityQueue::new();
        assert_eq!(queue.peek(), Err(QueueError::Empty));
        assert_eq!(queue.peek_pair(), Err(QueueError::Empty));
        assert_eq!(queue.pop(), Err(QueueError::Empty));
        assert_eq!(queue.pop_pair(), Err(QueueError::Empty));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_contains_and_contains_pair() {
        let mut queue = MinPriorityQueue::new();
        queue.push("a", 1);
        queue.push("b", 2);

        assert!(queue.contains(&"a"));
        assert!(queue.contains_pair(&"a", &1));
        assert!(!queue.contains_pair(&"a", &2));
        assert!(!queue.contains(&"c"));

        queue.pop().unwrap();
        assert!(!queue.contains(&"a"));
        assert!(queue.contains_pair(&"b", &2));
    }

    #[test]
    fn test_copy_to_and_copy_values_to() {
        let queue: MinPriorityQueue<char, i32> =
            [('a', 3), ('b', 1), ('c', 2)].into_iter().collect();

        let mut pairs = [(' ', 0); 3];
        queue.copy_to(&mut pairs, 0).unwrap();
        pairs.sort_unstable();
        assert_eq!(pairs, [('a', 3), ('b', 1), ('c', 2)]);

        let mut values = ['-'; 4];
        queue.copy_values_to(&mut values, 1).unwrap();
        assert_eq!(values[0], '-');
        let mut tail = values[1..].to_vec();
        tail.sort_unstable();
        assert_eq!(tail, vec!['a', 'b', 'c']);

        assert_eq!(
            queue.copy_values_to(&mut values, 2),
            Err(QueueError::BufferTooSmall {
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_copy_from_empty_queue_past_end_is_noop() {
        let queue: MinPriorityQueue<i32, i32> = MinPriorityQueue::new();
        assert_eq!(queue.copy_values_to(&mut [], 1), Ok(()));

        let mut values = [3; 2];
        assert_eq!(queue.copy_values_to(&mut values, usize::MAX), Ok(()));
        assert_eq!(values, [3; 2]);

        let mut pairs = [(0, 0); 1];
        assert_eq!(queue.copy_to(&mut pairs, 4), Ok(()));
        assert_eq!(pairs, [(0, 0)]);
    }

    #[test]
    fn test_custom_priority_comparator() {
        // Larger priority first
        let mut queue = MinPriorityQueue::with_comparator(|a: &u8, b: &u8| b.cmp(a));
        queue.push("low", 1);
        queue.push("high", 9);
        queue.push("mid", 5);
        assert_eq!(queue.peek(), Ok(&"high"));
        assert_eq!(
            queue.into_sorted_vec(),
            vec![("high", 9), ("mid", 5), ("low", 1)]
        );
    }

    #[test]
    fn test_values_need_no_ordering() {
        #[derive(Debug, PartialEq)]
        struct Job(&'static str);

        let mut queue = MinPriorityQueue::new();
        queue.push(Job("later"), 10);
        queue.push(Job("now"), 0);
        assert_eq!(queue.pop(), Ok(Job("now")));
        assert!(queue.contains(&Job("later")));
    }

    #[test]
    fn test_iterators_cover_all_entries() {
        let mut queue: MinPriorityQueue<i32, i32> = (0..20).map(|i| (i * 10, i)).collect();
        queue.pop_pair().unwrap();

        assert_eq!(queue.iter().len(), 19);
        assert_eq!(queue.values().len(), 19);
        let mut priorities: Vec<i32> = queue.iter().map(|(_, p)| *p).collect();
        priorities.sort_unstable();
        assert_eq!(priorities, (1..20).collect::<Vec<_>>());
        assert!(queue.iter().all(|(v, p)| *v == p * 10));
    }

    #[test]
    fn test_debug_map() {
        let mut queue = MinPriorityQueue::new();
        queue.push("x", 1);
        assert_eq!(format!("{queue:?}"), r#"{"x": 1}"#);
    }
}
