//! Orderings used by the queues
//!
//! A queue never calls `Ord` directly; it asks its [`Comparator`]. Three kinds
//! are provided:
//!
//! - [`NaturalOrder`] delegates to `Ord` and is the default type parameter
//! - any `Fn(&T, &T) -> Ordering` closure is a comparator
//! - [`Reversed`] flips another comparator, turning a min-queue into a max-queue

use std::cmp::Ordering;

/// A total order over `T`
pub trait Comparator<T: ?Sized> {
    /// Compares two values
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The order given by `T: Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Reverses the order of the wrapped comparator
///
/// ```rust
/// use fast_priority_queue::MinQueue;
/// use fast_priority_queue::compare::{NaturalOrder, Reversed};
///
/// let mut queue = MinQueue::with_comparator(Reversed(NaturalOrder));
/// queue.push(1);
/// queue.push(3);
/// queue.push(2);
/// assert_eq!(queue.pop(), Ok(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders `(value, priority)` entries by their priority alone
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ByPriority<C>(pub(crate) C);

impl<V, P, C: Comparator<P>> Comparator<(V, P)> for ByPriority<C> {
    #[inline]
    fn compare(&self, a: &(V, P), b: &(V, P)) -> Ordering {
        self.0.compare(&a.1, &b.1)
    }
}
