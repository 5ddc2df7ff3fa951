//! Circular doubly-linked rings over index handles.
//!
//! This crate provides the ring primitives used by forest-shaped heaps, where
//! nodes live in an arena and refer to each other through copyable keys
//! rather than pointers.
//!
//! # Rings
//!
//! In a ring:
//! - A single node points to itself (both `left` and `right`)
//! - There is no head or tail - any node can be the entry point
//! - Splicing a node in or out is O(1)
//! - Iteration wraps around (must track the starting point)
//!
//! The storage is abstracted by [`RingLinks`], so the same operations work
//! for a `slotmap`, a `Vec` indexed by `usize`, or anything else that can
//! read and write a node's two neighbour fields.
//!
//! # Example
//!
//! ```rust
//! use index_ring::{RingLink, RingLinks, RingOps};
//!
//! struct Links(Vec<RingLink<usize>>);
//!
//! impl RingLinks<usize> for Links {
//!     fn link(&self, key: usize) -> RingLink<usize> {
//!         self.0[key]
//!     }
//!     fn link_mut(&mut self, key: usize) -> &mut RingLink<usize> {
//!         &mut self.0[key]
//!     }
//! }
//!
//! let mut links = Links((0..3).map(RingLink::singleton).collect());
//! let ops = RingOps::new();
//!
//! ops.insert_after(&mut links, 0, 1);
//! ops.insert_after(&mut links, 1, 2);
//!
//! assert_eq!(ops.count(&links, 0), 3);
//! assert_eq!(ops.iter(&links, 1).collect::<Vec<_>>(), vec![1, 2, 0]);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

use core::fmt;

// =============================================================================
// RingLink
// =============================================================================

/// The two neighbour fields every ring member carries.
///
/// A detached node is represented as a singleton ring: both fields hold the
/// node's own key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingLink<K> {
    /// Previous member of the ring.
    pub left: K,
    /// Next member of the ring.
    pub right: K,
}

impl<K: Copy> RingLink<K> {
    /// Creates the link of a singleton ring holding only `key`.
    #[inline]
    pub const fn singleton(key: K) -> Self {
        RingLink {
            left: key,
            right: key,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for RingLink<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RingLink({:?} <- * -> {:?})", self.left, self.right)
    }
}

// =============================================================================
// RingLinks
// =============================================================================

/// Access to the ring links of nodes stored behind index handles.
///
/// Implementors must return the link of a live node for every key passed in.
/// Passing a stale key is a logic error; implementations are free to panic.
pub trait RingLinks<K: Copy + Eq> {
    /// Returns a copy of the link of `key`.
    fn link(&self, key: K) -> RingLink<K>;

    /// Returns the link of `key` for in-place rewiring.
    fn link_mut(&mut self, key: K) -> &mut RingLink<K>;

    /// Gets the previous member of the ring.
    #[inline]
    fn left(&self, key: K) -> K {
        self.link(key).left
    }

    /// Gets the next member of the ring.
    #[inline]
    fn right(&self, key: K) -> K {
        self.link(key).right
    }
}

// =============================================================================
// RingOps
// =============================================================================

/// Operations for manipulating rings stored behind [`RingLinks`].
///
/// All operations except [`count`](RingOps::count) and iteration are O(1).
#[derive(Clone, Copy, Default, Debug)]
pub struct RingOps;

impl RingOps {
    /// Creates a new `RingOps`.
    #[inline]
    pub const fn new() -> Self {
        RingOps
    }

    /// Turns `key` into a ring of one element.
    ///
    /// Neighbours are not updated; only use this on a node that has already
    /// been removed from its ring, or whose ring is being rebuilt.
    #[inline]
    pub fn make_singleton<K, S>(&self, store: &mut S, key: K)
    where
        K: Copy + Eq,
        S: RingLinks<K> + ?Sized,
    {
        *store.link_mut(key) = RingLink::singleton(key);
    }

    /// Returns `true` if `key` is alone in its ring.
    #[inline]
    pub fn is_singleton<K, S>(&self, store: &S, key: K) -> bool
    where
        K: Copy + Eq,
        S: RingLinks<K> + ?Sized,
    {
        store.right(key) == key
    }

    /// Inserts `new` to the right of `at`.
    ///
    /// `new` must be a singleton ring (detached) and must not be `at`.
    #[inline]
    pub fn insert_after<K, S>(&self, store: &mut S, at: K, new: K)
    where
        K: Copy + Eq,
        S: RingLinks<K> + ?Sized,
    {
        debug_assert!(at != new, "cannot insert a node next to itself");
        debug_assert!(self.is_singleton(store, new), "new is already in a ring");

        let next = store.right(at);

        store.link_mut(new).left = at;
        store.link_mut(new).right = next;
        store.link_mut(at).right = new;
        store.link_mut(next).left = new;
    }

    /// Removes `key` from its ring and leaves it as a singleton.
    ///
    /// Returns `true` if `key` was the only element (the ring is now gone),
    /// `false` if other members remain.
    #[inline]
    pub fn remove<K, S>(&self, store: &mut S, key: K) -> bool
    where
        K: Copy + Eq,
        S: RingLinks<K> + ?Sized,
    {
        let RingLink { left, right } = store.link(key);

        if right == key {
            return true;
        }

        store.link_mut(left).right = right;
        store.link_mut(right).left = left;
        self.make_singleton(store, key);
        false
    }

    /// Counts the members of the ring containing `start`.
    ///
    /// This is O(n) - use sparingly.
    pub fn count<K, S>(&self, store: &S, start: K) -> usize
    where
        K: Copy + Eq,
        S: RingLinks<K> + ?Sized,
    {
        self.iter(store, start).count()
    }

    /// Iterates over the ring starting at `start`, moving rightwards.
    ///
    /// The iterator yields `start` first and stops before wrapping around.
    #[inline]
    pub fn iter<'a, K, S>(&self, store: &'a S, start: K) -> RingIter<'a, K, S>
    where
        K: Copy + Eq,
        S: RingLinks<K> + ?Sized,
    {
        RingIter {
            store,
            start,
            next: Some(start),
        }
    }
}

// =============================================================================
// RingIter
// =============================================================================

/// Iterator over the keys of one ring, created by [`RingOps::iter`].
pub struct RingIter<'a, K, S: ?Sized> {
    store: &'a S,
    start: K,
    next: Option<K>,
}

impl<K, S> Iterator for RingIter<'_, K, S>
where
    K: Copy + Eq,
    S: RingLinks<K> + ?Sized,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let current = self.next?;
        let right = self.store.right(current);
        self.next = if right == self.start {
            None
        } else {
            Some(right)
        };
        Some(current)
    }
}

// =============================================================================
// Tests
// =============================================================================
