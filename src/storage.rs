//! Arena storage for forest nodes
//!
//! Nodes live in a [`SlotMap`] and refer to each other through [`NodeKey`]s.
//! Parent, child and sibling references are plain keys, so the cyclic sibling
//! rings need no reference counting and no raw pointers.
//!
//! # Characteristics
//! - Contiguous memory allocation (better cache locality)
//! - Generational keys, so a stale key is caught instead of aliasing a new node
//! - Nodes are dropped with the arena; no manual teardown

use index_ring::{RingLink, RingLinks};
use slotmap::{new_key_type, SlotMap};
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Stable handle of a node inside a [`NodeArena`]
    pub(crate) struct NodeKey;
}

/// A forest node
///
/// `parent` is `None` exactly when the node is a root. `child` points at one
/// arbitrary member of the child ring and is `None` iff `degree == 0`.
pub(crate) struct Node<E> {
    pub(crate) entry: E,
    pub(crate) degree: usize,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) child: Option<NodeKey>,
    pub(crate) ring: RingLink<NodeKey>,
}

/// Slot-map backed node storage
pub(crate) struct NodeArena<E> {
    slots: SlotMap<NodeKey, Node<E>>,
}

impl<E> NodeArena<E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Stores `entry` as a detached node: a singleton ring with no relatives.
    pub(crate) fn insert(&mut self, entry: E) -> NodeKey {
        self.slots.insert_with_key(|key| Node {
            entry,
            degree: 0,
            parent: None,
            child: None,
            ring: RingLink::singleton(key),
        })
    }

    pub(crate) fn remove(&mut self, key: NodeKey) -> Option<Node<E>> {
        self.slots.remove(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<E> Index<NodeKey> for NodeArena<E> {
    type Output = Node<E>;

    #[inline]
    fn index(&self, key: NodeKey) -> &Node<E> {
        &self.slots[key]
    }
}

impl<E> IndexMut<NodeKey> for NodeArena<E> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut Node<E> {
        &mut self.slots[key]
    }
}

impl<E> RingLinks<NodeKey> for NodeArena<E> {
    #[inline]
    fn link(&self, key: NodeKey) -> RingLink<NodeKey> {
        self.slots[key].ring
    }

    #[inline]
    fn link_mut(&mut self, key: NodeKey) -> &mut RingLink<NodeKey> {
        &mut self.slots[key].ring
    }
}
