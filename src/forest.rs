//! Lazy-merge Fibonacci forest
//!
//! The engine behind both queue flavors. The structure is a collection of
//! heap-ordered trees whose roots form a circular doubly-linked ring; every
//! node's children form a ring of their own. `head` is the root holding the
//! minimum.
//!
//! - `push` splices a singleton next to the head: O(1) worst case, no merging.
//! - `pop` promotes the head's children to roots, removes the head and then
//!   consolidates, linking roots of equal degree until every degree occurs at
//!   most once: O(log n) amortized.
//! - Traversal visits each node once: O(n).
//!
//! There is no decrease-key and therefore no marking or cascading cuts. A
//! node's entry is immutable from insertion until it is popped.

use crate::compare::Comparator;
use crate::storage::{NodeArena, NodeKey};
use index_ring::{RingLinks, RingOps};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use tracing::trace;

/// A forest of heap-ordered trees over entries `E`, ordered by `C`
pub(crate) struct Forest<E, C> {
    nodes: NodeArena<E>,
    head: Option<NodeKey>,
    len: usize,
    cmp: C,
}

impl<E, C: Comparator<E>> Forest<E, C> {
    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            head: None,
            len: 0,
            cmp,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts an entry into the root ring
    ///
    /// The new node goes directly to the right of the head. It replaces the
    /// head only if it compares strictly less, so among equal entries the
    /// earliest one stays on top.
    pub(crate) fn push(&mut self, entry: E) {
        let node = self.nodes.insert(entry);

        match self.head {
            None => self.head = Some(node),
            Some(head) => {
                RingOps::new().insert_after(&mut self.nodes, head, node);
                if self.less(node, head) {
                    self.head = Some(node);
                }
            }
        }

        self.len += 1;
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<&E> {
        self.head.map(|head| &self.nodes[head].entry)
    }

    /// Removes and returns the minimum entry
    ///
    /// **Algorithm**:
    /// 1. Move each child of the head into the root ring, right of the head
    /// 2. Unlink the head from the root ring
    /// 3. If other roots remain, consolidate starting from the head's right
    ///    neighbour, which also finds the new minimum
    pub(crate) fn pop(&mut self) -> Option<E> {
        let head = self.head?;
        let ops = RingOps::new();

        let mut remaining = self.nodes[head].degree;
        let mut current = self.nodes[head].child;
        while remaining > 0 {
            let Some(child) = current else { break };
            let next = self.nodes.right(child);

            ops.remove(&mut self.nodes, child);
            self.nodes[child].parent = None;
            ops.insert_after(&mut self.nodes, head, child);

            current = Some(next);
            remaining -= 1;
        }

        let successor = self.nodes.right(head);
        let was_alone = ops.remove(&mut self.nodes, head);
        let node = self.nodes.remove(head)?;

        if was_alone {
            self.head = None;
        } else {
            self.head = Some(successor);
            self.consolidate(successor);
        }

        self.len -= 1;
        debug_assert_eq!(self.len, self.nodes.len());
        Some(node.entry)
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> Iter<'_, E> {
        let mut stack = SmallVec::new();
        if let Some(head) = self.head {
            stack.push(Frame::new(head));
        }
        Iter {
            nodes: &self.nodes,
            stack,
            remaining: self.len,
        }
    }

    /// Links roots of equal degree until each degree occurs at most once,
    /// then rebuilds the root ring and picks the new head
    ///
    /// Roots are collected before any linking so each one is processed
    /// exactly once. For each root, the degree table is probed at its degree;
    /// a hit is linked under whichever of the two is smaller and the probe
    /// moves up one degree, like carry propagation in a binary counter.
    ///
    /// On a tie the root being processed stays the parent and the one already
    /// in the table becomes its child.
    fn consolidate(&mut self, start: NodeKey) {
        let ops = RingOps::new();
        let roots: SmallVec<[NodeKey; 16]> = ops.iter(&self.nodes, start).collect();
        let mut by_degree: SmallVec<[Option<NodeKey>; 32]> = SmallVec::new();
        let mut max_degree = 0;

        for &root in &roots {
            let mut current = root;
            let mut degree = self.nodes[current].degree;

            while let Some(mut other) = by_degree.get(degree).copied().flatten() {
                if self.cmp.compare(&self.nodes[current].entry, &self.nodes[other].entry)
                    == Ordering::Greater
                {
                    std::mem::swap(&mut current, &mut other);
                }

                self.link(other, current);
                by_degree[degree] = None;
                degree += 1;
            }

            if by_degree.len() <= degree {
                by_degree.resize(degree + 1, None);
            }
            by_degree[degree] = Some(current);
            max_degree = max_degree.max(degree);
        }

        // Rebuild the root ring in ascending degree order
        self.head = None;
        let mut survivors = 0;
        for root in by_degree.iter().flatten().copied() {
            ops.make_singleton(&mut self.nodes, root);
            match self.head {
                None => self.head = Some(root),
                Some(head) => {
                    ops.insert_after(&mut self.nodes, head, root);
                    if self.less(root, head) {
                        self.head = Some(root);
                    }
                }
            }
            survivors += 1;
        }

        trace!(
            roots = roots.len(),
            survivors,
            max_degree,
            "consolidated root ring"
        );
    }

    /// Makes root `child` a child of root `parent`
    ///
    /// The caller has already decided that `parent` does not compare greater.
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        let ops = RingOps::new();
        ops.remove(&mut self.nodes, child);
        self.nodes[child].parent = Some(parent);

        match self.nodes[parent].child {
            None => self.nodes[parent].child = Some(child),
            Some(first) => ops.insert_after(&mut self.nodes, first, child),
        }

        self.nodes[parent].degree += 1;
    }

    #[inline]
    fn less(&self, a: NodeKey, b: NodeKey) -> bool {
        self.cmp.compare(&self.nodes[a].entry, &self.nodes[b].entry) == Ordering::Less
    }
}

/// One ring being walked by [`Iter`]
#[derive(Clone, Copy)]
struct Frame {
    first: NodeKey,
    current: NodeKey,
    descended: bool,
}

impl Frame {
    fn new(first: NodeKey) -> Self {
        Self {
            first,
            current: first,
            descended: false,
        }
    }
}

/// Pre-order walk of the forest
///
/// For every ring member, its whole child subtree is yielded before the
/// member itself, then the walk moves to the right sibling. The order is an
/// artifact of the forest shape and carries no meaning.
pub(crate) struct Iter<'a, E> {
    nodes: &'a NodeArena<E>,
    stack: SmallVec<[Frame; 16]>,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let nodes = self.nodes;
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.current;

            if !frame.descended {
                frame.descended = true;
                if let Some(child) = nodes[node].child {
                    self.stack.push(Frame::new(child));
                    continue;
                }
            }

            let right = nodes.right(node);
            if right == frame.first {
                self.stack.pop();
            } else {
                frame.current = right;
                frame.descended = false;
            }

            self.remaining -= 1;
            return Some(&nodes[node].entry);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
impl<E, C: Comparator<E>> Forest<E, C> {
    /// Walks every ring and panics on the first broken invariant
    pub(crate) fn check_invariants(&self) {
        let ops = RingOps::new();
        assert_eq!(self.len, self.nodes.len(), "len out of sync with arena");

        let Some(head) = self.head else {
            assert_eq!(self.len, 0, "no head but nodes remain");
            return;
        };
        assert!(self.nodes[head].parent.is_none(), "head is not a root");

        let mut reachable = 0;
        let mut pending = vec![(head, None)];
        while let Some((start, parent)) = pending.pop() {
            for key in ops.iter(&self.nodes, start) {
                reachable += 1;
                let node = &self.nodes[key];
                assert_eq!(self.nodes.left(node.ring.right), key, "ring links not mutual");
                assert_eq!(node.parent, parent, "parent pointer mismatch");

                if let Some(parent) = parent {
                    assert_ne!(
                        self.cmp.compare(&self.nodes[parent].entry, &node.entry),
                        Ordering::Greater,
                        "heap order violated"
                    );
                } else {
                    assert_ne!(
                        self.cmp.compare(&self.nodes[head].entry, &node.entry),
                        Ordering::Greater,
                        "head is not the minimum root"
                    );
                }

                match node.child {
                    Some(child) => {
                        assert_eq!(node.degree, ops.count(&self.nodes, child), "degree mismatch");
                        pending.push((child, Some(key)));
                    }
                    None => assert_eq!(node.degree, 0, "degree without children"),
                }
            }
        }
        assert_eq!(reachable, self.len, "unreachable nodes in arena");
    }

    fn root_degrees(&self) -> Vec<usize> {
        let ops = RingOps::new();
        match self.head {
            Some(head) => ops
                .iter(&self.nodes, head)
                .map(|key| self.nodes[key].degree)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{ByPriority, NaturalOrder};
    use proptest::prelude::*;

    fn forest_of(values: &[i32]) -> Forest<i32, NaturalOrder> {
        let mut forest = Forest::with_capacity(values.len(), NaturalOrder);
        for &value in values {
            forest.push(value);
        }
        forest
    }

    #[test]
    fn test_push_keeps_flat_root_ring() {
        let forest = forest_of(&[5, 3, 2, 4, 1]);
        forest.check_invariants();

        assert_eq!(forest.len(), 5);
        assert_eq!(forest.peek(), Some(&1));
        assert_eq!(forest.root_degrees(), vec![0; 5]);
    }

    #[test]
    fn test_push_splices_right_of_head() {
        let forest = forest_of(&[1, 2, 3, 4]);
        let ops = RingOps::new();
        let head = forest.head.unwrap();
        let ring: Vec<i32> = ops
            .iter(&forest.nodes, head)
            .map(|key| forest.nodes[key].entry)
            .collect();

        // Each insert lands immediately right of the unchanged head
        assert_eq!(ring, vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_pop_in_order() {
        let mut forest = forest_of(&[5, 3, 2, 4, 1]);
        let mut out = Vec::new();
        while let Some(value) = forest.pop() {
            forest.check_invariants();
            out.push(value);
        }
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
        assert_eq!(forest.len(), 0);
        assert!(forest.peek().is_none());
    }

    #[test]
    fn test_consolidate_leaves_unique_degrees() {
        let mut forest = forest_of(&(0..33).collect::<Vec<_>>());
        assert_eq!(forest.pop(), Some(0));
        forest.check_invariants();

        // 32 remaining nodes collapse into a single binomial tree
        let degrees = forest.root_degrees();
        assert_eq!(degrees, vec![5]);
    }

    #[test]
    fn test_consolidate_degrees_follow_binary_representation() {
        let mut forest = forest_of(&(0..12).collect::<Vec<_>>());
        forest.pop();
        forest.check_invariants();

        // 11 = 0b1011
        let mut degrees = forest.root_degrees();
        degrees.sort_unstable();
        assert_eq!(degrees, vec![0, 1, 3]);
    }

    #[test]
    fn test_single_element() {
        let mut forest = forest_of(&[7]);
        assert_eq!(forest.pop(), Some(7));
        assert!(forest.head.is_none());
        assert_eq!(forest.pop(), None);
        forest.check_invariants();
    }

    #[test]
    fn test_tie_keeps_processed_root_as_parent() {
        // Entries tie on priority; the value tells them apart.
        let mut forest = Forest::with_capacity(3, ByPriority(NaturalOrder));
        forest.push(("min", 0));
        forest.push(("a", 1));
        forest.push(("b", 1));

        // Root ring after popping the head, walked from its right neighbour:
        // "b" is collected first and recorded, then "a" is processed and stays
        // the parent.
        assert_eq!(forest.pop(), Some(("min", 0)));
        forest.check_invariants();

        let head = forest.head.unwrap();
        assert_eq!(forest.nodes[head].entry, ("a", 1));
        assert_eq!(forest.nodes[head].degree, 1);
        let child = forest.nodes[head].child.unwrap();
        assert_eq!(forest.nodes[child].entry, ("b", 1));
    }

    #[test]
    fn test_equal_priorities_drain_completely() {
        let mut forest = Forest::with_capacity(0, ByPriority(NaturalOrder));
        for i in 0..20 {
            forest.push((i, 4));
        }
        let mut seen = Vec::new();
        while let Some((value, priority)) = forest.pop() {
            assert_eq!(priority, 4);
            seen.push(value);
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_visits_children_before_parent() {
        let mut forest = forest_of(&[0, 1, 2, 3, 4]);
        forest.pop();
        forest.check_invariants();

        // One tree of degree 2 rooted at 1
        let order: Vec<i32> = forest.iter().copied().collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order.last(), Some(&1));
        assert_eq!(forest.iter().len(), 4);
    }

    #[test]
    fn test_iter_empty() {
        let forest = forest_of(&[]);
        assert_eq!(forest.iter().next(), None);
        assert_eq!(forest.iter().len(), 0);
    }

    #[test]
    fn test_clear_resets() {
        let mut forest = forest_of(&[3, 2, 1]);
        forest.pop();
        forest.clear();
        forest.check_invariants();
        assert_eq!(forest.len(), 0);
        forest.push(9);
        assert_eq!(forest.peek(), Some(&9));
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(ops in prop::collection::vec((any::<bool>(), -50i32..50), 0..200)) {
            let mut forest = Forest::with_capacity(0, NaturalOrder);
            let mut model: Vec<i32> = Vec::new();

            for (should_pop, value) in ops {
                if should_pop {
                    model.sort_unstable();
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(forest.pop(), expected);
                } else {
                    forest.push(value);
                    model.push(value);
                }
                forest.check_invariants();
                prop_assert_eq!(forest.len(), model.len());
                prop_assert_eq!(forest.peek().copied(), model.iter().min().copied());
            }

            let mut walked: Vec<i32> = forest.iter().copied().collect();
            walked.sort_unstable();
            model.sort_unstable();
            prop_assert_eq!(walked, model);
        }
    }
}
