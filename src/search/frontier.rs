//! The open list of a best-first search.

use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::HashMap, hash::Hash};

/// Ordering key of an open node. Fields are compared in declaration order, so
/// nodes are ordered by `f`, ties are broken towards the lower `h` (i.e. the
/// node closer to a goal) and remaining ties by insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierPriority {
    pub f: HeuristicValue,
    pub h: HeuristicValue,
    pub sequence: u64,
}

/// A [`Frontier`] keeps at most one open node per canonical key and yields a
/// node of minimum [`FrontierPriority`] on [`Frontier::pop`]. The priority
/// queue and the key to node index are always updated together.
#[derive(Debug)]
pub struct Frontier<K: Hash + Eq> {
    queue: PriorityQueue<K, Reverse<FrontierPriority>>,
    open_nodes: HashMap<K, NodeId>,
    next_sequence: u64,
}

impl<K: Hash + Eq + Clone> Default for Frontier<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> Frontier<K> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            open_nodes: HashMap::new(),
            next_sequence: 0,
        }
    }

    fn next_priority(&mut self, f: HeuristicValue, h: HeuristicValue) -> Reverse<FrontierPriority> {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        Reverse(FrontierPriority { f, h, sequence })
    }

    /// Open `node_id` under `key`. The key must not be open already, use
    /// [`Frontier::relax`] to replace an open node.
    pub fn push(&mut self, key: K, node_id: NodeId, f: HeuristicValue, h: HeuristicValue) {
        debug_assert!(!self.open_nodes.contains_key(&key), "key is already open");
        let priority = self.next_priority(f, h);
        self.open_nodes.insert(key.clone(), node_id);
        self.queue.push(key, priority);
    }

    /// Replace the open node stored under `key` with `node_id` (decrease-key).
    /// Returns the node that was replaced, or `None` if the key was not open,
    /// in which case nothing changes.
    pub fn relax(
        &mut self,
        key: &K,
        node_id: NodeId,
        f: HeuristicValue,
        h: HeuristicValue,
    ) -> Option<NodeId> {
        if !self.open_nodes.contains_key(key) {
            return None;
        }
        let priority = self.next_priority(f, h);
        self.queue.change_priority(key, priority);
        self.open_nodes.insert(key.clone(), node_id)
    }

    /// Remove and return an open node of minimum priority together with its
    /// key.
    pub fn pop(&mut self) -> Option<(K, NodeId)> {
        let (key, _) = self.queue.pop()?;
        let node_id = self
            .open_nodes
            .remove(&key)
            .expect("Frontier queue and index out of sync");
        Some((key, node_id))
    }

    /// The open node stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<NodeId> {
        self.open_nodes.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.open_nodes.contains_key(key)
    }

    pub fn peek_priority(&self) -> Option<FrontierPriority> {
        self.queue.peek().map(|(_, Reverse(priority))| *priority)
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.queue.len(), self.open_nodes.len());
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
