use crate::search::{HeuristicValue, NodeId, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] is the node arena of a single search. Every node ever
/// generated is kept, together with its state, until the search space is
/// dropped, so parent links stay valid for path reconstruction no matter what
/// happened to the node in the open or closed lists. Nodes are addressed by
/// [`NodeId`], which is simply the allocation index.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
}

impl<S, A> SearchSpace<S, A> {
    /// Create a search space holding only the root node.
    pub fn new(initial_state: S, h: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        nodes.push(SearchNode::new_root(NodeId::new(0), h));
        states.push(initial_state);
        Self { nodes, states }
    }

    #[inline(always)]
    pub fn get_root_id(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Allocate a fresh node for `state` reached from `parent_id` via `action`.
    pub fn insert_node(
        &mut self,
        state: S,
        action: A,
        parent_id: NodeId,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes
            .push(SearchNode::new_with_parent(node_id, parent_id, action, g, h));
        self.states.push(state);
        node_id
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// Number of nodes allocated so far, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    fn ancestry(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut ids = vec![];
        let mut current_id = node_id;
        while current_id != NO_NODE {
            ids.push(current_id);
            current_id = self.get_node(current_id).get_parent_id();
        }
        ids.reverse();
        ids
    }
}

impl<S: Clone, A: Clone> SearchSpace<S, A> {
    /// Walk the parent links from `goal_id` back to the root and return the
    /// visited states in order, initial state first, `goal_id`'s state last.
    pub fn extract_path(&self, goal_id: NodeId) -> Vec<S> {
        self.ancestry(goal_id)
            .into_iter()
            .map(|node_id| self.get_state(node_id).clone())
            .collect()
    }

    /// The actions along the same chain as [`SearchSpace::extract_path`], one
    /// fewer than there are states.
    pub fn extract_actions(&self, goal_id: NodeId) -> Vec<A> {
        self.ancestry(goal_id)
            .into_iter()
            .filter_map(|node_id| self.get_node(node_id).get_action().cloned())
            .collect()
    }
}
