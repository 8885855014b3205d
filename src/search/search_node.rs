use crate::search::HeuristicValue;

/// Index of a node in its [`SearchSpace`](crate::search::SearchSpace). Ids are
/// handed out in allocation order, so a parent id is always smaller than the
/// ids of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is one point of the search tree: the path-specific data
/// attached to a state, namely how it was reached and what it cost. The state
/// itself lives next to the node in the search space.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    /// Unique identifier of the node within its search
    node_id: NodeId,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
    /// Action that led to this node, `None` for the root
    action: Option<A>,
    /// Cost accumulated from the initial state
    g: HeuristicValue,
    /// Heuristic estimate of the remaining cost to a goal
    h: HeuristicValue,
}

impl<A> SearchNode<A> {
    /// Create the root node of a search. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_root(node_id: NodeId, h: HeuristicValue) -> Self {
        Self {
            node_id,
            parent_id: NO_NODE,
            action: None,
            g: HeuristicValue::from(0.),
            h,
        }
    }

    pub fn new_with_parent(
        node_id: NodeId,
        parent_id: NodeId,
        action: A,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> Self {
        debug_assert!(parent_id < node_id, "parents are allocated before children");
        Self {
            node_id,
            parent_id,
            action: Some(action),
            g,
            h,
        }
    }

    #[inline(always)]
    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline(always)]
    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    #[inline(always)]
    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    #[inline(always)]
    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    /// `g + h`, always derived from the stored inputs.
    #[inline(always)]
    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }
}
