//! Search nodes and the arena that holds expanded ones.
//!
//! A [`Node`] is owned by the frontier until it is popped. Popped nodes
//! move into a [`NodeArena`], where children refer to their parent by
//! [`NodeId`]. Walking parent ids from any arena node reaches the root, so
//! paths are reconstructed without reference cycles.

/// Index of a popped node in the arena of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A state plus the step that reached it.
///
/// Immutable once built. `parent` is `None` only for the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S, A> {
    state: S,
    cost: f64,
    parent: Option<NodeId>,
    action: Option<A>,
}

impl<S, A> Node<S, A> {
    /// Creates the root node of a search: zero cost, no parent, no action.
    pub fn root(state: S) -> Self {
        Self {
            state,
            cost: 0.0,
            parent: None,
            action: None,
        }
    }

    /// Creates a node reached from `parent` through `action`.
    ///
    /// `cost` is the accumulated path cost g(n), not the step cost.
    /// `parent` must come from the arena of the same run.
    pub(crate) fn child(state: S, cost: f64, parent: NodeId, action: A) -> Self {
        Self {
            state,
            cost,
            parent: Some(parent),
            action: Some(action),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Accumulated path cost from the root.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }
}

/// Append-only storage for popped nodes.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S, A> NodeArena<S, A> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its id.
    pub(crate) fn insert(&mut self, node: Node<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node with the given id.
    ///
    /// Ids are only ever produced by [`insert`](Self::insert) on the same
    /// arena, so lookups cannot miss.
    pub(crate) fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    /// Ids from the root down to `id`, inclusive.
    pub(crate) fn lineage(&self, id: NodeId) -> Vec<NodeId> {
        let mut ids = vec![id];
        let mut current = self.get(id).parent;
        while let Some(parent) = current {
            ids.push(parent);
            current = self.get(parent).parent;
        }
        ids.reverse();
        ids
    }
}
