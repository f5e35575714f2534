//! Frontier containers: nodes waiting to be expanded.
//!
//! | Frontier | Removal order |
//! |---|---|
//! | [`StackFrontier`] | LIFO |
//! | [`QueueFrontier`] | FIFO |
//! | [`PriorityQueueFrontier`] | ascending [`Priority`], FIFO among equal keys |

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::node::Node;
use crate::error::{Result, SearchError};

/// Ordering key of a scheduled node.
///
/// Compared lexicographically: `primary` first, then `tie_break`, both
/// ascending and both with `f64::total_cmp`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Priority {
    pub primary: f64,
    pub tie_break: f64,
}

impl Priority {
    /// Key used by frontiers that ignore priorities.
    pub const NONE: Priority = Priority {
        primary: 0.0,
        tie_break: 0.0,
    };

    pub fn new(primary: f64, tie_break: f64) -> Self {
        Self { primary, tie_break }
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.primary
            .total_cmp(&other.primary)
            .then_with(|| self.tie_break.total_cmp(&other.tie_break))
    }
}

impl From<f64> for Priority {
    fn from(primary: f64) -> Self {
        Self::new(primary, 0.0)
    }
}

/// Storage for nodes awaiting expansion.
///
/// The priority argument of [`add`](Frontier::add) is ignored by the stack
/// and queue variants.
pub trait Frontier<S, A> {
    /// Adds a node. Never fails.
    fn add(&mut self, node: Node<S, A>, priority: Priority);

    /// Removes the next node according to the frontier's order.
    ///
    /// # Errors
    /// [`SearchError::EmptyFrontier`] when the frontier holds no nodes.
    fn pop(&mut self) -> Result<Node<S, A>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether some scheduled node carries `state`. Linear scan.
    fn contains_state(&self, state: &S) -> bool
    where
        S: PartialEq;
}

/// Last-in, first-out frontier.
#[derive(Debug, Clone)]
pub struct StackFrontier<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Default for StackFrontier<S, A> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S, A> StackFrontier<S, A> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, A> Frontier<S, A> for StackFrontier<S, A> {
    fn add(&mut self, node: Node<S, A>, _priority: Priority) {
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Result<Node<S, A>> {
        self.nodes.pop().ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains_state(&self, state: &S) -> bool
    where
        S: PartialEq,
    {
        self.nodes.iter().any(|n| n.state() == state)
    }
}

/// First-in, first-out frontier.
#[derive(Debug, Clone)]
pub struct QueueFrontier<S, A> {
    nodes: VecDeque<Node<S, A>>,
}

impl<S, A> Default for QueueFrontier<S, A> {
    fn default() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }
}

impl<S, A> QueueFrontier<S, A> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, A> Frontier<S, A> for QueueFrontier<S, A> {
    fn add(&mut self, node: Node<S, A>, _priority: Priority) {
        self.nodes.push_back(node);
    }

    fn pop(&mut self) -> Result<Node<S, A>> {
        self.nodes.pop_front().ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains_state(&self, state: &S) -> bool
    where
        S: PartialEq,
    {
        self.nodes.iter().any(|n| n.state() == state)
    }
}

/// Heap entry ordered by `(priority, seq)`, reversed so that
/// `BinaryHeap` (a max-heap) yields the minimum first.
#[derive(Debug, Clone)]
struct Entry<S, A> {
    priority: Priority,
    seq: u64,
    node: Node<S, A>,
}

impl<S, A> PartialEq for Entry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, A> Eq for Entry<S, A> {}

impl<S, A> PartialOrd for Entry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for Entry<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority frontier with stable tie-breaking.
///
/// Among nodes with equal [`Priority`], the one added first is popped
/// first. Keys are compared with `f64::total_cmp`, so the order is total
/// and runs are reproducible.
#[derive(Debug, Clone)]
pub struct PriorityQueueFrontier<S, A> {
    heap: BinaryHeap<Entry<S, A>>,
    next_seq: u64,
}

impl<S, A> Default for PriorityQueueFrontier<S, A> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<S, A> PriorityQueueFrontier<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest priority currently scheduled, if any.
    pub fn peek_priority(&self) -> Option<Priority> {
        self.heap.peek().map(|e| e.priority)
    }
}

impl<S, A> Frontier<S, A> for PriorityQueueFrontier<S, A> {
    fn add(&mut self, node: Node<S, A>, priority: Priority) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            node,
        });
    }

    fn pop(&mut self) -> Result<Node<S, A>> {
        self.heap
            .pop()
            .map(|e| e.node)
            .ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains_state(&self, state: &S) -> bool
    where
        S: PartialEq,
    {
        self.heap.iter().any(|e| e.node.state() == state)
    }
}
