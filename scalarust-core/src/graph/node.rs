// src/graph/node.rs

use crate::autograd::BackwardOp;
use std::fmt;

/// Handle to a node stored in a [`Graph`](crate::graph::Graph).
///
/// Identity is the handle, not the value: two nodes holding the same `data`
/// are different vertices. The handle also remembers which graph allocated it,
/// so a handle coming from another graph is rejected instead of aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: u64,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in its graph's arena (creation order).
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.index)
    }
}

/// A single scalar vertex of the computation graph.
///
/// `data` is fixed at construction (leaves excepted, see
/// [`Graph::set_leaf_data`](crate::graph::Graph::set_leaf_data)); `grad` starts
/// at 0.0 and only accumulates during backward.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: BackwardOp,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(data: f64, op: BackwardOp) -> Self {
        Node {
            data,
            grad: 0.0,
            op,
            label: None,
        }
    }

    pub fn data(&self) -> f64 {
        self.data
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    /// The operation that produced this node (`BackwardOp::Leaf` for leaves).
    pub fn op(&self) -> &BackwardOp {
        &self.op
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_leaf()
    }

    /// Direct predecessors of this node, in operand order.
    pub fn inputs(&self) -> Vec<NodeId> {
        self.op.inputs()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.data, self.grad)
    }
}
