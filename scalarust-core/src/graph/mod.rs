// src/graph/mod.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use log::{debug, trace, warn};
use num_traits::ToPrimitive;
use std::sync::atomic::{AtomicU64, Ordering};

mod autograd_methods;
pub mod node;
mod op_methods;
pub mod scalar;

pub use node::{Node, NodeId};
pub use scalar::IntoNode;

use scalar::to_finite_scalar;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Arena owning every node of one computation.
///
/// Operations append nodes and hand back [`NodeId`] handles. Nodes can only
/// reference nodes that already exist, so the graph is acyclic and every
/// prefix of the arena is itself a valid graph. Dropping the `Graph` discards
/// the whole computation; [`Graph::rewind`] discards everything built after a
/// [`Checkpoint`].
#[derive(Debug)]
pub struct Graph {
    id: u64,
    nodes: Vec<Node>,
}

/// Recorded arena length, see [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    graph: u64,
    len: usize,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes currently held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf node wrapping a raw scalar.
    ///
    /// # Errors
    /// * `NonNumericOperand` if `value` has no `f64` representation.
    /// * `NonFiniteOperand` if `value` is NaN or infinite.
    pub fn leaf<S: ToPrimitive>(&mut self, value: S) -> Result<NodeId, ScalarustError> {
        let data = to_finite_scalar(&value)?;
        Ok(self.push(data, BackwardOp::Leaf))
    }

    /// Creates one leaf per value, in order.
    pub fn leaves<S: ToPrimitive>(&mut self, values: &[S]) -> Result<Vec<NodeId>, ScalarustError> {
        // Validate everything first so a bad value leaves no partial row behind.
        let data = values
            .iter()
            .map(to_finite_scalar)
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(data
            .into_iter()
            .map(|d| self.push(d, BackwardOp::Leaf))
            .collect())
    }

    /// Returns the node behind `id`.
    ///
    /// # Errors
    /// `InvalidNode` if the handle was allocated by another graph or points past
    /// the end of this one (e.g. after a rewind).
    pub fn node(&self, id: NodeId) -> Result<&Node, ScalarustError> {
        let index = self.index_of(id)?;
        Ok(&self.nodes[index])
    }

    pub fn data(&self, id: NodeId) -> Result<f64, ScalarustError> {
        self.node(id).map(Node::data)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarustError> {
        self.node(id).map(Node::grad)
    }

    pub fn label(&self, id: NodeId) -> Result<Option<&str>, ScalarustError> {
        self.node(id).map(Node::label)
    }

    /// Attaches a human-readable label to a node. Labels are for debugging only.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), ScalarustError> {
        let index = self.index_of(id)?;
        self.nodes[index].label = Some(label.into());
        Ok(())
    }

    /// Overwrites the value of a leaf.
    ///
    /// Only allowed while nothing consumes the leaf, which is the case for
    /// parameters right after [`Graph::rewind`] to a checkpoint taken before
    /// the forward pass.
    ///
    /// # Errors
    /// * `NotALeaf` if `id` was produced by an operation.
    /// * `LeafHasConsumers` if nodes built on top of the leaf still exist.
    /// * `NonNumericOperand` / `NonFiniteOperand` for an invalid value.
    pub fn set_leaf_data<S: ToPrimitive>(&mut self, id: NodeId, value: S) -> Result<(), ScalarustError> {
        let index = self.index_of(id)?;
        let node = &self.nodes[index];
        if !node.is_leaf() {
            return Err(ScalarustError::NotALeaf {
                index,
                op: node.op.to_string(),
            });
        }
        let data = to_finite_scalar(&value)?;
        let consumers = self.nodes[index + 1..]
            .iter()
            .filter(|n| n.op.inputs().contains(&id))
            .count();
        if consumers > 0 {
            warn!("Refusing to overwrite leaf {}: {} consumer(s) still read its data", id, consumers);
            return Err(ScalarustError::LeafHasConsumers { index, consumers });
        }
        self.nodes[index].data = data;
        Ok(())
    }

    /// Records the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            graph: self.id,
            len: self.nodes.len(),
        }
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Handles to dropped nodes must not be used afterwards: new nodes reuse
    /// their positions.
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), ScalarustError> {
        if checkpoint.graph != self.id || checkpoint.len > self.nodes.len() {
            return Err(ScalarustError::InvalidCheckpoint {
                checkpoint: checkpoint.len,
                len: self.nodes.len(),
            });
        }
        debug!(
            "Rewinding graph from {} to {} nodes",
            self.nodes.len(),
            checkpoint.len
        );
        self.nodes.truncate(checkpoint.len);
        Ok(())
    }

    /// Appends a node. Operand handles inside `op` must already be validated.
    pub(crate) fn push(&mut self, data: f64, op: BackwardOp) -> NodeId {
        let id = NodeId {
            graph: self.id,
            index: self.nodes.len(),
        };
        trace!("{} = {} [{}]", id, data, op);
        self.nodes.push(Node::new(data, op));
        id
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Result<usize, ScalarustError> {
        if id.graph != self.id || id.index >= self.nodes.len() {
            return Err(ScalarustError::InvalidNode { index: id.index });
        }
        Ok(id.index)
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
