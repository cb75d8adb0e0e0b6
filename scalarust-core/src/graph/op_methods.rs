// Method forms of the forward operations, so expressions read
// `graph.mul(a, b)` instead of `mul_op(&mut graph, a, b)`.

use crate::error::ScalarustError;
use crate::graph::{Graph, IntoNode, NodeId};
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::{add_op, mul_op, neg_op, pow_op, sub_op, sum_op};
use num_traits::ToPrimitive;

impl Graph {
    /// See [`add_op`].
    pub fn add<B: IntoNode>(&mut self, a: NodeId, b: B) -> Result<NodeId, ScalarustError> {
        add_op(self, a, b)
    }

    /// See [`mul_op`].
    pub fn mul<B: IntoNode>(&mut self, a: NodeId, b: B) -> Result<NodeId, ScalarustError> {
        mul_op(self, a, b)
    }

    /// See [`pow_op`].
    pub fn pow<E: ToPrimitive>(&mut self, base: NodeId, exponent: E) -> Result<NodeId, ScalarustError> {
        pow_op(self, base, exponent)
    }

    /// See [`neg_op`].
    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, ScalarustError> {
        neg_op(self, a)
    }

    /// See [`sub_op`].
    pub fn sub<B: IntoNode>(&mut self, a: NodeId, b: B) -> Result<NodeId, ScalarustError> {
        sub_op(self, a, b)
    }

    /// See [`tanh_op`].
    pub fn tanh(&mut self, a: NodeId) -> Result<NodeId, ScalarustError> {
        tanh_op(self, a)
    }

    /// See [`sum_op`].
    pub fn sum<I>(&mut self, items: I, start: NodeId) -> Result<NodeId, ScalarustError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        sum_op(self, items, start)
    }
}
