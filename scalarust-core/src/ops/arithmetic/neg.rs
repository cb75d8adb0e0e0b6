use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};
use crate::ops::arithmetic::mul::mul_op;

/// Negates a node: `a * -1`.
///
/// Builds two nodes (the `-1` constant leaf and the product); the gradient
/// flows through the multiplication rule.
pub fn neg_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarustError> {
    mul_op(graph, a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
