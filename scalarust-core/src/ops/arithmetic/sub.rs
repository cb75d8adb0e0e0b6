use crate::error::ScalarustError;
use crate::graph::{Graph, IntoNode, NodeId};
use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;

/// Subtracts two nodes: `a + (-b)`.
///
/// `b` may be a raw number, which is promoted to a leaf first.
pub fn sub_op<B: IntoNode>(graph: &mut Graph, a: NodeId, b: B) -> Result<NodeId, ScalarustError> {
    graph.node(a)?;
    let b = b.into_node(graph)?;
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
