use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::graph::{Graph, IntoNode, NodeId};

// --- Forward Operation ---

/// Multiplies two nodes: `a * b`.
///
/// `b` may be a raw number, which is promoted to a leaf first.
///
/// Backward (product rule): `grad_a = grad_output * b`, `grad_b = grad_output * a`.
pub fn mul_op<B: IntoNode>(graph: &mut Graph, a: NodeId, b: B) -> Result<NodeId, ScalarustError> {
    let a_data = graph.data(a)?;
    let b = b.into_node(graph)?;
    let b_data = graph.data(b)?;
    Ok(graph.push(a_data * b_data, BackwardOp::Mul { lhs: a, rhs: b }))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
