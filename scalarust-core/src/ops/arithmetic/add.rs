use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::graph::{Graph, IntoNode, NodeId};

/// Adds two nodes: `a + b`.
///
/// `b` may be a raw number, which is promoted to a leaf first.
///
/// Backward: the local derivative of a sum with respect to either addend is 1,
/// so both operands receive `grad_output` unchanged.
///
/// # Errors
/// `InvalidNode` for a foreign handle, `NonNumericOperand` / `NonFiniteOperand`
/// for an invalid raw operand.
pub fn add_op<B: IntoNode>(graph: &mut Graph, a: NodeId, b: B) -> Result<NodeId, ScalarustError> {
    let a_data = graph.data(a)?;
    let b = b.into_node(graph)?;
    let b_data = graph.data(b)?;
    Ok(graph.push(a_data + b_data, BackwardOp::Add { lhs: a, rhs: b }))
}

/// Sums `items` onto `start`: `((start + i0) + i1) + ...`.
///
/// Returns `start` itself when `items` is empty.
pub fn sum_op<I>(graph: &mut Graph, items: I, start: NodeId) -> Result<NodeId, ScalarustError>
where
    I: IntoIterator<Item = NodeId>,
{
    graph.node(start)?;
    items
        .into_iter()
        .try_fold(start, |acc, item| add_op(graph, acc, item))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
