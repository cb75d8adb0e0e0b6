use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};

/// Applies the hyperbolic tangent: `t = tanh(a)`.
///
/// Backward: `grad_a = (1 - t^2) * grad_output`, computed from the stored
/// output `t`.
///
/// The output lies strictly inside `(-1, 1)` only for moderate inputs: in
/// `f64`, `tanh(x)` rounds to exactly `±1.0` once `|x|` exceeds about 19.1, and
/// the local derivative is then 0.
pub fn tanh_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, ScalarustError> {
    let x = graph.data(a)?;
    Ok(graph.push(x.tanh(), BackwardOp::Tanh { input: a }))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
