use crate::graph::{Node, NodeId};
use std::fmt;

/// How a node was produced, and therefore how to propagate its gradient.
///
/// Every variant stores exactly what its local rule needs: the operand handles
/// and, for `Pow`, the constant exponent. Values of the operands are read back
/// from the arena during backward, which is sound because node `data` never
/// changes once consumers exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// A leaf: raw scalar, parameter or input feature. No inputs.
    Leaf,
    /// `lhs + rhs`
    Add { lhs: NodeId, rhs: NodeId },
    /// `lhs * rhs`
    Mul { lhs: NodeId, rhs: NodeId },
    /// `base ** exponent` with a constant exponent.
    Pow { base: NodeId, exponent: f64 },
    /// `tanh(input)`
    Tanh { input: NodeId },
}

impl BackwardOp {
    pub fn is_leaf(&self) -> bool {
        matches!(self, BackwardOp::Leaf)
    }

    /// Operand handles in the order they were passed to the forward operation.
    ///
    /// The same handle may appear twice (e.g. `a + a`).
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input } => vec![input],
        }
    }

    /// Computes the contribution of this node to each of its inputs' gradient.
    ///
    /// `grad_output` is the fully accumulated gradient of the node, `output` its
    /// forward value. Contributions are returned rather than applied so the
    /// caller can add them into the arena; one entry per operand, duplicates
    /// included, so a reused operand receives the sum.
    pub(crate) fn backward(&self, grad_output: f64, output: f64, nodes: &[Node]) -> Vec<(NodeId, f64)> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } => vec![(lhs, grad_output), (rhs, grad_output)],
            BackwardOp::Mul { lhs, rhs } => {
                let lhs_data = nodes[lhs.index].data;
                let rhs_data = nodes[rhs.index].data;
                vec![(lhs, rhs_data * grad_output), (rhs, lhs_data * grad_output)]
            }
            BackwardOp::Pow { base, exponent } => {
                let x = nodes[base.index].data;
                vec![(base, pow_local_grad(x, exponent) * grad_output)]
            }
            BackwardOp::Tanh { input } => {
                // output == tanh(input)
                vec![(input, (1.0 - output * output) * grad_output)]
            }
        }
    }
}

/// Derivative of `x ** exponent` with respect to `x`.
///
/// A constant exponent of 0 has derivative 0 everywhere, including at `x = 0`
/// where `0 * 0^-1` would otherwise give NaN.
pub(crate) fn pow_local_grad(x: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        0.0
    } else {
        exponent * x.powf(exponent - 1.0)
    }
}

impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => Ok(()),
            BackwardOp::Add { .. } => write!(f, "+"),
            BackwardOp::Mul { .. } => write!(f, "*"),
            BackwardOp::Pow { exponent, .. } => write!(f, "**{}", exponent),
            BackwardOp::Tanh { .. } => write!(f, "tanh"),
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
