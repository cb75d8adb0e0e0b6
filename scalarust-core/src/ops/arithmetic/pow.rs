// src/ops/arithmetic/pow.rs

use crate::autograd::backward_op::pow_local_grad;
use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::graph::scalar::to_finite_scalar;
use crate::graph::{Graph, NodeId};
use num_traits::ToPrimitive;

/// Raises a node to a constant power: `base ** exponent`.
///
/// The exponent is a plain number known at call time, never a graph node, so
/// no gradient flows to it.
///
/// Backward: `grad_base = exponent * base^(exponent - 1) * grad_output`.
///
/// # Errors
/// * `UndefinedPower` when the base is negative and the exponent is not an
///   integer: the result has no real value.
/// * `NonFiniteResult` when the result overflows or is infinite (e.g. `0 ** -1`),
///   or when the derivative at the base is (e.g. `0 ** 0.5`).
/// * `NonNumericOperand` / `NonFiniteOperand` for an invalid exponent.
/// * `InvalidNode` for a foreign handle.
pub fn pow_op<E: ToPrimitive>(graph: &mut Graph, base: NodeId, exponent: E) -> Result<NodeId, ScalarustError> {
    let x = graph.data(base)?;
    let exponent = to_finite_scalar(&exponent)?;

    if x < 0.0 && exponent.fract() != 0.0 {
        return Err(ScalarustError::UndefinedPower { base: x, exponent });
    }

    let data = x.powf(exponent);
    if !data.is_finite() {
        return Err(ScalarustError::NonFiniteResult {
            operation: format!("**{}", exponent),
            value: data,
        });
    }
    let local_grad = pow_local_grad(x, exponent);
    if !local_grad.is_finite() {
        return Err(ScalarustError::NonFiniteResult {
            operation: format!("d/dx **{}", exponent),
            value: local_grad,
        });
    }

    Ok(graph.push(data, BackwardOp::Pow { base, exponent }))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
