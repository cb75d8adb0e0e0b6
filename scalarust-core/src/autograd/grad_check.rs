use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarustError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarustError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {output_plus:?}, f(x-eps): {output_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        output_plus: f64,
        output_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Step and tolerance for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Central difference step.
    pub epsilon: f64,
    /// Accepted absolute *and* relative deviation between the two gradients.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` builds a scalar expression from one leaf per entry of `inputs` and
/// returns its root. The expression is built once and differentiated; then,
/// for every input, it is rebuilt on fresh graphs with that input shifted by
/// `±epsilon` and the central difference is compared to the analytical grad.
///
/// Returns the analytical gradients on success.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarustError>,
{
    let (mut graph, leaves, root) = evaluate(&func, inputs)?;
    graph
        .backward(root)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf))
        .collect::<Result<Vec<f64>, _>>()
        .map_err(GradCheckError::BackwardPassError)?;

    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let output_plus = evaluate_shifted(&func, inputs, i, config.epsilon)?;
        let output_minus = evaluate_shifted(&func, inputs, i, -config.epsilon)?;
        let numerical_grad = (output_plus - output_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                output_plus,
                output_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical_grads)
}

fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<(Graph, Vec<NodeId>, NodeId), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarustError>,
{
    let mut graph = Graph::new();
    let leaves = graph
        .leaves(inputs)
        .map_err(GradCheckError::ForwardPassError)?;
    let root = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok((graph, leaves, root))
}

fn evaluate_shifted<F>(func: &F, inputs: &[f64], index: usize, shift: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarustError>,
{
    let mut shifted = inputs.to_vec();
    shifted[index] += shift;
    let (graph, _, root) = evaluate(func, &shifted)?;
    graph.data(root).map_err(GradCheckError::ForwardPassError)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
