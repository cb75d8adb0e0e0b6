use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};
use crate::nn::init::Init;
use crate::nn::module::{label_parameters, Module};
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::{mul_op, sum_op};
use rand::Rng;

/// A single tanh unit: `tanh(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and a bias, all leaves of `graph`.
    ///
    /// Weights are drawn first, then the bias, from `init` using `rng`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        nin: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        let mut values = init.sample_n(nin + 1, rng)?;
        let bias_value = values.pop().unwrap_or_default();
        let weights = graph.leaves(&values)?;
        let bias = graph.leaf(bias_value)?;

        let neuron = Neuron { weights, bias };
        label_parameters(graph, &neuron)?;
        Ok(neuron)
    }

    /// Number of inputs.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    /// Builds `tanh(b + Σ wᵢ·xᵢ)` and returns the output node.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len() != self.nin()`.
    pub fn activate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalarustError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarustError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let products = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(&w, &x)| mul_op(graph, w, x))
            .collect::<Result<Vec<_>, _>>()?;
        let act = sum_op(graph, products, self.bias)?;
        tanh_op(graph, act)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarustError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w{}", i), w))
            .collect();
        params.push(("b".to_string(), self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
