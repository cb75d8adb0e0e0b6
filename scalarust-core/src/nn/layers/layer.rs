use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{label_parameters, Module};
use rand::Rng;

/// A fully connected layer of `nout` independent tanh neurons sharing the
/// same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        nin: usize,
        nout: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, nin, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        let layer = Layer { neurons, nin };
        label_parameters(graph, &layer)?;
        Ok(layer)
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    /// Number of outputs (neurons).
    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarustError> {
        if inputs.len() != self.nin {
            return Err(ScalarustError::DimensionMismatch {
                expected: self.nin,
                actual: inputs.len(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, id) in neuron.named_parameters() {
                params.push((format!("neuron{}.{}", i, name), id));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
