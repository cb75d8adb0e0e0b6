use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};
use crate::nn::init::Init;
use crate::nn::layers::Layer;
use crate::nn::module::{label_parameters, Module};
use log::debug;
use rand::Rng;

/// Multi-layer perceptron: a chain of tanh [`Layer`]s.
///
/// Layer sizes are `[nin] + nouts`; layer `i` maps `sizes[i]` inputs to
/// `sizes[i + 1]` outputs.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
    nin: usize,
}

impl Mlp {
    /// Creates an MLP with parameters drawn uniformly from `[-1, 1)`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        Self::with_init(graph, nin, nouts, Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph,
        nin: usize,
        nouts: &[usize],
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(graph, pair[0], pair[1], init, rng))
            .collect::<Result<Vec<_>, _>>()?;

        let mlp = Mlp { layers, nin };
        label_parameters(graph, &mlp)?;
        debug!(
            "Mlp created: sizes {:?}, {} parameters",
            sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    /// Width of the final layer (or `nin` for a network without layers).
    pub fn nout(&self) -> usize {
        self.layers.last().map_or(self.nin, Layer::nout)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Forward pass for a network with a single output.
    ///
    /// # Errors
    /// `DimensionMismatch` if the final layer does not have exactly one output,
    /// plus any error of [`Module::forward`].
    pub fn forward_scalar(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId, ScalarustError> {
        let outputs = self.forward(graph, inputs)?;
        match outputs.as_slice() {
            [single] => Ok(*single),
            _ => Err(ScalarustError::DimensionMismatch {
                expected: 1,
                actual: outputs.len(),
            }),
        }
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarustError> {
        if inputs.len() != self.nin {
            return Err(ScalarustError::DimensionMismatch {
                expected: self.nin,
                actual: inputs.len(),
            });
        }
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, id) in layer.named_parameters() {
                params.push((format!("layer{}.{}", i, name), id));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
