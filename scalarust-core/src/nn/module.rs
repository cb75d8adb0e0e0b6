use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module owns parameter leaves living in a [`Graph`]. Its forward pass
/// appends the expression computed from those parameters and the given inputs
/// to the same graph; differentiating the resulting output fills the
/// parameters' `grad`.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph holding this module's parameters.
    /// * `inputs`: Input nodes, one per input feature.
    ///
    /// # Returns
    /// One output node per output feature, or a `ScalarustError` if the input
    /// width does not match or a node is foreign to `graph`.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarustError>;

    /// Returns all learnable parameter leaves of the module, sub-modules included.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns all parameters along with hierarchical names
    /// (e.g. `"layer1.neuron0.w2"`).
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    /// Returns the direct child modules.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to 0.0.
    fn zero_grad(&self, graph: &mut Graph) -> Result<(), ScalarustError> {
        graph.zero_grad_nodes(&self.parameters())
    }
}

/// Labels every parameter of `module` with its hierarchical name.
pub(crate) fn label_parameters(graph: &mut Graph, module: &dyn Module) -> Result<(), ScalarustError> {
    for (name, id) in module.named_parameters() {
        graph.set_label(id, name)?;
    }
    Ok(())
}
