use crate::autograd::graph::topological_sort;
use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};
use log::debug;

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// After the call every node reachable from `root` holds in `grad` the
    /// partial derivative of `root` with respect to that node, added on top of
    /// whatever `grad` held before. The root itself is seeded to exactly 1.0.
    /// Call [`Graph::zero_grad`] between passes to start from clean gradients.
    ///
    /// # Errors
    /// `InvalidNode` if `root` does not belong to this graph. Given a valid
    /// root the pass cannot fail.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarustError> {
        let sorted_nodes = topological_sort(self, root)?;
        debug!(
            "backward from {}: {} nodes in topological order",
            root,
            sorted_nodes.len()
        );

        self.nodes[root.index].grad = 1.0;

        // Consumers come after their inputs, so walking backwards guarantees a
        // node's grad is complete before its own rule runs.
        for id in sorted_nodes.iter().rev() {
            let node = &self.nodes[id.index];
            let contributions = node.op.backward(node.grad, node.data, &self.nodes);
            for (input, contribution) in contributions {
                self.nodes[input.index].grad += contribution;
            }
        }
        Ok(())
    }

    /// Resets the gradient of every node to 0.0.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Resets the gradient of the given nodes only (e.g. a module's parameters).
    pub fn zero_grad_nodes(&mut self, ids: &[NodeId]) -> Result<(), ScalarustError> {
        for &id in ids {
            let index = self.index_of(id)?;
            self.nodes[index].grad = 0.0;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
