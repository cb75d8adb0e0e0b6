use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};
use log::trace;
use std::collections::HashSet;

enum Visit {
    /// First encounter: schedule the inputs, then the node itself.
    Enter(NodeId),
    /// All inputs are in the order; append the node.
    Exit(NodeId),
}

/// Builds a topological sort of the graph reachable from `root`.
///
/// Depth-first, inputs before the node, with an explicit work stack instead of
/// recursion so deep expressions cannot overflow the call stack. Each node
/// appears exactly once even when reachable through several paths. The order
/// is deterministic: inputs are explored in operand order.
///
/// Used by [`Graph::backward`] to process nodes in the correct order.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, ScalarustError> {
    graph.node(root)?;
    let nodes = graph.nodes();

    let mut sorted_list = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![Visit::Enter(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Exit(id) => sorted_list.push(id),
            Visit::Enter(id) => {
                if !visited.insert(id) {
                    continue;
                }
                stack.push(Visit::Exit(id));
                // Reversed so the first operand is popped (and ordered) first.
                for input in nodes[id.index].op.inputs().into_iter().rev() {
                    if !visited.contains(&input) {
                        stack.push(Visit::Enter(input));
                    }
                }
            }
        }
    }

    trace!("[topological_sort] root {}: {:?}", root, sorted_list);
    Ok(sorted_list)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
