use crate::graph::{Graph, NodeId};

/// Checks that the gradient of `node` is within `tolerance` of `expected`.
/// Panics with the node's label (if any) on mismatch or on an invalid handle.
pub fn check_grad_near(graph: &Graph, node: NodeId, expected: f64, tolerance: f64) {
    let actual = graph
        .grad(node)
        .expect("check_grad_near called with a node from another graph");
    let diff = (actual - expected).abs();
    if diff > tolerance {
        let name = graph.label(node).ok().flatten().unwrap_or("<unlabelled>");
        panic!(
            "Gradient mismatch at node {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            node, name, actual, expected, diff, tolerance
        );
    }
}

/// Checks that the data of `node` is within `tolerance` of `expected`.
pub fn check_data_near(graph: &Graph, node: NodeId, expected: f64, tolerance: f64) {
    let actual = graph
        .data(node)
        .expect("check_data_near called with a node from another graph");
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Data mismatch at node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            node, actual, expected, diff, tolerance
        );
    }
}
