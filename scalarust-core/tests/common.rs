use scalarust_core::{Graph, NodeId, ScalarustError};

// Attempt to initialize env_logger. If it fails (already initialized), that's okay.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds the reference expression from the micrograd-style walkthrough:
/// `L = tanh(a*b + c) * f` with `a = 2, b = -3, c = 10, f = -2`.
///
/// Returns the graph, the leaves `[a, b, c, f]` and the output `L`.
#[allow(dead_code)]
pub fn build_reference_expression() -> Result<(Graph, Vec<NodeId>, NodeId), ScalarustError> {
    let mut graph = Graph::new();
    let leaves = graph.leaves(&[2.0, -3.0, 10.0, -2.0])?;
    let (a, b, c, f) = (leaves[0], leaves[1], leaves[2], leaves[3]);
    let e = graph.mul(a, b)?;
    let d = graph.add(e, c)?;
    let t = graph.tanh(d)?;
    let l = graph.mul(t, f)?;
    Ok((graph, leaves, l))
}
