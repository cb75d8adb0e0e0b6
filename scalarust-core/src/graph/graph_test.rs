use super::*;
use num_traits::ToPrimitive;

/// A raw operand with no `f64` representation.
struct Opaque;

impl ToPrimitive for Opaque {
    fn to_i64(&self) -> Option<i64> {
        None
    }
    fn to_u64(&self) -> Option<u64> {
        None
    }
    fn to_f64(&self) -> Option<f64> {
        None
    }
}

#[test]
fn test_leaf_creation() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    assert!(graph.is_empty());

    let a = graph.leaf(2.0)?;
    let b = graph.leaf(3u8)?;
    let c = graph.leaf(-1i64)?;

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.data(a)?, 2.0);
    assert_eq!(graph.data(b)?, 3.0);
    assert_eq!(graph.data(c)?, -1.0);

    let node = graph.node(a)?;
    assert!(node.is_leaf());
    assert!(node.inputs().is_empty());
    assert_eq!(node.grad(), 0.0);
    assert_eq!(node.op(), &BackwardOp::Leaf);
    Ok(())
}

#[test]
fn test_equal_values_are_distinct_nodes() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0)?;
    let b = graph.leaf(1.0)?;
    assert_ne!(a, b);

    let c = graph.mul(a, b)?;
    graph.backward(c)?;
    assert_eq!(graph.grad(a)?, 1.0);
    assert_eq!(graph.grad(b)?, 1.0);
    Ok(())
}

#[test]
fn test_leaves() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let xs = graph.leaves(&[1.0f32, 2.0, 3.0])?;
    assert_eq!(xs.len(), 3);
    assert_eq!(graph.data(xs[2])?, 3.0);
    assert_eq!(xs[1].index(), 1);
    Ok(())
}

#[test]
fn test_leaves_all_or_nothing() {
    let mut graph = Graph::new();
    let result = graph.leaves(&[1.0, f64::NAN, 3.0]);
    assert!(matches!(result, Err(ScalarustError::NonFiniteOperand { .. })));
    assert!(graph.is_empty());
}

#[test]
fn test_leaf_rejects_non_numeric_operand() {
    let mut graph = Graph::new();
    match graph.leaf(Opaque) {
        Err(ScalarustError::NonNumericOperand { type_name }) => {
            assert!(type_name.ends_with("Opaque"), "unexpected type name {}", type_name)
        }
        other => panic!("Expected NonNumericOperand, got {:?}", other),
    }
    assert!(graph.is_empty());
}

#[test]
fn test_leaf_rejects_non_finite() {
    let mut graph = Graph::new();
    assert_eq!(
        graph.leaf(f64::NEG_INFINITY),
        Err(ScalarustError::NonFiniteOperand {
            value: f64::NEG_INFINITY
        })
    );
    assert!(matches!(
        graph.leaf(f32::NAN),
        Err(ScalarustError::NonFiniteOperand { .. })
    ));
}

#[test]
fn test_foreign_and_stale_handles() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let mut other = Graph::new();
    graph.leaf(0.0)?;
    let foreign = other.leaf(0.0)?;

    // Same index, different graph.
    assert_eq!(foreign.index(), 0);
    assert_eq!(graph.data(foreign), Err(ScalarustError::InvalidNode { index: 0 }));

    let checkpoint = graph.checkpoint();
    let stale = graph.leaf(1.0)?;
    graph.rewind(checkpoint)?;
    assert_eq!(graph.grad(stale), Err(ScalarustError::InvalidNode { index: 1 }));
    Ok(())
}

#[test]
fn test_labels_and_display() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0)?;
    assert_eq!(graph.label(a)?, None);

    graph.set_label(a, "a")?;
    assert_eq!(graph.label(a)?, Some("a"));

    let b = graph.mul(a, 4)?;
    graph.backward(b)?;
    assert_eq!(graph.node(a)?.to_string(), "Value(data=2, grad=4)");
    assert_eq!(a.to_string(), "%0");
    Ok(())
}

#[test]
fn test_checkpoint_rewind() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let w = graph.leaf(0.5)?;
    let checkpoint = graph.checkpoint();

    for x in [1.0, 2.0, 3.0] {
        let out = graph.mul(w, x)?;
        graph.backward(out)?;
        assert_eq!(graph.grad(w)?, x);
        graph.rewind(checkpoint)?;
        graph.zero_grad();
        assert_eq!(graph.len(), 1);
    }
    Ok(())
}

#[test]
fn test_rewind_invalid_checkpoint() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    graph.leaf(1.0)?;
    graph.leaf(2.0)?;
    let checkpoint = graph.checkpoint();

    graph.rewind(Checkpoint { graph: graph.id, len: 0 })?;
    assert_eq!(
        graph.rewind(checkpoint),
        Err(ScalarustError::InvalidCheckpoint { checkpoint: 2, len: 0 })
    );

    let other = Graph::new();
    assert!(graph.rewind(other.checkpoint()).is_err());
    Ok(())
}

#[test]
fn test_set_leaf_data() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let w = graph.leaf(1.0)?;
    let checkpoint = graph.checkpoint();
    let y = graph.pow(w, 2)?;
    assert_eq!(graph.data(y)?, 1.0);

    graph.rewind(checkpoint)?;
    graph.set_leaf_data(w, 3)?;
    let y = graph.pow(w, 2)?;
    assert_eq!(graph.data(y)?, 9.0);
    Ok(())
}

#[test]
fn test_set_leaf_data_rejects_consumed_leaf() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0)?;
    let checkpoint = graph.checkpoint();
    let y = graph.mul(a, 3)?;

    assert_eq!(
        graph.set_leaf_data(a, 5.0),
        Err(ScalarustError::LeafHasConsumers {
            index: 0,
            consumers: 1
        })
    );
    assert_eq!(graph.data(a)?, 2.0);

    // Gradients still describe the graph as built.
    graph.backward(y)?;
    assert_eq!(graph.grad(a)?, 3.0);

    graph.rewind(checkpoint)?;
    graph.set_leaf_data(a, 5.0)?;
    assert_eq!(graph.data(a)?, 5.0);
    Ok(())
}

#[test]
fn test_set_leaf_data_rejects_internal_nodes() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0)?;
    let t = graph.tanh(a)?;

    assert_eq!(
        graph.set_leaf_data(t, 0.0),
        Err(ScalarustError::NotALeaf {
            index: 1,
            op: "tanh".to_string()
        })
    );
    assert!(matches!(
        graph.set_leaf_data(a, f64::NAN),
        Err(ScalarustError::NonFiniteOperand { .. })
    ));
    assert_eq!(graph.data(a)?, 1.0);
    Ok(())
}
