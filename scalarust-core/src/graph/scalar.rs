// src/graph/scalar.rs
// Promotion of raw numbers into graph nodes.

use crate::error::ScalarustError;
use crate::graph::{Graph, NodeId};
use num_traits::ToPrimitive;

/// Anything that can stand as an operand of a graph operation.
///
/// Existing nodes are used as-is (after checking they belong to the graph);
/// raw numbers are promoted to a fresh leaf.
pub trait IntoNode {
    fn into_node(self, graph: &mut Graph) -> Result<NodeId, ScalarustError>;
}

impl IntoNode for NodeId {
    fn into_node(self, graph: &mut Graph) -> Result<NodeId, ScalarustError> {
        graph.node(self)?;
        Ok(self)
    }
}

macro_rules! impl_into_node_for_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoNode for $t {
                fn into_node(self, graph: &mut Graph) -> Result<NodeId, ScalarustError> {
                    graph.leaf(self)
                }
            }
        )*
    };
}

impl_into_node_for_primitive!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Converts a raw operand to a finite `f64`, failing at the boundary rather
/// than letting NaN or infinities into the graph.
pub(crate) fn to_finite_scalar<S: ToPrimitive>(value: &S) -> Result<f64, ScalarustError> {
    let scalar = value
        .to_f64()
        .ok_or(ScalarustError::NonNumericOperand {
            type_name: std::any::type_name::<S>(),
        })?;
    if !scalar.is_finite() {
        return Err(ScalarustError::NonFiniteOperand { value: scalar });
    }
    Ok(scalar)
}
