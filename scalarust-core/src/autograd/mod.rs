//! Reverse-mode differentiation over a [`Graph`](crate::graph::Graph).
//!
//! Each non-leaf node records a [`BackwardOp`]: the operator that produced it
//! together with its operand handles. [`Graph::backward`](crate::graph::Graph::backward)
//! orders the graph with [`graph::topological_sort`] and replays the local
//! rules in reverse.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::topological_sort;
