//! # Scalar Operations Module (`ops`)
//!
//! Forward operations that build the computation graph.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`xxx_op`) that
//!   computes the forward value and appends a node tagged with the matching
//!   [`BackwardOp`](crate::autograd::BackwardOp) variant. The same operations
//!   are available as methods on [`Graph`](crate::graph::Graph).
//! - **Derived operations:** `neg` and `sub` are expressed through `mul` and
//!   `add`; `sum` is a fold of `add`. They introduce no new backward rule.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, sum.
//! - [`activation`]: tanh.

pub mod activation;
pub mod arithmetic;
