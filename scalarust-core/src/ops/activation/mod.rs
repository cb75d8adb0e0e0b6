// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear activation functions used by the network layer.
//!
//! ## Currently Implemented:
//! - [`tanh_op`](tanh/fn.tanh_op.html): hyperbolic tangent.

pub mod tanh;

pub use tanh::tanh_op;
