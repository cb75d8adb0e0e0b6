//! Scalar reverse-mode automatic differentiation.
//!
//! Every value lives as a node in a [`Graph`] arena. Arithmetic on
//! [`NodeId`] handles records the operation that produced each node, and
//! [`Graph::backward`] propagates gradients from an output back to every
//! node it depends on. The `nn` and `model` modules build tanh neurons,
//! layers and multi-layer perceptrons on top of the same graph.

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod graph;
pub mod ops;

pub mod model;
pub mod nn;
pub mod utils;

pub use error::ScalarustError;
pub use graph::{Checkpoint, Graph, IntoNode, Node, NodeId};
pub use model::Mlp;
pub use nn::{Init, Layer, Module, Neuron};

// Re-export traits required by public functions/structs
pub use num_traits;
