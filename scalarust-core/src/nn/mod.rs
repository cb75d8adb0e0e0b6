// src/nn/mod.rs
// Neural network building blocks on top of the scalar graph.

pub mod init;
pub mod layers;
pub mod module; // Trait Module

// Re-export common items
pub use init::Init;
pub use layers::{Layer, Neuron};
pub use module::Module;
