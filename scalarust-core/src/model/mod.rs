// src/model/mod.rs
// Complete networks assembled from `nn` layers.

pub mod mlp;

pub use mlp::Mlp;
