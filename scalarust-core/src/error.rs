use thiserror::Error;

/// Custom error type for the Scalarust engine.
///
/// Every error is raised at the call that introduced the bad value: node
/// construction, operand promotion, or a module's forward pass. Differentiating
/// a valid graph never fails.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarustError {
    #[error("Power is undefined for real output: base {base} raised to non-integral exponent {exponent}")]
    UndefinedPower { base: f64, exponent: f64 },

    #[error("Operation '{operation}' produced a non-finite value ({value}) from finite operands")]
    NonFiniteResult { operation: String, value: f64 },

    #[error("Expected a finite scalar operand, got {value}")]
    NonFiniteOperand { value: f64 },

    #[error("Operand of type {type_name} cannot be represented as a scalar")]
    NonNumericOperand { type_name: &'static str },

    #[error("Node {index} does not belong to this graph")]
    InvalidNode { index: usize },

    #[error("Node {index} is not a leaf (produced by '{op}'); only leaf data can be overwritten")]
    NotALeaf { index: usize, op: String },

    #[error("Leaf {index} already feeds {consumers} node(s); rewind past them before overwriting its data")]
    LeafHasConsumers { index: usize, consumers: usize },

    #[error("Cannot rewind to checkpoint {checkpoint}: graph only holds {len} nodes")]
    InvalidCheckpoint { checkpoint: usize, len: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter initialization: {0}")]
    InvalidInit(String),
}
