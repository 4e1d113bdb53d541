//! Error types for qpstuff.

use thiserror::Error;

use crate::constraints::ConstraintKind;

/// Error type for stuffing operations.
#[derive(Debug, Error)]
pub enum StuffingError {
    /// A constraint of an unsupported kind reached the reduction.
    #[error("constraint {index} has unsupported kind {kind:?}")]
    UnsupportedConstraint {
        /// Position of the constraint in the problem's constraint list.
        index: usize,
        /// The offending kind.
        kind: ConstraintKind,
    },

    /// Shape mismatch.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// Invalid problem specification.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// An internal stacking invariant was violated.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for qpstuff operations.
pub type Result<T> = std::result::Result<T, StuffingError>;
