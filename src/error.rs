//! Error types for grid and color map construction.
//!
//! Only construction can fail. Lookups on a valid grid never return an error:
//! they extrapolate or yield NaN instead (see the individual grid types).

use thiserror::Error;

/// Errors raised while building or re-validating a grid or color map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Adjacent samples are not strictly ordered in the grid's direction.
    #[error("samples are not strictly monotone at index {index}")]
    NotMonotone { index: usize },

    /// Fewer samples than the grid type needs.
    #[error("grid needs at least {min} samples, got {len}")]
    TooFewSamples { len: usize, min: usize },

    /// The step is zero, not finite, or points away from the end value.
    #[error("illegal grid: step does not lead from start to end")]
    IllegalStep,

    /// Start and end coincide (or are not finite) so no spacing can be derived.
    #[error("grid range is degenerate")]
    DegenerateRange,

    /// Parallel arrays do not have the length implied by the grid dimensions.
    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Scaling by zero or a non-finite factor would collapse the samples.
    #[error("scale factor must be finite and non-zero")]
    InvalidScaleFactor,

    /// A color table needs at least one color.
    #[error("color table is empty")]
    EmptyColorTable,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
