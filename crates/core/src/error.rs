//! Advisory error model.

use thiserror::Error;

/// Result type used across the advisory pipeline.
pub type AdvisoryResult<T> = Result<T, AdvisoryError>;

/// Advisory-level error.
///
/// Every variant is local to a single submission. `ModelUnavailable` is the
/// only startup-time failure, and it degrades the recommendation action
/// rather than aborting the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdvisoryError {
    /// The trained model artifact is missing or failed to deserialize.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// A submission value failed validation (acres, feature domains).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The classifier produced a crop with no reference-table entry.
    #[error("unknown crop: {0}")]
    UnknownCrop(String),

    /// Total cost computed to zero, so ROI is undefined.
    #[error("ROI undefined: total cost is zero")]
    DivisionUndefined,
}

impl AdvisoryError {
    pub fn model_unavailable(msg: impl Into<String>) -> Self {
        Self::ModelUnavailable(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unknown_crop(crop: impl Into<String>) -> Self {
        Self::UnknownCrop(crop.into())
    }
}
