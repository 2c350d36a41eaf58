//! Generator-level errors.

use thiserror::Error;

use crate::encoding::EncodingError;

/// Result type alias for generator operations.
pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;

/// Errors surfaced to the host pipeline.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeneratorError {
    /// A section buffer could not be built; fatal for the in-flight event,
    /// the host decides process-level policy.
    #[error("section encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    /// The upstream flow definition does not describe SCTE-35 events.
    #[error("flow definition rejected: expected `void.scte35.`, got `{def}`")]
    RejectedFlowDef { def: String },
}
