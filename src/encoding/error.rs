//! Error types for encoding operations.

use std::error::Error;
use std::fmt;

/// Result type for encoding operations.
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Errors that can occur while building a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The section grew past the PSI size limit.
    SectionOverflow {
        /// Number of bytes the section needs.
        needed: usize,
        /// Maximum number of bytes a section may occupy.
        available: usize,
    },

    /// A field value cannot be represented on the wire.
    InvalidFieldValue {
        /// Name of the offending field.
        field: &'static str,
        /// String representation of the rejected value.
        value: String,
    },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::SectionOverflow { needed, available } => {
                write!(
                    f,
                    "section overflow: needed {} bytes, limit is {}",
                    needed, available
                )
            }
            EncodingError::InvalidFieldValue { field, value } => {
                write!(f, "invalid field value: {} = {}", field, value)
            }
        }
    }
}

impl Error for EncodingError {}
