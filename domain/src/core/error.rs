//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("SDG number out of range (expected 1-17): {0}")]
    SdgOutOfRange(u32),

    #[error("Invalid SDG label: {0}")]
    InvalidSdgLabel(String),

    #[error("Invalid match policy: {0}")]
    InvalidMatchPolicy(String),

    #[error("Invalid classifier kind: {0}")]
    InvalidClassifierKind(String),
}

impl DomainError {
    /// Check if this error came from an out-of-range goal number
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DomainError::SdgOutOfRange(_))
    }
}
