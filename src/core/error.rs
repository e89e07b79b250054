use thiserror::Error;

/// Errors reported by reference validation and payload construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ZahlteilError {
    /// Input does not match the expected digit or IBAN shape.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Well-formed input failing its check-digit verification.
    #[error("checksum mismatch: {0}")]
    ChecksumMismatch(String),

    /// A partner or account field required for payload construction is absent.
    #[error("missing required field: {0}")]
    MissingField(String),
}
