//! Unified error types for Prop-Imitation

use std::fmt;
use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Prop-Imitation
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Package or process name could not be determined
    #[error("Unresolved identity: {0}")]
    UnresolvedIdentity(String),

    /// An identity field could not be overwritten by the host
    #[error("Failed to set prop {field}: {reason}")]
    FieldUnavailable { field: String, reason: String },

    /// Key attestation was vetoed for this caller
    #[error("Key attestation blocked: {0}")]
    AttestationBlocked(BlockReason),
}

/// Why a key attestation request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// Security-check client with the integrity-check subsystem on the stack
    IntegrityCheck,
    /// App-store client, blocked regardless of the stack
    MarketClient,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::IntegrityCheck => f.write_str("integrity check caller"),
            BlockReason::MarketClient => f.write_str("market client"),
        }
    }
}

impl Error {
    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new unresolved identity error
    pub fn unresolved_identity<S: Into<String>>(msg: S) -> Self {
        Error::UnresolvedIdentity(msg.into())
    }

    /// Create a new field unavailable error
    pub fn field_unavailable<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Error::FieldUnavailable {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new attestation blocked error
    pub fn attestation_blocked(reason: BlockReason) -> Self {
        Error::AttestationBlocked(reason)
    }

    /// Whether the host should surface this as its "operation not supported" failure
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, Error::AttestationBlocked(_))
    }
}
