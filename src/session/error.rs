//! Session error taxonomy.

use thiserror::Error;

use crate::blockchain::BlockchainError;

/// Why an operation did not complete.
///
/// Every variant is reported the same way: its message is shown and the busy
/// flag is cleared. None are retried.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Provider is on a different chain than the deployment.
    #[error("Change the network to {network} (expected chain {expected}, connected to {actual})")]
    WrongNetwork {
        network: String,
        expected: u64,
        actual: u64,
    },

    /// A required form field is empty.
    #[error("{0}")]
    MissingInput(&'static str),

    /// A numeric form field could not be parsed.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// An address was rejected by the address parser.
    #[error("Invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    /// Provider, signer or transaction failure.
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}

impl SessionError {
    /// True when the failure happened before anything was sent to the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SessionError::MissingInput(_) | SessionError::InvalidInput { .. }
        )
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
