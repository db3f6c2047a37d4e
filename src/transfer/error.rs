//! Error types for the transfer protocol.

use thiserror::Error;

/// Errors returned while decoding drag transfer payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferError {
    /// The payload declares a kind the target does not interpret.
    #[error("transfer kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// Kind the target accepts.
        expected: String,
        /// Kind the payload declared.
        actual: String,
    },

    /// The payload could not be parsed.
    #[error("malformed transfer payload: {0}")]
    MalformedPayload(String),
}
