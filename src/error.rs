//! Error types for the smoke-test harness.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the JSON-RPC provider and contract handles.
#[derive(Error, Debug)]
pub enum RpcError {
    /// HTTP transport failure, including the client-level request timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error object returned by the node.
    #[error("node returned error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message.
        message: String,
    },

    /// Response arrived but did not have the expected shape.
    #[error("invalid response: {message}")]
    InvalidResponse {
        /// What was wrong with the payload.
        message: String,
    },

    /// Endpoint URL could not be parsed.
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Contract artifact could not be read from disk.
    #[error("artifact error: {0}")]
    Artifact(#[from] std::io::Error),

    /// The node reports a different chain id than the connection declared.
    #[error("chain id mismatch: node reported {actual}, connection declared {expected}")]
    ChainIdMismatch {
        /// Chain id declared at connection time.
        expected: u64,
        /// Chain id reported by the node.
        actual: u64,
    },

    /// Call payload could not be built or decoded against the artifact ABI.
    #[error("abi error: {message}")]
    Abi {
        /// Error message.
        message: String,
    },

    /// No receipt appeared before the deadline.
    #[error("timed out after {0:?} waiting for transaction receipt")]
    ReceiptTimeout(Duration),
}

impl RpcError {
    /// Create an invalid response error.
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create an ABI error.
    pub fn abi<S: Into<String>>(message: S) -> Self {
        Self::Abi {
            message: message.into(),
        }
    }
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, RpcError>;
