//! Errors surfaced to callers of generated bindings.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use thiserror::Error;

// ============================================================================
// ProtocolError
// ============================================================================

/// Failure of one command invocation or event delivery.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The remote end answered with an error object.
    #[error("Remote error {code}: {message}")]
    Remote {
        /// Protocol error code.
        code: i64,
        /// Human-readable message from the remote end.
        message: String,
    },

    /// A payload did not match the expected record.
    #[error("Failed to decode payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// Parameters could not be encoded.
    #[error("Failed to encode parameters: {0}")]
    Encode(#[source] serde_json::Error),

    /// The connection closed before a response arrived.
    #[error("Connection closed")]
    ConnectionClosed,

    /// A completed call produced no result.
    #[error("Command completed without a result")]
    MissingResult,

    /// No response arrived in time; the command was abandoned.
    #[error("Command {method} timed out after {timeout_ms}ms")]
    Timeout {
        /// Wire method of the abandoned command.
        method: String,
        /// Elapsed wait in milliseconds.
        timeout_ms: u64,
    },

    /// The transport refused the command because too many are in flight.
    #[error("Too many pending commands: {pending}/{max}")]
    TooManyPending {
        /// Commands awaiting a response.
        pending: usize,
        /// Configured limit.
        max: usize,
    },

    /// The transport could not hand the frame to the connection.
    #[error("Transport error: {message}")]
    Transport {
        /// Description from the frame writer.
        message: String,
    },
}

impl ProtocolError {
    /// Creates a remote error.
    #[inline]
    pub fn remote(code: i64, message: impl Into<String>) -> Self {
        Self::Remote {
            code,
            message: message.into(),
        }
    }

    /// Creates a transport error.
    #[inline]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    #[inline]
    pub fn timeout(method: impl Into<String>, timeout: Duration) -> Self {
        Self::Timeout {
            method: method.into(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Returns `true` if the remote end rejected the command.
    #[inline]
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Returns `true` if the command was abandoned without a response.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` if the failure came from the connection, not the call.
    #[inline]
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionClosed | Self::Transport { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
