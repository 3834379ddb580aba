//! Seams between generated bindings and a connection.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::value::{RawValue, to_raw_value};

use super::error::ProtocolError;

// ============================================================================
// Constants
// ============================================================================

/// How long a blocking handle waits for a response by default.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Types
// ============================================================================

/// Receives the raw payload of every notification registered for.
pub type EventSink = Box<dyn Fn(&RawValue) + Send + Sync>;

// ============================================================================
// Command
// ============================================================================

/// A submitted command as the transport sees it.
///
/// Generated handles implement this for both call conventions.
pub trait Command: Send + Sync {
    /// Wire method, `Domain.command`.
    fn name(&self) -> &'static str;

    /// Encoded parameters, `None` when the command takes none.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Encode`] if the parameters cannot be encoded.
    fn params(&self) -> Result<Option<Box<RawValue>>, ProtocolError>;

    /// Completes the command with the raw result or the failure.
    ///
    /// Called exactly once per submission.
    fn done(&self, response: Result<&RawValue, ProtocolError>);
}

// ============================================================================
// Transport
// ============================================================================

/// A connection generated bindings can submit commands to.
pub trait Transport {
    /// Sends `command`; the transport calls [`Command::done`] on completion.
    fn submit(&self, command: Arc<dyn Command>);

    /// Registers `sink` for notifications named `event`.
    ///
    /// Every sink registered for a name receives every notification.
    fn add_event_sink(&self, event: &str, sink: EventSink);

    /// Forgets a submitted command that is no longer waited for.
    ///
    /// Returns `true` if the command was still pending. A cancelled command
    /// is never completed.
    fn cancel(&self, command: &Arc<dyn Command>) -> bool {
        let _ = command;
        false
    }
}

// ============================================================================
// Codec Helpers
// ============================================================================

/// Encodes a parameters record.
///
/// # Errors
///
/// Returns [`ProtocolError::Encode`] on serialization failure.
pub fn encode<T: Serialize>(value: &T) -> Result<Box<RawValue>, ProtocolError> {
    to_raw_value(value).map_err(ProtocolError::Encode)
}

/// Decodes a result or event record.
///
/// # Errors
///
/// Returns [`ProtocolError::Decode`] if the payload does not match `T`.
pub fn decode<T: DeserializeOwned>(raw: &RawValue) -> Result<T, ProtocolError> {
    serde_json::from_str(raw.get()).map_err(ProtocolError::Decode)
}

// ============================================================================
// Tests
// ============================================================================
