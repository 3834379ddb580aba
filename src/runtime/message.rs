//! Wire envelopes.
//!
//! # Format
//!
//! Outgoing command:
//! ```json
//! { "id": 1, "method": "DOM.getDocument", "params": { "depth": 1 } }
//! ```
//!
//! Incoming response:
//! ```json
//! { "id": 1, "result": { ... } }
//! { "id": 1, "error": { "code": -32000, "message": "..." } }
//! ```
//!
//! Incoming event:
//! ```json
//! { "method": "DOM.documentUpdated", "params": { ... } }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::error::ProtocolError;

// ============================================================================
// Constants
// ============================================================================

/// Payload substituted for an absent `result` or `params`.
static EMPTY_OBJECT: LazyLock<Box<RawValue>> = LazyLock::new(|| {
    RawValue::from_string("{}".to_string()).expect("empty object is valid JSON")
});

// ============================================================================
// Request
// ============================================================================

/// An outgoing command frame.
#[derive(Debug, Clone, Serialize)]
pub struct Request<'a> {
    /// Correlation id, unique per connection.
    pub id: u64,

    /// Wire method, `Domain.command`.
    pub method: &'a str,

    /// Encoded parameters; omitted for commands without parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<&'a RawValue>,
}

impl<'a> Request<'a> {
    #[inline]
    #[must_use]
    pub fn new(id: u64, method: &'a str, params: Option<&'a RawValue>) -> Self {
        Self { id, method, params }
    }
}

// ============================================================================
// Incoming
// ============================================================================

/// Error object of a failed response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Any frame received from the remote end.
///
/// Frames carrying an `id` are responses; the rest are events.
#[derive(Debug, Deserialize)]
pub struct Incoming {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub error: Option<RemoteError>,

    #[serde(default)]
    pub result: Option<Box<RawValue>>,

    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub params: Option<Box<RawValue>>,
}

/// A classified incoming frame.
#[derive(Debug)]
pub enum Message {
    /// Answer to the command submitted with `id`.
    Response {
        id: u64,
        outcome: Result<Box<RawValue>, ProtocolError>,
    },
    /// Notification named `method`.
    Event {
        method: String,
        params: Box<RawValue>,
    },
}

impl Incoming {
    /// Parses one text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Decode`] if the frame is not a JSON object.
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }

    /// Classifies the frame.
    ///
    /// An error object counts only when its message is non-empty. Returns
    /// `None` for frames with neither `id` nor `method`.
    #[must_use]
    pub fn into_message(self) -> Option<Message> {
        if let Some(id) = self.id {
            let outcome = match self.error {
                Some(error) if !error.message.is_empty() => {
                    Err(ProtocolError::remote(error.code, error.message))
                }
                _ => Ok(self.result.unwrap_or_else(empty_object)),
            };
            return Some(Message::Response { id, outcome });
        }

        self.method.map(|method| Message::Event {
            method,
            params: self.params.unwrap_or_else(empty_object),
        })
    }
}

/// Returns a fresh `{}` payload.
#[must_use]
pub fn empty_object() -> Box<RawValue> {
    EMPTY_OBJECT.clone()
}

// ============================================================================
// Tests
// ============================================================================
