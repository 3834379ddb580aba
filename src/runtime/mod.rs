//! Support code imported by generated bindings.
//!
//! Every generated domain file imports this module as `rt`. The compiler
//! itself never calls into it; it fixes the shapes generated code is
//! written against.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | [`Command`] and [`Transport`] seams, codec helpers |
//! | `latch` | Single-use completion signal for blocking handles |
//! | `error` | [`ProtocolError`] |
//! | `message` | Wire envelopes |
//! | `dispatcher` | Correlation and event routing over a text-frame connection |
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use devtools_protogen::runtime::Dispatcher;
//!
//! let dispatcher = Arc::new(Dispatcher::new(Box::new(move |frame| socket.send_text(frame))));
//! let root = bindings::v1_3::get_document(GetDocumentParams { depth: None }, &*dispatcher)?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Command and transport traits.
pub mod command;

/// Request correlation over a text-frame connection.
pub mod dispatcher;

/// Protocol errors.
pub mod error;

/// Completion latch.
pub mod latch;

/// Wire envelopes.
pub mod message;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{Command, DEFAULT_COMMAND_TIMEOUT, EventSink, Transport, decode, encode};
pub use dispatcher::{DEFAULT_MAX_PENDING, Dispatcher, FrameWriter};
pub use error::ProtocolError;
pub use latch::Latch;
pub use message::{Incoming, Message, Request};
