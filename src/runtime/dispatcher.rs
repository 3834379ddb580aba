//! Socket-agnostic request correlation and event routing.
//!
//! The [`Dispatcher`] owns no socket. Outgoing frames are handed to a
//! [`FrameWriter`] supplied by the caller; incoming text frames are fed to
//! [`Dispatcher::handle_incoming`] from whatever loop reads the socket.
//!
//! # Lifecycle
//!
//! | Step | Effect |
//! |------|--------|
//! | `submit` | assigns an id, records the command, writes the frame |
//! | `handle_incoming` (response) | removes the command and completes it |
//! | `handle_incoming` (event) | hands the payload to every sink for the name |
//! | `cancel` | forgets a command its caller stopped waiting for |
//! | `close` | fails every pending command with `ConnectionClosed` |
//!
//! The closed flag is only read or written while holding the correlation
//! lock, so a command is either recorded before `close` drains the table or
//! refused after it.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde_json::value::RawValue;
use tracing::{debug, trace, warn};

use super::command::{Command, EventSink, Transport};
use super::error::ProtocolError;
use super::message::{Incoming, Message, Request};

// ============================================================================
// Constants
// ============================================================================

/// Pending commands allowed before new submissions are refused.
pub const DEFAULT_MAX_PENDING: usize = 1024;

// ============================================================================
// Types
// ============================================================================

/// Writes one text frame to the connection.
pub type FrameWriter = Box<dyn Fn(String) -> Result<(), ProtocolError> + Send + Sync>;

/// Map of request ids to submitted commands.
type CorrelationMap = FxHashMap<u64, Arc<dyn Command>>;

/// Shared form of a registered sink, so delivery runs without the lock.
type SharedSink = Arc<dyn Fn(&RawValue) + Send + Sync>;

// ============================================================================
// Dispatcher
// ============================================================================

/// A [`Transport`] over any text-frame connection.
///
/// # Thread Safety
///
/// `Dispatcher` is `Send + Sync`. Commands are completed and sinks invoked
/// on the thread that calls [`handle_incoming`](Self::handle_incoming),
/// with no lock held.
pub struct Dispatcher {
    next_id: AtomicU64,
    closed: AtomicBool,
    correlation: Mutex<CorrelationMap>,
    sinks: Mutex<FxHashMap<String, Vec<SharedSink>>>,
    writer: FrameWriter,
    max_pending: usize,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.pending_count())
            .field("closed", &self.is_closed())
            .field("max_pending", &self.max_pending)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Creates a dispatcher writing frames through `writer`.
    #[must_use]
    pub fn new(writer: FrameWriter) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            closed: AtomicBool::new(false),
            correlation: Mutex::new(CorrelationMap::default()),
            sinks: Mutex::new(FxHashMap::default()),
            writer,
            max_pending: DEFAULT_MAX_PENDING,
        }
    }

    /// Sets how many commands may await a response at once.
    #[must_use]
    pub fn with_max_pending(mut self, max_pending: usize) -> Self {
        self.max_pending = max_pending;
        self
    }

    /// Returns the number of commands awaiting a response.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.correlation.lock().len()
    }

    /// Returns `true` after [`close`](Self::close).
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Routes one incoming text frame.
    ///
    /// Malformed frames and responses for unknown ids are logged and
    /// dropped.
    pub fn handle_incoming(&self, text: &str) {
        let incoming = match Incoming::parse(text) {
            Ok(incoming) => incoming,
            Err(e) => {
                warn!(error = %e, "Failed to parse incoming frame");
                return;
            }
        };

        match incoming.into_message() {
            Some(Message::Response { id, outcome }) => self.complete(id, outcome),
            Some(Message::Event { method, params }) => self.deliver(&method, &params),
            None => warn!(text = %text, "Incoming frame is neither response nor event"),
        }
    }

    /// Fails every pending command with [`ProtocolError::ConnectionClosed`].
    ///
    /// Later submissions fail immediately.
    pub fn close(&self) {
        let pending: Vec<_> = {
            let mut correlation = self.correlation.lock();
            self.closed.store(true, Ordering::Release);
            correlation.drain().collect()
        };
        let count = pending.len();

        for (_, command) in pending {
            command.done(Err(ProtocolError::ConnectionClosed));
        }

        if count > 0 {
            debug!(count, "Failed pending commands on close");
        }
    }

    fn complete(&self, id: u64, outcome: Result<Box<RawValue>, ProtocolError>) {
        let command = self.correlation.lock().remove(&id);

        match command {
            Some(command) => {
                trace!(id, method = command.name(), "Response received");
                match outcome {
                    Ok(raw) => command.done(Ok(&*raw)),
                    Err(e) => command.done(Err(e)),
                }
            }
            None => warn!(id, "Response for unknown request"),
        }
    }

    fn deliver(&self, method: &str, params: &RawValue) {
        let sinks = self.sinks.lock().get(method).cloned().unwrap_or_default();

        if sinks.is_empty() {
            trace!(method, "No sinks for event");
            return;
        }

        for sink in sinks {
            sink(params);
        }
    }
}

// ============================================================================
// Transport
// ============================================================================

impl Transport for Dispatcher {
    fn submit(&self, command: Arc<dyn Command>) {
        if self.is_closed() {
            command.done(Err(ProtocolError::ConnectionClosed));
            return;
        }

        let params = match command.params() {
            Ok(params) => params,
            Err(e) => {
                command.done(Err(e));
                return;
            }
        };

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let frame = match serde_json::to_string(&Request::new(id, command.name(), params.as_deref())) {
            Ok(frame) => frame,
            Err(e) => {
                command.done(Err(ProtocolError::Encode(e)));
                return;
            }
        };

        // Store correlation before writing
        let refused = {
            let mut correlation = self.correlation.lock();
            if self.is_closed() {
                Some(ProtocolError::ConnectionClosed)
            } else if correlation.len() >= self.max_pending {
                warn!(
                    pending = correlation.len(),
                    max = self.max_pending,
                    "Too many pending commands"
                );
                Some(ProtocolError::TooManyPending {
                    pending: correlation.len(),
                    max: self.max_pending,
                })
            } else {
                correlation.insert(id, Arc::clone(&command));
                None
            }
        };

        if let Some(e) = refused {
            command.done(Err(e));
            return;
        }

        if let Err(e) = (self.writer)(frame) {
            let command = self.correlation.lock().remove(&id);
            if let Some(command) = command {
                command.done(Err(e));
            }
            return;
        }

        trace!(id, method = command.name(), "Request sent");
    }

    fn add_event_sink(&self, event: &str, sink: EventSink) {
        self.sinks
            .lock()
            .entry(event.to_string())
            .or_default()
            .push(Arc::from(sink));
    }

    fn cancel(&self, command: &Arc<dyn Command>) -> bool {
        let mut correlation = self.correlation.lock();
        let id = correlation
            .iter()
            .find(|(_, pending)| Arc::ptr_eq(pending, command))
            .map(|(id, _)| *id);

        match id {
            Some(id) => {
                correlation.remove(&id);
                debug!(id, method = command.name(), "Cancelled pending command");
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
