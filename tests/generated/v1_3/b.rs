// Code generated by devtools-protogen from protocol version 1.3. DO NOT EDIT.

use super::*;

use ::std::sync::Arc;
use ::parking_lot::Mutex;
use ::serde::{Deserialize, Serialize};
use ::serde_json::value::RawValue;
use ::tracing::warn;
use devtools_protogen::runtime as rt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BNode {
    #[serde(rename = "frameId")]
    pub frame_id: FrameId,
}

pub type FrameId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    #[serde(rename = "id")]
    pub id: FrameId,

    #[serde(rename = "parent", skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Frame>>,

    #[serde(rename = "owner", skip_serializing_if = "Option::is_none")]
    pub owner: Option<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headers {}

/// Blocking handle for `B.enable`.
pub struct BEnableCommand {
    latch: rt::Latch,
    err: Mutex<Option<rt::ProtocolError>>,
}

impl BEnableCommand {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            latch: rt::Latch::new(),
            err: Mutex::new(None),
        })
    }

    /// Submits the command and blocks until the response is decoded.
    ///
    /// Gives up after [`rt::DEFAULT_COMMAND_TIMEOUT`].
    pub fn run(self: &Arc<Self>, transport: &dyn rt::Transport) -> Result<(), rt::ProtocolError> {
        self.run_timeout(transport, rt::DEFAULT_COMMAND_TIMEOUT)
    }

    /// Like `run`, but abandons the command after `timeout`.
    pub fn run_timeout(self: &Arc<Self>, transport: &dyn rt::Transport, timeout: ::std::time::Duration) -> Result<(), rt::ProtocolError> {
        let command = Arc::clone(self) as Arc<dyn rt::Command>;
        transport.submit(Arc::clone(&command));
        if !self.latch.wait_timeout(timeout) {
            transport.cancel(&command);
            return Err(rt::ProtocolError::timeout("B.enable", timeout));
        }
        match self.err.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl rt::Command for BEnableCommand {
    fn name(&self) -> &'static str {
        "B.enable"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        Ok(None)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        match response.map(|_| ()) {
            Ok(()) => {}
            Err(err) => *self.err.lock() = Some(err),
        }
        self.latch.release();
    }
}

pub fn b_enable(transport: &dyn rt::Transport) -> Result<(), rt::ProtocolError> {
    let command = BEnableCommand::new();
    command.run(transport)?;
    Ok(())
}

/// Completion callback for `B.enable`.
pub type BEnableCallback = Box<dyn FnOnce(Result<(), rt::ProtocolError>) + Send>;

/// Callback handle for `B.enable`.
pub struct AsyncBEnableCommand {
    callback: Mutex<Option<BEnableCallback>>,
}

impl AsyncBEnableCommand {
    pub fn new(callback: Option<BEnableCallback>) -> Arc<Self> {
        Arc::new(Self {
            callback: Mutex::new(callback),
        })
    }

    /// Submits the command without waiting for the response.
    pub fn submit(self: &Arc<Self>, transport: &dyn rt::Transport) {
        transport.submit(Arc::clone(self) as Arc<dyn rt::Command>);
    }
}

impl rt::Command for AsyncBEnableCommand {
    fn name(&self) -> &'static str {
        "B.enable"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        Ok(None)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        let outcome = response.map(|_| ());
        let callback = self.callback.lock().take();
        match callback {
            Some(callback) => callback(outcome),
            None => {
                if let Err(err) = outcome {
                    warn!(method = "B.enable", error = %err, "Command failed without callback");
                }
            }
        }
    }
}

/// Blocking handle for `B.secret`.
pub struct SecretCommand {
    latch: rt::Latch,
    err: Mutex<Option<rt::ProtocolError>>,
}

impl SecretCommand {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            latch: rt::Latch::new(),
            err: Mutex::new(None),
        })
    }

    /// Submits the command and blocks until the response is decoded.
    ///
    /// Gives up after [`rt::DEFAULT_COMMAND_TIMEOUT`].
    pub fn run(self: &Arc<Self>, transport: &dyn rt::Transport) -> Result<(), rt::ProtocolError> {
        self.run_timeout(transport, rt::DEFAULT_COMMAND_TIMEOUT)
    }

    /// Like `run`, but abandons the command after `timeout`.
    pub fn run_timeout(self: &Arc<Self>, transport: &dyn rt::Transport, timeout: ::std::time::Duration) -> Result<(), rt::ProtocolError> {
        let command = Arc::clone(self) as Arc<dyn rt::Command>;
        transport.submit(Arc::clone(&command));
        if !self.latch.wait_timeout(timeout) {
            transport.cancel(&command);
            return Err(rt::ProtocolError::timeout("B.secret", timeout));
        }
        match self.err.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl rt::Command for SecretCommand {
    fn name(&self) -> &'static str {
        "B.secret"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        Ok(None)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        match response.map(|_| ()) {
            Ok(()) => {}
            Err(err) => *self.err.lock() = Some(err),
        }
        self.latch.release();
    }
}

/// **Experimental.**
pub fn secret(transport: &dyn rt::Transport) -> Result<(), rt::ProtocolError> {
    let command = SecretCommand::new();
    command.run(transport)?;
    Ok(())
}

/// Completion callback for `B.secret`.
pub type SecretCallback = Box<dyn FnOnce(Result<(), rt::ProtocolError>) + Send>;

/// Callback handle for `B.secret`.
pub struct AsyncSecretCommand {
    callback: Mutex<Option<SecretCallback>>,
}

impl AsyncSecretCommand {
    pub fn new(callback: Option<SecretCallback>) -> Arc<Self> {
        Arc::new(Self {
            callback: Mutex::new(callback),
        })
    }

    /// Submits the command without waiting for the response.
    pub fn submit(self: &Arc<Self>, transport: &dyn rt::Transport) {
        transport.submit(Arc::clone(self) as Arc<dyn rt::Command>);
    }
}

impl rt::Command for AsyncSecretCommand {
    fn name(&self) -> &'static str {
        "B.secret"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        Ok(None)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        let outcome = response.map(|_| ());
        let callback = self.callback.lock().take();
        match callback {
            Some(callback) => callback(outcome),
            None => {
                if let Err(err) = outcome {
                    warn!(method = "B.secret", error = %err, "Command failed without callback");
                }
            }
        }
    }
}

/// **Experimental.**
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameAttachedEvent {
    #[serde(rename = "frame")]
    pub frame: Box<Frame>,
}

/// Registers `callback` for `B.frameAttached` notifications.
///
/// Payloads that fail to decode are logged and dropped.
pub fn on_frame_attached<F>(transport: &dyn rt::Transport, callback: F) where F: Fn(FrameAttachedEvent) + Send + Sync + 'static {
    transport.add_event_sink(
        "B.frameAttached",
        Box::new(move |params: &RawValue| match rt::decode::<FrameAttachedEvent>(params) {
            Ok(event) => callback(event),
            Err(err) => warn!(event = "B.frameAttached", error = %err, "Dropping malformed event"),
        }),
    );
}
