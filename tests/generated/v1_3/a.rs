// Code generated by devtools-protogen from protocol version 1.3. DO NOT EDIT.

//! Nodes of the A tree.

use super::*;

use ::std::borrow::Cow;
use ::std::collections::HashMap;
use ::std::sync::Arc;
use ::parking_lot::Mutex;
use ::serde::{Deserialize, Serialize};
use ::serde_json::value::RawValue;
use ::tracing::warn;
use devtools_protogen::runtime as rt;

/// Unique node identifier.
pub type NodeId = i64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ANode {
    #[serde(rename = "nodeId")]
    pub node_id: NodeId,

    #[serde(rename = "nodeName")]
    pub node_name: String,

    #[serde(rename = "children", skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Box<ANode>>>,

    #[serde(rename = "attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,

    #[serde(rename = "value", skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<RawValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mode(pub Cow<'static, str>);

#[allow(non_upper_case_globals)]
impl Mode {
    pub const Before: Self = Self(Cow::Borrowed("before"));
    pub const AfterChange: Self = Self(Cow::Borrowed("after-change"));

    /// Returns the wire literal.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holder {
    #[serde(rename = "local")]
    pub local: Box<ANode>,

    #[serde(rename = "remote")]
    pub remote: Box<BNode>,

    #[serde(rename = "mode")]
    pub mode: Mode,

    #[serde(rename = "type")]
    pub r#type: String,
}

/// Blocking handle for `A.enable`.
pub struct AEnableCommand {
    latch: rt::Latch,
    err: Mutex<Option<rt::ProtocolError>>,
}

impl AEnableCommand {
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
            return Err(rt::ProtocolError::timeout("A.enable", timeout));
        }
        match self.err.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl rt::Command for AEnableCommand {
    fn name(&self) -> &'static str {
        "A.enable"
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

/// Enables node notifications.
pub fn a_enable(transport: &dyn rt::Transport) -> Result<(), rt::ProtocolError> {
    let command = AEnableCommand::new();
    command.run(transport)?;
    Ok(())
}

/// Completion callback for `A.enable`.
pub type AEnableCallback = Box<dyn FnOnce(Result<(), rt::ProtocolError>) + Send>;

/// Callback handle for `A.enable`.
pub struct AsyncAEnableCommand {
    callback: Mutex<Option<AEnableCallback>>,
}

impl AsyncAEnableCommand {
    pub fn new(callback: Option<AEnableCallback>) -> Arc<Self> {
        Arc::new(Self {
            callback: Mutex::new(callback),
        })
    }

    /// Submits the command without waiting for the response.
    pub fn submit(self: &Arc<Self>, transport: &dyn rt::Transport) {
        transport.submit(Arc::clone(self) as Arc<dyn rt::Command>);
    }
}

impl rt::Command for AsyncAEnableCommand {
    fn name(&self) -> &'static str {
        "A.enable"
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
                    warn!(method = "A.enable", error = %err, "Command failed without callback");
                }
            }
        }
    }
}

/// Parameters of `A.getNode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNodeParams {
    #[serde(rename = "nodeId")]
    pub node_id: NodeId,

    #[serde(rename = "depth", skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
}

/// Result of `A.getNode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNodeResult {
    #[serde(rename = "node")]
    pub node: Box<ANode>,
}

/// Blocking handle for `A.getNode`.
pub struct GetNodeCommand {
    params: GetNodeParams,
    result: Mutex<Option<GetNodeResult>>,
    latch: rt::Latch,
    err: Mutex<Option<rt::ProtocolError>>,
}

impl GetNodeCommand {
    pub fn new(params: GetNodeParams) -> Arc<Self> {
        Arc::new(Self {
            params,
            result: Mutex::new(None),
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
            return Err(rt::ProtocolError::timeout("A.getNode", timeout));
        }
        match self.err.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns the decoded result of a completed run.
    pub fn result(&self) -> Option<GetNodeResult> {
        self.result.lock().clone()
    }

    pub fn take_result(&self) -> Option<GetNodeResult> {
        self.result.lock().take()
    }
}

impl rt::Command for GetNodeCommand {
    fn name(&self) -> &'static str {
        "A.getNode"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        rt::encode(&self.params).map(Some)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        match response.and_then(rt::decode::<GetNodeResult>) {
            Ok(result) => *self.result.lock() = Some(result),
            Err(err) => *self.err.lock() = Some(err),
        }
        self.latch.release();
    }
}

pub fn get_node(params: GetNodeParams, transport: &dyn rt::Transport) -> Result<GetNodeResult, rt::ProtocolError> {
    let command = GetNodeCommand::new(params);
    command.run(transport)?;
    command.take_result().ok_or(rt::ProtocolError::MissingResult)
}

/// Completion callback for `A.getNode`.
pub type GetNodeCallback = Box<dyn FnOnce(Result<GetNodeResult, rt::ProtocolError>) + Send>;

/// Callback handle for `A.getNode`.
pub struct AsyncGetNodeCommand {
    params: GetNodeParams,
    callback: Mutex<Option<GetNodeCallback>>,
}

impl AsyncGetNodeCommand {
    pub fn new(params: GetNodeParams, callback: Option<GetNodeCallback>) -> Arc<Self> {
        Arc::new(Self {
            params,
            callback: Mutex::new(callback),
        })
    }

    /// Submits the command without waiting for the response.
    pub fn submit(self: &Arc<Self>, transport: &dyn rt::Transport) {
        transport.submit(Arc::clone(self) as Arc<dyn rt::Command>);
    }
}

impl rt::Command for AsyncGetNodeCommand {
    fn name(&self) -> &'static str {
        "A.getNode"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        rt::encode(&self.params).map(Some)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        let outcome = response.and_then(rt::decode::<GetNodeResult>);
        let callback = self.callback.lock().take();
        match callback {
            Some(callback) => callback(outcome),
            None => {
                if let Err(err) = outcome {
                    warn!(method = "A.getNode", error = %err, "Command failed without callback");
                }
            }
        }
    }
}

/// Parameters of `A.setMode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetModeParams {
    #[serde(rename = "mode")]
    pub mode: Mode,
}

/// Blocking handle for `A.setMode`.
pub struct SetModeCommand {
    params: SetModeParams,
    latch: rt::Latch,
    err: Mutex<Option<rt::ProtocolError>>,
}

impl SetModeCommand {
    pub fn new(params: SetModeParams) -> Arc<Self> {
        Arc::new(Self {
            params,
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
            return Err(rt::ProtocolError::timeout("A.setMode", timeout));
        }
        match self.err.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl rt::Command for SetModeCommand {
    fn name(&self) -> &'static str {
        "A.setMode"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        rt::encode(&self.params).map(Some)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        match response.map(|_| ()) {
            Ok(()) => {}
            Err(err) => *self.err.lock() = Some(err),
        }
        self.latch.release();
    }
}

pub fn set_mode(params: SetModeParams, transport: &dyn rt::Transport) -> Result<(), rt::ProtocolError> {
    let command = SetModeCommand::new(params);
    command.run(transport)?;
    Ok(())
}

/// Completion callback for `A.setMode`.
pub type SetModeCallback = Box<dyn FnOnce(Result<(), rt::ProtocolError>) + Send>;

/// Callback handle for `A.setMode`.
pub struct AsyncSetModeCommand {
    params: SetModeParams,
    callback: Mutex<Option<SetModeCallback>>,
}

impl AsyncSetModeCommand {
    pub fn new(params: SetModeParams, callback: Option<SetModeCallback>) -> Arc<Self> {
        Arc::new(Self {
            params,
            callback: Mutex::new(callback),
        })
    }

    /// Submits the command without waiting for the response.
    pub fn submit(self: &Arc<Self>, transport: &dyn rt::Transport) {
        transport.submit(Arc::clone(self) as Arc<dyn rt::Command>);
    }
}

impl rt::Command for AsyncSetModeCommand {
    fn name(&self) -> &'static str {
        "A.setMode"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        rt::encode(&self.params).map(Some)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        let outcome = response.map(|_| ());
        let callback = self.callback.lock().take();
        match callback {
            Some(callback) => callback(outcome),
            None => {
                if let Err(err) = outcome {
                    warn!(method = "A.setMode", error = %err, "Command failed without callback");
                }
            }
        }
    }
}

/// Result of `A.countNodes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountNodesResult {
    #[serde(rename = "count")]
    pub count: i64,
}

/// Blocking handle for `A.countNodes`.
pub struct CountNodesCommand {
    result: Mutex<Option<CountNodesResult>>,
    latch: rt::Latch,
    err: Mutex<Option<rt::ProtocolError>>,
}

impl CountNodesCommand {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            result: Mutex::new(None),
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
            return Err(rt::ProtocolError::timeout("A.countNodes", timeout));
        }
        match self.err.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns the decoded result of a completed run.
    pub fn result(&self) -> Option<CountNodesResult> {
        self.result.lock().clone()
    }

    pub fn take_result(&self) -> Option<CountNodesResult> {
        self.result.lock().take()
    }
}

impl rt::Command for CountNodesCommand {
    fn name(&self) -> &'static str {
        "A.countNodes"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        Ok(None)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        match response.and_then(rt::decode::<CountNodesResult>) {
            Ok(result) => *self.result.lock() = Some(result),
            Err(err) => *self.err.lock() = Some(err),
        }
        self.latch.release();
    }
}

pub fn count_nodes(transport: &dyn rt::Transport) -> Result<CountNodesResult, rt::ProtocolError> {
    let command = CountNodesCommand::new();
    command.run(transport)?;
    command.take_result().ok_or(rt::ProtocolError::MissingResult)
}

/// Completion callback for `A.countNodes`.
pub type CountNodesCallback = Box<dyn FnOnce(Result<CountNodesResult, rt::ProtocolError>) + Send>;

/// Callback handle for `A.countNodes`.
pub struct AsyncCountNodesCommand {
    callback: Mutex<Option<CountNodesCallback>>,
}

impl AsyncCountNodesCommand {
    pub fn new(callback: Option<CountNodesCallback>) -> Arc<Self> {
        Arc::new(Self {
            callback: Mutex::new(callback),
        })
    }

    /// Submits the command without waiting for the response.
    pub fn submit(self: &Arc<Self>, transport: &dyn rt::Transport) {
        transport.submit(Arc::clone(self) as Arc<dyn rt::Command>);
    }
}

impl rt::Command for AsyncCountNodesCommand {
    fn name(&self) -> &'static str {
        "A.countNodes"
    }

    fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError> {
        Ok(None)
    }

    fn done(&self, response: Result<&RawValue, rt::ProtocolError>) {
        let outcome = response.and_then(rt::decode::<CountNodesResult>);
        let callback = self.callback.lock().take();
        match callback {
            Some(callback) => callback(outcome),
            None => {
                if let Err(err) = outcome {
                    warn!(method = "A.countNodes", error = %err, "Command failed without callback");
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentUpdatedEvent {}

/// Registers `callback` for `A.documentUpdated` notifications.
///
/// Payloads that fail to decode are logged and dropped.
pub fn on_document_updated<F>(transport: &dyn rt::Transport, callback: F) where F: Fn(DocumentUpdatedEvent) + Send + Sync + 'static {
    transport.add_event_sink(
        "A.documentUpdated",
        Box::new(move |params: &RawValue| match rt::decode::<DocumentUpdatedEvent>(params) {
            Ok(event) => callback(event),
            Err(err) => warn!(event = "A.documentUpdated", error = %err, "Dropping malformed event"),
        }),
    );
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeChangedEvent {
    #[serde(rename = "node")]
    pub node: Box<ANode>,
}

/// Registers `callback` for `A.nodeChanged` notifications.
///
/// Payloads that fail to decode are logged and dropped.
pub fn on_node_changed<F>(transport: &dyn rt::Transport, callback: F) where F: Fn(NodeChangedEvent) + Send + Sync + 'static {
    transport.add_event_sink(
        "A.nodeChanged",
        Box::new(move |params: &RawValue| match rt::decode::<NodeChangedEvent>(params) {
            Ok(event) => callback(event),
            Err(err) => warn!(event = "A.nodeChanged", error = %err, "Dropping malformed event"),
        }),
    );
}
