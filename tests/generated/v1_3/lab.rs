// Code generated by devtools-protogen from protocol version 1.3. DO NOT EDIT.

//! **Experimental.**

use super::*;

use ::std::sync::Arc;
use ::parking_lot::Mutex;
use ::serde_json::value::RawValue;
use ::tracing::warn;
use devtools_protogen::runtime as rt;

pub type Sample = f64;

/// Blocking handle for `Lab.start`.
pub struct StartCommand {
    latch: rt::Latch,
    err: Mutex<Option<rt::ProtocolError>>,
}

impl StartCommand {
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
            return Err(rt::ProtocolError::timeout("Lab.start", timeout));
        }
        match self.err.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl rt::Command for StartCommand {
    fn name(&self) -> &'static str {
        "Lab.start"
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

pub fn start(transport: &dyn rt::Transport) -> Result<(), rt::ProtocolError> {
    let command = StartCommand::new();
    command.run(transport)?;
    Ok(())
}

/// Completion callback for `Lab.start`.
pub type StartCallback = Box<dyn FnOnce(Result<(), rt::ProtocolError>) + Send>;

/// Callback handle for `Lab.start`.
pub struct AsyncStartCommand {
    callback: Mutex<Option<StartCallback>>,
}

impl AsyncStartCommand {
    pub fn new(callback: Option<StartCallback>) -> Arc<Self> {
        Arc::new(Self {
            callback: Mutex::new(callback),
        })
    }

    /// Submits the command without waiting for the response.
    pub fn submit(self: &Arc<Self>, transport: &dyn rt::Transport) {
        transport.submit(Arc::clone(self) as Arc<dyn rt::Command>);
    }
}

impl rt::Command for AsyncStartCommand {
    fn name(&self) -> &'static str {
        "Lab.start"
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
                    warn!(method = "Lab.start", error = %err, "Command failed without callback");
                }
            }
        }
    }
}
