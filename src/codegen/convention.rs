//! Blocking and callback call conventions for commands.
//!
//! Both conventions render from the same [`CommandShape`], so they always
//! agree on the parameter record, the result record and the wire method.
//!
//! # Generated API
//!
//! | Item | Blocking | Callback |
//! |------|----------|----------|
//! | handle | `NCommand` | `AsyncNCommand` |
//! | constructor | `new(params) -> Arc<Self>` | `new(params, Option<NCallback>) -> Arc<Self>` |
//! | invocation | `run(&transport)`, `run_timeout(&transport, timeout)` | `submit(&transport)` |
//! | completion | decode into result slot, release latch | decode, hand outcome to callback |

// ============================================================================
// Imports
// ============================================================================

use super::capability::{Capabilities, Capability};
use super::naming::fn_ident;
use super::record::Record;
use super::writer::{CodeWriter, string_literal};

// ============================================================================
// CommandShape
// ============================================================================

/// Everything both conventions need to know about one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandShape {
    /// Exported identifier, domain-qualified when needed.
    pub ident: String,
    /// Wire method, `Domain.command`.
    pub method: String,
    pub description: Option<String>,
    pub experimental: bool,
    /// Present iff the command declares parameters.
    pub params: Option<Record>,
    /// Present iff the command declares return values.
    pub result: Option<Record>,
}

impl CommandShape {
    /// Returns the parameters record identifier, if any.
    #[must_use]
    pub fn params_ident(&self) -> Option<&str> {
        self.params.as_ref().map(|r| r.ident.as_str())
    }

    /// Returns the decoded outcome type of a successful call.
    #[must_use]
    pub fn result_ty(&self) -> &str {
        self.result.as_ref().map_or("()", |r| r.ident.as_str())
    }

    /// Returns the blocking handle identifier.
    #[must_use]
    pub fn blocking_ident(&self) -> String {
        format!("{}Command", self.ident)
    }

    /// Returns the callback handle identifier.
    #[must_use]
    pub fn callback_handle_ident(&self) -> String {
        format!("Async{}Command", self.ident)
    }

    /// Returns the callback type alias identifier.
    #[must_use]
    pub fn callback_ident(&self) -> String {
        format!("{}Callback", self.ident)
    }

    /// Returns the `params` field declaration, if any.
    fn params_field(&self) -> Option<String> {
        self.params_ident().map(|p| format!("params: {p},"))
    }

    /// Returns the constructor parameter list prefix, e.g. `params: NParams`.
    fn params_arg(&self) -> Option<String> {
        self.params_ident().map(|p| format!("params: {p}"))
    }
}

// ============================================================================
// CallConvention
// ============================================================================

/// One way of invoking a command from generated code.
pub trait CallConvention {
    /// Renders the handle type and its impls.
    fn render(&self, shape: &CommandShape, w: &mut CodeWriter, caps: &mut Capabilities);
}

/// Caller blocks until the response is decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blocking;

/// Caller returns immediately; a callback receives the decoded outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct Callback;

/// Both conventions, in render order.
pub const CONVENTIONS: &[&dyn CallConvention] = &[&Blocking, &Callback];

// ============================================================================
// Shared Rendering
// ============================================================================

/// Renders the two identity operations of `rt::Command`.
fn render_identity(shape: &CommandShape, w: &mut CodeWriter) {
    w.block("fn name(&self) -> &'static str", "", |w| {
        w.line(string_literal(&shape.method));
    });
    w.blank();
    w.block(
        "fn params(&self) -> Result<Option<Box<RawValue>>, rt::ProtocolError>",
        "",
        |w| {
            if shape.params.is_some() {
                w.line("rt::encode(&self.params).map(Some)");
            } else {
                w.line("Ok(None)");
            }
        },
    );
}

/// Renders the expression decoding `response` into the call outcome.
fn outcome_expr(shape: &CommandShape) -> String {
    match &shape.result {
        Some(result) => format!("response.and_then(rt::decode::<{}>)", result.ident),
        None => "response.map(|_| ())".to_string(),
    }
}

// ============================================================================
// Blocking
// ============================================================================

impl CallConvention for Blocking {
    fn render(&self, shape: &CommandShape, w: &mut CodeWriter, caps: &mut Capabilities) {
        caps.require_all([
            Capability::Shared,
            Capability::Sync,
            Capability::RawValue,
            Capability::Runtime,
        ]);

        let handle = shape.blocking_ident();

        // Handle type.
        w.line(format!("/// Blocking handle for `{}`.", shape.method));
        w.block(format!("pub struct {handle}"), "", |w| {
            if let Some(field) = shape.params_field() {
                w.line(field);
            }
            if let Some(result) = &shape.result {
                w.line(format!("result: Mutex<Option<{}>>,", result.ident));
            }
            w.line("latch: rt::Latch,");
            w.line("err: Mutex<Option<rt::ProtocolError>>,");
        });
        w.blank();

        // Inherent impl.
        w.block(format!("impl {handle}"), "", |w| {
            w.block(
                format!(
                    "pub fn new({}) -> Arc<Self>",
                    shape.params_arg().unwrap_or_default()
                ),
                "",
                |w| {
                    w.block("Arc::new(Self", ")", |w| {
                        if shape.params.is_some() {
                            w.line("params,");
                        }
                        if shape.result.is_some() {
                            w.line("result: Mutex::new(None),");
                        }
                        w.line("latch: rt::Latch::new(),");
                        w.line("err: Mutex::new(None),");
                    });
                },
            );
            w.blank();
            w.line("/// Submits the command and blocks until the response is decoded.");
            w.line("///");
            w.line("/// Gives up after [`rt::DEFAULT_COMMAND_TIMEOUT`].");
            w.block(
                "pub fn run(self: &Arc<Self>, transport: &dyn rt::Transport) -> Result<(), rt::ProtocolError>",
                "",
                |w| w.line("self.run_timeout(transport, rt::DEFAULT_COMMAND_TIMEOUT)"),
            );
            w.blank();
            w.line("/// Like `run`, but abandons the command after `timeout`.");
            w.block(
                "pub fn run_timeout(self: &Arc<Self>, transport: &dyn rt::Transport, timeout: ::std::time::Duration) -> Result<(), rt::ProtocolError>",
                "",
                |w| {
                    w.line("let command = Arc::clone(self) as Arc<dyn rt::Command>;");
                    w.line("transport.submit(Arc::clone(&command));");
                    w.block("if !self.latch.wait_timeout(timeout)", "", |w| {
                        w.line("transport.cancel(&command);");
                        w.line(format!(
                            "return Err(rt::ProtocolError::timeout({}, timeout));",
                            string_literal(&shape.method)
                        ));
                    });
                    w.block("match self.err.lock().take()", "", |w| {
                        w.line("Some(err) => Err(err),");
                        w.line("None => Ok(()),");
                    });
                },
            );
            if let Some(result) = &shape.result {
                w.blank();
                w.line("/// Returns the decoded result of a completed run.");
                w.block(
                    format!("pub fn result(&self) -> Option<{}>", result.ident),
                    "",
                    |w| w.line("self.result.lock().clone()"),
                );
                w.blank();
                w.block(
                    format!("pub fn take_result(&self) -> Option<{}>", result.ident),
                    "",
                    |w| w.line("self.result.lock().take()"),
                );
            }
        });
        w.blank();

        // Command impl.
        w.block(format!("impl rt::Command for {handle}"), "", |w| {
            render_identity(shape, w);
            w.blank();
            w.block(
                "fn done(&self, response: Result<&RawValue, rt::ProtocolError>)",
                "",
                |w| {
                    w.block(format!("match {}", outcome_expr(shape)), "", |w| {
                        if shape.result.is_some() {
                            w.line("Ok(result) => *self.result.lock() = Some(result),");
                        } else {
                            w.line("Ok(()) => {}");
                        }
                        w.line("Err(err) => *self.err.lock() = Some(err),");
                    });
                    w.line("self.latch.release();");
                },
            );
        });
        w.blank();

        // Convenience function.
        let function = fn_ident(&shape.ident);
        let args = match shape.params_arg() {
            Some(params) => format!("{params}, transport: &dyn rt::Transport"),
            None => "transport: &dyn rt::Transport".to_string(),
        };
        let ctor = if shape.params.is_some() { "new(params)" } else { "new()" };

        w.doc(shape.description.as_deref(), shape.experimental);
        w.block(
            format!(
                "pub fn {function}({args}) -> Result<{}, rt::ProtocolError>",
                shape.result_ty()
            ),
            "",
            |w| {
                w.line(format!("let command = {handle}::{ctor};"));
                w.line("command.run(transport)?;");
                if shape.result.is_some() {
                    w.line("command.take_result().ok_or(rt::ProtocolError::MissingResult)");
                } else {
                    w.line("Ok(())");
                }
            },
        );
        w.blank();
    }
}

// ============================================================================
// Callback
// ============================================================================

impl CallConvention for Callback {
    fn render(&self, shape: &CommandShape, w: &mut CodeWriter, caps: &mut Capabilities) {
        caps.require_all([
            Capability::Shared,
            Capability::Sync,
            Capability::RawValue,
            Capability::Runtime,
            Capability::Logging,
        ]);

        let handle = shape.callback_handle_ident();
        let callback = shape.callback_ident();

        // Callback alias.
        w.line(format!("/// Completion callback for `{}`.", shape.method));
        w.line(format!(
            "pub type {callback} = Box<dyn FnOnce(Result<{}, rt::ProtocolError>) + Send>;",
            shape.result_ty()
        ));
        w.blank();

        // Handle type.
        w.line(format!("/// Callback handle for `{}`.", shape.method));
        w.block(format!("pub struct {handle}"), "", |w| {
            if let Some(field) = shape.params_field() {
                w.line(field);
            }
            w.line(format!("callback: Mutex<Option<{callback}>>,"));
        });
        w.blank();

        // Inherent impl.
        w.block(format!("impl {handle}"), "", |w| {
            let args = match shape.params_arg() {
                Some(params) => format!("{params}, callback: Option<{callback}>"),
                None => format!("callback: Option<{callback}>"),
            };
            w.block(format!("pub fn new({args}) -> Arc<Self>"), "", |w| {
                w.block("Arc::new(Self", ")", |w| {
                    if shape.params.is_some() {
                        w.line("params,");
                    }
                    w.line("callback: Mutex::new(callback),");
                });
            });
            w.blank();
            w.line("/// Submits the command without waiting for the response.");
            w.block(
                "pub fn submit(self: &Arc<Self>, transport: &dyn rt::Transport)",
                "",
                |w| w.line("transport.submit(Arc::clone(self) as Arc<dyn rt::Command>);"),
            );
        });
        w.blank();

        // Command impl.
        w.block(format!("impl rt::Command for {handle}"), "", |w| {
            render_identity(shape, w);
            w.blank();
            w.block(
                "fn done(&self, response: Result<&RawValue, rt::ProtocolError>)",
                "",
                |w| {
                    w.line(format!("let outcome = {};", outcome_expr(shape)));
                    w.line("let callback = self.callback.lock().take();");
                    w.block("match callback", "", |w| {
                        w.line("Some(callback) => callback(outcome),");
                        w.block("None =>", "", |w| {
                            w.block("if let Err(err) = outcome", "", |w| {
                                w.line(format!(
                                    "warn!(method = {}, error = %err, \"Command failed without callback\");",
                                    string_literal(&shape.method)
                                ));
                            });
                        });
                    });
                },
            );
        });
        w.blank();
    }
}

// ============================================================================
// Tests
// ============================================================================
