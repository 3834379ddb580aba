//! Compiler and formatter configuration.
//!
//! # Example
//!
//! ```ignore
//! use devtools_protogen::{CompilerOptions, FormatterOptions};
//!
//! let options = CompilerOptions::new()
//!     .with_experimental(false)
//!     .with_runtime_path("crate::rt")
//!     .with_formatter(FormatterOptions::new("rustfmt").with_arg("--edition").with_arg("2024"));
//! ```

// ============================================================================
// Constants
// ============================================================================

/// Module generated files import as `rt` unless configured otherwise.
pub const DEFAULT_RUNTIME_PATH: &str = "devtools_protogen::runtime";

/// Formatter run on every written file unless configured otherwise.
pub const DEFAULT_FORMATTER: &str = "rustfmt";

// ============================================================================
// FormatterOptions
// ============================================================================

/// External source formatter invocation.
///
/// The file path is appended after `args`, so a formatter that rewrites
/// in place behind a flag is configured as `args = ["-w"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Executable name or path.
    pub program: String,

    /// Arguments placed before the file path.
    pub args: Vec<String>,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_FORMATTER.to_string(),
            args: vec!["--edition".to_string(), "2021".to_string()],
        }
    }
}

impl FormatterOptions {
    /// Creates options for `program` with no arguments.
    #[inline]
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Adds an argument.
    #[inline]
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments.
    #[inline]
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

// ============================================================================
// CompilerOptions
// ============================================================================

/// Settings that change what the compiler emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Emit domains and declarations marked experimental.
    pub include_experimental: bool,

    /// Path generated files import the runtime support module from.
    pub runtime_path: String,

    /// Formatter run after each file is written; `None` disables formatting.
    pub formatter: Option<FormatterOptions>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerOptions {
    /// Creates options with default settings.
    ///
    /// Experimental declarations are included and files are formatted with
    /// `rustfmt`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_experimental: true,
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            formatter: Some(FormatterOptions::default()),
        }
    }

    /// Sets whether experimental declarations are emitted.
    #[inline]
    #[must_use]
    pub fn with_experimental(mut self, include: bool) -> Self {
        self.include_experimental = include;
        self
    }

    /// Sets the runtime module path.
    #[inline]
    #[must_use]
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Sets the formatter.
    #[inline]
    #[must_use]
    pub fn with_formatter(mut self, formatter: FormatterOptions) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Disables formatting.
    #[inline]
    #[must_use]
    pub fn without_formatter(mut self) -> Self {
        self.formatter = None;
        self
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.runtime_path.trim().is_empty() {
            return Err("Runtime path must not be empty".to_string());
        }
        if let Some(formatter) = &self.formatter
            && formatter.program.trim().is_empty()
        {
            return Err("Formatter program must not be empty".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
