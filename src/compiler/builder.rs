//! Builder pattern for compiler configuration.
//!
//! Provides a fluent API for configuring and creating [`Compiler`] instances.
//!
//! # Example
//!
//! ```no_run
//! use devtools_protogen::Compiler;
//!
//! # fn example() -> devtools_protogen::Result<()> {
//! let compiler = Compiler::builder()
//!     .output_dir("src/bindings")
//!     .include_experimental(false)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::path::PathBuf;

use crate::error::{Error, Result};

use super::core::Compiler;
use super::options::{CompilerOptions, FormatterOptions};

// ============================================================================
// CompilerBuilder
// ============================================================================

/// Builder for configuring a [`Compiler`] instance.
///
/// Use [`Compiler::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct CompilerBuilder {
    /// Root directory version directories are created in.
    output_dir: Option<PathBuf>,
    /// Emission settings.
    options: CompilerOptions,
}

// ============================================================================
// CompilerBuilder Implementation
// ============================================================================

impl CompilerBuilder {
    /// Creates a new builder with default options and no output directory.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root output directory.
    #[inline]
    #[must_use]
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Sets whether experimental domains and declarations are emitted.
    #[inline]
    #[must_use]
    pub fn include_experimental(mut self, include: bool) -> Self {
        self.options.include_experimental = include;
        self
    }

    /// Sets the module path generated files import the runtime from.
    #[inline]
    #[must_use]
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.options.runtime_path = path.into();
        self
    }

    /// Sets the formatter run on every written file.
    #[inline]
    #[must_use]
    pub fn formatter(mut self, formatter: FormatterOptions) -> Self {
        self.options.formatter = Some(formatter);
        self
    }

    /// Disables formatting.
    #[inline]
    #[must_use]
    pub fn no_formatter(mut self) -> Self {
        self.options.formatter = None;
        self
    }

    /// Replaces all options at once.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: CompilerOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the compiler with validation.
    ///
    /// Locates the formatter; a missing formatter is logged, not an error.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the output directory is not set
    /// - [`Error::Config`] if the options are invalid
    pub fn build(self) -> Result<Compiler> {
        let output_dir = self.validate_output_dir()?;
        self.options.validate().map_err(Error::config)?;

        Ok(Compiler::new(output_dir, self.options))
    }
}

// ============================================================================
// Validation
// ============================================================================

impl CompilerBuilder {
    /// Validates the output directory configuration.
    fn validate_output_dir(&self) -> Result<PathBuf> {
        let output_dir = self.output_dir.clone().ok_or_else(|| {
            Error::config(
                "Output directory is required. Use .output_dir() to set it.\n\
                 Example: Compiler::builder().output_dir(\"src/bindings\")",
            )
        })?;

        if output_dir.as_os_str().is_empty() {
            return Err(Error::config("Output directory must not be empty"));
        }

        if output_dir.is_file() {
            return Err(Error::config(format!(
                "Output path is a file: {}",
                output_dir.display()
            )));
        }

        Ok(output_dir)
    }
}

// ============================================================================
// Tests
// ============================================================================
