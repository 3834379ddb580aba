//! Error types for the protocol schema compiler.
//!
//! Every error raised while compiling a schema is fatal: the run aborts,
//! files already written for earlier domains stay on disk, and nothing is
//! retried.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use devtools_protogen::{Compiler, Result};
//!
//! fn example() -> Result<()> {
//!     let compiler = Compiler::builder().output_dir("out").build()?;
//!     compiler.compile_files(&["protocol.json"])?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Schema | [`Error::SchemaRead`], [`Error::SchemaParse`], [`Error::UnresolvedReference`] |
//! | Unsupported shape | [`Error::UnsupportedShape`] |
//! | I/O | [`Error::Write`], [`Error::Io`] |
//! | Formatter | [`Error::FormatterFailed`] |
//! | External | [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant carries the domain, declaration or file needed to locate
/// the failure.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when compiler configuration is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Schema Errors
    // ========================================================================
    /// Schema file could not be read.
    #[error("Failed to read schema {path}: {source}")]
    SchemaRead {
        /// Path of the schema file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: IoError,
    },

    /// Schema file is not a well-formed protocol description.
    #[error("Failed to parse schema {path}: {source}")]
    SchemaParse {
        /// Path of the schema file.
        path: PathBuf,
        /// Underlying JSON failure.
        source: serde_json::Error,
    },

    /// A type reference names no declaration anywhere in the schema.
    #[error("Unresolved reference '{reference}' in {domain}.{declaration}")]
    UnresolvedReference {
        /// Domain containing the reference.
        domain: String,
        /// Declaration containing the reference.
        declaration: String,
        /// The reference as written in the schema.
        reference: String,
    },

    // ========================================================================
    // Shape Errors
    // ========================================================================
    /// A type expression whose kind is not recognized.
    #[error("Unsupported type shape '{kind}' in {context}")]
    UnsupportedShape {
        /// Location of the expression (`Domain.declaration.property`).
        context: String,
        /// The offending kind, or a description of what is missing.
        kind: String,
    },

    // ========================================================================
    // Output Errors
    // ========================================================================
    /// Creating a directory or writing a generated file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: IoError,
    },

    /// The external formatter ran and reported failure.
    #[error("Formatter '{program}' failed on {path}: {status}")]
    FormatterFailed {
        /// Formatter executable.
        program: String,
        /// File being formatted.
        path: PathBuf,
        /// Exit status of the formatter process.
        status: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a schema read error.
    #[inline]
    pub fn schema_read(path: impl Into<PathBuf>, source: IoError) -> Self {
        Self::SchemaRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a schema parse error.
    #[inline]
    pub fn schema_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SchemaParse {
            path: path.into(),
            source,
        }
    }

    /// Creates an unresolved reference error.
    #[inline]
    pub fn unresolved_reference(
        domain: impl Into<String>,
        declaration: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self::UnresolvedReference {
            domain: domain.into(),
            declaration: declaration.into(),
            reference: reference.into(),
        }
    }

    /// Creates an unsupported shape error.
    #[inline]
    pub fn unsupported_shape(context: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            context: context.into(),
            kind: kind.into(),
        }
    }

    /// Creates a write error.
    #[inline]
    pub fn write(path: impl Into<PathBuf>, source: IoError) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a formatter failure error.
    #[inline]
    pub fn formatter_failed(
        program: impl Into<String>,
        path: impl Into<PathBuf>,
        status: ExitStatus,
    ) -> Self {
        Self::FormatterFailed {
            program: program.into(),
            path: path.into(),
            status: status.to_string(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if the schema input is malformed or inconsistent.
    #[inline]
    #[must_use]
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::SchemaRead { .. }
                | Self::SchemaParse { .. }
                | Self::UnresolvedReference { .. }
                | Self::UnsupportedShape { .. }
        )
    }

    /// Returns `true` if this is a file-system error.
    #[inline]
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::Io(_))
    }

    /// Returns `true` if the external formatter failed.
    #[inline]
    #[must_use]
    pub fn is_formatter_error(&self) -> bool {
        matches!(self, Self::FormatterFailed { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
