//! Compilation driver and configuration.
//!
//! # Example
//!
//! ```no_run
//! use devtools_protogen::{Compiler, FormatterOptions};
//!
//! # fn example() -> devtools_protogen::Result<()> {
//! let compiler = Compiler::builder()
//!     .output_dir("src/bindings")
//!     .formatter(FormatterOptions::new("rustfmt").with_args(["--edition", "2024"]))
//!     .build()?;
//!
//! compiler.compile_files(&["browser_protocol.json"])?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Builder pattern for compiler configuration.
pub mod builder;

/// Core compiler implementation.
pub mod core;

/// Compiler and formatter options.
pub mod options;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CompilerBuilder;
pub use core::{CompileReport, Compiler, VersionReport};
pub use options::{CompilerOptions, DEFAULT_RUNTIME_PATH, FormatterOptions};
