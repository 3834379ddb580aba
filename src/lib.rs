//! devtools-protogen - Protocol schema compiler for remote-debugging bindings.
//!
//! This library reads the JSON description of a remote-debugging wire
//! protocol (domains of types, commands and events) and emits one Rust
//! module per domain with typed records, blocking and callback command
//! handles, and event registration helpers.
//!
//! # Architecture
//!
//! The compiler is a single synchronous pass:
//!
//! - **Schema**: JSON is decoded and converted into a closed model
//! - **Resolve**: one [`NameTable`] is built over every domain of a version
//! - **Emit**: each domain is rendered against that table, in schema order
//! - **Write**: each domain file is written, formatted, then the index
//!
//! Key design principles:
//!
//! - Whether a name in one domain must be domain-qualified depends on every
//!   other domain, so resolution finishes before emission starts
//! - The name table is immutable once built and passed by reference
//! - Every failure is fatal; there is no partial recovery
//!
//! # Quick Start
//!
//! ```no_run
//! use devtools_protogen::{Compiler, Result};
//!
//! fn main() -> Result<()> {
//!     let compiler = Compiler::builder()
//!         .output_dir("src/bindings")
//!         .include_experimental(false)
//!         .build()?;
//!
//!     let report = compiler.compile_files(&["browser_protocol.json", "js_protocol.json"])?;
//!     println!("{} files written", report.file_count());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`schema`] | Schema document model and loading |
//! | [`resolve`] | Cross-domain name table |
//! | [`codegen`] | Rust source generation |
//! | [`output`] | File writing and formatting |
//! | [`compiler`] | Driver and configuration |
//! | [`runtime`] | Support code generated bindings import |
//! | [`error`] | Error types and [`Result`] alias |

// ============================================================================
// Modules
// ============================================================================

/// Rust source generation.
///
/// [`codegen::Emitter`] renders one domain into module body text.
pub mod codegen;

/// Compilation driver and configuration.
///
/// Use [`Compiler::builder()`] to create a configured compiler.
pub mod compiler;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Output files and external formatter.
pub mod output;

/// Cross-domain name resolution.
pub mod resolve;

/// Support code imported by generated bindings.
///
/// Provides the [`runtime::Transport`] seam and a socket-agnostic
/// [`runtime::Dispatcher`].
pub mod runtime;

/// Protocol schema model.
pub mod schema;

// ============================================================================
// Re-exports
// ============================================================================

// Compiler types
pub use compiler::{
    CompileReport, Compiler, CompilerBuilder, CompilerOptions, FormatterOptions, VersionReport,
};

// Error types
pub use error::{Error, Result};

// Resolution
pub use resolve::NameTable;

// Schema types
pub use schema::{Domain, Schema, Version, load_schema, parse_schema};
