//! Output files and post-processing.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `writer` | Domain files and the version index |
//! | `formatter` | External formatter discovery and invocation |

// ============================================================================
// Submodules
// ============================================================================

/// External formatter.
pub mod formatter;

/// File writer.
pub mod writer;

// ============================================================================
// Re-exports
// ============================================================================

pub use formatter::Formatter;
pub use writer::{FileWriter, INDEX_FILE, IndexEntry};
