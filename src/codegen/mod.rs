//! Rust source generation.
//!
//! Turns one domain of the schema model into the body text of one Rust
//! module, consulting the shared [`crate::resolve::NameTable`] for every
//! identifier that crosses a domain boundary.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `emit` | Per-domain fold over types, commands and events |
//! | `types` | Type expression mapping |
//! | `record` | serde struct rendering |
//! | `convention` | Blocking and callback command handles |
//! | `capability` | Per-file import requirements |
//! | `naming` | Identifier spelling |
//! | `writer` | Indentation-aware text buffer |

// ============================================================================
// Submodules
// ============================================================================

/// Import requirements collected during emission.
pub mod capability;

/// Command call conventions.
pub mod convention;

/// Domain emission.
pub mod emit;

/// Identifier spelling.
pub mod naming;

/// Record rendering.
pub mod record;

/// Type expression mapping.
pub mod types;

/// Source text buffer.
pub mod writer;

// ============================================================================
// Re-exports
// ============================================================================

pub use capability::{Capabilities, Capability};
pub use convention::{Blocking, CallConvention, Callback, CommandShape};
pub use emit::{DomainUnit, EmitStats, Emitter};
pub use types::{MappedType, TypeMapper};
pub use writer::CodeWriter;
