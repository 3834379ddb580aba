//! Protocol schema model.
//!
//! # Layers
//!
//! | Module | Description |
//! |--------|-------------|
//! | `raw` | serde mirror of the JSON document |
//! | `model` | closed model the compiler works on |
//! | `load` | file loading and multi-file merging |

// ============================================================================
// Submodules
// ============================================================================

/// Schema loading and merging.
pub mod load;

/// Closed schema model.
pub mod model;

/// JSON document structs.
pub mod raw;

// ============================================================================
// Re-exports
// ============================================================================

pub use load::{load_schema, merge_schemas, parse_schema};
pub use model::{Command, Domain, Event, Primitive, Property, Schema, Shape, TypeDecl, Version};
