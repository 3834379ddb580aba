//! Auxiliary capabilities a generated file depends on.
//!
//! Emission records a capability whenever a rendered declaration needs an
//! import; the file writer renders the collected set once, in a fixed
//! order, at the top of the file.

// ============================================================================
// Imports
// ============================================================================

use std::collections::BTreeSet;

// ============================================================================
// Capability
// ============================================================================

/// One import-level requirement of a generated file.
///
/// Variant order is the order imports are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// `Cow` for enumeration newtypes.
    Cow,
    /// `HashMap` for untyped objects.
    StringMap,
    /// `Arc` handles for command conventions.
    Shared,
    /// `Mutex` slots for command conventions.
    Sync,
    /// serde derives.
    Serde,
    /// Verbatim encoded payloads (`any` values, command and event payloads).
    RawValue,
    /// `warn!` for dropped payloads and unhandled errors.
    Logging,
    /// The runtime support module, imported as `rt`.
    Runtime,
}

impl Capability {
    /// Renders the `use` declaration for this capability.
    ///
    /// Crate paths are absolute so a domain module named like a crate
    /// (`tracing`, `serde`) cannot shadow them through `use super::*`.
    #[must_use]
    pub fn import(self, runtime_path: &str) -> String {
        match self {
            Self::Cow => "use ::std::borrow::Cow;".to_string(),
            Self::StringMap => "use ::std::collections::HashMap;".to_string(),
            Self::Shared => "use ::std::sync::Arc;".to_string(),
            Self::Sync => "use ::parking_lot::Mutex;".to_string(),
            Self::Serde => "use ::serde::{Deserialize, Serialize};".to_string(),
            Self::RawValue => "use ::serde_json::value::RawValue;".to_string(),
            Self::Logging => "use ::tracing::warn;".to_string(),
            Self::Runtime => format!("use {runtime_path} as rt;"),
        }
    }
}

// ============================================================================
// Capabilities
// ============================================================================

/// Deduplicated, ordered set of capabilities for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities(BTreeSet<Capability>);

impl Capabilities {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a capability.
    #[inline]
    pub fn require(&mut self, capability: Capability) {
        self.0.insert(capability);
    }

    /// Records several capabilities.
    pub fn require_all(&mut self, capabilities: impl IntoIterator<Item = Capability>) {
        self.0.extend(capabilities);
    }

    /// Returns `true` if the capability was recorded.
    #[inline]
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in render order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }

    /// Renders one `use` line per capability.
    #[must_use]
    pub fn imports(&self, runtime_path: &str) -> Vec<String> {
        self.iter().map(|c| c.import(runtime_path)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
