//! Schema loading and merging.
//!
//! A run may be fed several schema files (the browser and JavaScript halves
//! of a protocol are usually published separately). Files are grouped by
//! version tag; within one version the first file to define a domain wins.

// ============================================================================
// Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::model::{Schema, Version};
use super::raw::RawProtocol;

// ============================================================================
// Loading
// ============================================================================

/// Reads and converts one schema file.
///
/// # Errors
///
/// - [`Error::SchemaRead`] if the file cannot be read
/// - [`Error::SchemaParse`] if it is not a protocol document
/// - [`Error::UnsupportedShape`] if a type expression has an unknown kind
pub fn load_schema(path: &Path) -> Result<Schema> {
    debug!(path = %path.display(), "Loading schema");

    let content = fs::read_to_string(path).map_err(|e| Error::schema_read(path, e))?;
    let raw: RawProtocol =
        serde_json::from_str(&content).map_err(|e| Error::schema_parse(path, e))?;

    Schema::try_from(raw)
}

/// Parses a schema from an in-memory JSON document.
///
/// # Errors
///
/// - [`Error::Json`] if the text is not a protocol document
/// - [`Error::UnsupportedShape`] if a type expression has an unknown kind
pub fn parse_schema(json: &str) -> Result<Schema> {
    let raw: RawProtocol = serde_json::from_str(json)?;
    Schema::try_from(raw)
}

// ============================================================================
// Merging
// ============================================================================

/// Groups schemas by version tag and drops duplicate domains.
///
/// Versions come out in sorted order; domains keep first-seen order.
#[must_use]
pub fn merge_schemas(schemas: impl IntoIterator<Item = Schema>) -> Vec<Schema> {
    let mut by_version: BTreeMap<Version, (Schema, FxHashSet<String>)> = BTreeMap::new();

    for schema in schemas {
        let (merged, seen) = by_version
            .entry(schema.version.clone())
            .or_insert_with(|| {
                (
                    Schema {
                        version: schema.version.clone(),
                        domains: Vec::new(),
                    },
                    FxHashSet::default(),
                )
            });

        for domain in schema.domains {
            if !seen.insert(domain.name.clone()) {
                warn!(
                    version = %merged.version.tag(),
                    domain = %domain.name,
                    "Domain is already defined, skipping"
                );
                continue;
            }
            merged.domains.push(domain);
        }
    }

    by_version.into_values().map(|(schema, _)| schema).collect()
}

// ============================================================================
// Tests
// ============================================================================
