//! Wire-level schema document as published by the protocol.
//!
//! These structs mirror the JSON description one-to-one and are only used
//! as the deserialization target; [`super::model`] converts them into the
//! closed shape model the compiler works on.
//!
//! # Format
//!
//! ```json
//! {
//!   "version": { "major": "1", "minor": "2" },
//!   "domains": [
//!     {
//!       "domain": "DOM",
//!       "types": [ { "id": "NodeId", "type": "integer" } ],
//!       "commands": [ { "name": "getDocument", "returns": [ ... ] } ],
//!       "events": [ { "name": "documentUpdated" } ]
//!     }
//!   ]
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// Protocol
// ============================================================================

/// Top-level schema document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProtocol {
    /// Protocol version tag.
    pub version: RawVersion,

    /// Domains in declaration order.
    #[serde(default)]
    pub domains: Vec<RawDomain>,
}

/// Protocol version tag.
///
/// Published schemas spell the components as strings, older snapshots as
/// numbers; both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVersion {
    /// Major version component.
    #[serde(deserialize_with = "string_or_number")]
    pub major: String,

    /// Minor version component.
    #[serde(deserialize_with = "string_or_number")]
    pub minor: String,
}

// ============================================================================
// Domain
// ============================================================================

/// One protocol domain.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDomain {
    /// Domain name, e.g. `DOM`.
    pub domain: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub experimental: bool,

    #[serde(default)]
    pub types: Vec<RawTypeDecl>,

    #[serde(default)]
    pub commands: Vec<RawCommand>,

    #[serde(default)]
    pub events: Vec<RawEvent>,
}

// ============================================================================
// Declarations
// ============================================================================

/// A named type declaration (`types[]` entry).
#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeDecl {
    /// Declared type name.
    pub id: String,

    #[serde(default)]
    pub experimental: bool,

    /// Shape of the type.
    #[serde(flatten)]
    pub ty: RawTypeExpr,
}

/// A command declaration (`commands[]` entry).
#[derive(Debug, Clone, Deserialize)]
pub struct RawCommand {
    /// Command name, e.g. `getDocument`.
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub experimental: bool,

    #[serde(default)]
    pub parameters: Vec<RawProperty>,

    #[serde(default)]
    pub returns: Vec<RawProperty>,
}

/// An event declaration (`events[]` entry).
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    /// Event name, e.g. `documentUpdated`.
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub experimental: bool,

    #[serde(default)]
    pub parameters: Vec<RawProperty>,
}

/// A named, possibly optional, member: property, parameter, return value or
/// event field.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProperty {
    /// Wire name of the member.
    pub name: String,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub experimental: bool,

    /// Shape of the member.
    #[serde(flatten)]
    pub ty: RawTypeExpr,
}

// ============================================================================
// Type Expression
// ============================================================================

/// Untyped type expression as it appears in the document.
///
/// Exactly one of `type` or `$ref` is expected; everything else refines
/// the `type` kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTypeExpr {
    /// Primitive or structural kind (`string`, `array`, `object`, ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Reference to another declaration, `Name` or `Domain.Name`.
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Element type of an `array`.
    #[serde(default)]
    pub items: Option<Box<RawTypeExpr>>,

    /// Closed set of literals layered on `string`.
    #[serde(rename = "enum", default)]
    pub enum_values: Option<Vec<String>>,

    /// Members of an `object`.
    #[serde(default)]
    pub properties: Option<Vec<RawProperty>>,
}

// ============================================================================
// Helpers
// ============================================================================

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number version component, found {other}"
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================
