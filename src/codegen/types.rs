//! Schema type expression → Rust type expression.
//!
//! # Mapping
//!
//! | Schema | Rust |
//! |--------|------|
//! | `number` | `f64` |
//! | `integer` | `i64` |
//! | `boolean` | `bool` |
//! | `string`, inline `enum` | `String` |
//! | `any` | `Box<RawValue>` |
//! | `object`, inline object | `HashMap<String, String>` |
//! | `array` of `T` | `Vec<T>` |
//! | reference to a value type | `Ident` |
//! | reference to a record | `Box<Ident>` |
//!
//! `Ident` is domain-qualified when its spelling is declared more than once
//! anywhere in the schema.

// ============================================================================
// Imports
// ============================================================================

use crate::error::{Error, Result};
use crate::resolve::NameTable;
use crate::schema::{Primitive, Shape};

use super::capability::{Capabilities, Capability};

// ============================================================================
// MappedType
// ============================================================================

/// Result of mapping one type expression.
///
/// Record references are already in their boxed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// Rust type expression.
    pub ty: String,
}

impl MappedType {
    #[inline]
    fn value(ty: impl Into<String>) -> Self {
        Self { ty: ty.into() }
    }

    /// Wraps the type in `Option` for omittable members.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::value(format!("Option<{}>", self.ty))
    }
}

// ============================================================================
// TypeMapper
// ============================================================================

/// Maps type expressions in the context of one domain.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    table: &'a NameTable,
    domain: &'a str,
}

impl<'a> TypeMapper<'a> {
    /// Creates a mapper for declarations of `domain`.
    #[inline]
    #[must_use]
    pub fn new(table: &'a NameTable, domain: &'a str) -> Self {
        Self { table, domain }
    }

    /// Returns the domain this mapper resolves unqualified references in.
    #[inline]
    #[must_use]
    pub fn domain(&self) -> &'a str {
        self.domain
    }

    /// Returns the name table.
    #[inline]
    #[must_use]
    pub fn table(&self) -> &'a NameTable {
        self.table
    }

    /// Maps `shape`, recording imports it needs in `caps`.
    ///
    /// `declaration` names the enclosing declaration for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedReference`] if a reference names no
    /// declared type.
    pub fn map(&self, shape: &Shape, declaration: &str, caps: &mut Capabilities) -> Result<MappedType> {
        match shape {
            Shape::Primitive(primitive) => Ok(self.map_primitive(*primitive, caps)),
            Shape::Enum(_) => Ok(MappedType::value("String")),
            Shape::Composite(_) => {
                caps.require(Capability::StringMap);
                Ok(MappedType::value("HashMap<String, String>"))
            }
            Shape::Array(items) => {
                let item = self.map(items, declaration, caps)?;
                Ok(MappedType::value(format!("Vec<{}>", item.ty)))
            }
            Shape::Reference(reference) => self.map_reference(reference, declaration),
        }
    }

    fn map_primitive(&self, primitive: Primitive, caps: &mut Capabilities) -> MappedType {
        match primitive {
            Primitive::Number => MappedType::value("f64"),
            Primitive::Integer => MappedType::value("i64"),
            Primitive::Boolean => MappedType::value("bool"),
            Primitive::String => MappedType::value("String"),
            Primitive::Any => {
                caps.require(Capability::RawValue);
                MappedType::value("Box<RawValue>")
            }
            Primitive::Object => {
                caps.require(Capability::StringMap);
                MappedType::value("HashMap<String, String>")
            }
        }
    }

    fn map_reference(&self, reference: &str, declaration: &str) -> Result<MappedType> {
        let resolved = self
            .table
            .resolve(self.domain, reference)
            .ok_or_else(|| Error::unresolved_reference(self.domain, declaration, reference))?;

        let ident = self.table.ident(resolved.domain, resolved.name);
        if self.table.is_value(resolved.name) {
            Ok(MappedType::value(ident))
        } else {
            Ok(MappedType::value(format!("Box<{ident}>")))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
