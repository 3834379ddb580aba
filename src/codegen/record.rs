//! Serde record rendering shared by types, commands and events.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::schema::Property;

use super::capability::{Capabilities, Capability};
use super::naming::field_ident;
use super::types::TypeMapper;
use super::writer::{CodeWriter, string_literal};

// ============================================================================
// Field
// ============================================================================

/// One record member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Rust field identifier.
    pub ident: String,
    /// Serialized tag, the schema name verbatim.
    pub wire_name: String,
    /// Rust type, already wrapped in `Option` when optional.
    pub ty: String,
    pub optional: bool,
    pub description: Option<String>,
    pub experimental: bool,
}

// ============================================================================
// Record
// ============================================================================

/// A `#[derive(Serialize, Deserialize)]` struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub ident: String,
    pub description: Option<String>,
    pub experimental: bool,
    pub fields: Vec<Field>,
}

impl Record {
    /// Builds a record from schema properties.
    ///
    /// `declaration` names the schema declaration for diagnostics.
    ///
    /// # Errors
    ///
    /// Propagates type mapping failures.
    pub fn from_properties(
        record_ident: impl Into<String>,
        declaration: &str,
        properties: &[Property],
        mapper: &TypeMapper<'_>,
        caps: &mut Capabilities,
    ) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let mut fields = Vec::with_capacity(properties.len());

        for property in properties {
            let mut mapped = mapper.map(&property.shape, declaration, caps)?;
            if property.optional {
                mapped = mapped.optional();
            }

            // Distinct wire names can collapse to one snake_case spelling.
            let base = field_ident(&property.name);
            let mut ident = base.clone();
            let mut suffix = 2;
            while !seen.insert(ident.clone()) {
                ident = format!("{base}_{suffix}");
                suffix += 1;
            }

            fields.push(Field {
                ident,
                wire_name: property.name.clone(),
                ty: mapped.ty,
                optional: property.optional,
                description: property.description.clone(),
                experimental: property.experimental,
            });
        }

        caps.require(Capability::Serde);

        Ok(Self {
            ident: record_ident.into(),
            description: None,
            experimental: false,
            fields,
        })
    }

    /// Attaches documentation to the record.
    #[must_use]
    pub fn with_doc(mut self, description: Option<&str>, experimental: bool) -> Self {
        self.description = description.map(str::to_string);
        self.experimental = experimental;
        self
    }

    /// Renders the struct definition.
    pub fn render(&self, w: &mut CodeWriter) {
        w.doc(self.description.as_deref(), self.experimental);
        w.line("#[derive(Debug, Clone, Serialize, Deserialize)]");

        if self.fields.is_empty() {
            w.line(format!("pub struct {} {{}}", self.ident));
            return;
        }

        w.block(format!("pub struct {}", self.ident), "", |w| {
            for (i, field) in self.fields.iter().enumerate() {
                if i > 0 {
                    w.blank();
                }
                w.doc(field.description.as_deref(), field.experimental);
                if field.optional {
                    w.line(format!(
                        "#[serde(rename = {}, skip_serializing_if = \"Option::is_none\")]",
                        string_literal(&field.wire_name)
                    ));
                } else {
                    w.line(format!(
                        "#[serde(rename = {})]",
                        string_literal(&field.wire_name)
                    ));
                }
                w.line(format!("pub {}: {},", field.ident, field.ty));
            }
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
