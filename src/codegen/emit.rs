//! Per-domain emission.
//!
//! [`Emitter::emit_domain`] folds over a domain's declarations in schema
//! order and renders each into one shared buffer. Imports are not written
//! here; every rendered declaration records the [`Capability`] it needs and
//! the file writer renders the collected set once.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::error::Result;
use crate::resolve::NameTable;
use crate::schema::{Command, Domain, Event, Shape, TypeDecl};

use super::capability::{Capabilities, Capability};
use super::convention::{CONVENTIONS, CommandShape};
use super::naming::{enum_const_ident, escape_keyword, module_name, snake_case};
use super::record::Record;
use super::types::TypeMapper;
use super::writer::{CodeWriter, string_literal};

// ============================================================================
// EmitStats
// ============================================================================

/// Declaration counts for one emitted domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    pub types: usize,
    pub commands: usize,
    pub events: usize,
    /// Experimental declarations left out.
    pub skipped: usize,
}

// ============================================================================
// DomainUnit
// ============================================================================

/// Rendered output of one domain, ready for the file writer.
#[derive(Debug, Clone)]
pub struct DomainUnit {
    /// Schema name of the domain.
    pub domain: String,
    /// Module and file stem.
    pub module: String,
    pub description: Option<String>,
    pub experimental: bool,
    /// Declarations, without imports.
    pub body: String,
    pub capabilities: Capabilities,
    pub stats: EmitStats,
}

// ============================================================================
// Emitter
// ============================================================================

/// Renders domains against one [`NameTable`].
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'a> {
    table: &'a NameTable,
    include_experimental: bool,
}

impl<'a> Emitter<'a> {
    #[inline]
    #[must_use]
    pub fn new(table: &'a NameTable, include_experimental: bool) -> Self {
        Self {
            table,
            include_experimental,
        }
    }

    /// Returns `true` if a declaration with this flag is emitted.
    #[inline]
    #[must_use]
    pub fn includes(&self, experimental: bool) -> bool {
        self.include_experimental || !experimental
    }

    /// Renders every included declaration of `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnresolvedReference`] if any declaration
    /// references a type the schema does not declare. Nothing is returned
    /// for the domain in that case.
    pub fn emit_domain(&self, domain: &Domain) -> Result<DomainUnit> {
        let mapper = TypeMapper::new(self.table, &domain.name);
        let mut w = CodeWriter::new();
        let mut caps = Capabilities::new();
        let mut stats = EmitStats::default();

        for ty in &domain.types {
            if !self.includes(ty.experimental) {
                debug!(domain = %domain.name, name = %ty.name, "Skipping experimental type");
                stats.skipped += 1;
                continue;
            }
            self.emit_type(&mapper, ty, &mut w, &mut caps)?;
            trace!(domain = %domain.name, name = %ty.name, "Emitted type");
            stats.types += 1;
        }

        for command in &domain.commands {
            if !self.includes(command.experimental) {
                debug!(domain = %domain.name, name = %command.name, "Skipping experimental command");
                stats.skipped += 1;
                continue;
            }
            self.emit_command(&mapper, command, &mut w, &mut caps)?;
            trace!(domain = %domain.name, name = %command.name, "Emitted command");
            stats.commands += 1;
        }

        for event in &domain.events {
            if !self.includes(event.experimental) {
                debug!(domain = %domain.name, name = %event.name, "Skipping experimental event");
                stats.skipped += 1;
                continue;
            }
            self.emit_event(&mapper, event, &mut w, &mut caps)?;
            trace!(domain = %domain.name, name = %event.name, "Emitted event");
            stats.events += 1;
        }

        Ok(DomainUnit {
            domain: domain.name.clone(),
            module: module_name(&domain.name),
            description: domain.description.clone(),
            experimental: domain.experimental,
            body: w.finish(),
            capabilities: caps,
            stats,
        })
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn emit_type(
        &self,
        mapper: &TypeMapper<'_>,
        ty: &TypeDecl,
        w: &mut CodeWriter,
        caps: &mut Capabilities,
    ) -> Result<()> {
        let ident = self.table.ident(mapper.domain(), &ty.name);

        match &ty.shape {
            Shape::Enum(values) => render_enum(&ident, ty, values, w, caps),
            Shape::Composite(properties) => {
                Record::from_properties(ident, &ty.name, properties, mapper, caps)?
                    .with_doc(ty.description.as_deref(), ty.experimental)
                    .render(w);
            }
            shape => {
                let mapped = mapper.map(shape, &ty.name, caps)?;
                w.doc(ty.description.as_deref(), ty.experimental);
                w.line(format!("pub type {ident} = {};", mapped.ty));
            }
        }

        w.blank();
        Ok(())
    }

    // ========================================================================
    // Commands
    // ========================================================================

    fn emit_command(
        &self,
        mapper: &TypeMapper<'_>,
        command: &Command,
        w: &mut CodeWriter,
        caps: &mut Capabilities,
    ) -> Result<()> {
        let ident = self.table.ident(mapper.domain(), &command.name);
        let method = format!("{}.{}", mapper.domain(), command.name);

        let params = if command.parameters.is_empty() {
            None
        } else {
            let record = Record::from_properties(
                format!("{ident}Params"),
                &command.name,
                &command.parameters,
                mapper,
                caps,
            )?;
            Some(record.with_doc(Some(format!("Parameters of `{method}`.").as_str()), false))
        };

        let result = if command.returns.is_empty() {
            None
        } else {
            let record = Record::from_properties(
                format!("{ident}Result"),
                &command.name,
                &command.returns,
                mapper,
                caps,
            )?;
            Some(record.with_doc(Some(format!("Result of `{method}`.").as_str()), false))
        };

        let shape = CommandShape {
            ident,
            method,
            description: command.description.clone(),
            experimental: command.experimental,
            params,
            result,
        };

        for record in shape.params.iter().chain(shape.result.iter()) {
            record.render(w);
            w.blank();
        }
        for convention in CONVENTIONS {
            convention.render(&shape, w, caps);
        }

        Ok(())
    }

    // ========================================================================
    // Events
    // ========================================================================

    fn emit_event(
        &self,
        mapper: &TypeMapper<'_>,
        event: &Event,
        w: &mut CodeWriter,
        caps: &mut Capabilities,
    ) -> Result<()> {
        let ident = self.table.ident(mapper.domain(), &event.name);
        let method = format!("{}.{}", mapper.domain(), event.name);
        let record_ident = format!("{ident}Event");

        Record::from_properties(&record_ident, &event.name, &event.parameters, mapper, caps)?
            .with_doc(event.description.as_deref(), event.experimental)
            .render(w);
        w.blank();

        caps.require_all([Capability::RawValue, Capability::Logging, Capability::Runtime]);

        let method_lit = string_literal(&method);
        w.line(format!("/// Registers `callback` for `{method}` notifications."));
        w.line("///");
        w.line("/// Payloads that fail to decode are logged and dropped.");
        w.block(
            format!(
                "pub fn on_{}<F>(transport: &dyn rt::Transport, callback: F) where F: Fn({record_ident}) + Send + Sync + 'static",
                snake_case(&ident)
            ),
            "",
            |w| {
                w.indented("transport.add_event_sink(", ");", |w| {
                    w.line(format!("{method_lit},"));
                    w.block(
                        format!(
                            "Box::new(move |params: &RawValue| match rt::decode::<{record_ident}>(params)"
                        ),
                        "),",
                        |w| {
                            w.line("Ok(event) => callback(event),");
                            w.line(format!(
                                "Err(err) => warn!(event = {method_lit}, error = %err, \"Dropping malformed event\"),"
                            ));
                        },
                    );
                });
            },
        );
        w.blank();

        Ok(())
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// Renders a string newtype with one associated constant per literal.
fn render_enum(
    ident: &str,
    ty: &TypeDecl,
    values: &[String],
    w: &mut CodeWriter,
    caps: &mut Capabilities,
) {
    caps.require_all([Capability::Cow, Capability::Serde]);

    w.doc(ty.description.as_deref(), ty.experimental);
    w.line("#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]");
    w.line("#[serde(transparent)]");
    w.line(format!("pub struct {ident}(pub Cow<'static, str>);"));
    w.blank();
    w.line("#[allow(non_upper_case_globals)]");
    w.block(format!("impl {ident}"), "", |w| {
        let mut seen = FxHashSet::default();
        for value in values {
            let base = escape_keyword(enum_const_ident(value));
            let mut name = base.clone();
            let mut suffix = 2;
            while !seen.insert(name.clone()) {
                name = format!("{base}{suffix}");
                suffix += 1;
            }
            w.line(format!(
                "pub const {name}: Self = Self(Cow::Borrowed({}));",
                string_literal(value)
            ));
        }
        if !values.is_empty() {
            w.blank();
        }
        w.line("/// Returns the wire literal.");
        w.block("pub fn as_str(&self) -> &str", "", |w| w.line("&self.0"));
    });
}

// ============================================================================
// Tests
// ============================================================================
