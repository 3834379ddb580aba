//! Compilation driver.
//!
//! The [`Compiler`] loads schema files, builds one [`NameTable`] per
//! protocol version, then emits and writes each domain in schema order.
//!
//! # Example
//!
//! ```no_run
//! use devtools_protogen::Compiler;
//!
//! # fn example() -> devtools_protogen::Result<()> {
//! let compiler = Compiler::builder().output_dir("src/bindings").build()?;
//! let report = compiler.compile_files(&["browser_protocol.json", "js_protocol.json"])?;
//! println!("{} files written", report.file_count());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::codegen::{DomainUnit, Emitter};
use crate::error::{Error, Result};
use crate::output::{FileWriter, Formatter, IndexEntry};
use crate::resolve::NameTable;
use crate::schema::{Schema, Version, load_schema, merge_schemas};

use super::builder::CompilerBuilder;
use super::options::CompilerOptions;

// ============================================================================
// Reports
// ============================================================================

/// Outcome of compiling one protocol version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub version: Version,
    /// Version directory.
    pub dir: PathBuf,
    /// Domain files followed by the index, in write order.
    pub files: Vec<PathBuf>,
    pub types: usize,
    pub commands: usize,
    pub events: usize,
    /// Experimental declarations left out of emitted domains.
    pub skipped_declarations: usize,
    /// Experimental domains left out entirely.
    pub skipped_domains: Vec<String>,
}

impl VersionReport {
    fn new(version: Version, dir: PathBuf) -> Self {
        Self {
            version,
            dir,
            files: Vec::new(),
            types: 0,
            commands: 0,
            events: 0,
            skipped_declarations: 0,
            skipped_domains: Vec::new(),
        }
    }

    fn record(&mut self, unit: &DomainUnit, path: PathBuf) {
        self.files.push(path);
        self.types += unit.stats.types;
        self.commands += unit.stats.commands;
        self.events += unit.stats.events;
        self.skipped_declarations += unit.stats.skipped;
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    /// One entry per version, in sorted order.
    pub versions: Vec<VersionReport>,
}

impl CompileReport {
    /// Returns the number of files written across all versions.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.versions.iter().map(|v| v.files.len()).sum()
    }
}

// ============================================================================
// Compiler
// ============================================================================

/// Protocol schema compiler.
///
/// Holds no state between runs other than its configuration and the
/// formatter located at construction.
#[derive(Clone)]
pub struct Compiler {
    output_dir: PathBuf,
    options: CompilerOptions,
    formatter: Option<Formatter>,
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("output_dir", &self.output_dir)
            .field("include_experimental", &self.options.include_experimental)
            .field("formatter", &self.formatter.as_ref().map(Formatter::program))
            .finish_non_exhaustive()
    }
}

impl Compiler {
    /// Creates a configuration builder for the compiler.
    #[inline]
    #[must_use]
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    /// Creates a compiler, locating the configured formatter.
    pub(crate) fn new(output_dir: PathBuf, options: CompilerOptions) -> Self {
        let formatter = options.formatter.as_ref().and_then(Formatter::discover);
        Self {
            output_dir,
            options,
            formatter,
        }
    }

    /// Returns the root output directory.
    #[inline]
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the compiler options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Returns `true` if a formatter will run on written files.
    #[inline]
    #[must_use]
    pub fn formats_output(&self) -> bool {
        self.formatter.is_some()
    }

    /// Loads, merges and compiles schema files.
    ///
    /// Files sharing a version tag are merged; the first file to define a
    /// domain wins.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `paths` is empty
    /// - any error from [`load_schema`] or [`compile`](Self::compile)
    pub fn compile_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<CompileReport> {
        if paths.is_empty() {
            return Err(Error::config("At least one schema file is required"));
        }

        let schemas = paths
            .iter()
            .map(|p| load_schema(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let mut report = CompileReport::default();
        for schema in merge_schemas(schemas) {
            report.versions.push(self.compile(&schema)?);
        }
        Ok(report)
    }

    /// Compiles one schema snapshot.
    ///
    /// Names are resolved across the whole schema before the first domain
    /// is emitted. Each domain file is written as soon as it is emitted; a
    /// failure leaves files for earlier domains in place.
    ///
    /// # Errors
    ///
    /// - [`Error::UnresolvedReference`] if a reference names no declaration
    /// - [`Error::Write`] if a directory or file cannot be written
    /// - [`Error::FormatterFailed`] if the formatter rejects a file
    pub fn compile(&self, schema: &Schema) -> Result<VersionReport> {
        let table = NameTable::build(&schema.domains);
        let emitter = Emitter::new(&table, self.options.include_experimental);

        let writer = FileWriter::new(
            self.output_dir.join(schema.version.dir_name()),
            schema.version.tag(),
            self.options.runtime_path.as_str(),
            self.formatter.clone(),
        );
        writer.prepare()?;

        let mut report = VersionReport::new(schema.version.clone(), writer.dir().to_path_buf());
        let mut entries = Vec::with_capacity(schema.domains.len());

        for domain in &schema.domains {
            if !emitter.includes(domain.experimental) {
                debug!(domain = %domain.name, "Skipping experimental domain");
                report.skipped_domains.push(domain.name.clone());
                continue;
            }

            let unit = emitter.emit_domain(domain)?;
            let path = writer.write_domain(&unit)?;
            debug!(
                domain = %unit.domain,
                types = unit.stats.types,
                commands = unit.stats.commands,
                events = unit.stats.events,
                "Domain written"
            );

            entries.push(IndexEntry::from(&unit));
            report.record(&unit, path);
        }

        report.files.push(writer.write_index(&entries)?);

        info!(
            version = %schema.version.tag(),
            dir = %report.dir.display(),
            domains = entries.len(),
            types = report.types,
            commands = report.commands,
            events = report.events,
            "Protocol compiled"
        );

        Ok(report)
    }
}

// ============================================================================
// Tests
// ============================================================================
