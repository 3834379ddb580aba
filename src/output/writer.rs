//! Generated file materialization.
//!
//! # Layout
//!
//! ```text
//! <output_dir>/v1_3/
//! ├── mod.rs      index: `pub mod dom; pub use dom::*;` per domain
//! ├── dom.rs      banner, module docs, `use super::*;`, imports, body
//! └── page.rs
//! ```
//!
//! Each file is written to a temporary sibling and renamed into place, so a
//! file is either complete or absent.

// ============================================================================
// Imports
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codegen::naming::module_ident;
use crate::codegen::{CodeWriter, DomainUnit};
use crate::error::{Error, Result};

use super::formatter::Formatter;

// ============================================================================
// Constants
// ============================================================================

/// Index file of a version directory.
pub const INDEX_FILE: &str = "mod.rs";

/// Lints generated code is exempt from.
const INDEX_ALLOW: &str = "#![allow(non_camel_case_types, non_snake_case, clippy::all, dead_code, unused_imports)]";

// ============================================================================
// IndexEntry
// ============================================================================

/// One domain listed in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Schema name of the domain.
    pub domain: String,
    /// File stem of the domain module.
    pub module: String,
}

impl From<&DomainUnit> for IndexEntry {
    fn from(unit: &DomainUnit) -> Self {
        Self {
            domain: unit.domain.clone(),
            module: unit.module.clone(),
        }
    }
}

// ============================================================================
// FileWriter
// ============================================================================

/// Writes the files of one version directory.
#[derive(Debug, Clone)]
pub struct FileWriter {
    dir: PathBuf,
    version: String,
    runtime_path: String,
    formatter: Option<Formatter>,
}

impl FileWriter {
    /// Creates a writer for `dir`.
    ///
    /// `version` is the protocol version tag quoted in file banners.
    #[must_use]
    pub fn new(
        dir: impl Into<PathBuf>,
        version: impl Into<String>,
        runtime_path: impl Into<String>,
        formatter: Option<Formatter>,
    ) -> Self {
        Self {
            dir: dir.into(),
            version: version.into(),
            runtime_path: runtime_path.into(),
            formatter,
        }
    }

    /// Returns the version directory.
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the version directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the directory cannot be created.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::write(&self.dir, e))
    }

    /// Renders the complete text of a domain file.
    #[must_use]
    pub fn render_domain(&self, unit: &DomainUnit) -> String {
        let mut w = CodeWriter::new();
        self.banner(&mut w);
        w.blank();

        if unit.description.is_some() || unit.experimental {
            w.inner_doc(unit.description.as_deref(), unit.experimental);
            w.blank();
        }

        w.line("use super::*;");
        let imports = unit.capabilities.imports(&self.runtime_path);
        if !imports.is_empty() {
            w.blank();
            for import in imports {
                w.line(import);
            }
        }
        w.blank();

        let mut text = w.finish();
        text.push_str(unit.body.trim_end());
        text.push('\n');
        text
    }

    /// Renders the index listing `entries` in order.
    #[must_use]
    pub fn render_index(&self, entries: &[IndexEntry]) -> String {
        let mut w = CodeWriter::new();
        self.banner(&mut w);
        w.blank();
        w.line(format!("//! Protocol version {}.", self.version));
        w.blank();
        w.line(INDEX_ALLOW);

        for entry in entries {
            let ident = module_ident(&entry.module);
            w.blank();
            w.line(format!("/// `{}` domain.", entry.domain));
            w.line(format!("pub mod {ident};"));
            w.line(format!("pub use {ident}::*;"));
        }

        w.finish()
    }

    /// Writes and formats the file for one domain.
    ///
    /// # Errors
    ///
    /// - [`Error::Write`] if the file cannot be written
    /// - [`Error::FormatterFailed`] if the formatter rejects it
    pub fn write_domain(&self, unit: &DomainUnit) -> Result<PathBuf> {
        let path = self.dir.join(format!("{}.rs", unit.module));
        self.write_file(&path, &self.render_domain(unit))?;
        Ok(path)
    }

    /// Writes and formats the index.
    ///
    /// # Errors
    ///
    /// - [`Error::Write`] if the file cannot be written
    /// - [`Error::FormatterFailed`] if the formatter rejects it
    pub fn write_index(&self, entries: &[IndexEntry]) -> Result<PathBuf> {
        let path = self.dir.join(INDEX_FILE);
        self.write_file(&path, &self.render_index(entries))?;
        Ok(path)
    }

    fn banner(&self, w: &mut CodeWriter) {
        w.line(format!(
            "// Code generated by devtools-protogen from protocol version {}. DO NOT EDIT.",
            self.version
        ));
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        let staging = path.with_extension("rs.tmp");
        fs::write(&staging, contents).map_err(|e| Error::write(&staging, e))?;
        fs::rename(&staging, path).map_err(|e| Error::write(path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote file");

        if let Some(formatter) = &self.formatter {
            formatter.run(path)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
