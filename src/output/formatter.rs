//! External source formatter.
//!
//! The formatter is looked up once, when the writer is built. A formatter
//! that is not installed only degrades output; a formatter that runs and
//! fails aborts the run.

// ============================================================================
// Imports
// ============================================================================

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::compiler::FormatterOptions;
use crate::error::{Error, Result};

// ============================================================================
// Formatter
// ============================================================================

/// A located formatter executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    /// Name as configured, for diagnostics.
    program: String,
    /// Resolved executable.
    executable: PathBuf,
    args: Vec<String>,
}

impl Formatter {
    /// Locates the configured formatter.
    ///
    /// Returns `None`, after logging a warning, if the program is not
    /// installed.
    #[must_use]
    pub fn discover(options: &FormatterOptions) -> Option<Self> {
        match find_program(&options.program) {
            Some(executable) => {
                debug!(program = %options.program, path = %executable.display(), "Formatter found");
                Some(Self {
                    program: options.program.clone(),
                    executable,
                    args: options.args.clone(),
                })
            }
            None => {
                warn!(program = %options.program, "Formatter not found, output will be unformatted");
                None
            }
        }
    }

    /// Returns the configured program name.
    #[inline]
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the resolved executable.
    #[inline]
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Formats `path` in place.
    ///
    /// Blocks until the formatter exits.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the process cannot be started
    /// - [`Error::FormatterFailed`] if it exits unsuccessfully
    pub fn run(&self, path: &Path) -> Result<()> {
        let status = Command::new(&self.executable)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::formatter_failed(&self.program, path, status));
        }

        debug!(path = %path.display(), "Formatted");
        Ok(())
    }
}

// ============================================================================
// Discovery
// ============================================================================

/// Resolves `program` to an executable file.
///
/// Names containing a path separator are checked as given; bare names are
/// searched for on `PATH`.
fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths).find_map(|dir| {
        executable_names(program)
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(windows)]
fn executable_names(program: &str) -> impl Iterator<Item = String> {
    [program.to_string(), format!("{program}.exe")].into_iter()
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> impl Iterator<Item = String> {
    std::iter::once(program.to_string())
}

// ============================================================================
// Tests
// ============================================================================
