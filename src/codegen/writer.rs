//! Indentation-aware text buffer for generated source.

// ============================================================================
// Imports
// ============================================================================

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// Constants
// ============================================================================

const INDENT: &str = "    ";

/// Markup the protocol embeds in descriptions.
static CODE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?code>").expect("valid code tag pattern"));

// ============================================================================
// CodeWriter
// ============================================================================

/// Line-oriented source buffer.
#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl CodeWriter {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    /// Appends an empty line.
    #[inline]
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes `header {`, the body one level deeper, then `}` + `close`.
    pub fn block(&mut self, header: impl AsRef<str>, close: &str, body: impl FnOnce(&mut Self)) {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line(format!("}}{close}"));
    }

    /// Writes `header`, the body one level deeper, then `close`, with no
    /// braces of its own. Used for multi-line call arguments.
    pub fn indented(&mut self, header: impl AsRef<str>, close: &str, body: impl FnOnce(&mut Self)) {
        self.line(header);
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line(close);
    }

    /// Writes `///` doc lines for a schema description.
    ///
    /// Experimental declarations get a trailing marker paragraph.
    pub fn doc(&mut self, description: Option<&str>, experimental: bool) {
        self.doc_with("///", description, experimental);
    }

    /// Writes `//!` doc lines describing the enclosing module.
    pub fn inner_doc(&mut self, description: Option<&str>, experimental: bool) {
        self.doc_with("//!", description, experimental);
    }

    fn doc_with(&mut self, prefix: &str, description: Option<&str>, experimental: bool) {
        let mut wrote = false;
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            for line in sanitize_description(description).lines() {
                let line = line.trim_end();
                if line.is_empty() {
                    self.line(prefix);
                } else {
                    self.line(format!("{prefix} {line}"));
                }
            }
            wrote = true;
        }
        if experimental {
            if wrote {
                self.line(prefix);
            }
            self.line(format!("{prefix} **Experimental.**"));
        }
    }

    /// Returns the text written so far.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the writer and returns its text.
    #[inline]
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Strips inline markup from a description.
#[must_use]
pub fn sanitize_description(description: &str) -> String {
    CODE_TAG.replace_all(description, "").into_owned()
}

/// Renders a Rust string literal for `value`.
#[inline]
#[must_use]
pub fn string_literal(value: &str) -> String {
    format!("{value:?}")
}

// ============================================================================
// Tests
// ============================================================================
