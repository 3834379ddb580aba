//! Identifier spelling rules for generated code.
//!
//! Every function here is a pure string transform; the same schema name
//! always produces the same identifier, which keeps output byte-stable.

// ============================================================================
// Constants
// ============================================================================

/// Rust keywords that cannot be used as plain identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "super", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot even be raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "Self", "super"];

// ============================================================================
// Type Identifiers
// ============================================================================

/// Returns the exported spelling of a declaration name.
///
/// Only the first character changes: `getDocument` → `GetDocument`.
#[must_use]
pub fn type_ident(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Transliterates an enumeration literal into a constant name.
///
/// The first character and every character after a `-` separator are
/// upper-cased and separators are dropped; a separator with nothing to
/// attach to becomes `N`, so `-webkit-box` → `NWebkitBox`.
#[must_use]
pub fn enum_const_ident(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut start = true;

    for ch in value.chars() {
        if ch == '-' {
            if start {
                out.push('N');
            } else {
                start = true;
            }
            continue;
        }
        if start {
            start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }

    sanitize_ident(out)
}

// ============================================================================
// Value Identifiers
// ============================================================================

/// Converts a camelCase or PascalCase name into snake_case.
///
/// Runs of capitals are treated as one word: `documentURL` → `document_url`,
/// `DOMEnable` → `dom_enable`.
#[must_use]
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '-' || ch == '.' || ch == ' ' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if ch.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Returns a field identifier for a wire name, escaping keywords.
#[must_use]
pub fn field_ident(wire_name: &str) -> String {
    escape_keyword(sanitize_ident(snake_case(wire_name)))
}

/// Returns a function identifier for an exported type identifier.
#[must_use]
pub fn fn_ident(ident: &str) -> String {
    escape_keyword(snake_case(ident))
}

/// Returns the module (and file stem) name of a domain.
#[must_use]
pub fn module_name(domain: &str) -> String {
    domain.to_lowercase()
}

/// Returns a module name usable in a `mod` declaration.
#[must_use]
pub fn module_ident(domain: &str) -> String {
    escape_keyword(module_name(domain))
}

// ============================================================================
// Helpers
// ============================================================================

/// Prefixes raw-identifier syntax onto keywords.
#[must_use]
pub fn escape_keyword(ident: String) -> String {
    if RESERVED.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Replaces characters that cannot appear in an identifier.
fn sanitize_ident(ident: String) -> String {
    let mut out: String = ident
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
