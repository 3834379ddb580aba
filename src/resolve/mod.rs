//! Cross-domain name resolution.
//!
//! The [`NameTable`] is built once from the complete schema before any
//! domain is emitted, because whether a name in domain `A` must be
//! domain-qualified depends on what every other domain declares. After
//! construction it is only ever read.
//!
//! # Tables
//!
//! | Table | Keyed by | Answers |
//! |-------|----------|---------|
//! | occurrence counts | exported identifier | must the identifier be qualified? |
//! | value names | bare declared type name | is the type passed by value? |
//! | declarations | `(domain, type name)` | does a reference resolve? |

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::codegen::naming::type_ident;
use crate::schema::Domain;

// ============================================================================
// ResolvedRef
// ============================================================================

/// A type reference resolved to its declaring domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRef<'a> {
    /// Domain that declares the type.
    pub domain: &'a str,
    /// Bare name of the declared type.
    pub name: &'a str,
}

// ============================================================================
// NameTable
// ============================================================================

/// Immutable name information for one schema snapshot.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    /// Exported identifier → number of declarations spelled that way.
    counts: FxHashMap<String, usize>,
    /// Bare type names with at least one non-composite declaration.
    value_names: FxHashSet<String>,
    /// Every declared `(domain, type)` pair.
    declared: FxHashSet<(String, String)>,
}

impl NameTable {
    /// Builds the table from every domain of a schema.
    ///
    /// Experimental domains and declarations are counted too: exclusion is
    /// an emission decision and must not change how other names render.
    #[must_use]
    pub fn build(domains: &[Domain]) -> Self {
        let mut table = Self::default();

        for domain in domains {
            for ty in &domain.types {
                table.count(&ty.name);
                if ty.shape.is_value_kind() {
                    table.value_names.insert(ty.name.clone());
                }
                table
                    .declared
                    .insert((domain.name.clone(), ty.name.clone()));
            }
            for command in &domain.commands {
                table.count(&command.name);
            }
            for event in &domain.events {
                table.count(&event.name);
            }
        }

        debug!(
            names = table.counts.len(),
            value_names = table.value_names.len(),
            types = table.declared.len(),
            "Name table built"
        );

        table
    }

    fn count(&mut self, name: &str) {
        *self.counts.entry(type_ident(name)).or_default() += 1;
    }

    /// Returns how many declarations across all domains share the exported
    /// spelling of `name`.
    #[must_use]
    pub fn occurrences(&self, name: &str) -> usize {
        self.counts.get(&type_ident(name)).copied().unwrap_or(0)
    }

    /// Returns `true` if identifiers for `name` must carry the domain prefix.
    #[inline]
    #[must_use]
    pub fn needs_qualification(&self, name: &str) -> bool {
        self.occurrences(name) > 1
    }

    /// Returns `true` if the bare type name is passed by value.
    ///
    /// A name declared as a primitive in one domain and as a record in
    /// another counts as a value everywhere.
    #[inline]
    #[must_use]
    pub fn is_value(&self, name: &str) -> bool {
        self.value_names.contains(name)
    }

    /// Returns `true` if `domain` declares a type named `name`.
    #[must_use]
    pub fn is_declared(&self, domain: &str, name: &str) -> bool {
        self.declared
            .contains(&(domain.to_string(), name.to_string()))
    }

    /// Resolves a `Name` or `Domain.Name` reference made from `domain`.
    ///
    /// Unqualified references resolve within the referencing domain.
    /// Returns `None` when nothing in the schema matches.
    #[must_use]
    pub fn resolve<'a>(&self, domain: &'a str, reference: &'a str) -> Option<ResolvedRef<'a>> {
        let resolved = match reference.split_once('.') {
            Some((domain, name)) => ResolvedRef { domain, name },
            None => ResolvedRef {
                domain,
                name: reference,
            },
        };

        self.is_declared(resolved.domain, resolved.name)
            .then_some(resolved)
    }

    /// Returns the generated identifier for a declaration of `domain`.
    ///
    /// The identifier is prefixed with the domain name when the spelling is
    /// shared with another declaration anywhere in the schema.
    #[must_use]
    pub fn ident(&self, domain: &str, name: &str) -> String {
        let ident = type_ident(name);
        if self.needs_qualification(name) {
            format!("{domain}{ident}")
        } else {
            ident
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
