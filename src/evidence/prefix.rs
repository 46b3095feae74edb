//! Key prefix classification.
//!
//! Evidence keys arrive as `"<origin>.<name>"`, for example
//! `header.User-Agent` or `cookie.session`. The prefix decides the
//! [`EvidenceCategory`] of the pair.

use crate::evidence::category::EvidenceCategory;

/// One row of the prefix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixEntry {
    /// Prefix including the trailing dot.
    pub prefix: &'static str,
    /// Category assigned to keys carrying the prefix.
    pub category: EvidenceCategory,
}

impl PrefixEntry {
    /// Whether `key` starts with this prefix and has a non-empty remainder.
    pub fn matches(&self, key: &str) -> bool {
        key.len() > self.prefix.len() && key.as_bytes().starts_with(self.prefix.as_bytes())
    }

    /// Field name of `key` with this prefix removed.
    ///
    /// Returns `None` if the key does not match.
    pub fn field<'k>(&self, key: &'k str) -> Option<&'k str> {
        if self.matches(key) {
            key.get(self.prefix.len()..)
        } else {
            None
        }
    }
}

/// Static prefix table. Lookups take the first matching row.
pub static PREFIX_MAP: &[PrefixEntry] = &[
    PrefixEntry {
        prefix: "server.",
        category: EvidenceCategory::ServerVar,
    },
    PrefixEntry {
        prefix: "header.",
        category: EvidenceCategory::HttpHeaderString,
    },
    PrefixEntry {
        prefix: "query.",
        category: EvidenceCategory::Query,
    },
    PrefixEntry {
        prefix: "cookie.",
        category: EvidenceCategory::Cookie,
    },
];

/// Find the prefix entry for `key`.
///
/// Matching is byte-exact and case-sensitive. A key equal to a bare prefix
/// (e.g. `"header."`) does not match.
pub fn resolve(key: &str) -> Option<&'static PrefixEntry> {
    resolve_in(PREFIX_MAP, key)
}

/// Same as [`resolve`] against an arbitrary table.
pub fn resolve_in<'t>(table: &'t [PrefixEntry], key: &str) -> Option<&'t PrefixEntry> {
    table.iter().find(|entry| entry.matches(key))
}

/// Category of `key`, falling back to [`EvidenceCategory::Ignore`].
pub fn category_of(key: &str) -> EvidenceCategory {
    resolve(key)
        .map(|entry| entry.category)
        .unwrap_or(EvidenceCategory::Ignore)
}

/// Split `key` into its category and field name.
///
/// Unmatched keys are returned whole under [`EvidenceCategory::Ignore`].
pub fn split_key(key: &str) -> (EvidenceCategory, &str) {
    resolve(key)
        .and_then(|entry| Some((entry.category, entry.field(key)?)))
        .unwrap_or((EvidenceCategory::Ignore, key))
}
