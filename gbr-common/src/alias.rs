//! Remote genre alias table
//!
//! A handful of remote genre names never normalize to their local
//! counterpart (word order swaps, transliteration artifacts). These
//! overrides are consulted before normalized-key matching and win over it.

/// Normalized remote name → canonical local genre name
const ALIASES: &[(&str, &str)] = &[
    ("raphiphop", "Hip-Hop/Rap"),
    ("kiassisk", "Classical"),
    ("electro", "Electronic"),
];

/// Resolve a normalized remote name through the alias table
///
/// `normalized_key` must already be the output of
/// [`normalize`](crate::normalize::normalize).
pub fn resolve_alias(normalized_key: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(key, _)| *key == normalized_key)
        .map(|(_, local)| *local)
}
