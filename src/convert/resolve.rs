//! Canonical lookup keys for converter names.

/// Normalize a raw converter name or type identifier into its lookup key.
///
/// Separator characters (`-`, `_`, space, `/`, `\` and `:`) are stripped
/// and the remainder lowercased. Total on any input and idempotent.
/// Distinct raw names may collapse to the same key; lookups treat that as
/// a match.
pub fn canonical_name(name: &str) -> String {
    name.chars()
        .filter(|&c| !matches!(c, '-' | '_' | ' ' | '/' | '\\' | ':'))
        .flat_map(|c| c.to_lowercase())
        .collect()
}
