//! Display-name canonicalization for dex lookups.

/// Punctuation removed from display names before lookup.
const STRIPPED: &[char] = &[' ', '-', '.', '\'', '%', '*', ':'];

/// Canonicalizes a display name into a dex lookup key.
///
/// Strips the punctuation the export format allows, drops anything outside
/// ASCII, and lowercases, so "Life Orb", "life-orb" and "lifeorb" all land
/// on the `lifeorb` entry. Applied uniformly to species, move, item,
/// ability and nature names.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| c.is_ascii() && !STRIPPED.contains(c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
