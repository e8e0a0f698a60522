// crates/aeropath-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Zürich` -> `Zurich`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use aeropath_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("São Paulo"), "sao paulo");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case-insensitive substring test.
///
/// Only case is folded: diacritics and non-Latin scripts must match as
/// written. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
