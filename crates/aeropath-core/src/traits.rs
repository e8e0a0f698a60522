// crates/aeropath-core/src/traits.rs
use crate::text::{contains_ignore_case, fold_key};

/// Name matching for anything with a display name.
///
/// Implementors only provide [`NameMatch::name_str`]. Exact lookups go
/// through [`fold_key`] and ignore case and diacritics; substring search
/// only ignores case. Cities also match on their country via
/// [`NameMatch::matches_search`].
///
/// # Examples
/// ```rust
/// use aeropath_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("lodz"));
/// assert!(Place("Zürich").name_contains("ZÜRI"));
/// assert!(!Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_ignore_case(self.name_str(), q)
    }

    /// Free-text search predicate used by the query pipeline.
    ///
    /// Defaults to [`NameMatch::name_contains`]; types with more searchable
    /// fields override it.
    #[inline]
    fn matches_search(&self, q: &str) -> bool {
        self.name_contains(q)
    }
}
