use satsang_model::{CatalogEntry, Category, EntryLike};

/// Declarative description of what a browsing grid should show.
///
/// Built from session state and applied to a full catalog slice.
/// Application is pure and order-preserving: the result is always a
/// subsequence of the input, so the spec can be re-applied on every
/// keystroke without the grid reshuffling under the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Raw search text as typed. Matching lowercases both sides via
    /// Unicode case mapping; no trimming, no diacritic folding.
    pub search_term: String,
    /// At most one category chip is active at a time.
    pub category: Option<Category>,
}

impl FilterSpec {
    pub fn new(
        search_term: impl Into<String>,
        category: Option<Category>,
    ) -> Self {
        FilterSpec {
            search_term: search_term.into(),
            category,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.category.is_none()
    }

    /// Whether a single entry survives this filter. Category and search
    /// term are conjunctive; an empty term matches everything.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.matches_lowered(entry, &self.search_term.to_lowercase())
    }

    /// Filters a catalog slice, preserving input order.
    pub fn apply<'a>(
        &self,
        entries: &'a [CatalogEntry],
    ) -> Vec<&'a CatalogEntry> {
        // Lowercase the needle once per application, not per entry.
        let needle = self.search_term.to_lowercase();
        entries
            .iter()
            .filter(|entry| self.matches_lowered(entry, &needle))
            .collect()
    }

    fn matches_lowered(&self, entry: &CatalogEntry, needle: &str) -> bool {
        if let Some(category) = self.category {
            if entry.category() != category {
                return false;
            }
        }
        needle.is_empty()
            || entry.title().to_lowercase().contains(needle)
            || entry.description().to_lowercase().contains(needle)
    }
}
