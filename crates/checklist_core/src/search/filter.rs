//! Term-based checklist filter.
//!
//! Matching is case-insensitive substring containment: the query is split
//! on whitespace and every term must occur in the item's text or hint.

use crate::model::catalog::Catalog;
use crate::model::item::EffectiveItem;
use crate::reconcile::ordered_effective_items;
use crate::store::state::ChecklistState;

/// Parsed free-text query. A blank query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    terms: Vec<String>,
}

impl FilterQuery {
    pub fn new(text: &str) -> Self {
        Self {
            terms: text
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns whether every term occurs in the item's text or hint.
    pub fn matches(&self, item: &EffectiveItem) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        let mut haystack = item.text.to_lowercase();
        if let Some(hint) = &item.hint {
            haystack.push(' ');
            haystack.push_str(&hint.to_lowercase());
        }
        self.terms.iter().all(|term| haystack.contains(term))
    }
}

/// Matches for one section, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMatches {
    pub section_id: String,
    pub items: Vec<EffectiveItem>,
}

/// Filters every section's ordered effective items against the query.
///
/// Sections with no matching item are omitted. A collapsed section that
/// does contain a match is expanded in the store, so search results are
/// never hidden behind a collapsed header.
pub fn filter_catalog(
    catalog: &Catalog,
    state: &mut ChecklistState,
    query: &FilterQuery,
) -> Vec<SectionMatches> {
    let mut results = Vec::new();
    for section in catalog.sections() {
        let items: Vec<EffectiveItem> = ordered_effective_items(section, state)
            .into_iter()
            .filter(|item| query.matches(item))
            .collect();
        if items.is_empty() {
            continue;
        }
        if !query.is_empty() && state.is_collapsed(&section.id) {
            state.set_section_collapsed(&section.id, false);
        }
        results.push(SectionMatches {
            section_id: section.id.clone(),
            items,
        });
    }
    results
}

#[cfg(test)]
mod tests {
    use super::{filter_catalog, FilterQuery};
    use crate::model::catalog::Catalog;
    use crate::store::state::ChecklistState;

    #[test]
    fn blank_query_matches_every_section() {
        let catalog = Catalog::builtin();
        let mut state = ChecklistState::new();
        let results = filter_catalog(catalog, &mut state, &FilterQuery::new("  "));
        assert_eq!(results.len(), catalog.sections().len());
    }

    #[test]
    fn all_terms_must_match_text_or_hint() {
        let catalog = Catalog::builtin();
        let mut state = ChecklistState::new();

        // "secrets" appears in 9a's text, "env" in its hint.
        let results = filter_catalog(catalog, &mut state, &FilterQuery::new("secrets env"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].section_id, "sec9");
        assert_eq!(results[0].items.len(), 1);
        assert_eq!(results[0].items[0].id, "9a");

        let none = filter_catalog(catalog, &mut state, &FilterQuery::new("secrets nomatch"));
        assert!(none.is_empty());
    }

    #[test]
    fn matching_section_is_expanded() {
        let catalog = Catalog::builtin();
        let mut state = ChecklistState::new();
        state.set_section_collapsed("sec9", true);

        filter_catalog(catalog, &mut state, &FilterQuery::new("secrets"));
        assert!(!state.is_collapsed("sec9"));
    }

    #[test]
    fn custom_items_are_searchable() {
        let catalog = Catalog::builtin();
        let mut state = ChecklistState::new();
        let id = state
            .add_custom_item("sec1", "Verify feature flag rollout", "")
            .unwrap();

        let results = filter_catalog(catalog, &mut state, &FilterQuery::new("rollout"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].items[0].id, id);
    }
}
