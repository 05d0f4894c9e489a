//! Filterable collection state and view model computation.
//!
//! This module defines [`CollectionView`], the single source of truth for one searchable,
//! filterable list. It owns the records, the search text and the active filter selections,
//! and keeps the derived visible subset in sync after every mutation.
//!
//! # State Components
//!
//! - **Records**: The full list, replaceable wholesale (e.g. after a fetch completes)
//! - **Search Text**: Free text as typed; normalized only when matching
//! - **Active Filters**: Filter key to the set of checked option values
//! - **Visible**: Indices into `records` passing both predicates, in input order
//!
//! Replacing the records never resets search text or filter selections.
//!
//! # Example
//!
//! ```
//! use facetfolio::app::{CollectionView, ViewConfig};
//! use facetfolio::domain::FieldValue;
//!
//! let config = ViewConfig::searching("name", |s: &String| FieldValue::text(s.as_str()));
//! let mut view = CollectionView::new(vec!["alpha".to_string(), "beta".to_string()], config);
//!
//! view.set_search_text("ALP");
//! assert_eq!(view.filtered_records(), vec!["alpha"]);
//!
//! view.clear_all();
//! assert_eq!(view.filtered_len(), 2);
//! ```

use super::query::{matches_filters, matches_search, normalize_search, ActiveFilters, ViewConfig};
use crate::ui::facets::{facet_options, FacetSpec};
use crate::ui::viewmodel::{
    ActiveTag, EmptyState, FilterGroup, ResultsSummary, SearchFilterBarModel,
};
use std::collections::BTreeSet;

/// A live-filtered view over an in-memory list of records.
#[derive(Debug)]
pub struct CollectionView<R> {
    records: Vec<R>,
    config: ViewConfig<R>,
    search_text: String,
    active_filters: ActiveFilters,
    visible: Vec<usize>,
}

impl<R> CollectionView<R> {
    /// Creates a view with empty search text and no active filters.
    #[must_use]
    pub fn new(records: Vec<R>, config: ViewConfig<R>) -> Self {
        let mut view = Self {
            records,
            config,
            search_text: String::new(),
            active_filters: ActiveFilters::new(),
            visible: vec![],
        };
        view.apply_filters();
        view
    }

    /// The full, unfiltered record list.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// The search and filter configuration.
    #[must_use]
    pub const fn config(&self) -> &ViewConfig<R> {
        &self.config
    }

    /// Replaces the record list, keeping search text and filter selections.
    pub fn set_records(&mut self, records: Vec<R>) {
        tracing::debug!(
            old_count = self.records.len(),
            new_count = records.len(),
            "replacing records"
        );
        self.records = records;
        self.apply_filters();
    }

    /// The current search text, exactly as set.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Replaces the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        tracing::trace!(query = %self.search_text, "search text updated");
        self.apply_filters();
    }

    /// The current filter selections.
    #[must_use]
    pub const fn active_filters(&self) -> &ActiveFilters {
        &self.active_filters
    }

    /// The selection set for `key`, if the key has ever been touched.
    #[must_use]
    pub fn selection(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.active_filters.get(key)
    }

    /// Adds `value` to, or removes it from, the selection for `key`.
    ///
    /// Unknown keys are accepted and create a new entry. Removing the last value
    /// leaves an empty selection, which imposes no constraint.
    pub fn set_filter_selection(&mut self, key: &str, value: &str, included: bool) {
        if self.config.filter_field(key).is_none() {
            tracing::debug!(filter_key = %key, "selection for unconfigured filter key");
        }

        let selection = self.active_filters.entry(key.to_string()).or_default();
        if included {
            selection.insert(value.to_string());
        } else {
            selection.remove(value);
        }

        tracing::trace!(filter_key = %key, value = %value, included, "filter selection updated");
        self.apply_filters();
    }

    /// Resets search text and every filter selection in one step.
    pub fn clear_all(&mut self) {
        tracing::debug!("clearing search and filters");
        self.search_text.clear();
        self.active_filters.clear();
        self.apply_filters();
    }

    /// Records passing the search and filter predicates, in input order.
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&R> {
        self.filtered_iter().collect()
    }

    /// Iterates the filtered records without collecting them.
    pub fn filtered_iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.visible.iter().map(|&idx| &self.records[idx])
    }

    /// Number of records passing the predicates.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// Returns `true` if any filter key has a non-empty selection.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.active_filters.values().any(|values| !values.is_empty())
    }

    /// Total number of selected values across all filter keys.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.active_filters.values().map(BTreeSet::len).sum()
    }

    /// Indices into [`records`](Self::records) of the visible records.
    pub(crate) fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Recomputes the visible subset from records, search text, and filters.
    fn apply_filters(&mut self) {
        let _span = tracing::debug_span!("apply_filters",
            total_records = self.records.len(),
            query_len = self.search_text.len(),
            active_keys = self.active_filters.len()
        ).entered();

        let needle = normalize_search(&self.search_text);

        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                needle.as_deref().map_or(true, |n| {
                    matches_search(*record, self.config.search_fields(), n)
                }) && matches_filters(*record, &self.config, &self.active_filters)
            })
            .map(|(idx, _)| idx)
            .collect();

        tracing::debug!(filtered_count = self.visible.len(), "filters applied");
    }

    /// Computes the search/filter bar view model.
    ///
    /// Option counts are taken over the full record list so that facets stay accurate
    /// while other filters are active. Facets whose key has no configured filter field
    /// are skipped.
    ///
    /// # Parameters
    ///
    /// * `facets` - Which filter keys to show, with labels and ordering
    /// * `noun` - Plural noun for the results summary (e.g. `"awards"`)
    /// * `placeholder` - Search input placeholder text
    #[must_use]
    pub fn compute_viewmodel(
        &self,
        facets: &[FacetSpec],
        noun: &str,
        placeholder: &str,
    ) -> SearchFilterBarModel {
        let groups: Vec<FilterGroup> = facets
            .iter()
            .filter_map(|spec| {
                let field = self.config.filter_field(&spec.key)?;
                let selection = self.selection(&spec.key);
                Some(FilterGroup {
                    key: spec.key.clone(),
                    label: spec.label.clone(),
                    selected_count: selection.map_or(0, BTreeSet::len),
                    options: facet_options(&self.records, field, spec, selection),
                })
            })
            .collect();

        let active_tags = self.compute_active_tags(&groups, facets);

        let empty_state = (self.visible.is_empty()).then(|| EmptyState {
            message: format!("No {noun} found"),
            subtitle: "Try adjusting your search terms or filters to find what you're looking for."
                .to_string(),
        });

        SearchFilterBarModel {
            placeholder: placeholder.to_string(),
            search_text: self.search_text.clone(),
            groups,
            active_tags,
            has_active_filters: self.has_active_filters(),
            total_active_filters: self.active_filter_count(),
            summary: ResultsSummary {
                shown: self.visible.len(),
                total: self.records.len(),
                noun: noun.to_string(),
            },
            empty_state,
        }
    }

    /// Builds one removable tag per selected value, labelled from the facet options.
    fn compute_active_tags(&self, groups: &[FilterGroup], facets: &[FacetSpec]) -> Vec<ActiveTag> {
        self.active_filters
            .iter()
            .flat_map(|(key, values)| {
                values.iter().map(move |value| {
                    let label = groups
                        .iter()
                        .find(|g| &g.key == key)
                        .and_then(|g| g.options.iter().find(|o| &o.value == value))
                        .map(|o| o.label.clone())
                        .or_else(|| {
                            facets
                                .iter()
                                .find(|f| &f.key == key)
                                .and_then(|f| f.fixed_label(value))
                                .map(String::from)
                        })
                        .unwrap_or_else(|| value.clone());
                    ActiveTag {
                        key: key.clone(),
                        value: value.clone(),
                        label,
                    }
                })
            })
            .collect()
    }
}
