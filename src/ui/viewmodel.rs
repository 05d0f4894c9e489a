//! View model types representing the renderable search/filter bar.
//!
//! View models are computed from a collection view via
//! `CollectionView::compute_viewmodel()` and consumed by the renderer. They carry no
//! behavior beyond formatting, only display-ready data.

use std::fmt;

/// Complete view model for one search bar with its filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilterBarModel {
    /// Placeholder shown in an empty search input.
    pub placeholder: String,

    /// Current search text.
    pub search_text: String,

    /// One dropdown per configured facet.
    pub groups: Vec<FilterGroup>,

    /// One removable tag per selected filter value.
    pub active_tags: Vec<ActiveTag>,

    /// Whether any filter key has a non-empty selection.
    pub has_active_filters: bool,

    /// Total number of selected values, shown on the clear button.
    pub total_active_filters: usize,

    /// "Showing N of M" line.
    pub summary: ResultsSummary,

    /// Present when the filtered result is empty.
    pub empty_state: Option<EmptyState>,
}

/// A filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    pub key: String,
    pub label: String,
    pub options: Vec<FilterOption>,

    /// Number of selected values under this key (badge on the dropdown button).
    pub selected_count: usize,
}

/// One checkbox inside a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,

    /// Records carrying this value, counted over the unfiltered list.
    pub count: usize,
    pub checked: bool,
}

/// A selected filter value shown as a removable tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTag {
    pub key: String,
    pub value: String,
    pub label: String,
}

/// Result count line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsSummary {
    pub shown: usize,
    pub total: usize,
    pub noun: String,
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} {}", self.shown, self.total, self.noun)
    }
}

/// Empty state message display information.
///
/// Shown when no records pass the current search and filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No awards found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
