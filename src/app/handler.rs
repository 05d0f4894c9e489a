//! Event handling for the search/filter bar.
//!
//! This module translates presentation events (typing in the search box, toggling a
//! filter checkbox, pressing "clear all", a fetch completing) into [`CollectionView`]
//! mutations, and reports whether the visible result changed so the caller can skip
//! redundant re-renders.
//!
//! # Example
//!
//! ```
//! use facetfolio::app::{handle_event, CollectionView, Event, ViewConfig};
//! use facetfolio::domain::FieldValue;
//!
//! let config = ViewConfig::searching("name", |s: &String| FieldValue::text(s.as_str()));
//! let mut view = CollectionView::new(vec!["alpha".to_string()], config);
//!
//! assert!(handle_event(&mut view, Event::SearchChanged("zzz".into())));
//! assert!(!handle_event(&mut view, Event::SearchChanged("zzzz".into())));
//! ```

use super::state::CollectionView;

/// Events emitted by the search/filter bar or the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<R> {
    /// The search input changed.
    SearchChanged(String),

    /// A filter option was checked or unchecked.
    FilterToggled {
        /// Filter key the option belongs to.
        key: String,
        /// Option value.
        value: String,
        /// `true` when checked.
        included: bool,
    },

    /// The "clear all" action was triggered.
    ClearAll,

    /// A fetch completed with a fresh record list.
    RecordsLoaded(Vec<R>),
}

/// Applies `event` to `view` and returns whether the visible records changed.
///
/// Changes are detected by comparing visible record positions before and after.
/// `RecordsLoaded` always reports a change, since new contents can sit at the same
/// positions.
pub fn handle_event<R>(view: &mut CollectionView<R>, event: Event<R>) -> bool {
    let _span = tracing::debug_span!("handle_event", event_type = event.kind()).entered();

    let before = view.visible_indices().to_vec();

    match event {
        Event::SearchChanged(text) => view.set_search_text(text),
        Event::FilterToggled {
            key,
            value,
            included,
        } => view.set_filter_selection(&key, &value, included),
        Event::ClearAll => view.clear_all(),
        Event::RecordsLoaded(records) => {
            view.set_records(records);
            return true;
        }
    }

    let changed = view.visible_indices() != before.as_slice();
    if !changed {
        tracing::debug!("visible records unchanged, skipping render");
    }
    changed
}

impl<R> Event<R> {
    /// Short event name for tracing.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SearchChanged(_) => "search_changed",
            Self::FilterToggled { .. } => "filter_toggled",
            Self::ClearAll => "clear_all",
            Self::RecordsLoaded(_) => "records_loaded",
        }
    }

    /// Convenience constructor for [`Event::FilterToggled`].
    pub fn toggle(key: impl Into<String>, value: impl Into<String>, included: bool) -> Self {
        Self::FilterToggled {
            key: key.into(),
            value: value.into(),
            included,
        }
    }
}
