//! Presentation layer for the search/filter bar.
//!
//! This module turns collection state into display-ready data and text. It provides
//! facet option lists with counts, the bar's view model, and a plain-text renderer.
//!
//! # Architecture
//!
//! ```text
//! CollectionView → compute_viewmodel → SearchFilterBarModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`facets`]: Facet specs and option list computation
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Plain-text renderer

pub mod facets;
pub mod renderer;
pub mod viewmodel;

pub use facets::{facet_options, FacetOrder, FacetSpec};
pub use renderer::render;
pub use viewmodel::{
    ActiveTag, EmptyState, FilterGroup, FilterOption, ResultsSummary, SearchFilterBarModel,
};
