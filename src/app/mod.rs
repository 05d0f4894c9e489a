//! Application layer: filterable collection views and their event contract.
//!
//! This module sits between the data source (a repository or a fetch) and the
//! presentation layer. It owns search text and filter selections and derives the
//! visible subset of records from them.
//!
//! # Architecture
//!
//! ```text
//! Search bar input → Events → handle_event → CollectionView mutations
//!                                                  ↓
//!                         SearchFilterBarModel ← compute_viewmodel
//! ```
//!
//! # Modules
//!
//! - [`query`]: Search/filter configuration and matching predicates
//! - [`state`]: The [`CollectionView`] state container
//! - [`handler`]: Presentation events and the change-detecting handler
//! - [`presets`]: Standard setups for the portfolio content types

pub mod handler;
pub mod presets;
pub mod query;
pub mod state;

pub use handler::{handle_event, Event};
pub use presets::Browsable;
pub use query::{ActiveFilters, ViewConfig};
pub use state::CollectionView;
