//! Domain layer for facetfolio.
//!
//! This module contains the core domain types, independent of storage and presentation
//! concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`field`]: Typed field accessors used for search and filtering
//! - [`content`]: Portfolio content records and the [`Record`] trait

pub mod content;
pub mod error;
pub mod field;

pub use content::{
    Activity, ActivityKind, Award, BlogPost, Certification, Grant, Network, NetworkKind,
    PostStatus, Project, ProjectStatus, Publication, Record,
};
pub use error::{FacetfolioError, Result};
pub use field::{Field, FieldValue};
