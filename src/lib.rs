//! Facetfolio: searchable, filterable collection views over portfolio content.
//!
//! Facetfolio is a library that provides:
//! - A generic collection view combining free-text search with multi-select filters
//! - Facet option lists with per-value counts for building filter panels
//! - Ready-made browse setups for awards, activities, grants, projects, publications,
//!   certifications, blog posts and networks
//! - Pluggable repositories, in memory or backed by JSON files with atomic writes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← View state
//! │  - CollectionView (search + filters)                │
//! │  - Event handling                                   │
//! │  - Browse presets per content kind                  │
//! └─────────────────────────────────────────────────────┘
//!                  │                        │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ UI Layer (ui/)           │   │ Storage Layer (storage/) │
//! │ - Facet options + counts │   │ - Repository trait       │
//! │ - View models            │   │ - Memory / JSON backends │
//! │ - Plain-text rendering   │   │ - ContentStore           │
//! └──────────────────────────┘   └──────────────────────────┘
//!                  │                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Field accessors and content records (domain/)    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing-subscriber setup                         │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Collection view state, events and presets
//! - [`domain`]: Core domain types (fields, content records, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Repository abstraction with memory and JSON backends
//! - [`ui`]: Facets, view models and rendering
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Configuration is read from a TOML file or a key/value map:
//!
//! ```toml
//! data_dir = "~/.local/share/facetfolio"
//! trace_level = "debug"
//! log_file = "~/.local/state/facetfolio/facetfolio.log"
//! ```
//!
//! # Examples
//!
//! ## Filtering a collection
//!
//! ```rust
//! use facetfolio::{handle_event, Award, CollectionView, Event};
//!
//! let mut view = CollectionView::browse(vec![
//!     Award::new("Research Fellowship", "Fellowship", 2019),
//!     Award::new("Innovation Prize", "Innovation", 2021),
//! ]);
//!
//! handle_event(&mut view, Event::toggle("year", "2021", true));
//! assert_eq!(view.filtered_len(), 1);
//!
//! handle_event(&mut view, Event::ClearAll);
//! assert_eq!(view.filtered_len(), 2);
//! ```
//!
//! ## Persistent content
//!
//! ```rust,no_run
//! use facetfolio::storage::Repository;
//! use facetfolio::{initialize, Award, CollectionView, Config};
//!
//! let mut store = initialize(&Config::default())?;
//! store.awards.create(Award::new("Research Fellowship", "Fellowship", 2021))?;
//!
//! let view = CollectionView::browse(store.awards.list()?);
//! println!("{}", facetfolio::ui::render(&view.search_bar()));
//! # Ok::<(), facetfolio::FacetfolioError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Eager Derivation
//!
//! The filtered subset is recomputed after every mutation of search text, selections or
//! records, so reads never observe stale results.
//!
//! ## Explicit Data Sources
//!
//! Views own their records; where the records come from is the caller's business.
//! Repositories are plain values passed to whoever needs them.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models, keeping state and display separate.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, ActiveFilters, Browsable, CollectionView, Event, ViewConfig};
pub use domain::{
    Activity, ActivityKind, Award, BlogPost, Certification, FacetfolioError, Field, FieldValue,
    Grant, Network, NetworkKind, PostStatus, Project, ProjectStatus, Publication, Record, Result,
};
pub use storage::ContentStore;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Library configuration.
///
/// # Example
///
/// ```toml
/// data_dir = "~/portfolio"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one JSON file per content kind.
    ///
    /// Default: `$XDG_DATA_HOME/facetfolio` or `~/.local/share/facetfolio`
    pub data_dir: PathBuf,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter` directive.
    /// Default: `RUST_LOG`, then `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Logs go to stderr when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: infrastructure::get_data_dir(),
            trace_level: None,
            log_file: None,
        }
    }
}

/// On-disk shape of the TOML configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<String>,
    trace_level: Option<String>,
    log_file: Option<String>,
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// Recognized keys are `data_dir`, `trace_level` and `log_file`; unknown keys are
    /// ignored and blank values fall back to defaults. Paths get `~` expanded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::path::PathBuf;
    /// use facetfolio::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/srv/portfolio".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.data_dir, PathBuf::from("/srv/portfolio"));
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self::from_parts(ConfigFile {
            data_dir: value("data_dir"),
            trace_level: value("trace_level"),
            log_file: value("log_file"),
        })
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FacetfolioError::Config`] if the file cannot be read or is not valid
    /// TOML, or if it contains unknown keys.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FacetfolioError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| {
            FacetfolioError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;

        Ok(Self::from_parts(file))
    }

    fn from_parts(file: ConfigFile) -> Self {
        Self {
            data_dir: file
                .data_dir
                .as_deref()
                .map_or_else(infrastructure::get_data_dir, infrastructure::expand_tilde),
            trace_level: file.trace_level,
            log_file: file.log_file.as_deref().map(infrastructure::expand_tilde),
        }
    }
}

/// Initializes logging and opens the content store.
///
/// # Parameters
///
/// * `config` - Library configuration
///
/// # Side Effects
///
/// - Installs the tracing subscriber (first call only)
/// - Creates the data directory if it doesn't exist
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing content
/// file fails to load.
pub fn initialize(config: &Config) -> Result<ContentStore> {
    observability::init_tracing(config);
    tracing::debug!(data_dir = ?config.data_dir, "initializing facetfolio");

    ContentStore::open(config.data_dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_ignores_blank_values() {
        let mut map = BTreeMap::new();
        map.insert("trace_level".to_string(), "   ".to_string());
        map.insert("log_file".to_string(), "/tmp/facetfolio.log".to_string());
        map.insert("theme".to_string(), "dark".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.trace_level, None);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/facetfolio.log")));
        assert_eq!(config.data_dir, infrastructure::get_data_dir());
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facetfolio.toml");
        std::fs::write(&path, "data_dir = \"/srv/portfolio\"\ntrace_level = \"warn\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/portfolio"));
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn from_file_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Config::from_file(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(FacetfolioError::Config(_))));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "scan_depth = 4\n").unwrap();
        let unknown = Config::from_file(&path);
        assert!(matches!(unknown, Err(FacetfolioError::Config(msg)) if msg.contains("bad.toml")));
    }
}
