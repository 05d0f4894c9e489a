//! Search and filter configuration plus the matching predicates.
//!
//! A [`ViewConfig`] names which record attributes take part in free-text search and
//! which are exposed as discrete filters. The predicates in this module are pure
//! functions over a record, the config, and the current search/filter state.
//!
//! # Matching Rules
//!
//! - **Search**: the trimmed, lower-cased search text must be a substring of at least one
//!   search field (any element, for list fields). Blank text passes every record.
//! - **Filters**: OR within a key, AND across keys. Keys with an empty selection, and
//!   keys with no configured field, impose no constraint.

use crate::domain::{Field, FieldValue};
use std::collections::{BTreeMap, BTreeSet};

/// Active filter selections: filter key to the set of checked option values.
pub type ActiveFilters = BTreeMap<String, BTreeSet<String>>;

/// Which record attributes are searchable and which are filterable.
///
/// At least one search field is required, so the only constructor is
/// [`ViewConfig::searching`].
///
/// # Example
///
/// ```
/// use facetfolio::app::ViewConfig;
/// use facetfolio::domain::FieldValue;
///
/// struct Talk { title: String, venue: String, tags: Vec<String> }
///
/// let config = ViewConfig::searching("title", |t: &Talk| FieldValue::text(&t.title))
///     .search("tags", |t: &Talk| FieldValue::list(t.tags.clone()))
///     .filter("venue", |t: &Talk| FieldValue::text(&t.venue));
///
/// assert_eq!(config.search_fields().len(), 2);
/// assert!(config.filter_field("venue").is_some());
/// ```
#[derive(Debug)]
pub struct ViewConfig<R> {
    search_fields: Vec<Field<R>>,
    filter_fields: BTreeMap<String, Field<R>>,
}

impl<R> ViewConfig<R> {
    /// Starts a config with its first search field.
    pub fn searching<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            search_fields: vec![Field::new(name, accessor)],
            filter_fields: BTreeMap::new(),
        }
    }

    /// Adds another search field.
    #[must_use]
    pub fn search<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> FieldValue + Send + Sync + 'static,
    {
        self.search_fields.push(Field::new(name, accessor));
        self
    }

    /// Adds a filter field under `key`, replacing any previous field for that key.
    #[must_use]
    pub fn filter<F>(mut self, key: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> FieldValue + Send + Sync + 'static,
    {
        let key = key.into();
        self.filter_fields
            .insert(key.clone(), Field::new(key, accessor));
        self
    }

    /// The configured search fields, in insertion order.
    #[must_use]
    pub fn search_fields(&self) -> &[Field<R>] {
        &self.search_fields
    }

    /// The field behind filter `key`, if configured.
    #[must_use]
    pub fn filter_field(&self, key: &str) -> Option<&Field<R>> {
        self.filter_fields.get(key)
    }

    /// Configured filter keys, sorted.
    pub fn filter_keys(&self) -> impl Iterator<Item = &str> {
        self.filter_fields.keys().map(String::as_str)
    }
}

/// Normalizes raw search input into a needle.
///
/// Returns `None` when the input is empty or whitespace only.
#[must_use]
pub fn normalize_search(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Returns `true` if any search field of `record` contains `needle`.
///
/// `needle` must come from [`normalize_search`].
pub fn matches_search<R>(record: &R, fields: &[Field<R>], needle: &str) -> bool {
    fields
        .iter()
        .any(|field| field.value(record).contains_text(needle))
}

/// Returns `true` if `record` satisfies every active filter key.
pub fn matches_filters<R>(record: &R, config: &ViewConfig<R>, active: &ActiveFilters) -> bool {
    active.iter().all(|(key, selection)| {
        if selection.is_empty() {
            return true;
        }
        // Selections under keys with no configured field are ignored.
        config
            .filter_field(key)
            .map_or(true, |field| field.value(record).intersects(selection))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        kind: Option<String>,
        year: i32,
        tags: Vec<String>,
    }

    fn config() -> ViewConfig<Row> {
        ViewConfig::searching("kind", |r: &Row| r.kind.clone().into())
            .search("year", |_: &Row| FieldValue::Other)
            .filter("kind", |r: &Row| r.kind.clone().into())
            .filter("year", |r: &Row| FieldValue::text(r.year.to_string()))
            .filter("tags", |r: &Row| FieldValue::list(r.tags.clone()))
            .filter("broken", |_: &Row| FieldValue::Missing)
    }

    fn row(kind: Option<&str>, year: i32, tags: &[&str]) -> Row {
        Row {
            kind: kind.map(String::from),
            year,
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    fn active(entries: &[(&str, &[&str])]) -> ActiveFilters {
        entries
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(ToString::to_string).collect()))
            .collect()
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_search("  FeLLow "), Some("fellow".into()));
        assert_eq!(normalize_search("   \t"), None);
        assert_eq!(normalize_search(""), None);
    }

    #[test]
    fn numeric_search_fields_never_match() {
        let cfg = config();
        let r = row(None, 2020, &[]);
        assert!(!matches_search(&r, cfg.search_fields(), "2020"));
    }

    #[test]
    fn filters_are_or_within_key_and_across_keys() {
        let cfg = config();
        let r = row(Some("A"), 2020, &["x"]);
        assert!(matches_filters(&r, &cfg, &active(&[("kind", &["A", "B"])])));
        assert!(matches_filters(
            &r,
            &cfg,
            &active(&[("kind", &["A"]), ("year", &["2020"])])
        ));
        assert!(!matches_filters(
            &r,
            &cfg,
            &active(&[("kind", &["A"]), ("year", &["2021"])])
        ));
        assert!(matches_filters(&r, &cfg, &active(&[("tags", &["y", "x"])])));
    }

    #[test]
    fn empty_selection_passes() {
        let cfg = config();
        let r = row(None, 2020, &[]);
        assert!(matches_filters(&r, &cfg, &active(&[("kind", &[])])));
    }

    #[test]
    fn unset_attribute_fails_active_key() {
        let cfg = config();
        let r = row(None, 2020, &[]);
        assert!(!matches_filters(&r, &cfg, &active(&[("kind", &["A"])])));
    }

    #[test]
    fn unknown_key_is_ignored() {
        let cfg = config();
        let r = row(Some("A"), 2020, &[]);
        assert!(matches_filters(&r, &cfg, &active(&[("nonexistent", &["x"])])));
    }

    #[test]
    fn missing_attribute_excludes_everything() {
        let cfg = config();
        let r = row(Some("A"), 2020, &["x"]);
        assert!(!matches_filters(&r, &cfg, &active(&[("broken", &["x"])])));
    }
}
