//! Typed field access for arbitrary record shapes.
//!
//! A [`Field`] pairs a display name with an accessor closure that projects a record onto
//! a [`FieldValue`]. Views use fields for both free-text search and discrete filtering,
//! so they never need to know what a "project" or an "award" looks like.

use std::collections::BTreeSet;
use std::fmt;

/// The projection of one record attribute used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single text or categorical value.
    Text(String),

    /// An ordered collection of text values (tags, skills, keywords).
    List(Vec<String>),

    /// A non-text value such as a number or a date.
    ///
    /// Never matches search text or filter selections, even when the field is listed.
    Other,

    /// The attribute is not present on this record.
    Missing,
}

impl FieldValue {
    /// Builds a [`FieldValue::Text`] from anything string-like.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Builds a [`FieldValue::List`] from an iterator of string-like items.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if this value contains `needle` as a substring.
    ///
    /// `needle` must already be lower-cased; the comparison lower-cases the field side.
    /// A list matches when any element contains the needle.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Self::Text(value) => value.to_lowercase().contains(needle),
            Self::List(values) => values.iter().any(|v| v.to_lowercase().contains(needle)),
            Self::Other | Self::Missing => false,
        }
    }

    /// Returns `true` if this value is a member of, or shares an element with, `selection`.
    ///
    /// Comparison is exact and case-sensitive.
    #[must_use]
    pub fn intersects(&self, selection: &BTreeSet<String>) -> bool {
        match self {
            Self::Text(value) => selection.contains(value),
            Self::List(values) => values.iter().any(|v| selection.contains(v)),
            Self::Other | Self::Missing => false,
        }
    }

    /// Distinct, non-empty text values this record contributes to a facet.
    ///
    /// Order follows the record's own order for lists.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Text(value) if !value.is_empty() => vec![value.as_str()],
            Self::List(values) => {
                let mut seen = BTreeSet::new();
                values
                    .iter()
                    .map(String::as_str)
                    .filter(|v| !v.is_empty() && seen.insert(*v))
                    .collect()
            }
            _ => vec![],
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Missing, Self::Text)
    }
}

type Accessor<R> = Box<dyn Fn(&R) -> FieldValue + Send + Sync>;

/// A named accessor projecting a record of type `R` onto a [`FieldValue`].
///
/// # Examples
///
/// ```
/// use facetfolio::domain::{Field, FieldValue};
///
/// struct Paper { title: String, year: i32 }
///
/// let title = Field::new("title", |p: &Paper| FieldValue::text(&p.title));
/// let year = Field::new("year", |p: &Paper| FieldValue::text(p.year.to_string()));
///
/// let paper = Paper { title: "Deep Triage".into(), year: 2021 };
/// assert_eq!(title.value(&paper), FieldValue::text("Deep Triage"));
/// assert_eq!(year.name(), "year");
/// ```
pub struct Field<R> {
    name: String,
    accessor: Accessor<R>,
}

impl<R> Field<R> {
    /// Creates a field from a name and an accessor closure.
    pub fn new<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            accessor: Box::new(accessor),
        }
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Projects `record` through the accessor.
    #[must_use]
    pub fn value(&self, record: &R) -> FieldValue {
        (self.accessor)(record)
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
