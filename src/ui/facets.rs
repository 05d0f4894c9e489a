//! Facet option lists with per-option record counts.
//!
//! Each filter key shown in the search bar has a [`FacetSpec`] describing its label,
//! how its options are ordered, and how many to show. Counts are always computed over
//! the full record list, independent of the active search and filters.

use crate::domain::Field;
use crate::ui::viewmodel::FilterOption;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// How the options of one facet are ordered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetOrder {
    /// Most frequent first; ties keep first-seen order.
    #[default]
    ByCount,

    /// Descending by value, comparing numerically when both values parse as integers.
    ByValueDesc,

    /// A fixed `(value, label)` list, shown even when a value has no records unless
    /// [`FacetSpec::hide_empty`] is set.
    Fixed(Vec<(String, String)>),
}

/// Presentation settings for one filter key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSpec {
    pub key: String,
    pub label: String,
    pub order: FacetOrder,
    pub limit: Option<usize>,
    pub hide_empty: bool,
}

impl FacetSpec {
    /// Creates a count-ordered facet with no limit.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            order: FacetOrder::ByCount,
            limit: None,
            hide_empty: false,
        }
    }

    /// Sets the option ordering.
    #[must_use]
    pub fn order(mut self, order: FacetOrder) -> Self {
        self.order = order;
        self
    }

    /// Shows at most `limit` options.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Drops options with no matching records.
    #[must_use]
    pub const fn hide_empty(mut self) -> Self {
        self.hide_empty = true;
        self
    }

    /// Label for `value` from a fixed option list.
    #[must_use]
    pub fn fixed_label(&self, value: &str) -> Option<&str> {
        match &self.order {
            FacetOrder::Fixed(options) => options
                .iter()
                .find(|(v, _)| v == value)
                .map(|(_, label)| label.as_str()),
            _ => None,
        }
    }
}

/// Builds the option list for one facet.
///
/// # Algorithm
///
/// 1. Collect distinct non-empty values in first-seen order, counting records per value
/// 2. Order according to [`FacetSpec::order`]
/// 3. Drop zero-count options if [`FacetSpec::hide_empty`] is set
/// 4. Truncate to [`FacetSpec::limit`]
/// 5. Mark options present in `selection` as checked
pub fn facet_options<R>(
    records: &[R],
    field: &Field<R>,
    spec: &FacetSpec,
    selection: Option<&BTreeSet<String>>,
) -> Vec<FilterOption> {
    let mut seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        for value in field.value(record).values() {
            let count = counts.entry(value.to_string()).or_insert_with(|| {
                seen.push(value.to_string());
                0
            });
            *count += 1;
        }
    }

    let count_of = |value: &str| counts.get(value).copied().unwrap_or(0);

    let mut options: Vec<(String, String, usize)> = match &spec.order {
        FacetOrder::Fixed(fixed) => fixed
            .iter()
            .map(|(value, label)| (value.clone(), label.clone(), count_of(value)))
            .collect(),
        FacetOrder::ByCount => {
            let mut options: Vec<_> = seen
                .into_iter()
                .map(|v| {
                    let count = count_of(&v);
                    (v.clone(), v, count)
                })
                .collect();
            options.sort_by(|a, b| b.2.cmp(&a.2));
            options
        }
        FacetOrder::ByValueDesc => {
            let mut options: Vec<_> = seen
                .into_iter()
                .map(|v| {
                    let count = count_of(&v);
                    (v.clone(), v, count)
                })
                .collect();
            options.sort_by(|a, b| compare_values(&b.0, &a.0));
            options
        }
    };

    if spec.hide_empty {
        options.retain(|(_, _, count)| *count > 0);
    }

    if let Some(limit) = spec.limit {
        options.truncate(limit);
    }

    options
        .into_iter()
        .map(|(value, label, count)| FilterOption {
            checked: selection.is_some_and(|s| s.contains(&value)),
            value,
            label,
            count,
        })
        .collect()
}

/// Orders integers numerically and everything else lexically.
fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;

    struct Pub {
        year: i32,
        journal: String,
        keywords: Vec<String>,
    }

    fn pubs() -> Vec<Pub> {
        let p = |year, journal: &str, keywords: &[&str]| Pub {
            year,
            journal: journal.to_string(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
        };
        vec![
            p(2019, "IEEE Access", &["ML", "Health"]),
            p(998, "Nature", &["ML"]),
            p(2021, "IEEE Access", &["NLP", "ML", "ML"]),
            p(2021, "", &[]),
        ]
    }

    fn year_field() -> Field<Pub> {
        Field::new("year", |p: &Pub| FieldValue::text(p.year.to_string()))
    }

    fn journal_field() -> Field<Pub> {
        Field::new("journal", |p: &Pub| FieldValue::text(&p.journal))
    }

    fn keyword_field() -> Field<Pub> {
        Field::new("keywords", |p: &Pub| FieldValue::list(p.keywords.clone()))
    }

    #[test]
    fn count_order_is_stable_and_skips_empty() {
        let spec = FacetSpec::new("journal", "Journal");
        let options = facet_options(&pubs(), &journal_field(), &spec, None);
        let values: Vec<_> = options.iter().map(|o| (o.value.as_str(), o.count)).collect();
        assert_eq!(values, vec![("IEEE Access", 2), ("Nature", 1)]);
    }

    #[test]
    fn list_values_count_once_per_record() {
        let spec = FacetSpec::new("keywords", "Keywords").limit(2);
        let options = facet_options(&pubs(), &keyword_field(), &spec, None);
        let values: Vec<_> = options.iter().map(|o| (o.value.as_str(), o.count)).collect();
        assert_eq!(values, vec![("ML", 3), ("Health", 1)]);
    }

    #[test]
    fn value_desc_compares_numbers() {
        let spec = FacetSpec::new("year", "Year").order(FacetOrder::ByValueDesc);
        let options = facet_options(&pubs(), &year_field(), &spec, None);
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["2021", "2019", "998"]);
    }

    #[test]
    fn fixed_order_keeps_zero_counts_and_labels() {
        let spec = FacetSpec::new("journal", "Journal").order(FacetOrder::Fixed(vec![
            ("Nature".into(), "Nature Portfolio".into()),
            ("Science".into(), "Science".into()),
        ]));
        let options = facet_options(&pubs(), &journal_field(), &spec, None);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Nature Portfolio");
        assert_eq!(options[0].count, 1);
        assert_eq!(options[1].count, 0);
        assert_eq!(spec.fixed_label("Nature"), Some("Nature Portfolio"));
    }

    #[test]
    fn hide_empty_drops_zero_count_fixed_options() {
        let spec = FacetSpec::new("journal", "Journal")
            .order(FacetOrder::Fixed(vec![
                ("Science".into(), "Science".into()),
                ("Nature".into(), "Nature Portfolio".into()),
            ]))
            .hide_empty();
        let options = facet_options(&pubs(), &journal_field(), &spec, None);
        let values: Vec<_> = options.iter().map(|o| (o.value.as_str(), o.count)).collect();
        assert_eq!(values, vec![("Nature", 1)]);
    }

    #[test]
    fn checked_reflects_selection() {
        let selection: BTreeSet<String> = ["Nature".to_string()].into_iter().collect();
        let spec = FacetSpec::new("journal", "Journal");
        let options = facet_options(&pubs(), &journal_field(), &spec, Some(&selection));
        assert!(!options[0].checked);
        assert!(options[1].checked);
    }
}
