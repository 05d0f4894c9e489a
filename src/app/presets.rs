//! Browse presets for the portfolio content types.
//!
//! Each content section of the site searches and filters its records the same way on
//! every visit. [`Browsable`] captures that per-type setup (search fields, filter fields,
//! facet presentation, copy) so a view can be built from records alone.
//!
//! # Example
//!
//! ```
//! use facetfolio::app::CollectionView;
//! use facetfolio::domain::Award;
//!
//! let awards = vec![
//!     Award::new("Research Fellowship", "Fellowship", 2021),
//!     Award::new("Hackathon Winner", "Innovation", 2019),
//! ];
//! let mut view = CollectionView::browse(awards);
//! view.set_filter_selection("year", "2021", true);
//!
//! let bar = view.search_bar();
//! assert_eq!(bar.summary.to_string(), "Showing 1 of 2 awards");
//! ```

use super::query::ViewConfig;
use super::state::CollectionView;
use crate::domain::{
    Activity, Award, BlogPost, Certification, FieldValue, Grant, Network, PostStatus, Project,
    ProjectStatus, Publication, Record,
};
use crate::ui::facets::{FacetOrder, FacetSpec};
use crate::ui::viewmodel::SearchFilterBarModel;

/// A record type with a standard search/filter setup.
pub trait Browsable: Record {
    /// Search and filter fields.
    fn view_config() -> ViewConfig<Self>;

    /// Facets shown in the filter bar, in display order.
    fn facets() -> Vec<FacetSpec>;

    /// Placeholder for the search input.
    fn placeholder() -> &'static str;

    /// Plural noun used in result summaries.
    fn noun() -> &'static str {
        Self::KIND
    }

    /// Whether the record belongs in the public listing at all (e.g. not a draft).
    fn is_listed(&self) -> bool {
        true
    }
}

impl<R: Browsable> CollectionView<R> {
    /// Creates a view over the listed records using the type's standard setup.
    #[must_use]
    pub fn browse(records: Vec<R>) -> Self {
        Self::new(listed(records), R::view_config())
    }

    /// Replaces the records, keeping only listed ones. Search and filters are kept.
    pub fn reload(&mut self, records: Vec<R>) {
        self.set_records(listed(records));
    }

    /// Computes the search bar view model using the type's facets and copy.
    #[must_use]
    pub fn search_bar(&self) -> SearchFilterBarModel {
        self.compute_viewmodel(&R::facets(), R::noun(), R::placeholder())
    }
}

fn listed<R: Browsable>(records: Vec<R>) -> Vec<R> {
    records.into_iter().filter(|record| record.is_listed()).collect()
}

fn fixed(options: &[(&str, &str)]) -> FacetOrder {
    FacetOrder::Fixed(
        options
            .iter()
            .map(|(value, label)| ((*value).to_string(), (*label).to_string()))
            .collect(),
    )
}

impl Browsable for Award {
    fn view_config() -> ViewConfig<Self> {
        ViewConfig::searching("title", |a: &Self| FieldValue::text(&a.title))
            .search("organization", |a: &Self| a.organization.clone().into())
            .search("description", |a: &Self| a.description.clone().into())
            .filter("category", |a: &Self| FieldValue::text(&a.category))
            .filter("year", |a: &Self| FieldValue::text(a.year.to_string()))
    }

    fn facets() -> Vec<FacetSpec> {
        vec![
            FacetSpec::new("category", "Category"),
            FacetSpec::new("year", "Year").order(FacetOrder::ByValueDesc),
        ]
    }

    fn placeholder() -> &'static str {
        "Search awards by title, organization, or description..."
    }
}

impl Browsable for Activity {
    fn view_config() -> ViewConfig<Self> {
        ViewConfig::searching("title", |a: &Self| FieldValue::text(&a.title))
            .search("organization", |a: &Self| FieldValue::text(&a.organization))
            .search("role", |a: &Self| FieldValue::text(&a.role))
            .search("description", |a: &Self| FieldValue::text(&a.description))
            .search("skills", |a: &Self| FieldValue::list(a.skills.clone()))
            .filter("type", |a: &Self| FieldValue::text(a.kind.as_str()))
            .filter("skills", |a: &Self| FieldValue::list(a.skills.clone()))
    }

    fn facets() -> Vec<FacetSpec> {
        vec![
            FacetSpec::new("type", "Type").order(fixed(&[
                ("volunteering", "Volunteering"),
                ("leadership", "Leadership"),
                ("other", "Other"),
            ])),
            FacetSpec::new("skills", "Skills").limit(10),
        ]
    }

    fn placeholder() -> &'static str {
        "Search activities by title, organization, role, or skill..."
    }
}

impl Browsable for Grant {
    fn view_config() -> ViewConfig<Self> {
        ViewConfig::searching("title", |g: &Self| FieldValue::text(&g.title))
            .search("fundingAgency", |g: &Self| FieldValue::text(&g.funding_agency))
            .search("location", |g: &Self| g.location.clone().into())
            .search("role", |g: &Self| FieldValue::text(&g.role))
            .filter("status", |g: &Self| FieldValue::text(&g.status))
            .filter("role", |g: &Self| FieldValue::text(&g.role))
            .filter("location", |g: &Self| g.location.clone().into())
    }

    fn facets() -> Vec<FacetSpec> {
        vec![
            FacetSpec::new("status", "Status"),
            FacetSpec::new("role", "Role"),
            FacetSpec::new("location", "Location"),
        ]
    }

    fn placeholder() -> &'static str {
        "Search grants by title, funding agency, role, or location..."
    }
}

impl Browsable for Project {
    fn view_config() -> ViewConfig<Self> {
        ViewConfig::searching("title", |p: &Self| FieldValue::text(&p.title))
            .search("description", |p: &Self| FieldValue::text(&p.description))
            .search("technologies", |p: &Self| FieldValue::list(p.technologies.clone()))
            .filter("status", |p: &Self| FieldValue::text(p.status.as_str()))
            .filter("technologies", |p: &Self| FieldValue::list(p.technologies.clone()))
    }

    fn facets() -> Vec<FacetSpec> {
        vec![
            FacetSpec::new("status", "Status").order(fixed(&[
                (ProjectStatus::Completed.as_str(), "Completed"),
                (ProjectStatus::InProgress.as_str(), "In Progress"),
                (ProjectStatus::Planned.as_str(), "Planned"),
            ])),
            FacetSpec::new("technologies", "Technologies").limit(10),
        ]
    }

    fn placeholder() -> &'static str {
        "Search projects by title, description, or technology..."
    }
}

impl Browsable for Publication {
    fn view_config() -> ViewConfig<Self> {
        ViewConfig::searching("title", |p: &Self| FieldValue::text(&p.title))
            .search("authors", |p: &Self| FieldValue::text(&p.authors))
            .search("journal", |p: &Self| FieldValue::text(&p.journal))
            .search("keywords", |p: &Self| FieldValue::list(p.keywords.clone()))
            .filter("year", |p: &Self| FieldValue::text(p.year.to_string()))
            .filter("journal", |p: &Self| FieldValue::text(&p.journal))
            .filter("keywords", |p: &Self| FieldValue::list(p.keywords.clone()))
    }

    fn facets() -> Vec<FacetSpec> {
        vec![
            FacetSpec::new("year", "Year").order(FacetOrder::ByValueDesc),
            FacetSpec::new("journal", "Journal").limit(8),
            FacetSpec::new("keywords", "Keywords").limit(10),
        ]
    }

    fn placeholder() -> &'static str {
        "Search publications by title, author, journal, or keyword..."
    }
}

impl Browsable for Certification {
    fn view_config() -> ViewConfig<Self> {
        ViewConfig::searching("title", |c: &Self| FieldValue::text(&c.title))
            .search("issuer", |c: &Self| FieldValue::text(&c.issuer))
            .search("description", |c: &Self| c.description.clone().into())
            .search("skills", |c: &Self| FieldValue::list(c.skills.clone()))
            .filter("issuer", |c: &Self| FieldValue::text(&c.issuer))
            .filter("skills", |c: &Self| FieldValue::list(c.skills.clone()))
            .filter("status", |c: &Self| {
                FieldValue::text(c.validity(chrono::Utc::now().date_naive()))
            })
    }

    fn facets() -> Vec<FacetSpec> {
        vec![
            FacetSpec::new("issuer", "Issuer"),
            FacetSpec::new("skills", "Skills").limit(10),
            FacetSpec::new("status", "Status")
                .order(fixed(&[("valid", "Valid"), ("expired", "Expired")])),
        ]
    }

    fn placeholder() -> &'static str {
        "Search certifications by title, issuer, or skill..."
    }
}

impl Browsable for BlogPost {
    fn view_config() -> ViewConfig<Self> {
        ViewConfig::searching("title", |p: &Self| FieldValue::text(&p.title))
            .search("excerpt", |p: &Self| FieldValue::text(&p.excerpt))
            .search("content", |p: &Self| FieldValue::text(&p.content))
            .search("tags", |p: &Self| FieldValue::list(p.tags.clone()))
            .filter("tags", |p: &Self| FieldValue::list(p.tags.clone()))
            .filter("readTime", |p: &Self| FieldValue::text(p.read_time_bucket()))
    }

    fn facets() -> Vec<FacetSpec> {
        vec![
            FacetSpec::new("tags", "Tags").limit(10),
            FacetSpec::new("readTime", "Read Time")
                .order(fixed(&[
                    ("1-5", "1-5 min"),
                    ("6-10", "6-10 min"),
                    ("11+", "11+ min"),
                ]))
                .hide_empty(),
        ]
    }

    fn placeholder() -> &'static str {
        "Search blog posts by title, content, or tags..."
    }

    fn noun() -> &'static str {
        "posts"
    }

    fn is_listed(&self) -> bool {
        self.status == PostStatus::Published
    }
}

impl Browsable for Network {
    fn view_config() -> ViewConfig<Self> {
        ViewConfig::searching("role", |n: &Self| FieldValue::text(&n.role))
    }

    fn facets() -> Vec<FacetSpec> {
        Vec::new()
    }

    fn placeholder() -> &'static str {
        "Search networks by role..."
    }
}
