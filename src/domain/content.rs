//! Portfolio content types.
//!
//! Each type mirrors one content section of the portfolio site (awards, activities,
//! grants, projects, publications, certifications, blog posts, networks). Records use
//! the camelCase wire names of the content API and accept the API's `_id` key as an
//! alias for `id`.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A persisted content record with a string identifier.
///
/// `KIND` names the collection and doubles as the storage file stem.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + 'static {
    /// Collection name, e.g. `"awards"`.
    const KIND: &'static str;

    /// The record's identifier. Empty for records not yet stored.
    fn id(&self) -> &str;

    /// Replaces the record's identifier.
    fn set_id(&mut self, id: String);
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

/// An award or honour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    pub year: i32,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Award {
    /// Creates an unsaved award.
    pub fn new(title: impl Into<String>, category: impl Into<String>, year: i32) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            organization: None,
            year,
            category: category.into(),
            description: None,
        }
    }
}

/// Category of an extracurricular activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Volunteering,
    Leadership,
    Other,
}

impl ActivityKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Volunteering => "volunteering",
            Self::Leadership => "leadership",
            Self::Other => "other",
        }
    }
}

/// A volunteering, leadership, or other activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    pub organization: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub role: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Activity {
    /// Returns `true` when the activity has no end date or ends after `today`.
    #[must_use]
    pub fn is_ongoing(&self, today: NaiveDate) -> bool {
        self.end_date.map_or(true, |end| end >= today)
    }
}

/// A research grant or funded project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    pub funding_agency: String,
    #[serde(default)]
    pub amount: Option<String>,
    pub role: String,
    pub status: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Lifecycle of a research project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

/// A research project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub link: Option<String>,
}

/// A peer-reviewed publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: i32,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
}

/// A professional certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

impl Certification {
    /// Validity label on `today`: `"valid"` unless an expiry date has passed.
    #[must_use]
    pub fn validity(&self, today: NaiveDate) -> &'static str {
        match self.expiry_date {
            Some(expiry) if expiry <= today => "expired",
            _ => "valid",
        }
    }
}

/// Publication state of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Published,
    Draft,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub read_time: u32,
    #[serde(default)]
    pub published_at: Option<NaiveDate>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl BlogPost {
    /// Read-time bucket: `"1-5"`, `"6-10"` or `"11+"` minutes.
    #[must_use]
    pub const fn read_time_bucket(&self) -> &'static str {
        match self.read_time {
            0..=5 => "1-5",
            6..=10 => "6-10",
            _ => "11+",
        }
    }
}

/// Kind of professional network involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Editorial,
    Membership,
    Advisory,
    Mentorship,
}

impl NetworkKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editorial => "editorial",
            Self::Membership => "membership",
            Self::Advisory => "advisory",
            Self::Mentorship => "mentorship",
        }
    }
}

/// An editorial board seat, membership, advisory or mentorship role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub role: String,
    pub organization: String,
    #[serde(rename = "type")]
    pub kind: NetworkKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
}

impl_record!(Award, "awards");
impl_record!(Activity, "activities");
impl_record!(Grant, "grants");
impl_record!(Project, "projects");
impl_record!(Publication, "publications");
impl_record!(Certification, "certifications");
impl_record!(BlogPost, "blogs");
impl_record!(Network, "networks");
