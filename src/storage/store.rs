//! One JSON repository per content kind under a shared data directory.

use super::json::JsonRepository;
use crate::domain::error::Result;
use crate::domain::{
    Activity, Award, BlogPost, Certification, Grant, Network, Project, Publication,
};
use std::path::{Path, PathBuf};

/// The full set of portfolio content repositories.
#[derive(Debug)]
pub struct ContentStore {
    root: PathBuf,
    pub awards: JsonRepository<Award>,
    pub activities: JsonRepository<Activity>,
    pub grants: JsonRepository<Grant>,
    pub projects: JsonRepository<Project>,
    pub publications: JsonRepository<Publication>,
    pub certifications: JsonRepository<Certification>,
    pub blogs: JsonRepository<BlogPost>,
    pub networks: JsonRepository<Network>,
}

impl ContentStore {
    /// Opens (or lazily creates) every repository under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or an existing file fails
    /// to load.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let _span = tracing::debug_span!("open_content_store", root = ?root).entered();

        std::fs::create_dir_all(&root)?;

        Ok(Self {
            awards: JsonRepository::in_dir(&root)?,
            activities: JsonRepository::in_dir(&root)?,
            grants: JsonRepository::in_dir(&root)?,
            projects: JsonRepository::in_dir(&root)?,
            publications: JsonRepository::in_dir(&root)?,
            certifications: JsonRepository::in_dir(&root)?,
            blogs: JsonRepository::in_dir(&root)?,
            networks: JsonRepository::in_dir(&root)?,
            root,
        })
    }

    /// Directory holding the repository files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
