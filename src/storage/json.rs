//! JSON file-based repository.
//!
//! This module provides a simple, human-readable repository using JSON serialization,
//! one file per content kind. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads entire file into memory once
//! - **Write**: O(n) - serializes and writes entire dataset
//! - **Best for**: hundreds of records per kind, infrequent writes

use super::backend::Repository;
use super::memory::MemoryRepository;
use crate::domain::error::{FacetfolioError, Result};
use crate::domain::Record;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// On-disk container read from a repository file.
#[derive(Debug, Deserialize)]
#[serde(bound = "R: Record")]
struct StorageData<R> {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored records, in insertion order.
    #[serde(default = "Vec::new")]
    records: Vec<R>,
}

/// Borrowed view of the container for serialization.
#[derive(Serialize)]
#[serde(bound = "R: Record")]
struct StorageDataRef<'a, R> {
    version: u32,
    records: &'a [R],
}

/// JSON file repository.
///
/// The entire collection is kept in memory and persisted after each modification. A
/// modification whose save fails is rolled back, so memory never holds changes the
/// caller was told failed.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`; share it behind a lock if needed.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "records": [
///     { "id": "1718000000000", "title": "Research Fellowship", "year": 2021, "category": "Fellowship" }
///   ]
/// }
/// ```
#[derive(Debug)]
pub struct JsonRepository<R: Record> {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory working set, loaded on creation.
    data: MemoryRepository<R>,

    /// Tracks accepted changes not yet on disk (ids assigned on load whose save
    /// failed).
    dirty: bool,
}

impl<R: Record> JsonRepository<R> {
    /// Creates or opens a JSON repository at `file_path`.
    ///
    /// If the file exists, loads existing records. Otherwise starts empty; the file is
    /// written on the first modification. Parent directories are created automatically.
    ///
    /// Records stored without an id (or with a duplicate one) are assigned a fresh id,
    /// which is written back immediately so it stays stable across reopens. If that
    /// write fails the repository still opens and retries on the next save.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON or an unsupported version
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, kind = R::KIND, "initializing JSON repository");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let records = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty repository");
            Vec::new()
        };

        let (data, assigned) = MemoryRepository::seeded(records);
        let mut repo = Self {
            file_path,
            data,
            dirty: assigned > 0,
        };

        if repo.dirty {
            tracing::debug!(assigned, "persisting ids assigned on load");
            if let Err(e) = repo.save_to_file() {
                tracing::error!(error = %e, "failed to persist assigned ids");
            }
        }

        tracing::debug!(record_count = repo.data.len(), "repository initialized");
        Ok(repo)
    }

    /// Opens `<dir>/<KIND>.json`.
    ///
    /// # Errors
    ///
    /// Same as [`JsonRepository::new`].
    pub fn in_dir(dir: &Path) -> Result<Self> {
        Self::new(dir.join(format!("{}.json", R::KIND)))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads records from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON, or was written
    /// by a newer format version.
    fn load_from_file(path: &Path) -> Result<Vec<R>> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData<R> = serde_json::from_str(&contents)
            .map_err(|e| FacetfolioError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(FacetfolioError::Storage(format!(
                "unsupported storage version {} in {}",
                data.version,
                path.display()
            )));
        }

        tracing::debug!(
            version = data.version,
            records = data.records.len(),
            "loaded repository data"
        );

        Ok(data.records)
    }

    /// Saves records to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving repository data");

        let container = StorageDataRef {
            version: FORMAT_VERSION,
            records: self.data.records(),
        };
        let json = serde_json::to_string_pretty(&container)
            .map_err(|e| FacetfolioError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("repository saved successfully");
        Ok(())
    }

    /// Saves a modification already applied to `self.data`.
    ///
    /// On failure `self.data` is restored from `snapshot` and the error returned.
    fn commit(&mut self, snapshot: MemoryRepository<R>) -> Result<()> {
        let was_dirty = self.dirty;
        self.dirty = true;

        if let Err(e) = self.save_to_file() {
            tracing::error!(error = %e, "save failed, rolling back");
            self.data = snapshot;
            self.dirty = was_dirty;
            return Err(e);
        }
        Ok(())
    }
}

impl<R: Record> Repository<R> for JsonRepository<R> {
    fn list(&self) -> Result<Vec<R>> {
        let _span = tracing::debug_span!("json_list", kind = R::KIND).entered();
        self.data.list()
    }

    fn get(&self, id: &str) -> Result<Option<R>> {
        self.data.get(id)
    }

    fn create(&mut self, record: R) -> Result<R> {
        let _span = tracing::debug_span!("json_create", kind = R::KIND).entered();

        let snapshot = self.data.clone();
        let created = self.data.create(record)?;
        self.commit(snapshot)?;
        Ok(created)
    }

    fn update(&mut self, id: &str, patch: &mut dyn FnMut(&mut R)) -> Result<Option<R>> {
        let _span = tracing::debug_span!("json_update", kind = R::KIND, id = %id).entered();

        let snapshot = self.data.clone();
        let updated = self.data.update(id, patch)?;
        if updated.is_some() {
            self.commit(snapshot)?;
        }
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let _span = tracing::debug_span!("json_delete", kind = R::KIND, id = %id).entered();

        let snapshot = self.data.clone();
        let deleted = self.data.delete(id)?;
        if deleted {
            self.commit(snapshot)?;
        }
        Ok(deleted)
    }
}

impl<R: Record> Drop for JsonRepository<R> {
    /// Flushes accepted changes still pending, i.e. ids assigned on load.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Award;

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("awards.json");

        let id = {
            let mut repo: JsonRepository<Award> = JsonRepository::new(path.clone()).unwrap();
            repo.create(Award::new("A", "Fellowship", 2019)).unwrap();
            repo.create(Award::new("B", "Innovation", 2020)).unwrap().id
        };

        let mut repo: JsonRepository<Award> = JsonRepository::new(path).unwrap();
        let titles: Vec<_> = repo.list().unwrap().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["A", "B"]);

        assert!(repo.delete(&id).unwrap());
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_not_created_until_write() {
        let dir = tempfile::tempdir().unwrap();
        let repo: JsonRepository<Award> = JsonRepository::in_dir(dir.path()).unwrap();
        assert!(!repo.path().exists());
        assert!(repo.path().ends_with("awards.json"));
    }

    #[test]
    fn invalid_json_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("awards.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonRepository::<Award>::new(path);
        assert!(matches!(result, Err(FacetfolioError::Storage(_))));
    }

    #[test]
    fn newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("awards.json");
        std::fs::write(&path, r#"{"version": 99, "records": []}"#).unwrap();

        let result = JsonRepository::<Award>::new(path);
        assert!(matches!(result, Err(FacetfolioError::Storage(msg)) if msg.contains("99")));
    }

    #[test]
    fn update_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("awards.json");
        let mut repo: JsonRepository<Award> = JsonRepository::new(path.clone()).unwrap();
        let created = repo.create(Award::new("A", "Fellowship", 2019)).unwrap();

        repo.update(&created.id, &mut |a: &mut Award| a.category = "Recognition".into())
            .unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("Recognition"));
        assert!(on_disk.contains("\"version\": 1"));
    }

    #[test]
    fn ids_assigned_on_load_are_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("awards.json");
        std::fs::write(
            &path,
            r#"{"version":1,"records":[{"title":"A","year":2020,"category":"X"}]}"#,
        )
        .unwrap();

        let first_id = {
            let repo: JsonRepository<Award> = JsonRepository::new(path.clone()).unwrap();
            repo.list().unwrap()[0].id.clone()
        };
        assert!(!first_id.is_empty());
        assert!(std::fs::read_to_string(&path).unwrap().contains(&first_id));

        let repo: JsonRepository<Award> = JsonRepository::new(path).unwrap();
        assert_eq!(repo.list().unwrap()[0].id, first_id);
        assert!(repo.get(&first_id).unwrap().is_some());
    }

    /// Blocks the temp-file write by occupying its path with a directory.
    fn block_saves(repo: &JsonRepository<Award>) -> PathBuf {
        let tmp = repo.path().with_extension("tmp");
        std::fs::create_dir(&tmp).unwrap();
        tmp
    }

    #[test]
    fn failed_create_leaves_no_trace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("awards.json");

        {
            let mut repo: JsonRepository<Award> = JsonRepository::new(path.clone()).unwrap();
            let tmp = block_saves(&repo);

            assert!(repo.create(Award::new("Ghost", "Fellowship", 2020)).is_err());
            assert!(repo.list().unwrap().is_empty());

            std::fs::remove_dir(tmp).unwrap();
        }

        let repo: JsonRepository<Award> = JsonRepository::new(path).unwrap();
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn failed_update_and_delete_roll_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("awards.json");

        {
            let mut repo: JsonRepository<Award> = JsonRepository::new(path.clone()).unwrap();
            let created = repo.create(Award::new("A", "Fellowship", 2019)).unwrap();
            let tmp = block_saves(&repo);

            let result = repo.update(&created.id, &mut |a: &mut Award| a.title = "B".into());
            assert!(result.is_err());
            assert_eq!(repo.get(&created.id).unwrap().unwrap().title, "A");

            assert!(repo.delete(&created.id).is_err());
            assert!(repo.get(&created.id).unwrap().is_some());

            std::fs::remove_dir(tmp).unwrap();
        }

        let repo: JsonRepository<Award> = JsonRepository::new(path).unwrap();
        let titles: Vec<_> = repo.list().unwrap().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["A"]);
    }
}
