//! In-memory repository.
//!
//! Keeps records in a `Vec` for the lifetime of the value. Used for seeded demo
//! content and tests, and as the working set behind [`JsonRepository`].
//!
//! [`JsonRepository`]: crate::storage::JsonRepository

use super::backend::{generate_id, Repository};
use crate::domain::error::{FacetfolioError, Result};
use crate::domain::Record;

/// Repository backed by an owned `Vec`.
#[derive(Debug, Clone)]
pub struct MemoryRepository<R> {
    records: Vec<R>,
}

impl<R: Record> MemoryRepository<R> {
    /// Creates an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Creates a repository seeded with `records`, assigning ids where missing.
    #[must_use]
    pub fn with_records(records: Vec<R>) -> Self {
        Self::seeded(records).0
    }

    /// Seeds like [`with_records`](Self::with_records) and also returns how many
    /// records received a new id (missing or duplicate).
    pub(crate) fn seeded(records: Vec<R>) -> (Self, usize) {
        let mut repo = Self::new();
        let mut assigned = 0;
        for mut record in records {
            if record.id().is_empty() || repo.contains(record.id()) {
                record.set_id(generate_id(|id| repo.contains(id)));
                assigned += 1;
            }
            repo.records.push(record);
        }
        (repo, assigned)
    }

    /// Borrows the stored records.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the repository holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<R: Record> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Repository<R> for MemoryRepository<R> {
    fn list(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn get(&self, id: &str) -> Result<Option<R>> {
        Ok(self.position(id).map(|idx| self.records[idx].clone()))
    }

    fn create(&mut self, mut record: R) -> Result<R> {
        let _span = tracing::debug_span!("memory_create", kind = R::KIND).entered();

        if record.id().is_empty() {
            record.set_id(generate_id(|id| self.contains(id)));
        } else if self.contains(record.id()) {
            return Err(FacetfolioError::Storage(format!(
                "duplicate {} id: {}",
                R::KIND,
                record.id()
            )));
        }

        tracing::debug!(id = %record.id(), "record created");
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, id: &str, patch: &mut dyn FnMut(&mut R)) -> Result<Option<R>> {
        let _span = tracing::debug_span!("memory_update", kind = R::KIND, id = %id).entered();

        let Some(idx) = self.position(id) else {
            tracing::debug!("record not found");
            return Ok(None);
        };

        let record = &mut self.records[idx];
        patch(record);
        record.set_id(id.to_string());

        Ok(Some(record.clone()))
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let _span = tracing::debug_span!("memory_delete", kind = R::KIND, id = %id).entered();

        let Some(idx) = self.position(id) else {
            return Ok(false);
        };
        self.records.remove(idx);
        Ok(true)
    }
}
