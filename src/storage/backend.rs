//! Repository abstraction.
//!
//! This module defines the [`Repository`] trait that abstracts over where content
//! records live. Views never talk to a repository directly; callers list records, hand
//! them to a view, and re-list after a mutation.
//!
//! # Design Philosophy
//!
//! The trait mirrors the operations the dashboard actually performs (list, fetch one,
//! create, patch, delete), not a generic ORM.

use crate::domain::error::Result;
use crate::domain::Record;

/// Abstraction over content record storage.
///
/// Records are returned in insertion order.
///
/// # Implementations
///
/// - [`MemoryRepository`](crate::storage::MemoryRepository): in-process `Vec`
/// - [`JsonRepository`](crate::storage::JsonRepository): JSON file with atomic writes
pub trait Repository<R: Record>: Send {
    /// Returns every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn list(&self) -> Result<Vec<R>>;

    /// Retrieves a record by id, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get(&self, id: &str) -> Result<Option<R>>;

    /// Stores a new record and returns it with its final id.
    ///
    /// Records with an empty id receive a generated one.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already taken or the write fails.
    fn create(&mut self, record: R) -> Result<R>;

    /// Applies `patch` to the record with `id` and returns the updated record.
    ///
    /// Returns `Ok(None)` if no record has that id. The patch cannot change the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update(&mut self, id: &str, patch: &mut dyn FnMut(&mut R)) -> Result<Option<R>>;

    /// Deletes the record with `id`, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete(&mut self, id: &str) -> Result<bool>;
}

/// Generates a millisecond-timestamp id not accepted by `taken`.
pub(crate) fn generate_id(taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = chrono::Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !taken(&id) {
            return id;
        }
        candidate = candidate.saturating_add(1);
    }
}
