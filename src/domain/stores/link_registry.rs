//! Store trait for the shortcode registry.

use async_trait::async_trait;

use crate::domain::entities::LinkRecord;
use crate::domain::errors::StoreError;

/// Single source of truth for shortcode existence and expiry.
///
/// The registry owns all [`LinkRecord`]s. Records are append-only: nothing
/// here mutates or deletes, so a code observed once stays taken for the
/// lifetime of the registry instance.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory default
/// - [`crate::infrastructure::persistence::SqliteStore`] - durable SQLite backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRegistry: Send + Sync {
    /// Returns whether a record with this shortcode exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Fetches the record for a shortcode.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found (expired records included)
    /// - `Ok(None)` if the code was never registered
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn get(&self, code: &str) -> Result<Option<LinkRecord>, StoreError>;

    /// Atomically inserts a batch of records.
    ///
    /// All records are committed or none are. Concurrent readers observe
    /// either the pre-batch or the fully-post-batch state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateShortcode`] if any incoming code is
    /// already registered (or repeated within the batch) at commit time;
    /// nothing is inserted in that case. This check is authoritative and
    /// protects against writers racing past the pipeline's snapshot.
    async fn insert_all(&self, records: Vec<LinkRecord>) -> Result<(), StoreError>;

    /// Lists every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn list_all(&self) -> Result<Vec<LinkRecord>, StoreError>;
}
