//! Store trait for the click-event ledger.

use async_trait::async_trait;

use crate::domain::entities::ClickEvent;
use crate::domain::errors::StoreError;

/// Append-only ledger of click events.
///
/// Events are trusted input, constructed only by the redirect resolver;
/// `append` performs no validation. Insertion order is the only ordering
/// guarantee — queries never resort by timestamp.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory default
/// - [`crate::infrastructure::persistence::SqliteStore`] - durable SQLite backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickLedger: Send + Sync {
    /// Appends one event.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn append(&self, event: ClickEvent) -> Result<(), StoreError>;

    /// All events for one shortcode, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn for_code(&self, code: &str) -> Result<Vec<ClickEvent>, StoreError>;

    /// Every event in insertion order, for aggregate statistics.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn all(&self) -> Result<Vec<ClickEvent>, StoreError>;
}
