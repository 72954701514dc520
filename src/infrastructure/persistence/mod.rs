//! Persistence backends for the link registry and click ledger.
//!
//! Both backends implement the same two store traits; which one a deployment
//! gets is purely a configuration decision. [`MemoryStore`] is the default,
//! [`SqliteStore`] is selected by setting `DATABASE_URL`.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
