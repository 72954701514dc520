//! In-memory store: the default backend.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{ClickEvent, LinkRecord};
use crate::domain::errors::StoreError;
use crate::domain::stores::{ClickLedger, LinkRegistry};

/// Insertion-ordered link table with a code index for O(1) lookups.
#[derive(Debug, Default)]
struct LinkTable {
    order: Vec<LinkRecord>,
    index: HashMap<String, usize>,
}

/// In-memory registry + ledger.
///
/// Writes take the table's write lock, so at most one mutation is in flight
/// per table and readers observe either the pre-batch or fully-post-batch
/// state, never a partial insert.
#[derive(Debug, Default)]
pub struct MemoryStore {
    links: RwLock<LinkTable>,
    clicks: RwLock<Vec<ClickEvent>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRegistry for MemoryStore {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        Ok(self.links.read().await.index.contains_key(code))
    }

    async fn get(&self, code: &str) -> Result<Option<LinkRecord>, StoreError> {
        let table = self.links.read().await;
        Ok(table.index.get(code).map(|&pos| table.order[pos].clone()))
    }

    async fn insert_all(&self, records: Vec<LinkRecord>) -> Result<(), StoreError> {
        let mut table = self.links.write().await;

        let mut incoming: HashSet<&str> = HashSet::with_capacity(records.len());
        for record in &records {
            if table.index.contains_key(&record.shortcode)
                || !incoming.insert(record.shortcode.as_str())
            {
                return Err(StoreError::DuplicateShortcode {
                    code: record.shortcode.clone(),
                });
            }
        }

        for record in records {
            let pos = table.order.len();
            table.index.insert(record.shortcode.clone(), pos);
            table.order.push(record);
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<LinkRecord>, StoreError> {
        Ok(self.links.read().await.order.clone())
    }
}

#[async_trait]
impl ClickLedger for MemoryStore {
    async fn append(&self, event: ClickEvent) -> Result<(), StoreError> {
        self.clicks.write().await.push(event);
        Ok(())
    }

    async fn for_code(&self, code: &str) -> Result<Vec<ClickEvent>, StoreError> {
        Ok(self
            .clicks
            .read()
            .await
            .iter()
            .filter(|c| c.shortcode == code)
            .cloned()
            .collect())
    }

    async fn all(&self) -> Result<Vec<ClickEvent>, StoreError> {
        Ok(self.clicks.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str) -> LinkRecord {
        LinkRecord {
            long_url: format!("https://example.com/{code}"),
            shortcode: code.to_string(),
            created_at: 1_000,
            expires_at: 1_801_000,
        }
    }

    fn click(code: &str, timestamp: i64) -> ClickEvent {
        ClickEvent {
            shortcode: code.to_string(),
            timestamp,
            source: "Direct".to_string(),
            location: "Unknown".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryStore::new();

        store.insert_all(vec![record("abc123")]).await.unwrap();

        assert!(store.exists("abc123").await.unwrap());
        assert!(!store.exists("other1").await.unwrap());

        let found = store.get("abc123").await.unwrap().unwrap();
        assert_eq!(found.long_url, "https://example.com/abc123");

        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let store = MemoryStore::new();

        store
            .insert_all(vec![record("zzz999"), record("aaa111")])
            .await
            .unwrap();
        store.insert_all(vec![record("mmm555")]).await.unwrap();

        let codes: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.shortcode)
            .collect();
        assert_eq!(codes, vec!["zzz999", "aaa111", "mmm555"]);
    }

    #[tokio::test]
    async fn test_insert_all_rejects_existing_code_wholesale() {
        let store = MemoryStore::new();
        store.insert_all(vec![record("taken1")]).await.unwrap();

        let result = store
            .insert_all(vec![record("fresh1"), record("taken1")])
            .await;

        assert!(matches!(
            result,
            Err(StoreError::DuplicateShortcode { code }) if code == "taken1"
        ));
        // the whole batch must be rolled back, including the fresh code
        assert!(!store.exists("fresh1").await.unwrap());
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_all_rejects_duplicate_within_batch() {
        let store = MemoryStore::new();

        let result = store
            .insert_all(vec![record("same12"), record("same12")])
            .await;

        assert!(matches!(
            result,
            Err(StoreError::DuplicateShortcode { .. })
        ));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ledger_append_and_query_order() {
        let store = MemoryStore::new();

        // out-of-order timestamps on purpose: insertion order must win
        store.append(click("abc123", 300)).await.unwrap();
        store.append(click("other1", 100)).await.unwrap();
        store.append(click("abc123", 200)).await.unwrap();

        let for_abc = store.for_code("abc123").await.unwrap();
        let timestamps: Vec<_> = for_abc.iter().map(|c| c.timestamp).collect();
        assert_eq!(timestamps, vec![300, 200]);

        assert_eq!(store.all().await.unwrap().len(), 3);
        assert!(store.for_code("nosuch").await.unwrap().is_empty());
    }
}
