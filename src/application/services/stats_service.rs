//! Read-only statistics over the registry and the click ledger.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{ClickEvent, LinkRecord};
use crate::domain::errors::StoreError;
use crate::domain::stores::{ClickLedger, LinkRegistry};
use crate::utils::clock::Clock;

/// One link with its click total, as shown in the aggregate view.
#[derive(Debug, Clone)]
pub struct LinkOverview {
    pub record: LinkRecord,
    pub total_clicks: usize,
    pub expired: bool,
}

/// Aggregate numbers across the whole registry.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_links: usize,
    pub total_clicks: usize,
    pub active_links: usize,
    pub expired_links: usize,
    /// Rounded to one decimal place.
    pub average_clicks_per_link: f64,
}

/// One link with its full click history, in insertion order.
#[derive(Debug, Clone)]
pub struct LinkDetails {
    pub record: LinkRecord,
    pub expired: bool,
    pub clicks: Vec<ClickEvent>,
}

/// The aggregate view a reporting collaborator reads.
///
/// Purely read-only: both stores are queried, nothing is written.
pub struct StatsService {
    registry: Arc<dyn LinkRegistry>,
    ledger: Arc<dyn ClickLedger>,
    clock: Arc<dyn Clock>,
}

impl StatsService {
    pub fn new(
        registry: Arc<dyn LinkRegistry>,
        ledger: Arc<dyn ClickLedger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            ledger,
            clock,
        }
    }

    /// Every link in insertion order with its click total, plus the summary.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    pub async fn list_links_with_stats(
        &self,
    ) -> Result<(StatsSummary, Vec<LinkOverview>), StoreError> {
        let links = self.registry.list_all().await?;
        let clicks = self.ledger.all().await?;
        let now_ms = self.clock.now_ms();

        let mut per_code: HashMap<&str, usize> = HashMap::new();
        for click in &clicks {
            *per_code.entry(click.shortcode.as_str()).or_insert(0) += 1;
        }

        let overviews: Vec<LinkOverview> = links
            .into_iter()
            .map(|record| LinkOverview {
                total_clicks: per_code.get(record.shortcode.as_str()).copied().unwrap_or(0),
                expired: record.is_expired(now_ms),
                record,
            })
            .collect();

        let total_links = overviews.len();
        let expired_links = overviews.iter().filter(|o| o.expired).count();
        let total_clicks = clicks.len();
        let average = if total_links == 0 {
            0.0
        } else {
            round1(total_clicks as f64 / total_links as f64)
        };

        let summary = StatsSummary {
            total_links,
            total_clicks,
            active_links: total_links - expired_links,
            expired_links,
            average_clicks_per_link: average,
        };

        Ok((summary, overviews))
    }

    /// The detail view for one shortcode.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the code was never registered. Expired links are
    /// reported with their full click history; expiry never hides analytics.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    pub async fn stats_for(&self, code: &str) -> Result<Option<LinkDetails>, StoreError> {
        let Some(record) = self.registry.get(code).await? else {
            return Ok(None);
        };

        let clicks = self.ledger.for_code(code).await?;

        Ok(Some(LinkDetails {
            expired: record.is_expired(self.clock.now_ms()),
            record,
            clicks,
        }))
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::MemoryStore;
    use crate::utils::clock::ManualClock;

    const NOW_MS: i64 = 1_700_000_000_000;

    fn record(code: &str, expires_at: i64) -> LinkRecord {
        LinkRecord {
            long_url: format!("https://example.com/{code}"),
            shortcode: code.to_string(),
            created_at: NOW_MS - 60_000,
            expires_at,
        }
    }

    fn click(code: &str) -> ClickEvent {
        ClickEvent {
            shortcode: code.to_string(),
            timestamp: NOW_MS,
            source: "Direct".to_string(),
            location: "Unknown".to_string(),
        }
    }

    async fn service_with_data() -> StatsService {
        let store = Arc::new(MemoryStore::new());

        store
            .insert_all(vec![
                record("live01", NOW_MS + 60_000),
                record("live02", NOW_MS + 60_000),
                record("gone01", NOW_MS - 1),
            ])
            .await
            .unwrap();

        store.append(click("live01")).await.unwrap();
        store.append(click("live01")).await.unwrap();
        store.append(click("gone01")).await.unwrap();

        StatsService::new(
            store.clone(),
            store,
            Arc::new(ManualClock::new(NOW_MS)),
        )
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let service = service_with_data().await;
        let (summary, overviews) = service.list_links_with_stats().await.unwrap();

        assert_eq!(summary.total_links, 3);
        assert_eq!(summary.total_clicks, 3);
        assert_eq!(summary.active_links, 2);
        assert_eq!(summary.expired_links, 1);
        assert_eq!(summary.average_clicks_per_link, 1.0);

        let codes: Vec<_> = overviews
            .iter()
            .map(|o| o.record.shortcode.as_str())
            .collect();
        assert_eq!(codes, vec!["live01", "live02", "gone01"]);
        assert_eq!(overviews[0].total_clicks, 2);
        assert_eq!(overviews[1].total_clicks, 0);
        assert!(overviews[2].expired);
    }

    #[tokio::test]
    async fn test_average_is_rounded_to_one_decimal() {
        let store = Arc::new(MemoryStore::new());
        store
            .insert_all(vec![
                record("aaa111", NOW_MS + 60_000),
                record("bbb222", NOW_MS + 60_000),
                record("ccc333", NOW_MS + 60_000),
            ])
            .await
            .unwrap();
        // 2 clicks over 3 links: 0.666... rounds to 0.7
        store.append(click("aaa111")).await.unwrap();
        store.append(click("bbb222")).await.unwrap();

        let service = StatsService::new(
            store.clone(),
            store,
            Arc::new(ManualClock::new(NOW_MS)),
        );
        let (summary, _) = service.list_links_with_stats().await.unwrap();

        assert_eq!(summary.average_clicks_per_link, 0.7);
    }

    #[tokio::test]
    async fn test_empty_registry_summary() {
        let store = Arc::new(MemoryStore::new());
        let service = StatsService::new(
            store.clone(),
            store,
            Arc::new(ManualClock::new(NOW_MS)),
        );

        let (summary, overviews) = service.list_links_with_stats().await.unwrap();

        assert_eq!(summary.total_links, 0);
        assert_eq!(summary.average_clicks_per_link, 0.0);
        assert!(overviews.is_empty());
    }

    #[tokio::test]
    async fn test_stats_for_known_and_unknown_codes() {
        let service = service_with_data().await;

        let details = service.stats_for("live01").await.unwrap().unwrap();
        assert_eq!(details.clicks.len(), 2);
        assert!(!details.expired);

        let gone = service.stats_for("gone01").await.unwrap().unwrap();
        assert!(gone.expired);
        assert_eq!(gone.clicks.len(), 1);

        assert!(service.stats_for("nosuch").await.unwrap().is_none());
    }
}
