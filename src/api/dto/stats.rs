//! DTOs for the statistics endpoints.

use serde::Serialize;

use crate::application::services::{LinkDetails, LinkOverview, StatsSummary};
use crate::domain::entities::ClickEvent;

/// Aggregate statistics across the whole registry.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub summary: SummaryDto,
    pub links: Vec<LinkStatsDto>,
}

#[derive(Debug, Serialize)]
pub struct SummaryDto {
    pub total_links: usize,
    pub total_clicks: usize,
    pub active_links: usize,
    pub expired_links: usize,
    pub average_clicks_per_link: f64,
}

impl From<StatsSummary> for SummaryDto {
    fn from(s: StatsSummary) -> Self {
        Self {
            total_links: s.total_links,
            total_clicks: s.total_clicks,
            active_links: s.active_links,
            expired_links: s.expired_links,
            average_clicks_per_link: s.average_clicks_per_link,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinkStatsDto {
    pub shortcode: String,
    pub long_url: String,
    pub created_at: i64,
    pub expires_at: i64,
    pub status: &'static str,
    pub total_clicks: usize,
}

impl From<LinkOverview> for LinkStatsDto {
    fn from(o: LinkOverview) -> Self {
        Self {
            status: status_label(o.expired),
            shortcode: o.record.shortcode,
            long_url: o.record.long_url,
            created_at: o.record.created_at,
            expires_at: o.record.expires_at,
            total_clicks: o.total_clicks,
        }
    }
}

/// Detailed statistics for one link, clicks in insertion order.
#[derive(Debug, Serialize)]
pub struct StatsDetailResponse {
    pub shortcode: String,
    pub long_url: String,
    pub created_at: i64,
    pub expires_at: i64,
    pub status: &'static str,
    pub total_clicks: usize,
    pub clicks: Vec<ClickDto>,
}

impl From<LinkDetails> for StatsDetailResponse {
    fn from(d: LinkDetails) -> Self {
        Self {
            status: status_label(d.expired),
            shortcode: d.record.shortcode,
            long_url: d.record.long_url,
            created_at: d.record.created_at,
            expires_at: d.record.expires_at,
            total_clicks: d.clicks.len(),
            clicks: d.clicks.into_iter().map(ClickDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClickDto {
    pub timestamp: i64,
    pub source: String,
    pub location: String,
}

impl From<ClickEvent> for ClickDto {
    fn from(c: ClickEvent) -> Self {
        Self {
            timestamp: c.timestamp,
            source: c.source,
            location: c.location,
        }
    }
}

fn status_label(expired: bool) -> &'static str {
    if expired { "expired" } else { "active" }
}
