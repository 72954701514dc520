//! Click event entity: one recorded resolution of a live shortcode.

/// `source` value recorded when no referrer accompanies the resolution.
pub const DIRECT_SOURCE: &str = "Direct";

/// `location` value recorded when country lookup fails or is disabled.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// One click, appended to the ledger exactly once per successful resolution.
///
/// The `shortcode` is a join key into the registry, not a live reference: it
/// may point at a record that has since expired and never causes deletion.
/// Events are never mutated or removed; insertion order is the only ordering
/// guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub shortcode: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Referrer that led here, or [`DIRECT_SOURCE`].
    pub source: String,
    /// Best-effort country name, [`UNKNOWN_LOCATION`] when lookup fails.
    pub location: String,
}
