//! Link record entity: one shortcode → long URL mapping.

/// A registered shortcode mapping.
///
/// Records are immutable once created and are never deleted: expiry is a
/// logical state derived from the clock, expired records stay queryable for
/// analytics, and their codes are never reused within a registry instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// Destination, an absolute URL with scheme and host.
    pub long_url: String,
    /// 3-16 alphanumeric characters, unique across the registry lifetime.
    pub shortcode: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Milliseconds since the Unix epoch; always greater than `created_at`.
    pub expires_at: i64,
}

impl LinkRecord {
    /// True once the validity window has passed.
    ///
    /// The boundary instant itself still resolves as live: expiry is strict
    /// `now > expires_at`, not `>=`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at
    }
}
