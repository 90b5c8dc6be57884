use crate::domain::entities::community_stats::{CommunityMetadata, CommunityStats};
use chrono::{DateTime, Utc};

/// Length of the activity window in seconds (24 hours).
pub const ACTIVITY_WINDOW_SECS: f64 = 86_400.0;

/// Current wall-clock time as fractional seconds since the epoch.
pub fn epoch_seconds(now: DateTime<Utc>) -> f64 {
    now.timestamp_millis() as f64 / 1000.0
}

/// Count posts whose age is strictly below the activity window.
///
/// Age is `now - created`. A post dated in the future has a negative age and
/// therefore counts as recent.
pub fn count_recent_posts(created_utc: &[f64], now: f64) -> u64 {
    created_utc
        .iter()
        .filter(|&&created| now - created < ACTIVITY_WINDOW_SECS)
        .count() as u64
}

/// Combine a metadata record with post timestamps into activity stats.
pub fn compute_stats(
    metadata: &CommunityMetadata,
    created_utc: &[f64],
    now: f64,
) -> CommunityStats {
    CommunityStats {
        subscribers: metadata.subscribers,
        active_users: metadata.active_user_count.unwrap_or(0),
        posts_last_24h: count_recent_posts(created_utc, now),
    }
}
