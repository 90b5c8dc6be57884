use serde::Serialize;

/// The `about` record of a community, as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityMetadata {
    pub subscribers: u64,
    /// Not every community reports this; absent means 0 for ranking.
    pub active_user_count: Option<u64>,
}

impl CommunityMetadata {
    pub fn new(subscribers: u64, active_user_count: Option<u64>) -> Self {
        Self {
            subscribers,
            active_user_count,
        }
    }
}

/// Activity metrics for one community at the moment it was analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommunityStats {
    pub subscribers: u64,
    pub active_users: u64,
    pub posts_last_24h: u64,
}
