use crate::domain::entities::community_stats::CommunityMetadata;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Default number of recent posts requested per community.
pub const DEFAULT_POST_LIMIT: u32 = 50;

/// Read access to a community platform.
///
/// The two operations fail independently; callers treat either failure as
/// "no data" for that community.
#[async_trait]
pub trait CommunitySource: Send + Sync {
    /// Source name for logging (e.g., "reddit").
    fn name(&self) -> &str;

    /// Subscriber count and optional active-user count.
    async fn fetch_about(&self, community: &str) -> Result<CommunityMetadata, DomainError>;

    /// Creation timestamps (seconds since epoch) of the newest `limit` posts.
    async fn fetch_recent_posts(
        &self,
        community: &str,
        limit: u32,
    ) -> Result<Vec<f64>, DomainError>;
}
