use crate::domain::entities::community_stats::CommunityStats;
use crate::domain::error::DomainError;
use crate::domain::ports::community_source::CommunitySource;
use crate::domain::values::activity::{compute_stats, epoch_seconds};
use crate::domain::values::community_name;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fetch + analyze for single communities, and ordered fan-out over several.
pub struct AnalyzeUseCase {
    source: Arc<dyn CommunitySource>,
    post_limit: u32,
    concurrency: usize,
}

impl AnalyzeUseCase {
    pub fn new(source: Arc<dyn CommunitySource>, post_limit: u32, concurrency: usize) -> Self {
        Self {
            source,
            post_limit,
            concurrency: concurrency.max(1),
        }
    }

    /// Analyze one community, surfacing the first failure.
    pub async fn try_analyze(&self, community: &str) -> Result<CommunityStats, DomainError> {
        let now = epoch_seconds(Utc::now());
        let name = community_name::normalize(community)?;

        let metadata = self.source.fetch_about(&name).await?;
        let created = self
            .source
            .fetch_recent_posts(&name, self.post_limit)
            .await?;

        let stats = compute_stats(&metadata, &created, now);
        debug!(
            community = %name,
            subscribers = stats.subscribers,
            active_users = stats.active_users,
            posts_last_24h = stats.posts_last_24h,
            "analyzed"
        );
        Ok(stats)
    }

    /// Analyze one community; any fetch or decode failure yields `None`.
    pub async fn analyze(&self, community: &str) -> Option<CommunityStats> {
        match self.try_analyze(community).await {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!(
                    community,
                    source = self.source.name(),
                    "Error analyzing community: {e}"
                );
                None
            }
        }
    }

    /// Analyze each community, up to `concurrency` at a time.
    /// Results are returned in input order regardless of completion order.
    pub async fn analyze_many(&self, communities: &[String]) -> Vec<Option<CommunityStats>> {
        stream::iter(communities)
            .map(|community| self.analyze(community))
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
