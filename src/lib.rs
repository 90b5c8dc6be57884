pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze::AnalyzeUseCase;
use crate::application::recommend::RecommendUseCase;
use crate::application::track::TrackUseCase;
use crate::config::Config;
use crate::domain::entities::community_stats::CommunityStats;
use crate::domain::entities::recommendation::RecommendationOutcome;
use crate::domain::entities::tracked_activity::TrackedActivity;
use crate::domain::error::DomainError;
use crate::domain::ports::community_source::{CommunitySource, DEFAULT_POST_LIMIT};
use crate::domain::values::topic_table::TopicTable;
use crate::infrastructure::reddit::client::RedditClient;
use std::sync::Arc;

pub struct SubPulse {
    topics: Arc<TopicTable>,
    analyze_uc: Arc<AnalyzeUseCase>,
    recommend_uc: RecommendUseCase,
    track_uc: TrackUseCase,
}

impl SubPulse {
    /// Wire the Reddit client and topic table from configuration.
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let source: Arc<dyn CommunitySource> = Arc::new(RedditClient::new(
            &config.base_url,
            &config.user_agent,
            config.timeout,
        )?);
        let topics = config.load_topics()?;

        Ok(Self::with_source(
            source,
            topics,
            config.post_limit,
            config.concurrency,
        ))
    }

    pub fn with_source(
        source: Arc<dyn CommunitySource>,
        topics: TopicTable,
        post_limit: u32,
        concurrency: usize,
    ) -> Self {
        let topics = Arc::new(topics);
        let analyze_uc = Arc::new(AnalyzeUseCase::new(source, post_limit, concurrency));

        Self {
            recommend_uc: RecommendUseCase::new(analyze_uc.clone(), topics.clone()),
            track_uc: TrackUseCase::new(analyze_uc.clone()),
            analyze_uc,
            topics,
        }
    }

    /// Sequential analysis with the default post limit.
    pub fn with_defaults(source: Arc<dyn CommunitySource>, topics: TopicTable) -> Self {
        Self::with_source(source, topics, DEFAULT_POST_LIMIT, 1)
    }

    // Delegating methods
    pub async fn analyze(&self, community: &str) -> Option<CommunityStats> {
        self.analyze_uc.analyze(community).await
    }

    pub async fn try_analyze(&self, community: &str) -> Result<CommunityStats, DomainError> {
        self.analyze_uc.try_analyze(community).await
    }

    pub async fn recommend(&self, prompt: &str) -> RecommendationOutcome {
        self.recommend_uc.execute(prompt).await
    }

    pub async fn track(&self, communities: &[String]) -> TrackedActivity {
        self.track_uc.execute(communities).await
    }

    pub fn topics(&self) -> &TopicTable {
        &self.topics
    }
}
