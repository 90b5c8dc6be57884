use crate::application::analyze::AnalyzeUseCase;
use crate::domain::entities::recommendation::{Recommendation, RecommendationOutcome};
use crate::domain::values::topic_table::TopicTable;
use std::sync::Arc;
use tracing::info;

pub struct RecommendUseCase {
    analyzer: Arc<AnalyzeUseCase>,
    topics: Arc<TopicTable>,
}

impl RecommendUseCase {
    pub fn new(analyzer: Arc<AnalyzeUseCase>, topics: Arc<TopicTable>) -> Self {
        Self { analyzer, topics }
    }

    /// Resolve the prompt to a topic and rank its communities by active users.
    ///
    /// Communities that fail to analyze are left out of the ranking.
    pub async fn execute(&self, prompt: &str) -> RecommendationOutcome {
        let Some(topic) = self.topics.resolve(prompt) else {
            info!("No topic matched the prompt");
            return RecommendationOutcome::no_match();
        };

        let results = self.analyzer.analyze_many(&topic.communities).await;

        let mut recommendations: Vec<Recommendation> = topic
            .communities
            .iter()
            .zip(results)
            .filter_map(|(community, stats)| {
                stats.map(|s| Recommendation::new(community.clone(), s))
            })
            .collect();

        // Stable: ties keep the topic's community order.
        recommendations.sort_by(|a, b| b.active_users.cmp(&a.active_users));

        info!(
            topic = %topic.topic,
            ranked = recommendations.len(),
            dropped = topic.communities.len() - recommendations.len(),
            "Ranked communities"
        );

        RecommendationOutcome::Ranked {
            topic: topic.topic.clone(),
            recommendations,
        }
    }
}
