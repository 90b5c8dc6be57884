use crate::domain::entities::community_stats::CommunityStats;
use serde::Serialize;

pub const NO_MATCHING_TOPIC: &str = "No matching topic found for the prompt.";

/// A community ranked for a topic, with the stats it was ranked by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub community: String,
    pub subscribers: u64,
    pub active_users: u64,
    pub posts_last_24h: u64,
}

impl Recommendation {
    pub fn new(community: String, stats: CommunityStats) -> Self {
        Self {
            community,
            subscribers: stats.subscribers,
            active_users: stats.active_users,
            posts_last_24h: stats.posts_last_24h,
        }
    }
}

/// Result of a prompt-based recommendation.
///
/// A prompt that names no known topic yields `NoMatchingTopic` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    Ranked {
        topic: String,
        recommendations: Vec<Recommendation>,
    },
    NoMatchingTopic {
        error: String,
    },
}

impl RecommendationOutcome {
    pub fn no_match() -> Self {
        RecommendationOutcome::NoMatchingTopic {
            error: NO_MATCHING_TOPIC.to_string(),
        }
    }

    pub fn topic(&self) -> Option<&str> {
        match self {
            RecommendationOutcome::Ranked { topic, .. } => Some(topic),
            RecommendationOutcome::NoMatchingTopic { .. } => None,
        }
    }

    /// Ranked communities, empty for a prompt with no topic.
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            RecommendationOutcome::Ranked {
                recommendations, ..
            } => recommendations,
            RecommendationOutcome::NoMatchingTopic { .. } => &[],
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, RecommendationOutcome::NoMatchingTopic { .. })
    }
}
