//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use subpulse::domain::entities::community_stats::CommunityMetadata;
use subpulse::domain::error::DomainError;
use subpulse::domain::ports::community_source::CommunitySource;
use subpulse::domain::values::topic_table::TopicTable;
use subpulse::SubPulse;

/// Canned response for one community. `None` makes that call fail.
#[derive(Clone, Default)]
pub struct FakeCommunity {
    pub about: Option<CommunityMetadata>,
    pub posts: Option<Vec<f64>>,
    pub delay_ms: u64,
}

impl FakeCommunity {
    pub fn active(subscribers: u64, active_users: u64, posts: Vec<f64>) -> Self {
        Self {
            about: Some(CommunityMetadata::new(subscribers, Some(active_users))),
            posts: Some(posts),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// In-memory `CommunitySource`; unknown communities fail like a 404.
#[derive(Default)]
pub struct FakeSource {
    communities: HashMap<String, FakeCommunity>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, community: FakeCommunity) -> Self {
        self.communities.insert(name.to_string(), community);
        self
    }

    /// Every call made, as "about:<name>" or "new:<name>:<limit>".
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn lookup(&self, community: &str) -> Result<&FakeCommunity, DomainError> {
        self.communities.get(community).ok_or(DomainError::Status {
            status: 404,
            url: format!("fake://r/{community}"),
        })
    }
}

#[async_trait]
impl CommunitySource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch_about(&self, community: &str) -> Result<CommunityMetadata, DomainError> {
        self.calls.lock().unwrap().push(format!("about:{community}"));
        let fake = self.lookup(community)?;
        if fake.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(fake.delay_ms)).await;
        }
        fake.about
            .clone()
            .ok_or_else(|| DomainError::Network(format!("{community}: connection reset")))
    }

    async fn fetch_recent_posts(
        &self,
        community: &str,
        limit: u32,
    ) -> Result<Vec<f64>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("new:{community}:{limit}"));
        let fake = self.lookup(community)?;
        fake.posts
            .clone()
            .ok_or_else(|| DomainError::Parse(format!("{community}: missing children")))
    }
}

pub fn now_secs() -> f64 {
    Utc::now().timestamp() as f64
}

/// Timestamps `hours_ago` hours before now.
pub fn hours_ago(hours: &[f64]) -> Vec<f64> {
    let now = now_secs();
    hours.iter().map(|h| now - h * 3600.0).collect()
}

pub fn setup(source: FakeSource, topics: TopicTable) -> (SubPulse, Arc<FakeSource>) {
    let source = Arc::new(source);
    let sp = SubPulse::with_defaults(source.clone(), topics);
    (sp, source)
}

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
