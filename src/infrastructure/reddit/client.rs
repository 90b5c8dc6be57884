use crate::domain::entities::community_stats::CommunityMetadata;
use crate::domain::error::DomainError;
use crate::domain::ports::community_source::CommunitySource;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Reddit public JSON API client (no auth required for `about` and `new` listings).
pub struct RedditClient {
    base_url: String,
    client: reqwest::Client,
}

impl RedditClient {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn about_url(&self, community: &str) -> String {
        format!("{}/r/{community}/about.json", self.base_url)
    }

    fn new_posts_url(&self, community: &str, limit: u32) -> String {
        format!("{}/r/{community}/new.json?limit={limit}", self.base_url)
    }

    async fn get_body(&self, url: &str) -> Result<String, DomainError> {
        debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        resp.text()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))
    }
}

#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, serde::Deserialize)]
struct AboutData {
    subscribers: u64,
    #[serde(default)]
    active_user_count: Option<u64>,
}

#[derive(Debug, serde::Deserialize)]
struct ListingData {
    children: Vec<Envelope<PostData>>,
}

#[derive(Debug, serde::Deserialize)]
struct PostData {
    created_utc: f64,
}

fn decode_about(body: &str) -> serde_json::Result<CommunityMetadata> {
    let about: Envelope<AboutData> = serde_json::from_str(body)?;
    Ok(CommunityMetadata::new(
        about.data.subscribers,
        about.data.active_user_count,
    ))
}

fn decode_listing(body: &str) -> serde_json::Result<Vec<f64>> {
    let listing: Envelope<ListingData> = serde_json::from_str(body)?;
    Ok(listing
        .data
        .children
        .into_iter()
        .map(|post| post.data.created_utc)
        .collect())
}

#[async_trait]
impl CommunitySource for RedditClient {
    fn name(&self) -> &str {
        "reddit"
    }

    async fn fetch_about(&self, community: &str) -> Result<CommunityMetadata, DomainError> {
        let url = self.about_url(community);
        let body = self.get_body(&url).await?;
        decode_about(&body).map_err(|e| DomainError::Parse(format!("{url}: {e}")))
    }

    async fn fetch_recent_posts(
        &self,
        community: &str,
        limit: u32,
    ) -> Result<Vec<f64>, DomainError> {
        let url = self.new_posts_url(community, limit);
        let body = self.get_body(&url).await?;
        decode_listing(&body).map_err(|e| DomainError::Parse(format!("{url}: {e}")))
    }
}
