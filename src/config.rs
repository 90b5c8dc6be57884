use crate::domain::error::DomainError;
use crate::domain::ports::community_source::DEFAULT_POST_LIMIT;
use crate::domain::values::topic_table::TopicTable;
use crate::infrastructure::reddit::client::DEFAULT_BASE_URL;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_POST_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub post_limit: u32,
    pub concurrency: usize,
    /// JSON topic table replacing the built-in one.
    pub topics_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            post_limit: DEFAULT_POST_LIMIT,
            concurrency: 1,
            topics_file: None,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("subpulse/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(url) = get("SUBPULSE_BASE_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(DomainError::Config(format!(
                    "SUBPULSE_BASE_URL must be an http(s) URL, got {url}"
                )));
            }
            config.base_url = url;
        }
        if let Some(agent) = get("SUBPULSE_USER_AGENT") {
            config.user_agent = agent.trim().to_string();
        }
        if let Some(secs) = get("SUBPULSE_TIMEOUT_SECS") {
            let secs: u64 = parse_var("SUBPULSE_TIMEOUT_SECS", &secs)?;
            if secs == 0 {
                return Err(DomainError::Config(
                    "SUBPULSE_TIMEOUT_SECS must be at least 1".into(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(limit) = get("SUBPULSE_POST_LIMIT") {
            let limit: u32 = parse_var("SUBPULSE_POST_LIMIT", &limit)?;
            if !(1..=MAX_POST_LIMIT).contains(&limit) {
                return Err(DomainError::Config(format!(
                    "SUBPULSE_POST_LIMIT must be between 1 and {MAX_POST_LIMIT}, got {limit}"
                )));
            }
            config.post_limit = limit;
        }
        if let Some(n) = get("SUBPULSE_CONCURRENCY") {
            let n: usize = parse_var("SUBPULSE_CONCURRENCY", &n)?;
            if n == 0 {
                return Err(DomainError::Config(
                    "SUBPULSE_CONCURRENCY must be at least 1".into(),
                ));
            }
            config.concurrency = n;
        }
        config.topics_file = get("SUBPULSE_TOPICS_FILE").map(|p| PathBuf::from(p.trim()));

        Ok(config)
    }

    /// The topic table to rank against: the configured file, or the built-in table.
    pub fn load_topics(&self) -> Result<TopicTable, DomainError> {
        match &self.topics_file {
            None => Ok(TopicTable::default()),
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    DomainError::Config(format!("Cannot read topics file {}: {e}", path.display()))
                })?;
                TopicTable::from_json_str(&json).map_err(|e| {
                    DomainError::Config(format!("Invalid topics file {}: {e}", path.display()))
                })
            }
        }
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, DomainError> {
    value
        .trim()
        .parse()
        .map_err(|_| DomainError::Config(format!("{key} has invalid value: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, "https://www.reddit.com");
        assert_eq!(config.post_limit, 50);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("subpulse/"));
        assert!(config.topics_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SUBPULSE_BASE_URL", "http://localhost:8080/"),
            ("SUBPULSE_USER_AGENT", "my-agent/2.0"),
            ("SUBPULSE_TIMEOUT_SECS", "3"),
            ("SUBPULSE_POST_LIMIT", "25"),
            ("SUBPULSE_CONCURRENCY", "4"),
            ("SUBPULSE_TOPICS_FILE", "/tmp/topics.json"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.user_agent, "my-agent/2.0");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.post_limit, 25);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.topics_file, Some(PathBuf::from("/tmp/topics.json")));
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = Config::from_lookup(lookup(&[("SUBPULSE_POST_LIMIT", "  ")])).unwrap();
        assert_eq!(config.post_limit, 50);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for (key, value) in [
            ("SUBPULSE_TIMEOUT_SECS", "ten"),
            ("SUBPULSE_TIMEOUT_SECS", "0"),
            ("SUBPULSE_POST_LIMIT", "0"),
            ("SUBPULSE_POST_LIMIT", "101"),
            ("SUBPULSE_CONCURRENCY", "0"),
            ("SUBPULSE_CONCURRENCY", "-2"),
            ("SUBPULSE_BASE_URL", "ftp://example.com"),
        ] {
            let result = Config::from_lookup(lookup(&[(key, value)]));
            assert!(
                matches!(result, Err(DomainError::Config(_))),
                "{key}={value} should be rejected"
            );
        }
    }

    #[test]
    fn test_load_builtin_topics() {
        let table = Config::default().load_topics().unwrap();
        assert_eq!(table, TopicTable::default());
    }
}
