use crate::domain::error::DomainError;
use crate::domain::values::community_name;
use serde::{Deserialize, Serialize};

/// A taxonomy key and the communities it groups, in ranking-input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,
    pub communities: Vec<String>,
}

/// Static keyword-to-communities table used to resolve prompts.
///
/// Order matters: a prompt resolves to the first topic whose key it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopicTable {
    topics: Vec<Topic>,
}

impl TopicTable {
    /// Build a table from `(topic, communities)` pairs. Keys are lowercased.
    pub fn new<I, S>(topics: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let mut table = Self { topics: Vec::new() };
        for (key, communities) in topics {
            let key: String = key.into();
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                return Err(DomainError::InvalidInput("Empty topic name".into()));
            }
            if table.get(&key).is_some() {
                return Err(DomainError::InvalidInput(format!("Duplicate topic: {key}")));
            }
            let communities = communities
                .into_iter()
                .map(|c| {
                    let c: String = c.into();
                    community_name::normalize(&c)
                })
                .collect::<Result<Vec<_>, _>>()?;
            if communities.is_empty() {
                return Err(DomainError::InvalidInput(format!(
                    "Topic '{key}' has no communities"
                )));
            }
            table.topics.push(Topic {
                topic: key,
                communities,
            });
        }
        Ok(table)
    }

    /// Parse a JSON array of `{"topic": ..., "communities": [...]}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let topics: Vec<Topic> = serde_json::from_str(json)?;
        let table = Self::new(topics.into_iter().map(|t| (t.topic, t.communities)))?;
        if table.is_empty() {
            return Err(DomainError::InvalidInput("Topic table has no topics".into()));
        }
        Ok(table)
    }

    /// First topic (table order) whose key appears in the lowercased prompt.
    pub fn resolve(&self, prompt: &str) -> Option<&Topic> {
        let prompt = prompt.to_lowercase();
        self.topics.iter().find(|t| prompt.contains(&t.topic))
    }

    pub fn get(&self, topic: &str) -> Option<&Topic> {
        let topic = topic.to_lowercase();
        self.topics.iter().find(|t| t.topic == topic)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for TopicTable {
    fn default() -> Self {
        Self {
            topics: vec![
                Topic {
                    topic: "finance".into(),
                    communities: vec![
                        "personalfinance".into(),
                        "financialindependence".into(),
                        "investing".into(),
                    ],
                },
                Topic {
                    topic: "technology".into(),
                    communities: vec![
                        "technology".into(),
                        "gadgets".into(),
                        "programming".into(),
                    ],
                },
            ],
        }
    }
}
