use crate::domain::entities::community_stats::CommunityStats;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Per-community results of a batch analysis, in the order the names were given.
///
/// Failed communities stay in the mapping with `None` instead of being dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedActivity {
    entries: Vec<(String, Option<CommunityStats>)>,
}

impl TrackedActivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced name keeps its original position.
    pub fn insert(&mut self, community: String, stats: Option<CommunityStats>) {
        match self.entries.iter_mut().find(|(name, _)| *name == community) {
            Some(entry) => entry.1 = stats,
            None => self.entries.push((community, stats)),
        }
    }

    /// `None` if the name was never tracked, `Some(None)` if its analysis failed.
    pub fn get(&self, community: &str) -> Option<Option<&CommunityStats>> {
        self.entries
            .iter()
            .find(|(name, _)| name == community)
            .map(|(_, stats)| stats.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|(_, s)| s.is_none()).count()
    }
}

impl Serialize for TrackedActivity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, stats) in &self.entries {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}
