use crate::application::analyze::AnalyzeUseCase;
use crate::domain::entities::tracked_activity::TrackedActivity;
use std::sync::Arc;
use tracing::info;

pub struct TrackUseCase {
    analyzer: Arc<AnalyzeUseCase>,
}

impl TrackUseCase {
    pub fn new(analyzer: Arc<AnalyzeUseCase>) -> Self {
        Self { analyzer }
    }

    /// Analyze an explicit list of communities. Every distinct name gets an
    /// entry; failures map to `None`. Repeated names are analyzed once.
    pub async fn execute(&self, communities: &[String]) -> TrackedActivity {
        let mut distinct: Vec<String> = Vec::with_capacity(communities.len());
        for name in communities {
            if !distinct.contains(name) {
                distinct.push(name.clone());
            }
        }

        let results = self.analyzer.analyze_many(&distinct).await;

        let mut tracked = TrackedActivity::new();
        for (name, stats) in distinct.into_iter().zip(results) {
            tracked.insert(name, stats);
        }

        info!(
            tracked = tracked.len(),
            failed = tracked.failed_count(),
            "Tracked communities"
        );
        tracked
    }
}
