pub mod community_stats;
pub mod recommendation;
pub mod tracked_activity;
