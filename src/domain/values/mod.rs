pub mod activity;
pub mod community_name;
pub mod topic_table;
