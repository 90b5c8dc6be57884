pub mod community_source;
