use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "subpulse",
    version,
    about = "Find where to post: community activity and topic recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend communities for a free-text prompt
    Recommend {
        /// e.g. "I want to share my Substack about finance."
        prompt: String,
    },
    /// Analyze several communities; failures are reported as null
    Track {
        /// Community names (with or without the r/ prefix)
        #[arg(required = true)]
        communities: Vec<String>,
    },
    /// Analyze a single community
    Analyze {
        community: String,
    },
    /// Show the topic table used for recommendations
    Topics,
}
