use clap::Parser;
use subpulse::cli::commands::{Cli, Commands};
use subpulse::config::Config;
use subpulse::SubPulse;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let sp = match Config::from_env().and_then(|config| SubPulse::new(&config)) {
        Ok(sp) => sp,
        Err(e) => {
            eprintln!("Error initializing subpulse: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(sp, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(sp: SubPulse, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Recommend { prompt } => {
            let outcome = sp.recommend(&prompt).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Track { communities } => {
            let tracked = sp.track(&communities).await;
            println!("{}", serde_json::to_string_pretty(&tracked)?);
        }
        Commands::Analyze { community } => {
            let stats = sp.analyze(&community).await;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Topics => {
            println!("{}", serde_json::to_string_pretty(sp.topics())?);
        }
    }
    Ok(())
}
