use analytics_cli::commands::{
    classify_cmd::{self, ClassifyArgs},
    collect_cmd::{self, CollectArgs},
};
use analytics_core::CollectionOutcome;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
const LOG_FILTER_ENV: &str = "BOUNTY_ANALYTICS_LOG";

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Bounty analytics: record the contributors who worked on bounties
#[derive(Parser)]
#[command(name = "bounty-analytics")]
#[command(about = "Collect contributor analytics from bounty issues", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the repository and upsert the profiles of bounty assignees
    Collect(CollectArgs),

    /// Classify a set of labels against the configured catalogs
    Classify(ClassifyArgs),

    /// Show the CLI version
    Version,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Collect(args) => match collect_cmd::execute(args).await {
            Ok(CollectionOutcome::Skipped) => println!("Analytics collection is disabled"),
            Ok(CollectionOutcome::Completed(report)) => println!(
                "Recorded {} of {} bounty assignees from {} bounties",
                report.profiles.persisted, report.assignees, report.bounties
            ),
            Err(e) => {
                error!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Classify(args) => match classify_cmd::execute(args) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Version => {
            println!(
                "bounty-analytics version {}",
                option_env!("BOUNTY_ANALYTICS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
            );
        }
    }
}
