mod compare;
mod franchises;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "costar")]
#[command(about = "Compare two performers' filmographies using TMDB data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch two performers and print the comparison report as JSON
    Compare {
        /// TMDB person id of the first performer
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        first: i64,
        /// TMDB person id of the second performer
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        second: i64,
        /// Franchise slug from the catalog (defaults to the first entry)
        #[arg(long, conflicts_with = "no_franchise")]
        franchise: Option<String>,
        /// Skip franchise discovery; every credit counts as standard
        #[arg(long)]
        no_franchise: bool,
        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
    /// List the configured franchise catalog
    Franchises,
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            first,
            second,
            franchise,
            no_franchise,
            pretty,
        } => {
            let config = costar_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            let selection = compare::FranchiseSelection::from_flags(franchise, no_franchise);
            compare::run_compare(&config, first, second, &selection, pretty).await?;
        }
        Commands::Franchises => {
            let config = costar_core::load_catalog_config();
            init_tracing(&config.log_level)?;
            franchises::run_franchises(&config.franchises_path)?;
        }
    }

    Ok(())
}
