use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chain_icons::{runner, CHAINS};

#[derive(Parser)]
#[command(name = "chain-icons")]
#[command(about = "Fetch blockchain icons and build the frontend manifest")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all icons and rewrite the manifest
    Fetch {
        /// Directory icons and manifest.json are written to
        #[arg(short, long, default_value = runner::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Per-request timeout in seconds
        #[arg(short, long, default_value = "10")]
        timeout_secs: u64,
    },
    /// List the chains in the registry and their sources
    List,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "chain_icons=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Fetch {
            output_dir,
            timeout_secs,
        }) => {
            let summary = runner::run(runner::RunOptions {
                output_dir,
                timeout: Duration::from_secs(timeout_secs),
            })
            .await?;
            print_summary(&summary);
        }
        Some(Commands::List) => {
            for chain in CHAINS {
                println!("{} - {} ({})", chain.code, chain.name, chain.color);
                for url in chain.urls {
                    println!("    {}", url);
                }
            }
        }
        None => {
            // Default: full fetch with the standard output directory
            let summary = runner::run(runner::RunOptions::default()).await?;
            print_summary(&summary);
        }
    }

    Ok(())
}

fn print_summary(summary: &chain_icons::RunSummary) {
    println!(
        "Done: fetched {}/{} icons, manifest at {}",
        summary.fetched,
        summary.total,
        summary.manifest_path.display()
    );
}
