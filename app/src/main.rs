#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod repl;
mod table;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use factbot_wiki::{PageSource, WikiClient, WikiConfig};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "factbot")]
#[command(about = "Answers factual queries from Wikipedia infoboxes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer queries against Wikipedia
    Ask {
        /// Single query to answer (runs the interactive loop if omitted)
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Wikipedia language code
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// HTTP timeout in seconds
        #[arg(short, long, default_value_t = 10)]
        timeout: u64,
    },
    /// Show version
    Version,
}

fn init_tracing(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            message,
            lang,
            timeout,
        } => {
            // Keep log lines out of the interactive session unless RUST_LOG
            // style debugging is wanted; one-shot mode logs at INFO.
            let level = if message.is_some() {
                Level::INFO
            } else {
                Level::WARN
            };
            init_tracing(level)?;

            let config = WikiConfig {
                language: lang,
                timeout,
                ..WikiConfig::default()
            };
            let source: Arc<dyn PageSource> = Arc::new(WikiClient::new(&config)?);
            let table = table::dispatch_table(&source)?;
            info!("Dispatch table ready: {} patterns", table.len());

            if let Some(msg) = message {
                repl::ask_once(&table, &msg).await?;
            } else {
                repl::run(&table).await?;
            }
        }
        Commands::Version => {
            println!("factbot {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
