mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use livery_core::ScrapeConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "livery-scraper")]
#[command(about = "Scrape special-livery photo listings into SQLite", long_about = None)]
struct Cli {
    /// SQLite database file. Falls back to LIVERY_DB_PATH, then liveries.db.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the listing pages and store new liveries (default).
    Scrape(ScrapeArgs),
    /// Print stored liveries as JSON.
    List {
        #[arg(short, long)]
        airline: Option<String>,
        #[arg(short, long, default_value = "100")]
        limit: usize,
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },
    /// Print catalogue counts as JSON.
    Stats,
    /// Serve the read-only HTTP API.
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[derive(Args, Default)]
struct ScrapeArgs {
    #[arg(long)]
    first_page: Option<u32>,
    #[arg(long)]
    last_page: Option<u32>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[arg(long)]
    base_url: Option<String>,
}

impl ScrapeArgs {
    /// Flags over `LIVERY_*` variables over built-in defaults.
    fn into_config(self, db: Option<PathBuf>) -> ScrapeConfig {
        let mut config = ScrapeConfig::from_env();
        if let Some(db) = db {
            config.db_path = db;
        }
        if let Some(first) = self.first_page {
            config.first_page = first;
        }
        if let Some(last) = self.last_page {
            config.last_page = last;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = std::time::Duration::from_secs(secs);
        }
        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        config
    }
}

fn db_path(db: Option<PathBuf>) -> PathBuf {
    db.unwrap_or_else(|| ScrapeConfig::from_env().db_path)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Scrape(ScrapeArgs::default())) {
        Commands::Scrape(args) => commands::scrape::run(args.into_config(cli.db)).await,
        Commands::List { airline, limit, offset } => {
            commands::query::run_list(&db_path(cli.db), airline, limit, offset)
        },
        Commands::Stats => commands::query::run_stats(&db_path(cli.db)),
        Commands::Serve { port, host } => commands::serve::run(&db_path(cli.db), port, host).await,
    }
}
