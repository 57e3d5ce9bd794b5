//! tracker-admin - operator CLI for the ingestion tracker
//!
//! Inspects and maintains a configured tracker store. Listings are printed as
//! JSON lines on stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use ingest_tracker::config::{Config, StoreBackendKind};
use ingest_tracker::storage::{self, StoreBackend};
use ingest_tracker::utils::logging::init_tracing;
use ingest_tracker::{TrackerStore, VERSION};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Debug, Parser)]
#[command(name = "tracker-admin", version = VERSION, long_version = LONG_VERSION)]
#[command(about = "Inspect and maintain an ingestion tracker store")]
struct Cli {
    /// YAML configuration file; environment variables are used when absent
    #[arg(short, long, global = true, env = "TRACKER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run pending database migrations
    Migrate,
    /// List a tenant's batches
    Batches { user_id: String },
    /// List the files of a batch
    Files { user_id: String, batch_id: String },
    /// Print the status log of a file
    Logs { file_id: String },
    /// Delete everything a tenant owns
    Purge { user_id: String },
    /// Print row totals
    Stats,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref()).await?;
    init_tracing(config.logging())?;
    debug!("Using {} backend", config.storage().backend);

    if let Command::Migrate = cli.command {
        return migrate(&config).await;
    }

    let store = storage::connect(config.storage()).await?;
    let result = execute(store.as_ref(), cli.command).await;
    store.close().await?;
    result
}

async fn migrate(config: &Config) -> anyhow::Result<()> {
    if config.storage().backend == StoreBackendKind::Memory {
        info!("Memory backend has no schema, nothing to migrate");
        return Ok(());
    }

    let mut storage = config.storage().clone();
    storage.auto_migrate = false;
    let backend = StoreBackend::new(&storage).await?;
    if let StoreBackend::Database(db) = &backend {
        db.migrate().await?;
    }
    backend.close().await?;
    Ok(())
}

async fn execute(store: &dyn TrackerStore, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Migrate => Ok(()),
        Command::Batches { user_id } => print_lines(&store.get_user_batches(&user_id).await?),
        Command::Files { user_id, batch_id } => {
            print_lines(&store.get_batch_files(&user_id, &batch_id).await?)
        }
        Command::Logs { file_id } => print_lines(&store.get_file_logs(&file_id).await?),
        Command::Purge { user_id } => {
            let removed = store.delete_all(&user_id).await?;
            println!("{}", serde_json::json!({ "user_id": user_id, "removed_batches": removed }));
            Ok(())
        }
        Command::Stats => {
            let stats = store.stats().await?;
            println!("{}", serde_json::to_string(&stats)?);
            Ok(())
        }
    }
}

fn print_lines<T: Serialize>(items: &[T]) -> anyhow::Result<()> {
    for item in items {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}
