use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use travelguide::{
    AppState, FjallStore, MemoryStore, TravelGuideConfig, TravelStore, TripPlanner, logging, seed,
    web,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Travel guide and budget trip planner", long_about = None)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database directory (overrides config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,

    /// Debug logging for this crate and HTTP requests
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TravelGuideConfig::load_from_path(cli.config)?;

    // Apply CLI overrides
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(data_dir) = cli.data_dir {
        config.storage.path = data_dir;
    }
    if cli.ephemeral {
        config.storage.backend = "memory".to_string();
    }
    config.validate()?;

    logging::init(&config.logging, cli.verbose);
    info!("Starting travelguide {}", travelguide::VERSION);

    let store = open_store(&config).await?;
    let planner = TripPlanner::new(store.clone(), config.planner.clone());
    let state = AppState::new(store, planner);

    web::run(&config.server, state).await
}

async fn open_store(config: &TravelGuideConfig) -> Result<Arc<dyn TravelStore>> {
    let store: Arc<dyn TravelStore> = match config.storage.backend.as_str() {
        "memory" => {
            info!("Using in-memory store");
            Arc::new(MemoryStore::new())
        }
        _ => {
            info!("Opening database at {}", config.storage.path);
            let store = FjallStore::open(&config.storage.path)
                .with_context(|| format!("Failed to open database {}", config.storage.path))?;
            Arc::new(store)
        }
    };

    if config.storage.seed_on_start {
        seed::seed_if_empty(store.as_ref(), config.storage.seed_file.as_deref())
            .await
            .context("Failed to seed catalog")?;
    }

    Ok(store)
}
