//! GoFood CLI
//!
//! Command-line entry point for the GoFood backend:
//! - Run the REST API the dashboard talks to
//! - Seed the demo menu
//! - Generate a default config file
//!
//! Settings are layered: built-in defaults, then the config file, then
//! `GOFOOD_*` environment variables, then command-line flags.

use anyhow::Context;
use clap::{Parser, Subcommand};
use gofood::api::{serve, AppState};
use gofood::config::{generate_default_config, Config, ConfigError, LoggingConfig};
use gofood::store::{FoodCatalog, StoreConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Parser)]
#[command(name = "gofood")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Food catalog API for the GoFood dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the API server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding db.json
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
        /// Insert the demo menu if the catalog is empty
        #[arg(long)]
        seed: bool,
    },

    /// Insert the demo menu into an empty catalog
    Seed {
        /// Directory holding db.json
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config loading logs before [logging] is known; show it through a scoped
    // bootstrap subscriber
    let mut config = tracing::subscriber::with_default(
        bootstrap_subscriber(bootstrap_filter(), std::io::stderr),
        || load_config(cli.config.as_deref()),
    )?;

    init_logging(&config.logging);

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        data_dir: None,
        seed: false,
    }) {
        Commands::Serve {
            host,
            port,
            data_dir,
            seed,
        } => {
            if let Some(host) = host {
                config.api.host = host;
            }
            if let Some(port) = port {
                config.api.port = port;
            }
            if let Some(dir) = data_dir {
                config.storage.data_dir = dir.to_string_lossy().to_string();
            }
            config.storage.seed_demo_menu |= seed;

            run_server(config).await
        }
        Commands::Seed { data_dir } => {
            if let Some(dir) = data_dir {
                config.storage.data_dir = dir.to_string_lossy().to_string();
            }

            let catalog = open_catalog(&config).await?;
            let added = catalog.seed().await?;
            if added == 0 {
                println!("Catalog already has {} foods, nothing seeded", catalog.len().await);
            } else {
                println!("Seeded {} foods into {:?}", added, catalog.data_dir());
            }
            Ok(())
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => {
            let config = Config::load_with_env(path)?;
            tracing::info!("Loaded config from {:?}", path);
            Ok(config)
        }
        None => Ok(Config::load_default()),
    }
}

fn bootstrap_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gofood=info"))
}

/// Plain fmt subscriber used only while the config itself is being loaded
fn bootstrap_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Initialize tracing from the logging config (RUST_LOG wins when set)
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn open_catalog(config: &Config) -> anyhow::Result<FoodCatalog> {
    let store_config = StoreConfig::new(&config.storage.data_dir);
    FoodCatalog::open(store_config)
        .await
        .with_context(|| format!("Failed to open catalog in {}", config.storage.data_dir))
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting GoFood API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {:?}", config.storage.data_dir);

    let catalog = Arc::new(open_catalog(&config).await?);

    if config.storage.seed_demo_menu {
        let added = catalog.seed().await?;
        if added > 0 {
            tracing::info!("Seeded {} demo foods", added);
        }
    }

    tracing::info!("Catalog ready with {} foods", catalog.len().await);

    let state = AppState::new(catalog, config.api.clone());
    serve(state).await?;

    tracing::info!("GoFood API server stopped");
    Ok(())
}
