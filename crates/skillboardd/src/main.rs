//! skillboardd - The skillboard background service
//!
//! This is the main entry point for the service. It wires together:
//! - Configuration loading (TOML file, CLI/env overrides)
//! - Store initialization (schema ensured before serving)
//! - The skill record service
//! - The HTTP server

use anyhow::{Context, Result};
use clap::Parser;
use skillboard_config::{load_config, Config};
use skillboard_core::SkillService;
use skillboard_http::HttpServer;
use skillboard_store::{SqliteStore, Store};
use skillboard_util::default_config_path;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// skillboardd - Skill registry service
#[derive(Parser, Debug)]
#[command(name = "skillboardd")]
#[command(about = "Skill registry service", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/skillboard/config.toml)
    #[arg(short, long, default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Bind address override (or set SKILLBOARD_ADDR env var)
    #[arg(short, long, env = "SKILLBOARD_ADDR")]
    addr: Option<SocketAddr>,

    /// Database path override (or set SKILLBOARD_DB env var)
    #[arg(short, long, env = "SKILLBOARD_DB")]
    db: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Resolve the effective configuration: CLI/env > config file > defaults.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = if self.config.exists() {
            load_config(&self.config)
                .with_context(|| format!("Failed to load config from {:?}", self.config))?
        } else if self.config == default_config_path() {
            // No file at the default location: built-in defaults
            debug!(config_path = %self.config.display(), "No config file, using defaults");
            Config::default()
        } else {
            anyhow::bail!("Config file not found: {:?}", self.config);
        };

        if let Some(addr) = self.addr {
            config.bind = addr;
        }
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }

        Ok(config)
    }
}

/// Main service state
struct Service {
    server: HttpServer,
    skills: Arc<SkillService>,
}

impl Service {
    async fn new(args: &Args) -> Result<Self> {
        let config = args.resolve_config()?;

        info!(
            bind = %config.bind,
            db_path = %config.db_path.display(),
            "Configuration resolved"
        );

        // Initialize store; refuse to serve if the schema cannot be ensured
        let store = SqliteStore::open(&config.db_path)
            .with_context(|| format!("Failed to open database {:?}", config.db_path))?;
        anyhow::ensure!(store.is_healthy(), "Store health check failed");

        info!(db_path = %config.db_path.display(), "Store initialized");

        let skills = Arc::new(SkillService::new(Arc::new(store)));

        let mut server = HttpServer::new(config.bind);
        server.start().await?;

        Ok(Self { server, skills })
    }

    async fn run(self) -> Result<()> {
        let server = Arc::new(self.server);
        let skills = self.skills;

        // Spawn the accept loop
        let accept = server.clone();
        tokio::spawn(async move {
            if let Err(e) = accept.run(skills).await {
                error!(error = %e, "HTTP server error");
            }
        });

        // Set up signal handlers
        let mut sigterm =
            signal(SignalKind::terminate()).context("Failed to create SIGTERM handler")?;
        let mut sigint =
            signal(SignalKind::interrupt()).context("Failed to create SIGINT handler")?;

        info!("Service running");

        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down gracefully");
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "skillboardd starting");

    let service = Service::new(&args).await?;
    service.run().await
}
