//! Roomee CLI server
//!
//! Headless hotel front-desk backend suitable for a systemd service, a
//! container or a standalone process.
//!
//! ```sh
//! # Run with the default config (~/.config/roomee/config.toml)
//! roomee-server
//!
//! # Custom config path
//! roomee-server --config /etc/roomee/config.toml
//!
//! # Write a default config file and exit
//! roomee-server --init
//!
//! # Validate config without starting
//! roomee-server --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use roomee::config::AppConfig;
use roomee::server::{init_tracing, ServerHandle, ServerOptions};

/// Roomee: REST backend for hotel staff, guests, rooms and stays.
#[derive(Parser, Debug)]
#[command(
    name = "roomee-server",
    version,
    about = "Hotel front-desk backend",
    long_about = "Roomee: REST API for managing staff, guests, hotels and rooms, \
                  and for checking guests in and out.\n\n\
                  Default config: ~/.config/roomee/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "ROOMEE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Write a default configuration file to the config path and exit.
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(roomee::default_config_path);

    if cli.init {
        if config_path.exists() {
            eprintln!("Config file already exists: {}", config_path.display());
            return Ok(());
        }
        AppConfig::default().save(&config_path)?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            let mut cfg = AppConfig::default();
            cfg.apply_env_overrides();
            (cfg, Some(e))
        }
    };

    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    if cli.check {
        if let Some(e) = load_error {
            eprintln!("Invalid configuration in {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}:{}", config.server.api_host, config.server.api_port);
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();

    info!("Press Ctrl+C to shut down gracefully.");

    handle.wait().await;

    Ok(())
}
