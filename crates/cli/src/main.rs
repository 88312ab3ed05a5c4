mod desk;
mod menu;
mod metrics;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use parkwise_core::{
    load_config, load_default_config, validate_config, Config, LogFormat, LoggingConfig,
};

use desk::ParkingDesk;
use menu::Menu;

/// Config file looked up in the working directory when `PARKWISE_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "parkwise.toml";

fn main() {
    if let Err(e) = run() {
        eprintln!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = read_config()?;
    validate_config(&config).context("Configuration validation failed")?;

    init_logging(&config.logging);
    info!(
        style = %config.parking.style,
        lots = ?config.parking.lots,
        "Configuration loaded"
    );

    let mut desk =
        ParkingDesk::from_config(&config.parking).context("Failed to register parking lots")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock())
        .run(&mut desk)
        .context("Console I/O failed")?;
    debug!("Menu loop finished");

    if config.metrics.dump_on_exit {
        eprint!("{}", metrics::encode_metrics()?);
    }

    Ok(())
}

/// An explicit `PARKWISE_CONFIG` must exist; the default file is optional.
fn read_config() -> Result<Config> {
    if let Ok(path) = std::env::var("PARKWISE_CONFIG") {
        let path = PathBuf::from(path);
        return load_config(&path)
            .with_context(|| format!("Failed to load config from {:?}", path));
    }

    let path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if path.exists() {
        load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
    } else {
        load_default_config().context("Failed to load default config")
    }
}

/// Logs go to stderr; stdout belongs to the menu.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}
