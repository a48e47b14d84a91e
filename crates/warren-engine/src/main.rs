//! Tick engine binary for the Warren simulation.
//!
//! Wires the room grid, the observer registry and the mob factory
//! together and drives them on a fixed tick until the configured tick limit
//! or Ctrl-C.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `warren-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Create the one-room starting world and attach the chronicle observer
//! 4. Seed the mob factory and spawn the initial population
//! 5. Run the tick loop
//! 6. Log the summary and the final census

mod config;
mod error;
mod runner;

use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::SimulationConfig;
use crate::error::EngineError;

/// Name of the config file looked up in the working directory.
const CONFIG_FILE: &str = "warren-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration, world setup or the tick loop fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration; logging level comes from it.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("warren-engine starting");
    if !from_file {
        info!(path = CONFIG_FILE, "Config file not found, using defaults");
    }
    info!(
        world_name = config.world.name,
        seed = config.world.seed,
        tick_interval_ms = config.world.tick_interval_ms,
        max_ticks = config.world.max_ticks,
        "Configuration loaded"
    );

    // 3-4. Seed world, observers and mobs.
    let (mut sim, inbox) = runner::build(&config).map_err(EngineError::from)?;
    let chronicle = runner::spawn_chronicle(inbox);

    // 5. Run until the tick limit or Ctrl-C.
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl-C handler unavailable, running to tick limit");
            std::future::pending::<()>().await;
        }
    };
    let summary = runner::run_ticks(&mut sim, &config, shutdown)
        .await
        .map_err(EngineError::from)?;

    // 6. Log results.
    runner::log_simulation_end(&summary, &sim);

    drop(sim);
    let heard = chronicle.await.map_err(EngineError::from)?;
    info!(
        end_reason = ?summary.end_reason,
        ticks = summary.ticks,
        chronicle_lines = heard,
        "warren-engine shutdown complete"
    );

    Ok(())
}

/// Load the configuration from [`CONFIG_FILE`], or defaults if it is absent.
///
/// The flag reports whether the file was found.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok((config, true))
    } else {
        Ok((SimulationConfig::default(), false))
    }
}
