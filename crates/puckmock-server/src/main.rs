//! Provider stand-in binary.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Read listener ports from the environment
//! 3. Build the play-by-play cycler and the stats table
//! 4. Bind both listeners (bind failure aborts startup)
//! 5. Serve until `Ctrl-C`

use std::sync::Arc;

use puckmock_fixtures::{EventCycler, StatsTable};
use puckmock_server::{ServerConfig, spawn_servers};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("puckmock starting");

    let config = ServerConfig::from_env()?;
    info!(
        host = config.host,
        play_by_play_port = config.play_by_play_port,
        stats_port = config.stats_port,
        "Configuration loaded"
    );

    let cycler = Arc::new(EventCycler::builtin()?);
    let table = Arc::new(StatsTable::builtin());
    info!(
        play_by_play_events = cycler.len(),
        stats_games = table.len(),
        "Fixtures loaded"
    );

    let servers = spawn_servers(&config, cycler, table).await?;
    info!(
        play_by_play = %servers.play_by_play_addr(),
        stats = %servers.stats_addr(),
        "Provider stand-ins running"
    );

    servers.wait().await?;
    info!("puckmock stopped");
    Ok(())
}
