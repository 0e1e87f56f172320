//! Listener lifecycle for the provider stand-ins.
//!
//! [`spawn_servers`] binds both listeners before spawning anything, so a
//! port conflict fails startup instead of surfacing later from a
//! background task. Each router then runs on its own Tokio task until
//! `Ctrl-C` or until the task is aborted.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use puckmock_fixtures::{EventCycler, StatsTable};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::router::{build_play_by_play_router, build_stats_router};

/// Errors that can occur when starting or running the listeners.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to build or bind the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// A server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),

    /// A server task panicked or was cancelled.
    #[error("server task failed: {0}")]
    Join(String),
}

/// Bind a TCP listener on `addr`.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address is in use or not
/// permitted.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))
}

/// Serve `router` on an already-bound listener until `Ctrl-C`.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] on a fatal I/O error.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    name: &'static str,
) -> Result<(), ServerError> {
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Serve(format!("{name}: no local address: {e}")))?;
    info!(server = name, %addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(name))
        .await
        .map_err(|e| ServerError::Serve(format!("{name}: {e}")))
}

async fn shutdown_signal(name: &'static str) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(server = name, error = %e, "Cannot listen for Ctrl-C, running until aborted");
        std::future::pending::<()>().await;
    }
    info!(server = name, "Shutdown signal received");
}

/// Handles to both running listeners.
#[derive(Debug)]
pub struct RunningServers {
    play_by_play_addr: SocketAddr,
    stats_addr: SocketAddr,
    play_by_play: JoinHandle<Result<(), ServerError>>,
    stats: JoinHandle<Result<(), ServerError>>,
}

impl RunningServers {
    /// Bound address of the play-by-play listener.
    pub const fn play_by_play_addr(&self) -> SocketAddr {
        self.play_by_play_addr
    }

    /// Bound address of the stats listener.
    pub const fn stats_addr(&self) -> SocketAddr {
        self.stats_addr
    }

    /// Stop both listeners immediately.
    pub fn abort(&self) {
        self.play_by_play.abort();
        self.stats.abort();
    }

    /// Wait until both listeners have stopped.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by either listener.
    pub async fn wait(self) -> Result<(), ServerError> {
        let (play_by_play, stats) = tokio::join!(self.play_by_play, self.stats);
        play_by_play.map_err(|e| ServerError::Join(e.to_string()))??;
        stats.map_err(|e| ServerError::Join(e.to_string()))??;
        Ok(())
    }
}

/// Bind both listeners and serve each on a background task.
///
/// A port of `0` in `config` picks an ephemeral port; the bound
/// addresses are available on the returned [`RunningServers`].
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if either address is invalid or cannot
/// be bound. Nothing is spawned in that case.
pub async fn spawn_servers(
    config: &ServerConfig,
    cycler: Arc<EventCycler>,
    table: Arc<StatsTable>,
) -> Result<RunningServers, ServerError> {
    let play_by_play_addr = config
        .play_by_play_addr()
        .map_err(|e| ServerError::Bind(e.to_string()))?;
    let stats_addr = config
        .stats_addr()
        .map_err(|e| ServerError::Bind(e.to_string()))?;

    let play_by_play_listener = bind(play_by_play_addr).await?;
    let stats_listener = bind(stats_addr).await?;

    let play_by_play_addr = play_by_play_listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("play-by-play local address: {e}")))?;
    let stats_addr = stats_listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("stats local address: {e}")))?;

    let play_by_play = tokio::spawn(serve(
        play_by_play_listener,
        build_play_by_play_router(cycler),
        "play-by-play",
    ));
    let stats = tokio::spawn(serve(stats_listener, build_stats_router(table), "stats"));

    Ok(RunningServers {
        play_by_play_addr,
        stats_addr,
        play_by_play,
        stats,
    })
}
