//! HTTP stand-ins for two external hockey data providers.
//!
//! This crate serves the fixture components from [`puckmock_fixtures`]
//! over two independent Axum routers, each bound to its own TCP port:
//!
//! - **Play-by-play** (`/v1/gamecenter/...`) -- JSON responses drawn
//!   round-robin from a shared [`EventCycler`]
//! - **Stats** (`/moneypuck/gameData/...`) -- two-line CSV documents
//!   looked up in a [`StatsTable`]
//!
//! Ports come from `PLAYBYPLAY_PORT` and `STATS_PORT` (see
//! [`config::ServerConfig`]). Integration tests can skip the listeners
//! entirely and drive the routers with `tower::ServiceExt::oneshot`.
//!
//! [`EventCycler`]: puckmock_fixtures::EventCycler
//! [`StatsTable`]: puckmock_fixtures::StatsTable

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

// Re-export primary types for convenience.
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use router::{build_play_by_play_router, build_stats_router};
pub use server::{RunningServers, ServerError, spawn_servers};
