//! Axum router construction for the provider stand-ins.
//!
//! Each provider gets its own [`Router`] so the two can be bound to
//! separate ports. Routes match by prefix with any HTTP method; every
//! other path falls through to Axum's default 404.

use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use puckmock_fixtures::{EventCycler, StatsTable};
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the play-by-play router.
///
/// - `/v1/gamecenter/` and everything below it -- next cycled play
pub fn build_play_by_play_router(cycler: Arc<EventCycler>) -> Router {
    Router::new()
        .route("/v1/gamecenter/", any(handlers::play_by_play))
        .route("/v1/gamecenter/{*rest}", any(handlers::play_by_play))
        .layer(TraceLayer::new_for_http())
        .with_state(cycler)
}

/// Build the stats router.
///
/// - `/moneypuck/gameData/` and everything below it -- CSV game stats
pub fn build_stats_router(table: Arc<StatsTable>) -> Router {
    Router::new()
        .route("/moneypuck/gameData/", any(handlers::game_stats))
        .route("/moneypuck/gameData/{*rest}", any(handlers::game_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(table)
}
