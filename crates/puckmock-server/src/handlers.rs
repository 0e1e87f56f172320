//! Endpoint handlers for the two provider stand-ins.
//!
//! Handlers receive the full request URI, percent-decode its path, and
//! pass the decoded path to the fixture component, which extracts the
//! game identifier at fixed offsets. Offsets therefore apply to the
//! decoded path: `/moneypuck/gameData/20242025/2024%3030412.csv` resolves
//! game `2024030412`.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | any | `/v1/gamecenter/{gameID}[/play-by-play]` | Next play in the cycle (JSON) |
//! | any | `/moneypuck/gameData/{season}/{gameID}.csv` | Game statistics (CSV) |

use std::borrow::Cow;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{Uri, header};
use axum::response::IntoResponse;
use puckmock_fixtures::{EventCycler, PlayByPlayResponse, StatsTable};

use crate::error::ApiError;

/// Content type of the stats feed.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Percent-decode the path of `uri`.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] if the decoded bytes are not UTF-8.
pub fn decoded_path(uri: &Uri) -> Result<Cow<'_, str>, ApiError> {
    urlencoding::decode(uri.path())
        .map_err(|e| ApiError::BadRequest(format!("path is not UTF-8 once decoded: {e}")))
}

/// Serve the next play-by-play fixture.
pub async fn play_by_play(
    State(cycler): State<Arc<EventCycler>>,
    uri: Uri,
) -> Result<Json<PlayByPlayResponse>, ApiError> {
    let path = decoded_path(&uri)?;
    let response = cycler.handle(&path).await?;
    Ok(Json(response))
}

/// Serve the statistics CSV for the requested game.
pub async fn game_stats(
    State(table): State<Arc<StatsTable>>,
    uri: Uri,
) -> Result<impl IntoResponse, ApiError> {
    let path = decoded_path(&uri)?;
    let body = table.handle(&path)?;
    Ok(([(header::CONTENT_TYPE, CSV_CONTENT_TYPE)], body))
}
