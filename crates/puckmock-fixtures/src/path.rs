//! Game identifier extraction from provider request paths.
//!
//! The real providers put the game identifier at a fixed position in the
//! URL, so extraction cuts the path at fixed byte offsets rather than
//! matching a pattern. The routing layer only dispatches paths that start
//! with the matching prefix; the prefix bytes themselves are not compared
//! here. A stats request for another season therefore resolves the same
//! game identifier as one for `20242025`.
//!
//! Paths too short for the offsets yield a [`PathError`] instead of an
//! out-of-range slice.

use crate::error::PathError;

/// Route prefix of the play-by-play feed.
pub const PLAY_BY_PLAY_PREFIX: &str = "/v1/gamecenter/";

/// Optional trailing segment on play-by-play requests.
pub const PLAY_BY_PLAY_SUFFIX: &str = "/play-by-play";

/// Route prefix of the stats feed, as dispatched by the router.
pub const STATS_ROUTE_PREFIX: &str = "/moneypuck/gameData/";

/// Full fixed prefix of a stats request, including the season segment.
pub const STATS_PREFIX: &str = "/moneypuck/gameData/20242025/";

/// Length of the `.csv` extension trimmed from stats requests.
pub const STATS_EXTENSION_LEN: usize = 4;

/// Extract the game identifier from a play-by-play request path.
///
/// Accepts `/v1/gamecenter/{gameID}` and
/// `/v1/gamecenter/{gameID}/play-by-play`. The suffix is only removed when
/// something precedes it, so `/v1/gamecenter//play-by-play` yields
/// `/play-by-play`. The identifier is not validated.
///
/// # Errors
///
/// Returns [`PathError`] if the path is shorter than the prefix.
pub fn play_by_play_game_id(path: &str) -> Result<&str, PathError> {
    let rest = tail_after(path, PLAY_BY_PLAY_PREFIX.len())?;
    match rest.strip_suffix(PLAY_BY_PLAY_SUFFIX) {
        Some(game_id) if !game_id.is_empty() => Ok(game_id),
        _ => Ok(rest),
    }
}

/// Extract the game identifier from a stats request path.
///
/// Drops the first `len(STATS_PREFIX)` bytes, then the trailing
/// [`STATS_EXTENSION_LEN`] bytes. The extension is assumed to be `.csv`
/// and is not inspected.
///
/// # Errors
///
/// Returns [`PathError`] if the path cannot hold both the prefix and the
/// extension.
pub fn stats_game_id(path: &str) -> Result<&str, PathError> {
    let rest = tail_after(path, STATS_PREFIX.len())?;
    let end = rest
        .len()
        .checked_sub(STATS_EXTENSION_LEN)
        .ok_or_else(|| PathError::TooShort {
            path: path.to_owned(),
            required: STATS_PREFIX.len().saturating_add(STATS_EXTENSION_LEN),
        })?;
    let Some(game_id) = rest.get(..end) else {
        return Err(PathError::NotCharBoundary {
            path: path.to_owned(),
            offset: STATS_PREFIX.len().saturating_add(end),
        });
    };
    Ok(game_id)
}

fn tail_after(path: &str, offset: usize) -> Result<&str, PathError> {
    if path.len() < offset {
        return Err(PathError::TooShort {
            path: path.to_owned(),
            required: offset,
        });
    }
    let Some(rest) = path.get(offset..) else {
        return Err(PathError::NotCharBoundary {
            path: path.to_owned(),
            offset,
        });
    };
    Ok(rest)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn play_by_play_strips_suffix() {
        let id = play_by_play_game_id("/v1/gamecenter/2024030411/play-by-play").unwrap();
        assert_eq!(id, "2024030411");
    }

    #[test]
    fn play_by_play_bare_game_id() {
        let id = play_by_play_game_id("/v1/gamecenter/2024030411").unwrap();
        assert_eq!(id, "2024030411");
    }

    #[test]
    fn play_by_play_accepts_any_identifier() {
        let id = play_by_play_game_id("/v1/gamecenter/not a game/feed").unwrap();
        assert_eq!(id, "not a game/feed");
    }

    #[test]
    fn play_by_play_keeps_suffix_with_nothing_before_it() {
        let id = play_by_play_game_id("/v1/gamecenter//play-by-play").unwrap();
        assert_eq!(id, "/play-by-play");
    }

    #[test]
    fn play_by_play_prefix_only_is_empty_id() {
        assert_eq!(play_by_play_game_id("/v1/gamecenter/").unwrap(), "");
    }

    #[test]
    fn play_by_play_too_short() {
        let err = play_by_play_game_id("/v1/game").unwrap_err();
        assert_eq!(
            err,
            PathError::TooShort {
                path: "/v1/game".to_owned(),
                required: PLAY_BY_PLAY_PREFIX.len(),
            }
        );
    }

    #[test]
    fn stats_strips_prefix_and_extension() {
        let id = stats_game_id("/moneypuck/gameData/20242025/2024030412.csv").unwrap();
        assert_eq!(id, "2024030412");
    }

    #[test]
    fn stats_cuts_at_fixed_offsets_regardless_of_season() {
        let id = stats_game_id("/moneypuck/gameData/20232024/2023020001.csv").unwrap();
        assert_eq!(id, "2023020001");
    }

    #[test]
    fn stats_does_not_inspect_extension() {
        let id = stats_game_id("/moneypuck/gameData/20242025/2024030412.txt").unwrap();
        assert_eq!(id, "2024030412");
    }

    #[test]
    fn stats_extension_only_is_empty_id() {
        assert_eq!(stats_game_id("/moneypuck/gameData/20242025/.csv").unwrap(), "");
    }

    #[test]
    fn stats_missing_extension_room_is_rejected() {
        let err = stats_game_id("/moneypuck/gameData/20242025/ab").unwrap_err();
        assert!(matches!(err, PathError::TooShort { required: 33, .. }));
    }

    #[test]
    fn stats_route_prefix_only_is_rejected() {
        assert!(stats_game_id(STATS_ROUTE_PREFIX).is_err());
    }

    #[test]
    fn offset_inside_multibyte_char_is_rejected() {
        let err = play_by_play_game_id("/v1/gamecenter\u{e9}x").unwrap_err();
        assert!(matches!(err, PathError::NotCharBoundary { offset: 15, .. }));
    }
}
