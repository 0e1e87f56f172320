//! Play-by-play wire types and the built-in fixture sequence.
//!
//! The JSON shape mirrors the subset of the NHL gamecenter play-by-play
//! response that downstream consumers read: a `plays` array whose
//! entries carry a `typeDescKey` tag.

use serde::{Deserialize, Serialize};

/// Event tags served by the built-in play-by-play sequence, in order.
pub const BUILTIN_PLAY_TAGS: [&str; 10] = [
    "faceoff",
    "shot-on-goal",
    "blocked-shot",
    "missed-shot",
    "goal",
    "hit",
    "takeaway",
    "giveaway",
    "penalty",
    "game-end",
];

/// A single simulated play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    /// Free-form event type tag (e.g. `faceoff`, `goal`, `game-end`).
    pub type_desc_key: String,
}

impl Play {
    /// Create a play with the given type tag.
    pub fn new(type_desc_key: impl Into<String>) -> Self {
        Self {
            type_desc_key: type_desc_key.into(),
        }
    }
}

/// One play-by-play fixture response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayByPlayResponse {
    /// Plays in this response. Built-in fixtures hold exactly one.
    pub plays: Vec<Play>,
}

impl PlayByPlayResponse {
    /// Wrap a single play tag in a response.
    pub fn single(type_desc_key: impl Into<String>) -> Self {
        Self {
            plays: vec![Play::new(type_desc_key)],
        }
    }
}

/// Build the default ten-response play-by-play sequence.
pub fn builtin_sequence() -> Vec<PlayByPlayResponse> {
    BUILTIN_PLAY_TAGS
        .iter()
        .map(|tag| PlayByPlayResponse::single(*tag))
        .collect()
}
