//! Round-robin play-by-play emitter.
//!
//! [`EventCycler`] owns a fixed, non-empty sequence of
//! [`PlayByPlayResponse`] fixtures and a cursor. Each request reads the
//! fixture at the cursor and advances the cursor modulo the sequence
//! length. The N-th request served by a cycler (1-indexed) returns element
//! `(N - 1) mod len`, whatever game it asked for.
//!
//! # Concurrency
//!
//! The cursor sits behind a single [`tokio::sync::Mutex`] held across the
//! whole read-then-advance step, so concurrent requests never observe the
//! same pre-advance index and never skip one. The fixture sequence itself
//! is immutable after construction and needs no lock.

use tokio::sync::Mutex;
use tracing::info;

use crate::error::FixtureError;
use crate::path::play_by_play_game_id;
use crate::play::{PlayByPlayResponse, builtin_sequence};

/// Result of one cycler step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Served {
    /// The fixture response for this request.
    pub response: PlayByPlayResponse,
    /// 1-indexed position of the response within the sequence.
    pub position: usize,
    /// Length of the sequence.
    pub total: usize,
}

/// Shared, cycling play-by-play fixture source.
#[derive(Debug)]
pub struct EventCycler {
    responses: Vec<PlayByPlayResponse>,
    cursor: Mutex<usize>,
}

impl EventCycler {
    /// Create a cycler over `responses`, starting at the first element.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::EmptySequence`] if `responses` is empty. An
    /// empty sequence is a startup configuration error.
    pub fn new(responses: Vec<PlayByPlayResponse>) -> Result<Self, FixtureError> {
        if responses.is_empty() {
            return Err(FixtureError::EmptySequence);
        }
        Ok(Self {
            responses,
            cursor: Mutex::new(0),
        })
    }

    /// Create a cycler over the built-in ten-event game sequence.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::new(builtin_sequence())
    }

    /// Number of fixtures in the sequence.
    pub const fn len(&self) -> usize {
        self.responses.len()
    }

    /// Always `false`: construction rejects empty sequences.
    pub const fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Index (0-based) of the fixture the next request will receive.
    pub async fn position(&self) -> usize {
        *self.cursor.lock().await
    }

    /// Serve the fixture at the cursor and advance the cursor.
    ///
    /// `game_id` is only recorded in the log; every game shares the same
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::CursorOutOfRange`] if the cursor invariant
    /// has been broken.
    pub async fn advance(&self, game_id: &str) -> Result<Served, FixtureError> {
        let mut cursor = self.cursor.lock().await;
        let index = *cursor;
        let total = self.responses.len();

        let response = self
            .responses
            .get(index)
            .cloned()
            .ok_or(FixtureError::CursorOutOfRange {
                cursor: index,
                len: total,
            })?;

        let position = index.saturating_add(1);
        *cursor = position.checked_rem(total).unwrap_or(0);

        info!(position, total, game_id, "Serving play-by-play event");

        Ok(Served {
            response,
            position,
            total,
        })
    }

    /// Handle a play-by-play request path.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Path`] if the path is shorter than the
    /// gamecenter prefix.
    pub async fn handle(&self, path: &str) -> Result<PlayByPlayResponse, FixtureError> {
        let game_id = play_by_play_game_id(path)?;
        let served = self.advance(game_id).await?;
        Ok(served.response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::play::BUILTIN_PLAY_TAGS;

    fn tag(response: &PlayByPlayResponse) -> &str {
        &response.plays.first().unwrap().type_desc_key
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = EventCycler::new(Vec::new()).unwrap_err();
        assert!(matches!(err, FixtureError::EmptySequence));
    }

    #[tokio::test]
    async fn first_request_serves_faceoff() {
        let cycler = EventCycler::builtin().unwrap();
        let served = cycler.advance("2024030411").await.unwrap();
        assert_eq!(tag(&served.response), "faceoff");
        assert_eq!(served.position, 1);
        assert_eq!(served.total, 10);
    }

    #[tokio::test]
    async fn serves_sequence_in_order_and_wraps() {
        let cycler = EventCycler::builtin().unwrap();
        for (k, expected) in BUILTIN_PLAY_TAGS.iter().cycle().take(25).enumerate() {
            let served = cycler.advance("g").await.unwrap();
            assert_eq!(tag(&served.response), *expected, "request index {k}");
        }
        assert_eq!(cycler.position().await, 5);
    }

    #[tokio::test]
    async fn eleventh_request_matches_first() {
        let cycler = EventCycler::builtin().unwrap();
        let first = cycler.advance("a").await.unwrap();
        for _ in 0..9 {
            cycler.advance("a").await.unwrap();
        }
        let eleventh = cycler.advance("a").await.unwrap();
        assert_eq!(first.response, eleventh.response);
        assert_eq!(eleventh.position, 1);
    }

    #[tokio::test]
    async fn cursor_is_shared_across_games() {
        let cycler = EventCycler::builtin().unwrap();
        let a = cycler.advance("2024030411").await.unwrap();
        let b = cycler.advance("2024030412").await.unwrap();
        let c = cycler.advance("2024030411").await.unwrap();
        assert_eq!(tag(&a.response), "faceoff");
        assert_eq!(tag(&b.response), "shot-on-goal");
        assert_eq!(tag(&c.response), "blocked-shot");
    }

    #[tokio::test]
    async fn single_fixture_always_repeats() {
        let cycler = EventCycler::new(vec![PlayByPlayResponse::single("goal")]).unwrap();
        for _ in 0..3 {
            let served = cycler.advance("x").await.unwrap();
            assert_eq!(tag(&served.response), "goal");
            assert_eq!(served.position, 1);
        }
        assert_eq!(cycler.position().await, 0);
    }

    #[tokio::test]
    async fn handle_parses_path_then_advances() {
        let cycler = EventCycler::builtin().unwrap();
        let response = cycler
            .handle("/v1/gamecenter/2024030411/play-by-play")
            .await
            .unwrap();
        assert_eq!(tag(&response), "faceoff");
        assert_eq!(cycler.position().await, 1);
    }

    #[tokio::test]
    async fn handle_rejects_short_path_without_advancing() {
        let cycler = EventCycler::builtin().unwrap();
        let err = cycler.handle("/v1").await.unwrap_err();
        assert!(matches!(err, FixtureError::Path(_)));
        assert_eq!(cycler.position().await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_each_take_one_slot() {
        let cycler = Arc::new(EventCycler::builtin().unwrap());
        let requests = 37;

        let mut handles = Vec::new();
        for i in 0..requests {
            let cycler = Arc::clone(&cycler);
            handles.push(tokio::spawn(async move {
                cycler.advance(&format!("game-{i}")).await.unwrap()
            }));
        }

        let mut served = Vec::new();
        for handle in handles {
            let response = handle.await.unwrap().response;
            served.push(tag(&response).to_owned());
        }
        served.sort();

        let mut expected: Vec<String> = BUILTIN_PLAY_TAGS
            .iter()
            .cycle()
            .take(requests)
            .map(|t| (*t).to_owned())
            .collect();
        expected.sort();

        assert_eq!(served, expected);
        assert_eq!(cycler.position().await, 7);
    }
}
