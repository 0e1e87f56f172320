//! Per-game statistics lookup rendered in the `MoneyPuck` CSV shape.
//!
//! [`StatsTable`] is an immutable map from game identifier to
//! [`GameStats`], built once at startup. Lookups are exact string matches;
//! a miss returns the table's default record so callers always get a
//! well-formed document.

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::error::FixtureError;
use crate::path::stats_game_id;

/// CSV header emitted by the stats feed, in column order.
pub const STATS_HEADER: &str = concat!(
    "homeTeamGoals,awayTeamGoals,",
    "homeTeamExpectedGoals,awayTeamExpectedGoals,",
    "homeTeamShootOutGoals,awayTeamShootOutGoals",
);

/// Record served for games missing from the table.
pub const DEFAULT_STATS: [&str; 6] = ["3", "2", "2.50", "2.50", "0", "0"];

/// Built-in per-game records.
const BUILTIN_STATS: [(&str, [&str; 6]); 3] = [
    ("2024030411", ["3", "1", "2.35", "1.87", "0", "0"]),
    ("2024030412", ["2", "2", "3.12", "2.94", "2", "1"]),
    ("2024030413", ["1", "2", "1.95", "2.68", "0", "0"]),
];

/// Statistics for one game.
///
/// Values are kept as the provider's strings and written back verbatim;
/// `2.50` stays `2.50`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_field_names)]
pub struct GameStats {
    home_team_goals: String,
    away_team_goals: String,
    home_team_expected_goals: String,
    away_team_expected_goals: String,
    home_team_shoot_out_goals: String,
    away_team_shoot_out_goals: String,
}

impl GameStats {
    /// Build a record from the six fields in header order.
    pub fn from_fields(fields: [&str; 6]) -> Self {
        let [hg, ag, hxg, axg, hso, aso] = fields;
        Self {
            home_team_goals: hg.to_owned(),
            away_team_goals: ag.to_owned(),
            home_team_expected_goals: hxg.to_owned(),
            away_team_expected_goals: axg.to_owned(),
            home_team_shoot_out_goals: hso.to_owned(),
            away_team_shoot_out_goals: aso.to_owned(),
        }
    }

    /// The six fields in header order.
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.home_team_goals,
            &self.away_team_goals,
            &self.home_team_expected_goals,
            &self.away_team_expected_goals,
            &self.home_team_shoot_out_goals,
            &self.away_team_shoot_out_goals,
        ]
    }

    /// Render the record as a header line plus one data line.
    ///
    /// Fields are joined with `,` and never quoted, so a value that itself
    /// contains a comma or quote is written verbatim and shifts the
    /// columns for CSV readers.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the CSV writer fails.
    pub fn to_csv(&self) -> Result<String, FixtureError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(Vec::new());
        writer.serialize(self)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| FixtureError::CsvFlush(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Immutable game-statistics table with a default record.
#[derive(Debug, Clone)]
pub struct StatsTable {
    games: HashMap<String, GameStats>,
    fallback: GameStats,
}

impl StatsTable {
    /// Create a table from `games`, answering misses with `fallback`.
    pub const fn new(games: HashMap<String, GameStats>, fallback: GameStats) -> Self {
        Self { games, fallback }
    }

    /// The built-in three-game table with the `3,2,2.50,2.50,0,0` default.
    pub fn builtin() -> Self {
        let games = BUILTIN_STATS
            .iter()
            .map(|(id, fields)| ((*id).to_owned(), GameStats::from_fields(*fields)))
            .collect();
        Self::new(games, GameStats::from_fields(DEFAULT_STATS))
    }

    /// Number of games with their own record.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the table has no per-game records.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Look up `game_id`, falling back to the default record.
    pub fn lookup(&self, game_id: &str) -> &GameStats {
        self.games.get(game_id).unwrap_or(&self.fallback)
    }

    /// Handle a stats request path, returning the CSV body.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Path`] if the path cannot hold the fixed
    /// prefix and extension, or a CSV error if rendering fails.
    pub fn handle(&self, path: &str) -> Result<String, FixtureError> {
        let game_id = stats_game_id(path)?;
        info!(game_id, known = self.games.contains_key(game_id), "Serving game stats");
        self.lookup(game_id).to_csv()
    }
}
