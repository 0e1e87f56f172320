//! Fixture state machines behind the puckmock provider stand-ins.
//!
//! Two independent components, each owning its own state for the
//! lifetime of the process:
//!
//! - **[`EventCycler`]** -- the play-by-play feed. Holds a fixed, ordered
//!   list of [`PlayByPlayResponse`] fixtures and a cursor. Every request
//!   returns the fixture at the cursor and advances it, wrapping at the
//!   end. The cursor is global to the endpoint, not per game.
//! - **[`StatsTable`]** -- the game statistics feed. An immutable map from
//!   game identifier to [`GameStats`], with a default record for unknown
//!   games, rendered as a two-line CSV document.
//!
//! Both components accept the raw request path and extract the game
//! identifier with the fixed-offset rules in [`path`]. The crate has no
//! HTTP dependency; the server crate wires these into Axum handlers.

pub mod cycler;
pub mod error;
pub mod path;
pub mod play;
pub mod stats;

pub use cycler::{EventCycler, Served};
pub use error::{FixtureError, PathError};
pub use play::{Play, PlayByPlayResponse};
pub use stats::{GameStats, StatsTable};
