//! Data structures for league match scoring: holes, scorecards, results.

mod error;
mod hole;
mod player;
mod result;

pub use error::ScoringError;
pub use hole::{Hole, HoleId, HANDICAP_INDEX_RANGE};
pub use player::{PlayerId, PlayerScoreInput};
pub use result::{HoleResult, MatchupResult, Side, TeamMatchResult};
