//! Match scoring: stroke allocation, singles matchups, team aggregation.

mod course;
mod matchup;
mod strokes;
mod team_match;

pub use course::validate_course;
pub use matchup::resolve_matchup;
pub use strokes::{allocate_stroke, net_score};
pub use team_match::{average_handicap, pair_by_handicap, score_team_match, TEAM_SIZE};
