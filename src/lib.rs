//! Indoor golf league: library with scoring models and the match scoring engine.

pub mod logic;
pub mod models;

pub use logic::{
    allocate_stroke, average_handicap, net_score, pair_by_handicap, resolve_matchup,
    score_team_match, validate_course, TEAM_SIZE,
};
pub use models::{
    Hole, HoleId, HoleResult, MatchupResult, PlayerId, PlayerScoreInput, ScoringError, Side,
    TeamMatchResult, HANDICAP_INDEX_RANGE,
};
