//! Player identity and a player's scorecard for one round.

use crate::models::hole::HoleId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a player (used in matchups and lookups).
pub type PlayerId = Uuid;

/// One player's round: current handicap plus gross strokes per hole.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerScoreInput {
    pub player_id: PlayerId,
    /// Handicap index at the time of the match. Not course-adjusted.
    pub handicap: Decimal,
    /// Gross strokes keyed by hole id.
    #[serde(default)]
    pub hole_scores: HashMap<HoleId, u32>,
}

impl PlayerScoreInput {
    /// Create a scorecard for a new player id with no holes recorded yet.
    pub fn new(handicap: Decimal) -> Self {
        Self::for_player(Uuid::new_v4(), handicap)
    }

    /// Create an empty scorecard for an existing player.
    pub fn for_player(player_id: PlayerId, handicap: Decimal) -> Self {
        Self {
            player_id,
            handicap,
            hole_scores: HashMap::new(),
        }
    }

    /// Record gross strokes for a hole, replacing any earlier entry.
    pub fn record(&mut self, hole_id: HoleId, strokes: u32) {
        self.hole_scores.insert(hole_id, strokes);
    }

    /// Builder form of [`record`](Self::record).
    pub fn with_score(mut self, hole_id: HoleId, strokes: u32) -> Self {
        self.record(hole_id, strokes);
        self
    }

    /// Gross strokes for a hole, if recorded.
    pub fn strokes_on(&self, hole_id: HoleId) -> Option<u32> {
        self.hole_scores.get(&hole_id).copied()
    }
}
