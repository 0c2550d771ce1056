//! Errors raised by course validation and match scoring.

use crate::models::hole::HoleId;
use crate::models::player::PlayerId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScoringError {
    /// A hole in the round has no gross score for this player.
    #[error("Player {player_id} has no score for hole {hole_number}")]
    MissingScore {
        player_id: PlayerId,
        hole_id: HoleId,
        hole_number: u8,
    },

    /// Gross strokes must be at least 1.
    #[error("Player {player_id} has an invalid score of 0 on hole {hole_number}")]
    InvalidStrokes {
        player_id: PlayerId,
        hole_id: HoleId,
        hole_number: u8,
    },

    #[error("Hole {hole_number} has par {par}; par must be 3, 4 or 5")]
    InvalidPar { hole_number: u8, par: u8 },

    #[error("Hole {hole_number} has handicap index {handicap_index}; must be between 1 and 18")]
    InvalidHandicapIndex { hole_number: u8, handicap_index: u8 },

    #[error("Handicap index {handicap_index} is used by more than one hole")]
    DuplicateHandicapIndex { handicap_index: u8 },

    /// Handicap arithmetic left the representable decimal range.
    #[error("Handicap {handicap} is too large to score")]
    HandicapOverflow { handicap: Decimal },

    /// Team aggregation needs exactly `expected` players per team.
    #[error("Each team must have exactly {expected} players (got {found})")]
    WrongTeamSize { expected: usize, found: usize },
}
