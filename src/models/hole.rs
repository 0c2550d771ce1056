//! Course holes: par and difficulty rank.

use crate::models::error::ScoringError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a hole.
pub type HoleId = Uuid;

/// Lowest and highest difficulty rank a hole can carry.
pub const HANDICAP_INDEX_RANGE: std::ops::RangeInclusive<u8> = 1..=18;

/// A single hole on a course.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub id: HoleId,
    /// Position on the card (1..18). Display only.
    pub number: u8,
    /// 3, 4 or 5.
    pub par: u8,
    /// Difficulty rank, 1 = hardest. Decides which holes receive strokes first.
    pub handicap_index: u8,
}

impl Hole {
    /// Create a hole with a fresh id.
    pub fn new(number: u8, par: u8, handicap_index: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            par,
            handicap_index,
        }
    }

    /// Check par and handicap index are in range.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if !matches!(self.par, 3..=5) {
            return Err(ScoringError::InvalidPar {
                hole_number: self.number,
                par: self.par,
            });
        }
        if !HANDICAP_INDEX_RANGE.contains(&self.handicap_index) {
            return Err(ScoringError::InvalidHandicapIndex {
                hole_number: self.number,
                handicap_index: self.handicap_index,
            });
        }
        Ok(())
    }

    /// Par-3 holes never receive handicap strokes.
    pub fn is_par_three(&self) -> bool {
        self.par == 3
    }
}
