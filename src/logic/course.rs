//! Boundary check for hole data supplied by the course provider.

use crate::models::{Hole, ScoringError};
use std::collections::HashSet;

/// Validate a course's hole set before scoring.
///
/// Every hole must have par 3, 4 or 5 and a handicap index in 1..=18, and no two
/// holes may share a handicap index. Scoring itself assumes these hold.
pub fn validate_course(holes: &[Hole]) -> Result<(), ScoringError> {
    let mut seen = HashSet::with_capacity(holes.len());
    for hole in holes {
        hole.validate()?;
        if !seen.insert(hole.handicap_index) {
            return Err(ScoringError::DuplicateHandicapIndex {
                handicap_index: hole.handicap_index,
            });
        }
    }
    Ok(())
}
