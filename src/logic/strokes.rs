//! Handicap stroke allocation and net scores for a single hole.

use crate::models::{Hole, Side};
use rust_decimal::Decimal;

/// Decide which player, if any, receives a stroke on `hole`.
///
/// `handicap_diff` is player 1's handicap minus player 2's. A stroke is given on
/// par-4 and par-5 holes whose handicap index is within the whole-stroke gap, and
/// always goes to the higher-handicap player. Par-3 holes never get a stroke.
pub fn allocate_stroke(hole: &Hole, handicap_diff: Decimal) -> Option<Side> {
    if hole.is_par_three() {
        return None;
    }
    // index is integral, so comparing against the raw gap drops any fractional stroke
    if Decimal::from(hole.handicap_index) > handicap_diff.abs() {
        return None;
    }
    if handicap_diff > Decimal::ZERO {
        Some(Side::One)
    } else {
        Some(Side::Two)
    }
}

/// Net score for a hole: one less than gross when the player received a stroke.
pub fn net_score(gross: u32, received_stroke: bool) -> u32 {
    gross - u32::from(received_stroke)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn par_three_never_gets_a_stroke() {
        let hole = Hole::new(1, 3, 1);
        assert_eq!(allocate_stroke(&hole, diff(18)), None);
        assert_eq!(allocate_stroke(&hole, diff(-18)), None);
    }

    #[test]
    fn stroke_given_only_when_gap_reaches_index() {
        let hole = Hole::new(7, 4, 5);
        assert_eq!(allocate_stroke(&hole, diff(4)), None);
        assert_eq!(allocate_stroke(&hole, diff(5)), Some(Side::One));
        assert_eq!(allocate_stroke(&hole, diff(-5)), Some(Side::Two));
    }

    #[test]
    fn par_five_hardest_hole_gets_stroke_with_gap_of_one() {
        let hole = Hole::new(12, 5, 1);
        assert_eq!(allocate_stroke(&hole, diff(1)), Some(Side::One));
    }

    #[test]
    fn fractional_gap_is_truncated() {
        let hole = Hole::new(3, 4, 5);
        // 4.9 strokes covers only indexes 1..=4
        assert_eq!(allocate_stroke(&hole, Decimal::new(49, 1)), None);
        assert_eq!(allocate_stroke(&hole, Decimal::new(-51, 1)), Some(Side::Two));
    }

    #[test]
    fn zero_gap_gives_no_stroke() {
        for index in 1..=18 {
            let hole = Hole::new(index, 4, index);
            assert_eq!(allocate_stroke(&hole, Decimal::ZERO), None);
        }
    }

    #[test]
    fn net_score_subtracts_one_for_stroke() {
        assert_eq!(net_score(6, true), 5);
        assert_eq!(net_score(5, false), 5);
    }
}
