//! Computed results: per-hole outcomes, singles matchups, and the team match.

use crate::models::hole::HoleId;
use crate::models::player::PlayerId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One side of a head-to-head: player 1 / player 2 in a matchup, team 1 / team 2 in a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// Outcome of a single hole in a singles matchup.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HoleResult {
    pub hole_id: HoleId,
    pub hole_number: u8,
    pub player1_gross: u32,
    pub player2_gross: u32,
    pub player1_net: u32,
    pub player2_net: u32,
    /// Which player received a handicap stroke on this hole, if any.
    pub stroke_given_to: Option<Side>,
    /// Lower net score wins; None on a tie.
    pub winner: Option<Side>,
}

/// A resolved head-to-head between one player from each team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchupResult {
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    /// player1 handicap minus player2 handicap.
    pub handicap_diff: Decimal,
    pub holes: Vec<HoleResult>,
    pub player1_points: u32,
    pub player2_points: u32,
}

impl MatchupResult {
    /// Hole-win points earned by one side.
    pub fn points_for(&self, side: Side) -> u32 {
        match side {
            Side::One => self.player1_points,
            Side::Two => self.player2_points,
        }
    }

    /// Number of holes halved (no point awarded).
    pub fn tied_holes(&self) -> usize {
        self.holes.iter().filter(|h| h.winner.is_none()).count()
    }

    /// Gross strokes played by one side across all holes. Widened so long cards cannot wrap.
    pub fn gross_total(&self, side: Side) -> u64 {
        self.holes
            .iter()
            .map(|h| match side {
                Side::One => u64::from(h.player1_gross),
                Side::Two => u64::from(h.player2_gross),
            })
            .sum()
    }
}

/// Full result of a team match: singles points, team totals, and the bonus point.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamMatchResult {
    pub team1_total_points: u32,
    pub team2_total_points: u32,
    pub team1_gross_total: u64,
    pub team2_gross_total: u64,
    pub team1_average_handicap: Decimal,
    pub team2_average_handicap: Decimal,
    /// Gross total less the average-handicap difference for the higher-handicap team.
    pub team1_net_total: Decimal,
    pub team2_net_total: Decimal,
    /// None when net totals are equal.
    pub bonus_point_winner: Option<Side>,
    /// Lowest handicaps paired first. Player 1 of each matchup is from team 1.
    pub matchups: Vec<MatchupResult>,
}

impl TeamMatchResult {
    pub fn points_for(&self, side: Side) -> u32 {
        match side {
            Side::One => self.team1_total_points,
            Side::Two => self.team2_total_points,
        }
    }

    /// Team with more total points; None on a drawn match.
    pub fn winner(&self) -> Option<Side> {
        use std::cmp::Ordering::*;
        match self.team1_total_points.cmp(&self.team2_total_points) {
            Greater => Some(Side::One),
            Less => Some(Side::Two),
            Equal => None,
        }
    }
}
