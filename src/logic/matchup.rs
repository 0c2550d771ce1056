//! Singles matchup: hole-by-hole net comparison between two players.

use crate::logic::strokes::{allocate_stroke, net_score};
use crate::models::{Hole, HoleResult, MatchupResult, PlayerScoreInput, ScoringError, Side};
use std::cmp::Ordering;

/// Resolve a head-to-head between `player1` and `player2` over `holes`.
///
/// Each hole is scored independently: strokes are allocated from the handicap
/// difference, the lower net score wins one point, and equal nets halve the hole.
/// A missing or zero gross score for either player fails the whole matchup.
pub fn resolve_matchup(
    holes: &[Hole],
    player1: &PlayerScoreInput,
    player2: &PlayerScoreInput,
) -> Result<MatchupResult, ScoringError> {
    let handicap_diff = player1
        .handicap
        .checked_sub(player2.handicap)
        .ok_or(ScoringError::HandicapOverflow {
            handicap: player1.handicap,
        })?;
    let mut results = Vec::with_capacity(holes.len());
    let mut player1_points = 0;
    let mut player2_points = 0;

    for hole in holes {
        let player1_gross = gross_strokes(player1, hole)?;
        let player2_gross = gross_strokes(player2, hole)?;

        let stroke_given_to = allocate_stroke(hole, handicap_diff);
        let player1_net = net_score(player1_gross, stroke_given_to == Some(Side::One));
        let player2_net = net_score(player2_gross, stroke_given_to == Some(Side::Two));

        let winner = match player1_net.cmp(&player2_net) {
            Ordering::Less => Some(Side::One),
            Ordering::Greater => Some(Side::Two),
            Ordering::Equal => None,
        };
        match winner {
            Some(Side::One) => player1_points += 1,
            Some(Side::Two) => player2_points += 1,
            None => {}
        }

        results.push(HoleResult {
            hole_id: hole.id,
            hole_number: hole.number,
            player1_gross,
            player2_gross,
            player1_net,
            player2_net,
            stroke_given_to,
            winner,
        });
    }

    Ok(MatchupResult {
        player1_id: player1.player_id,
        player2_id: player2.player_id,
        handicap_diff,
        holes: results,
        player1_points,
        player2_points,
    })
}

fn gross_strokes(player: &PlayerScoreInput, hole: &Hole) -> Result<u32, ScoringError> {
    match player.strokes_on(hole.id) {
        Some(0) => Err(ScoringError::InvalidStrokes {
            player_id: player.player_id,
            hole_id: hole.id,
            hole_number: hole.number,
        }),
        Some(strokes) => Ok(strokes),
        None => Err(ScoringError::MissingScore {
            player_id: player.player_id,
            hole_id: hole.id,
            hole_number: hole.number,
        }),
    }
}
