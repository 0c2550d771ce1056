//! Team match: pair players by handicap, resolve both singles, award the bonus point.

use crate::logic::matchup::resolve_matchup;
use crate::models::{Hole, PlayerScoreInput, ScoringError, Side, TeamMatchResult};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Players per team in a league match.
pub const TEAM_SIZE: usize = 2;

/// Pair players across two teams by handicap rank.
///
/// Each team is sorted by handicap ascending and the sorted lists are zipped, so the
/// lowest handicaps meet first. The sort is stable: teammates with equal handicaps
/// keep their input order.
pub fn pair_by_handicap<'a>(
    team1: &'a [PlayerScoreInput],
    team2: &'a [PlayerScoreInput],
) -> Vec<(&'a PlayerScoreInput, &'a PlayerScoreInput)> {
    sorted_by_handicap(team1)
        .into_iter()
        .zip(sorted_by_handicap(team2))
        .collect()
}

fn sorted_by_handicap(team: &[PlayerScoreInput]) -> Vec<&PlayerScoreInput> {
    let mut sorted: Vec<_> = team.iter().collect();
    sorted.sort_by_key(|p| p.handicap);
    sorted
}

/// Mean handicap of a team. Exact; no rounding. Zero for an empty team.
pub fn average_handicap(team: &[PlayerScoreInput]) -> Result<Decimal, ScoringError> {
    if team.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let total = team.iter().try_fold(Decimal::ZERO, |acc, p| {
        acc.checked_add(p.handicap)
            .ok_or(ScoringError::HandicapOverflow {
                handicap: p.handicap,
            })
    })?;
    Ok(total / Decimal::from(team.len()))
}

/// Score a full team match.
///
/// 1. Pair players by handicap and resolve each singles matchup.
/// 2. Gross total per team = all strokes by both of its players.
/// 3. The team with the higher average handicap has the average difference taken off
///    its gross total; the other team's net total is its gross.
/// 4. Strictly lower net total earns one bonus point.
pub fn score_team_match(
    holes: &[Hole],
    team1: &[PlayerScoreInput],
    team2: &[PlayerScoreInput],
) -> Result<TeamMatchResult, ScoringError> {
    for team in [team1, team2] {
        if team.len() != TEAM_SIZE {
            return Err(ScoringError::WrongTeamSize {
                expected: TEAM_SIZE,
                found: team.len(),
            });
        }
    }

    let matchups = pair_by_handicap(team1, team2)
        .into_iter()
        .map(|(p1, p2)| resolve_matchup(holes, p1, p2))
        .collect::<Result<Vec<_>, _>>()?;

    let team1_gross_total: u64 = matchups.iter().map(|m| m.gross_total(Side::One)).sum();
    let team2_gross_total: u64 = matchups.iter().map(|m| m.gross_total(Side::Two)).sum();

    let team1_average_handicap = average_handicap(team1)?;
    let team2_average_handicap = average_handicap(team2)?;
    let overflow = ScoringError::HandicapOverflow {
        handicap: team1_average_handicap.max(team2_average_handicap),
    };
    let adjustment = team1_average_handicap
        .checked_sub(team2_average_handicap)
        .ok_or_else(|| overflow.clone())?
        .abs();

    let mut team1_net_total = Decimal::from(team1_gross_total);
    let mut team2_net_total = Decimal::from(team2_gross_total);
    match team1_average_handicap.cmp(&team2_average_handicap) {
        Ordering::Greater => {
            team1_net_total = team1_net_total
                .checked_sub(adjustment)
                .ok_or_else(|| overflow.clone())?
        }
        Ordering::Less => {
            team2_net_total = team2_net_total
                .checked_sub(adjustment)
                .ok_or(overflow)?
        }
        Ordering::Equal => {}
    }

    let bonus_point_winner = match team1_net_total.cmp(&team2_net_total) {
        Ordering::Less => Some(Side::One),
        Ordering::Greater => Some(Side::Two),
        Ordering::Equal => None,
    };

    let bonus_for = |side: Side| u32::from(bonus_point_winner == Some(side));
    let team1_total_points =
        matchups.iter().map(|m| m.player1_points).sum::<u32>() + bonus_for(Side::One);
    let team2_total_points =
        matchups.iter().map(|m| m.player2_points).sum::<u32>() + bonus_for(Side::Two);

    log::debug!(
        "Team match scored: {}-{} (net {} vs {}, bonus {:?})",
        team1_total_points,
        team2_total_points,
        team1_net_total,
        team2_net_total,
        bonus_point_winner
    );

    Ok(TeamMatchResult {
        team1_total_points,
        team2_total_points,
        team1_gross_total,
        team2_gross_total,
        team1_average_handicap,
        team2_average_handicap,
        team1_net_total,
        team2_net_total,
        bonus_point_winner,
        matchups,
    })
}
