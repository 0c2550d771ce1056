//! Integration tests for hole data validation.

use golf_league_web::{validate_course, Hole, ScoringError};

fn course() -> Vec<Hole> {
    (1..=18).map(|n| Hole::new(n, 4, n)).collect()
}

#[test]
fn full_course_is_valid() {
    assert_eq!(validate_course(&course()), Ok(()));
}

#[test]
fn par_outside_three_to_five_is_rejected() {
    let mut holes = course();
    holes[4].par = 6;
    assert_eq!(
        validate_course(&holes),
        Err(ScoringError::InvalidPar {
            hole_number: 5,
            par: 6
        })
    );
}

#[test]
fn handicap_index_out_of_range_is_rejected() {
    for bad in [0, 19] {
        let mut holes = course();
        holes[0].handicap_index = bad;
        assert!(matches!(
            validate_course(&holes),
            Err(ScoringError::InvalidHandicapIndex { hole_number: 1, handicap_index }) if handicap_index == bad
        ));
    }
}

#[test]
fn duplicate_handicap_index_is_rejected() {
    let mut holes = course();
    holes[17].handicap_index = 3;
    assert_eq!(
        validate_course(&holes),
        Err(ScoringError::DuplicateHandicapIndex { handicap_index: 3 })
    );
}

#[test]
fn error_messages_name_the_hole() {
    let err = Hole::new(7, 2, 4).validate().unwrap_err();
    assert_eq!(err.to_string(), "Hole 7 has par 2; par must be 3, 4 or 5");
}
