use std::collections::BTreeMap;

use crate::domain::test_helpers::{pseudo, record_all, started_game};
use crate::errors::domain::{GameError, NotFoundKind};

#[test]
fn recording_targets_the_open_round_by_default() {
    let mut game = started_game();
    game.record_player_round_result("u1", 7, false, None)
        .unwrap();

    let round = game.current_round().unwrap();
    assert_eq!(round.player_points("u1"), 7);
}

#[test]
fn recording_twice_keeps_the_last_write() {
    let mut game = started_game();
    game.record_player_round_result("u1", 7, false, None)
        .unwrap();
    game.record_player_round_result("u1", 3, true, None)
        .unwrap();

    let round = game.current_round().unwrap();
    assert_eq!(round.player_points("u1"), 3 - 20);
}

#[test]
fn recording_requires_a_member() {
    let mut game = started_game();
    let err = game
        .record_player_round_result("stranger", 5, false, None)
        .unwrap_err();
    assert!(matches!(err, GameError::NotFound(NotFoundKind::Player, _)));
}

#[test]
fn recording_without_an_open_round_fails() {
    let mut game = started_game();
    game.finish();
    let err = game
        .record_player_round_result("u1", 5, false, None)
        .unwrap_err();
    assert!(matches!(err, GameError::Validation(_)), "got {err:?}");
}

#[test]
fn early_finish_closes_the_default_target_but_not_corrections() {
    let mut game = started_game();
    record_all(&mut game, &[("u1", 10), ("u2", 4)]);
    game.next_round().unwrap();
    game.finish();

    // The rank-4 round was never closed, but a done game has no current
    // round to record into.
    assert!(!game.rounds()[1].is_finished());
    assert!(game.current_round().is_none());
    let err = game
        .record_player_round_result("u1", 5, false, None)
        .unwrap_err();
    assert!(matches!(err, GameError::Validation(_)), "got {err:?}");

    // History stays correctable through an explicit round number.
    game.record_player_round_result("u1", 5, true, Some(3))
        .unwrap();
    assert_eq!(game.rounds()[0].player_points("u1"), 5 - 20);
}

#[test]
fn card_points_are_bounded_to_keep_totals_exact() {
    let mut game = started_game();
    let err = game
        .record_player_round_result("u1", u32::MAX, false, None)
        .unwrap_err();
    assert!(matches!(err, GameError::Validation(_)), "got {err:?}");
    assert_eq!(game.current_round().unwrap().player_points("u1"), 0);

    // The largest representable value goes through untouched.
    game.record_player_round_result("u1", i32::MAX as u32, false, None)
        .unwrap();
    assert_eq!(game.get_player_points("u1", true), i32::MAX);
}

#[test]
fn round_number_must_be_a_playable_rank() {
    let mut game = started_game();
    for bad in [0u8, 1, 2, 14, 255] {
        let err = game
            .record_player_round_result("u1", 5, false, Some(bad))
            .unwrap_err();
        assert!(matches!(err, GameError::Validation(_)), "rank {bad}: {err:?}");
    }
}

#[test]
fn round_number_must_name_a_played_round() {
    let mut game = started_game();
    let err = game
        .record_player_round_result("u1", 5, false, Some(7))
        .unwrap_err();
    assert!(matches!(err, GameError::NotFound(NotFoundKind::Round, _)));
}

#[test]
fn retroactive_correction_amends_only_that_entry() {
    let mut game = started_game();
    record_all(&mut game, &[("u1", 10), ("u2", 4)]);
    game.next_round().unwrap();
    record_all(&mut game, &[("u1", 2), ("u2", 8)]);

    // Round 3 is finished; amend A's score with a perfect cut.
    game.record_player_round_result("u1", 5, true, Some(3))
        .unwrap();

    let round3 = &game.rounds()[0];
    assert!(round3.is_finished());
    assert_eq!(round3.player_points("u1"), 5 - 20);
    assert_eq!(round3.player_points("u2"), 4);

    // The open rank-4 round is untouched.
    let round4 = &game.rounds()[1];
    assert_eq!(round4.player_points("u1"), 2);
    assert_eq!(round4.player_points("u2"), 8);

    assert_eq!(game.get_player_points("u1", true), -15 + 2);
    assert_eq!(game.get_player_points("u2", true), 4 + 8);
}

#[test]
fn recording_never_finishes_or_advances_a_round() {
    let mut game = started_game();
    record_all(&mut game, &[("u1", 0), ("u2", 0)]);

    assert_eq!(game.rounds().len(), 1);
    assert!(game.current_round().is_some(), "round must stay open");
}

#[test]
fn player_points_filter_unfinished_rounds_unless_asked() {
    let mut game = started_game();
    record_all(&mut game, &[("u1", 10), ("u2", 4)]);
    game.next_round().unwrap();
    game.record_player_round_result("u1", 6, false, None)
        .unwrap();

    assert_eq!(game.get_player_points("u1", false), 10);
    assert_eq!(game.get_player_points("u1", true), 16);
    assert_eq!(game.get_player_points("u2", false), 4);
    assert_eq!(game.get_player_points("u2", true), 4);
}

#[test]
fn totals_cover_every_member_including_pseudo_players() {
    let mut game = crate::domain::test_helpers::game_with_players(2);
    game.add_pseudo_player(pseudo(1, "Granny")).unwrap();
    game.start(&crate::domain::test_helpers::player(1)).unwrap();

    game.record_player_round_result("u1", 3, false, None)
        .unwrap();
    game.record_player_round_result("p1", 9, false, None)
        .unwrap();

    let totals = game.total_points_by_player(true);
    let expected = BTreeMap::from([
        ("p1".to_string(), 9),
        ("u1".to_string(), 3),
        ("u2".to_string(), 0),
    ]);
    assert_eq!(totals, expected);

    game.record_player_round_result("u2", 1, false, None)
        .unwrap();
    assert!(game.next_round().is_ok());
}

#[test]
fn pseudo_members_gate_round_advance_like_everyone_else() {
    let mut game = crate::domain::test_helpers::game_with_players(2);
    game.add_pseudo_player(pseudo(1, "Granny")).unwrap();
    game.start(&crate::domain::test_helpers::player(1)).unwrap();

    record_all(&mut game, &[("u1", 0), ("u2", 0)]);
    let err = game.next_round().unwrap_err();
    assert_eq!(
        err,
        GameError::ResultNotRecordedForPlayers {
            round_no: 3,
            missing_player_ids: vec!["p1".into()],
        }
    );

    game.record_player_round_result("p1", 2, false, None)
        .unwrap();
    assert!(game.next_round().is_ok());
}
