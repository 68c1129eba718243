//! Property tests for the engine (pure domain, no store).

use proptest::collection::vec;
use proptest::prelude::*;

use crate::domain::game::GameStage;
use crate::domain::rules::{FIRST_RANK, KING_RANK, MAX_PLAYERS};
use crate::domain::test_helpers::{game_with_players, player, started_game};

proptest! {
    /// Property: the live total equals the sum over all rounds of
    /// `card_points + perfect_cut_bonus`, with missing results counting 0.
    #[test]
    fn prop_totals_are_additive_over_rounds(
        rounds in vec((0u32..100, any::<bool>(), 0u32..50), 1..=11),
    ) {
        let mut game = started_game();
        let mut expected_u1 = 0i32;
        let mut expected_u2 = 0i32;

        for (u1_points, cut, u2_points) in &rounds {
            game.record_player_round_result("u1", *u1_points, *cut, None).unwrap();
            game.record_player_round_result("u2", *u2_points, false, None).unwrap();
            expected_u1 += *u1_points as i32 + if *cut { -20 } else { 0 };
            expected_u2 += *u2_points as i32;
            game.next_round().unwrap();
        }

        // Every played round is finished, so both filters agree.
        let totals = game.total_points_by_player(true);
        prop_assert_eq!(totals.get("u1").copied(), Some(expected_u1));
        prop_assert_eq!(totals.get("u2").copied(), Some(expected_u2));
        prop_assert_eq!(game.get_player_points("u1", false), expected_u1);
        prop_assert_eq!(game.get_player_points("u2", false), expected_u2);

        if rounds.len() == 11 {
            prop_assert_eq!(game.stage(), GameStage::Done);
        } else {
            prop_assert_eq!(game.stage(), GameStage::InProgress);
        }
    }

    /// Property: winners are exactly the players holding the minimum total,
    /// and the set is never empty once two rounds exist.
    #[test]
    fn prop_winners_all_share_the_minimum(
        round1 in vec(0u32..50, 4),
        round2 in vec(0u32..50, 4),
    ) {
        let mut game = game_with_players(4);
        game.start(&player(1)).unwrap();

        for (n, points) in round1.iter().enumerate() {
            game.record_player_round_result(&format!("u{}", n + 1), *points, false, None).unwrap();
        }
        game.next_round().unwrap();
        for (n, points) in round2.iter().enumerate() {
            game.record_player_round_result(&format!("u{}", n + 1), *points, false, None).unwrap();
        }

        let totals = game.total_points_by_player(true);
        let min = totals.values().copied().min().unwrap();
        let winners = game.current_winners();

        prop_assert!(!winners.is_empty());
        for id in &winners {
            prop_assert_eq!(totals.get(id).copied(), Some(min));
        }
        let expected: Vec<String> = totals
            .iter()
            .filter(|(_, &t)| t == min)
            .map(|(id, _)| id.clone())
            .collect();
        prop_assert_eq!(winners, expected);
    }

    /// Property: no add sequence pushes membership past the cap, and round
    /// ranks always form the gapless run 3..=rank.
    #[test]
    fn prop_capacity_and_rank_run_hold(
        extra_adds in 0usize..20,
        rounds_to_play in 0usize..=11,
    ) {
        let mut game = game_with_players(2);
        for n in 3..(3 + extra_adds) {
            let _ = game.add_player(player(n));
        }
        prop_assert!(game.player_count() <= MAX_PLAYERS);

        game.start(&player(1)).unwrap();
        for _ in 0..rounds_to_play {
            for p in game.players().to_vec() {
                game.record_player_round_result(&p.id, 1, false, None).unwrap();
            }
            game.next_round().unwrap();
        }

        let ranks: Vec<u8> = game.rounds().iter().map(|r| r.card_rank()).collect();
        for (i, rank) in ranks.iter().enumerate() {
            prop_assert_eq!(*rank, FIRST_RANK + i as u8);
            prop_assert!(*rank <= KING_RANK);
        }
    }
}
