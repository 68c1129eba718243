//! Point accounting over round history.
//!
//! Pure functions used both for live standings (open round included) and
//! for finished-only totals. Lower is better: Threes is a trick-avoidance
//! game scored like golf.

use std::collections::BTreeMap;

use crate::domain::player::PlayerId;
use crate::domain::round::Round;

/// Sum of `card_points + perfect_cut_bonus` for one player across rounds.
///
/// Rounds without a recorded result for the player contribute 0. Unfinished
/// rounds are skipped unless `include_unfinished` is set.
pub fn player_total(rounds: &[Round], player_id: &str, include_unfinished: bool) -> i32 {
    rounds
        .iter()
        .filter(|r| include_unfinished || r.is_finished())
        .map(|r| r.player_points(player_id))
        .sum()
}

/// Every player whose total equals the minimum; ties return all of them.
pub fn winners(totals: &BTreeMap<PlayerId, i32>) -> Vec<PlayerId> {
    let Some(min) = totals.values().copied().min() else {
        return Vec::new();
    };
    totals
        .iter()
        .filter(|(_, &total)| total == min)
        .map(|(id, _)| id.clone())
        .collect()
}
