//! Fixed rules of Threes: table size, round range and scoring constants.

use std::ops::RangeInclusive;

/// Registered and pseudo players combined.
pub const MAX_PLAYERS: usize = 8;
pub const MIN_PLAYERS_TO_START: usize = 2;

/// The opening round is the "Three" round; there is no Ace or Two round.
pub const FIRST_RANK: u8 = 3;
pub const KING_RANK: u8 = 13;

/// Awarded for cutting the deck to expose the round's active rank.
/// Lower totals are better, so the bonus is negative.
pub const PERFECT_CUT_BONUS: i32 = -20;

pub const SHORT_ID_LEN: usize = 6;

pub fn rank_range() -> RangeInclusive<u8> {
    FIRST_RANK..=KING_RANK
}

pub fn is_valid_rank(rank: u8) -> bool {
    rank_range().contains(&rank)
}

/// Display name for a round's card rank, `None` outside 3..=13.
pub fn rank_name(rank: u8) -> Option<&'static str> {
    let name = match rank {
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => return None,
    };
    Some(name)
}
