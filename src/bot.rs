//! Bot decision logic.
//!
//! Bots do not look at their own hand: target, rank and guess are all drawn
//! uniformly at random.

use alloc::vec::Vec;

use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::{RANKS, SET_SIZE};
use crate::game::Move;
use crate::player::Player;

/// Chooses a move for `bot_id`.
///
/// The target is drawn uniformly from the other seats, the rank uniformly
/// from all 13 ranks, and the guess uniformly from `1..=4`.
///
/// Returns `None` if there is nobody else at the table.
pub fn choose_bot_move<R: Rng + ?Sized>(
    players: &[Player],
    bot_id: u8,
    rng: &mut R,
) -> Option<Move> {
    let others: Vec<u8> = players
        .iter()
        .map(|player| player.id)
        .filter(|&id| id != bot_id)
        .collect();
    let target = *others.choose(rng)?;
    let rank = RANKS[rng.random_range(0..RANKS.len())];
    let guess = rng.random_range(1..=SET_SIZE as u8);

    trace!("bot {bot_id} asks player {target} for {guess} x {rank}");
    Some(Move {
        target,
        rank,
        guess,
    })
}
