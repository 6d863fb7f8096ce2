//! Turn resolution.

use log::{debug, info};

use crate::card::{Rank, SET_SIZE};
use crate::error::TurnError;
use crate::player::{Player, is_valid_id};
use crate::result::TurnOutcome;

/// One ask: which player, which rank, and how many of it they are believed
/// to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The player being asked.
    pub target: u8,
    /// The rank asked for.
    pub rank: Rank,
    /// The guessed count (0-4).
    pub guess: u8,
}

impl Move {
    /// Creates a new move.
    #[must_use]
    pub const fn new(target: u8, rank: Rank, guess: u8) -> Self {
        Self {
            target,
            rank,
            guess,
        }
    }
}

fn seat(players: &[Player], id: u8) -> Result<usize, TurnError> {
    if !is_valid_id(id) {
        return Err(TurnError::InvalidPlayer(id));
    }
    players
        .iter()
        .position(|player| player.id == id)
        .ok_or(TurnError::InvalidPlayer(id))
}

/// Resolves `current` asking `mv.target` for `mv.rank`.
///
/// A correct guess moves every card of the rank from the target to the
/// asker, then removes a completed set from the asker and scores it. A wrong
/// guess leaves every hand untouched.
///
/// # Errors
///
/// Returns an error, without touching any hand, if either ID is not seated,
/// the player asks themselves, or the guess is outside `0..=4`.
pub fn resolve_turn(
    players: &mut [Player],
    current: u8,
    mv: Move,
) -> Result<TurnOutcome, TurnError> {
    let asker = seat(players, current)?;
    let target = seat(players, mv.target)?;
    if asker == target {
        return Err(TurnError::SelfTarget);
    }
    if usize::from(mv.guess) > SET_SIZE {
        return Err(TurnError::InvalidGuess(mv.guess));
    }

    let actual = players[target].hand.count_of_rank(mv.rank) as u8;
    if mv.guess != actual {
        debug!(
            "player {current} guessed {} x {} from player {}, actual {actual}",
            mv.guess, mv.rank, mv.target
        );
        return Ok(TurnOutcome::Wrong { actual });
    }

    let taken = players[target].hand.take_rank(mv.rank);
    players[asker].hand.add_cards(taken);

    let scored = actual > 0 && players[asker].hand.claim_set(mv.rank);
    if scored {
        players[asker].score += 1;
        info!("player {current} completed the set of {}", mv.rank);
    }

    debug!(
        "player {current} took {actual} x {} from player {}",
        mv.rank, mv.target
    );
    Ok(TurnOutcome::Correct {
        transferred: actual,
        scored,
    })
}
