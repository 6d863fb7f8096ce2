//! Error types for game operations.

use thiserror::Error;

/// Invalid input for a turn.
///
/// None of these mutate game state; the caller is expected to ask again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// A player asked themselves.
    #[error("a player cannot ask themselves")]
    SelfTarget,
    /// Player ID outside 1..=4.
    #[error("no player with id {0}")]
    InvalidPlayer(u8),
    /// Guessed count outside 0..=4.
    #[error("guess {0} is out of range (0-4)")]
    InvalidGuess(u8),
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Every set has already been claimed.
    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck does not hold exactly 52 cards.
    #[error("expected a 52 card deck, got {0} cards")]
    WrongDeckSize(usize),
}

/// Error returned when a rank symbol cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown rank (expected A, 2-10, J, Q or K)")]
pub struct ParseRankError;
