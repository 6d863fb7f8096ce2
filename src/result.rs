//! Turn and game result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;

/// Result of resolving a single ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The guess matched the target's count.
    Correct {
        /// Number of cards moved to the asking player (0 when both sides
        /// agreed the target had none).
        transferred: u8,
        /// Whether the transfer completed a set.
        scored: bool,
    },
    /// The guess was wrong. Nothing moved.
    Wrong {
        /// How many cards of the rank the target actually held.
        actual: u8,
    },
}

impl TurnOutcome {
    /// Returns whether the guess was correct.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// Returns whether a set was completed.
    #[must_use]
    pub const fn scored(&self) -> bool {
        matches!(self, Self::Correct { scored: true, .. })
    }
}

/// A resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The player who asked.
    pub player_id: u8,
    /// The player who was asked.
    pub target: u8,
    /// The rank asked for.
    pub rank: Rank,
    /// The guessed count.
    pub guess: u8,
    /// What happened.
    pub outcome: TurnOutcome,
}

/// Final scores once every set has been claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    /// `(player_id, score)` in seat order.
    pub scores: Vec<(u8, u8)>,
    /// IDs sharing the highest score.
    pub winners: Vec<u8>,
}
