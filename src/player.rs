//! Player identity, hand, and score.

use crate::hand::Hand;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// The seat played from the terminal.
pub const HUMAN_ID: u8 = 1;

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Player ID (1-4).
    pub id: u8,
    /// Cards held by the player.
    pub hand: Hand,
    /// Number of completed sets.
    pub score: u8,
}

impl Player {
    /// Creates a player with the given hand and no score.
    #[must_use]
    pub const fn new(id: u8, hand: Hand) -> Self {
        Self { id, hand, score: 0 }
    }

    /// Returns whether this seat is played by the human.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        self.id == HUMAN_ID
    }
}

/// Returns whether `id` names one of the four seats.
#[must_use]
pub const fn is_valid_id(id: u8) -> bool {
    id >= 1 && id as usize <= PLAYER_COUNT
}
