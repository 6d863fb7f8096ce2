//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::SET_SIZE;
use crate::deck;
use crate::hand::Hand;
use crate::player::Player;

mod play;
pub mod state;
mod turn;

pub use play::MoveSource;
pub use state::GameState;
pub use turn::{Move, resolve_turn};

/// Number of sets that exist; the game ends once all are claimed.
pub const SETS_TO_WIN: u8 = 13;

/// Returns the number of cards held plus the cards in claimed sets.
///
/// This is 52 for every reachable state.
#[must_use]
pub fn cards_accounted_for(players: &[Player]) -> usize {
    players
        .iter()
        .map(|player| player.hand.len() + SET_SIZE * usize::from(player.score))
        .sum()
}

/// A four-player count-guessing Go Fish game.
///
/// The game owns the seats and the random number generator. All bot
/// decisions are drawn from that generator, so a seed fixes the deal and
/// every bot move.
pub struct Game {
    /// Seats in turn order (IDs 1-4).
    pub players: Mutex<Vec<Player>>,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// ID of the player whose turn it is.
    current: Mutex<u8>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck is built, shuffled and dealt 13 cards to each seat.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::Game;
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.current_player(), 1);
    /// assert_eq!(game.hand(1).map(|hand| hand.len()), Some(13));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let players = Self::deal_players(&mut rng);

        Self {
            players: Mutex::new(players),
            state: Mutex::new(GameState::InProgress),
            current: Mutex::new(1),
            rng: Mutex::new(rng),
        }
    }

    fn deal_players(rng: &mut ChaCha8Rng) -> Vec<Player> {
        let mut cards = deck::build();
        deck::shuffle(&mut cards, rng);

        // A freshly built deck always holds 52 cards.
        let hands =
            deck::deal(&cards).unwrap_or_else(|_| core::array::from_fn(|_| Hand::new()));

        hands
            .into_iter()
            .zip(1..)
            .map(|(hand, id)| Player::new(id, hand))
            .collect()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the ID of the player whose turn it is.
    pub fn current_player(&self) -> u8 {
        *self.current.lock()
    }

    /// Returns a snapshot of all seats.
    pub fn players(&self) -> Vec<Player> {
        self.players.lock().clone()
    }

    /// Returns a copy of the player's hand.
    ///
    /// Returns `None` if the player ID is not found.
    pub fn hand(&self, player_id: u8) -> Option<Hand> {
        self.players
            .lock()
            .iter()
            .find(|player| player.id == player_id)
            .map(|player| player.hand.clone())
    }

    /// Returns the player's score.
    pub fn score(&self, player_id: u8) -> Option<u8> {
        self.players
            .lock()
            .iter()
            .find(|player| player.id == player_id)
            .map(|player| player.score)
    }

    /// Returns `(player_id, score)` for every seat.
    pub fn scores(&self) -> Vec<(u8, u8)> {
        self.players
            .lock()
            .iter()
            .map(|player| (player.id, player.score))
            .collect()
    }

    /// Returns the sum of all scores.
    pub fn total_score(&self) -> u8 {
        self.players.lock().iter().map(|player| player.score).sum()
    }

    /// Returns whether every set has been claimed.
    pub fn is_over(&self) -> bool {
        self.state() == GameState::GameOver || self.total_score() >= SETS_TO_WIN
    }

    /// Returns the number of seats.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }
}
