//! A four-player Go Fish engine where every ask names an exact count.
//!
//! A human and three bots take turns asking another player how many cards of
//! a rank they hold. A correct count takes all of them; a wrong one takes
//! nothing. Four of a kind scores a set, and the game ends once all 13 sets
//! are claimed.
//!
//! The crate provides a [`Game`] type that owns the seats and a seeded random
//! number generator, the pure [`resolve_turn`] engine, and the bot strategy.
//! Terminal input and rendering live in the `gofish` binary (feature `cli`).
//!
//! # Example
//!
//! ```
//! use gofish::{Game, Move, Rank};
//!
//! let game = Game::new(42);
//! let held = game.hand(2).map_or(0, |hand| hand.count_of_rank(Rank::Ace)) as u8;
//! let report = game.take_turn(1, Move::new(2, Rank::Ace, held)).unwrap();
//! assert!(report.outcome.is_correct());
//! assert_eq!(game.current_player(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bot;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod messages;
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use bot::choose_bot_move;
pub use card::{Card, DECK_SIZE, RANKS, Rank, SET_SIZE, SUITS, Suit};
pub use error::{DealError, ParseRankError, TurnError};
pub use game::{Game, GameState, Move, MoveSource, SETS_TO_WIN, cards_accounted_for, resolve_turn};
pub use hand::Hand;
pub use messages::MessageLog;
pub use player::{HUMAN_ID, PLAYER_COUNT, Player};
pub use result::{Standings, TurnOutcome, TurnReport};
