//! Deck construction, shuffling, and the initial deal.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::DealError;
use crate::hand::Hand;
use crate::player::PLAYER_COUNT;

/// Number of cards each player receives.
pub const HAND_SIZE: usize = DECK_SIZE / PLAYER_COUNT;

/// Builds an unshuffled 52 card deck.
///
/// Cards are enumerated suit by suit, each suit running `A` through `K`.
#[must_use]
pub fn build() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in SUITS {
        for rank in RANKS {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Shuffles the cards in place with the given random source.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Splits a full deck into four hands of 13 contiguous cards.
///
/// Positions 0-12 go to player 1, 13-25 to player 2, 26-38 to player 3 and
/// 39-51 to player 4.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly 52 cards.
pub fn deal(cards: &[Card]) -> Result<[Hand; PLAYER_COUNT], DealError> {
    if cards.len() != DECK_SIZE {
        return Err(DealError::WrongDeckSize(cards.len()));
    }

    let mut chunks = cards.chunks_exact(HAND_SIZE).map(Hand::from_cards);
    Ok(core::array::from_fn(|_| chunks.next().unwrap_or_default()))
}
