//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, SET_SIZE};

/// The cards held by one player.
///
/// A hand is an unordered multiset: the order of [`Hand::cards`] is the order
/// cards arrived in and carries no meaning. Since the deck holds one card per
/// suit and rank, a rank appears at most four times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding a copy of the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards ordered by rank, then suit, for display.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by_key(|card| (card.rank, card.suit));
        cards
    }

    /// Adds cards to the hand.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns how many cards of `rank` the hand holds (0-4).
    #[must_use]
    pub fn count_of_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Splits the hand into the cards not of `rank` and the cards of `rank`.
    ///
    /// The receiver is left untouched; callers replace their hand with the
    /// returned remainder.
    #[must_use]
    pub fn remove_all_of_rank(&self, rank: Rank) -> (Self, Vec<Card>) {
        let (removed, remaining): (Vec<Card>, Vec<Card>) =
            self.cards.iter().partition(|card| card.rank == rank);
        (Self { cards: remaining }, removed)
    }

    /// Removes every card of `rank` and returns them.
    pub fn take_rank(&mut self, rank: Rank) -> Vec<Card> {
        let (remaining, removed) = self.remove_all_of_rank(rank);
        *self = remaining;
        removed
    }

    /// Returns whether the hand holds all four cards of `rank`.
    #[must_use]
    pub fn has_complete_set(&self, rank: Rank) -> bool {
        self.count_of_rank(rank) == SET_SIZE
    }

    /// Returns the hand without `rank` if its set is complete.
    ///
    /// The second value reports whether a set was removed; when it is `false`
    /// the returned hand equals the receiver.
    #[must_use]
    pub fn remove_set_if_complete(&self, rank: Rank) -> (Self, bool) {
        if self.has_complete_set(rank) {
            (self.remove_all_of_rank(rank).0, true)
        } else {
            (self.clone(), false)
        }
    }

    /// Removes a complete set of `rank` in place.
    ///
    /// Returns whether a set was removed.
    pub fn claim_set(&mut self, rank: Rank) -> bool {
        if !self.has_complete_set(rank) {
            return false;
        }
        self.take_rank(rank);
        true
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
