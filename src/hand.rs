//! Player hand representation.

use alloc::vec::Vec;

use crate::card::Card;

/// The cards held by one player, kept sorted by [`Card::ordinal`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, weakest first.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from the given cards.
    #[must_use]
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort_unstable();
        Self { cards }
    }

    /// Returns the cards in the hand, weakest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    /// Returns the first of `cards` that is not in the hand, if any.
    #[must_use]
    pub fn first_missing(&self, cards: &[Card]) -> Option<Card> {
        cards.iter().copied().find(|card| !self.contains(*card))
    }

    /// Removes the given cards from the hand. Cards not held are ignored.
    pub fn remove(&mut self, cards: &[Card]) {
        self.cards.retain(|card| !cards.contains(card));
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
