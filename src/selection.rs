//! Cards a player has picked but not yet played.

use alloc::vec::Vec;

use crate::card::Card;

/// A set of selected cards, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cards: Vec<Card>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds the card if absent, removes it otherwise.
    ///
    /// Returns whether the card is selected afterwards.
    pub fn toggle(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            false
        } else {
            self.cards.push(card);
            true
        }
    }

    /// Returns whether the card is selected.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the selected cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of selected cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
