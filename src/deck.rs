//! Deck construction, shuffling and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::PLAYERS;
use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// Number of cards each player receives.
pub const HAND_SIZE: usize = DECK_SIZE / PLAYERS;

/// Builds the 52-card deck in canonical order: every rank of diamonds, then
/// clubs, hearts and spades.
#[must_use]
pub fn build_deck() -> [Card; DECK_SIZE] {
    let mut deck = [Card::DIAMOND_THREE; DECK_SIZE];
    let cards = Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)));
    for (slot, card) in deck.iter_mut().zip(cards) {
        *slot = card;
    }
    deck
}

/// Shuffles the cards in place.
///
/// A Fisher-Yates pass from the last index down to 1, swapping each position
/// with a uniformly chosen index in `0..=i`.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Deals the deck round-robin: card `i` goes to player `i % 4`.
#[must_use]
pub fn deal(deck: &[Card; DECK_SIZE]) -> [Hand; PLAYERS] {
    let mut hands: [Vec<Card>; PLAYERS] =
        core::array::from_fn(|_| Vec::with_capacity(HAND_SIZE));
    for (i, card) in deck.iter().enumerate() {
        hands[i % PLAYERS].push(*card);
    }
    hands.map(Hand::new)
}

/// Returns the index of the hand holding the three of diamonds.
///
/// # Errors
///
/// Returns [`DealError::InvariantViolation`] if no hand holds it.
pub fn find_opening_player(hands: &[Hand]) -> Result<usize, DealError> {
    hands
        .iter()
        .position(|hand| hand.contains(Card::DIAMOND_THREE))
        .ok_or(DealError::InvariantViolation)
}
