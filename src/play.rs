//! Plays on the table and the rules for accepting them.

use alloc::vec::Vec;

use crate::card::Card;
use crate::combo::{Combination, classify, hand_value};
use crate::error::PlayError;

/// An accepted combination, tagged with the player who made it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Play {
    /// Cards of the play, weakest first.
    cards: Vec<Card>,
    /// Seat index of the player who made the play.
    owner: usize,
    /// Shape of the play.
    combination: Combination,
    /// Strength as computed by [`hand_value`].
    value: u16,
}

impl Play {
    pub(crate) fn new(owner: usize, cards: &[Card], combination: Combination) -> Self {
        let mut cards = cards.to_vec();
        cards.sort_unstable();
        let value = hand_value(&cards);
        Self {
            cards,
            owner,
            combination,
            value,
        }
    }

    /// Returns the cards of the play, weakest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the seat index of the player who made the play.
    #[must_use]
    pub const fn owner(&self) -> usize {
        self.owner
    }

    /// Returns the shape of the play.
    #[must_use]
    pub const fn combination(&self) -> Combination {
        self.combination
    }

    /// Returns the strength of the play.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// Returns the number of cards in the play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the play has no cards. Accepted plays never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Checks whether `selected` may be played on top of `table`.
///
/// On the opening turn the selection must include the three of diamonds. An
/// empty table accepts any valid combination; otherwise the play must have as
/// many cards as the table play and a strictly higher [`hand_value`].
///
/// # Errors
///
/// Returns the first rule the selection breaks, checked in the order above.
pub fn validate_play(
    selected: &[Card],
    table: Option<&Play>,
    is_opening_turn: bool,
) -> Result<Combination, PlayError> {
    if is_opening_turn && !selected.contains(&Card::DIAMOND_THREE) {
        return Err(PlayError::MustOpenWithDiamondThree);
    }

    let combination = classify(selected).ok_or(PlayError::InvalidCombination)?;

    let Some(table) = table else {
        return Ok(combination);
    };

    if selected.len() != table.len() {
        return Err(PlayError::CardCountMismatch {
            expected: table.len(),
            found: selected.len(),
        });
    }

    if hand_value(selected) <= table.value() {
        return Err(PlayError::MustBeatTablePlay);
    }

    Ok(combination)
}
