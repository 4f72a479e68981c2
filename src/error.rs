//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Reasons a play, pass or selection is rejected.
///
/// Every variant leaves the game untouched; the [`Display`](core::fmt::Display)
/// text is meant to be shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The first play of the game does not include the three of diamonds.
    #[error("the first play must include the three of diamonds")]
    MustOpenWithDiamondThree,
    /// The selected cards do not form a single, pair, triple or five-card hand.
    #[error("the selected cards do not form a valid combination")]
    InvalidCombination,
    /// The play has a different number of cards than the table play.
    #[error("the table play has {expected} card(s), but {found} were played")]
    CardCountMismatch {
        /// Number of cards on the table.
        expected: usize,
        /// Number of cards played.
        found: usize,
    },
    /// The play is not stronger than the table play.
    #[error("the play must beat the combination on the table")]
    MustBeatTablePlay,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The game already has a winner.
    #[error("the game is already over")]
    GameAlreadyOver,
    /// A selected card is not held by the acting player.
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    /// The same card was selected more than once.
    #[error("{0} was selected more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while dealing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No hand holds the three of diamonds, so nobody can open.
    #[error("no hand holds the three of diamonds")]
    InvariantViolation,
    /// A hand holds more cards than a full deal gives one player.
    #[error("player {player} holds {len} cards, more than a full deal")]
    HandTooLarge {
        /// Seat index of the oversized hand.
        player: usize,
        /// Number of cards in that hand.
        len: usize,
    },
    /// A card was dealt to more than one hand.
    #[error("{0} was dealt more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is empty.
    #[error("empty card")]
    Empty,
    /// No suit glyph or letter was found.
    #[error("unknown suit")]
    UnknownSuit,
    /// The rank label is not one of 3-10, J, Q, K, A, 2.
    #[error("unknown rank")]
    UnknownRank,
}
