//! A Big Two (Choi Dai Di) rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals four hands, checks every play
//! against the table, and tracks turns, passes and the winner. Rendering and
//! input handling are left to the caller.
//!
//! # Example
//!
//! ```
//! use bigtwo::{Card, Game, TurnOutcome};
//!
//! let mut game = Game::new(42);
//! let opener = game.active_player();
//!
//! // The player holding the three of diamonds must open with it.
//! let outcome = game.submit_play(opener, &[Card::DIAMOND_THREE]).unwrap();
//! assert!(matches!(outcome, TurnOutcome::Played(_)));
//! assert_ne!(game.active_player(), opener);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combo;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod play;
pub mod selection;

/// Number of players at the table.
pub const PLAYERS: usize = 4;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use combo::{Combination, classify, hand_value};
pub use deck::{HAND_SIZE, build_deck, deal, find_opening_player, shuffle};
pub use error::{DealError, ParseCardError, PlayError};
pub use game::{Game, GameState, TurnOutcome};
pub use hand::Hand;
pub use play::{Play, validate_play};
pub use selection::Selection;
