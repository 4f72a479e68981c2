//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::PLAYERS;
use crate::card::Card;
use crate::deck::{HAND_SIZE, build_deck, deal, find_opening_player, shuffle};
use crate::error::{DealError, PlayError};
use crate::hand::Hand;
use crate::play::Play;

mod actions;
pub mod state;

pub use state::{GameState, TurnOutcome};

/// A Big Two game between four players.
///
/// The game owns the hands, the table play and the turn bookkeeping. It only
/// changes through [`Game::submit_play`], [`Game::pass_turn`] and
/// [`Game::restart`]; rejected actions leave it untouched.
#[derive(Debug, Clone)]
pub struct Game {
    /// Player hands, indexed by seat.
    hands: [Hand; PLAYERS],
    /// The combination to beat, or `None` when the next player leads.
    table: Option<Play>,
    /// Seat index of the player to act.
    active: usize,
    /// Seat index of the player who made the table play.
    table_owner: Option<usize>,
    /// Passes since the last accepted play.
    consecutive_passes: u8,
    /// Whether any play has been accepted this game.
    opening_played: bool,
    /// Seat index of the player who emptied their hand.
    winner: Option<usize>,
    /// Reason the last action was rejected.
    last_error: Option<PlayError>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The same seed always produces the same deal.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Card, Game};
    ///
    /// let game = Game::new(42);
    /// let opener = game.active_player();
    /// assert!(game.hands()[opener].contains(Card::DIAMOND_THREE));
    /// assert!(game.is_opening_turn());
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck always holds the three of diamonds"
    )]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let hands = Self::deal_hands(&mut rng);
        Self::start(hands, rng).expect("a full deck always holds the three of diamonds")
    }

    /// Creates a game from explicit hands instead of a shuffled deck.
    ///
    /// Hands may hold any number of cards up to 13. The player holding the
    /// three of diamonds acts first. `seed` drives later restarts.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand holds more than 13 cards, a card appears in
    /// more than one hand, or no hand holds the three of diamonds.
    pub fn with_hands(seed: u64, hands: [Vec<Card>; PLAYERS]) -> Result<Self, DealError> {
        if let Some((player, hand)) = hands
            .iter()
            .enumerate()
            .find(|(_, hand)| hand.len() > HAND_SIZE)
        {
            return Err(DealError::HandTooLarge {
                player,
                len: hand.len(),
            });
        }
        let hands = hands.map(Hand::new);
        let mut seen: Vec<Card> = Vec::new();
        for card in hands.iter().flat_map(Hand::cards) {
            if seen.contains(card) {
                return Err(DealError::DuplicateCard(*card));
            }
            seen.push(*card);
        }
        Self::start(hands, ChaCha8Rng::seed_from_u64(seed))
    }

    fn deal_hands(rng: &mut ChaCha8Rng) -> [Hand; PLAYERS] {
        let mut deck = build_deck();
        shuffle(&mut deck, rng);
        deal(&deck)
    }

    fn start(hands: [Hand; PLAYERS], rng: ChaCha8Rng) -> Result<Self, DealError> {
        let opener = find_opening_player(&hands).inspect_err(|err| {
            log::error!("cannot start game: {err}");
        })?;
        log::info!("new deal, player {opener} opens");

        Ok(Self {
            hands,
            table: None,
            active: opener,
            table_owner: None,
            consecutive_passes: 0,
            opening_played: false,
            winner: None,
            last_error: None,
            rng,
        })
    }

    /// Deals a fresh game from the same random stream.
    ///
    /// Every hand, the table and the turn bookkeeping are replaced.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck always holds the three of diamonds"
    )]
    pub fn restart(&mut self) {
        let hands = Self::deal_hands(&mut self.rng);
        let rng = self.rng.clone();
        *self = Self::start(hands, rng).expect("a full deck always holds the three of diamonds");
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        match self.winner {
            Some(winner) => GameState::GameOver { winner },
            None => GameState::AwaitingPlay {
                active: self.active,
            },
        }
    }

    /// Returns the seat index of the player to act.
    ///
    /// Once the game is over this is the winner's seat.
    #[must_use]
    pub const fn active_player(&self) -> usize {
        self.active
    }

    /// Returns all hands, indexed by seat.
    #[must_use]
    pub const fn hands(&self) -> &[Hand; PLAYERS] {
        &self.hands
    }

    /// Returns the hand of the given seat.
    ///
    /// Returns `None` if the seat index is out of range.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns the combination to beat, if any.
    #[must_use]
    pub const fn table(&self) -> Option<&Play> {
        self.table.as_ref()
    }

    /// Returns the seat index of the player who made the table play.
    #[must_use]
    pub const fn table_owner(&self) -> Option<usize> {
        self.table_owner
    }

    /// Returns the number of passes since the last accepted play.
    #[must_use]
    pub const fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    /// Returns whether the next play is the first of the game.
    #[must_use]
    pub const fn is_opening_turn(&self) -> bool {
        !self.opening_played
    }

    /// Returns the winner's seat index, if the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns whether a player has won.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns why the last action was rejected.
    ///
    /// Cleared by the next successful action.
    #[must_use]
    pub const fn last_error(&self) -> Option<PlayError> {
        self.last_error
    }
}
