use crate::PLAYERS;
use crate::card::Card;
use crate::error::PlayError;
use crate::play::{Play, validate_play};
use crate::selection::Selection;

use super::{Game, TurnOutcome};

impl Game {
    fn ensure_player_turn(&self, player: usize) -> Result<(), PlayError> {
        if self.winner.is_some() {
            return Err(PlayError::GameAlreadyOver);
        }

        if player != self.active {
            return Err(PlayError::NotYourTurn);
        }

        Ok(())
    }

    fn ensure_owned(&self, player: usize, cards: &[Card]) -> Result<(), PlayError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(PlayError::DuplicateCard(*card));
            }
        }

        match self.hands[player].first_missing(cards) {
            Some(card) => Err(PlayError::CardNotInHand(card)),
            None => Ok(()),
        }
    }

    const fn next_player(&self) -> usize {
        (self.active + 1) % PLAYERS
    }

    fn record<T>(&mut self, player: usize, result: Result<T, PlayError>) -> Result<T, PlayError> {
        match &result {
            Ok(_) => self.last_error = None,
            Err(err) => {
                log::trace!("player {player} rejected: {err}");
                self.last_error = Some(*err);
            }
        }
        result
    }

    /// Plays the selected cards for `player`.
    ///
    /// On success the cards leave the player's hand. If the hand is now empty
    /// the game ends with that player as winner; otherwise the cards become
    /// the table play and the turn moves to the next seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the player's turn, a
    /// card is repeated or not in the player's hand, or the cards break a
    /// play rule (see [`validate_play`]). The game is left unchanged apart
    /// from [`Game::last_error`].
    pub fn submit_play(&mut self, player: usize, cards: &[Card]) -> Result<TurnOutcome, PlayError> {
        let result = self.play_cards(player, cards);
        self.record(player, result)
    }

    fn play_cards(&mut self, player: usize, cards: &[Card]) -> Result<TurnOutcome, PlayError> {
        self.ensure_player_turn(player)?;
        self.ensure_owned(player, cards)?;
        let combination = validate_play(cards, self.table.as_ref(), !self.opening_played)?;

        let hand = &mut self.hands[player];
        hand.remove(cards);

        if hand.is_empty() {
            log::info!("player {player} wins with {combination:?}");
            self.winner = Some(player);
            return Ok(TurnOutcome::Won { player });
        }

        log::debug!("player {player} plays {combination:?}");
        self.table = Some(Play::new(player, cards, combination));
        self.consecutive_passes = 0;
        self.table_owner = Some(player);
        self.active = self.next_player();
        self.opening_played = true;

        Ok(TurnOutcome::Played(combination))
    }

    /// Passes the turn for `player`.
    ///
    /// When two passes have already been made and the next seat owns the
    /// table play, the table is cleared so that player leads freely.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or it is not the player's turn.
    pub fn pass_turn(&mut self, player: usize) -> Result<TurnOutcome, PlayError> {
        let result = self.pass(player);
        self.record(player, result)
    }

    fn pass(&mut self, player: usize) -> Result<TurnOutcome, PlayError> {
        self.ensure_player_turn(player)?;

        let next = self.next_player();
        let outcome = if self.consecutive_passes == 2 && self.table_owner == Some(next) {
            log::debug!("player {player} passes, table returns to player {next}");
            self.table = None;
            self.consecutive_passes = 0;
            self.table_owner = None;
            TurnOutcome::RoundReset
        } else {
            log::debug!("player {player} passes");
            self.consecutive_passes = self.consecutive_passes.saturating_add(1);
            TurnOutcome::Passed
        };
        self.active = next;

        Ok(outcome)
    }

    /// Plays the cards, or passes when `cards` is empty.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Game::submit_play`] or [`Game::pass_turn`].
    pub fn take_turn(&mut self, player: usize, cards: &[Card]) -> Result<TurnOutcome, PlayError> {
        if cards.is_empty() {
            self.pass_turn(player)
        } else {
            self.submit_play(player, cards)
        }
    }

    /// Toggles `card` in `selection` on behalf of `player`.
    ///
    /// Returns whether the card is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the player's turn, or
    /// the card is not in the player's hand. The selection is left unchanged.
    pub fn select_card(
        &self,
        selection: &mut Selection,
        player: usize,
        card: Card,
    ) -> Result<bool, PlayError> {
        self.ensure_player_turn(player)?;
        if !self.hands[player].contains(card) {
            return Err(PlayError::CardNotInHand(card));
        }
        Ok(selection.toggle(card))
    }
}
