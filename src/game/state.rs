//! Game state types.

use crate::combo::Combination;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the active player to play or pass.
    AwaitingPlay {
        /// Seat index of the player to act.
        active: usize,
    },
    /// A player has shed every card.
    GameOver {
        /// Seat index of the winner.
        winner: usize,
    },
}

/// What a successful action did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The cards became the new table play.
    Played(Combination),
    /// The play emptied the player's hand and ended the game.
    Won {
        /// Seat index of the winner.
        player: usize,
    },
    /// The player passed; the table play stands.
    Passed,
    /// The pass brought the turn back to the table play's owner, who now
    /// leads on an empty table.
    RoundReset,
}
