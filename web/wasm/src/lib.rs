use bigtwo::{Card, Combination, Game, GameState, Play, Selection, Suit, TurnOutcome};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    selection: Selection,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(seed as u64),
            selection: Selection::new(),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(seed as u64);
        self.selection.clear();
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.selection.clear();
    }

    /// Toggles a card such as "♦3" or "3D" for the active player.
    pub fn select_card(&mut self, card: &str) -> Result<bool, JsValue> {
        let card: Card = card.parse().map_err(js_err)?;
        let player = self.game.active_player();
        self.game
            .select_card(&mut self.selection, player, card)
            .map_err(js_err)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Plays the selected cards, or passes when nothing is selected.
    pub fn play(&mut self) -> Result<JsValue, JsValue> {
        let player = self.game.active_player();
        let outcome = self
            .game
            .take_turn(player, self.selection.cards())
            .map_err(js_err)?;
        self.selection.clear();
        to_js_value(&JsOutcome::from(outcome))
    }

    pub fn pass(&mut self) -> Result<JsValue, JsValue> {
        let player = self.game.active_player();
        let outcome = self.game.pass_turn(player).map_err(js_err)?;
        self.selection.clear();
        to_js_value(&JsOutcome::from(outcome))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let (state, winner) = match self.game.state() {
            GameState::AwaitingPlay { .. } => ("AwaitingPlay", None),
            GameState::GameOver { winner } => ("GameOver", Some(winner as u32)),
        };

        let hands: Vec<Vec<JsCard>> = self
            .game
            .hands()
            .iter()
            .map(|hand| {
                hand.cards()
                    .iter()
                    .map(|&card| JsCard::new(card, self.selection.contains(card)))
                    .collect()
            })
            .collect();

        let snapshot = Snapshot {
            state,
            active_player: self.game.active_player() as u32,
            winner,
            hands,
            table: self.game.table().map(JsPlay::from),
            consecutive_passes: u32::from(self.game.consecutive_passes()),
            opening_turn: self.game.is_opening_turn(),
            error: self.game.last_error().map(|err| err.to_string()),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    active_player: u32,
    winner: Option<u32>,
    hands: Vec<Vec<JsCard>>,
    table: Option<JsPlay>,
    consecutive_passes: u32,
    opening_turn: bool,
    error: Option<String>,
}

#[derive(Serialize)]
struct JsCard {
    label: String,
    color: &'static str,
    ordinal: u8,
    selected: bool,
}

impl JsCard {
    fn new(card: Card, selected: bool) -> Self {
        Self {
            label: card.to_string(),
            color: suit_color(card.suit),
            ordinal: card.ordinal(),
            selected,
        }
    }
}

#[derive(Serialize)]
struct JsPlay {
    cards: Vec<JsCard>,
    owner: u32,
    combination: Combination,
    value: u16,
}

impl From<&Play> for JsPlay {
    fn from(play: &Play) -> Self {
        Self {
            cards: play.cards().iter().map(|&card| JsCard::new(card, false)).collect(),
            owner: play.owner() as u32,
            combination: play.combination(),
            value: play.value(),
        }
    }
}

#[derive(Serialize)]
struct JsOutcome {
    kind: &'static str,
    combination: Option<Combination>,
    winner: Option<u32>,
}

impl From<TurnOutcome> for JsOutcome {
    fn from(outcome: TurnOutcome) -> Self {
        let (kind, combination, winner) = match outcome {
            TurnOutcome::Played(combination) => ("Played", Some(combination), None),
            TurnOutcome::Won { player } => ("Won", None, Some(player as u32)),
            TurnOutcome::Passed => ("Passed", None, None),
            TurnOutcome::RoundReset => ("RoundReset", None, None),
        };
        Self {
            kind,
            combination,
            winner,
        }
    }
}

fn suit_color(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts | Suit::Diamonds => "red",
        Suit::Clubs | Suit::Spades => "black",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
