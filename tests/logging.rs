//! Log output of rejected actions.

use std::sync::Mutex;

use bigtwo::{Card, Game, PlayError};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture(Mutex<Vec<String>>);

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record<'_>) {
        if record.level() == Level::Trace {
            self.0.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn rejections_name_the_acting_player() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut game = Game::with_hands(
        1,
        [
            vec![Card::DIAMOND_THREE],
            vec!["5D".parse().unwrap()],
            vec![],
            vec![],
        ],
    )
    .unwrap();
    assert_eq!(game.active_player(), 0);

    assert_eq!(game.pass_turn(2), Err(PlayError::NotYourTurn));
    assert_eq!(
        game.submit_play(3, &[Card::DIAMOND_THREE]),
        Err(PlayError::NotYourTurn)
    );

    let lines = LOGGER.0.lock().unwrap();
    assert_eq!(
        *lines,
        [
            "player 2 rejected: not this player's turn",
            "player 3 rejected: not this player's turn",
        ]
    );
}
