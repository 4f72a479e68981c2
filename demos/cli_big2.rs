//! Hot-seat Big Two in the terminal.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bigtwo::{Card, Game, GameState, Hand, Suit, TurnOutcome};

fn main() {
    env_logger::init();
    println!("Big Two CLI example");
    println!("Enter cards like '3d 3s', 'pass', 'new' or 'q'.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    loop {
        print_table(&game);

        if let GameState::GameOver { winner } = game.state() {
            println!("Player {} wins!", winner + 1);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.restart();
                    continue;
                }
                _ => break,
            }
        }

        let player = game.active_player();
        let input = prompt_line(&format!("Player {} > ", player + 1));
        match input.as_str() {
            "q" | "quit" => break,
            "new" => {
                game.restart();
                continue;
            }
            _ => {}
        }

        let selection = if input == "p" || input == "pass" {
            Vec::new()
        } else {
            match parse_cards(&input) {
                Ok(cards) => cards,
                Err(word) => {
                    println!("Cannot read card '{word}'.");
                    continue;
                }
            }
        };

        match game.take_turn(player, &selection) {
            Ok(TurnOutcome::Played(combination)) => println!("Played {combination:?}."),
            Ok(TurnOutcome::Passed) => println!("Passed."),
            Ok(TurnOutcome::RoundReset) => println!("Everyone passed. New round."),
            Ok(TurnOutcome::Won { .. }) => {}
            Err(err) => println!("Rejected: {err}"),
        }
    }
}

fn parse_cards(input: &str) -> Result<Vec<Card>, String> {
    input
        .split_whitespace()
        .map(|word| word.parse().map_err(|_| word.to_string()))
        .collect()
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let table = game.table().map_or_else(
        || "(empty)".to_string(),
        |play| format!("{} by player {}", format_cards(play.cards()), play.owner() + 1),
    );
    println!("\nTable: {table}");

    for (index, hand) in game.hands().iter().enumerate() {
        let marker = if index == game.active_player() { "*" } else { " " };
        println!("{marker} Player {}: {}", index + 1, format_hand(hand));
    }
    println!();
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    format_cards(hand.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
