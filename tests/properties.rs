//! Property tests for dealing and fresh games.

use std::collections::{HashMap, HashSet};

use bigtwo::{Card, DECK_SIZE, Game, HAND_SIZE, build_deck, deal, find_opening_player, shuffle};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn canonical_deck_holds_every_card_once() {
    let deck = build_deck();
    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(deck[0], Card::DIAMOND_THREE);
    assert_eq!(build_deck(), deck);
}

#[test]
fn shuffle_of_two_cards_is_not_stuck() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let deck = build_deck();
    let mut seen = HashSet::new();
    for _ in 0..64 {
        let mut pair = [deck[0], deck[1]];
        shuffle(&mut pair, &mut rng);
        seen.insert(pair);
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn shuffle_spreads_orders_evenly() {
    const RUNS: usize = 60_000;
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let deck = build_deck();
    let mut counts: HashMap<[Card; 3], usize> = HashMap::new();
    for _ in 0..RUNS {
        let mut three = [deck[0], deck[1], deck[2]];
        shuffle(&mut three, &mut rng);
        *counts.entry(three).or_default() += 1;
    }

    // Each of the 6 orders expects 10_000 hits; 5% slack is about 5 sigma.
    assert_eq!(counts.len(), 6);
    let expected = RUNS / 6;
    for (order, count) in &counts {
        assert!(count.abs_diff(expected) < expected / 20, "{order:?}: {count}");
    }
}

proptest! {
    #[test]
    fn shuffle_and_deal_split_the_deck(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = build_deck();
        shuffle(&mut deck, &mut rng);
        let hands = deal(&deck);

        let mut all = HashSet::new();
        for hand in &hands {
            prop_assert_eq!(hand.len(), HAND_SIZE);
            all.extend(hand.cards().iter().copied());
        }
        prop_assert_eq!(all.len(), DECK_SIZE);

        let opener = find_opening_player(&hands).unwrap();
        prop_assert!(hands[opener].contains(Card::DIAMOND_THREE));
        let holders = hands.iter().filter(|hand| hand.contains(Card::DIAMOND_THREE)).count();
        prop_assert_eq!(holders, 1);
    }

    #[test]
    fn new_game_is_always_fresh(seed in any::<u64>(), restarts in 0usize..4) {
        let mut game = Game::new(seed);
        for _ in 0..restarts {
            game.restart();
        }

        let mut all = HashSet::new();
        for hand in game.hands() {
            prop_assert_eq!(hand.len(), HAND_SIZE);
            all.extend(hand.cards().iter().copied());
        }
        prop_assert_eq!(all.len(), DECK_SIZE);
        prop_assert!(game.table().is_none());
        prop_assert!(game.is_opening_turn());
        prop_assert!(game.winner().is_none());
        prop_assert!(game.hands()[game.active_player()].contains(Card::DIAMOND_THREE));
    }
}
