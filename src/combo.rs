//! Combination classification and strength.

use crate::card::{Card, Rank};

/// Multiplier that lets the five-card kind dominate the top card ordinal.
const KIND_WEIGHT: u16 = 1000;

/// A legal Big Two combination shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combination {
    /// One card.
    Single,
    /// Two cards of equal rank.
    Pair,
    /// Three cards of equal rank.
    Triple,
    /// Five cards of consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank plus any fifth card.
    FourOfAKind,
    /// A straight whose cards share one suit.
    StraightFlush,
}

impl Combination {
    /// Position on the five-card ladder. Singles, pairs and triples are 0.
    #[must_use]
    pub const fn strength_rank(self) -> u16 {
        match self {
            Self::Single | Self::Pair | Self::Triple => 0,
            Self::Straight => 1,
            Self::Flush => 2,
            Self::FullHouse => 3,
            Self::FourOfAKind => 4,
            Self::StraightFlush => 5,
        }
    }

    /// Returns whether this is a five-card hand.
    #[must_use]
    pub const fn is_five_card(self) -> bool {
        self.strength_rank() > 0
    }
}

/// Classifies the cards into a combination, or `None` when they form none.
///
/// Five-card hands are checked from the strongest kind down, so a straight
/// flush is never reported as a plain straight or flush.
///
/// ```
/// use bigtwo::{Card, Combination, classify};
///
/// let cards: Vec<Card> = ["3D", "3C"].iter().map(|c| c.parse().unwrap()).collect();
/// assert_eq!(classify(&cards), Some(Combination::Pair));
/// ```
#[must_use]
pub fn classify(cards: &[Card]) -> Option<Combination> {
    match cards {
        [_] => Some(Combination::Single),
        [a, b] => (a.rank == b.rank).then_some(Combination::Pair),
        [a, b, c] => (a.rank == b.rank && b.rank == c.rank).then_some(Combination::Triple),
        [_, _, _, _, _] => classify_five(cards),
        _ => None,
    }
}

fn classify_five(cards: &[Card]) -> Option<Combination> {
    let straight = is_straight(cards);
    let flush = cards.iter().all(|card| card.suit == cards[0].suit);
    let counts = rank_counts(cards);
    let most = counts.iter().copied().max().unwrap_or(0);
    let distinct = counts.iter().filter(|&&count| count > 0).count();

    if straight && flush {
        Some(Combination::StraightFlush)
    } else if most == 4 {
        Some(Combination::FourOfAKind)
    } else if most == 3 && distinct == 2 {
        Some(Combination::FullHouse)
    } else if flush {
        Some(Combination::Flush)
    } else if straight {
        Some(Combination::Straight)
    } else {
        None
    }
}

/// Sorted rank indices form a run with no gaps. No wraparound past the Two.
fn is_straight(cards: &[Card]) -> bool {
    let mut ranks = [0u8; 5];
    for (slot, card) in ranks.iter_mut().zip(cards) {
        *slot = card.rank.index();
    }
    ranks.sort_unstable();
    ranks.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

fn rank_counts(cards: &[Card]) -> [u8; Rank::ALL.len()] {
    let mut counts = [0u8; Rank::ALL.len()];
    for card in cards {
        counts[card.rank.index() as usize] += 1;
    }
    counts
}

/// Comparable strength of a set of cards.
///
/// Singles, pairs and triples are worth their highest card ordinal. Five-card
/// hands are worth `strength_rank * 1000 + highest ordinal`, so the kind
/// always outweighs the cards. Any other size is worth 0.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u16 {
    let top = u16::from(cards.iter().map(|card| card.ordinal()).max().unwrap_or(0));
    match cards.len() {
        1..=3 => top,
        5 => classify(cards).map_or(0, Combination::strength_rank) * KIND_WEIGHT + top,
        _ => 0,
    }
}
