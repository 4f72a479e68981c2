//! Card types and Big Two ordering.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit, declared from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits from weakest to strongest.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Position of the suit in the tiebreak order (0 = Diamonds).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The suit glyph used when rendering a card.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '♦' | 'D' | 'd' => Some(Self::Diamonds),
            '♣' | 'C' | 'c' => Some(Self::Clubs),
            '♥' | 'H' | 'h' => Some(Self::Hearts),
            '♠' | 'S' | 's' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Card rank, declared from weakest (3) to strongest (2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Three, the lowest rank.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Two, the highest rank.
    Two,
}

impl Rank {
    /// All ranks from weakest to strongest.
    pub const ALL: [Self; 13] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Position of the rank in the rank order (0 = Three, 12 = Two).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The label used when rendering a card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Two => "2",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let rank = match label {
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            "2" => Self::Two,
            _ => return None,
        };
        Some(rank)
    }
}

/// A playing card.
///
/// Cards are plain values: two cards are equal when suit and rank match, and
/// they are ordered by [`Card::ordinal`].
///
/// ```
/// use bigtwo::{Card, Rank, Suit};
///
/// let card: Card = "3D".parse().unwrap();
/// assert_eq!(card, Card::DIAMOND_THREE);
/// assert_eq!(card.to_string(), "♦3");
/// assert!(Card::new(Suit::Spades, Rank::Two) > Card::new(Suit::Diamonds, Rank::Two));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// The three of diamonds, which must be part of the opening play.
    pub const DIAMOND_THREE: Self = Self::new(Suit::Diamonds, Rank::Three);

    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Position of the card in the total order over the 52 cards.
    ///
    /// Rank dominates, suit breaks ties: `rank * 4 + suit`.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.rank.index() * 4 + self.suit.index()
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.glyph(), self.rank.label())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let first = s.chars().next().ok_or(ParseCardError::Empty)?;
        let last = s.chars().next_back().ok_or(ParseCardError::Empty)?;

        // Suit first ("♦3", "D10"), then suit last ("3D", "10s").
        let (suit, rank) = if let Some(suit) = Suit::from_symbol(first) {
            (suit, &s[first.len_utf8()..])
        } else if let Some(suit) = Suit::from_symbol(last) {
            (suit, &s[..s.len() - last.len_utf8()])
        } else {
            return Err(ParseCardError::UnknownSuit);
        };

        let rank = Rank::from_label(rank).ok_or(ParseCardError::UnknownRank)?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards in a Big Two deck.
pub const DECK_SIZE: usize = 52;
