//! Card types and per-card scoring values.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck generation order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    const fn ordinal(self) -> u8 {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }
}

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but never match, sum, or score.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the value used for sum captures.
    ///
    /// Only pip cards (2 through 10) have one. Aces and court cards capture
    /// by rank alone.
    #[must_use]
    pub const fn numeric_value(&self) -> Option<u8> {
        match self.rank {
            2..=10 => Some(self.rank),
            _ => None,
        }
    }

    /// Returns whether this card is a Jack.
    #[must_use]
    pub const fn is_jack(&self) -> bool {
        self.rank == JACK
    }

    /// Returns the points this card is worth once captured.
    ///
    /// | Card | Points |
    /// |---|---|
    /// | 10♦ | 3 |
    /// | 2♣ | 2 |
    /// | 7♣ | 1 |
    /// | any Ace | 1 |
    /// | any Jack | 1 |
    #[must_use]
    pub const fn points(&self) -> u32 {
        match (self.suit, self.rank) {
            (Suit::Diamonds, 10) => 3,
            (Suit::Clubs, 2) => 2,
            (Suit::Clubs, 7) | (_, ACE | JACK) => 1,
            _ => 0,
        }
    }

    /// Position of this card in a standard 52-card deck (`0..52`).
    ///
    /// Returns `None` for ranks outside 1..=13.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self.rank {
            1..=13 => Some(self.suit.ordinal() as usize * 13 + (self.rank as usize - 1)),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            ACE => f.write_str("A")?,
            JACK => f.write_str("J")?,
            QUEEN => f.write_str("Q")?,
            KING => f.write_str("K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
