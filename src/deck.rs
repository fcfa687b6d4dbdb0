//! The 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered stack of cards. The last card is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52 distinct cards in suit-major order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Builds a standard deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from an explicit order. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck holds each of the 52 cards exactly once.
    ///
    /// ```
    /// use pasur::{Card, Deck, Suit};
    ///
    /// assert!(Deck::standard().is_complete());
    /// assert!(!Deck::from_cards(vec![Card::new(Suit::Clubs, 2)]).is_complete());
    /// ```
    #[must_use]
    pub fn is_complete(&self) -> bool {
        holds_each_card_once(&self.cards)
    }
}

/// Checks that `cards` contains each of the 52 cards exactly once.
pub(crate) fn holds_each_card_once<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut seen: u64 = 0;
    let mut count = 0;

    for card in cards {
        let Some(index) = card.index() else {
            return false;
        };
        let bit = 1_u64 << index;
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
        count += 1;
    }

    count == DECK_SIZE
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
