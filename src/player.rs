//! Seated players.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Skill setting for an automated seat.
///
/// Carried for presentation; every level currently uses the same move choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Difficulty {
    /// Easy opponent.
    Easy,
    /// Medium opponent.
    #[default]
    Medium,
    /// Hard opponent.
    Hard,
}

/// Who decides the moves for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    /// Moves come from the person at the keyboard.
    Human,
    /// Moves are chosen by [`crate::strategy::choose_card`].
    Automated(Difficulty),
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: u8,
    name: String,
    controller: Controller,
    hand: Vec<Card>,
    captured: Vec<Card>,
    surs: u32,
}

impl Player {
    /// Creates a player with empty hand and captured pile.
    #[must_use]
    pub const fn new(id: u8, name: String, controller: Controller) -> Self {
        Self {
            id,
            name,
            controller,
            hand: Vec::new(),
            captured: Vec::new(),
            surs: 0,
        }
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seat controller.
    #[must_use]
    pub const fn controller(&self) -> Controller {
        self.controller
    }

    /// Returns whether moves for this seat are chosen automatically.
    #[must_use]
    pub const fn is_automated(&self) -> bool {
        matches!(self.controller, Controller::Automated(_))
    }

    /// Returns the cards currently held.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns every card this player has captured during the game.
    #[must_use]
    pub fn captured(&self) -> &[Card] {
        &self.captured
    }

    /// Returns how many surs this player has scored.
    #[must_use]
    pub const fn surs(&self) -> u32 {
        self.surs
    }

    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes `card` from the hand, returning whether it was held.
    pub(crate) fn take_from_hand(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&held| held == card) {
            Some(position) => {
                self.hand.remove(position);
                true
            }
            None => false,
        }
    }

    pub(crate) fn capture(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.captured.extend(cards);
    }

    pub(crate) const fn record_sur(&mut self) {
        self.surs += 1;
    }

    pub(crate) fn reset(&mut self) {
        self.hand.clear();
        self.captured.clear();
        self.surs = 0;
    }
}
