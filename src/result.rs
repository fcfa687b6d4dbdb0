//! Outcome types returned by game operations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;

/// What happened when a card was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The player who played.
    pub player_id: u8,
    /// The card that was played.
    pub card: Card,
    /// Table cards taken by the play (empty if the card was laid down).
    pub captured: Vec<Card>,
    /// Points carried by the played card and the captured cards.
    pub points: u32,
    /// Whether the play cleared the table for a sur.
    pub sur: bool,
    /// Table cards handed to the last taker because the game ended.
    pub remainder: Vec<Card>,
    /// Game state after the play.
    pub state: GameState,
}

impl PlayOutcome {
    /// Returns whether the play captured anything.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Returns the points gained by the move, including the sur bonus.
    #[must_use]
    pub const fn total_points(&self) -> u32 {
        if self.sur {
            self.points + crate::score::SUR_POINTS
        } else {
            self.points
        }
    }
}

/// Result of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealOutcome {
    /// Cards placed face up on the table.
    pub table_cards: usize,
    /// Cards handed to players.
    pub hand_cards: usize,
    /// Cards left in the deck afterwards.
    pub cards_remaining: usize,
}
