//! Move selection for automated seats.

use crate::capture::possible_takes;
use crate::card::Card;

/// Picks the first card in `hand` that captures something, falling back to
/// the first card. Returns `None` for an empty hand.
#[must_use]
pub fn choose_card(hand: &[Card], table: &[Card]) -> Option<Card> {
    hand.iter()
        .copied()
        .find(|&card| !possible_takes(card, table).is_empty())
        .or_else(|| hand.first().copied())
}
