//! Capture resolution for a played card.

use alloc::vec::Vec;

use crate::card::Card;

/// Returns the table cards captured by `played`, in table order.
///
/// A card is captured when it has the same rank as the played card, or when
/// the played card is a pip card (2 through 10) and the table card belongs to
/// at least one group of pip cards whose values add up to the played value.
/// Every matching card is taken in the same move, so overlapping groups are
/// merged rather than chosen between.
///
/// An empty result means the played card is laid on the table.
///
/// # Example
///
/// ```
/// use pasur::{Card, Suit, capture::possible_takes};
///
/// let table = [Card::new(Suit::Spades, 3), Card::new(Suit::Diamonds, 4)];
/// let takes = possible_takes(Card::new(Suit::Clubs, 7), &table);
/// assert_eq!(takes, table);
/// ```
#[must_use]
pub fn possible_takes(played: Card, table: &[Card]) -> Vec<Card> {
    let target = played.numeric_value();

    table
        .iter()
        .enumerate()
        .filter(|&(index, card)| {
            card.rank == played.rank
                || target.is_some_and(|target| completes_sum(target, *card, index, table))
        })
        .map(|(_, card)| *card)
        .collect()
}

/// Checks whether `card` (at `index` on the table) can be combined with other
/// pip cards on the table to reach `target`.
fn completes_sum(target: u8, card: Card, index: usize, table: &[Card]) -> bool {
    let Some(value) = card.numeric_value() else {
        return false;
    };
    if value > target {
        return false;
    }

    let wanted: u16 = 1 << (target - value);
    // Bit n set: some subset of the other pip cards sums to n. Targets are at
    // most 10, so 11 bits suffice.
    let limit: u16 = (1 << (target + 1)) - 1;
    let mut reachable: u16 = 1;

    for (other, candidate) in table.iter().enumerate() {
        if reachable & wanted != 0 {
            return true;
        }
        if other == index {
            continue;
        }
        if let Some(step) = candidate.numeric_value().filter(|&step| step <= target) {
            reachable |= (reachable << step) & limit;
        }
    }

    reachable & wanted != 0
}
