//! Move valuation and score aggregation.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::ScoreError;
use crate::player::Player;

/// Bonus for clearing the table with a non-Jack while cards remain in play.
pub const SUR_POINTS: u32 = 5;

/// Bonus for holding strictly more captured cards than every other player.
pub const MOST_CARDS_POINTS: u32 = 3;

const TEN_OF_DIAMONDS: Card = Card::new(Suit::Diamonds, 10);
const TWO_OF_CLUBS: Card = Card::new(Suit::Clubs, 2);
const SEVEN_OF_CLUBS: Card = Card::new(Suit::Clubs, 7);

/// Returns the points carried by a group of captured cards.
///
/// The played card is part of the group. Sur and majority bonuses are not
/// included.
///
/// # Example
///
/// ```
/// use pasur::{Card, Suit, score::evaluate_cards_value};
///
/// let group = [
///     Card::new(Suit::Diamonds, 10),
///     Card::new(Suit::Clubs, 2),
///     Card::new(Suit::Spades, 1),
/// ];
/// assert_eq!(evaluate_cards_value(&group), 6);
/// ```
#[must_use]
pub fn evaluate_cards_value(cards: &[Card]) -> u32 {
    cards.iter().map(Card::points).sum()
}

/// Itemized score for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// 3 if the player holds the ten of diamonds.
    pub ten_diamonds: u32,
    /// 2 if the player holds the two of clubs.
    pub two_clubs: u32,
    /// One point per Ace.
    pub aces: u32,
    /// One point per Jack.
    pub jacks: u32,
    /// 1 if the player holds the seven of clubs.
    pub clubs_seven: u32,
    /// Sur count times [`SUR_POINTS`].
    pub surs: u32,
    /// [`MOST_CARDS_POINTS`] for the sole holder of the largest pile.
    pub most_cards: u32,
    /// Sum of every other field.
    pub total: u32,
}

impl ScoreBreakdown {
    const fn item_sum(&self) -> u32 {
        self.ten_diamonds
            + self.two_clubs
            + self.aces
            + self.jacks
            + self.clubs_seven
            + self.surs
            + self.most_cards
    }

    /// Returns whether `total` equals the sum of the itemized fields.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.total == self.item_sum()
    }
}

/// Computes the score breakdown for `player_id` from the captured piles.
///
/// The result depends only on the piles and sur counts, so it can be called
/// for a live scoreboard as often as needed and again for final ranking.
///
/// # Errors
///
/// Returns [`ScoreError::UnknownPlayer`] if no player has the given id.
pub fn calculate_current_score(
    players: &[Player],
    player_id: u8,
) -> Result<ScoreBreakdown, ScoreError> {
    players
        .iter()
        .find(|player| player.id() == player_id)
        .map(|player| player_breakdown(players, player))
        .ok_or(ScoreError::UnknownPlayer(player_id))
}

/// Scores a player already known to sit at `players`.
pub(crate) fn player_breakdown(players: &[Player], player: &Player) -> ScoreBreakdown {
    let captured = player.captured();
    let holds = |card: Card| u32::from(captured.contains(&card));
    let count_rank = |rank: u8| captured.iter().filter(|card| card.rank == rank).count() as u32;

    let pile = captured.len();
    let sole_leader = pile > 0
        && players
            .iter()
            .filter(|other| other.id() != player.id())
            .all(|other| other.captured().len() < pile);

    let mut breakdown = ScoreBreakdown {
        ten_diamonds: holds(TEN_OF_DIAMONDS) * TEN_OF_DIAMONDS.points(),
        two_clubs: holds(TWO_OF_CLUBS) * TWO_OF_CLUBS.points(),
        aces: count_rank(crate::card::ACE),
        jacks: count_rank(crate::card::JACK),
        clubs_seven: holds(SEVEN_OF_CLUBS) * SEVEN_OF_CLUBS.points(),
        surs: player.surs() * SUR_POINTS,
        most_cards: if sole_leader { MOST_CARDS_POINTS } else { 0 },
        total: 0,
    };
    breakdown.total = breakdown.item_sum();
    breakdown
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Seat index.
    pub player_id: u8,
    /// Display name.
    pub name: String,
    /// Score breakdown.
    pub breakdown: ScoreBreakdown,
    /// Number of captured cards.
    pub captured_count: usize,
    /// Number of surs scored.
    pub surs: u32,
}

/// Ranks every player by total score, highest first. Equal totals keep seat
/// order.
#[must_use]
pub fn leaderboard(players: &[Player]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players
        .iter()
        .map(|player| Standing {
            player_id: player.id(),
            name: player.name().into(),
            breakdown: player_breakdown(players, player),
            captured_count: player.captured().len(),
            surs: player.surs(),
        })
        .collect();

    standings.sort_by(|a, b| b.breakdown.total.cmp(&a.breakdown.total));
    standings
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::player::Controller;

    fn player(id: u8, captured: &[Card], surs: u32) -> Player {
        let mut player = Player::new(id, id.to_string(), Controller::Human);
        player.capture(captured.iter().copied());
        for _ in 0..surs {
            player.record_sur();
        }
        player
    }

    #[test]
    fn breakdown_items_special_cards() {
        let players = [
            player(
                0,
                &[
                    TEN_OF_DIAMONDS,
                    TWO_OF_CLUBS,
                    SEVEN_OF_CLUBS,
                    Card::new(Suit::Hearts, 1),
                    Card::new(Suit::Spades, 1),
                    Card::new(Suit::Hearts, 11),
                ],
                2,
            ),
            player(1, &[Card::new(Suit::Hearts, 5)], 0),
        ];

        let breakdown = calculate_current_score(&players, 0).unwrap();
        assert_eq!(breakdown.ten_diamonds, 3);
        assert_eq!(breakdown.two_clubs, 2);
        assert_eq!(breakdown.clubs_seven, 1);
        assert_eq!(breakdown.aces, 2);
        assert_eq!(breakdown.jacks, 1);
        assert_eq!(breakdown.surs, 10);
        assert_eq!(breakdown.most_cards, MOST_CARDS_POINTS);
        assert_eq!(breakdown.total, 3 + 2 + 1 + 2 + 1 + 10 + 3);
        assert!(breakdown.is_consistent());
    }

    #[test]
    fn tied_piles_award_no_majority() {
        let players = [
            player(0, &[Card::new(Suit::Hearts, 5)], 0),
            player(1, &[Card::new(Suit::Spades, 5)], 0),
        ];

        assert_eq!(calculate_current_score(&players, 0).unwrap().most_cards, 0);
        assert_eq!(calculate_current_score(&players, 1).unwrap().most_cards, 0);
    }

    #[test]
    fn empty_piles_score_zero() {
        let players = [player(0, &[], 0), player(1, &[], 0)];
        let breakdown = calculate_current_score(&players, 1).unwrap();
        assert_eq!(breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn unknown_player_is_an_error() {
        let players = [player(0, &[], 0)];
        assert_eq!(
            calculate_current_score(&players, 3).unwrap_err(),
            ScoreError::UnknownPlayer(3)
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let players = [
            player(0, &[TEN_OF_DIAMONDS, Card::new(Suit::Clubs, 11)], 1),
            player(1, &[TWO_OF_CLUBS], 0),
        ];

        let first = calculate_current_score(&players, 0).unwrap();
        let second = calculate_current_score(&players, 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn leaderboard_sorts_by_total_then_seat() {
        let players = [
            player(0, &[Card::new(Suit::Hearts, 4)], 0),
            player(1, &[TEN_OF_DIAMONDS, Card::new(Suit::Hearts, 3)], 0),
            player(2, &[Card::new(Suit::Spades, 4)], 0),
        ];

        let ranked = leaderboard(&players);
        let order: Vec<u8> = ranked.iter().map(|standing| standing.player_id).collect();
        assert_eq!(order, [1, 0, 2]);
        assert_eq!(ranked[0].breakdown.total, 3 + MOST_CARDS_POINTS);
        assert_eq!(ranked[0].captured_count, 2);
    }

    #[test]
    fn leaderboard_lists_every_seat_with_its_score() {
        let players = [
            player(0, &[], 0),
            player(1, &[SEVEN_OF_CLUBS, Card::new(Suit::Spades, 1)], 2),
            player(2, &[Card::new(Suit::Diamonds, 6)], 0),
        ];

        let ranked = leaderboard(&players);
        assert_eq!(ranked.len(), players.len());
        for standing in &ranked {
            let expected = calculate_current_score(&players, standing.player_id).unwrap();
            assert_eq!(standing.breakdown, expected);
            assert!(standing.breakdown.is_consistent());
        }
        assert_eq!(ranked[0].player_id, 1);
        assert_eq!(ranked[0].breakdown.total, 1 + 1 + 2 * SUR_POINTS + MOST_CARDS_POINTS);
    }
}
