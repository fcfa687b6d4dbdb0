use crate::error::DealError;
use crate::result::DealOutcome;

use super::{Game, GameState, HAND_SIZE, INITIAL_TABLE_SIZE};

impl Game {
    /// Deals `HAND_SIZE` cards to each player in seat order, one block per
    /// player. Stops quietly if the deck runs out.
    fn deal_hands(&mut self) -> usize {
        let mut dealt = 0;
        for player in &mut self.players {
            for _ in 0..HAND_SIZE {
                let Some(card) = self.deck.draw() else {
                    return dealt;
                };
                player.receive(card);
                dealt += 1;
            }
        }
        dealt
    }

    /// Deals the next hands.
    ///
    /// The first deal of a game places four cards face up on the table and
    /// then gives four cards to each player. Later deals, made once every
    /// hand is empty, only refill the hands.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidState`] unless the game is waiting for its
    /// first deal or a round has just finished.
    pub fn deal(&mut self) -> Result<DealOutcome, DealError> {
        let table_cards = match self.state {
            GameState::WaitingForDeal => {
                let mut placed = 0;
                while placed < INITIAL_TABLE_SIZE {
                    let Some(card) = self.deck.draw() else {
                        break;
                    };
                    self.table.push(card);
                    placed += 1;
                }
                placed
            }
            GameState::RoundOver => 0,
            GameState::Playing | GameState::GameOver => return Err(DealError::InvalidState),
        };

        let hand_cards = self.deal_hands();
        self.state = GameState::Playing;
        debug_assert!(self.partition_holds());

        tracing::debug!(
            table_cards,
            hand_cards,
            cards_remaining = self.deck.len(),
            "cards dealt"
        );

        Ok(DealOutcome {
            table_cards,
            hand_cards,
            cards_remaining: self.deck.len(),
        })
    }
}
