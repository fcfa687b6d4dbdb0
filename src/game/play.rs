use alloc::vec::Vec;

use crate::capture::possible_takes;
use crate::card::Card;
use crate::error::PlayError;
use crate::result::PlayOutcome;
use crate::score::evaluate_cards_value;
use crate::strategy::choose_card;

use super::{Game, GameState};

impl Game {
    /// Plays `card` from the hand of `player_id`.
    ///
    /// If the card captures anything, the card and everything it takes move
    /// to the player's captured pile; otherwise it is laid on the table.
    /// Clearing the table with a non-Jack while the deck or any hand still
    /// holds cards scores a sur.
    ///
    /// When the last hand empties, the game moves to
    /// [`GameState::RoundOver`], or to [`GameState::GameOver`] if the deck is
    /// also exhausted, in which case the last taker collects the table.
    ///
    /// Nothing is changed when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing state, the player
    /// is not seated, it is not the player's turn, or the card is not in the
    /// player's hand.
    pub fn play(&mut self, player_id: u8, card: Card) -> Result<PlayOutcome, PlayError> {
        if self.state != GameState::Playing {
            return Err(PlayError::InvalidState);
        }

        let seat = usize::from(player_id);
        let player = self
            .players
            .get_mut(seat)
            .ok_or(PlayError::PlayerNotFound)?;

        if self.turn != seat {
            return Err(PlayError::NotYourTurn);
        }

        if !player.take_from_hand(card) {
            return Err(PlayError::CardNotInHand);
        }

        let captured = possible_takes(card, &self.table);
        let mut points = 0;
        let mut sur = false;

        if captured.is_empty() {
            self.table.push(card);
            tracing::debug!(player = player_id, card = %card, "card laid on table");
        } else {
            self.table.retain(|held| !captured.contains(held));

            let mut group = Vec::with_capacity(captured.len() + 1);
            group.push(card);
            group.extend_from_slice(&captured);
            points = evaluate_cards_value(&group);

            // The sur only counts while cards remain in play.
            sur = self.table.is_empty() && !card.is_jack() && !self.cards_exhausted();

            if let Some(player) = self.players.get_mut(seat) {
                player.capture(group);
                if sur {
                    player.record_sur();
                }
            }
            self.last_taker = Some(player_id);

            tracing::debug!(
                player = player_id,
                card = %card,
                taken = captured.len(),
                points,
                "cards captured"
            );
            if sur {
                tracing::info!(player = player_id, card = %card, "sur");
            }
        }

        let remainder = self.advance_turn();
        debug_assert!(self.partition_holds());

        Ok(PlayOutcome {
            player_id,
            card,
            captured,
            points,
            sur,
            remainder,
            state: self.state,
        })
    }

    /// Plays the card chosen by [`choose_card`] for `player_id`.
    ///
    /// Works for any seat, so a front end can also use it to suggest a move
    /// to the human player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if the player holds no cards, and any
    /// error [`Game::play`] returns.
    pub fn play_automated(&mut self, player_id: u8) -> Result<PlayOutcome, PlayError> {
        if self.state != GameState::Playing {
            return Err(PlayError::InvalidState);
        }

        let player = self
            .players
            .get(usize::from(player_id))
            .ok_or(PlayError::PlayerNotFound)?;
        let card = choose_card(player.hand(), &self.table).ok_or(PlayError::EmptyHand)?;

        self.play(player_id, card)
    }

    /// Returns whether the deck and every hand are empty.
    fn cards_exhausted(&self) -> bool {
        self.deck.is_empty() && self.all_hands_empty()
    }

    /// Passes the turn to the next seat holding cards and closes the round
    /// or the game once every hand is empty.
    ///
    /// Returns the table cards awarded to the last taker if the game ended.
    fn advance_turn(&mut self) -> Vec<Card> {
        let seats = self.players.len();
        self.turn = (self.turn + 1) % seats;

        if self.all_hands_empty() {
            if self.deck.is_empty() {
                return self.finish_game();
            }
            self.state = GameState::RoundOver;
            tracing::debug!(cards_remaining = self.deck.len(), "round over");
            return Vec::new();
        }

        // A short final deal can leave some seats without cards.
        for _ in 0..seats {
            if self
                .players
                .get(self.turn)
                .is_some_and(|player| !player.hand().is_empty())
            {
                break;
            }
            self.turn = (self.turn + 1) % seats;
        }

        Vec::new()
    }

    /// Awards the table to the last taker and ends the game.
    fn finish_game(&mut self) -> Vec<Card> {
        self.state = GameState::GameOver;

        let remainder = match self.last_taker {
            Some(taker) => match self.players.get_mut(usize::from(taker)) {
                Some(player) => {
                    let remainder = core::mem::take(&mut self.table);
                    player.capture(remainder.iter().copied());
                    remainder
                }
                None => Vec::new(),
            },
            None => Vec::new(),
        };

        tracing::info!(
            last_taker = ?self.last_taker,
            remainder = remainder.len(),
            "game over"
        );

        remainder
    }
}
