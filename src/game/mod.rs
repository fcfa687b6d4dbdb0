//! Game engine and state management.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::capture::possible_takes;
use crate::card::{Card, DECK_SIZE};
use crate::deck::{Deck, holds_each_card_once};
use crate::error::{ScoreError, SetupError};
use crate::options::GameOptions;
use crate::player::{Controller, Player};
use crate::score::{
    ScoreBreakdown, Standing, calculate_current_score, leaderboard, player_breakdown,
};

mod deal;
mod play;
pub mod state;

pub use state::GameState;

/// Cards dealt to each player per deal.
pub const HAND_SIZE: usize = 4;
/// Cards placed face up on the table by the first deal.
pub const INITIAL_TABLE_SIZE: usize = 4;

/// A Pasur session: deck, table, seated players, and turn order.
///
/// Every operation takes the session by reference, so independent games
/// never share state.
pub struct Game {
    /// Cards not yet dealt. The last card is the top.
    deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Face-up cards that nobody has captured.
    table: Vec<Card>,
    /// Seated players, indexed by seat.
    players: Vec<Player>,
    /// Seat whose turn it is.
    turn: usize,
    /// Seat that captured most recently.
    last_taker: Option<u8>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Seat 0 is the human player; every other seat is automated.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] unless the options seat two
    /// to four players.
    ///
    /// # Example
    ///
    /// ```
    /// use pasur::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        if !(2..=4).contains(&options.players) {
            return Err(SetupError::InvalidPlayerCount(options.players));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let players = (0..options.players)
            .map(|id| {
                if id == 0 {
                    Player::new(id, String::from(&*options.human_name), Controller::Human)
                } else {
                    Player::new(
                        id,
                        format!("Bot {id}"),
                        Controller::Automated(options.difficulty),
                    )
                }
            })
            .collect();

        tracing::debug!(players = options.players, seed, "game created");

        Ok(Self {
            deck,
            options,
            state: GameState::WaitingForDeal,
            table: Vec::new(),
            players,
            turn: 0,
            last_taker: None,
            rng,
        })
    }

    /// Starts a new game at the same table with a freshly shuffled deck.
    ///
    /// Hands, captured piles, and sur counts are cleared.
    pub fn restart(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.table.clear();
        for player in &mut self.players {
            player.reset();
        }
        self.turn = 0;
        self.last_taker = None;
        self.state = GameState::WaitingForDeal;
    }

    /// Replaces the deck with a caller-supplied order, e.g. to replay a
    /// recorded game.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidState`] once cards have been dealt, and
    /// [`SetupError::InvalidDeck`] unless `deck` holds each of the 52 cards
    /// exactly once. The current deck is kept on error.
    pub fn set_deck(&mut self, deck: Deck) -> Result<(), SetupError> {
        if self.state != GameState::WaitingForDeal {
            return Err(SetupError::InvalidState);
        }
        if !deck.is_complete() {
            return Err(SetupError::InvalidDeck);
        }

        tracing::debug!("deck replaced");
        self.deck = deck;
        Ok(())
    }

    /// Returns the undealt cards.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the face-up table cards.
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    /// Returns every seated player.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in the given seat.
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.get(usize::from(player_id))
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` outside of [`GameState::Playing`].
    pub fn current_player(&self) -> Option<u8> {
        if self.state != GameState::Playing {
            return None;
        }
        self.players.get(self.turn).map(Player::id)
    }

    /// Returns the seat that captured most recently.
    pub const fn last_taker(&self) -> Option<u8> {
        self.last_taker
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the share of the deck already dealt, in whole percent.
    pub fn progress_percent(&self) -> u8 {
        let dealt = DECK_SIZE.saturating_sub(self.deck.len());
        (dealt * 100 / DECK_SIZE) as u8
    }

    /// Returns the table cards `card` would capture if played now.
    pub fn possible_takes(&self, card: Card) -> Vec<Card> {
        possible_takes(card, &self.table)
    }

    /// Returns the score breakdown for one player.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::UnknownPlayer`] if the seat does not exist.
    pub fn score(&self, player_id: u8) -> Result<ScoreBreakdown, ScoreError> {
        calculate_current_score(&self.players, player_id)
    }

    /// Returns the score breakdown of every player in seat order.
    pub fn scores(&self) -> Vec<ScoreBreakdown> {
        self.players
            .iter()
            .map(|player| player_breakdown(&self.players, player))
            .collect()
    }

    /// Returns the players ranked by total score, highest first.
    pub fn leaderboard(&self) -> Vec<Standing> {
        leaderboard(&self.players)
    }

    /// Checks that deck, table, hands, and captured piles together hold each
    /// of the 52 cards exactly once.
    pub fn partition_holds(&self) -> bool {
        holds_each_card_once(
            self.deck
                .cards()
                .iter()
                .chain(&self.table)
                .chain(self.players.iter().flat_map(Player::hand))
                .chain(self.players.iter().flat_map(Player::captured)),
        )
    }

    fn all_hands_empty(&self) -> bool {
        self.players.iter().all(|player| player.hand().is_empty())
    }
}
