//! A Pasur rule engine with optional `no_std` support.
//!
//! Pasur is a fishing card game for two to four players: each turn a player
//! plays one card, capturing the table cards that share its rank or that add
//! up to its value, and scores points for special cards and for clearing the
//! table (a *sur*).
//!
//! The crate provides a [`Game`] type that owns one session (deck, table,
//! players, and turn order) together with the pure rule functions it is built
//! from: [`capture::possible_takes`], [`score::evaluate_cards_value`], and
//! [`score::calculate_current_score`].
//!
//! # Example
//!
//! ```
//! use pasur::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.deal().unwrap();
//!
//! while game.state() != GameState::GameOver {
//!     if game.state() == GameState::RoundOver {
//!         game.deal().unwrap();
//!         continue;
//!     }
//!     let seat = game.current_player().unwrap();
//!     game.play_automated(seat).unwrap();
//! }
//!
//! let standings = game.leaderboard();
//! assert_eq!(standings.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod capture;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod score;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, PlayError, ScoreError, SetupError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::{Controller, Difficulty, Player};
pub use result::{DealOutcome, PlayOutcome};
pub use score::{ScoreBreakdown, Standing};
