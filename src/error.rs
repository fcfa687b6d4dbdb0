//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The table seats two to four players.
    #[error("a game needs 2 to 4 players, got {0}")]
    InvalidPlayerCount(u8),
    /// The deck does not hold each of the 52 cards exactly once.
    #[error("deck must hold each of the 52 cards exactly once")]
    InvalidDeck,
    /// The deck can only be replaced before the first deal.
    #[error("invalid game state for replacing the deck")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur when a card is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a card.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// The player has no cards to play.
    #[error("player has no cards to play")]
    EmptyHand,
}

/// Errors that can occur while scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// No player is seated with this id.
    #[error("unknown player {0}")]
    UnknownPlayer(u8),
}
