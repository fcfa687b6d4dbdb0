//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are seated and the first deal has not happened yet.
    WaitingForDeal,
    /// Players take turns playing cards.
    Playing,
    /// Every hand is empty and the deck still has cards for another deal.
    RoundOver,
    /// The deck and every hand are exhausted and the remainder is awarded.
    GameOver,
}
