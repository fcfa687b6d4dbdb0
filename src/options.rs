//! Game configuration options.

use alloc::borrow::Cow;

use crate::player::Difficulty;

/// Configuration options for a game.
///
/// The rules themselves are fixed; options only describe who sits at the
/// table. Use the builder pattern to customize them:
///
/// ```
/// use pasur::{Difficulty, GameOptions};
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_difficulty(Difficulty::Hard);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of seated players (2 to 4). Seat 0 is the human.
    pub players: u8,
    /// Difficulty assigned to every automated seat.
    pub difficulty: Difficulty,
    /// Display name for the human seat.
    pub human_name: Cow<'static, str>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            difficulty: Difficulty::Medium,
            human_name: Cow::Borrowed("You"),
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use pasur::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(3);
    /// assert_eq!(options.players, 3);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the difficulty of the automated seats.
    ///
    /// # Example
    ///
    /// ```
    /// use pasur::{Difficulty, GameOptions};
    ///
    /// let options = GameOptions::default().with_difficulty(Difficulty::Easy);
    /// assert_eq!(options.difficulty, Difficulty::Easy);
    /// ```
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the human player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use pasur::GameOptions;
    ///
    /// let options = GameOptions::default().with_human_name("Dara");
    /// assert_eq!(options.human_name, "Dara");
    /// ```
    #[must_use]
    pub fn with_human_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.human_name = name.into();
        self
    }
}
