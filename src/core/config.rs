//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::{Result, UnoError};

/// Fewest players a game can be dealt for.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can be dealt for.
pub const MAX_PLAYERS: usize = 15;

/// Cards dealt to each player.
pub const HAND_SIZE: usize = 7;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnoConfig {
    /// Number of seats (2-15).
    pub player_count: usize,

    /// Shuffle the deck before dealing.
    /// When false the deck is dealt in a fixed order, for reproducible setups.
    pub shuffle: bool,

    /// Seed for every random choice the engine makes.
    pub seed: u64,
}

impl Default for UnoConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            shuffle: true,
            seed: 42,
        }
    }
}

impl UnoConfig {
    /// Config for `player_count` seats with default settings otherwise.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the player count is within 2-15.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(UnoError::InvalidPlayer(format!(
                "game must have between {MIN_PLAYERS} and {MAX_PLAYERS} players, got {}",
                self.player_count
            )));
        }
        Ok(())
    }
}
