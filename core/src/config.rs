// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game configuration

use crate::{board::MAX_BOARD_SIZE, Color, GameError};
use serde::{Deserialize, Serialize};

/// Default board dimension
pub const DEFAULT_BOARD_SIZE: usize = 7;
/// Seconds on each player's clock at the start of a game
pub const DEFAULT_TIME_BUDGET_SECS: i64 = 120;
/// Consecutive passes that end the game
pub const DEFAULT_SKIP_LIMIT: u32 = 2;

/// Settings for one game. Missing fields fall back to their defaults when
/// deserialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rows and columns of a fresh board
    pub board_size: usize,
    /// Clock per player, in seconds
    pub time_budget_secs: i64,
    /// Seconds deducted by each tick
    pub tick_secs: i64,
    /// Consecutive passes that end the game
    pub skip_limit: u32,
    /// Who moves first
    pub first_player: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            time_budget_secs: DEFAULT_TIME_BUDGET_SECS,
            tick_secs: 1,
            skip_limit: DEFAULT_SKIP_LIMIT,
            first_player: Color::White,
        }
    }
}

impl GameConfig {
    /// Default settings on a board of `size`
    pub fn with_size(size: usize) -> Self {
        Self {
            board_size: size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidSize(self.board_size));
        }
        if self.time_budget_secs <= 0 {
            return Err(GameError::InvalidConfig(
                "time_budget_secs must be positive".to_string(),
            ));
        }
        if self.skip_limit == 0 {
            return Err(GameError::InvalidConfig(
                "skip_limit must be at least 1".to_string(),
            ));
        }
        if self.tick_secs <= 0 {
            return Err(GameError::InvalidConfig(
                "tick_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
