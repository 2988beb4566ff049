// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-player ledgers: stones on the board, score and clock

use crate::Color;
use serde::{Deserialize, Serialize};

/// One player's running totals
///
/// Time is kept in whole seconds and may briefly go negative when a tick
/// overshoots; [`Player::display_time`] clamps it for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
    stones: usize,
    score: usize,
    time_remaining: i64,
}

impl Player {
    /// Create a ledger for `color` with a fresh clock
    pub fn new(color: Color, time_budget_secs: i64) -> Self {
        Self {
            name: color.to_string(),
            color,
            stones: 0,
            score: 0,
            time_remaining: time_budget_secs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Live stones on the board after the last committed move
    pub fn stones(&self) -> usize {
        self.stones
    }

    pub fn set_stones(&mut self, stones: usize) {
        self.stones = stones;
    }

    /// Territory plus live stones
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn set_score(&mut self, score: usize) {
        self.score = score;
    }

    pub fn time_remaining(&self) -> i64 {
        self.time_remaining
    }

    pub fn set_time_remaining(&mut self, secs: i64) {
        self.time_remaining = secs;
    }

    pub fn deduct_time(&mut self, secs: i64) {
        self.time_remaining = self.time_remaining.saturating_sub(secs);
    }

    /// Remaining time, never below zero
    pub fn display_time(&self) -> u64 {
        self.time_remaining.max(0) as u64
    }

    pub fn has_time_left(&self) -> bool {
        self.time_remaining > 0
    }

    /// Zero the counters and refill the clock
    pub fn reset(&mut self, time_budget_secs: i64) {
        self.stones = 0;
        self.score = 0;
        self.time_remaining = time_budget_secs;
    }
}

/// Both ledgers of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    pub white: Player,
    pub black: Player,
}

impl Players {
    pub fn new(time_budget_secs: i64) -> Self {
        Self {
            white: Player::new(Color::White, time_budget_secs),
            black: Player::new(Color::Black, time_budget_secs),
        }
    }

    pub fn get(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// The player with the higher score
    ///
    /// White is checked first and Black only takes the lead with a strictly
    /// greater score, so a tie goes to White.
    pub fn leader(&self) -> &Player {
        if self.black.score() > self.white.score() {
            &self.black
        } else {
            &self.white
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        [&self.white, &self.black].into_iter()
    }
}
