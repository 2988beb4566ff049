// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goban Core - Game Rules and Board Logic
//!
//! This crate provides the rules engine for the board game Go:
//! - Square board representation with bounds-checked access
//! - Group / liberty flood-fill for captures and territory
//! - Ko and suicide enforcement with transactional rollback
//! - Per-player ledgers for stones, score and clock time
//!
//! A presentation layer holds one [`Game`] per match and feeds it user
//! actions; the engine never renders anything itself.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod config;
pub mod game;
pub mod player;
pub mod rules;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use thiserror::Error;

pub use board::{Board, MAX_BOARD_SIZE};
pub use config::GameConfig;
pub use game::{Game, GameStatus, MoveOutcome, Snapshot};
pub use player::{Player, Players};

/// Content of a single board cell.
///
/// Serialised as the numeric codes `0`, `1` and `2` so board fixtures can be
/// written as plain integer grids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr,
)]
#[repr(u8)]
pub enum Piece {
    /// No stone on this intersection
    #[default]
    Empty = 0,
    /// A white stone
    White = 1,
    /// A black stone
    Black = 2,
}

impl Piece {
    /// The player owning this stone, if any
    pub fn color(&self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::White => Some(Color::White),
            Piece::Black => Some(Color::Black),
        }
    }
}

impl TryFrom<u8> for Piece {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Piece::Empty),
            1 => Ok(Piece::White),
            2 => Ok(Piece::Black),
            other => Err(GameError::InvalidBoard(format!("unknown cell code {other}"))),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Empty => write!(f, "Empty"),
            Piece::White => write!(f, "White"),
            Piece::Black => write!(f, "Black"),
        }
    }
}

/// Player color. A player is identified by the stones they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// White player (moves first in this ruleset)
    White,
    /// Black player
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl From<Color> for Piece {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Piece::White,
            Color::Black => Piece::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Piece::from(*self), f)
    }
}

/// Board coordinate, zero-based from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a game reached its terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Both players passed in a row
    ConsecutivePasses,
    /// The given player's clock ran out
    TimeExpired(Color),
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::ConsecutivePasses => write!(f, "both players passed"),
            GameOverReason::TimeExpired(color) => write!(f, "{color} ran out of time"),
        }
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("Position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Board dimension
        size: usize,
    },

    /// The position holds an opponent stone
    #[error("Position ({row}, {col}) is occupied")]
    Occupied {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
    },

    /// The move recreates the position from two plies earlier
    #[error("Move violates ko rule")]
    KoViolation,

    /// The move leaves the mover with no more stones than before
    #[error("Move would result in self-capture")]
    SuicideViolation,

    /// A board needs between one and `MAX_BOARD_SIZE` rows and columns
    #[error("Invalid board size: {0}")]
    InvalidSize(usize),

    /// Malformed board data
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// Rejected game configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The game has ended
    #[error("Game over: {0}")]
    GameOver(GameOverReason),

    /// A result was requested before the game ended
    #[error("Game is still in progress")]
    GameInProgress,
}

impl GameError {
    /// Whether this is a rejected move that left the game untouched
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds { .. }
                | GameError::Occupied { .. }
                | GameError::KoViolation
                | GameError::SuicideViolation
        )
    }
}
