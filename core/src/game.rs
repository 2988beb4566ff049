// SPDX-License-Identifier: MIT OR Apache-2.0

//! The rules engine: one [`Game`] per match
//!
//! Every transition either commits completely or leaves the game exactly as
//! it was. Placements snapshot the board into the history before touching
//! it and restore that snapshot on a ko or suicide violation.

use crate::config::GameConfig;
use crate::player::{Player, Players};
use crate::{board::Board, rules, Color, Coord, GameError, GameOverReason, Piece};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the current player to move or pass
    AwaitingMove,
    /// Terminal; only `reset` leaves this state
    GameOver(GameOverReason),
}

/// Result of a committed placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub board: Board,
    pub players: Players,
    /// Opponent stones removed by the move
    pub captured: Vec<Coord>,
}

/// Everything a presentation layer needs to draw the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub players: Players,
    pub current_player: Color,
    pub status: GameStatus,
}

/// A game session: board, ledgers, history and turn state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    starting_board: Board,
    board: Board,
    /// Board before every attempted placement that was not rolled back
    history: Vec<Board>,
    players: Players,
    current: Color,
    skip_count: u32,
    status: GameStatus,
}

impl Game {
    /// Start a game on an empty board of `config.board_size`
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        Self::from_board(board, config)
    }

    /// Start a game with default settings on an empty `size` x `size` board
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        Self::new(GameConfig::with_size(size))
    }

    /// Start a game from an existing position
    ///
    /// `reset` returns to this position. The board's own size overrides
    /// `config.board_size`.
    pub fn from_board(board: Board, mut config: GameConfig) -> Result<Self, GameError> {
        config.board_size = board.size();
        config.validate()?;

        let mut game = Self {
            players: Players::new(config.time_budget_secs),
            current: config.first_player,
            starting_board: board.clone(),
            board,
            history: Vec::new(),
            skip_count: 0,
            status: GameStatus::AwaitingMove,
            config,
        };
        game.update_ledgers();
        Ok(game)
    }

    /// Place the current player's stone at `(row, col)`
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;

        let mover = self.current;
        let opponent = mover.opposite();

        let occupant = match self.board.get(row, col) {
            Ok(piece) => piece,
            Err(e) => {
                debug!(row, col, "Rejected move outside the board");
                return Err(e);
            }
        };
        // Only an opponent stone blocks the point. Replaying onto an own stone
        // leaves the stone count unchanged and is rejected as suicide below.
        if occupant == Piece::from(opponent) {
            debug!(row, col, ?mover, "Rejected move onto occupied point");
            return Err(GameError::Occupied { row, col });
        }

        self.history.push(self.board.clone());
        self.board.put(Coord::new(row, col), mover.into());

        let captured = rules::enclosed_positions(&self.board, opponent.into(), mover.into());
        for &coord in &captured {
            self.board.put(coord, Piece::Empty);
        }

        if self.is_ko() {
            self.rollback();
            debug!(row, col, ?mover, "Ko violation");
            return Err(GameError::KoViolation);
        }

        for coord in rules::enclosed_positions(&self.board, mover.into(), opponent.into()) {
            self.board.put(coord, Piece::Empty);
        }

        if self.board.count(mover.into()) <= self.players.get(mover).stones() {
            self.rollback();
            debug!(row, col, ?mover, "Suicide violation");
            return Err(GameError::SuicideViolation);
        }

        self.update_ledgers();
        self.skip_count = 0;
        self.current = opponent;

        debug!(
            row,
            col,
            ?mover,
            captured = captured.len(),
            white_score = self.players.white.score(),
            black_score = self.players.black.score(),
            "Move applied"
        );

        Ok(MoveOutcome {
            board: self.board.clone(),
            players: self.players.clone(),
            captured,
        })
    }

    /// Skip the current player's turn
    ///
    /// Returns the player now to move, or `GameOver` once the skip limit is
    /// reached.
    pub fn pass(&mut self) -> Result<Color, GameError> {
        self.ensure_in_progress()?;

        self.skip_count += 1;
        debug!(player = ?self.current, skip_count = self.skip_count, "Pass");

        if self.skip_count >= self.config.skip_limit {
            return Err(self.finish(GameOverReason::ConsecutivePasses));
        }

        self.current = self.current.opposite();
        Ok(self.current)
    }

    /// Advance the current player's clock by one interval
    pub fn tick(&mut self) -> Result<Players, GameError> {
        self.ensure_in_progress()?;

        let current = self.current;
        let player = self.players.get_mut(current);
        player.deduct_time(self.config.tick_secs);

        if !player.has_time_left() {
            return Err(self.finish(GameOverReason::TimeExpired(current)));
        }

        Ok(self.players.clone())
    }

    /// Restore the starting position, clear history and refill both clocks
    pub fn reset(&mut self) -> Snapshot {
        self.board = self.starting_board.clone();
        self.history.clear();
        self.players.white.reset(self.config.time_budget_secs);
        self.players.black.reset(self.config.time_budget_secs);
        self.current = self.config.first_player;
        self.skip_count = 0;
        self.status = GameStatus::AwaitingMove;
        self.update_ledgers();

        info!(size = self.board.size(), "Game reset");
        self.snapshot()
    }

    /// The winner of a finished game
    pub fn winner(&self) -> Result<&Player, GameError> {
        match self.status {
            GameStatus::GameOver(_) => Ok(self.leading_player()),
            GameStatus::AwaitingMove => Err(GameError::GameInProgress),
        }
    }

    /// The player currently ahead on score; ties go to White
    pub fn leading_player(&self) -> &Player {
        self.players.leader()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            players: self.players.clone(),
            current_player: self.current,
            status: self.status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn current_player(&self) -> Color {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Boards as they stood before each committed placement, oldest first
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::AwaitingMove => Ok(()),
            GameStatus::GameOver(reason) => Err(GameError::GameOver(reason)),
        }
    }

    /// The position two plies back is the last history entry before the one
    /// pushed for the move being tried.
    fn is_ko(&self) -> bool {
        let len = self.history.len();
        len >= 2 && self.history[len - 2] == self.board
    }

    fn rollback(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.board = previous;
        }
    }

    fn update_ledgers(&mut self) {
        for color in [Color::White, Color::Black] {
            let stones = self.board.count(color.into());
            let score = rules::score(&self.board, color);
            let player = self.players.get_mut(color);
            player.set_stones(stones);
            player.set_score(score);
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> GameError {
        self.status = GameStatus::GameOver(reason);
        let leader = self.players.leader();
        info!(
            %reason,
            winner = leader.name(),
            score = leader.score(),
            "Game over"
        );
        GameError::GameOver(reason)
    }
}
