// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drives one engine instance from parsed commands and clock ticks

use crate::command::{Command, HELP};
use crate::render;
use anyhow::Result;
use goban_core::{Game, GameError, GameStatus};

/// What the game loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print this text and keep reading input
    Continue(String),
    Quit,
}

/// A terminal session around a single [`Game`]
pub struct Session {
    game: Game,
    json: bool,
}

impl Session {
    pub fn new(game: Game, json: bool) -> Self {
        Self { game, json }
    }

    pub fn handle(&mut self, command: Command) -> Result<Step> {
        let text = match command {
            Command::Place { row, col } => match self.game.apply_move(row, col) {
                Ok(outcome) => {
                    let mut text = self.render()?;
                    if !outcome.captured.is_empty() {
                        text.push_str(&format!("Captured {} stone(s)\n", outcome.captured.len()));
                    }
                    text
                }
                Err(GameError::GameOver(_)) => self.game_over_text(),
                Err(e) => format!("Illegal move: {e}. Try again.\n"),
            },
            Command::Pass => {
                let passer = self.game.current_player();
                match self.game.pass() {
                    Ok(next) => format!("{passer} passes. {next} to move.\n"),
                    Err(_) => self.game_over_text(),
                }
            }
            Command::Reset => {
                self.game.reset();
                self.render()?
            }
            Command::Show => self.render()?,
            Command::Help => format!("{HELP}\n"),
            Command::Quit => return Ok(Step::Quit),
        };

        Ok(Step::Continue(text))
    }

    /// Advance the clock; returns text to print when the game just ended
    pub fn tick(&mut self) -> Option<String> {
        if self.game.is_over() {
            return None;
        }

        match self.game.tick() {
            Ok(_) => None,
            Err(_) => Some(self.game_over_text()),
        }
    }

    pub fn render(&self) -> Result<String> {
        let snapshot = self.game.snapshot();
        if self.json {
            return Ok(format!("{}\n", serde_json::to_string(&snapshot)?));
        }

        let mut text = render::render_snapshot(&snapshot);
        if !self.game.is_over() {
            text.push_str(&format!("{} to move\n", snapshot.current_player));
        }
        Ok(text)
    }

    fn game_over_text(&self) -> String {
        match (self.game.status(), self.game.winner()) {
            (GameStatus::GameOver(reason), Ok(winner)) => format!(
                "Game over: {reason}. {} wins with {} points. Type 'reset' or 'quit'.\n",
                winner.name(),
                winner.score()
            ),
            _ => "Game over.\n".to_string(),
        }
    }
}
