// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of typed player commands

use anyhow::{anyhow, Result};

/// A single line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a stone at zero-based `(row, col)`
    Place { row: usize, col: usize },
    Pass,
    Reset,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  D4        place a stone by column letter and row number (as labelled)
  3 2       place a stone by zero-based row and column
  pass      skip your turn (two passes in a row end the game)
  reset     start over
  show      redraw the board
  quit      leave";

/// Parse a command. Coordinates are not range-checked here; the engine
/// reports positions off the board.
pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "pass" | "skip" => return Ok(Command::Pass),
        "reset" | "restart" | "new" => return Ok(Command::Reset),
        "show" | "board" | "" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if let [row, col] = parts.as_slice() {
        let row = row.parse().map_err(|_| anyhow!("Invalid row '{}'", row))?;
        let col = col.parse().map_err(|_| anyhow!("Invalid column '{}'", col))?;
        return Ok(Command::Place { row, col });
    }

    parse_labelled(&input)
}

/// Parse a coordinate like "D4" (column A-Z skipping I, row from 1)
fn parse_labelled(input: &str) -> Result<Command> {
    let mut chars = input.chars();
    let col_char = chars
        .next()
        .ok_or_else(|| anyhow!("Empty command"))?;

    let col = match col_char {
        'a'..='h' => col_char as usize - 'a' as usize,
        'j'..='z' => col_char as usize - 'a' as usize - 1,
        _ => {
            return Err(anyhow!(
                "Invalid move format. Examples: 'D4', '3 2', 'pass'."
            ))
        }
    };

    let row = match chars.as_str().parse::<usize>() {
        Ok(r) if r > 0 => r - 1,
        _ => return Err(anyhow!("Invalid row. Rows are numbered from 1.")),
    };

    Ok(Command::Place { row, col })
}
