// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use goban_core::{Board, Color, Coord, Piece, Players, Snapshot};

/// Render the board with column letters and 1-based row numbers
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut output = String::new();

    let labels: String = (0..size)
        .map(|col| format!(" {}", coord_to_column_char(col)))
        .collect();

    output.push_str("   ");
    output.push_str(&labels);
    output.push('\n');

    for (row, cells) in board.rows().iter().enumerate() {
        output.push_str(&format!("{:2} ", row + 1));

        for (col, cell) in cells.iter().enumerate() {
            let symbol = match cell {
                Piece::Black => "●",
                Piece::White => "○",
                Piece::Empty if is_star_point(Coord::new(row, col), size) => "+",
                Piece::Empty => "·",
            };
            output.push_str(&format!(" {}", symbol));
        }

        output.push_str(&format!(" {}", row + 1));
        output.push('\n');
    }

    output.push_str("   ");
    output.push_str(&labels);
    output.push('\n');

    output
}

/// One line per player: score, stones on the board and clock
pub fn render_scoreboard(players: &Players, to_move: Color) -> String {
    players
        .iter()
        .map(|player| {
            let marker = if player.color() == to_move { '>' } else { ' ' };
            format!(
                "{} {:<5} score {:>3}  stones {:>3}  time {:>4}s\n",
                marker,
                player.name(),
                player.score(),
                player.stones(),
                player.display_time()
            )
        })
        .collect()
}

/// Board plus scoreboard
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    format!(
        "{}\n{}",
        render_board(&snapshot.board),
        render_scoreboard(&snapshot.players, snapshot.current_player)
    )
}

/// Convert a column index to a column character (A-Z, skipping I)
pub fn coord_to_column_char(col: usize) -> char {
    let offset = if col < 8 { col } else { col + 1 };
    (b'A' + offset.min(25) as u8) as char
}

/// Check if a coordinate is a star point on the board
fn is_star_point(coord: Coord, board_size: usize) -> bool {
    let (r, c) = (coord.row, coord.col);

    match board_size {
        7 => matches!((r, c), (2, 2) | (2, 4) | (3, 3) | (4, 2) | (4, 4)),
        9 => matches!((r, c), (2, 2) | (2, 6) | (4, 4) | (6, 2) | (6, 6)),
        13 => matches!((r, c), (3, 3) | (3, 9) | (6, 6) | (9, 3) | (9, 9)),
        19 => [3, 9, 15].contains(&r) && [3, 9, 15].contains(&c),
        _ => false,
    }
}
