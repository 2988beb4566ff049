// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation
//!
//! The grid is stored as one flat row-major vector, so `Clone` is a single
//! block copy that never shares cells with the original, and `==` compares
//! cell by cell. The rules engine relies on both when it snapshots positions
//! for ko detection and rollback.

use crate::{Coord, GameError, Piece};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported board; one column per letter from A to Z without I
pub const MAX_BOARD_SIZE: usize = 25;

/// Represents a square Go board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Piece>>", into = "Vec<Vec<Piece>>")]
pub struct Board {
    /// Number of rows (and columns)
    size: usize,
    /// Cells in row-major order
    cells: Vec<Piece>,
}

impl Board {
    /// Create an empty board of `size` x `size` cells
    pub fn new(size: usize) -> Result<Self, GameError> {
        let cells = Self::cell_count(size)?;

        Ok(Self {
            size,
            cells: vec![Piece::Empty; cells],
        })
    }

    /// Build a board from explicit rows, which must form a non-empty square
    pub fn from_rows(rows: Vec<Vec<Piece>>) -> Result<Self, GameError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(Self::cell_count(size)?);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GameError::InvalidBoard(format!(
                    "row {index} has {} cells, expected {size}",
                    row.len()
                )));
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Number of cells on a `size` x `size` board, if that size is supported
    fn cell_count(size: usize) -> Result<usize, GameError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidSize(size));
        }
        size.checked_mul(size).ok_or(GameError::InvalidSize(size))
    }

    /// Get the size of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` lies on the board
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get the piece at the specified position
    pub fn get(&self, row: usize, col: usize) -> Result<Piece, GameError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(Coord::new(row, col))])
    }

    /// Overwrite the piece at the specified position
    pub fn set(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), GameError> {
        self.check_bounds(row, col)?;
        self.put(Coord::new(row, col), piece);
        Ok(())
    }

    /// Coordinates of every cell holding `piece`, in row-major order
    pub fn positions(&self, piece: Piece) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == piece)
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    /// Count cells holding `piece`
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|cell| **cell == piece).count()
    }

    /// Get adjacent coordinates (up, down, left, right) that lie on the board
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        let mut result = Vec::with_capacity(4);
        let Coord { row, col } = coord;

        if row > 0 {
            result.push(Coord::new(row - 1, col));
        }
        if row + 1 < self.size {
            result.push(Coord::new(row + 1, col));
        }
        if col > 0 {
            result.push(Coord::new(row, col - 1));
        }
        if col + 1 < self.size {
            result.push(Coord::new(row, col + 1));
        }

        result
    }

    /// Copy the grid out as nested rows
    pub fn rows(&self) -> Vec<Vec<Piece>> {
        self.cells.chunks(self.size).map(<[Piece]>::to_vec).collect()
    }

    /// Whether no stone of either color is on the board
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| *cell == Piece::Empty)
    }

    /// Read a cell the caller already knows to be on the board
    pub(crate) fn at(&self, coord: Coord) -> Piece {
        self.cells[self.index(coord)]
    }

    /// Write a cell the caller already knows to be on the board
    pub(crate) fn put(&mut self, coord: Coord, piece: Piece) {
        let idx = self.index(coord);
        self.cells[idx] = piece;
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GameError> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }
}

impl TryFrom<Vec<Vec<Piece>>> for Board {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<Piece>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Piece>> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Piece::Empty => ".",
                    Piece::White => "O",
                    Piece::Black => "X",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
