// SPDX-License-Identifier: MIT OR Apache-2.0

//! Group detection, captures and territory
//!
//! Both captures and territory come from the same scan: grow every connected
//! group of a *target* piece and collect the cells around it. A group is
//! enclosed when every one of those cells holds the *boundary* piece.
//! Dead stones are opponent groups enclosed by the mover; territory is an
//! empty region enclosed by one player's stones.

use crate::{board::Board, Color, Coord, Piece};
use std::collections::HashSet;

/// A maximal 4-connected set of cells holding the same piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Member cells, in discovery order
    pub stones: Vec<Coord>,
    /// Cells next to the group that hold a different piece
    pub adjacent: HashSet<Coord>,
}

impl Group {
    /// Number of cells in the group
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// Whether the group has no cells
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Whether every adjacent cell holds `boundary`
    pub fn is_enclosed_by(&self, board: &Board, boundary: Piece) -> bool {
        self.adjacent.iter().all(|&c| board.at(c) == boundary)
    }

}

/// Find every connected group of `target` on the board
pub fn groups(board: &Board, target: Piece) -> Vec<Group> {
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut found = Vec::new();

    for start in board.positions(target) {
        if visited[start.row * size + start.col] {
            continue;
        }
        visited[start.row * size + start.col] = true;

        let mut stones = vec![start];
        let mut adjacent = HashSet::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            for neighbor in board.neighbors(current) {
                if board.at(neighbor) == target {
                    let i = neighbor.row * size + neighbor.col;
                    if !visited[i] {
                        visited[i] = true;
                        stones.push(neighbor);
                        stack.push(neighbor);
                    }
                } else {
                    adjacent.insert(neighbor);
                }
            }
        }

        found.push(Group { stones, adjacent });
    }

    found
}

/// Groups of `target` whose every adjacent cell holds `boundary`
///
/// A group with no adjacent cells at all (it fills the whole board) counts as
/// enclosed.
pub fn enclosed_groups(board: &Board, target: Piece, boundary: Piece) -> Vec<Group> {
    groups(board, target)
        .into_iter()
        .filter(|group| group.is_enclosed_by(board, boundary))
        .collect()
}

/// Union of all cells in groups of `target` enclosed by `boundary`
pub fn enclosed_positions(board: &Board, target: Piece, boundary: Piece) -> Vec<Coord> {
    enclosed_groups(board, target, boundary)
        .into_iter()
        .flat_map(|group| group.stones)
        .collect()
}

/// Empty cells surrounded only by `player`'s stones
///
/// An empty region that touches no stone at all belongs to nobody.
pub fn captured_territory(board: &Board, player: Color) -> usize {
    enclosed_groups(board, Piece::Empty, player.into())
        .iter()
        .filter(|region| !region.adjacent.is_empty())
        .map(Group::len)
        .sum()
}

/// Territory plus live stones for `player`
pub fn score(board: &Board, player: Color) -> usize {
    captured_territory(board, player) + board.count(player.into())
}
