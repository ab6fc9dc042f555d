//! The playing field: a square grid of marks with win detection and move
//! enumeration. The board is also the state the search mutates while probing
//! the game tree, so placement and removal are designed as exact inverses.

use std::fmt::{self, Write};

use anyhow::{bail, Context};
use itertools::iproduct;
use strum::IntoEnumIterator;

use crate::caro::core::{Cell, Direction, Move, Player};

/// Square playing field of [`Cell`]s stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board on which `win_length`
    /// consecutive marks of one player win.
    ///
    /// # Errors
    ///
    /// Both numbers must be positive and a winning run must fit on the board.
    pub fn new(size: usize, win_length: usize) -> anyhow::Result<Self> {
        if size == 0 {
            bail!("board size should be positive, got {size}");
        }
        if win_length == 0 || win_length > size {
            bail!("win length should be within 1..={size}, got {win_length}");
        }
        Ok(Self {
            size,
            win_length,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Restores a position from a newline-separated square grid of `.`, `X`
    /// and `O` symbols, e.g. `"XO.\n.X.\n..O"`.
    ///
    /// # Errors
    ///
    /// The layout must be square, use only the three cell symbols and fit a
    /// run of `win_length`.
    pub fn from_layout(layout: &str, win_length: usize) -> anyhow::Result<Self> {
        let lines: Vec<&str> = layout.lines().collect();
        let mut board = Self::new(lines.len(), win_length)?;
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != board.size {
                bail!(
                    "layout should be square: row {row} has {width} symbols, expected {}",
                    board.size
                );
            }
            for (col, symbol) in line.chars().enumerate() {
                board.cells[row * board.size + col] = Cell::try_from(symbol)
                    .with_context(|| format!("bad symbol at ({row}, {col})"))?;
            }
        }
        Ok(board)
    }

    /// Board width (and height) in cells.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of consecutive same-player marks needed to win.
    #[must_use]
    pub const fn win_length(&self) -> usize {
        self.win_length
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    #[must_use]
    pub const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Returns the state of the cell at `(row, col)`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        debug_assert!(self.in_bounds(row, col));
        self.cells[row * self.size + col]
    }

    /// Puts `player`'s mark on the board. An occupied cell is left untouched:
    /// callers that care about legality must check the cell first.
    pub fn place_move(&mut self, mv: Move, player: Player) {
        debug_assert!(self.in_bounds(mv.row, mv.col));
        let index = mv.row * self.size + mv.col;
        if self.cells[index] == Cell::Empty {
            self.cells[index] = player.cell();
        }
    }

    /// Clears the cell at `mv` unconditionally. This undoes speculative
    /// placements during search.
    pub fn remove_move(&mut self, mv: Move) {
        debug_assert!(self.in_bounds(mv.row, mv.col));
        self.cells[mv.row * self.size + mv.col] = Cell::Empty;
    }

    /// Scans the whole board in row-major order and returns the owner of the
    /// first winning run found, if any. Every occupied cell is treated as a
    /// run origin and walked along the four forward [`Direction`]s.
    #[must_use]
    pub fn check_winner(&self) -> Option<Player> {
        for (row, col) in iproduct!(0..self.size, 0..self.size) {
            let Some(player) = self.cell(row, col).player() else {
                continue;
            };
            let origin = Move::new(row, col);
            if Direction::iter().any(|direction| self.wins_along(origin, direction, player)) {
                return Some(player);
            }
        }
        None
    }

    fn wins_along(&self, origin: Move, direction: Direction, player: Player) -> bool {
        let mut count = 1;
        let mut cursor = origin;
        while count < self.win_length {
            match cursor.shift(direction, self.size) {
                Some(next) if self.cell(next.row, next.col) == player.cell() => {
                    count += 1;
                    cursor = next;
                },
                _ => return false,
            }
        }
        true
    }

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// True iff the game ended with a win or a draw.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.check_winner().is_some() || self.is_full()
    }

    /// Enumerates all empty cells in row-major order. The order is part of
    /// the contract: on equal scores the search keeps the earliest candidate.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        iproduct!(0..self.size, 0..self.size)
            .filter(|&(row, col)| self.cell(row, col) == Cell::Empty)
            .map(|(row, col)| Move::new(row, col))
            .collect()
    }

    /// Number of `player`'s marks currently on the board.
    #[must_use]
    pub fn mark_count(&self, player: Player) -> usize {
        let mark = player.cell();
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                f.write_char(self.cell(row, col).char())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
