//! Caro primitives commonly used within [`crate::caro`].

use std::fmt::{self, Write};

use anyhow::bail;

/// A side in the game. By convention the human plays `X` and moves first,
/// the engine plays `O`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the player moving after this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Returns the cell state this player's mark leaves behind.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Self::X => Cell::X,
            Self::O => Cell::O,
        }
    }
}

impl TryFrom<char> for Player {
    type Error = anyhow::Error;

    fn try_from(mark: char) -> anyhow::Result<Self> {
        match mark {
            'X' => Ok(Self::X),
            'O' => Ok(Self::O),
            _ => bail!("player mark should be 'X' or 'O', got '{mark}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.cell().char())
    }
}

/// State of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Returns the owner of the mark in this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::X => Some(Player::X),
            Self::O => Some(Player::O),
        }
    }

    pub(super) const fn char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol {
            '.' => Ok(Self::Empty),
            'X' => Ok(Self::X),
            'O' => Ok(Self::O),
            _ => bail!("cell symbol should be one of '.', 'X', 'O', got '{symbol}'"),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.char())
    }
}

/// Coordinates of a single cell: `(0, 0)` is the top-left corner, `row` grows
/// downwards and `col` to the right. Placing a mark on a cell is the only way
/// to mutate a board, so the coordinate pair doubles as the move
/// representation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// Vertical offset from the top.
    pub row: usize,
    /// Horizontal offset from the left.
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps one cell along `direction` if that stays on a `size`-wide board.
    #[must_use]
    pub(super) fn shift(self, direction: Direction, size: usize) -> Option<Self> {
        let (delta_row, delta_col) = direction.delta();
        let row = self.row.checked_add_signed(delta_row)?;
        let col = self.col.checked_add_signed(delta_col)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four forward directions of the win scan. Every maximal run of marks is
/// seen from its first cell in one of these, so the backward counterparts
/// never need checking.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::EnumIter)]
#[allow(missing_docs)]
pub enum Direction {
    Down,
    Right,
    DownRight,
    DownLeft,
}

impl Direction {
    /// Row and column offsets of a single step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Down => (1, 0),
            Self::Right => (0, 1),
            Self::DownRight => (1, 1),
            Self::DownLeft => (1, -1),
        }
    }
}
