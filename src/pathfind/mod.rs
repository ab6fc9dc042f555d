//! Grid pathfinding: a rectangular tile map with start and goal markers and
//! an A* solver over its walkable cells.

use std::fmt;

pub mod astar;
pub mod map;

/// Coordinates of a map cell, row first. The derived ordering compares rows
/// before columns, which makes ties in priority queues deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    #[allow(missing_docs)]
    pub row: usize,
    #[allow(missing_docs)]
    pub col: usize,
}

impl Pos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// [Taxicab distance] to `other`: the exact cost of walking there on an
    /// unobstructed grid without diagonal steps.
    ///
    /// [Taxicab distance]: https://en.wikipedia.org/wiki/Taxicab_geometry
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(Pos::new(0, 0).manhattan(Pos::new(0, 0)), 0);
        assert_eq!(Pos::new(0, 0).manhattan(Pos::new(2, 3)), 5);
        assert_eq!(Pos::new(2, 3).manhattan(Pos::new(0, 0)), 5);
        assert_eq!(Pos::new(5, 1).manhattan(Pos::new(3, 4)), 5);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Pos::new(0, 9) < Pos::new(1, 0));
        assert!(Pos::new(1, 2) < Pos::new(1, 3));
        assert_eq!(Pos::new(4, 4), Pos::new(4, 4));
    }
}
