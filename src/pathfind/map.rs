//! Tile map parsing and editing. A map is built from a text layout once and
//! then edited through checked operations that keep exactly one start and one
//! goal marker on walkable cells at all times.

use std::fmt::{self, Write};

use anyhow::{bail, Context};
use arrayvec::ArrayVec;

use crate::pathfind::Pos;

/// Hand-drawn floor plan the interactive shell starts with.
const SCHOOL_LAYOUT: &str = "\
########################
#S..#......#..........#
#..##.####.#.#####.##.#
#......#...#.....#....#
###.##.#.#######.#.####
#...#..#.....#...#....#
#.###.#####.#.###..##.#
#.....#...#.#...#..#G.#
########################";

/// A single map cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Tile {
    Wall,
    Open,
    Start,
    Goal,
}

impl Tile {
    /// True iff the cell cannot be entered.
    #[must_use]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    const fn char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol {
            '#' => Ok(Self::Wall),
            '.' => Ok(Self::Open),
            'S' => Ok(Self::Start),
            'G' => Ok(Self::Goal),
            _ => bail!("map symbol should be one of '#', '.', 'S', 'G', got '{symbol}'"),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.char())
    }
}

/// Rectangular tile map with exactly one start and one goal marker. The
/// constructor validates that invariant and every mutating operation
/// preserves it by rejecting edits that would break it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
    start: Pos,
    goal: Pos,
}

impl GridMap {
    /// Parses a newline-separated layout of `#`, `.`, `S` and `G` symbols.
    /// Short rows are padded to the longest row with open cells; rows walled
    /// on both ends keep their closing wall and grow on the inside instead.
    ///
    /// # Errors
    ///
    /// The layout must be non-empty, use only map symbols and contain
    /// exactly one `S` and one `G`.
    pub fn parse(layout: &str) -> anyhow::Result<Self> {
        let lines: Vec<&str> = layout.lines().collect();
        if lines.is_empty() {
            bail!("map layout should not be empty");
        }
        let normalized = normalize(&lines);
        let rows = normalized.len();
        let cols = normalized[0].chars().count();
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in normalized.iter().enumerate() {
            debug_assert_eq!(line.chars().count(), cols);
            for (col, symbol) in line.chars().enumerate() {
                cells.push(
                    Tile::try_from(symbol)
                        .with_context(|| format!("bad symbol at ({row}, {col})"))?,
                );
            }
        }
        let start = find_marker(&cells, cols, Tile::Start)?;
        let goal = find_marker(&cells, cols, Tile::Goal)?;
        Ok(Self {
            rows,
            cols,
            cells,
            start,
            goal,
        })
    }

    /// The bundled floor plan with the start in the top-left room and the
    /// goal tucked behind the walls in the bottom-right one.
    #[must_use]
    pub fn preset_school() -> Self {
        Self::parse(SCHOOL_LAYOUT).expect("bundled school layout should be valid")
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Position of the `S` marker.
    #[must_use]
    pub const fn start(&self) -> Pos {
        self.start
    }

    /// Position of the `G` marker.
    #[must_use]
    pub const fn goal(&self) -> Pos {
        self.goal
    }

    #[must_use]
    pub const fn in_bounds(&self, position: Pos) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Returns the tile at `position`.
    #[must_use]
    pub fn tile(&self, position: Pos) -> Tile {
        debug_assert!(self.in_bounds(position));
        self.cells[position.row * self.cols + position.col]
    }

    /// True iff `position` is on the map and not a wall.
    #[must_use]
    pub fn passable(&self, position: Pos) -> bool {
        self.in_bounds(position) && !self.tile(position).is_wall()
    }

    /// Turns an open cell into a wall or a wall back into an open cell.
    ///
    /// # Errors
    ///
    /// The cell must be on the map and hold neither marker.
    pub fn toggle_wall(&mut self, position: Pos) -> anyhow::Result<()> {
        if !self.in_bounds(position) {
            bail!(
                "cell {position} should be within the {}x{} map",
                self.rows,
                self.cols
            );
        }
        match self.tile(position) {
            Tile::Wall => self.set(position, Tile::Open),
            Tile::Open => self.set(position, Tile::Wall),
            Tile::Start | Tile::Goal => {
                bail!("cell {position} holds the start or goal marker and cannot be walled over")
            },
        }
        Ok(())
    }

    /// Relocates the `S` marker to `position` and opens up its old cell.
    ///
    /// # Errors
    ///
    /// The target must be an on-map walkable cell other than the goal.
    pub fn move_start(&mut self, position: Pos) -> anyhow::Result<()> {
        self.check_marker_target(position, self.goal, "start")?;
        self.set(self.start, Tile::Open);
        self.set(position, Tile::Start);
        self.start = position;
        Ok(())
    }

    /// Relocates the `G` marker to `position` and opens up its old cell.
    ///
    /// # Errors
    ///
    /// The target must be an on-map walkable cell other than the start.
    pub fn move_goal(&mut self, position: Pos) -> anyhow::Result<()> {
        self.check_marker_target(position, self.start, "goal")?;
        self.set(self.goal, Tile::Open);
        self.set(position, Tile::Goal);
        self.goal = position;
        Ok(())
    }

    fn check_marker_target(&self, position: Pos, other: Pos, marker: &str) -> anyhow::Result<()> {
        if !self.in_bounds(position) {
            bail!(
                "cell {position} should be within the {}x{} map",
                self.rows,
                self.cols
            );
        }
        if self.tile(position).is_wall() {
            bail!("{marker} should go on a walkable cell, and {position} is a wall");
        }
        if position == other {
            bail!("{marker} cannot displace the other marker at {position}");
        }
        Ok(())
    }

    fn set(&mut self, position: Pos, tile: Tile) {
        self.cells[position.row * self.cols + position.col] = tile;
    }

    /// Walkable orthogonal neighbors of `position`, in up, down, left, right
    /// order.
    #[must_use]
    pub fn neighbors_4(&self, position: Pos) -> ArrayVec<Pos, 4> {
        let up = position
            .row
            .checked_sub(1)
            .map(|row| Pos::new(row, position.col));
        let down = Some(Pos::new(position.row + 1, position.col));
        let left = position
            .col
            .checked_sub(1)
            .map(|col| Pos::new(position.row, col));
        let right = Some(Pos::new(position.row, position.col + 1));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(|&next| self.passable(next))
            .collect()
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                f.write_char(self.tile(Pos::new(row, col)).char())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Pads every row to the width of the widest one. Postcondition: all returned
/// rows have the same character count.
fn normalize(lines: &[&str]) -> Vec<String> {
    let target = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    lines
        .iter()
        .map(|line| {
            let width = line.chars().count();
            if width == target {
                return (*line).to_string();
            }
            let padding = ".".repeat(target - width);
            if width >= 2 && line.starts_with('#') && line.ends_with('#') {
                let interior: String = line.chars().skip(1).take(width - 2).collect();
                format!("#{interior}{padding}#")
            } else {
                format!("{line}{padding}")
            }
        })
        .collect()
}

fn find_marker(cells: &[Tile], cols: usize, marker: Tile) -> anyhow::Result<Pos> {
    let mut found = cells
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile == marker)
        .map(|(index, _)| Pos::new(index / cols, index % cols));
    let Some(position) = found.next() else {
        bail!("map should contain exactly one '{marker}' marker, found none");
    };
    if found.next().is_some() {
        bail!("map should contain exactly one '{marker}' marker, found more");
    }
    Ok(position)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preset_school_is_normalized() {
        let map = GridMap::preset_school();
        assert_eq!(map.rows(), 9);
        assert_eq!(map.cols(), 24);
        assert_eq!(map.start(), Pos::new(1, 1));
        assert_eq!(map.goal(), Pos::new(7, 20));
    }

    #[test]
    fn short_framed_rows_grow_on_the_inside() {
        let map = GridMap::parse("#####\n#S.G#\n###").unwrap();
        assert_eq!(map.cols(), 5);
        assert_eq!(map.tile(Pos::new(2, 1)), Tile::Wall);
        assert_eq!(map.tile(Pos::new(2, 3)), Tile::Open);
        assert_eq!(map.tile(Pos::new(2, 4)), Tile::Wall);
    }

    #[test]
    fn short_open_rows_grow_on_the_right() {
        let map = GridMap::parse("S.\n..G").unwrap();
        assert_eq!(map.cols(), 3);
        assert_eq!(map.tile(Pos::new(0, 2)), Tile::Open);
        assert_eq!(map.to_string(), "S..\n..G\n");
    }

    #[test]
    fn rejects_bad_layouts() {
        assert!(GridMap::parse("").is_err());
        assert!(GridMap::parse("S..").is_err());
        assert!(GridMap::parse("..G").is_err());
        assert!(GridMap::parse("SS\n.G").is_err());
        assert!(GridMap::parse("S.G\n.G.").is_err());
        assert!(GridMap::parse("S?G").is_err());
    }

    #[test]
    fn toggle_wall_round_trips() {
        let mut map = GridMap::parse("S..\n..G").unwrap();
        map.toggle_wall(Pos::new(0, 1)).unwrap();
        assert_eq!(map.tile(Pos::new(0, 1)), Tile::Wall);
        map.toggle_wall(Pos::new(0, 1)).unwrap();
        assert_eq!(map.tile(Pos::new(0, 1)), Tile::Open);
    }

    #[test]
    fn markers_cannot_be_walled_over() {
        let mut map = GridMap::parse("S..\n..G").unwrap();
        assert!(map.toggle_wall(map.start()).is_err());
        assert!(map.toggle_wall(map.goal()).is_err());
        assert!(map.toggle_wall(Pos::new(5, 5)).is_err());
        assert_eq!(map, GridMap::parse("S..\n..G").unwrap());
    }

    #[test]
    fn moving_a_marker_opens_its_old_cell() {
        let mut map = GridMap::parse("S..\n..G").unwrap();
        map.move_start(Pos::new(1, 0)).unwrap();
        assert_eq!(map.start(), Pos::new(1, 0));
        assert_eq!(map.tile(Pos::new(0, 0)), Tile::Open);
        assert_eq!(map.tile(Pos::new(1, 0)), Tile::Start);
    }

    #[test]
    fn marker_targets_are_validated() {
        let mut map = GridMap::parse("S#.\n..G").unwrap();
        assert!(map.move_start(Pos::new(0, 1)).is_err());
        assert!(map.move_start(map.goal()).is_err());
        assert!(map.move_goal(map.start()).is_err());
        assert!(map.move_goal(Pos::new(9, 0)).is_err());
        assert_eq!(map, GridMap::parse("S#.\n..G").unwrap());
    }

    #[test]
    fn neighbors_skip_walls_and_come_in_scan_order() {
        let map = GridMap::preset_school();
        let from_start: Vec<Pos> = map.neighbors_4(map.start()).into_iter().collect();
        assert_eq!(from_start, vec![Pos::new(2, 1), Pos::new(1, 2)]);
        let corner: Vec<Pos> = map.neighbors_4(Pos::new(0, 0)).into_iter().collect();
        assert_eq!(corner, vec![]);
    }
}
