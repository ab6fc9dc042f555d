//! [A* search] between the map's markers. The open set is a binary heap of
//! `(f, g, position)` triples behind [`Reverse`], so the smallest estimated
//! total cost pops first and ties fall back to the smaller path cost and then
//! to row-major position order. Stale heap entries are not removed when a
//! cheaper route is found; they pop later and are skipped through the closed
//! set.
//!
//! [A* search]: https://en.wikipedia.org/wiki/A*_search_algorithm

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::pathfind::map::GridMap;
use crate::pathfind::Pos;

/// Outcome of one pathfinding run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSearch {
    /// Cells of the found path from start to goal inclusive, empty when the
    /// goal is unreachable.
    pub path: Vec<Pos>,
    /// Every cell the search expanded. On an unreachable goal this covers
    /// the whole region walkable from the start.
    pub visited: HashSet<Pos>,
}

impl PathSearch {
    /// Number of steps along the found path, 0 when there is none.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Searches for a shortest path from the start marker to the goal marker,
/// moving between orthogonally adjacent walkable cells at cost 1 per step.
#[must_use]
pub fn find_path(map: &GridMap) -> PathSearch {
    let start = map.start();
    let goal = map.goal();
    let mut open = BinaryHeap::new();
    open.push(Reverse((start.manhattan(goal), 0, start)));
    let mut came_from: HashMap<Pos, Pos> = HashMap::new();
    let mut best_g = HashMap::from([(start, 0)]);
    let mut visited = HashSet::new();
    while let Some(Reverse((_, g, current))) = open.pop() {
        if !visited.insert(current) {
            continue;
        }
        if current == goal {
            return PathSearch {
                path: reconstruct(&came_from, start, goal),
                visited,
            };
        }
        for next in map.neighbors_4(current) {
            let tentative = g + 1;
            if best_g.get(&next).map_or(true, |&known| tentative < known) {
                let _ = best_g.insert(next, tentative);
                let _ = came_from.insert(next, current);
                open.push(Reverse((tentative + next.manhattan(goal), tentative, next)));
            }
        }
    }
    PathSearch {
        path: Vec::new(),
        visited,
    }
}

fn reconstruct(came_from: &HashMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn straight_line_is_found_exactly() {
        let map = GridMap::parse("S..G").unwrap();
        let search = find_path(&map);
        assert_eq!(
            search.path,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(0, 3),
            ]
        );
        assert_eq!(search.steps(), 3);
    }

    #[test]
    fn walls_force_a_detour() {
        let map = GridMap::parse("S#G\n...").unwrap();
        let search = find_path(&map);
        assert_eq!(search.steps(), 4);
        assert_eq!(search.path.first(), Some(&map.start()));
        assert_eq!(search.path.last(), Some(&map.goal()));
        for pair in search.path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }

    #[test]
    fn unreachable_goal_floods_the_start_region() {
        let map = GridMap::parse("S.#G\n..##").unwrap();
        let search = find_path(&map);
        assert_eq!(search.path, vec![]);
        assert_eq!(search.steps(), 0);
        let reachable: HashSet<Pos> = [
            Pos::new(0, 0),
            Pos::new(0, 1),
            Pos::new(1, 0),
            Pos::new(1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(search.visited, reachable);
    }

    #[test]
    fn preset_school_needs_an_edit_to_connect() {
        // The bundled map keeps the goal sealed away from the gate until the
        // user knocks out a wall.
        let mut map = GridMap::preset_school();
        let search = find_path(&map);
        assert_eq!(search.path, vec![]);
        assert_eq!(search.visited.len(), 44);
        assert!(search.visited.contains(&map.start()));
        assert!(!search.visited.contains(&map.goal()));

        map.toggle_wall(Pos::new(2, 11)).unwrap();
        let search = find_path(&map);
        assert_eq!(search.steps(), 33);
        assert_eq!(search.path.first(), Some(&map.start()));
        assert_eq!(search.path.last(), Some(&map.goal()));
        assert_eq!(search.visited.len(), 83);
    }
}
