//! Greedy coloring in the spirit of [Welsh-Powell]: colors are handed out
//! one at a time, and each color is given to as many vertices as it can
//! legally cover before the next one is opened. Within a color, the vertex
//! with the most uncolored neighbors goes first, so the busiest parts of the
//! graph are settled early.
//!
//! [Welsh-Powell]: https://en.wikipedia.org/wiki/Greedy_coloring

use std::collections::HashSet;

use crate::coloring::graph::Graph;
use crate::coloring::Color;

/// Colors every vertex of `graph` and returns the assignment indexed by
/// vertex. Existing colors are ignored and overwritten. The result is always
/// a proper coloring and uses at most `max_degree + 1` colors.
pub fn color_graph(graph: &mut Graph) -> Vec<Color> {
    let order = graph.order();
    let mut live_degree: Vec<usize> = (0..order).map(|v| graph.degree(v)).collect();
    let mut forbidden: Vec<HashSet<Color>> = vec![HashSet::new(); order];
    let mut assigned: Vec<Option<Color>> = vec![None; order];
    let mut remaining = order;
    let mut current = Color::FIRST;
    while remaining > 0 {
        while let Some(v) = eligible_vertex(&assigned, &forbidden, &live_degree, current) {
            assigned[v] = Some(current);
            remaining -= 1;
            live_degree[v] = 0;
            for u in graph.neighbors(v) {
                if assigned[u].is_none() {
                    live_degree[u] = live_degree[u].saturating_sub(1);
                    let _ = forbidden[u].insert(current);
                }
            }
        }
        current = current.successor();
    }
    let colors: Vec<Color> = assigned.into_iter().flatten().collect();
    debug_assert_eq!(colors.len(), order);
    for (v, &color) in colors.iter().enumerate() {
        graph.write_color(v, color);
    }
    colors
}

/// Picks the uncolored vertex with the highest live degree among those that
/// may still take `color`. Ties go to the lowest vertex index.
fn eligible_vertex(
    assigned: &[Option<Color>],
    forbidden: &[HashSet<Color>],
    live_degree: &[usize],
    color: Color,
) -> Option<usize> {
    let mut best = None;
    let mut best_degree = 0;
    for (v, slot) in assigned.iter().enumerate() {
        if slot.is_some() || forbidden[v].contains(&color) {
            continue;
        }
        if best.is_none() || live_degree[v] > best_degree {
            best = Some(v);
            best_degree = live_degree[v];
        }
    }
    best
}
