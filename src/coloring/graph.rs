//! Undirected graph of regions. Adjacency is stored as a sorted neighbor set
//! per vertex and kept symmetric: every edge insertion writes both
//! directions.

use std::collections::BTreeSet;

use anyhow::bail;
use itertools::Itertools;
use rand::Rng;

use crate::coloring::{vertex_name, Color};

/// Probability of drawing an edge between each vertex pair during random
/// generation.
const EDGE_PROBABILITY: f64 = 0.35;

/// Undirected graph on vertices `0..order` with an optional color per
/// vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<BTreeSet<usize>>,
    colors: Vec<Option<Color>>,
}

impl Graph {
    /// Creates an edgeless graph on `order` vertices, all uncolored.
    #[must_use]
    pub fn new(order: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); order],
            colors: vec![None; order],
        }
    }

    /// Generates a random graph on `order` vertices: each vertex pair gets an
    /// edge with probability 0.35, then every vertex still isolated is wired
    /// to a random other vertex. The result has no degree-0 vertices.
    ///
    /// # Errors
    ///
    /// `order` must be at least 2 for the degree guarantee to be satisfiable.
    pub fn random(order: usize, rng: &mut impl Rng) -> anyhow::Result<Self> {
        if order < 2 {
            bail!("random graph order should be at least 2, got {order}");
        }
        let mut graph = Self::new(order);
        for u in 0..order {
            for v in u + 1..order {
                if rng.gen_bool(EDGE_PROBABILITY) {
                    graph.link(u, v);
                }
            }
        }
        for u in 0..order {
            if graph.degree(u) == 0 {
                let mut v = rng.gen_range(0..order);
                if v == u {
                    v = (v + 1) % order;
                }
                graph.link(u, v);
            }
        }
        Ok(graph)
    }

    /// Adds the undirected edge `(u, v)`.
    ///
    /// # Errors
    ///
    /// Both endpoints must be distinct vertices of the graph.
    pub fn add_edge(&mut self, u: usize, v: usize) -> anyhow::Result<()> {
        let order = self.order();
        if u >= order || v >= order {
            bail!("edge ({u}, {v}) should connect vertices within 0..{order}");
        }
        if u == v {
            bail!("vertex {u} cannot be adjacent to itself");
        }
        self.link(u, v);
        Ok(())
    }

    fn link(&mut self, u: usize, v: usize) {
        let _ = self.adjacency[u].insert(v);
        let _ = self.adjacency[v].insert(u);
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of neighbors of `v`.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Neighbors of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[v].iter().copied()
    }

    #[must_use]
    pub fn are_adjacent(&self, u: usize, v: usize) -> bool {
        self.adjacency[u].contains(&v)
    }

    /// Color of `v`, `None` while uncolored.
    #[must_use]
    pub fn color(&self, v: usize) -> Option<Color> {
        self.colors[v]
    }

    /// Colors of all vertices, indexed by vertex.
    #[must_use]
    pub fn colors(&self) -> &[Option<Color>] {
        &self.colors
    }

    /// Returns every vertex to the uncolored state.
    pub fn clear_colors(&mut self) {
        self.colors.fill(None);
    }

    pub(super) fn write_color(&mut self, v: usize, color: Color) {
        self.colors[v] = Some(color);
    }

    /// Changes the color of a single vertex, keeping the coloring proper.
    ///
    /// # Errors
    ///
    /// `v` must be a vertex and no neighbor may already hold `color`. On
    /// error the graph is left unchanged.
    pub fn recolor(&mut self, v: usize, color: Color) -> anyhow::Result<()> {
        let order = self.order();
        if v >= order {
            bail!("vertex {v} should be within 0..{order}");
        }
        if let Some(conflict) = self.neighbors(v).find(|&u| self.colors[u] == Some(color)) {
            bail!(
                "region {} cannot take color {color}: adjacent region {} already uses it",
                vertex_name(v),
                vertex_name(conflict)
            );
        }
        self.colors[v] = Some(color);
        Ok(())
    }

    /// Number of distinct colors currently assigned.
    #[must_use]
    pub fn colors_used(&self) -> usize {
        self.colors.iter().flatten().unique().count()
    }

    /// True iff no edge connects two vertices of the same color. Uncolored
    /// vertices never conflict.
    #[must_use]
    pub fn is_proper_coloring(&self) -> bool {
        (0..self.order()).all(|u| {
            self.colors[u].is_none() || self.neighbors(u).all(|v| self.colors[v] != self.colors[u])
        })
    }
}
