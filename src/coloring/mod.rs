//! Map coloring: an undirected graph of regions with per-vertex colors, a
//! greedy solver and checked single-vertex recoloring.

use std::fmt;
use std::num::NonZeroU32;

use anyhow::bail;

pub mod graph;
pub mod greedy;

/// Display names for the first few colors, in the order the solver hands
/// them out.
pub const PALETTE: [&str; 8] = [
    "red", "blue", "yellow", "green", "purple", "orange", "pink", "cyan",
];

/// A vertex color, numbered from 1. An uncolored vertex is `Option<Color>`
/// rather than a zero sentinel, so forgetting to handle it does not
/// typecheck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(NonZeroU32);

impl Color {
    /// The first color the solver assigns.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a color from its 1-based number; `None` for 0.
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The next color in numbering order.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// 1-based number of this color.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0.get()
    }

    /// Human-readable name, wrapping around [`PALETTE`] for numbers past its
    /// end.
    #[must_use]
    pub fn palette_name(self) -> &'static str {
        PALETTE[(self.id() as usize - 1) % PALETTE.len()]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Label for vertex `vertex`: letters `A` through `Z`, plain indices beyond.
#[must_use]
pub fn vertex_name(vertex: usize) -> String {
    if vertex < 26 {
        char::from(b'A' + vertex as u8).to_string()
    } else {
        vertex.to_string()
    }
}

/// Parses a label produced by [`vertex_name`] back into a vertex index.
///
/// # Errors
///
/// The label must be a single ASCII letter or a decimal index.
pub fn parse_vertex(label: &str) -> anyhow::Result<usize> {
    let mut symbols = label.chars();
    match (symbols.next(), symbols.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => {
            Ok(letter.to_ascii_uppercase() as usize - 'A' as usize)
        },
        _ => match label.parse() {
            Ok(index) => Ok(index),
            Err(_) => bail!("vertex should be a letter 'A'..='Z' or an index, got '{label}'"),
        },
    }
}
