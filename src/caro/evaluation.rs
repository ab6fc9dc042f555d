//! Static evaluation of a position from one player's point of view. Decided
//! games collapse to large sentinel scores, everything else is judged by the
//! material difference alone. The function is intentionally shallow: tactics
//! are the job of the search, not the evaluator.

use std::fmt;

use crate::caro::board::Board;
use crate::caro::core::Player;

/// A signed position score. Positive values are good for the player the
/// position was evaluated for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    value: i32,
}

impl Score {
    /// The evaluated player has a winning run on the board.
    pub const WIN: Self = Self { value: 100_000 };
    /// The opponent has a winning run on the board.
    pub const LOSS: Self = Self { value: -100_000 };
    /// Lower bound of the score range, strictly below any reachable
    /// evaluation. Seeding a search with it guarantees that the first
    /// examined move, even a losing one, becomes the candidate.
    pub const MIN: Self = Self { value: -i32::MAX };
    /// Upper bound of the score range, strictly above any reachable
    /// evaluation.
    pub const MAX: Self = Self { value: i32::MAX };
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Self { value }
    }
}

impl std::ops::Neg for Score {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { value: -self.value }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Scores `board` from `player`'s perspective: [`Score::WIN`] or
/// [`Score::LOSS`] for decided positions, otherwise the difference in mark
/// counts.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> Score {
    match board.check_winner() {
        Some(winner) if winner == player => Score::WIN,
        Some(_) => Score::LOSS,
        None => {
            let own = board.mark_count(player) as i32;
            let other = board.mark_count(player.opponent()) as i32;
            Score::from(own - other)
        },
    }
}
