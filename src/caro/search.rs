//! Depth-limited [minimax] with [alpha-beta pruning]. The search speculates
//! directly on the caller's board, placing a mark before each recursive probe
//! and removing it right after, so the board comes back untouched.
//!
//! [minimax]: https://en.wikipedia.org/wiki/Minimax
//! [alpha-beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning

use crate::caro::board::Board;
use crate::caro::core::{Move, Player};
use crate::caro::evaluation::{evaluate, Score};

/// Remaining number of plies to explore below the root move.
pub type Depth = u8;

/// Search depth that keeps response times interactive for a given board
/// size: exhaustive on 3x3, shallow on the larger boards.
#[must_use]
pub const fn depth_limit(board_size: usize) -> Depth {
    match board_size {
        3 => 9,
        5 => 3,
        _ => 2,
    }
}

/// Minimax player for one side of the board. Holds the searched side, the
/// fixed depth limit and a node counter for reporting.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    player: Player,
    depth_limit: Depth,
    searched_nodes: u64,
}

impl AiPlayer {
    /// Creates a player for `player`'s side with [`depth_limit`] picked for
    /// `board_size`.
    #[must_use]
    pub const fn new(player: Player, board_size: usize) -> Self {
        Self::with_depth(player, depth_limit(board_size))
    }

    /// Creates a player searching exactly `depth_limit` plies below each root
    /// move.
    #[must_use]
    pub const fn with_depth(player: Player, depth_limit: Depth) -> Self {
        Self {
            player,
            depth_limit,
            searched_nodes: 0,
        }
    }

    /// The side this player searches for.
    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    /// Number of nodes visited by the last [`Self::find_best_move`] call.
    #[must_use]
    pub const fn searched_nodes(&self) -> u64 {
        self.searched_nodes
    }

    /// Searches for the strongest reply in the current position and returns
    /// `None` iff there are no legal moves. Each candidate is tried on the
    /// board and taken back; ties are resolved in favor of the earliest
    /// candidate in row-major order.
    pub fn find_best_move(&mut self, board: &mut Board) -> Option<Move> {
        self.searched_nodes = 0;
        let mut best_move = None;
        let mut best_value = Score::MIN;
        for mv in board.generate_moves() {
            board.place_move(mv, self.player);
            let value = self.minimax(board, self.depth_limit, Score::MIN, Score::MAX, false);
            board.remove_move(mv);
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }
        best_move
    }

    /// Explores `depth` further plies and scores the position from
    /// `self.player`'s perspective. `maximizing` says whose turn it is:
    /// `true` for the searched side, `false` for the opponent.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: Depth,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.searched_nodes += 1;
        if depth == 0 || board.game_over() {
            return evaluate(board, self.player);
        }
        if maximizing {
            let mut best = Score::MIN;
            for mv in board.generate_moves() {
                board.place_move(mv, self.player);
                let value = self.minimax(board, depth - 1, alpha, beta, false);
                board.remove_move(mv);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = Score::MAX;
            for mv in board.generate_moves() {
                board.place_move(mv, self.player.opponent());
                let value = self.minimax(board, depth - 1, alpha, beta, true);
                board.remove_move(mv);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn depth_limit_follows_board_size() {
        assert_eq!(depth_limit(3), 9);
        assert_eq!(depth_limit(5), 3);
        assert_eq!(depth_limit(10), 2);
    }

    #[test]
    fn takes_the_immediate_win() {
        let mut board = Board::from_layout("OO.\nXX.\n...", 3).unwrap();
        let mut engine = AiPlayer::new(Player::O, board.size());
        assert_eq!(engine.find_best_move(&mut board), Some(Move::new(0, 2)));
        assert!(engine.searched_nodes() > 0);
    }

    #[test]
    fn blocks_the_opponent_threat() {
        let mut board = Board::from_layout("XX.\nO..\n...", 3).unwrap();
        let mut engine = AiPlayer::new(Player::O, board.size());
        assert_eq!(engine.find_best_move(&mut board), Some(Move::new(0, 2)));
    }

    #[test]
    fn board_is_restored_after_the_search() {
        let mut board = Board::from_layout("X.O\n.X.\n...", 3).unwrap();
        let snapshot = board.clone();
        let mut engine = AiPlayer::new(Player::O, board.size());
        assert!(engine.find_best_move(&mut board).is_some());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn no_move_on_a_finished_board() {
        let mut board = Board::from_layout("XOX\nOOX\nXXO", 3).unwrap();
        let mut engine = AiPlayer::new(Player::X, board.size());
        assert_eq!(engine.find_best_move(&mut board), None);
    }

    #[test]
    fn ties_keep_the_earliest_candidate() {
        // On an empty 3x3 board every opening leads to the same score under
        // exhaustive search, so the scan order decides.
        let mut board = Board::new(3, 3).unwrap();
        let mut engine = AiPlayer::new(Player::X, board.size());
        assert_eq!(engine.find_best_move(&mut board), Some(Move::new(0, 0)));
    }
}
