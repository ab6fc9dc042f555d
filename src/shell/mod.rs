//! The shell puts all pieces together: it owns the session state for the
//! three demos and executes commands from the input stream, writing
//! plain-text responses to the output stream.
//!
//! [`Shell::run`] is the "main loop": read a line, parse it into a
//! [`Command`], dispatch. Model rejections are printed as messages and the
//! loop continues; only I/O failures abort it.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::caro::board::Board;
use crate::caro::core::{Cell, Move, Player};
use crate::caro::search::AiPlayer;
use crate::coloring::graph::Graph;
use crate::coloring::greedy::color_graph;
use crate::coloring::{parse_vertex, vertex_name, Color, PALETTE};
use crate::pathfind::astar::{find_path, PathSearch};
use crate::pathfind::map::{GridMap, Tile};
use crate::pathfind::Pos;
use crate::shell::command::Command;

mod command;

/// Board sizes the `caro` command accepts, paired with their win lengths.
const BOARD_PRESETS: [(usize, usize); 3] = [(3, 3), (5, 5), (10, 5)];

/// The human always plays `X` and moves first; the engine answers as `O`.
const HUMAN: Player = Player::X;

struct Game {
    board: Board,
    engine: AiPlayer,
}

/// Interactive session over the provided I/O streams.
pub struct Shell<'a, R: BufRead, W: Write> {
    game: Option<Game>,
    map: GridMap,
    graph: Option<Graph>,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates a shell with no game in progress, the bundled school map and
    /// no graph yet.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            game: None,
            map: GridMap::preset_school(),
            graph: None,
            input,
            output,
        }
    }

    /// Continuously reads the input stream and executes commands until
    /// `quit` is sent or the stream ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Command::Help => self.handle_help()?,
                Command::NewGame { size } => self.handle_new_game(size)?,
                Command::Play { row, col } => self.handle_play(row, col)?,
                Command::ShowBoard => self.handle_show_board()?,
                Command::ResetMap => self.handle_reset_map()?,
                Command::ToggleWall { row, col } => {
                    let result = self.map.toggle_wall(Pos::new(row, col));
                    self.report_map_edit(result)?;
                },
                Command::MoveStart { row, col } => {
                    let result = self.map.move_start(Pos::new(row, col));
                    self.report_map_edit(result)?;
                },
                Command::MoveGoal { row, col } => {
                    let result = self.map.move_goal(Pos::new(row, col));
                    self.report_map_edit(result)?;
                },
                Command::FindPath => self.handle_find_path()?,
                Command::NewGraph { order } => self.handle_new_graph(order)?,
                Command::ColorGraph => self.handle_color_graph()?,
                Command::Recolor { vertex, color } => self.handle_recolor(&vertex, color)?,
                Command::Quit => break,
                Command::Unknown(command) => {
                    writeln!(self.output, "unsupported command: {command}")?;
                },
            }
        }
        Ok(())
    }

    fn handle_help(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "caro <size>           start a game on a 3, 5 or 10 board")?;
        writeln!(self.output, "play <row> <col>      put your mark, the engine answers")?;
        writeln!(self.output, "board                 show the current board")?;
        writeln!(self.output, "map                   reset the map to the bundled floor plan")?;
        writeln!(self.output, "wall <row> <col>      toggle a wall cell")?;
        writeln!(self.output, "start <row> <col>     move the start marker")?;
        writeln!(self.output, "goal <row> <col>      move the goal marker")?;
        writeln!(self.output, "path                  run the pathfinder on the current map")?;
        writeln!(self.output, "graph <n>             generate a random map of 3..=12 regions")?;
        writeln!(self.output, "color                 color the regions greedily")?;
        writeln!(self.output, "recolor <region> <color>  change one region's color")?;
        writeln!(self.output, "quit")?;
        Ok(())
    }

    fn handle_new_game(&mut self, size: usize) -> anyhow::Result<()> {
        let Some(&(size, win_length)) = BOARD_PRESETS.iter().find(|&&(preset, _)| preset == size)
        else {
            writeln!(self.output, "board size should be 3, 5 or 10, got {size}")?;
            return Ok(());
        };
        let game = Game {
            board: Board::new(size, win_length)?,
            engine: AiPlayer::new(HUMAN.opponent(), size),
        };
        writeln!(
            self.output,
            "new {size}x{size} game, {win_length} in a row wins; you play X and move first"
        )?;
        write!(self.output, "{}", game.board)?;
        self.game = Some(game);
        Ok(())
    }

    fn handle_play(&mut self, row: usize, col: usize) -> anyhow::Result<()> {
        let Some(game) = &mut self.game else {
            writeln!(self.output, "no game in progress, start one with 'caro <size>'")?;
            return Ok(());
        };
        if game.board.game_over() {
            writeln!(
                self.output,
                "the game is over, start a new one with 'caro <size>'"
            )?;
            return Ok(());
        }
        if !game.board.in_bounds(row, col) {
            let size = game.board.size();
            writeln!(
                self.output,
                "cell ({row}, {col}) should be within the {size}x{size} board"
            )?;
            return Ok(());
        }
        if game.board.cell(row, col) != Cell::Empty {
            writeln!(self.output, "cell ({row}, {col}) is already taken")?;
            return Ok(());
        }
        game.board.place_move(Move::new(row, col), HUMAN);
        if !game.board.game_over() {
            if let Some(reply) = game.engine.find_best_move(&mut game.board) {
                game.board.place_move(reply, game.engine.player());
                writeln!(
                    self.output,
                    "engine plays {reply} after searching {} nodes",
                    game.engine.searched_nodes()
                )?;
            }
        }
        write!(self.output, "{}", game.board)?;
        match game.board.check_winner() {
            Some(winner) if winner == HUMAN => writeln!(self.output, "you win")?,
            Some(_) => writeln!(self.output, "the engine wins")?,
            None if game.board.is_full() => writeln!(self.output, "draw")?,
            None => {},
        }
        Ok(())
    }

    fn handle_show_board(&mut self) -> anyhow::Result<()> {
        match &self.game {
            Some(game) => write!(self.output, "{}", game.board)?,
            None => writeln!(
                self.output,
                "no game in progress, start one with 'caro <size>'"
            )?,
        }
        Ok(())
    }

    fn handle_reset_map(&mut self) -> anyhow::Result<()> {
        self.map = GridMap::preset_school();
        write!(self.output, "{}", self.map)?;
        Ok(())
    }

    fn report_map_edit(&mut self, result: anyhow::Result<()>) -> anyhow::Result<()> {
        match result {
            Ok(()) => write!(self.output, "{}", self.map)?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn handle_find_path(&mut self) -> anyhow::Result<()> {
        let search = find_path(&self.map);
        if search.path.is_empty() {
            writeln!(
                self.output,
                "no path found; visited {} cells",
                search.visited.len()
            )?;
            return Ok(());
        }
        writeln!(
            self.output,
            "path found: {} steps, visited {} cells",
            search.steps(),
            search.visited.len()
        )?;
        write!(self.output, "{}", render_search(&self.map, &search))?;
        Ok(())
    }

    fn handle_new_graph(&mut self, order: usize) -> anyhow::Result<()> {
        if !(3..=12).contains(&order) {
            writeln!(
                self.output,
                "region count should be within 3..=12, got {order}"
            )?;
            return Ok(());
        }
        let graph = Graph::random(order, &mut rand::thread_rng())?;
        writeln!(self.output, "generated a map of {order} regions")?;
        for v in 0..graph.order() {
            let neighbors = graph.neighbors(v).map(vertex_name).join(", ");
            writeln!(self.output, "{}: {neighbors}", vertex_name(v))?;
        }
        self.graph = Some(graph);
        Ok(())
    }

    fn handle_color_graph(&mut self) -> anyhow::Result<()> {
        let Some(graph) = &mut self.graph else {
            writeln!(self.output, "no graph yet, generate one with 'graph <n>'")?;
            return Ok(());
        };
        let colors = color_graph(graph);
        debug_assert!(graph.is_proper_coloring());
        for (v, color) in colors.iter().enumerate() {
            writeln!(
                self.output,
                "{}: color {color} ({})",
                vertex_name(v),
                color.palette_name()
            )?;
        }
        writeln!(self.output, "used {} colors", graph.colors_used())?;
        Ok(())
    }

    fn handle_recolor(&mut self, vertex: &str, color_id: u32) -> anyhow::Result<()> {
        let Some(graph) = &mut self.graph else {
            writeln!(self.output, "no graph yet, generate one with 'graph <n>'")?;
            return Ok(());
        };
        let v = match parse_vertex(vertex) {
            Ok(v) => v,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(());
            },
        };
        let Some(color) = Color::new(color_id).filter(|color| color.id() <= PALETTE.len() as u32)
        else {
            writeln!(
                self.output,
                "color should be within 1..={}, got {color_id}",
                PALETTE.len()
            )?;
            return Ok(());
        };
        match graph.recolor(v, color) {
            Ok(()) => writeln!(
                self.output,
                "{}: color {color} ({})",
                vertex_name(v),
                color.palette_name()
            )?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }
}

/// Renders the map with the found path marked `*` and the other expanded
/// cells marked `o`. Walls and the two markers keep their characters.
fn render_search(map: &GridMap, search: &PathSearch) -> String {
    let on_path: HashSet<Pos> = search.path.iter().copied().collect();
    let mut out = String::new();
    for row in 0..map.rows() {
        for col in 0..map.cols() {
            let position = Pos::new(row, col);
            let tile = map.tile(position);
            if tile == Tile::Open && on_path.contains(&position) {
                out.push('*');
            } else if tile == Tile::Open && search.visited.contains(&position) {
                out.push('o');
            } else {
                let _ = write!(out, "{tile}");
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(script: &str) -> String {
        let mut input = Cursor::new(script);
        let mut output = Vec::new();
        Shell::new(&mut input, &mut output).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn unknown_commands_are_reported() {
        let transcript = session("uci\nquit\n");
        assert!(transcript.contains("unsupported command: uci"));
    }

    #[test]
    fn game_round_trip() {
        let transcript = session("caro 3\nplay 1 1\nboard\nquit\n");
        assert!(transcript.contains("new 3x3 game, 3 in a row wins"));
        assert!(transcript.contains("engine plays"));
        assert!(transcript.contains('O'));
    }

    #[test]
    fn game_rejects_bad_moves() {
        let transcript = session("play 0 0\ncaro 4\ncaro 3\nplay 9 9\nplay 0 0\nplay 0 0\nquit\n");
        assert!(transcript.contains("no game in progress"));
        assert!(transcript.contains("board size should be 3, 5 or 10, got 4"));
        assert!(transcript.contains("cell (9, 9) should be within the 3x3 board"));
        assert!(transcript.contains("cell (0, 0) is already taken"));
    }

    #[test]
    fn map_editing_and_pathfinding() {
        let transcript = session("map\nwall 1 1\npath\nwall 2 11\npath\nquit\n");
        assert!(transcript.contains("#######"));
        assert!(transcript.contains("cell (1, 1) holds the start or goal marker"));
        assert!(transcript.contains("no path found; visited 44 cells"));
        assert!(transcript.contains("path found: 33 steps, visited 83 cells"));
        assert!(transcript.contains('*'));
    }

    #[test]
    fn sealed_start_floods_without_a_path() {
        let transcript = session("wall 2 1\nwall 1 2\npath\nquit\n");
        assert!(transcript.contains("no path found; visited 1 cells"));
    }

    #[test]
    fn graph_commands_round_trip() {
        let transcript = session("color\ngraph 2\ngraph 8\ncolor\nrecolor A 9\nquit\n");
        assert!(transcript.contains("no graph yet"));
        assert!(transcript.contains("region count should be within 3..=12, got 2"));
        assert!(transcript.contains("generated a map of 8 regions"));
        assert!(transcript.contains("used"));
        assert!(transcript.contains("color should be within 1..=8, got 9"));
    }

    #[test]
    fn quit_stops_before_later_commands() {
        let transcript = session("quit\nhelp\n");
        assert!(!transcript.contains("caro <size>"));
    }
}
