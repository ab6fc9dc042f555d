#[derive(Debug, PartialEq)]
pub(super) enum Command {
    Help,
    NewGame { size: usize },
    Play { row: usize, col: usize },
    ShowBoard,
    ResetMap,
    ToggleWall { row: usize, col: usize },
    MoveStart { row: usize, col: usize },
    MoveGoal { row: usize, col: usize },
    FindPath,
    NewGraph { order: usize },
    ColorGraph,
    Recolor { vertex: String, color: u32 },
    Quit,
    Unknown(String),
}

fn unknown(input: &str) -> Command {
    Command::Unknown(input.trim().to_string())
}

fn parse_cell(row: &str, col: &str) -> Option<(usize, usize)> {
    Some((row.parse().ok()?, col.parse().ok()?))
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            ["help"] => Self::Help,
            ["caro", size] => match size.parse() {
                Ok(size) => Self::NewGame { size },
                Err(_) => unknown(input),
            },
            ["play", row, col] => match parse_cell(row, col) {
                Some((row, col)) => Self::Play { row, col },
                None => unknown(input),
            },
            ["board"] => Self::ShowBoard,
            ["map"] => Self::ResetMap,
            ["wall", row, col] => match parse_cell(row, col) {
                Some((row, col)) => Self::ToggleWall { row, col },
                None => unknown(input),
            },
            ["start", row, col] => match parse_cell(row, col) {
                Some((row, col)) => Self::MoveStart { row, col },
                None => unknown(input),
            },
            ["goal", row, col] => match parse_cell(row, col) {
                Some((row, col)) => Self::MoveGoal { row, col },
                None => unknown(input),
            },
            ["path"] => Self::FindPath,
            ["graph", order] => match order.parse() {
                Ok(order) => Self::NewGraph { order },
                Err(_) => unknown(input),
            },
            ["color"] => Self::ColorGraph,
            ["recolor", vertex, color] => match color.parse() {
                Ok(color) => Self::Recolor {
                    vertex: (*vertex).to_string(),
                    color,
                },
                Err(_) => unknown(input),
            },
            ["quit"] => Self::Quit,
            _ => unknown(input),
        }
    }
}
