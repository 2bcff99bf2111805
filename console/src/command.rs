use thiserror::Error;

/// Input the game reacts to. Coordinates are not range-checked here; the game
/// state rejects cells outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    CellSelected { row: usize, col: usize },
    NewGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Trigger),
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unrecognized input '{0}', expected 'row col', 'new' or 'quit'")]
    Unrecognized(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(CommandError::Empty);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "new" | "n" | "restart" => return Ok(Command::Play(Trigger::NewGame)),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => Ok(Command::Play(Trigger::CellSelected { row, col })),
            _ => Err(CommandError::Unrecognized(trimmed.to_string())),
        },
        _ => Err(CommandError::Unrecognized(trimmed.to_string())),
    }
}
