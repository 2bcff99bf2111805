use std::fmt::Write;

use tictactoe_common::games::tictactoe::GameState;

use crate::config::PlayerKind;
use crate::session::{Event, Outcome};

const EMPTY_CELL: char = '.';

pub fn render_board(state: &GameState) -> String {
    let mut out = String::from("\n   0  1  2\n");
    for (row, cells) in state.board().rows().iter().enumerate() {
        let _ = write!(out, "{}  ", row);
        for cell in cells {
            let symbol = cell.map_or(EMPTY_CELL, |mark| mark.symbol());
            let _ = write!(out, "{}  ", symbol);
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }
    out
}

pub fn outcome_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won(mark) => format!("{} won!", mark),
        Outcome::Tie => "Tie".to_string(),
    }
}

pub fn render_event(event: &Event) -> String {
    match event {
        Event::NewGame => "New game".to_string(),
        Event::Moved { mark, position, player } => match player {
            PlayerKind::Human => format!("{} -> {}", mark, position),
            PlayerKind::Bot => format!("{} -> {} (bot)", mark, position),
        },
        Event::Scores { mark, scores } => {
            let listed: Vec<String> = scores
                .iter()
                .map(|scored| format!("{}={}", scored.position, scored.score))
                .collect();
            format!("{} considers {}", mark, listed.join(" "))
        }
        Event::CellTaken(position) => format!("Cell {} is already taken", position),
        Event::Rejected(err) => format!("Rejected: {}", err),
        Event::GameOver(outcome) => outcome_message(*outcome),
    }
}

pub fn prompt(state: &GameState) -> String {
    if state.is_over() {
        "Press enter for a new game, 'quit' to leave: ".to_string()
    } else {
        format!("{} to move (row col, 'new', 'quit'): ", state.current_mark())
    }
}
