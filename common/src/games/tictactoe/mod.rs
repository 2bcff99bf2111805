mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{OPENING_OPEN_CELLS, Score, ScoredMove, SearchEngine, SearchReport};
pub use error::GameError;
pub use game_state::{GameState, TurnQueue};
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, Mark, Position};
pub use win_detector::{LINES, check_win};
