use super::board::Board;
use super::error::GameError;
use super::types::{Cell, Mark, Position};
use super::win_detector::check_win;

/// Whose turn it is and who moves after them. Swapped after every applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnQueue {
    current: Mark,
    next: Mark,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self {
            current: Mark::X,
            next: Mark::O,
        }
    }

    pub fn current(&self) -> Mark {
        self.current
    }

    pub fn next(&self) -> Mark {
        self.next
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}

impl Default for TurnQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Board plus turn order. Won, tied and over are derived from the board on
/// every call; nothing about the phase of the game is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    board: Board,
    turn: TurnQueue,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the current player's mark at (row, col).
    ///
    /// Returns `Ok(Some(mark))` with the mark that just moved, or `Ok(None)` if
    /// the cell was already taken, in which case nothing changes.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Option<Mark>, GameError> {
        self.apply(Position::new(row, col))
    }

    pub fn apply(&mut self, position: Position) -> Result<Option<Mark>, GameError> {
        let Some(cell) = self.board.get(position) else {
            return Err(GameError::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        };
        if cell.is_some() {
            return Ok(None);
        }
        Ok(Some(self.advance(position)))
    }

    /// `position` must be on the board and open.
    pub(crate) fn advance(&mut self, position: Position) -> Mark {
        let mover = self.turn.current();
        self.board.place(position, mover);
        self.turn.swap();
        mover
    }

    pub fn open_cells(&self) -> Vec<Position> {
        self.board.open_cells()
    }

    pub fn is_won(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.board)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn is_tie(&self) -> bool {
        self.is_full() && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.is_full() || self.is_won()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn current_mark(&self) -> Mark {
        self.turn.current()
    }

    /// After a winning move this is the winner, since the queue has already swapped.
    pub fn next_mark(&self) -> Mark {
        self.turn.next()
    }

    pub fn turn(&self) -> TurnQueue {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(Position::new(row, col))
    }

    pub fn occupied_count(&self) -> usize {
        self.board.occupied_count()
    }
}

#[cfg(test)]
pub(crate) fn play(moves: &[(usize, usize)]) -> GameState {
    let mut state = GameState::new();
    for &(row, col) in moves {
        let mover = state.apply_move(row, col).unwrap();
        assert!(mover.is_some(), "({}, {}) was already taken", row, col);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::CELL_COUNT;

    #[test]
    fn test_new_game_is_empty_with_x_to_move() {
        let state = GameState::new();
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.next_mark(), Mark::O);
        assert_eq!(state.open_cells().len(), CELL_COUNT);
        assert!(!state.is_won());
        assert!(!state.is_full());
        assert!(!state.is_tie());
        assert!(!state.is_over());
    }

    #[test]
    fn test_apply_move_reports_mover_and_swaps_turn() {
        let mut state = GameState::new();

        assert_eq!(state.apply_move(1, 1), Ok(Some(Mark::X)));
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.next_mark(), Mark::X);
        assert_eq!(state.cell(1, 1), Some(Some(Mark::X)));

        assert_eq!(state.apply_move(0, 0), Ok(Some(Mark::O)));
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.cell(0, 0), Some(Some(Mark::O)));
    }

    #[test]
    fn test_apply_move_on_occupied_cell_is_a_no_op() {
        let mut state = play(&[(1, 1)]);
        let before = state;

        assert_eq!(state.apply_move(1, 1), Ok(None));
        assert_eq!(state, before);
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_apply_move_out_of_bounds_is_rejected() {
        let mut state = play(&[(0, 0)]);
        let before = state;

        assert_eq!(
            state.apply_move(3, 0),
            Err(GameError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            state.apply_move(0, 7),
            Err(GameError::OutOfBounds { row: 0, col: 7 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_open_and_occupied_cells_always_add_up() {
        let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 0)];
        let mut state = GameState::new();
        for (row, col) in moves {
            assert_eq!(state.open_cells().len() + state.occupied_count(), CELL_COUNT);
            state.apply_move(row, col).unwrap();
            assert_eq!(state.apply_move(row, col), Ok(None));
            assert_eq!(state.open_cells().len() + state.occupied_count(), CELL_COUNT);
        }
    }

    #[test]
    fn test_row_win() {
        // X X X
        // O O _
        // _ _ _
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(state.is_won());
        assert_eq!(state.winner(), Some(Mark::X));
        assert!(state.is_over());
        assert!(!state.is_tie());
        assert!(!state.is_full());
        assert_eq!(state.next_mark(), Mark::X);
    }

    #[test]
    fn test_diagonal_win_for_second_player() {
        // O X X
        // _ O X
        // _ _ O
        let state = play(&[(0, 1), (0, 0), (0, 2), (1, 1), (1, 2), (2, 2)]);
        assert_eq!(state.winner(), Some(Mark::O));
        assert_eq!(state.next_mark(), Mark::O);
        assert!(state.is_over());
    }

    #[test]
    fn test_tie() {
        // X O X
        // X O O
        // O X X
        let state = play(&[
            (0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2),
        ]);
        assert!(state.is_full());
        assert!(!state.is_won());
        assert!(state.is_tie());
        assert!(state.is_over());
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        // X O X
        // O X O
        // O X X
        let state = play(&[
            (0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2),
        ]);
        assert!(state.is_full());
        assert!(state.is_won());
        assert!(!state.is_tie());
        assert!(state.is_over());
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(state.is_over());

        state.reset();
        assert_eq!(state, GameState::new());
        assert_eq!(state.current_mark(), Mark::X);
        assert!(!state.is_over());
    }

    #[test]
    fn test_copies_are_independent() {
        let original = play(&[(1, 1)]);
        let mut copy = original;
        copy.apply_move(0, 0).unwrap();

        assert_eq!(original.cell(0, 0), Some(None));
        assert_eq!(original.current_mark(), Mark::O);
        assert_eq!(copy.current_mark(), Mark::X);
    }
}
