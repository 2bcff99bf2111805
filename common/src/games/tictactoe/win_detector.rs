use super::board::Board;
use super::types::{Mark, Position};

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Rows, columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(2, 0), p(1, 1), p(0, 2)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

fn line_owner(board: &Board, line: &[Position; 3]) -> Option<Mark> {
    let rows = board.rows();
    let cell = |pos: Position| rows[pos.row][pos.col];
    let (a, b, c) = (cell(line[0]), cell(line[1]), cell(line[2]));
    match a {
        Some(mark) if b == a && c == a => Some(mark),
        _ => None,
    }
}
