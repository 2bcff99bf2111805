use crate::games::SessionRng;
use crate::log_debug;
use super::error::GameError;
use super::game_state::GameState;
use super::types::{Mark, Position};

pub type Score = i32;

const WIN_SCORE: Score = 10;
const DRAW_SCORE: Score = 0;

/// With this many open cells or more the bot skips the search and plays the
/// centre, or the corner when the centre is gone.
pub const OPENING_OPEN_CELLS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub mark: Mark,
    pub position: Position,
    pub opening: bool,
    /// `None` when the opening shortcut fired.
    pub best_score: Option<Score>,
    pub tied_moves: usize,
    pub positions_evaluated: u64,
    /// Root candidates in row-major order; empty for the opening shortcut.
    pub scores: Vec<ScoredMove>,
}

/// Perfect-play move selection for the side to move.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    rng: SessionRng,
    last_search: Option<SearchReport>,
}

impl SearchEngine {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            rng,
            last_search: None,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(SessionRng::new(seed))
    }

    pub fn from_random() -> Self {
        Self::new(SessionRng::from_random())
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn last_search(&self) -> Option<&SearchReport> {
        self.last_search.as_ref()
    }

    /// Picks a move for the side to move, applies it to `state` and returns it
    /// together with the mark that moved.
    ///
    /// Equally scored moves are chosen between uniformly at random.
    pub fn choose_move(&mut self, state: &mut GameState) -> Result<(Position, Mark), GameError> {
        if state.is_over() {
            return Err(GameError::GameOver);
        }

        let open_cells = state.open_cells();
        let report = if open_cells.len() >= OPENING_OPEN_CELLS {
            SearchReport {
                mark: state.current_mark(),
                position: opening_move(&open_cells),
                opening: true,
                best_score: None,
                tied_moves: 1,
                positions_evaluated: 0,
                scores: Vec::new(),
            }
        } else {
            let mut positions_evaluated = 0;
            let scored = score_candidates(state, &mut positions_evaluated);
            let (chosen, tied_moves) = self
                .pick_best(&scored)
                .ok_or(GameError::GameOver)?;
            SearchReport {
                mark: state.current_mark(),
                position: chosen.position,
                opening: false,
                best_score: Some(chosen.score),
                tied_moves,
                positions_evaluated,
                scores: scored,
            }
        };

        let position = report.position;
        let mover = state.apply(position)?.ok_or(GameError::CellOccupied {
            row: position.row,
            col: position.col,
        })?;

        match report.best_score {
            Some(score) => log_debug!(
                "{} plays {} with score {} ({} tied, {} positions evaluated)",
                mover,
                position,
                score,
                report.tied_moves,
                report.positions_evaluated
            ),
            None => log_debug!("{} plays opening move {}", mover, position),
        }

        self.last_search = Some(report);
        Ok((position, mover))
    }

    /// Minimax score of every open cell for the side to move, in row-major
    /// order. Empty for a finished game.
    pub fn score_moves(&self, state: &GameState) -> Vec<ScoredMove> {
        if state.is_over() {
            return Vec::new();
        }
        let mut positions_evaluated = 0;
        score_candidates(state, &mut positions_evaluated)
    }

    /// Draws one of the best-scoring moves, keeping row-major order among the
    /// tied ones. Returns it with the number of tied moves.
    fn pick_best(&mut self, scored: &[ScoredMove]) -> Option<(ScoredMove, usize)> {
        let best = scored.iter().map(|candidate| candidate.score).max()?;
        let tied: Vec<ScoredMove> = scored
            .iter()
            .copied()
            .filter(|candidate| candidate.score == best)
            .collect();

        let chosen = *self.rng.pick(&tied)?;
        Some((chosen, tied.len()))
    }
}

fn opening_move(open_cells: &[Position]) -> Position {
    if open_cells.contains(&Position::CENTER) {
        Position::CENTER
    } else {
        Position::CORNER
    }
}

fn score_candidates(state: &GameState, positions_evaluated: &mut u64) -> Vec<ScoredMove> {
    state
        .open_cells()
        .into_iter()
        .map(|position| ScoredMove {
            position,
            score: evaluate(state, position, true, 0, positions_evaluated),
        })
        .collect()
}

/// Score of `position` played by the friendly side (or the opposing side when
/// `friendly` is false) on a copy of `state`.
fn evaluate(
    state: &GameState,
    position: Position,
    friendly: bool,
    depth: Score,
    positions_evaluated: &mut u64,
) -> Score {
    let mut next = *state;
    next.advance(position);
    *positions_evaluated += 1;

    if next.is_won() {
        if friendly {
            WIN_SCORE - depth
        } else {
            -WIN_SCORE + depth
        }
    } else if next.is_tie() {
        DRAW_SCORE
    } else {
        minimax(&next, !friendly, depth + 1, positions_evaluated)
    }
}

fn minimax(state: &GameState, friendly: bool, depth: Score, positions_evaluated: &mut u64) -> Score {
    let scores = state
        .open_cells()
        .into_iter()
        .map(|position| evaluate(state, position, friendly, depth, positions_evaluated));

    let best = if friendly { scores.max() } else { scores.min() };
    best.unwrap_or(DRAW_SCORE)
}
