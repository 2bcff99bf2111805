use tictactoe_common::games::tictactoe::{
    GameError, GameState, Mark, Position, ScoredMove, SearchEngine,
};
use tictactoe_common::log;

use crate::command::Trigger;
use crate::config::{ConsoleConfig, PlayerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Mark),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    NewGame,
    Moved {
        mark: Mark,
        position: Position,
        player: PlayerKind,
    },
    Scores {
        mark: Mark,
        scores: Vec<ScoredMove>,
    },
    CellTaken(Position),
    Rejected(GameError),
    GameOver(Outcome),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

/// Drives one game at a time: applies human selections, lets the bot answer,
/// and reports what happened as events for the front end to draw.
pub struct Session {
    state: GameState,
    engine: SearchEngine,
    config: ConsoleConfig,
    tally: Tally,
}

impl Session {
    pub fn new(config: &ConsoleConfig, engine: SearchEngine) -> Self {
        Self {
            state: GameState::new(),
            engine,
            config: config.clone(),
            tally: Tally::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.state.is_over() && self.config.player(self.state.current_mark()) == PlayerKind::Bot
    }

    /// Lets the bot open when it plays X.
    pub fn start(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        self.play_bots(&mut events);
        events
    }

    pub fn handle(&mut self, trigger: Trigger) -> Vec<Event> {
        match trigger {
            Trigger::NewGame => self.new_game(),
            Trigger::CellSelected { .. } if self.state.is_over() => self.new_game(),
            Trigger::CellSelected { row, col } => self.select(row, col),
        }
    }

    /// Plays `rounds` bot-only games and returns their outcomes.
    pub fn autoplay(&mut self, rounds: u32) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(rounds as usize);
        for _ in 0..rounds {
            self.state.reset();
            let mut events = Vec::new();
            self.play_bots(&mut events);
            if let Some(outcome) = outcome_of(&self.state) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    fn new_game(&mut self) -> Vec<Event> {
        self.state.reset();
        let mut events = vec![Event::NewGame];
        self.play_bots(&mut events);
        events
    }

    fn select(&mut self, row: usize, col: usize) -> Vec<Event> {
        let mut events = Vec::new();
        if self.is_bot_turn() {
            return events;
        }

        match self.state.apply_move(row, col) {
            Err(err) => events.push(Event::Rejected(err)),
            Ok(None) => events.push(Event::CellTaken(Position::new(row, col))),
            Ok(Some(mark)) => {
                events.push(Event::Moved {
                    mark,
                    position: Position::new(row, col),
                    player: PlayerKind::Human,
                });
                self.finish_or_continue(&mut events);
            }
        }
        events
    }

    fn finish_or_continue(&mut self, events: &mut Vec<Event>) {
        if let Some(outcome) = outcome_of(&self.state) {
            self.finish(outcome, events);
        } else {
            self.play_bots(events);
        }
    }

    fn play_bots(&mut self, events: &mut Vec<Event>) {
        while self.is_bot_turn() {
            match self.engine.choose_move(&mut self.state) {
                Ok((position, mark)) => {
                    if self.config.show_scores {
                        self.push_scores(mark, events);
                    }
                    events.push(Event::Moved {
                        mark,
                        position,
                        player: PlayerKind::Bot,
                    });
                }
                Err(err) => {
                    log!("Bot could not move: {}", err);
                    events.push(Event::Rejected(err));
                    return;
                }
            }
        }

        if let Some(outcome) = outcome_of(&self.state) {
            self.finish(outcome, events);
        }
    }

    /// Root scores of the search that just ran; nothing for the opening
    /// shortcut.
    fn push_scores(&self, mark: Mark, events: &mut Vec<Event>) {
        let Some(report) = self.engine.last_search() else {
            return;
        };
        if !report.scores.is_empty() {
            events.push(Event::Scores {
                mark,
                scores: report.scores.clone(),
            });
        }
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<Event>) {
        self.tally.record(outcome);
        log!("Game over: {:?} ({} games played)", outcome, self.tally.games());
        events.push(Event::GameOver(outcome));
    }
}

fn outcome_of(state: &GameState) -> Option<Outcome> {
    if let Some(winner) = state.winner() {
        Some(Outcome::Won(winner))
    } else if state.is_tie() {
        Some(Outcome::Tie)
    } else {
        None
    }
}
