use std::io::{self, BufRead, Write};

use tictactoe_common::log;

use crate::command::{Command, CommandError, Trigger, parse_command};
use crate::render::{outcome_message, prompt, render_board, render_event};
use crate::session::{Event, Session, Tally};

pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    let opening = session.start();
    write_events(output, &opening)?;
    write!(output, "{}", render_board(session.state()))?;
    write!(output, "{}", prompt(session.state()))?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let command = read_command(session, &line);

        match command {
            Ok(Command::Quit) => break,
            Ok(Command::Play(trigger)) => {
                let events = session.handle(trigger);
                write_events(output, &events)?;
                if !events.is_empty() {
                    write!(output, "{}", render_board(session.state()))?;
                }
            }
            Err(CommandError::Empty) => {}
            Err(err) => writeln!(output, "{}", err)?,
        }

        write!(output, "{}", prompt(session.state()))?;
        output.flush()?;
    }

    writeln!(output)?;
    write_tally(output, session.tally())
}

pub fn run_autoplay<W: Write>(session: &mut Session, rounds: u32, output: &mut W) -> io::Result<()> {
    log!("Playing {} bot-only games", rounds);
    for (round, outcome) in session.autoplay(rounds).into_iter().enumerate() {
        writeln!(output, "Game {}: {}", round + 1, outcome_message(outcome))?;
    }
    write_tally(output, session.tally())
}

/// Once a game is over every line except `quit` starts the next one.
fn read_command(session: &Session, line: &str) -> Result<Command, CommandError> {
    let command = parse_command(line);
    if !session.state().is_over() {
        return command;
    }
    match command {
        Ok(Command::Quit) => Ok(Command::Quit),
        _ => Ok(Command::Play(Trigger::NewGame)),
    }
}

fn write_events<W: Write>(output: &mut W, events: &[Event]) -> io::Result<()> {
    for event in events {
        writeln!(output, "{}", render_event(event))?;
    }
    Ok(())
}

fn write_tally<W: Write>(output: &mut W, tally: Tally) -> io::Result<()> {
    writeln!(
        output,
        "Games played: {}, X wins: {}, O wins: {}, ties: {}",
        tally.games(),
        tally.x_wins,
        tally.o_wins,
        tally.ties
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::{Mark, SearchEngine};
    use crate::config::{ConsoleConfig, PlayerKind};

    fn run(config: &ConsoleConfig, input: &str) -> (Session, String) {
        let mut session = Session::new(config, SearchEngine::from_seed(8));
        let mut output = Vec::new();
        run_interactive(&mut session, Cursor::new(input), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_human_move_gets_bot_reply() {
        let (session, output) = run(&ConsoleConfig::default(), "0 0\nquit\n");

        assert!(output.contains("X -> (0, 0)"));
        assert!(output.contains("O -> (1, 1) (bot)"));
        assert!(output.contains("0  X  .  ."));
        assert!(output.contains("1  .  O  ."));
        assert_eq!(session.state().occupied_count(), 2);
    }

    #[test]
    fn test_bad_input_is_reported_and_game_continues() {
        let (session, output) = run(&ConsoleConfig::default(), "hello\n9 9\n0 0\n0 0\n");

        assert!(output.contains("unrecognized input 'hello'"));
        assert!(output.contains("Rejected: position (9, 9) is outside the 3x3 board"));
        assert!(output.contains("Cell (0, 0) is already taken"));
        assert_eq!(session.state().occupied_count(), 2);
    }

    #[test]
    fn test_finished_game_restarts_on_empty_line() {
        let config = ConsoleConfig {
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Human,
            ..ConsoleConfig::default()
        };
        let (session, output) = run(&config, "0 0\n1 0\n0 1\n1 1\n0 2\n\n");

        assert!(output.contains("X won!"));
        assert!(output.contains("New game"));
        assert!(output.contains("Games played: 1, X wins: 1, O wins: 0, ties: 0"));
        assert_eq!(session.state().occupied_count(), 0);
    }

    #[test]
    fn test_finished_game_restarts_on_any_text() {
        let config = ConsoleConfig {
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Human,
            ..ConsoleConfig::default()
        };
        let (session, output) = run(&config, "0 0\n1 0\n0 1\n1 1\n0 2\nhello\n2 2\n");

        assert!(output.contains("X won!"));
        assert!(!output.contains("unrecognized input"));
        assert_eq!(output.matches("New game").count(), 1);
        // "hello" started the new game, so "2 2" is its first move.
        assert_eq!(session.state().occupied_count(), 1);
        assert_eq!(session.state().cell(2, 2), Some(Some(Mark::X)));
    }

    #[test]
    fn test_quit_after_game_over_leaves() {
        let config = ConsoleConfig {
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Human,
            ..ConsoleConfig::default()
        };
        let (session, output) = run(&config, "0 0\n1 0\n0 1\n1 1\n0 2\nquit\n0 0\n");

        assert!(!output.contains("New game"));
        assert!(session.state().is_won());
        assert!(output.contains("Games played: 1, X wins: 1, O wins: 0, ties: 0"));
    }

    #[test]
    fn test_autoplay_prints_every_game() {
        let config = ConsoleConfig {
            player_x: PlayerKind::Bot,
            player_o: PlayerKind::Bot,
            autoplay_rounds: 2,
            ..ConsoleConfig::default()
        };
        let mut session = Session::new(&config, SearchEngine::from_seed(8));
        let mut output = Vec::new();

        run_autoplay(&mut session, config.autoplay_rounds, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Game 1: Tie"));
        assert!(output.contains("Game 2: Tie"));
        assert!(output.contains("Games played: 2, X wins: 0, O wins: 0, ties: 2"));
    }
}
