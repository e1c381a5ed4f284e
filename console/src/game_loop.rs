use std::io::{self, BufRead, Write};

use puzzle2048_common::games::TileRng;
use puzzle2048_common::games::puzzle2048::{Direction, GameSession, GameStatus};

use crate::input::{Command, parse_command};
use crate::render::render_grid;

const PROMPT: &str = "wasd> ";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoopEnd {
    GameOver,
    Won,
    Quit,
    InputClosed,
}

enum Turn {
    Move(Direction),
    End(LoopEnd),
}

/// Plays until the board is stuck, the target tile appears, or the player stops.
pub fn run<I, O, R>(
    session: &mut GameSession,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> io::Result<LoopEnd>
where
    I: BufRead,
    O: Write,
    R: TileRng + ?Sized,
{
    loop {
        write!(output, "{}", render_grid(session.grid()))?;
        writeln!(output, "score: {}", session.score())?;

        match session.status() {
            GameStatus::Lost => {
                writeln!(output, "game over")?;
                return Ok(LoopEnd::GameOver);
            }
            GameStatus::Won => {
                writeln!(output, "you win")?;
                return Ok(LoopEnd::Won);
            }
            GameStatus::InProgress => {}
        }

        match next_turn(session, input, output)? {
            Turn::Move(direction) => {
                session.apply_move(direction, rng).map_err(io::Error::other)?;
            }
            Turn::End(end) => return Ok(end),
        }
    }
}

/// Prompts until the player picks a direction that actually changes the board.
fn next_turn<I: BufRead, O: Write>(
    session: &GameSession,
    input: &mut I,
    output: &mut O,
) -> io::Result<Turn> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Turn::End(LoopEnd::InputClosed));
        }

        match parse_command(&line) {
            Some(Command::Move(direction)) => {
                if session.preview(direction).grid != *session.grid() {
                    return Ok(Turn::Move(direction));
                }
            }
            Some(Command::Quit) => return Ok(Turn::End(LoopEnd::Quit)),
            None => writeln!(output, "unknown operation")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle2048_common::games::SessionRng;
    use puzzle2048_common::games::puzzle2048::Grid;
    use std::io::Cursor;

    fn play(session: &mut GameSession, input: &str) -> (LoopEnd, String) {
        let mut rng = SessionRng::new(42);
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let end = run(session, &mut rng, &mut input, &mut output).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    fn session_from<const W: usize>(rows: &[[u32; W]], target_value: Option<u32>) -> GameSession {
        GameSession::from_grid(Grid::from_rows(rows).unwrap(), target_value)
    }

    #[test]
    fn test_terminal_board_prints_game_over() {
        let mut session = session_from(&[[2, 4], [4, 2]], None);
        let (end, output) = play(&mut session, "");
        assert_eq!(end, LoopEnd::GameOver);
        assert_eq!(output, "2\t4\n4\t2\nscore: 0\ngame over\n");
    }

    #[test]
    fn test_unknown_input_reprompts() {
        let mut session = session_from(&[[2, 0], [0, 0]], None);
        let (end, output) = play(&mut session, "x\n");
        assert_eq!(end, LoopEnd::InputClosed);
        assert_eq!(output, "2\t0\n0\t0\nscore: 0\nwasd> unknown operation\nwasd> ");
    }

    #[test]
    fn test_noop_move_is_ignored() {
        let mut session = session_from(&[[2, 0], [0, 0]], None);
        let (end, output) = play(&mut session, "a\nw\nq\n");
        assert_eq!(end, LoopEnd::Quit);
        assert_eq!(output.matches(PROMPT).count(), 3);
        assert!(!output.contains("unknown operation"));
        assert_eq!(session.moves_made(), 0);
    }

    #[test]
    fn test_merge_updates_score() {
        let mut session = session_from(&[[2, 2], [0, 0]], None);
        let (end, output) = play(&mut session, "a\nq\n");
        assert_eq!(end, LoopEnd::Quit);
        assert_eq!(session.score(), 4);
        assert_eq!(session.moves_made(), 1);
        assert!(output.contains("score: 4\n"));
        assert!(output.starts_with("2\t2\n0\t0\nscore: 0\nwasd> 4\t"));
    }

    #[test]
    fn test_reaching_target_wins() {
        let mut session = session_from(&[[4, 4], [0, 0]], Some(8));
        let (end, output) = play(&mut session, "a\n");
        assert_eq!(end, LoopEnd::Won);
        assert!(output.ends_with("score: 8\nyou win\n"));
    }
}
