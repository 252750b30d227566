//! Player command parsing.

use gambit_core::{Board, Move, PromotionPiece, Square};

use crate::config::Setting;
use crate::error::TermError;

/// A parsed line of player input.
#[derive(Debug)]
pub enum Command {
    /// `e2 e4`, `e2e4` or `e7e8q` -- move the piece on `from` to `to`,
    /// optionally naming the promotion piece up front.
    Move {
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    },
    /// `moves <square>` -- list the legal destinations of a piece.
    Moves(Square),
    /// `board` -- print the board.
    Board,
    /// `new` -- start over from the standard position.
    New,
    /// `position <text>` -- replace the game with a custom position.
    Position(Board),
    /// `set <option> <value>` -- change a display option.
    Set(Setting),
    /// `help` -- list the commands.
    Help,
    /// `quit` -- leave the session.
    Quit,
    /// The answer to a promotion prompt, validated by the game.
    Promote(String),
}

/// Parse a single non-empty line of input.
///
/// While a promotion is pending, anything that is not a keyword is taken as
/// the promotion answer.
pub fn parse_command(line: &str, promotion_pending: bool) -> Result<Command, TermError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Err(malformed(line));
    };

    match first.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Ok(Command::Quit),
        "help" | "?" => Ok(Command::Help),
        "board" => Ok(Command::Board),
        "new" => Ok(Command::New),
        "set" => parse_set(&tokens[1..], line),
        _ if promotion_pending => Ok(Command::Promote(line.trim().to_string())),
        "moves" => match tokens[1..] {
            [sq] => Ok(Command::Moves(parse_square(sq)?)),
            _ => Err(malformed(line)),
        },
        "position" => parse_position(&tokens[1..], line),
        _ => parse_move(&tokens, line),
    }
}

/// Parse `<from> <to>` or the joined coordinate form.
fn parse_move(tokens: &[&str], line: &str) -> Result<Command, TermError> {
    match *tokens {
        [from, to] => Ok(Command::Move {
            from: parse_square(from)?,
            to: parse_square(to)?,
            promotion: None,
        }),
        [joined] => match Move::from_coords(joined) {
            Some(mv) => Ok(Command::Move {
                from: mv.from(),
                to: mv.to(),
                promotion: mv.promotion(),
            }),
            None => Err(bad_joined_move(joined, line)),
        },
        _ => Err(malformed(line)),
    }
}

/// Name the offending square of a joined move when there is one.
fn bad_joined_move(joined: &str, line: &str) -> TermError {
    if joined.is_ascii() && (4..=5).contains(&joined.len()) {
        for text in [&joined[..2], &joined[2..4]] {
            if let Err(e) = parse_square(text) {
                return e;
            }
        }
    }
    malformed(line)
}

/// Parse the `position` arguments: `start` or position text.
fn parse_position(tokens: &[&str], line: &str) -> Result<Command, TermError> {
    match tokens {
        [] => Err(malformed(line)),
        ["start" | "startpos"] => Ok(Command::Position(Board::starting_position())),
        _ => {
            let board: Board = tokens.join(" ").parse()?;
            Ok(Command::Position(board))
        }
    }
}

fn parse_set(tokens: &[&str], line: &str) -> Result<Command, TermError> {
    match *tokens {
        [name, value] => Ok(Command::Set(Setting::parse(name, value)?)),
        _ => Err(malformed(line)),
    }
}

fn parse_square(text: &str) -> Result<Square, TermError> {
    Square::from_algebraic(text).ok_or_else(|| TermError::InvalidSquare {
        text: text.to_string(),
    })
}

fn malformed(line: &str) -> TermError {
    TermError::MalformedCommand {
        line: line.trim().to_string(),
    }
}
