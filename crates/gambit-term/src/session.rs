//! The interactive prompt loop for a local two-player game.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Color, Game, GameStatus, MoveOutcome, PromotionPiece, Square};

use crate::command::{parse_command, Command};
use crate::config::{SessionConfig, Setting};
use crate::error::TermError;

const HELP: &str = "\
Commands:
  e2 e4 | e2e4          move a piece
  moves <square>        list where a piece can go
  board                 print the board
  new                   start a new game
  position <text>       set up a position (or 'position start')
  set board on|off      print the board after every move
  set hints on|off      list legal moves after an illegal one
  help                  show this text
  quit                  leave";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Checkmate { winner: Color },
    Stalemate,
    /// The player typed `quit`.
    Quit,
    /// Input ran out before the game finished.
    InputClosed,
}

/// One game played over a line-based reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session at the standard position with default options.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, SessionConfig::default())
    }

    pub fn with_config(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            game: Game::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run the prompt loop until the game ends, the player quits, or input
    /// closes.
    ///
    /// Bad input and rejected moves are reported to the player and the loop
    /// carries on. Only I/O failures end it early.
    pub fn run(&mut self) -> Result<GameEnd, TermError> {
        self.show_board()?;
        loop {
            self.prompt()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("input closed");
                return Ok(GameEnd::InputClosed);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed, self.game.pending_promotion().is_some()) {
                Ok(cmd) => {
                    if let Some(end) = self.dispatch(cmd)? {
                        info!(?end, "session finished");
                        return Ok(end);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "bad input");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn dispatch(&mut self, cmd: Command) -> Result<Option<GameEnd>, TermError> {
        match cmd {
            Command::Move { from, to, promotion } => return self.handle_move(from, to, promotion),
            Command::Promote(choice) => return self.handle_promote(&choice),
            Command::Moves(sq) => self.handle_moves(sq)?,
            Command::Board => writeln!(self.output, "{}", self.game.board().pretty())?,
            Command::New => {
                self.game = Game::new();
                self.show_board()?;
            }
            Command::Position(board) => match Game::from_board(board) {
                Ok(game) => {
                    self.game = game;
                    self.show_board()?;
                    return self.report(self.game.status());
                }
                Err(e) => writeln!(self.output, "{e}")?,
            },
            Command::Set(setting) => self.handle_set(setting)?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(Some(GameEnd::Quit)),
        }
        Ok(None)
    }

    fn handle_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    ) -> Result<Option<GameEnd>, TermError> {
        match self.game.attempt_move(from, to) {
            Ok(MoveOutcome::Applied(status)) => {
                self.announce(from, to, status)?;
                self.show_board()?;
                self.report(status)
            }
            Ok(MoveOutcome::PromotionPending) => match promotion {
                Some(piece) => self.handle_promote(&piece.letter().to_string()),
                // The prompt switches to the promotion menu.
                None => Ok(None),
            },
            Err(e) => {
                warn!(error = %e, "move rejected");
                writeln!(self.output, "Illegal move: {e}")?;
                let ours = self
                    .game
                    .board()
                    .color_at(from)
                    .is_some_and(|color| color == self.game.side_to_move());
                if self.config.show_hints && ours {
                    self.handle_moves(from)?;
                }
                Ok(None)
            }
        }
    }

    fn handle_promote(&mut self, choice: &str) -> Result<Option<GameEnd>, TermError> {
        let pending = self.game.pending_promotion();
        match self.game.resolve_promotion(choice) {
            Ok(promotion) => {
                if let Some((from, to)) = pending {
                    self.announce(from, to, promotion.status)?;
                }
                writeln!(self.output, "Promoted to {}.", promotion.piece.kind())?;
                self.show_board()?;
                self.report(promotion.status)
            }
            Err(e) => {
                warn!(error = %e, "promotion rejected");
                writeln!(self.output, "{e}")?;
                Ok(None)
            }
        }
    }

    fn handle_moves(&mut self, sq: Square) -> Result<(), TermError> {
        let targets = self.game.legal_moves(sq);
        if targets.is_empty() {
            writeln!(self.output, "No legal moves from {sq}.")?;
        } else {
            writeln!(self.output, "Legal moves from {sq}: {targets}")?;
        }
        Ok(())
    }

    fn handle_set(&mut self, setting: Setting) -> Result<(), TermError> {
        self.config.apply(setting);
        let (name, value) = setting.describe();
        debug!(option = name, value, "option changed");
        writeln!(self.output, "{name} {value}")?;
        Ok(())
    }

    /// Echo an applied move, naming the next player while play goes on.
    fn announce(&mut self, from: Square, to: Square, status: GameStatus) -> Result<(), TermError> {
        let next = self.game.side_to_move();
        write!(self.output, "{} moves {from} to {to}.", next.flip())?;
        if !status.is_terminal() {
            write!(self.output, " {next} to play.")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Announce `status` and say whether it ends the game.
    fn report(&mut self, status: GameStatus) -> Result<Option<GameEnd>, TermError> {
        match status {
            GameStatus::Continue => Ok(None),
            GameStatus::Check(_) => {
                writeln!(self.output, "Check!")?;
                Ok(None)
            }
            GameStatus::Checkmate { winner } => {
                writeln!(self.output, "Checkmate! {winner} wins.")?;
                Ok(Some(GameEnd::Checkmate { winner }))
            }
            GameStatus::Stalemate => {
                writeln!(self.output, "Stalemate. The game is drawn.")?;
                Ok(Some(GameEnd::Stalemate))
            }
        }
    }

    fn show_board(&mut self) -> Result<(), TermError> {
        if self.config.show_board {
            writeln!(self.output, "\n{}\n", self.game.board().pretty())?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), TermError> {
        if self.game.pending_promotion().is_some() {
            write!(self.output, "{} ", PromotionPiece::PROMPT)?;
        } else {
            write!(self.output, "{} to move> ", self.game.side_to_move())?;
        }
        self.output.flush()?;
        Ok(())
    }
}
