//! A game session: the board plus the bookkeeping needed to referee it.

use tracing::{debug, info};

use crate::board::Board;
use crate::check::{evaluate_status, GameStatus};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{BoardError, MoveError, PromotionError};
use crate::movegen::{candidate_moves, legal_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::probe::would_expose_own_king;
use crate::promotion::PromotionPiece;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Result of an accepted move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; the status is judged from the opponent's side.
    Applied(GameStatus),
    /// The move is legal but a pawn reaches the far rank. Nothing has moved
    /// yet; call [`Game::resolve_promotion`] with the player's choice.
    PromotionPending,
}

/// A resolved promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    /// The piece now standing on the promotion square.
    pub piece: Piece,
    /// Status after the promoting move.
    pub status: GameStatus,
}

/// One local two-player game.
///
/// Rejected requests leave the board and the side to move unchanged, so the
/// caller can simply ask again.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    status: GameStatus,
    pending: Option<(Square, Square)>,
}

impl Game {
    /// Start a game from the standard position.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            status: GameStatus::Continue,
            pending: None,
        }
    }

    /// Start a game from an arbitrary position with one king per side.
    ///
    /// The status reflects the position as given, judged for the side to move.
    pub fn from_board(board: Board) -> Result<Game, BoardError> {
        board.validate()?;
        let status = evaluate_status(&board, board.side_to_move().flip());
        Ok(Game {
            board,
            status,
            pending: None,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Status after the last applied move.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Source and destination of a move awaiting its promotion choice.
    #[inline]
    pub fn pending_promotion(&self) -> Option<(Square, Square)> {
        self.pending
    }

    /// Legal destinations for the piece on `sq`. Empty if `sq` is empty.
    pub fn legal_moves(&self, sq: Square) -> SquareSet {
        legal_moves(&self.board, sq)
    }

    /// Validate and play `from` -> `to` for the side to move.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.pending.is_some() {
            return Err(MoveError::PromotionPending);
        }
        if from == to {
            return Err(MoveError::SameSquare);
        }
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPieceAtSource(from))?;
        let us = self.board.side_to_move();
        if piece.color() != us {
            return Err(MoveError::WrongSideToMove(us));
        }
        if !candidate_moves(&self.board, from, true).contains(to) {
            return Err(MoveError::NotInLegalMoveSet { from, to });
        }
        if would_expose_own_king(&mut self.board, from, to) {
            return Err(MoveError::ExposesOwnKing { from, to });
        }

        if piece.kind() == PieceKind::Pawn && to.rank() == us.promotion_rank() {
            debug!(%from, %to, "promotion pending");
            self.pending = Some((from, to));
            return Ok(MoveOutcome::PromotionPending);
        }

        let status = self.play(Move::new(from, to))?;
        Ok(MoveOutcome::Applied(status))
    }

    /// Finish a pending promotion with the player's `choice`.
    ///
    /// An invalid choice changes nothing; the promotion stays pending and
    /// this can be called again.
    pub fn resolve_promotion(&mut self, choice: &str) -> Result<Promotion, PromotionError> {
        let (from, to) = self.pending.ok_or(PromotionError::NothingPending)?;
        let promo = PromotionPiece::from_choice(choice)?;
        let status = self.play(Move::new_promotion(from, to, promo))?;
        self.pending = None;
        let piece = promo.piece(self.board.side_to_move().flip());
        Ok(Promotion { piece, status })
    }

    fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        let mover = self.board.side_to_move();
        let captured = self.board.apply_move(mv)?;
        self.status = evaluate_status(&self.board, mover);
        debug!(%mv, %mover, ?captured, status = %self.status, "move applied");
        if self.status.is_terminal() {
            info!(status = %self.status, "game over");
        }
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
