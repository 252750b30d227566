//! Check, checkmate and stalemate detection.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{candidate_moves, pawn_attacks};
use crate::piece_kind::PieceKind;
use crate::probe::would_expose_own_king;
use crate::square::Square;

/// Game state reported after every applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Play continues normally.
    Continue,
    /// The given side is in check and has a legal reply.
    Check(Color),
    /// The side to move is in check with no legal move.
    Checkmate { winner: Color },
    /// The side to move has no legal move but is not in check. A draw.
    Stalemate,
}

impl GameStatus {
    /// Return `true` once the game is over.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Continue => f.write_str("in progress"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// Return `true` if any piece of `by_color` attacks `sq`.
///
/// Pawns attack their forward diagonals whether or not anything stands there,
/// and never the square in front of them. Every other piece attacks its
/// candidate squares, with castling left out. A square holding a piece of
/// `by_color` is never reported as attacked.
pub fn is_square_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    if board.color_at(sq) == Some(by_color) {
        return false;
    }
    board.pieces_of(by_color).any(|(from, piece)| match piece.kind() {
        PieceKind::Pawn => pawn_attacks(from, by_color).any(|target| target == sq),
        _ => candidate_moves(board, from, false).contains(sq),
    })
}

/// Return `true` if `color`'s king is attacked.
///
/// # Panics
///
/// Panics if `color` has no king on the board.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square(color), color.flip())
}

/// Return `true` if `color` has at least one legal move.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    let mut scratch = *board;
    board.pieces_of(color).any(|(from, _)| {
        candidate_moves(board, from, true)
            .into_iter()
            .any(|to| !would_expose_own_king(&mut scratch, from, to))
    })
}

/// Status of the game after `mover` has moved, judged from the opponent's side.
pub fn evaluate_status(board: &Board, mover: Color) -> GameStatus {
    let opponent = mover.flip();
    let in_check = is_king_attacked(board, opponent);
    match (in_check, has_any_legal_move(board, opponent)) {
        (true, false) => GameStatus::Checkmate { winner: mover },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(opponent),
        (false, true) => GameStatus::Continue,
    }
}
