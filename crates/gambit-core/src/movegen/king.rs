//! King steps and castling.

use tracing::trace;

use crate::board::Board;
use crate::check::is_king_attacked;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::probe::would_expose_own_king;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::walk::{walk, Direction, UNLIMITED};

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Direction from the king toward this side's rook.
    pub const fn direction(self) -> Direction {
        match self {
            CastleSide::KingSide => Direction::EAST,
            CastleSide::QueenSide => Direction::WEST,
        }
    }

    /// Number of empty squares between king and rook.
    pub const fn path_len(self) -> usize {
        match self {
            CastleSide::KingSide => 2,
            CastleSide::QueenSide => 3,
        }
    }

    /// File of this side's rook at the start of the game.
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// The side a king move of two files toward `to` castles to.
    pub fn of_king_move(from: Square, to: Square) -> Option<CastleSide> {
        match to.file() as i8 - from.file() as i8 {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Rook source and destination when a king castles from `king_from` to this side.
    pub fn rook_squares(self, king_from: Square) -> Option<(Square, Square)> {
        let rook_from = Square::new(self.rook_file(), king_from.rank())?;
        let step = self.direction();
        let rook_to = king_from.offset(step.df, step.dr)?;
        Some((rook_from, rook_to))
    }
}

/// Generate king targets: one step in every direction, plus castling when
/// `allow_special` is set.
pub(super) fn gen_king(board: &Board, sq: Square, king: Piece, allow_special: bool, targets: &mut SquareSet) {
    for dir in Direction::ALL {
        targets.extend(walk(board, sq, king.color(), dir, 1));
    }

    if !allow_special || king.has_moved() {
        return;
    }
    for side in CastleSide::ALL {
        if let Some(dst) = castle_target(board, sq, king, side) {
            targets.insert(dst);
        }
    }
}

/// Return the king's destination if castling toward `side` is allowed.
fn castle_target(board: &Board, king_sq: Square, king: Piece, side: CastleSide) -> Option<Square> {
    let color = king.color();
    let path = walk(board, king_sq, color, side.direction(), UNLIMITED);
    if path.len() != side.path_len() || !path.iter().all(|&sq| board.is_empty(sq)) {
        return None;
    }

    let rook_sq = Square::new(side.rook_file(), king_sq.rank())?;
    match board.piece_at(rook_sq) {
        Some(rook) if rook.is(PieceKind::Rook, color) && !rook.has_moved() => {}
        _ => return None,
    }

    if is_king_attacked(board, color) {
        trace!(%king_sq, ?side, "castling refused: king in check");
        return None;
    }

    // The king crosses path[0] and lands on path[1]; neither may be attacked.
    let mut scratch = *board;
    if path[..2].iter().any(|&sq| would_expose_own_king(&mut scratch, king_sq, sq)) {
        trace!(%king_sq, ?side, "castling refused: path attacked");
        return None;
    }
    Some(path[1])
}
