//! Rook, bishop and queen rays.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::walk::{walk, Direction, UNLIMITED};

/// Generate slider targets by walking every ray the piece moves along.
pub(super) fn gen_slider(board: &Board, sq: Square, piece: Piece, targets: &mut SquareSet) {
    let directions: &[Direction] = match piece.kind() {
        PieceKind::Rook => &Direction::ORTHOGONAL,
        PieceKind::Bishop => &Direction::DIAGONAL,
        _ => &Direction::ALL,
    };
    for &dir in directions {
        targets.extend(walk(board, sq, piece.color(), dir, UNLIMITED));
    }
}
