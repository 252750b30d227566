//! Knight jumps.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];

/// Generate knight targets: on the board and not holding a friendly piece.
pub(super) fn gen_knight(board: &Board, sq: Square, knight: Piece, targets: &mut SquareSet) {
    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(dst) = sq.offset(df, dr)
            && board.color_at(dst) != Some(knight.color())
        {
            targets.insert(dst);
        }
    }
}
