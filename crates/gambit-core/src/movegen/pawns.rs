//! Pawn pushes and captures.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Generate pseudo-legal pawn targets.
///
/// One step forward onto an empty square, a second step if the pawn has
/// never moved and both squares are empty, and forward diagonals that hold
/// an enemy piece. Promotion is decided when the move is applied.
pub(super) fn gen_pawn(board: &Board, sq: Square, pawn: Piece, targets: &mut SquareSet) {
    let color = pawn.color();
    let forward = color.forward();

    if let Some(one) = sq.offset(0, forward)
        && board.is_empty(one)
    {
        targets.insert(one);
        if !pawn.has_moved()
            && let Some(two) = one.offset(0, forward)
            && board.is_empty(two)
        {
            targets.insert(two);
        }
    }

    for diag in pawn_attacks(sq, color) {
        if board.color_at(diag) == Some(color.flip()) {
            targets.insert(diag);
        }
    }
}

/// The forward diagonals a `color` pawn on `sq` attacks, occupied or not.
pub(crate) fn pawn_attacks(sq: Square, color: Color) -> impl Iterator<Item = Square> {
    [-1, 1]
        .into_iter()
        .filter_map(move |df| sq.offset(df, color.forward()))
}
