//! Make/unmake probing for king safety.

use std::ops::Deref;

use crate::board::Board;
use crate::check::is_king_attacked;
use crate::piece::Piece;
use crate::square::Square;

/// A provisional move on a borrowed board, undone when dropped.
///
/// Making the probe saves the contents of both squares and moves the piece
/// from `from` to `to`. Dropping it puts both squares back exactly as they
/// were, whatever path leaves the probe's scope.
pub struct Probe<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    saved_from: Option<Piece>,
    saved_to: Option<Piece>,
}

impl<'a> Probe<'a> {
    /// Move whatever stands on `from` to `to` until the probe is dropped.
    pub fn make(board: &'a mut Board, from: Square, to: Square) -> Probe<'a> {
        let saved_from = board.piece_at(from);
        let saved_to = board.piece_at(to);
        board.set_piece(from, None);
        board.set_piece(to, saved_from);
        Probe {
            board,
            from,
            to,
            saved_from,
            saved_to,
        }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.set_piece(self.to, self.saved_to);
        self.board.set_piece(self.from, self.saved_from);
    }
}

impl Board {
    /// Start a provisional move. See [`Probe`].
    pub fn probe(&mut self, from: Square, to: Square) -> Probe<'_> {
        Probe::make(self, from, to)
    }
}

/// Return `true` if moving the piece on `from` to `to` would leave its own
/// king attacked.
///
/// The board is borrowed mutably for the probe and is identical afterwards.
/// An empty `from` has no king to expose and yields `false`.
pub fn would_expose_own_king(board: &mut Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    let probe = board.probe(from, to);
    is_king_attacked(&probe, mover.color())
}
