//! Move application.

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::movegen::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

impl Board {
    /// Apply `mv` and pass the turn. Legality is the caller's business.
    ///
    /// Whatever stands on the destination is captured. A king moving two
    /// files castles, bringing that side's rook across in the same call. A
    /// pawn reaching its promotion rank becomes `mv.promotion()`. The moved
    /// piece is marked as moved.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoPieceAtSource`] for an empty source and
    /// [`MoveError::PromotionRequired`] for a promoting pawn without a choice.
    /// The board is untouched in both cases.
    pub fn apply_move(&mut self, mv: Move) -> Result<Option<Piece>, MoveError> {
        let (from, to) = (mv.from(), mv.to());
        let piece = self.piece_at(from).ok_or(MoveError::NoPieceAtSource(from))?;
        let color = piece.color();

        let placed = match piece.kind() {
            PieceKind::Pawn if to.rank() == color.promotion_rank() => {
                let promo = mv.promotion().ok_or(MoveError::PromotionRequired(to))?;
                trace!(%mv, %promo, "promotion");
                promo.piece(color)
            }
            PieceKind::King if mv.file_distance() == 2 => {
                if let Some((rook_from, rook_to)) =
                    CastleSide::of_king_move(from, to).and_then(|side| side.rook_squares(from))
                {
                    let rook = self.piece_at(rook_from).map(Piece::moved);
                    self.set_piece(rook_from, None);
                    self.set_piece(rook_to, rook);
                    trace!(%mv, %rook_from, %rook_to, "castling");
                }
                piece.moved()
            }
            _ => piece.moved(),
        };

        let captured = self.piece_at(to);
        self.set_piece(from, None);
        self.set_piece(to, Some(placed));
        self.set_side_to_move(color.flip());
        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::promotion::PromotionPiece;
    use crate::square::Square;

    #[test]
    fn quiet_move_marks_moved_and_passes_turn() {
        let mut board = Board::starting_position();
        let captured = board.apply_move(Move::new(Square::E2, Square::E4)).unwrap();
        assert_eq!(captured, None);
        assert!(board.is_empty(Square::E2));
        let pawn = board.piece_at(Square::E4).unwrap();
        assert!(pawn.is(PieceKind::Pawn, Color::White));
        assert!(pawn.has_moved());
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn capture_returns_the_victim() {
        let mut board: Board = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        let captured = board.apply_move(Move::new(Square::E4, Square::D5)).unwrap();
        assert_eq!(captured.map(|p| p.kind()), Some(PieceKind::Pawn));
        assert_eq!(board.pieces_of(Color::Black).count(), 1);
    }

    #[test]
    fn castling_moves_both_pieces() {
        let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        board.apply_move(Move::new(Square::E1, Square::G1)).unwrap();
        assert!(board.piece_at(Square::G1).unwrap().is(PieceKind::King, Color::White));
        assert!(board.piece_at(Square::F1).unwrap().is(PieceKind::Rook, Color::White));
        assert!(board.piece_at(Square::F1).unwrap().has_moved());
        assert!(board.is_empty(Square::E1));
        assert!(board.is_empty(Square::H1));

        board.apply_move(Move::new(Square::E8, Square::C8)).unwrap();
        assert!(board.piece_at(Square::C8).unwrap().is(PieceKind::King, Color::Black));
        assert!(board.piece_at(Square::D8).unwrap().is(PieceKind::Rook, Color::Black));
        assert!(board.is_empty(Square::A8));
        assert!(board.is_empty(Square::E8));
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let mut board: Board = "8/4P3/8/8/8/8/k7/4K3 w - - 0 1".parse().unwrap();
        let mv = Move::new_promotion(Square::E7, Square::E8, PromotionPiece::Knight);
        board.apply_move(mv).unwrap();
        let piece = board.piece_at(Square::E8).unwrap();
        assert_eq!(piece, Piece::new(PieceKind::Knight, Color::White).moved());
    }

    #[test]
    fn promotion_without_choice_is_refused_untouched() {
        let mut board: Board = "8/4P3/8/8/8/8/k7/4K3 w - - 0 1".parse().unwrap();
        let before = board;
        assert_eq!(
            board.apply_move(Move::new(Square::E7, Square::E8)),
            Err(MoveError::PromotionRequired(Square::E8))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn empty_source_is_refused() {
        let mut board = Board::starting_position();
        assert_eq!(
            board.apply_move(Move::new(Square::E4, Square::E5)),
            Err(MoveError::NoPieceAtSource(Square::E4))
        );
    }
}
