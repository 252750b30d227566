//! Per-piece move rules.
//!
//! [`candidate_moves`] produces pseudo-legal targets: squares a piece could
//! reach by its movement pattern, ignoring its own king's safety.
//! [`legal_moves`] keeps those that leave the own king safe.

mod king;
mod knights;
mod pawns;
mod sliders;
pub mod walk;

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::probe::would_expose_own_king;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

pub use self::king::CastleSide;
pub(crate) use self::pawns::pawn_attacks;

/// Pseudo-legal targets of the piece on `sq`. Empty if `sq` is empty.
///
/// `allow_special` enables castling. Attack detection passes `false`:
/// castling legality asks whether squares are attacked, so attack detection
/// must not expand castling in turn.
pub fn candidate_moves(board: &Board, sq: Square, allow_special: bool) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let Some(piece) = board.piece_at(sq) else {
        return targets;
    };
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, sq, piece, &mut targets),
        PieceKind::Knight => gen_knight(board, sq, piece, &mut targets),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            gen_slider(board, sq, piece, &mut targets)
        }
        PieceKind::King => gen_king(board, sq, piece, allow_special, &mut targets),
    }
    targets
}

/// Legal targets of the piece on `sq`: candidates that keep its king safe.
pub fn legal_moves(board: &Board, sq: Square) -> SquareSet {
    let mut scratch = *board;
    candidate_moves(board, sq, true).filter(|to| !would_expose_own_king(&mut scratch, sq, to))
}

#[cfg(test)]
mod tests {
    use super::{candidate_moves, legal_moves};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    const POSITIONS: [&str; 5] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ];

    #[test]
    fn candidates_are_on_board_and_never_friendly() {
        for fen in POSITIONS {
            let board: Board = fen.parse().unwrap();
            for sq in Square::all() {
                let Some(piece) = board.piece_at(sq) else { continue };
                for to in candidate_moves(&board, sq, true) {
                    assert!(to.index() < 64);
                    assert_ne!(board.color_at(to), Some(piece.color()), "{fen}: {sq}->{to}");
                }
            }
        }
    }

    #[test]
    fn sliders_stop_at_the_first_blocker() {
        for fen in POSITIONS {
            let board: Board = fen.parse().unwrap();
            for sq in Square::all() {
                let Some(piece) = board.piece_at(sq) else { continue };
                if !piece.kind().is_slider() {
                    continue;
                }
                for to in candidate_moves(&board, sq, false) {
                    let df = (to.file() as i8 - sq.file() as i8).signum();
                    let dr = (to.rank() as i8 - sq.rank() as i8).signum();
                    let mut cur = sq.offset(df, dr).unwrap();
                    while cur != to {
                        assert!(board.is_empty(cur), "{fen}: {sq}->{to} skips {cur}");
                        cur = cur.offset(df, dr).unwrap();
                    }
                }
            }
        }
    }

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::starting_position();
        assert!(candidate_moves(&board, Square::E4, true).is_empty());
        assert!(legal_moves(&board, Square::E4).is_empty());
    }

    #[test]
    fn pinned_piece_keeps_only_pin_line() {
        let mut board = Board::empty(Color::White);
        board.set_piece(Square::E1, Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(Square::E3, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(Square::E8, Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set_piece(Square::A8, Some(Piece::new(PieceKind::King, Color::Black)));
        let legal = legal_moves(&board, Square::E3);
        assert!(legal.into_iter().all(|sq| sq.file() == 4), "{legal}");
        assert!(legal.contains(Square::E8));
        assert!(legal.contains(Square::E2));
        assert_eq!(candidate_moves(&board, Square::E3, true).len(), 13);
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board: Board = "4k3/8/8/8/8/8/3r4/4K3 w - - 0 1".parse().unwrap();
        let legal = legal_moves(&board, Square::E1);
        assert_eq!(legal.into_iter().collect::<Vec<_>>(), vec![Square::F1, Square::D2]);
    }
}
