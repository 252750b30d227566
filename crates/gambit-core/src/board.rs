//! The board: 64 optional pieces plus the side to move.

use std::fmt;

use crate::check::is_king_attacked;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board storage and addressing.
///
/// No legality is enforced here. Callers that mutate squares directly are
/// responsible for restoring them; see [`Probe`](crate::probe::Probe).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
}

impl Board {
    /// An empty board with `side_to_move` to play.
    pub fn empty(side_to_move: Color) -> Board {
        Board {
            squares: [None; Square::COUNT],
            side_to_move,
        }
    }

    /// Return the standard starting position with White to move.
    pub fn starting_position() -> Board {
        let mut board = Board::empty(Color::White);
        for color in Color::ALL {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                if let Some(sq) = Square::new(file, color.back_rank()) {
                    board.set_piece(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::new(file, color.pawn_rank()) {
                    board.set_piece(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Return the color of the piece on `sq`, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Iterate over every piece of `color` with its square, in index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color() == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Return the square of `color`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king. Check detection is undefined without
    /// one; [`Board::validate`] reports it before play starts.
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
            .expect("board must have a king for each side")
    }

    /// Validate the structural preconditions the rules rely on: one king per
    /// side, no pawn on the first or eighth rank, and the side not to move
    /// out of check.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        for (sq, piece) in Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p))) {
            if piece.kind() == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7) {
                return Err(BoardError::PawnOnBackRank { square: sq });
            }
        }

        // Otherwise the side to move could take the king.
        let waiting = self.side_to_move.flip();
        if is_king_attacked(self, waiting) {
            return Err(BoardError::OpponentInCheck { color: waiting });
        }

        Ok(())
    }

    /// Return the position with ranks reflected and colors swapped.
    pub fn mirrored(&self) -> Board {
        let mut board = Board::empty(self.side_to_move.flip());
        for sq in Square::all() {
            let piece = self.piece_at(sq).map(|p| {
                let swapped = Piece::new(p.kind(), p.color().flip());
                if p.has_moved() { swapped.moved() } else { swapped }
            });
            board.set_piece(sq.flip_rank(), piece);
        }
        board
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl PrettyBoard<'_> {
    /// Square shown at `row` (0 = top line) and `col` (0 = left column).
    pub fn square_at(row: u8, col: u8) -> Option<Square> {
        Square::new(col, 7u8.checked_sub(row)?)
    }
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = PrettyBoard::square_at(row, col)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or('.', Piece::letter);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, PrettyBoard};
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Square::E1), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(board.piece_at(Square::D8), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(board.piece_at(Square::A1), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.piece_at(Square::G8), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(board.piece_at(Square::F1), Some(Piece::new(PieceKind::Bishop, Color::White)));
        assert_eq!(board.piece_at(Square::E2), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.piece_at(Square::H7), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(board.is_empty(Square::E4));
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn pieces_of_counts() {
        let board = Board::starting_position();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        assert!(board.pieces_of(Color::White).all(|(sq, _)| sq.rank() < 2));
    }

    #[test]
    fn set_piece_and_clear() {
        let mut board = Board::starting_position();
        let pawn = board.piece_at(Square::E2);
        board.set_piece(Square::E2, None);
        board.set_piece(Square::E4, pawn);
        assert!(board.is_empty(Square::E2));
        assert_eq!(board.color_at(Square::E4), Some(Color::White));
    }

    #[test]
    fn king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
    }

    #[test]
    #[should_panic(expected = "board must have a king")]
    fn king_square_without_king_panics() {
        Board::empty(Color::White).king_square(Color::White);
    }

    #[test]
    fn validate_reports_missing_king() {
        let mut board = Board::starting_position();
        board.set_piece(Square::E8, None);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: Color::Black, count: 0 })
        );
    }

    #[test]
    fn validate_reports_back_rank_pawn() {
        let mut board = Board::starting_position();
        board.set_piece(Square::B8, Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.validate(), Err(BoardError::PawnOnBackRank { square: Square::B8 }));
    }

    #[test]
    fn validate_reports_king_left_in_check() {
        let mut board = Board::empty(Color::White);
        board.set_piece(Square::E8, Some(Piece::new(PieceKind::King, Color::Black)));
        board.set_piece(Square::E1, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(Square::G1, Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(board.validate(), Err(BoardError::OpponentInCheck { color: Color::Black }));

        // The same placement is fine when the checked side is the one to move.
        let mut black_to_move = Board::empty(Color::Black);
        for sq in [Square::E8, Square::E1, Square::G1] {
            black_to_move.set_piece(sq, board.piece_at(sq));
        }
        assert_eq!(black_to_move.validate(), Ok(()));
    }

    #[test]
    fn mirrored_start_is_start_with_other_side_to_move() {
        let board = Board::starting_position();
        let mirrored = board.mirrored();
        assert_eq!(mirrored.side_to_move(), Color::Black);
        assert_eq!(mirrored.mirrored(), board);
        for sq in Square::all() {
            assert_eq!(mirrored.piece_at(sq), board.piece_at(sq));
        }
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }

    #[test]
    fn rendering_uses_the_same_addressing_as_parsing() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        for (row, line) in output.lines().take(8).enumerate() {
            let cells: Vec<char> = line[3..].split(' ').filter_map(|s| s.chars().next()).collect();
            for (col, &c) in cells.iter().enumerate() {
                let sq = PrettyBoard::square_at(row as u8, col as u8).unwrap();
                let label = format!("{}{}", (b'a' + col as u8) as char, line.chars().next().unwrap());
                assert_eq!(Square::from_algebraic(&label), Some(sq), "label {label}");
                assert_eq!(board.piece_at(sq).map_or('.', Piece::letter), c, "square {sq}");
            }
        }
    }
}
