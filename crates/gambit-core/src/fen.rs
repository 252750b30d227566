//! Position text (FEN-style) parsing and serialization for [`Board`].
//!
//! Only the placement, side-to-move and castling fields carry meaning. The
//! en passant and move-counter fields are accepted and ignored. Which pieces
//! count as moved is derived from where they stand and from the castling
//! field.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::movegen::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The position text for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Home square of `color`'s king.
fn king_home(color: Color) -> Option<Square> {
    Square::new(4, color.back_rank())
}

fn castle_letter(color: Color, side: CastleSide) -> char {
    let c = match side {
        CastleSide::KingSide => 'k',
        CastleSide::QueenSide => 'q',
    };
    match color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

fn parse_placement(placement: &str, board: &mut Board) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // Text runs from rank 8 down to rank 1.
        let rank = 7 - rank_index as u8;
        let mut file: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file = file.saturating_add(digit as u8);
                continue;
            }

            let piece = Piece::from_letter(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::new(file, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file as usize + 1,
            })?;
            board.set_piece(sq, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file as usize,
            });
        }
    }
    Ok(())
}

/// Parse the castling field into the rights each (color, side) still has.
/// `None` means the field was absent and rights follow from placement.
fn parse_castling(field: Option<&str>) -> Result<Option<[[bool; 2]; 2]>, FenError> {
    let Some(field) = field else {
        return Ok(None);
    };
    let mut rights = [[false; 2]; 2];
    if field == "-" {
        return Ok(Some(rights));
    }
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::KingSide),
            'Q' => (Color::White, CastleSide::QueenSide),
            'k' => (Color::Black, CastleSide::KingSide),
            'q' => (Color::Black, CastleSide::QueenSide),
            _ => return Err(FenError::InvalidCastlingChar { character: c }),
        };
        rights[color.index()][side as usize] = true;
    }
    Ok(Some(rights))
}

/// Mark pieces as moved wherever their square or the castling field says so.
fn derive_moved_flags(board: &mut Board, rights: Option<[[bool; 2]; 2]>) {
    for sq in Square::all() {
        let Some(piece) = board.piece_at(sq) else { continue };
        let color = piece.color();
        let moved = match piece.kind() {
            PieceKind::Pawn => sq.rank() != color.pawn_rank(),
            PieceKind::King => {
                Some(sq) != king_home(color)
                    || rights.is_some_and(|r| !r[color.index()].iter().any(|&has| has))
            }
            PieceKind::Rook => {
                let side = CastleSide::ALL
                    .into_iter()
                    .find(|side| Square::new(side.rook_file(), color.back_rank()) == Some(sq));
                match side {
                    None => true,
                    Some(side) => rights.is_some_and(|r| !r[color.index()][side as usize]),
                }
            }
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => false,
        };
        if moved {
            board.set_piece(sq, Some(piece.moved()));
        }
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::Empty)?;

        let side_to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let mut board = Board::empty(side_to_move);
        parse_placement(placement, &mut board)?;
        let rights = parse_castling(fields.next())?;
        derive_moved_flags(&mut board, rights);
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty = 0;
            for file in 0u8..8 {
                match Square::new(file, rank).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        let side = match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, " {side} ")?;

        let mut any = false;
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if self.can_still_castle(color, side) {
                    write!(f, "{}", castle_letter(color, side))?;
                    any = true;
                }
            }
        }
        if !any {
            write!(f, "-")?;
        }
        write!(f, " - 0 1")
    }
}

impl Board {
    /// Return `true` if neither `color`'s king nor its `side` rook has left
    /// home. Path and attack conditions are not considered.
    pub fn can_still_castle(&self, color: Color, side: CastleSide) -> bool {
        let king = king_home(color).and_then(|sq| self.piece_at(sq));
        let rook = Square::new(side.rook_file(), color.back_rank()).and_then(|sq| self.piece_at(sq));
        matches!(king, Some(k) if k.is(PieceKind::King, color) && !k.has_moved())
            && matches!(rook, Some(r) if r.is(PieceKind::Rook, color) && !r.has_moved())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::{BoardError, FenError};
    use crate::movegen::CastleSide;
    use crate::square::Square;

    #[test]
    fn starting_fen_matches_starting_position() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(board.to_string(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    }

    #[test]
    fn placement_only_defaults() {
        let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse().unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn side_to_move_field() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 b - - 0 1".parse().unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn moved_flags_are_derived() {
        let board: Board = "r3k2r/8/8/8/4P3/8/3P4/R3K2R w Kq - 0 1".parse().unwrap();
        assert!(board.piece_at(Square::E4).unwrap().has_moved());
        assert!(!board.piece_at(Square::D2).unwrap().has_moved());
        assert!(!board.piece_at(Square::E1).unwrap().has_moved());
        assert!(!board.piece_at(Square::H1).unwrap().has_moved());
        assert!(board.piece_at(Square::A1).unwrap().has_moved());
        assert!(board.piece_at(Square::H8).unwrap().has_moved());
        assert!(!board.piece_at(Square::A8).unwrap().has_moved());
        assert!(board.can_still_castle(Color::White, CastleSide::KingSide));
        assert!(!board.can_still_castle(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn no_castling_rights_marks_king_moved() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1".parse().unwrap();
        assert!(board.piece_at(Square::E1).unwrap().has_moved());
        assert!(board.piece_at(Square::E8).unwrap().has_moved());
    }

    #[test]
    fn display_roundtrip() {
        let cases = [
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
            "4k3/8/8/8/8/8/8/4K3 b - - 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1",
        ];
        for fen in cases {
            let board: Board = fen.parse().unwrap();
            assert_eq!(board.to_string(), fen);
        }
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Board>(), Err(FenError::Empty));
        assert_eq!(
            "8/8/8/8/8/8/8 w".parse::<Board>(),
            Err(FenError::WrongRankCount { found: 7 })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K2 w".parse::<Board>(),
            Err(FenError::BadRankLength { rank_index: 7, length: 7 })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K4 w".parse::<Board>(),
            Err(FenError::BadRankLength { rank_index: 7, length: 9 })
        );
        assert_eq!(
            "4x3/8/8/8/8/8/8/4K3 w".parse::<Board>(),
            Err(FenError::InvalidPieceChar { character: 'x' })
        );
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 x".parse::<Board>(),
            Err(FenError::InvalidColor { .. })
        ));
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 w KX".parse::<Board>(),
            Err(FenError::InvalidCastlingChar { character: 'X' })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/4K3 w".parse::<Board>(),
            Err(FenError::InvalidBoard {
                source: BoardError::InvalidKingCount { color: Color::Black, count: 0 }
            })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4R1K1 w".parse::<Board>(),
            Err(FenError::InvalidBoard {
                source: BoardError::OpponentInCheck { color: Color::Black }
            })
        );
    }
}
