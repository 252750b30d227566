//! Promotion choices and how a player's answer is interpreted.

use std::fmt;

use crate::color::Color;
use crate::error::PromotionError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// The piece a pawn can become on the far rank.
///
/// Declared in the order of the numbered prompt: 1 rook, 2 knight,
/// 3 bishop, 4 queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Rook,
    Knight,
    Bishop,
    Queen,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Rook,
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Queen,
    ];

    /// Interpret a player's answer.
    ///
    /// Accepts the menu number (`1`-`4`), the piece letter (`r n b q`) or the
    /// piece name, ignoring case and surrounding whitespace.
    pub fn from_choice(choice: &str) -> Result<PromotionPiece, PromotionError> {
        let trimmed = choice.trim();
        let by_number = match trimmed {
            "1" => Some(PromotionPiece::Rook),
            "2" => Some(PromotionPiece::Knight),
            "3" => Some(PromotionPiece::Bishop),
            "4" => Some(PromotionPiece::Queen),
            _ => None,
        };
        let mut chars = trimmed.chars();
        let by_letter = match (chars.next(), chars.next()) {
            (Some(c), None) => PromotionPiece::from_letter(c),
            _ => None,
        };
        let by_name = PromotionPiece::ALL
            .into_iter()
            .find(|piece| trimmed.eq_ignore_ascii_case(piece.kind().name()));

        by_number
            .or(by_letter)
            .or(by_name)
            .ok_or_else(|| PromotionError::InvalidChoice(trimmed.to_string()))
    }

    /// Parse a piece letter, ignoring case. Pawn and king letters are rejected.
    pub fn from_letter(c: char) -> Option<PromotionPiece> {
        match PieceKind::from_letter(c)? {
            PieceKind::Rook => Some(PromotionPiece::Rook),
            PieceKind::Knight => Some(PromotionPiece::Knight),
            PieceKind::Bishop => Some(PromotionPiece::Bishop),
            PieceKind::Queen => Some(PromotionPiece::Queen),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }

    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    pub const fn letter(self) -> char {
        self.kind().letter()
    }

    /// The piece that replaces a promoting pawn of `color`. It counts as moved.
    pub const fn piece(self, color: Color) -> Piece {
        Piece::new(self.kind(), color).moved()
    }

    /// The numbered menu shown to the player.
    pub const PROMPT: &'static str = "Promotion (1) Rook, (2) Knight, (3) Bishop, (4) Queen ->";
}

impl fmt::Display for PromotionPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::PromotionPiece;
    use crate::color::Color;
    use crate::error::PromotionError;
    use crate::piece_kind::PieceKind;

    #[test]
    fn numbered_menu() {
        assert_eq!(PromotionPiece::from_choice("1"), Ok(PromotionPiece::Rook));
        assert_eq!(PromotionPiece::from_choice("2"), Ok(PromotionPiece::Knight));
        assert_eq!(PromotionPiece::from_choice("3"), Ok(PromotionPiece::Bishop));
        assert_eq!(PromotionPiece::from_choice(" 4 "), Ok(PromotionPiece::Queen));
    }

    #[test]
    fn letters_and_names() {
        assert_eq!(PromotionPiece::from_choice("q"), Ok(PromotionPiece::Queen));
        assert_eq!(PromotionPiece::from_choice("N"), Ok(PromotionPiece::Knight));
        assert_eq!(PromotionPiece::from_choice("Queen"), Ok(PromotionPiece::Queen));
        assert_eq!(PromotionPiece::from_choice("BISHOP"), Ok(PromotionPiece::Bishop));
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["5", "0", "", "k", "p", "king", "pawn", "queens", "44"] {
            assert_eq!(
                PromotionPiece::from_choice(bad),
                Err(PromotionError::InvalidChoice(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn promoted_piece_has_moved() {
        let piece = PromotionPiece::Queen.piece(Color::Black);
        assert!(piece.is(PieceKind::Queen, Color::Black));
        assert!(piece.has_moved());
    }
}
