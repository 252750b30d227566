//! A requested move: source, destination and, for a promoting pawn, the
//! piece it becomes.

use std::fmt;

use crate::promotion::PromotionPiece;
use crate::square::Square;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a move without a promotion piece.
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a pawn move that promotes to `piece` on arrival.
    pub const fn new_promotion(from: Square, to: Square, piece: PromotionPiece) -> Move {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Parse coordinate text such as `e2e4` or `e7e8q`.
    pub fn from_coords(s: &str) -> Option<Move> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        match s[4..].chars().next() {
            None => Some(Move::new(from, to)),
            Some(c) => Some(Move::new_promotion(from, to, PromotionPiece::from_letter(c)?)),
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }

    /// Number of files the move crosses, regardless of direction.
    #[inline]
    pub const fn file_distance(self) -> u8 {
        self.from.file().abs_diff(self.to.file())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
