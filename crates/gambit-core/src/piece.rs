//! A colored piece that remembers whether it has moved.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece.
///
/// `has_moved` starts `false` for every piece of the initial setup and is set
/// by the first move applied to it. It gates the pawn double advance and
/// castling eligibility for the rest of the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Return the same piece flagged as moved.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Parse a position-text letter: uppercase is White, lowercase is Black.
    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Return `true` if this piece is a `kind` belonging to `color`.
    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Letter for this piece, uppercase for White.
    pub fn letter(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        if self.has_moved {
            write!(f, "*")?;
        }
        Ok(())
    }
}
