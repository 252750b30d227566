//! Error types for board validation, position text, moves and promotion.

use crate::color::Color;
use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn stands.
        square: Square,
    },
    /// The side that just moved left its own king attacked, so the side to
    /// move could capture it.
    #[error("{color} is in check but it is not {color}'s turn")]
    OpponentInCheck {
        /// The side whose king is attacked.
        color: Color,
    },
}

/// Errors that occur when parsing position text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The position text is empty.
    #[error("position text is empty")]
    Empty,
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// An unrecognized character appeared in the castling field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Why a requested move was not applied.
///
/// Every rejection leaves the board and the side to move untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// A pawn is waiting for its promotion choice.
    #[error("a promotion choice is pending")]
    PromotionPending,
    /// Source and destination are the same square.
    #[error("source and destination are the same square")]
    SameSquare,
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    NoPieceAtSource(Square),
    /// The piece on the source square belongs to the other side.
    #[error("it is {0}'s turn")]
    WrongSideToMove(Color),
    /// The destination is not reachable by the piece, including failed
    /// castling preconditions.
    #[error("{from} cannot move to {to}")]
    NotInLegalMoveSet {
        from: Square,
        to: Square,
    },
    /// The move would leave the mover's own king attacked.
    #[error("moving {from} to {to} would leave the king in check")]
    ExposesOwnKing {
        from: Square,
        to: Square,
    },
    /// A pawn was sent to the far rank without a promotion piece.
    #[error("a pawn reaching {0} must promote")]
    PromotionRequired(Square),
}

/// Errors from resolving a pending promotion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromotionError {
    /// The choice is not one of rook, knight, bishop or queen.
    #[error("invalid promotion choice \"{0}\": pick 1 rook, 2 knight, 3 bishop or 4 queen")]
    InvalidChoice(String),
    /// No pawn is waiting to promote.
    #[error("no promotion is pending")]
    NothingPending,
    /// The pending move could not be applied. The promotion stays pending.
    #[error("promotion move rejected: {0}")]
    Move(#[from] MoveError),
}
