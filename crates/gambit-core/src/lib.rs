//! Core chess rules: board representation, move generation, and game refereeing.

mod board;
mod check;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod make_move;
pub mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod probe;
mod promotion;
mod square;
mod square_set;

pub use board::{Board, PrettyBoard};
pub use check::{evaluate_status, has_any_legal_move, is_king_attacked, is_square_attacked, GameStatus};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError, MoveError, PromotionError};
pub use fen::STARTING_FEN;
pub use game::{Game, MoveOutcome, Promotion};
pub use movegen::walk::{walk, Direction};
pub use movegen::{candidate_moves, legal_moves, CastleSide};
pub use perft::{all_legal_moves, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use probe::{would_expose_own_king, Probe};
pub use promotion::PromotionPiece;
pub use square::Square;
pub use square_set::SquareSet;
