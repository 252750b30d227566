//! Perft (leaf node counting) for move generation correctness checks.

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::legal_moves;
use crate::piece_kind::PieceKind;
use crate::promotion::PromotionPiece;

/// Every legal move for the side to move, one entry per promotion piece.
pub fn all_legal_moves(board: &Board) -> Vec<Move> {
    let us = board.side_to_move();
    let mut moves = Vec::new();
    for (from, piece) in board.pieces_of(us) {
        for to in legal_moves(board, from) {
            if piece.kind() == PieceKind::Pawn && to.rank() == us.promotion_rank() {
                moves.extend(PromotionPiece::ALL.map(|p| Move::new_promotion(from, to, p)));
            } else {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Count the leaf nodes of the legal move tree at `depth`.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = *board;
        if child.apply_move(mv).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, perft};
    use crate::board::Board;

    #[test]
    fn perft_startpos() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, 0), 1);
        assert_eq!(perft(&board, 1), 20);
        assert_eq!(perft(&board, 2), 400);
        assert_eq!(perft(&board, 3), 8_902);
    }

    #[test]
    fn perft_castling_rooks() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        assert_eq!(perft(&board, 1), 26);
        assert_eq!(perft(&board, 2), 568);
    }

    #[test]
    fn promotions_count_once_per_piece() {
        let board: Board = "8/P6k/8/8/8/8/8/K7 w - - 0 1".parse().unwrap();
        let moves = all_legal_moves(&board);
        let promotions = moves.iter().filter(|mv| mv.promotion().is_some()).count();
        assert_eq!(promotions, 4);
        // King a1: a2, b1, b2.
        assert_eq!(moves.len(), 7);
    }
}
