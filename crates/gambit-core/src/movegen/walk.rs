//! Directional ray scanning shared by the king and the sliding pieces.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Step limit that lets a ray run to the edge of the board.
pub const UNLIMITED: usize = 8;

/// A single step in (file, rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub df: i8,
    pub dr: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction { df: 0, dr: 1 };
    pub const SOUTH: Direction = Direction { df: 0, dr: -1 };
    pub const EAST: Direction = Direction { df: 1, dr: 0 };
    pub const WEST: Direction = Direction { df: -1, dr: 0 };
    pub const NORTH_EAST: Direction = Direction { df: 1, dr: 1 };
    pub const NORTH_WEST: Direction = Direction { df: -1, dr: 1 };
    pub const SOUTH_EAST: Direction = Direction { df: 1, dr: -1 };
    pub const SOUTH_WEST: Direction = Direction { df: -1, dr: -1 };

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::NORTH,
        Direction::EAST,
        Direction::SOUTH,
        Direction::WEST,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NORTH_EAST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
        Direction::NORTH_WEST,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::NORTH_EAST,
        Direction::EAST,
        Direction::SOUTH_EAST,
        Direction::SOUTH,
        Direction::SOUTH_WEST,
        Direction::WEST,
        Direction::NORTH_WEST,
    ];
}

/// Collect the squares a `color` piece on `origin` reaches along `dir`.
///
/// The origin itself is excluded. The ray stops at the board edge, just
/// before a piece of `color`, or on an enemy piece (which is included), and
/// never takes more than `limit` steps.
pub fn walk(board: &Board, origin: Square, color: Color, dir: Direction, limit: usize) -> Vec<Square> {
    let mut squares = Vec::new();
    let mut current = origin;
    while squares.len() < limit {
        let Some(next) = current.offset(dir.df, dir.dr) else {
            break;
        };
        match board.color_at(next) {
            Some(c) if c == color => break,
            Some(_) => {
                squares.push(next);
                break;
            }
            None => squares.push(next),
        }
        current = next;
    }
    squares
}
