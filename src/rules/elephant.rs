use crate::board::Board;
use crate::types::{Piece, Position};

use super::{ALL_DIRS, MovementRule, push_unique, validator};

/// Exactly two squares in any direction; the square in between must be empty.
pub struct ElephantMovement;

impl MovementRule for ElephantMovement {
    fn calculate_moves(&self, piece: &Piece, board: &Board) -> Vec<Position> {
        let mut moves = Vec::with_capacity(8);
        for (dx, dy) in ALL_DIRS {
            let to = piece.position.offset(2 * dx, 2 * dy);
            if self.is_valid_move(piece, piece.position, to, board) {
                push_unique(&mut moves, to);
            }
        }
        moves
    }

    fn is_valid_move(&self, piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        if !matches!((dx.abs(), dy.abs()), (2, 0) | (0, 2) | (2, 2)) {
            return false;
        }
        let middle = from.offset(dx / 2, dy / 2);
        validator::is_basic_move_valid(piece, from, to, board) && validator::is_empty(middle, board)
    }
}
