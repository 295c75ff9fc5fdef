use crate::board::Board;
use crate::types::{Piece, Position};

use super::{DIAGONAL_DIRS, MovementRule, ORTHOGONAL_DIRS, slides, steps, validator};

/// One orthogonal step, or any clear distance diagonally.
pub struct RaiderMovement;

impl MovementRule for RaiderMovement {
    fn calculate_moves(&self, piece: &Piece, board: &Board) -> Vec<Position> {
        let mut moves = Vec::new();
        steps(piece, board, &ORTHOGONAL_DIRS, &mut moves);
        slides(piece, board, &DIAGONAL_DIRS, &mut moves);
        moves
    }

    fn is_valid_move(&self, piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
        if !validator::is_basic_move_valid(piece, from, to, board) {
            return false;
        }
        let (dx, dy) = ((to.x - from.x).abs(), (to.y - from.y).abs());
        if dx + dy == 1 {
            return true;
        }
        dx == dy && validator::is_path_clear(from, to, board)
    }
}
