use crate::board::Board;
use crate::types::{Piece, Position};

use super::{MovementRule, ORTHOGONAL_DIRS, is_orthogonal_line, slides, validator};

/// Slides any distance along a rank or file; captures the first enemy hit.
pub struct TowerMovement;

impl MovementRule for TowerMovement {
    fn calculate_moves(&self, piece: &Piece, board: &Board) -> Vec<Position> {
        let mut moves = Vec::new();
        slides(piece, board, &ORTHOGONAL_DIRS, &mut moves);
        moves
    }

    fn is_valid_move(&self, piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
        validator::is_basic_move_valid(piece, from, to, board)
            && is_orthogonal_line(from, to)
            && validator::is_path_clear(from, to, board)
    }
}
