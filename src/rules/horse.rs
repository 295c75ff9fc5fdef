use crate::board::Board;
use crate::types::{Piece, Position};

use super::{HORSE_DELTAS, MovementRule, steps, validator};

/// Knight offsets; jumps over anything in between.
pub struct HorseMovement;

impl MovementRule for HorseMovement {
    fn calculate_moves(&self, piece: &Piece, board: &Board) -> Vec<Position> {
        let mut moves = Vec::with_capacity(8);
        steps(piece, board, &HORSE_DELTAS, &mut moves);
        moves
    }

    fn is_valid_move(&self, piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
        let (dx, dy) = ((to.x - from.x).abs(), (to.y - from.y).abs());
        validator::is_basic_move_valid(piece, from, to, board)
            && matches!((dx, dy), (1, 2) | (2, 1))
    }
}
