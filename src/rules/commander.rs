use crate::board::{self, Board};
use crate::types::{Piece, Position};

use super::{ALL_DIRS, MovementRule, steps, validator};

/// One step in any of the eight directions.
pub struct CommanderMovement;

impl MovementRule for CommanderMovement {
    fn calculate_moves(&self, piece: &Piece, board: &Board) -> Vec<Position> {
        let mut moves = Vec::with_capacity(8);
        steps(piece, board, &ALL_DIRS, &mut moves);
        moves
    }

    fn is_valid_move(&self, piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
        validator::is_basic_move_valid(piece, from, to, board) && board::distance(from, to) == 1
    }
}
