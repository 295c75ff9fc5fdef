use crate::board::Board;
use crate::types::{Piece, PieceKind, Position};

use super::{MovementRule, ORTHOGONAL_DIRS, steps, validator};

/// One orthogonal step. Cannot be captured while inside its owner's home rows.
pub struct GuardMovement;

impl GuardMovement {
    pub fn is_invincible(piece: &Piece) -> bool {
        piece.kind == PieceKind::Guard && validator::is_in_home_rows(piece.position, piece.player)
    }
}

impl MovementRule for GuardMovement {
    fn calculate_moves(&self, piece: &Piece, board: &Board) -> Vec<Position> {
        let mut moves = Vec::with_capacity(4);
        steps(piece, board, &ORTHOGONAL_DIRS, &mut moves);
        moves
    }

    fn is_valid_move(&self, piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
        let (dx, dy) = ((to.x - from.x).abs(), (to.y - from.y).abs());
        validator::is_basic_move_valid(piece, from, to, board) && dx + dy == 1
    }
}

/// Whether any opposing move may take `piece`.
pub fn can_be_captured(piece: &Piece) -> bool {
    !GuardMovement::is_invincible(piece)
}
