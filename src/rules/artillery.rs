use crate::board::Board;
use crate::types::{Piece, Position};

use super::{MovementRule, ORTHOGONAL_DIRS, is_orthogonal_line, push_unique, slides, validator};

/// Tower movement plus jump-attacks over exactly one screen piece.
pub struct ArtilleryMovement;

impl ArtilleryMovement {
    /// Along each ray: skip to the first occupied cell (the screen), then the
    /// next occupied cell beyond it is a target when it holds an enemy.
    pub fn jump_attacks(piece: &Piece, board: &Board) -> Vec<Position> {
        let mut attacks = Vec::new();

        for (dx, dy) in ORTHOGONAL_DIRS {
            let mut cursor = piece.position.offset(dx, dy);
            let mut screened = false;

            while cursor.in_bounds() {
                if let Some(occupant) = board.get(cursor) {
                    if screened {
                        if occupant.player != piece.player {
                            attacks.push(cursor);
                        }
                        break;
                    }
                    screened = true;
                }
                cursor = cursor.offset(dx, dy);
            }
        }

        attacks
    }

    fn is_jump_attack(piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
        validator::has_enemy_piece(to, piece.player, board)
            && validator::count_between(from, to, board) == Some(1)
    }
}

impl MovementRule for ArtilleryMovement {
    fn calculate_moves(&self, piece: &Piece, board: &Board) -> Vec<Position> {
        let mut moves = Vec::new();
        slides(piece, board, &ORTHOGONAL_DIRS, &mut moves);
        for to in Self::jump_attacks(piece, board) {
            push_unique(&mut moves, to);
        }
        moves
    }

    fn is_valid_move(&self, piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
        if !validator::is_basic_move_valid(piece, from, to, board) || !is_orthogonal_line(from, to) {
            return false;
        }
        validator::is_path_clear(from, to, board) || Self::is_jump_attack(piece, from, to, board)
    }
}
