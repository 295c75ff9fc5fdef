use crate::board::Board;
use crate::types::{Piece, Position};

use super::{MovementRule, push_unique, validator};

/// Steps forward onto empty squares, captures diagonally forward, and may
/// step sideways (moving or capturing) while on the middle row.
pub struct SoldierMovement;

impl SoldierMovement {
    fn diagonal_captures(piece: &Piece, board: &Board) -> impl Iterator<Item = Position> {
        let forward = validator::forward_direction(piece.player);
        let player = piece.player;
        let origin = piece.position;
        [-1, 1]
            .into_iter()
            .map(move |dx| origin.offset(dx, forward))
            .filter(move |&to| validator::has_enemy_piece(to, player, board))
    }

    fn sideways(piece: &Piece) -> [Position; 2] {
        [piece.position.offset(-1, 0), piece.position.offset(1, 0)]
    }
}

impl MovementRule for SoldierMovement {
    fn calculate_moves(&self, piece: &Piece, board: &Board) -> Vec<Position> {
        let mut moves = Vec::with_capacity(5);
        let forward = piece
            .position
            .offset(0, validator::forward_direction(piece.player));

        if validator::is_empty(forward, board) {
            push_unique(&mut moves, forward);
        }
        for to in Self::diagonal_captures(piece, board) {
            push_unique(&mut moves, to);
        }
        if validator::is_in_middle_row(piece.position) {
            for to in Self::sideways(piece) {
                if validator::is_basic_move_valid(piece, piece.position, to, board) {
                    push_unique(&mut moves, to);
                }
            }
        }

        moves
    }

    fn is_valid_move(&self, piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
        if !validator::is_basic_move_valid(piece, from, to, board) {
            return false;
        }

        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let forward = validator::forward_direction(piece.player);

        match (dx.abs(), dy) {
            (0, dy) if dy == forward => validator::is_empty(to, board),
            (1, dy) if dy == forward => validator::has_enemy_piece(to, piece.player, board),
            (1, 0) => validator::is_in_middle_row(from),
            _ => false,
        }
    }
}
