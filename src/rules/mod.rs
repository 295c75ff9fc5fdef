//! Per-piece movement rules behind one contract, dispatched by piece kind.

pub mod artillery;
pub mod commander;
pub mod elephant;
pub mod guard;
pub mod horse;
pub mod raider;
pub mod soldier;
pub mod tower;
pub mod validator;

use crate::board::Board;
use crate::types::{Piece, PieceKind, Position};

pub use artillery::ArtilleryMovement;
pub use commander::CommanderMovement;
pub use elephant::ElephantMovement;
pub use guard::GuardMovement;
pub use horse::HorseMovement;
pub use raider::RaiderMovement;
pub use soldier::SoldierMovement;
pub use tower::TowerMovement;

pub const ORTHOGONAL_DIRS: [(i32, i32); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRS: [(i32, i32); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];
pub const ALL_DIRS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];
pub const HORSE_DELTAS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub trait MovementRule: Send + Sync {
    /// All legal destinations from the piece's current square, captures included.
    fn calculate_moves(&self, piece: &Piece, board: &Board) -> Vec<Position>;

    /// Destinations from [`MovementRule::calculate_moves`] that land on an enemy.
    fn calculate_attacks(&self, piece: &Piece, board: &Board) -> Vec<Position> {
        self.calculate_moves(piece, board)
            .into_iter()
            .filter(|&pos| validator::has_enemy_piece(pos, piece.player, board))
            .collect()
    }

    fn is_valid_move(&self, piece: &Piece, from: Position, to: Position, board: &Board) -> bool;

    fn can_capture(&self, piece: &Piece, target: Position, board: &Board) -> bool {
        self.is_valid_move(piece, piece.position, target, board)
            && validator::has_enemy_piece(target, piece.player, board)
    }
}

pub fn rule_for(kind: PieceKind) -> &'static dyn MovementRule {
    match kind {
        PieceKind::Commander => &CommanderMovement,
        PieceKind::Soldier => &SoldierMovement,
        PieceKind::Guard => &GuardMovement,
        PieceKind::Raider => &RaiderMovement,
        PieceKind::Horse => &HorseMovement,
        PieceKind::Elephant => &ElephantMovement,
        PieceKind::Tower => &TowerMovement,
        PieceKind::Artillery => &ArtilleryMovement,
    }
}

pub fn get_possible_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    rule_for(piece.kind).calculate_moves(piece, board)
}

pub fn get_possible_attacks(piece: &Piece, board: &Board) -> Vec<Position> {
    rule_for(piece.kind).calculate_attacks(piece, board)
}

/// Off-board squares are rejected before any rule runs.
pub fn is_valid_move(piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
    from.in_bounds() && to.in_bounds() && rule_for(piece.kind).is_valid_move(piece, from, to, board)
}

pub fn can_capture(piece: &Piece, target: Position, board: &Board) -> bool {
    piece.position.in_bounds()
        && target.in_bounds()
        && rule_for(piece.kind).can_capture(piece, target, board)
}

fn push_unique(moves: &mut Vec<Position>, pos: Position) {
    if !moves.contains(&pos) {
        moves.push(pos);
    }
}

/// Single steps along `dirs` that pass the basic legality test.
fn steps(piece: &Piece, board: &Board, dirs: &[(i32, i32)], moves: &mut Vec<Position>) {
    for &(dx, dy) in dirs {
        let to = piece.position.offset(dx, dy);
        if validator::is_basic_move_valid(piece, piece.position, to, board) {
            push_unique(moves, to);
        }
    }
}

/// Slides along each of `dirs` until the edge or the first occupied cell,
/// which is included when it holds an enemy.
fn slides(piece: &Piece, board: &Board, dirs: &[(i32, i32)], moves: &mut Vec<Position>) {
    for &(dx, dy) in dirs {
        let mut to = piece.position.offset(dx, dy);
        while to.in_bounds() {
            match board.get(to) {
                None => push_unique(moves, to),
                Some(occupant) => {
                    if occupant.player != piece.player {
                        push_unique(moves, to);
                    }
                    break;
                }
            }
            to = to.offset(dx, dy);
        }
    }
}

fn is_orthogonal_line(from: Position, to: Position) -> bool {
    (from.x == to.x) != (from.y == to.y)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::board::Board;
    use crate::types::{Piece, PieceKind, Player, Position};

    pub fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// Places a piece and returns a copy of it as stored on the board.
    pub fn place(board: &mut Board, kind: PieceKind, player: Player, at: Position) -> Piece {
        let id = board.pieces().map(|p| p.id.0 + 1).max().unwrap_or(0);
        let piece = Piece::new(id, kind, player, at);
        board.set(at, Some(piece));
        piece
    }

    pub fn sorted(mut moves: Vec<Position>) -> Vec<Position> {
        moves.sort_by_key(|p| (p.y, p.x));
        moves
    }
}
