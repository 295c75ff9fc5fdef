//! Stateless geometry and occupancy predicates shared by every movement rule.

use crate::board::{self, Board, MIDDLE_ROW};
use crate::types::{Piece, Player, Position};

pub fn is_within_bounds(pos: Position) -> bool {
    pos.in_bounds()
}

/// `false` for out-of-bounds cells.
pub fn is_empty(pos: Position, board: &Board) -> bool {
    board.is_empty_at(pos)
}

pub fn piece_at(pos: Position, board: &Board) -> Option<&Piece> {
    board.get(pos)
}

pub fn has_enemy_piece(pos: Position, player: Player, board: &Board) -> bool {
    board.get(pos).is_some_and(|piece| piece.player != player)
}

pub fn has_friendly_piece(pos: Position, player: Player, board: &Board) -> bool {
    board.get(pos).is_some_and(|piece| piece.player == player)
}

/// Destination in bounds, not the source, and not holding a friendly piece.
pub fn is_basic_move_valid(piece: &Piece, from: Position, to: Position, board: &Board) -> bool {
    from != to && is_within_bounds(to) && !has_friendly_piece(to, piece.player, board)
}

/// Walks unit steps from `from` towards `to`, both ends excluded. Only
/// meaningful for orthogonal or diagonal lines.
pub fn is_path_clear(from: Position, to: Position, board: &Board) -> bool {
    count_between(from, to, board) == Some(0)
}

/// Number of occupied cells strictly between `from` and `to`, or `None` if the
/// two positions are not on a common orthogonal or diagonal line.
pub fn count_between(from: Position, to: Position, board: &Board) -> Option<usize> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if (dx, dy) == (0, 0) || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
        return None;
    }

    let (step_x, step_y) = (dx.signum(), dy.signum());
    let mut current = from.offset(step_x, step_y);
    let mut occupied = 0;

    while current != to {
        if !is_empty(current, board) {
            occupied += 1;
        }
        current = current.offset(step_x, step_y);
    }

    Some(occupied)
}

pub fn is_in_home_rows(pos: Position, player: Player) -> bool {
    board::is_in_home_rows(pos, player)
}

pub fn is_in_middle_row(pos: Position) -> bool {
    pos.y == MIDDLE_ROW
}

/// Row delta pointing at the opponent: White advances towards row 0.
pub fn forward_direction(player: Player) -> i32 {
    match player {
        Player::White => -1,
        Player::Black => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn place(board: &mut Board, id: u16, kind: PieceKind, player: Player, at: Position) {
        board.set(at, Some(Piece::new(id, kind, player, at)));
    }

    #[test]
    fn path_clear_checks_orthogonal_and_diagonal_lines() {
        let mut board = Board::empty();
        place(&mut board, 1, PieceKind::Soldier, Player::Black, pos(3, 3));

        assert!(!is_path_clear(pos(3, 0), pos(3, 6), &board));
        assert!(is_path_clear(pos(3, 0), pos(3, 3), &board));
        assert!(!is_path_clear(pos(0, 0), pos(5, 5), &board));
        assert!(!is_path_clear(pos(0, 6), pos(6, 0), &board));
        assert!(is_path_clear(pos(0, 1), pos(5, 6), &board));
        assert!(!is_path_clear(pos(0, 0), pos(1, 2), &board));
    }

    #[test]
    fn count_between_counts_every_occupied_cell() {
        let mut board = Board::empty();
        place(&mut board, 1, PieceKind::Soldier, Player::Black, pos(0, 2));
        place(&mut board, 2, PieceKind::Soldier, Player::White, pos(0, 4));

        assert_eq!(count_between(pos(0, 0), pos(0, 6), &board), Some(2));
        assert_eq!(count_between(pos(0, 0), pos(0, 3), &board), Some(1));
        assert_eq!(count_between(pos(0, 0), pos(2, 1), &board), None);
    }

    #[test]
    fn basic_move_rejects_friendly_and_null_moves() {
        let mut board = Board::empty();
        let mover = Piece::new(1, PieceKind::Commander, Player::White, pos(3, 3));
        place(&mut board, 1, PieceKind::Commander, Player::White, pos(3, 3));
        place(&mut board, 2, PieceKind::Soldier, Player::White, pos(3, 4));
        place(&mut board, 3, PieceKind::Soldier, Player::Black, pos(3, 2));

        assert!(!is_basic_move_valid(&mover, pos(3, 3), pos(3, 3), &board));
        assert!(!is_basic_move_valid(&mover, pos(3, 3), pos(3, 4), &board));
        assert!(is_basic_move_valid(&mover, pos(3, 3), pos(3, 2), &board));
        assert!(!is_basic_move_valid(&mover, pos(0, 0), pos(0, -1), &board));
    }

    #[test]
    fn zones_and_direction() {
        assert!(is_in_middle_row(pos(5, 3)));
        assert!(!is_in_middle_row(pos(5, 4)));
        assert!(is_in_home_rows(pos(2, 0), Player::Black));
        assert_eq!(forward_direction(Player::White), -1);
        assert_eq!(forward_direction(Player::Black), 1);
    }
}
