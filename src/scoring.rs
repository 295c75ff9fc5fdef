//! Trophy points: capture values and the live special-square bonus.

use crate::board::{Board, MIDDLE_ROW};
use crate::types::{PieceKind, Player, Position, TrophyPoints};

pub const VICTORY_THRESHOLD: u32 = 21;
pub const ELEPHANT_CAPTURE_BONUS: u32 = 1;
pub const SPECIAL_POSITIONS: [Position; 3] = [
    Position::new(1, MIDDLE_ROW),
    Position::new(3, MIDDLE_ROW),
    Position::new(5, MIDDLE_ROW),
];

pub fn base_piece_points(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Soldier => 1,
        PieceKind::Commander
        | PieceKind::Guard
        | PieceKind::Raider
        | PieceKind::Horse
        | PieceKind::Elephant
        | PieceKind::Tower
        | PieceKind::Artillery => 2,
    }
}

/// Points awarded for capturing a piece of `kind`.
pub fn capture_points(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Elephant => base_piece_points(kind) + ELEPHANT_CAPTURE_BONUS,
        _ => base_piece_points(kind),
    }
}

pub fn is_special_position(pos: Position) -> bool {
    SPECIAL_POSITIONS.contains(&pos)
}

/// One point per special square currently held by `player`.
pub fn special_position_bonus(board: &Board, player: Player) -> u32 {
    SPECIAL_POSITIONS
        .iter()
        .filter(|&&pos| board.get(pos).is_some_and(|piece| piece.player == player))
        .count() as u32
}

pub fn calculate_total_points(stored: u32, board: &Board, player: Player) -> u32 {
    stored + special_position_bonus(board, player)
}

/// Stored counters plus the live special-square bonus, for both players.
pub fn live_totals(stored: &TrophyPoints, board: &Board) -> TrophyPoints {
    TrophyPoints {
        white: calculate_total_points(stored.white, board, Player::White),
        black: calculate_total_points(stored.black, board, Player::Black),
    }
}

pub fn has_reached_trophy_victory(total: u32) -> bool {
    total >= VICTORY_THRESHOLD
}

pub fn scoring_info(kind: PieceKind) -> String {
    let points = base_piece_points(kind);
    match kind {
        PieceKind::Elephant => format!(
            "{points} + {ELEPHANT_CAPTURE_BONUS} bonus = {} Trophy Points",
            capture_points(kind)
        ),
        _ if points == 1 => format!("{points} Trophy Point"),
        _ => format!("{points} Trophy Points"),
    }
}
