use serde::Serialize;

use crate::types::{Piece, PieceKind, Player, Position};

pub const BOARD_SIZE: usize = 7;
pub const MIDDLE_ROW: i32 = 3;
const HOME_ROW_DEPTH: i32 = 3;

const BACK_ROW: [(i32, PieceKind); 7] = [
    (0, PieceKind::Tower),
    (1, PieceKind::Horse),
    (2, PieceKind::Elephant),
    (3, PieceKind::Commander),
    (4, PieceKind::Elephant),
    (5, PieceKind::Horse),
    (6, PieceKind::Tower),
];
const SECOND_ROW: [(i32, PieceKind); 5] = [
    (1, PieceKind::Guard),
    (2, PieceKind::Artillery),
    (3, PieceKind::Raider),
    (4, PieceKind::Artillery),
    (5, PieceKind::Guard),
];

/// 7x7 grid of intersections, addressed `[y][x]`.
///
/// Invariant: every stored piece's `position` equals the cell holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the starting layout: White on rows 4..=6, Black mirrored on rows 0..=2.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let mut next_id = 0u16;

        for player in [Player::White, Player::Black] {
            let back = back_row(player);
            let forward = if player == Player::White { -1 } else { 1 };

            let layout = BACK_ROW
                .iter()
                .map(|&(x, kind)| (x, back, kind))
                .chain(SECOND_ROW.iter().map(|&(x, kind)| (x, back + forward, kind)))
                .chain((0..BOARD_SIZE as i32).map(|x| (x, back + 2 * forward, PieceKind::Soldier)));

            for (x, y, kind) in layout {
                let pos = Position::new(x, y);
                board.set(pos, Some(Piece::new(next_id, kind, player, pos)));
                next_id += 1;
            }
        }

        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn is_in_bounds(pos: Position) -> bool {
        pos.in_bounds()
    }

    /// Returns the piece at `pos`, or `None` when the cell is empty or off the board.
    pub fn get(&self, pos: Position) -> Option<&Piece> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells[pos.y as usize][pos.x as usize].as_ref()
    }

    /// Places `piece` (or clears the cell). The stored piece's position is
    /// rewritten to `pos`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if !pos.in_bounds() {
            return;
        }
        self.cells[pos.y as usize][pos.x as usize] = piece.map(|mut p| {
            p.position = pos;
            p
        });
    }

    /// Removes and returns the piece at `pos`.
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells[pos.y as usize][pos.x as usize].take()
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.in_bounds() && self.get(pos).is_none()
    }

    /// Iterates over all pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.player == player)
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Chebyshev distance.
pub fn distance(from: Position, to: Position) -> i32 {
    (from.x - to.x).abs().max((from.y - to.y).abs())
}

/// The three rows nearest `player`'s starting edge.
pub fn home_rows(player: Player) -> [i32; HOME_ROW_DEPTH as usize] {
    let back = back_row(player);
    let step = if player == Player::White { -1 } else { 1 };
    [back, back + step, back + 2 * step]
}

pub fn is_in_home_rows(pos: Position, player: Player) -> bool {
    home_rows(player).contains(&pos.y)
}

fn back_row(player: Player) -> i32 {
    match player {
        Player::White => BOARD_SIZE as i32 - 1,
        Player::Black => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn t01_initial_layout_is_mirrored() {
        let board = Board::new();

        assert_eq!(board.count(Player::White), 19);
        assert_eq!(board.count(Player::Black), 19);

        for x in 0..BOARD_SIZE as i32 {
            let white = board.get(pos(x, 6)).map(|p| p.kind);
            let black = board.get(pos(x, 0)).map(|p| p.kind);
            assert_eq!(white, black);

            assert_eq!(board.get(pos(x, 4)).map(|p| p.kind), Some(PieceKind::Soldier));
            assert_eq!(board.get(pos(x, 2)).map(|p| p.kind), Some(PieceKind::Soldier));
            assert!(board.get(pos(x, MIDDLE_ROW)).is_none());
        }

        assert_eq!(board.get(pos(3, 6)).map(|p| p.kind), Some(PieceKind::Commander));
        assert_eq!(board.get(pos(1, 1)).map(|p| p.kind), Some(PieceKind::Guard));
        assert!(board.get(pos(0, 5)).is_none());
        assert!(board.get(pos(6, 1)).is_none());
    }

    #[test]
    fn piece_ids_are_unique_and_positions_match_cells() {
        let board = Board::new();
        let mut ids: Vec<_> = board.pieces().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 38);

        for y in 0..BOARD_SIZE as i32 {
            for x in 0..BOARD_SIZE as i32 {
                if let Some(piece) = board.get(pos(x, y)) {
                    assert_eq!(piece.position, pos(x, y));
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_access_is_silent() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(board.get(pos(-1, 3)).is_none());
        assert!(board.get(pos(3, 7)).is_none());
        assert!(!board.is_empty_at(pos(7, 7)));
        board.set(pos(9, 9), None);
        assert!(board.take(pos(-2, 0)).is_none());

        assert_eq!(board, before);
    }

    #[test]
    fn set_rewrites_piece_position() {
        let mut board = Board::empty();
        let piece = Piece::new(1, PieceKind::Horse, Player::White, pos(0, 0));

        board.set(pos(4, 2), Some(piece));

        assert_eq!(board.get(pos(4, 2)).map(|p| p.position), Some(pos(4, 2)));
        assert!(board.get(pos(0, 0)).is_none());
    }

    #[test]
    fn home_rows_and_distance() {
        assert_eq!(home_rows(Player::White), [6, 5, 4]);
        assert_eq!(home_rows(Player::Black), [0, 1, 2]);
        assert!(is_in_home_rows(pos(0, 4), Player::White));
        assert!(!is_in_home_rows(pos(0, MIDDLE_ROW), Player::White));
        assert!(!is_in_home_rows(pos(0, MIDDLE_ROW), Player::Black));

        assert_eq!(distance(pos(0, 0), pos(3, 1)), 3);
        assert_eq!(distance(pos(2, 2), pos(2, 2)), 0);
    }
}
