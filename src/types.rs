use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A board coordinate. `x` is the column, `y` the row (row 0 is Black's back row).
///
/// Coordinates are signed so that offsets can step off the board; use
/// [`Position::in_bounds`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn in_bounds(self) -> bool {
        (0..crate::board::BOARD_SIZE as i32).contains(&self.x)
            && (0..crate::board::BOARD_SIZE as i32).contains(&self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "white",
            Self::Black => "black",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Commander,
    Soldier,
    Guard,
    Raider,
    Horse,
    Elephant,
    Tower,
    Artillery,
}

impl PieceKind {
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Commander,
        PieceKind::Soldier,
        PieceKind::Guard,
        PieceKind::Raider,
        PieceKind::Horse,
        PieceKind::Elephant,
        PieceKind::Tower,
        PieceKind::Artillery,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Commander => "commander",
            Self::Soldier => "soldier",
            Self::Guard => "guard",
            Self::Raider => "raider",
            Self::Horse => "horse",
            Self::Elephant => "elephant",
            Self::Tower => "tower",
            Self::Artillery => "artillery",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown piece type: {s}"))
    }
}

/// Identity token of a piece, unique for the piece's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub player: Player,
    pub position: Position,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(id: u16, kind: PieceKind, player: Player, position: Position) -> Self {
        Self {
            id: PieceId(id),
            kind,
            player,
            position,
            has_moved: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VictoryType {
    Commander,
    Trophy,
}

/// One value per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PerPlayer<T> {
    pub white: T,
    pub black: T,
}

impl<T> PerPlayer<T> {
    pub fn for_player(&self, player: Player) -> &T {
        match player {
            Player::White => &self.white,
            Player::Black => &self.black,
        }
    }

    pub fn for_player_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::White => &mut self.white,
            Player::Black => &mut self.black,
        }
    }
}

impl<T: Copy> PerPlayer<T> {
    pub fn get(&self, player: Player) -> T {
        *self.for_player(player)
    }
}

/// Stored trophy counters.
pub type TrophyPoints = PerPlayer<u32>;

impl PerPlayer<u32> {
    pub fn add(&mut self, player: Player, points: u32) {
        *self.for_player_mut(player) += points;
    }

    /// Removes up to `points`, never going below zero. Returns what was removed.
    pub fn remove(&mut self, player: Player, points: u32) -> u32 {
        let slot = self.for_player_mut(player);
        let removed = points.min(*slot);
        *slot -= removed;
        removed
    }
}
