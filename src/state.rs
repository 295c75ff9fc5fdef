use serde::Serialize;

use crate::board::Board;
use crate::scoring;
use crate::types::{GamePhase, Piece, Player, Position, TrophyPoints, VictoryType};

/// Authoritative match state plus the transient selection cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub trophy_points: TrophyPoints,
    pub turn_count: u32,
    pub phase: GamePhase,
    pub winner: Option<Player>,
    pub victory_type: Option<VictoryType>,
    /// UI cache, not game data.
    pub selected_piece: Option<Piece>,
    pub possible_moves: Vec<Position>,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            current_player: Player::White,
            trophy_points: TrophyPoints::default(),
            turn_count: 1,
            phase: GamePhase::Playing,
            winner: None,
            victory_type: None,
            selected_piece: None,
            possible_moves: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Passes the move to the other side; the counter ticks after Black.
    pub fn advance_turn(&mut self) {
        if self.current_player == Player::Black {
            self.turn_count += 1;
        }
        self.current_player = self.current_player.opponent();
        self.clear_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selected_piece = None;
        self.possible_moves.clear();
    }

    pub fn live_trophies(&self) -> TrophyPoints {
        scoring::live_totals(&self.trophy_points, &self.board)
    }

    pub fn declare_winner(&mut self, winner: Player, victory_type: VictoryType) {
        self.phase = GamePhase::GameOver;
        self.winner = Some(winner);
        self.victory_type = Some(victory_type);
        self.clear_selection();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
