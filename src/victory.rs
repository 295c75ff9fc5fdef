use serde::Serialize;

use crate::board::Board;
use crate::scoring;
use crate::types::{Piece, PieceKind, Player, TrophyPoints, VictoryType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VictoryResult {
    pub has_won: bool,
    pub winner: Option<Player>,
    pub victory_type: Option<VictoryType>,
    /// Live total of a trophy winner.
    pub winning_total: Option<u32>,
}

impl VictoryResult {
    pub const NONE: Self = Self {
        has_won: false,
        winner: None,
        victory_type: None,
        winning_total: None,
    };

    fn by_commander(winner: Player) -> Self {
        Self {
            has_won: true,
            winner: Some(winner),
            victory_type: Some(VictoryType::Commander),
            winning_total: None,
        }
    }

    fn by_trophies(winner: Player, total: u32) -> Self {
        Self {
            has_won: true,
            winner: Some(winner),
            victory_type: Some(VictoryType::Trophy),
            winning_total: Some(total),
        }
    }

    pub fn message(&self) -> String {
        match (self.winner, self.victory_type) {
            (Some(winner), Some(VictoryType::Commander)) => format!(
                "{} wins by capturing the enemy Commander!",
                winner.to_string().to_uppercase()
            ),
            (Some(winner), Some(VictoryType::Trophy)) => format!(
                "{} wins with {} Trophy Points!",
                winner.to_string().to_uppercase(),
                self.winning_total.unwrap_or(scoring::VICTORY_THRESHOLD)
            ),
            _ => String::new(),
        }
    }
}

/// Evaluates both win conditions after an accepted action.
///
/// A captured Commander wins outright for its captor. Otherwise live trophy
/// totals are compared against the threshold, `mover` first.
pub fn check_victory(
    board: &Board,
    stored: &TrophyPoints,
    captured: Option<&Piece>,
    mover: Player,
) -> VictoryResult {
    if let Some(piece) = captured
        && piece.kind == PieceKind::Commander
    {
        return VictoryResult::by_commander(piece.player.opponent());
    }

    let live = scoring::live_totals(stored, board);
    [mover, mover.opponent()]
        .into_iter()
        .find(|&player| scoring::has_reached_trophy_victory(live.get(player)))
        .map_or(VictoryResult::NONE, |winner| {
            VictoryResult::by_trophies(winner, live.get(winner))
        })
}

pub fn has_commander_on_board(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|piece| piece.kind == PieceKind::Commander)
}
