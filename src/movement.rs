//! Validates and applies a single move on a board.

use serde::Serialize;

use crate::board::Board;
use crate::error::MoveError;
use crate::rules::{self, guard};
use crate::scoring;
use crate::types::{Piece, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    /// The moved piece as it now stands on the board.
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
    pub trophy_delta: u32,
}

/// Moves the piece at `from` to `to`.
///
/// The board is only written once every check has passed; on error it is
/// left untouched.
pub fn execute_move(board: &mut Board, from: Position, to: Position) -> Result<MoveOutcome, MoveError> {
    let piece = *board.get(from).ok_or(MoveError::NoPiece { from })?;

    if !to.in_bounds() || !rules::is_valid_move(&piece, from, to, board) {
        return Err(MoveError::InvalidMove {
            kind: piece.kind,
            from,
            to,
        });
    }

    if let Some(target) = board.get(to)
        && !guard::can_be_captured(target)
    {
        return Err(MoveError::GuardInvincible {
            guard: target.id,
            owner: target.player,
            position: target.position,
        });
    }

    let moved = Piece {
        position: to,
        has_moved: true,
        ..piece
    };
    let captured = board.take(to);
    board.take(from);
    board.set(to, Some(moved));

    let trophy_delta = captured.map_or(0, |piece| scoring::capture_points(piece.kind));

    log::debug!(
        "{} {} {} -> {}{}",
        moved.player,
        moved.kind,
        from,
        to,
        captured.map_or(String::new(), |c| format!(" captures {}", c.kind))
    );

    Ok(MoveOutcome {
        piece: moved,
        from,
        to,
        captured,
        trophy_delta,
    })
}
