//! Turn-ending, cost-free swaps between linked piece kinds.

use crate::board::Board;
use crate::error::ConversionError;
use crate::state::GameState;
use crate::types::{Piece, PieceKind, Player};

/// Two-way links; each kind appears at most once.
pub const CONVERSION_PAIRS: [(PieceKind, PieceKind); 3] = [
    (PieceKind::Guard, PieceKind::Raider),
    (PieceKind::Horse, PieceKind::Elephant),
    (PieceKind::Tower, PieceKind::Artillery),
];

/// The single kind `kind` may convert into, if any.
pub fn conversion_target(kind: PieceKind) -> Option<PieceKind> {
    CONVERSION_PAIRS.iter().find_map(|&(a, b)| {
        if a == kind {
            Some(b)
        } else if b == kind {
            Some(a)
        } else {
            None
        }
    })
}

pub fn can_convert(from: PieceKind, to: PieceKind) -> Result<(), ConversionError> {
    if conversion_target(from) == Some(to) {
        Ok(())
    } else {
        Err(ConversionError::InvalidPair { from, to })
    }
}

pub fn conversion_description(from: PieceKind, to: PieceKind) -> Option<&'static str> {
    use PieceKind::*;
    Some(match (from, to) {
        (Guard, Raider) => "Gain diagonal movement, lose invincibility",
        (Raider, Guard) => "Gain invincibility in home rows, lose diagonal movement",
        (Horse, Elephant) => "Gain +1 capture bonus, lose jumping ability",
        (Elephant, Horse) => "Gain jumping ability, lose capture bonus",
        (Tower, Artillery) => "Gain jump attacks, same movement",
        (Artillery, Tower) => "Lose jump attacks, same movement",
        _ => return None,
    })
}

pub fn convertible_pieces(board: &Board, player: Player) -> Vec<Piece> {
    board
        .pieces_of(player)
        .filter(|piece| conversion_target(piece.kind).is_some())
        .copied()
        .collect()
}

/// Returns the state after converting `piece` in place and ending the turn.
/// Trophies are untouched and nothing moves.
pub fn execute_piece_conversion(
    piece: &Piece,
    target: PieceKind,
    state: &GameState,
) -> Result<GameState, ConversionError> {
    can_convert(piece.kind, target)?;
    if state.board.get(piece.position) != Some(piece) {
        return Err(ConversionError::StalePiece {
            id: piece.id,
            position: piece.position,
        });
    }

    let mut next = state.clone();
    next.board.set(
        piece.position,
        Some(Piece {
            kind: target,
            ..*piece
        }),
    );
    next.advance_turn();

    log::debug!(
        "{} converts {} at {} into {}",
        piece.player,
        piece.kind,
        piece.position,
        target
    );

    Ok(next)
}
