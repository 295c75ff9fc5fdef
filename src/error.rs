use serde::Serialize;
use thiserror::Error;

use crate::types::{PieceId, PieceKind, Player, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("No piece at source position {from}")]
    NoPiece { from: Position },

    #[error("Invalid move for {kind} from {from} to {to}")]
    InvalidMove {
        kind: PieceKind,
        from: Position,
        to: Position,
    },

    #[error("Cannot capture invincible Guard at {position} in {owner}'s home rows")]
    GuardInvincible {
        guard: PieceId,
        owner: Player,
        position: Position,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid conversion pair: {from} -> {to}")]
    InvalidPair { from: PieceKind, to: PieceKind },

    #[error("Piece {id:?} is no longer at {position}")]
    StalePiece { id: PieceId, position: Position },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbilityError {
    #[error("No hero assigned to {player}")]
    NoHero { player: Player },

    #[error("Ability {id} not found")]
    NotFound { id: String },

    #[error("Ability {id} is on cooldown ({remaining} turns left)")]
    OnCooldown { id: String, remaining: u32 },

    #[error("Ability {id} is not unlocked ({required} Trophy Points required)")]
    NotUnlocked { id: String, required: u32 },

    #[error("Ability {id} needs a valid target")]
    InvalidTarget { id: String },
}

/// Rejection of a single requested action. Nothing is applied when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game is already over")]
    GameOver,

    #[error("It is {expected}'s turn")]
    NotYourTurn { expected: Player },

    #[error("No piece at {at}")]
    NoPiece { at: Position },

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Ability(#[from] AbilityError),
}

/// Extra context the presentation layer needs to explain a guard refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardDetails {
    pub guard_id: PieceId,
    pub guard_player: Player,
    pub guard_position: Position,
}

impl GameError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::GameOver => "game_over",
            Self::NotYourTurn { .. } => "not_your_turn",
            Self::NoPiece { .. } | Self::Move(MoveError::NoPiece { .. }) => "no_piece",
            Self::Move(MoveError::InvalidMove { .. }) => "invalid_move",
            Self::Move(MoveError::GuardInvincible { .. }) => "guard_invincible",
            Self::Conversion(ConversionError::InvalidPair { .. }) => "invalid_conversion",
            Self::Conversion(ConversionError::StalePiece { .. }) => "stale_piece",
            Self::Ability(AbilityError::NoHero { .. }) => "no_hero",
            Self::Ability(AbilityError::NotFound { .. }) => "ability_not_found",
            Self::Ability(AbilityError::OnCooldown { .. }) => "ability_on_cooldown",
            Self::Ability(AbilityError::NotUnlocked { .. }) => "ability_not_unlocked",
            Self::Ability(AbilityError::InvalidTarget { .. }) => "ability_invalid_target",
        }
    }

    pub fn guard_details(&self) -> Option<GuardDetails> {
        match *self {
            Self::Move(MoveError::GuardInvincible {
                guard,
                owner,
                position,
            }) => Some(GuardDetails {
                guard_id: guard,
                guard_player: owner,
                guard_position: position,
            }),
            _ => None,
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code(),
            message: self.to_string(),
            details: self.guard_details(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<GuardDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_refusal_carries_details() {
        let err = GameError::from(MoveError::GuardInvincible {
            guard: PieceId(7),
            owner: Player::Black,
            position: Position::new(2, 0),
        });

        assert_eq!(err.code(), "guard_invincible");
        let payload = err.to_payload();
        assert_eq!(
            payload.details,
            Some(GuardDetails {
                guard_id: PieceId(7),
                guard_player: Player::Black,
                guard_position: Position::new(2, 0),
            })
        );
        assert!(payload.message.contains("black"));
    }

    #[test]
    fn codes_are_distinct_for_ability_failures() {
        let codes = [
            GameError::from(AbilityError::NotFound { id: "x".into() }).code(),
            GameError::from(AbilityError::OnCooldown {
                id: "x".into(),
                remaining: 1,
            })
            .code(),
            GameError::from(AbilityError::NotUnlocked {
                id: "x".into(),
                required: 4,
            })
            .code(),
        ];
        assert_eq!(
            codes,
            ["ability_not_found", "ability_on_cooldown", "ability_not_unlocked"]
        );
        assert!(GameError::GameOver.guard_details().is_none());
    }
}
