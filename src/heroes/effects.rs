//! Battlefield effects of active abilities, keyed by ability id.
//!
//! The engine only tracks unlocks and cooldowns; an ability without a
//! registered handler is pure meta-state.

use std::collections::HashMap;

use crate::board::Board;
use crate::error::AbilityError;
use crate::rules::validator;
use crate::types::{Player, Position, TrophyPoints};

use super::run_state::{BountyMark, HeroRunState};

pub const PIRACY_STEAL: u32 = 1;

/// What an effect may read and write while resolving.
pub struct EffectContext<'a> {
    pub player: Player,
    pub target: Option<Position>,
    pub board: &'a Board,
    pub trophies: &'a mut TrophyPoints,
    pub heroes: &'a mut HeroRunState,
}

pub trait AbilityEffect: Send + Sync {
    fn apply(&self, ctx: &mut EffectContext<'_>) -> Result<(), AbilityError>;
}

/// Marks the targeted opposing piece for an extra trophy on capture.
#[derive(Debug, Default, Clone, Copy)]
pub struct BountyEffect;

impl AbilityEffect for BountyEffect {
    fn apply(&self, ctx: &mut EffectContext<'_>) -> Result<(), AbilityError> {
        let invalid = || AbilityError::InvalidTarget {
            id: "bounty".to_string(),
        };
        let target = ctx.target.ok_or_else(invalid)?;
        if !validator::has_enemy_piece(target, ctx.player, ctx.board) {
            return Err(invalid());
        }

        let added = ctx.heroes.add_bounty(BountyMark {
            position: target,
            player: ctx.player,
        });
        if added { Ok(()) } else { Err(invalid()) }
    }
}

/// Takes a trophy from the opponent's stored counter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PiracyEffect;

impl AbilityEffect for PiracyEffect {
    fn apply(&self, ctx: &mut EffectContext<'_>) -> Result<(), AbilityError> {
        let removed = ctx.trophies.remove(ctx.player.opponent(), PIRACY_STEAL);
        log::debug!("{} plunders {removed} trophy from {}", ctx.player, ctx.player.opponent());
        Ok(())
    }
}

pub struct EffectRegistry {
    handlers: HashMap<&'static str, Box<dyn AbilityEffect>>,
}

impl EffectRegistry {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Installs `handler` for `id`, replacing any previous one.
    pub fn register(&mut self, id: &'static str, handler: Box<dyn AbilityEffect>) {
        self.handlers.insert(id, handler);
    }

    pub fn has_handler(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn apply(&self, id: &str, ctx: &mut EffectContext<'_>) -> Result<(), AbilityError> {
        match self.handlers.get(id) {
            Some(handler) => handler.apply(ctx),
            None => Ok(()),
        }
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("bounty", Box::new(BountyEffect));
        registry.register("piracy", Box::new(PiracyEffect));
        registry
    }
}
