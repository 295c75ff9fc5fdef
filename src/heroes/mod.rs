//! Heroes: per-player ability sets with trophy unlocks, cooldowns and passive hooks.

pub mod catalog;
pub mod effects;
pub mod run_state;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AbilityError;

pub use effects::{AbilityEffect, EffectContext, EffectRegistry};
pub use run_state::{BountyMark, FreeMark, HeroRunState, MarkRing};

/// Trophy totals at which the three active abilities unlock.
pub const UNLOCK_THRESHOLDS: [u32; 3] = [4, 7, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroKind {
    Alexander,
    Genghis,
    Napoleon,
    Washington,
    Anne,
    Che,
}

impl HeroKind {
    pub const ALL: [HeroKind; 6] = [
        HeroKind::Alexander,
        HeroKind::Genghis,
        HeroKind::Napoleon,
        HeroKind::Washington,
        HeroKind::Anne,
        HeroKind::Che,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Alexander => "alexander",
            Self::Genghis => "genghis",
            Self::Napoleon => "napoleon",
            Self::Washington => "washington",
            Self::Anne => "anne",
            Self::Che => "che",
        }
    }
}

impl fmt::Display for HeroKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HeroKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeroKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown hero: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityKind {
    Passive,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: AbilityKind,
    pub cooldown: u32,
    pub current_cooldown: u32,
    pub description: &'static str,
    pub unlock_trophies: Option<u32>,
}

impl Ability {
    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub kind: HeroKind,
    pub name: &'static str,
    pub passive_ability: Ability,
    pub active_abilities: [Ability; 3],
    /// Derived from the owner's live trophy total.
    pub unlocked_abilities: Vec<&'static str>,
}

impl Hero {
    /// A fresh hero with every cooldown at zero and nothing unlocked.
    pub fn new(kind: HeroKind) -> Self {
        catalog::template(kind).clone()
    }

    pub fn ability(&self, id: &str) -> Option<&Ability> {
        self.active_abilities.iter().find(|ability| ability.id == id)
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked_abilities.iter().any(|&unlocked| unlocked == id)
    }

    /// Recomputes the unlocked set from `total` and returns the ids that were
    /// not unlocked before.
    pub fn update_unlocked_abilities(&mut self, total: u32) -> Vec<&'static str> {
        let unlocked: Vec<&'static str> = self
            .active_abilities
            .iter()
            .filter(|ability| ability.unlock_trophies.is_some_and(|needed| total >= needed))
            .map(|ability| ability.id)
            .collect();

        let fresh = unlocked
            .iter()
            .copied()
            .filter(|id| !self.is_unlocked(id))
            .collect();
        self.unlocked_abilities = unlocked;
        fresh
    }

    pub fn reduce_cooldowns(&mut self) {
        for ability in &mut self.active_abilities {
            ability.current_cooldown = ability.current_cooldown.saturating_sub(1);
        }
    }

    /// Takes one turn off the ability with the longest remaining cooldown.
    pub fn reduce_longest_cooldown(&mut self) -> Option<&'static str> {
        let ability = self
            .active_abilities
            .iter_mut()
            .filter(|ability| ability.current_cooldown > 0)
            .max_by_key(|ability| ability.current_cooldown)?;
        ability.current_cooldown -= 1;
        Some(ability.id)
    }

    /// Puts `id` on cooldown if it exists, is off cooldown and is unlocked.
    pub fn activate(&mut self, id: &str) -> Result<&Ability, AbilityError> {
        let unlocked = self.is_unlocked(id);
        let ability = self
            .active_abilities
            .iter_mut()
            .find(|ability| ability.id == id)
            .ok_or_else(|| AbilityError::NotFound { id: id.to_string() })?;

        if ability.current_cooldown > 0 {
            return Err(AbilityError::OnCooldown {
                id: id.to_string(),
                remaining: ability.current_cooldown,
            });
        }
        if !unlocked {
            return Err(AbilityError::NotUnlocked {
                id: id.to_string(),
                required: ability.unlock_trophies.unwrap_or(0),
            });
        }

        ability.current_cooldown = ability.cooldown;
        Ok(ability)
    }

    pub fn can_activate(&self, id: &str) -> bool {
        self.ability(id)
            .is_some_and(|ability| ability.is_ready() && self.is_unlocked(id))
    }

    pub fn available_abilities(&self) -> impl Iterator<Item = &Ability> + '_ {
        self.active_abilities
            .iter()
            .filter(|ability| ability.is_ready() && self.is_unlocked(ability.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abilities_unlock_at_ascending_thresholds() {
        let mut hero = Hero::new(HeroKind::Alexander);
        assert!(hero.unlocked_abilities.is_empty());

        assert!(hero.update_unlocked_abilities(3).is_empty());
        assert_eq!(hero.update_unlocked_abilities(4), vec!["companion_cavalry"]);
        assert!(hero.update_unlocked_abilities(5).is_empty());
        assert_eq!(
            hero.update_unlocked_abilities(12),
            vec!["phalanx", "hammer_and_anvil"]
        );
        assert_eq!(hero.unlocked_abilities.len(), 3);
    }

    #[test]
    fn activation_preconditions() {
        let mut hero = Hero::new(HeroKind::Che);

        assert_eq!(
            hero.activate("nope").unwrap_err(),
            AbilityError::NotFound { id: "nope".into() }
        );
        assert_eq!(
            hero.activate("guerrilla_warfare").unwrap_err(),
            AbilityError::NotUnlocked {
                id: "guerrilla_warfare".into(),
                required: 4,
            }
        );

        hero.update_unlocked_abilities(4);
        assert!(hero.can_activate("guerrilla_warfare"));
        let cooldown = hero.activate("guerrilla_warfare").unwrap().current_cooldown;
        assert_eq!(cooldown, 4);

        assert_eq!(
            hero.activate("guerrilla_warfare").unwrap_err(),
            AbilityError::OnCooldown {
                id: "guerrilla_warfare".into(),
                remaining: 4,
            }
        );
        assert!(!hero.can_activate("guerrilla_warfare"));
        assert_eq!(hero.available_abilities().count(), 0);
    }

    #[test]
    fn cooldowns_tick_down_to_zero() {
        let mut hero = Hero::new(HeroKind::Napoleon);
        hero.update_unlocked_abilities(10);
        hero.activate("forced_march").unwrap();
        hero.activate("old_guard").unwrap();

        for _ in 0..3 {
            hero.reduce_cooldowns();
        }
        assert!(hero.ability("forced_march").unwrap().is_ready());
        assert_eq!(hero.ability("old_guard").unwrap().current_cooldown, 2);

        assert_eq!(hero.reduce_longest_cooldown(), Some("old_guard"));
        assert_eq!(hero.ability("old_guard").unwrap().current_cooldown, 1);
        hero.reduce_cooldowns();
        assert_eq!(hero.reduce_longest_cooldown(), None);
        assert_eq!(hero.available_abilities().count(), 3);
    }

    #[test]
    fn hero_kind_round_trips_through_its_key() {
        for kind in HeroKind::ALL {
            assert_eq!(kind.key().parse::<HeroKind>(), Ok(kind));
        }
        assert!("cleopatra".parse::<HeroKind>().is_err());
    }
}
