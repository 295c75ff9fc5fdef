use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Ability, AbilityKind, Hero, HeroKind, UNLOCK_THRESHOLDS};

const fn passive(id: &'static str, name: &'static str, description: &'static str) -> Ability {
    Ability {
        id,
        name,
        kind: AbilityKind::Passive,
        cooldown: 0,
        current_cooldown: 0,
        description,
        unlock_trophies: None,
    }
}

const fn active(
    id: &'static str,
    name: &'static str,
    cooldown: u32,
    tier: usize,
    description: &'static str,
) -> Ability {
    Ability {
        id,
        name,
        kind: AbilityKind::Active,
        cooldown,
        current_cooldown: 0,
        description,
        unlock_trophies: Some(UNLOCK_THRESHOLDS[tier]),
    }
}

fn hero(kind: HeroKind, name: &'static str, passive: Ability, actives: [Ability; 3]) -> Hero {
    Hero {
        kind,
        name,
        passive_ability: passive,
        active_abilities: actives,
        unlocked_abilities: Vec::new(),
    }
}

static CATALOG: Lazy<HashMap<HeroKind, Hero>> = Lazy::new(|| {
    [
        hero(
            HeroKind::Alexander,
            "Alexander the Great",
            passive("king_of_macedonia", "King of Macedonia", "Start game with 3 Trophies"),
            [
                active(
                    "companion_cavalry",
                    "Companion Cavalry",
                    4,
                    0,
                    "Commander can make a Horse/Elephant move at a turn",
                ),
                active(
                    "phalanx",
                    "Phalanx",
                    5,
                    1,
                    "Upgrade a Soldier after moving it: move/attack any block forward; move 1 block backward; move sideways 1 block on neutral or home 3 rows",
                ),
                active(
                    "hammer_and_anvil",
                    "Hammer and Anvil",
                    4,
                    2,
                    "Move a piece from the home 1st row to an empty spot on the row of your most upfront piece",
                ),
            ],
        ),
        hero(
            HeroKind::Genghis,
            "Genghis Khan",
            passive(
                "horsemanship",
                "Horsemanship",
                "Horse/Elephant attacks a piece on passing; Horse/Elephant gains 1 extra Trophy on attack",
            ),
            [
                active(
                    "herdering",
                    "Herdering",
                    5,
                    0,
                    "Soldier can convert to Horse after an attack",
                ),
                active(
                    "nomady",
                    "Nomady",
                    4,
                    1,
                    "Horse/Elephant can convert and then move at the same turn; this move prevents attacking on passing",
                ),
                active(
                    "crouching",
                    "Crouching",
                    6,
                    2,
                    "Commander can turn hidden after a move for 1 turn; it can not attack while hidden",
                ),
            ],
        ),
        hero(
            HeroKind::Napoleon,
            "Napoleon Bonaparte",
            passive(
                "battle_of_waterloo",
                "Battle of Waterloo",
                "Gain a Pin every time you are checkmated; respawn a defeated piece (Soldier: 3 Pins; all others: 5 Pins) on an empty spot of your home 3 rows",
            ),
            [
                active(
                    "forced_march",
                    "Forced March",
                    3,
                    0,
                    "Soldier can move and attack with 1 extra block forward on its first move",
                ),
                active(
                    "gribeauval_canon",
                    "Gribeauval Canon",
                    4,
                    1,
                    "Artillery can move any block diagonally; Artillery gains 1 extra Trophy on a diagonal attack",
                ),
                active(
                    "old_guard",
                    "Old Guard",
                    5,
                    2,
                    "Upgrade a Guard after moving it: gain invincibility when it is 1 block away from its Commander",
                ),
            ],
        ),
        hero(
            HeroKind::Washington,
            "George Washington",
            passive(
                "founding_father",
                "Founding Father",
                "Commander can convert to President and back: as Commander gain 1 extra Trophy on attack; as President move any number of adjacent pieces 1 block",
            ),
            [
                active(
                    "battle_of_trenton",
                    "Battle of Trenton",
                    4,
                    0,
                    "Raider can move any block sideways on the opposite bottom 2 rows",
                ),
                active(
                    "battle_of_monmouth",
                    "Battle of Monmouth",
                    4,
                    1,
                    "Move a piece to an empty spot 1 block away from Commander/President, if it is not on the home 2 rows",
                ),
                active(
                    "valley_forge",
                    "Valley Forge Winter Encampment",
                    6,
                    2,
                    "Upgrade a non-Commander piece after moving it to the home 1st row: move in both forms",
                ),
            ],
        ),
        hero(
            HeroKind::Anne,
            "Anne Bonny",
            passive(
                "seamanship",
                "Seamanship",
                "Your Tower/Artillery is a Ship that boards non-Commander pieces on its path",
            ),
            [
                active(
                    "mary_read",
                    "Mary Read",
                    5,
                    0,
                    "Commander can swap position with a Guard/Raider",
                ),
                active(
                    "piracy",
                    "Piracy",
                    6,
                    1,
                    "Remove 1 Trophy from opponent",
                ),
                active(
                    "bounty",
                    "Bounty",
                    5,
                    2,
                    "Mark an opposing piece that offers 1 extra Trophy at defeat",
                ),
            ],
        ),
        hero(
            HeroKind::Che,
            "Che Guevara",
            passive(
                "revolutionist",
                "Revolutionist",
                "Place a Free Mark where an opposing piece is defeated (4 at most, oldest replaced); when an opposing piece steps onto one, reduce 1 CD",
            ),
            [
                active(
                    "guerrilla_warfare",
                    "Guerrilla Warfare",
                    4,
                    0,
                    "Move Soldier to its previous spot after making an attack",
                ),
                active(
                    "motorcycle_diaries",
                    "The Motorcycle Diaries",
                    5,
                    1,
                    "Soldier/Guard/Raider can move along grid to a Free Mark, attacking pieces on path",
                ),
                active(
                    "internationalism",
                    "Internationalism",
                    5,
                    2,
                    "Commander can move and attack to a Free Mark on map",
                ),
            ],
        ),
    ]
    .into_iter()
    .map(|hero| (hero.kind, hero))
    .collect()
});

/// The pristine definition of `kind`.
pub fn template(kind: HeroKind) -> &'static Hero {
    // every kind is inserted above
    &CATALOG[&kind]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hero_has_one_passive_and_three_ascending_actives() {
        for kind in HeroKind::ALL {
            let hero = template(kind);
            assert_eq!(hero.kind, kind);
            assert_eq!(hero.passive_ability.kind, AbilityKind::Passive);

            let thresholds: Vec<_> = hero
                .active_abilities
                .iter()
                .map(|ability| {
                    assert_eq!(ability.kind, AbilityKind::Active);
                    assert_eq!(ability.current_cooldown, 0);
                    assert!(ability.cooldown > 0);
                    ability.unlock_trophies
                })
                .collect();
            assert_eq!(thresholds, vec![Some(4), Some(7), Some(10)]);
        }
    }

    #[test]
    fn ability_ids_are_globally_unique() {
        let mut ids: Vec<_> = HeroKind::ALL
            .iter()
            .flat_map(|&kind| {
                let hero = template(kind);
                std::iter::once(hero.passive_ability.id)
                    .chain(hero.active_abilities.iter().map(|ability| ability.id))
            })
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 24);
    }
}
