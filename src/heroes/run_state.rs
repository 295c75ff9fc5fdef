use serde::{Serialize, Serializer};

use crate::movement::MoveOutcome;
use crate::types::{PerPlayer, PieceKind, Player, Position, TrophyPoints};

use super::{Hero, HeroKind};

pub const MARK_CAPACITY: usize = 4;
pub const ALEXANDER_START_BONUS: u32 = 3;
pub const HORSEMANSHIP_BONUS: u32 = 1;
pub const BOUNTY_REWARD: u32 = 1;

/// Che's mark on a square where an opposing piece fell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreeMark {
    pub position: Position,
    pub owner: Player,
}

/// Fixed-capacity FIFO of free marks; pushing into a full ring evicts the oldest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkRing {
    slots: [Option<FreeMark>; MARK_CAPACITY],
    head: usize,
    len: usize,
}

impl MarkRing {
    pub fn push(&mut self, mark: FreeMark) -> Option<FreeMark> {
        let tail = (self.head + self.len) % MARK_CAPACITY;
        if self.len == MARK_CAPACITY {
            let evicted = self.slots[self.head].replace(mark);
            self.head = (self.head + 1) % MARK_CAPACITY;
            evicted
        } else {
            self.slots[tail] = Some(mark);
            self.len += 1;
            None
        }
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &FreeMark> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % MARK_CAPACITY].as_ref())
    }

    pub fn contains(&self, mark: &FreeMark) -> bool {
        self.iter().any(|m| m == mark)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Serialize for MarkRing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// An opposing piece marked by `player`'s Bounty ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BountyMark {
    pub position: Position,
    pub player: Player,
}

/// Per-match hero bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRunState {
    pub heroes: PerPlayer<Option<Hero>>,
    free_marks: MarkRing,
    pins: PerPlayer<u32>,
    bounty_marks: Vec<BountyMark>,
}

impl HeroRunState {
    pub fn new(white: Option<HeroKind>, black: Option<HeroKind>) -> Self {
        Self {
            heroes: PerPlayer {
                white: white.map(Hero::new),
                black: black.map(Hero::new),
            },
            ..Self::default()
        }
    }

    pub fn hero(&self, player: Player) -> Option<&Hero> {
        self.heroes.for_player(player).as_ref()
    }

    pub fn hero_mut(&mut self, player: Player) -> Option<&mut Hero> {
        self.heroes.for_player_mut(player).as_mut()
    }

    fn has_hero(&self, player: Player, kind: HeroKind) -> bool {
        self.hero(player).is_some_and(|hero| hero.kind == kind)
    }

    pub fn free_marks(&self) -> &MarkRing {
        &self.free_marks
    }

    pub fn has_free_mark_at(&self, pos: Position) -> bool {
        self.free_marks.iter().any(|mark| mark.position == pos)
    }

    pub fn bounty_marks(&self) -> &[BountyMark] {
        &self.bounty_marks
    }

    pub fn pins(&self, player: Player) -> u32 {
        self.pins.get(player)
    }

    /// Alexander starts with a trophy head start.
    pub fn apply_game_start(&self, trophies: &mut TrophyPoints) {
        for player in [Player::White, Player::Black] {
            if self.has_hero(player, HeroKind::Alexander) {
                trophies.add(player, ALEXANDER_START_BONUS);
            }
        }
    }

    /// Trophies the mover earns on top of the captured piece's value.
    pub fn capture_bonus(&self, mover: Player, outcome: &MoveOutcome) -> u32 {
        if outcome.captured.is_none() {
            return 0;
        }

        let mut bonus = 0;
        if self.has_hero(mover, HeroKind::Genghis)
            && matches!(outcome.piece.kind, PieceKind::Horse | PieceKind::Elephant)
        {
            bonus += HORSEMANSHIP_BONUS;
        }
        bonus += self
            .bounty_marks
            .iter()
            .filter(|mark| mark.player == mover && mark.position == outcome.to)
            .count() as u32
            * BOUNTY_REWARD;
        bonus
    }

    /// Capture and step triggers, run after a move that did not end the game.
    pub fn after_move(&mut self, mover: Player, outcome: &MoveOutcome) {
        if outcome.captured.is_some() {
            self.bounty_marks.retain(|mark| mark.position != outcome.to);
        }
        for mark in &mut self.bounty_marks {
            if mark.position == outcome.from {
                mark.position = outcome.to;
            }
        }

        let mut rewarded: Vec<Player> = Vec::with_capacity(2);
        for mark in self.free_marks.iter() {
            if mark.position == outcome.to && mark.owner != mover && !rewarded.contains(&mark.owner) {
                rewarded.push(mark.owner);
            }
        }
        for owner in rewarded {
            if let Some(hero) = self.hero_mut(owner)
                && hero.kind == HeroKind::Che
                && let Some(id) = hero.reduce_longest_cooldown()
            {
                log::debug!("{owner}'s free mark at {} shortens {id}", outcome.to);
            }
        }

        let mark = FreeMark {
            position: outcome.to,
            owner: mover,
        };
        if outcome.captured.is_some()
            && self.has_hero(mover, HeroKind::Che)
            && !self.free_marks.contains(&mark)
        {
            let evicted = self.free_marks.push(mark);
            if let Some(old) = evicted {
                log::debug!("free mark at {} replaced", old.position);
            }
        }
    }

    /// Ticks the mover's cooldowns and refreshes both unlock sets from the
    /// live totals. Returns abilities that became unlocked.
    pub fn end_turn(&mut self, mover: Player, live: &TrophyPoints) -> Vec<(Player, &'static str)> {
        if let Some(hero) = self.hero_mut(mover) {
            hero.reduce_cooldowns();
        }
        self.refresh_unlocks(live)
    }

    pub fn refresh_unlocks(&mut self, live: &TrophyPoints) -> Vec<(Player, &'static str)> {
        let mut unlocked = Vec::new();
        for player in [Player::White, Player::Black] {
            if let Some(hero) = self.hero_mut(player) {
                for id in hero.update_unlocked_abilities(live.get(player)) {
                    log::info!("{player} unlocked {id}");
                    unlocked.push((player, id));
                }
            }
        }
        unlocked
    }

    /// Napoleon's pin income. Returns whether a pin was granted.
    pub fn award_pin(&mut self, player: Player) -> bool {
        if !self.has_hero(player, HeroKind::Napoleon) {
            return false;
        }
        *self.pins.for_player_mut(player) += 1;
        true
    }

    pub fn add_bounty(&mut self, mark: BountyMark) -> bool {
        if self.bounty_marks.contains(&mark) {
            return false;
        }
        self.bounty_marks.push(mark);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceId};

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn capture(kind: PieceKind, player: Player, from: Position, to: Position) -> MoveOutcome {
        MoveOutcome {
            piece: Piece::new(1, kind, player, to),
            from,
            to,
            captured: Some(Piece {
                id: PieceId(2),
                kind: PieceKind::Soldier,
                player: player.opponent(),
                position: to,
                has_moved: false,
            }),
            trophy_delta: 1,
        }
    }

    #[test]
    fn mark_ring_never_exceeds_capacity() {
        let mut ring = MarkRing::default();
        for x in 0..6 {
            let evicted = ring.push(FreeMark {
                position: pos(x, 0),
                owner: Player::White,
            });
            assert_eq!(evicted.is_some(), x >= MARK_CAPACITY as i32);
        }

        assert_eq!(ring.len(), MARK_CAPACITY);
        let xs: Vec<_> = ring.iter().map(|mark| mark.position.x).collect();
        assert_eq!(xs, vec![2, 3, 4, 5]);
    }

    #[test]
    fn alexander_starts_with_bonus() {
        let heroes = HeroRunState::new(Some(HeroKind::Alexander), Some(HeroKind::Che));
        let mut trophies = TrophyPoints::default();

        heroes.apply_game_start(&mut trophies);

        assert_eq!(trophies, TrophyPoints { white: 3, black: 0 });
    }

    #[test]
    fn che_marks_capture_squares_and_rewards_steps() {
        let mut heroes = HeroRunState::new(Some(HeroKind::Che), None);
        heroes.after_move(
            Player::White,
            &capture(PieceKind::Tower, Player::White, pos(0, 6), pos(0, 1)),
        );
        assert!(heroes.has_free_mark_at(pos(0, 1)));

        let hero = heroes.hero_mut(Player::White).unwrap();
        hero.update_unlocked_abilities(10);
        hero.activate("internationalism").unwrap();

        let step = MoveOutcome {
            piece: Piece::new(3, PieceKind::Commander, Player::Black, pos(0, 1)),
            from: pos(0, 0),
            to: pos(0, 1),
            captured: None,
            trophy_delta: 0,
        };
        heroes.after_move(Player::Black, &step);

        let cooldown = heroes
            .hero(Player::White)
            .and_then(|hero| hero.ability("internationalism"))
            .map(|ability| ability.current_cooldown);
        assert_eq!(cooldown, Some(4));
    }

    #[test]
    fn repeat_capture_on_a_marked_square_keeps_one_mark() {
        let mut heroes = HeroRunState::new(Some(HeroKind::Che), None);
        let hero = heroes.hero_mut(Player::White).unwrap();
        hero.update_unlocked_abilities(10);
        hero.activate("internationalism").unwrap();

        heroes.after_move(
            Player::White,
            &capture(PieceKind::Tower, Player::White, pos(0, 6), pos(0, 3)),
        );
        heroes.after_move(
            Player::White,
            &capture(PieceKind::Tower, Player::White, pos(0, 3), pos(0, 3)),
        );
        assert_eq!(heroes.free_marks().len(), 1);

        let step = MoveOutcome {
            piece: Piece::new(3, PieceKind::Soldier, Player::Black, pos(0, 3)),
            from: pos(0, 2),
            to: pos(0, 3),
            captured: None,
            trophy_delta: 0,
        };
        heroes.after_move(Player::Black, &step);

        let cooldown = heroes
            .hero(Player::White)
            .and_then(|hero| hero.ability("internationalism"))
            .map(|ability| ability.current_cooldown);
        assert_eq!(cooldown, Some(4));
    }

    #[test]
    fn no_marks_without_che() {
        let mut heroes = HeroRunState::new(Some(HeroKind::Genghis), None);
        heroes.after_move(
            Player::White,
            &capture(PieceKind::Horse, Player::White, pos(1, 6), pos(2, 4)),
        );
        assert!(heroes.free_marks().is_empty());
    }

    #[test]
    fn genghis_and_bounty_bonuses() {
        let mut heroes = HeroRunState::new(Some(HeroKind::Genghis), Some(HeroKind::Anne));
        let horse_capture = capture(PieceKind::Horse, Player::White, pos(1, 6), pos(2, 4));
        let tower_capture = capture(PieceKind::Tower, Player::White, pos(2, 6), pos(2, 4));

        assert_eq!(heroes.capture_bonus(Player::White, &horse_capture), 1);
        assert_eq!(heroes.capture_bonus(Player::White, &tower_capture), 0);

        assert!(heroes.add_bounty(BountyMark {
            position: pos(3, 4),
            player: Player::Black,
        }));
        let step = MoveOutcome {
            piece: Piece::new(5, PieceKind::Soldier, Player::White, pos(3, 3)),
            from: pos(3, 4),
            to: pos(3, 3),
            captured: None,
            trophy_delta: 0,
        };
        heroes.after_move(Player::White, &step);
        assert_eq!(heroes.bounty_marks()[0].position, pos(3, 3));

        let claim = capture(PieceKind::Soldier, Player::Black, pos(2, 2), pos(3, 3));
        assert_eq!(heroes.capture_bonus(Player::Black, &claim), 1);
        heroes.after_move(Player::Black, &claim);
        assert!(heroes.bounty_marks().is_empty());
    }

    #[test]
    fn pins_only_for_napoleon() {
        let mut heroes = HeroRunState::new(Some(HeroKind::Napoleon), Some(HeroKind::Anne));

        assert!(heroes.award_pin(Player::White));
        assert!(!heroes.award_pin(Player::Black));
        assert_eq!(heroes.pins(Player::White), 1);
        assert_eq!(heroes.pins(Player::Black), 0);
    }

    #[test]
    fn end_turn_ticks_only_the_mover() {
        let mut heroes = HeroRunState::new(Some(HeroKind::Alexander), Some(HeroKind::Alexander));
        let live = TrophyPoints { white: 4, black: 4 };
        let unlocked = heroes.refresh_unlocks(&live);
        assert_eq!(unlocked.len(), 2);

        for player in [Player::White, Player::Black] {
            heroes.hero_mut(player).unwrap().activate("companion_cavalry").unwrap();
        }
        let unlocked = heroes.end_turn(Player::White, &TrophyPoints { white: 7, black: 4 });

        assert_eq!(unlocked, vec![(Player::White, "phalanx")]);
        let remaining = |player| {
            heroes
                .hero(player)
                .and_then(|hero| hero.ability("companion_cavalry"))
                .map(|ability| ability.current_cooldown)
        };
        assert_eq!(remaining(Player::White), Some(3));
        assert_eq!(remaining(Player::Black), Some(4));
    }

    #[test]
    fn unassigned_heroes_are_inert() {
        let mut heroes = HeroRunState::new(None, None);
        let mut trophies = TrophyPoints::default();

        heroes.apply_game_start(&mut trophies);
        let outcome = capture(PieceKind::Horse, Player::White, pos(1, 6), pos(2, 4));
        assert_eq!(heroes.capture_bonus(Player::White, &outcome), 0);
        heroes.after_move(Player::White, &outcome);
        assert!(heroes.end_turn(Player::White, &TrophyPoints { white: 20, black: 20 }).is_empty());

        assert_eq!(trophies, TrophyPoints::default());
        assert!(heroes.free_marks().is_empty());
    }
}
