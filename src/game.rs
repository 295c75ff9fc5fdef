use serde::Serialize;

use crate::config::MatchConfig;
use crate::conversion;
use crate::error::{AbilityError, GameError};
use crate::heroes::{Ability, EffectContext, EffectRegistry, HeroRunState};
use crate::movement::{self, MoveOutcome};
use crate::rules;
use crate::state::GameState;
use crate::types::{PieceKind, Player, Position, TrophyPoints};
use crate::victory::{self, VictoryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockNotice {
    pub player: Player,
    pub ability_id: &'static str,
}

/// Result of an accepted move or conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReport {
    /// `None` for conversions.
    pub outcome: Option<MoveOutcome>,
    /// Capture value plus hero bonuses.
    pub trophy_delta: u32,
    pub victory: VictoryResult,
    pub current_player: Player,
    pub turn_count: u32,
    pub unlocked: Vec<UnlockNotice>,
}

pub struct GameInstance {
    state: GameState,
    heroes: HeroRunState,
    config: MatchConfig,
    effects: EffectRegistry,
}

impl GameInstance {
    pub fn new(config: MatchConfig, effects: EffectRegistry) -> Self {
        let mut state = GameState::new();
        let mut heroes = HeroRunState::new(config.white, config.black);
        heroes.apply_game_start(&mut state.trophy_points);
        heroes.refresh_unlocks(&state.live_trophies());

        log::debug!("new match: white={:?} black={:?}", config.white, config.black);

        Self {
            state,
            heroes,
            config,
            effects,
        }
    }

    pub fn new_with_default_effects(config: MatchConfig) -> Self {
        Self::new(config, EffectRegistry::default())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn heroes(&self) -> &HeroRunState {
        &self.heroes
    }

    pub fn config(&self) -> MatchConfig {
        self.config
    }

    pub fn live_trophies(&self) -> TrophyPoints {
        self.state.live_trophies()
    }

    /// Starts over with the same hero selection. Registered effects are kept.
    pub fn reset(&mut self) {
        let effects = std::mem::replace(&mut self.effects, EffectRegistry::empty());
        *self = Self::new(self.config, effects);
    }

    pub fn get_possible_moves(&self, at: Position) -> Vec<Position> {
        self.state
            .board
            .get(at)
            .map(|piece| rules::get_possible_moves(piece, &self.state.board))
            .unwrap_or_default()
    }

    pub fn get_possible_attacks(&self, at: Position) -> Vec<Position> {
        self.state
            .board
            .get(at)
            .map(|piece| rules::get_possible_attacks(piece, &self.state.board))
            .unwrap_or_default()
    }

    /// Caches the current player's piece at `at` and its destinations.
    pub fn select_piece(&mut self, at: Position) -> Result<&[Position], GameError> {
        self.ensure_playing()?;
        let piece = *self.state.board.get(at).ok_or(GameError::NoPiece { at })?;
        self.ensure_owner(piece.player)?;

        self.state.possible_moves = rules::get_possible_moves(&piece, &self.state.board);
        self.state.selected_piece = Some(piece);
        Ok(&self.state.possible_moves)
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<TurnReport, GameError> {
        self.ensure_playing()?;
        let mover = self.state.current_player;
        if let Some(piece) = self.state.board.get(from) {
            self.ensure_owner(piece.player)?;
        }

        let mut board = self.state.board.clone();
        let outcome = movement::execute_move(&mut board, from, to)
            .inspect_err(|err| log::debug!("rejected move {from} -> {to}: {err}"))?;

        let trophy_delta = outcome.trophy_delta + self.heroes.capture_bonus(mover, &outcome);
        let mut trophies = self.state.trophy_points;
        trophies.add(mover, trophy_delta);
        let victory = victory::check_victory(&board, &trophies, outcome.captured.as_ref(), mover);

        self.state.board = board;
        self.state.trophy_points = trophies;

        let unlocked = if victory.has_won {
            self.finish_game(victory);
            Vec::new()
        } else {
            self.heroes.after_move(mover, &outcome);
            let unlocked = self.end_turn(mover);
            self.state.advance_turn();
            unlocked
        };

        Ok(self.report(Some(outcome), trophy_delta, victory, unlocked))
    }

    pub fn convert_piece(&mut self, at: Position, target: PieceKind) -> Result<TurnReport, GameError> {
        self.ensure_playing()?;
        let mover = self.state.current_player;
        let piece = *self.state.board.get(at).ok_or(GameError::NoPiece { at })?;
        self.ensure_owner(piece.player)?;

        let next = conversion::execute_piece_conversion(&piece, target, &self.state)
            .inspect_err(|err| log::debug!("rejected conversion at {at}: {err}"))?;
        let victory = victory::check_victory(&next.board, &next.trophy_points, None, mover);

        let turn_count = self.state.turn_count;
        self.state = next;

        let unlocked = if victory.has_won {
            self.state.current_player = mover;
            self.state.turn_count = turn_count;
            self.finish_game(victory);
            Vec::new()
        } else {
            self.end_turn(mover)
        };

        Ok(self.report(None, 0, victory, unlocked))
    }

    /// Activates one of the current player's abilities. Does not end the turn.
    pub fn activate_ability(&mut self, id: &str, target: Option<Position>) -> Result<Ability, GameError> {
        self.ensure_playing()?;
        let player = self.state.current_player;

        let mut heroes = self.heroes.clone();
        let mut trophies = self.state.trophy_points;
        heroes.refresh_unlocks(&self.state.live_trophies());

        let ability = heroes
            .hero_mut(player)
            .ok_or(AbilityError::NoHero { player })?
            .activate(id)?
            .clone();

        let mut ctx = EffectContext {
            player,
            target,
            board: &self.state.board,
            trophies: &mut trophies,
            heroes: &mut heroes,
        };
        self.effects.apply(id, &mut ctx)?;

        self.heroes = heroes;
        self.state.trophy_points = trophies;
        self.heroes.refresh_unlocks(&self.state.live_trophies());

        log::debug!("{player} activated {id}");
        Ok(ability)
    }

    /// Napoleon's pin income, triggered by the host.
    pub fn award_pin(&mut self, player: Player) -> bool {
        self.heroes.award_pin(player)
    }

    fn end_turn(&mut self, mover: Player) -> Vec<UnlockNotice> {
        let live = self.state.live_trophies();
        self.heroes
            .end_turn(mover, &live)
            .into_iter()
            .map(|(player, ability_id)| UnlockNotice { player, ability_id })
            .collect()
    }

    fn finish_game(&mut self, victory: VictoryResult) {
        if let (Some(winner), Some(victory_type)) = (victory.winner, victory.victory_type) {
            log::info!("{}", victory.message());
            self.state.declare_winner(winner, victory_type);
        }
    }

    fn report(
        &self,
        outcome: Option<MoveOutcome>,
        trophy_delta: u32,
        victory: VictoryResult,
        unlocked: Vec<UnlockNotice>,
    ) -> TurnReport {
        TurnReport {
            outcome,
            trophy_delta,
            victory,
            current_player: self.state.current_player,
            turn_count: self.state.turn_count,
            unlocked,
        }
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.state.is_game_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn ensure_owner(&self, owner: Player) -> Result<(), GameError> {
        if owner != self.state.current_player {
            return Err(GameError::NotYourTurn {
                expected: self.state.current_player,
            });
        }
        Ok(())
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: crate::board::Board, current_player: Player) {
        self.state.board = board;
        self.state.current_player = current_player;
        self.state.clear_selection();
    }

    #[cfg(test)]
    fn set_trophies_for_test(&mut self, trophies: TrophyPoints) {
        self.state.trophy_points = trophies;
        self.heroes.refresh_unlocks(&self.state.live_trophies());
    }
}

impl Default for GameInstance {
    fn default() -> Self {
        Self::new_with_default_effects(MatchConfig::default())
    }
}
