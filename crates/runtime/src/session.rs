//! Battle session: the owner of a battle between turns.
//!
//! The engine in `battle-core` resolves a single turn and keeps nothing. A
//! [`BattleSession`] holds everything that has to survive from one turn to
//! the next (state, balance config, randomness, the computer-driven sides)
//! and records every [`TurnResult`] it produced.

use battle_core::{
    BattleConfig, BattleEngine, BattleState, CharacterRecord, RngSource, Side, Skill, TurnResult,
    available_skills, check_usage, init_battle_state,
};

use crate::ai::{SkillSelector, TacticalSelector};
use crate::error::{Result, SessionError};

/// Final result of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    Winner(Side),
    /// Both sides fell on the same turn.
    Draw,
}

/// A running battle between a player-controlled user and an AI enemy.
pub struct BattleSession {
    state: BattleState,
    config: BattleConfig,
    rng: Box<dyn RngSource>,
    user_selector: Box<dyn SkillSelector>,
    enemy_selector: Box<dyn SkillSelector>,
    history: Vec<TurnResult>,
}

impl BattleSession {
    /// Starts a battle with both sides at full resources.
    ///
    /// Both sides default to a [`TacticalSelector`]; the user's selector is
    /// only consulted by [`auto_turn`](Self::auto_turn).
    pub fn new(
        user: &CharacterRecord,
        enemy: &CharacterRecord,
        config: BattleConfig,
        rng: impl RngSource + 'static,
    ) -> Self {
        let state = BattleState::new(
            init_battle_state(user, &config),
            init_battle_state(enemy, &config),
        );

        tracing::info!(
            user = %state.user.name,
            enemy = %state.enemy.name,
            "battle session started"
        );

        Self {
            state,
            config,
            rng: Box::new(rng),
            user_selector: Box::new(TacticalSelector::default()),
            enemy_selector: Box::new(TacticalSelector::default()),
            history: Vec::new(),
        }
    }

    pub fn with_enemy_selector(mut self, selector: impl SkillSelector + 'static) -> Self {
        self.enemy_selector = Box::new(selector);
        self
    }

    pub fn with_user_selector(mut self, selector: impl SkillSelector + 'static) -> Self {
        self.user_selector = Box::new(selector);
        self
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Every turn resolved so far, oldest first.
    pub fn history(&self) -> &[TurnResult] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// `None` while the battle is still running.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if !self.state.is_over() {
            return None;
        }
        Some(match self.state.winner() {
            Some(side) => BattleOutcome::Winner(side),
            None => BattleOutcome::Draw,
        })
    }

    /// Skills the user may pick for the upcoming turn.
    pub fn available_user_skills(&self) -> Vec<&Skill> {
        available_skills(Side::User, &self.state)
    }

    /// Resolves a turn with the player's chosen skill.
    ///
    /// The skill must be in the user's list (the basic attack is always
    /// accepted) and pass the usage checks for the upcoming turn. The enemy's
    /// skill comes from the enemy selector.
    ///
    /// # Errors
    ///
    /// - [`SessionError::BattleOver`] once either side is defeated
    /// - [`SessionError::UnknownSkill`] for an id the user does not have
    /// - [`SessionError::Unusable`] when a usage check fails
    pub fn play_turn(&mut self, user_skill_id: &str) -> Result<&TurnResult> {
        if self.state.is_over() {
            return Err(SessionError::BattleOver);
        }

        let user_skill = self.user_skill(user_skill_id)?;
        check_usage(&user_skill, Side::User, &self.state).map_err(|source| {
            SessionError::Unusable {
                skill: user_skill_id.to_string(),
                source,
            }
        })?;

        let enemy_skill = self
            .enemy_selector
            .select(Side::Enemy, &self.state, self.rng.as_mut());

        Ok(self.resolve(&user_skill, &enemy_skill))
    }

    /// Resolves a turn with both sides driven by their selectors.
    pub fn auto_turn(&mut self) -> Result<&TurnResult> {
        if self.state.is_over() {
            return Err(SessionError::BattleOver);
        }

        let user_skill = self
            .user_selector
            .select(Side::User, &self.state, self.rng.as_mut());
        let enemy_skill = self
            .enemy_selector
            .select(Side::Enemy, &self.state, self.rng.as_mut());

        Ok(self.resolve(&user_skill, &enemy_skill))
    }

    fn user_skill(&self, skill_id: &str) -> Result<Skill> {
        if let Some(skill) = self.state.user.skill(skill_id) {
            return Ok(skill.clone());
        }
        if skill_id == Skill::BASIC_ATTACK_ID {
            return Ok(Skill::basic_attack());
        }
        Err(SessionError::UnknownSkill(skill_id.to_string()))
    }

    fn resolve(&mut self, user_skill: &Skill, enemy_skill: &Skill) -> &TurnResult {
        let result = BattleEngine::new(&mut self.state, &self.config).execute_turn(
            user_skill,
            enemy_skill,
            self.rng.as_mut(),
        );

        tracing::info!(
            turn = result.turn,
            user_skill = user_skill.id(),
            enemy_skill = enemy_skill.id(),
            user_hp = result.summary.user_hp,
            enemy_hp = result.summary.enemy_hp,
            phase = result.phase.as_str(),
            "turn resolved"
        );

        self.history.push(result);
        &self.history[self.history.len() - 1]
    }
}
