//! Per-side combatant state.

use std::collections::BTreeMap;

use crate::config::BattleConfig;
use crate::skill::{Skill, SkillCategory};

/// The five semantic stats every combatant carries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stat {
    Attack,
    Defense,
    Magic,
    Agility,
    Resistance,
}

/// One integer per [`Stat`].
///
/// Used for base stats as well as for the transient field bonus and penalty
/// maps; absent entries in those maps are simply zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBlock {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub agility: i32,
    pub resistance: i32,
}

impl StatBlock {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn uniform(value: i32) -> Self {
        Self {
            attack: value,
            defense: value,
            magic: value,
            agility: value,
            resistance: value,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Stat) -> i32) -> Self {
        Self {
            attack: f(Stat::Attack),
            defense: f(Stat::Defense),
            magic: f(Stat::Magic),
            agility: f(Stat::Agility),
            resistance: f(Stat::Resistance),
        }
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Magic => self.magic,
            Stat::Agility => self.agility,
            Stat::Resistance => self.resistance,
        }
    }

    /// Element-wise saturating sum.
    pub fn add(&mut self, other: &StatBlock) {
        self.attack = self.attack.saturating_add(other.attack);
        self.defense = self.defense.saturating_add(other.defense);
        self.magic = self.magic.saturating_add(other.magic);
        self.agility = self.agility.saturating_add(other.agility);
        self.resistance = self.resistance.saturating_add(other.resistance);
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// A skill the combatant cannot select while `turn < expires_at_turn`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SealedSkill {
    pub skill_id: String,
    pub name: String,
    pub expires_at_turn: u32,
}

impl SealedSkill {
    pub fn is_active(&self, turn: u32) -> bool {
        turn < self.expires_at_turn
    }
}

/// Stats as supplied by a character record; any field may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatsRecord {
    pub max_hp: Option<u32>,
    pub max_mp: Option<u32>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub magic: Option<i32>,
    pub agility: Option<i32>,
    pub resistance: Option<i32>,
}

impl StatsRecord {
    /// Fill absent stats from the configured defaults.
    pub fn resolve(&self, config: &BattleConfig) -> StatBlock {
        let defaults = config.default_stats;
        StatBlock {
            attack: self.attack.unwrap_or(defaults.attack),
            defense: self.defense.unwrap_or(defaults.defense),
            magic: self.magic.unwrap_or(defaults.magic),
            agility: self.agility.unwrap_or(defaults.agility),
            resistance: self.resistance.unwrap_or(defaults.resistance),
        }
    }
}

/// Character record supplied by the surrounding character repository.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterRecord {
    pub name: String,
    pub stats: StatsRecord,
    pub skills: Vec<Skill>,
}

/// Battle-time state of one side.
///
/// Created once per battle by [`init_battle_state`], mutated in place by every
/// turn, discarded when the battle ends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub name: String,
    pub hp: u32,
    pub mp: u32,
    pub max_hp: u32,
    pub max_mp: u32,
    pub stats: StatBlock,
    pub skills: Vec<Skill>,
    /// Category of the skill executed last turn; read by the opponent's
    /// damage calculation for the type-advantage lookup.
    pub last_skill: Option<SkillCategory>,
    /// Extra defense granted by Defense skills this turn.
    pub defense_buffer: u32,
    pub sealed_skills: Vec<SealedSkill>,
    /// Skill id → turn it was last used.
    pub skill_cooldowns: BTreeMap<String, u32>,
    pub field_bonus: StatBlock,
    pub field_penalty: StatBlock,
}

/// Build the battle state for a character: full resources, defaulted stats,
/// every transient field zeroed.
pub fn init_battle_state(character: &CharacterRecord, config: &BattleConfig) -> CombatantState {
    let max_hp = character
        .stats
        .max_hp
        .unwrap_or(config.default_max_hp)
        .max(1);
    let max_mp = character
        .stats
        .max_mp
        .unwrap_or(config.default_max_mp)
        .max(1);

    CombatantState {
        name: character.name.clone(),
        hp: max_hp,
        mp: max_mp,
        max_hp,
        max_mp,
        stats: character.stats.resolve(config),
        skills: character.skills.clone(),
        last_skill: None,
        defense_buffer: 0,
        sealed_skills: Vec::new(),
        skill_cooldowns: BTreeMap::new(),
        field_bonus: StatBlock::ZERO,
        field_penalty: StatBlock::ZERO,
    }
}

impl CombatantState {
    /// `max(1, base + field bonus − field penalty)`.
    pub fn effective_stat(&self, stat: Stat) -> i32 {
        self.stats
            .get(stat)
            .saturating_add(self.field_bonus.get(stat))
            .saturating_sub(self.field_penalty.get(stat))
            .max(1)
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Subtract damage, flooring HP at zero. Returns HP actually lost.
    pub fn apply_damage(&mut self, damage: u32) -> u32 {
        let lost = damage.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Add HP up to the maximum. Returns HP actually gained.
    pub fn restore_hp(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Add MP up to the maximum. Returns MP actually gained.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        let before = self.mp;
        self.mp = self.mp.saturating_add(amount).min(self.max_mp);
        self.mp - before
    }

    /// Deduct MP, flooring at zero. Never refuses.
    pub fn spend_mp(&mut self, cost: u32) {
        self.mp = self.mp.saturating_sub(cost);
    }

    /// Current HP as a percentage of maximum.
    pub fn hp_percent(&self) -> f64 {
        f64::from(self.hp) * 100.0 / f64::from(self.max_hp.max(1))
    }

    /// Current MP as a percentage of maximum.
    pub fn mp_percent(&self) -> f64 {
        f64::from(self.mp) * 100.0 / f64::from(self.max_mp.max(1))
    }

    pub fn skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.id() == skill_id)
    }

    /// Expiry turn of an active seal on `skill_id`, if any.
    pub fn sealed_until(&self, skill_id: &str, turn: u32) -> Option<u32> {
        self.sealed_skills
            .iter()
            .filter(|sealed| sealed.skill_id == skill_id && sealed.is_active(turn))
            .map(|sealed| sealed.expires_at_turn)
            .max()
    }

    /// Skills with no active seal at `turn`.
    pub fn unsealed_skills(&self, turn: u32) -> impl Iterator<Item = &Skill> + '_ {
        self.skills
            .iter()
            .filter(move |skill| self.sealed_until(skill.id(), turn).is_none())
    }

    /// Drop seals whose expiry has been reached. Returns how many were removed.
    pub fn purge_expired_seals(&mut self, turn: u32) -> usize {
        let before = self.sealed_skills.len();
        self.sealed_skills.retain(|sealed| sealed.is_active(turn));
        before - self.sealed_skills.len()
    }

    pub fn clear_field_modifiers(&mut self) {
        self.field_bonus = StatBlock::ZERO;
        self.field_penalty = StatBlock::ZERO;
    }
}
