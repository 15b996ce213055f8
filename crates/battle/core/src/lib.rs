//! Deterministic turn judgment for two-sided skill battles.
//!
//! `battle-core` defines the canonical battle rules (hit, damage, per-category
//! effect resolution, action ordering, field effects) and the state they act
//! on. All turn resolution flows through [`engine::BattleEngine`], which is a
//! pure transform of ([`BattleState`], chosen skills, [`RngSource`]) into a
//! mutated state plus a [`TurnResult`].
//!
//! Skills arrive origin-agnostic: hand-authored catalogs and generated skills
//! share the [`Skill`] shape and are normalized on construction.

pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod resolve;
pub mod rng;
pub mod selection;
pub mod skill;
pub mod state;

pub use combat::{DamageBreakdown, DamageOutcome, HitOutcome, TypeAdvantageTable};
pub use config::{
    BattleConfig, DamageParams, DefenseParams, FieldCoefficients, HitParams, PriorityParams,
    SealParams, StatWeights,
};
pub use engine::{
    ActorReport, BattleEngine, BattleSummary, FieldChange, FieldReport, TurnPhase, TurnResult,
};
pub use error::{BattleError, ErrorSeverity, SkillError, UsageError};
pub use resolve::{ActionContext, EffectRecord};
pub use rng::{PcgRng, RngSource, ScriptedRng, shuffle};
pub use selection::{available_skills, check_usage, is_sealed};
pub use skill::{
    EffectKind, EffectSpec, EffectTarget, HealResource, Skill, SkillCategory, SkillDefinition,
    UsageCondition,
};
pub use state::{
    BattleState, CharacterRecord, CombatantState, Field, FieldEffect, SealedSkill, Side, Stat,
    StatBlock, StatsRecord, init_battle_state,
};
