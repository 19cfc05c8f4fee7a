//! battle_core - Single-round combat resolution for tactics games
//!
//! This library provides:
//! - Combatant: A unit with base stats, buffs, weapon, abilities and capabilities
//! - Effect hooks: Ordered mutation of a per-hit combat context
//! - Damage pipeline: Deterministic integer damage with a full breakdown
//! - Round resolution: Init, counter, follow-ups and potent attacks with a trace

pub mod combat;
pub mod config;
pub mod damage;
pub mod effect;
pub mod prelude;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use combat::{
    preview_round, resolve_follow_ups, resolve_round, AttackResult, BattleOptions, BattleResult,
    DamageStep, FollowUps, Phase, RoundTrace,
};
pub use config::{Catalog, CatalogError, ConfigError, Ruleset};
pub use damage::{calculate_damage, calculate_damage_between, DamageBreakdown, DamageOverrides};
pub use effect::{CombatContext, EffectHook, Hook};
pub use types::{Color, MoveType, Side, SkillSlot, Stat, Terrain, WeaponType};
pub use unit::{
    Ability, Capabilities, Capability, Combatant, EquipError, Flag, Special, StatLine, Weapon,
};
