//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Units
pub use crate::unit::{
    Ability, Capabilities, Capability, Combatant, Flag, Special, StatLine, Weapon,
};
pub use crate::types::{Color, MoveType, SkillSlot, Stat, Terrain, WeaponType};

// Effects
pub use crate::effect::{BuffTarget, CombatContext, Condition, EffectHook, Hook};

// Damage
pub use crate::damage::{calculate_damage_between, DamageBreakdown, DamageOverrides};

// Combat
pub use crate::combat::{resolve_round, AttackResult, BattleOptions, BattleResult, Phase};

// Config
pub use crate::config::{Catalog, Ruleset};
