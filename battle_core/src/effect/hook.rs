//! Effect hooks - data-driven and custom mutations of a CombatContext

use super::context::{CombatContext, PendingBuff};
use crate::types::{Side, Stat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Anything that can mutate a combat context before damage is computed.
///
/// `owner` is the side of the hit the hook's bearer is on. Implementations
/// must only touch the context; the same hook runs again for every hit.
pub trait EffectHook: Send + Sync {
    /// Identifier used in logs and to deduplicate queued buffs
    fn id(&self) -> &str;

    fn apply(&self, ctx: &mut CombatContext<'_>, owner: Side);
}

/// When a data-driven hook is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Always,
    /// The bearer started the round
    Initiating,
    /// The bearer was attacked this round
    Defending,
}

impl Condition {
    fn holds(self, ctx: &CombatContext<'_>, owner: Side) -> bool {
        match self {
            Condition::Always => true,
            Condition::Initiating => ctx.is_initiator(owner),
            Condition::Defending => !ctx.is_initiator(owner),
        }
    }
}

/// Who a queued buff lands on, relative to the bearer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffTarget {
    #[default]
    Owner,
    Foe,
}

/// Function signature for closure-backed hooks
pub type HookFn = dyn for<'a, 'b> Fn(&'a mut CombatContext<'b>, Side) + Send + Sync;

/// A hook backed by a closure. Not serializable.
#[derive(Clone)]
pub struct CustomHook {
    id: String,
    func: Arc<HookFn>,
}

impl CustomHook {
    pub fn new(
        id: impl Into<String>,
        func: impl for<'a, 'b> Fn(&'a mut CombatContext<'b>, Side) + Send + Sync + 'static,
    ) -> Self {
        CustomHook {
            id: id.into(),
            func: Arc::new(func),
        }
    }
}

impl fmt::Debug for CustomHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomHook").field("id", &self.id).finish()
    }
}

impl EffectHook for CustomHook {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, ctx: &mut CombatContext<'_>, owner: Side) {
        (self.func)(ctx, owner);
    }
}

/// Effect attached to a weapon or ability
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Hook {
    /// Bearer gains an in-combat stat bonus
    StatBonus {
        stat: Stat,
        value: i32,
        #[serde(default)]
        when: Condition,
    },
    /// Bearer's foe suffers an in-combat stat penalty
    FoePenalty {
        stat: Stat,
        value: i32,
        #[serde(default)]
        when: Condition,
    },
    /// Flat damage added to the bearer's hits
    FixedDamage {
        value: i32,
        #[serde(default)]
        when: Condition,
    },
    /// Flat damage removed from hits against the bearer
    FixedReduction {
        value: i32,
        #[serde(default)]
        when: Condition,
    },
    /// Percentage of damage removed from hits against the bearer
    PercentReduction {
        percent: i32,
        #[serde(default)]
        when: Condition,
    },
    /// Bearer's hits target the lower of Def/Res
    AdaptiveDamage {
        #[serde(default)]
        when: Condition,
    },
    /// Queue a buff/debuff applied by the orchestrator after the attack
    BuffAfterAttack {
        stat: Stat,
        value: i32,
        #[serde(default)]
        target: BuffTarget,
        #[serde(default)]
        when: Condition,
    },
    #[serde(skip)]
    Custom(CustomHook),
}

impl Hook {
    pub fn custom(
        id: impl Into<String>,
        func: impl for<'a, 'b> Fn(&'a mut CombatContext<'b>, Side) + Send + Sync + 'static,
    ) -> Self {
        Hook::Custom(CustomHook::new(id, func))
    }

    fn condition(&self) -> Condition {
        match self {
            Hook::StatBonus { when, .. }
            | Hook::FoePenalty { when, .. }
            | Hook::FixedDamage { when, .. }
            | Hook::FixedReduction { when, .. }
            | Hook::PercentReduction { when, .. }
            | Hook::AdaptiveDamage { when }
            | Hook::BuffAfterAttack { when, .. } => *when,
            Hook::Custom(_) => Condition::Always,
        }
    }
}

impl EffectHook for Hook {
    fn id(&self) -> &str {
        match self {
            Hook::StatBonus { .. } => "stat_bonus",
            Hook::FoePenalty { .. } => "foe_penalty",
            Hook::FixedDamage { .. } => "fixed_damage",
            Hook::FixedReduction { .. } => "fixed_reduction",
            Hook::PercentReduction { .. } => "percent_reduction",
            Hook::AdaptiveDamage { .. } => "adaptive_damage",
            Hook::BuffAfterAttack { .. } => "buff_after_attack",
            Hook::Custom(custom) => custom.id(),
        }
    }

    fn apply(&self, ctx: &mut CombatContext<'_>, owner: Side) {
        if !self.condition().holds(ctx, owner) {
            return;
        }

        // Offensive modifiers only matter while the bearer strikes, defensive
        // ones only while it is struck.
        let applied = match self {
            Hook::StatBonus { stat, value, .. } => {
                ctx.modifiers_mut(owner).stats.add(*stat, *value);
                true
            }
            Hook::FoePenalty { stat, value, .. } => {
                ctx.modifiers_mut(owner.opposite()).stats.add(*stat, -*value);
                true
            }
            Hook::FixedDamage { value, .. } => {
                if owner == Side::Attacker {
                    ctx.attacker_mods.fixed_damage += *value;
                }
                owner == Side::Attacker
            }
            Hook::FixedReduction { value, .. } => {
                if owner == Side::Defender {
                    ctx.defender_mods.fixed_reduction += *value;
                }
                owner == Side::Defender
            }
            Hook::PercentReduction { percent, .. } => {
                if owner == Side::Defender {
                    ctx.defender_mods.percent_reduction += *percent;
                }
                owner == Side::Defender
            }
            Hook::AdaptiveDamage { .. } => {
                if owner == Side::Attacker {
                    ctx.attacker_mods.adaptive_damage = true;
                }
                owner == Side::Attacker
            }
            Hook::BuffAfterAttack {
                stat,
                value,
                target,
                ..
            } => {
                let target = match target {
                    BuffTarget::Owner => owner,
                    BuffTarget::Foe => owner.opposite(),
                };
                let source = format!(
                    "{}:{}#{}",
                    ctx.unit(owner).name,
                    self.id(),
                    ctx.hook_position()
                );
                ctx.queue_buff(PendingBuff {
                    target,
                    stat: *stat,
                    value: *value,
                    source,
                });
                true
            }
            Hook::Custom(custom) => {
                custom.apply(ctx, owner);
                return;
            }
        };

        if applied {
            let bearer = ctx.unit(owner).name.clone();
            ctx.add_log(format!("{} ({:?}): {}", bearer, owner, self.id()));
        }
    }
}
