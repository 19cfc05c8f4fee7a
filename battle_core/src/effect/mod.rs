//! Effect hook system - ordered mutation of the per-hit combat context

mod context;
mod hook;

pub use context::{CombatContext, CombatModifiers, PendingBuff};
pub use hook::{BuffTarget, Condition, CustomHook, EffectHook, Hook, HookFn};

use crate::types::Side;

/// Run every equipped hook against the context.
///
/// Order: attacker weapon, attacker abilities (slot order), defender weapon,
/// defender abilities.
pub fn apply_hooks(ctx: &mut CombatContext<'_>) {
    for side in [Side::Attacker, Side::Defender] {
        let unit = ctx.unit(side);
        for (position, hook) in unit.hooks().enumerate() {
            tracing::trace!("applying hook {} for {} ({:?})", hook.id(), unit.name, side);
            ctx.set_hook_position(position);
            hook.apply(ctx, side);
        }
    }
}
