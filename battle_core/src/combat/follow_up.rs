//! Follow-up resolution - who attacks a second time this round

use crate::config::Ruleset;
use crate::unit::Combatant;
use serde::{Deserialize, Serialize};

/// Follow-up grants for both sides of a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUps {
    pub attacker: bool,
    pub defender: bool,
}

/// Decide whether `unit` makes a follow-up against `foe`.
///
/// Precedence: own guarantee > foe's denial > speed lead >= threshold.
pub fn grants_follow_up(unit: &Combatant, foe: &Combatant, rules: &Ruleset) -> bool {
    if unit.capabilities.guaranteed_follow_up.evaluate(foe) {
        return true;
    }
    if foe.capabilities.denies_foe_follow_up.evaluate(unit) {
        return false;
    }
    unit.visible_speed() - foe.visible_speed() >= rules.follow_up_threshold
}

/// Resolve both sides independently using current stats
pub fn resolve_follow_ups(
    attacker: &Combatant,
    defender: &Combatant,
    rules: &Ruleset,
) -> FollowUps {
    let follow_ups = FollowUps {
        attacker: grants_follow_up(attacker, defender, rules),
        defender: grants_follow_up(defender, attacker, rules),
    };
    tracing::debug!(
        "follow-ups: {} {}, {} {}",
        attacker.name,
        follow_ups.attacker,
        defender.name,
        follow_ups.defender
    );
    follow_ups
}

/// Whether `unit` gets its potent extra attack
pub fn grants_potent(unit: &Combatant) -> bool {
    unit.capabilities.potent.evaluate()
}
