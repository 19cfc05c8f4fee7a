//! Round resolution - sequence attacks between two combatants

use super::follow_up::{grants_potent, resolve_follow_ups};
use super::options::BattleOptions;
use super::result::{AttackResult, BattleResult, DamageStep, Phase, RoundTrace};
use crate::damage::{calculate_damage, DamageOverrides};
use crate::effect::{CombatContext, PendingBuff};
use crate::types::{Side, Stat};
use crate::unit::Combatant;
use std::collections::HashSet;

/// Resolve one combat round, mutating both combatants' HP and buffs.
///
/// Phases, each guarded by both units being alive:
/// 1. Init - attacker strikes
/// 2. Counter - defender strikes back if armed
/// 3. Follow-ups are decided once, from current stats
/// 4. FollowUp, then Potent if the follow-up did not KO
/// 5. FollowUpCounter, then PotentCounter, decided independently of step 4
///
/// Every strike hits twice when the striker is brave and the target survives
/// the first hit.
///
/// `options.ruleset` is used as given; options built in code should pass
/// `BattleOptions::validate` first. `BattleOptions::parse` and `load` do.
pub fn resolve_round(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    options: &BattleOptions,
) -> BattleResult {
    let mut round = Round::new(options);
    tracing::debug!("round start: {} vs {}", attacker.name, defender.name);

    if attacker.is_alive() && defender.is_alive() {
        let init_ko = round.strike(attacker, defender, Phase::Init);

        if !init_ko && defender.is_alive() && attacker.is_alive() && defender.has_weapon() {
            round.strike(defender, attacker, Phase::Counter);
        }

        let follow_ups = resolve_follow_ups(attacker, defender, &options.ruleset);

        if attacker.is_alive() && defender.is_alive() && follow_ups.attacker {
            let ko = round.strike(attacker, defender, Phase::FollowUp);
            if !ko && defender.is_alive() && grants_potent(attacker) {
                round.strike(attacker, defender, Phase::Potent);
            }
        }

        if attacker.is_alive() && defender.is_alive() && follow_ups.defender {
            let ko = round.strike(defender, attacker, Phase::FollowUpCounter);
            if !ko && attacker.is_alive() && grants_potent(defender) {
                round.strike(defender, attacker, Phase::PotentCounter);
            }
        }
    }

    round.finish(attacker, defender)
}

/// Resolve a round on copies, leaving the inputs untouched.
///
/// Returns the post-round attacker, defender and the result.
pub fn preview_round(
    attacker: &Combatant,
    defender: &Combatant,
    options: &BattleOptions,
) -> (Combatant, Combatant, BattleResult) {
    let mut attacker = attacker.clone();
    let mut defender = defender.clone();
    let result = resolve_round(&mut attacker, &mut defender, options);
    (attacker, defender, result)
}

/// Accumulated state of a round in progress
struct Round<'o> {
    options: &'o BattleOptions,
    overrides: DamageOverrides,
    attacks: Vec<AttackResult>,
    trace: RoundTrace,
}

impl<'o> Round<'o> {
    fn new(options: &'o BattleOptions) -> Self {
        Round {
            options,
            overrides: options.damage_overrides(),
            attacks: Vec::new(),
            trace: RoundTrace::new(),
        }
    }

    /// Run one attack and record it. Returns whether the target was knocked out.
    fn strike(&mut self, striker: &mut Combatant, target: &mut Combatant, phase: Phase) -> bool {
        let hits: u8 = if striker.capabilities.brave.evaluate() { 2 } else { 1 };
        let hp_before = target.hp;
        let mut hit_damages = Vec::new();
        let mut steps = Vec::new();
        let mut pending = Vec::new();

        for hit_index in 0..hits {
            if !target.is_alive() {
                break;
            }

            let breakdown = {
                let mut ctx = CombatContext::new(striker, target, phase).with_hit_index(hit_index);
                let breakdown = calculate_damage(&mut ctx, &self.overrides, &self.options.ruleset);
                pending.extend(ctx.take_pending_buffs());
                breakdown
            };

            target.take_damage(breakdown.damage);
            hit_damages.push(breakdown.damage);

            let label = format!("{}_hit{}", phase, hit_index + 1);
            let note = if hit_index == 0 {
                "First hit damage"
            } else {
                "Second brave hit damage"
            };
            if self.options.detailed {
                steps.extend(breakdown.steps(&label));
                steps.push(DamageStep::new(label.clone(), breakdown.damage, note));
            }
            self.trace.push(DamageStep::new(label, breakdown.damage, note));
        }

        let total: u32 = hit_damages.iter().sum();
        let total_step = DamageStep::new(
            format!("{}_total", phase),
            total,
            "Sum of all hits in sequence",
        );
        if self.options.detailed {
            steps.push(total_step.clone());
        }
        self.trace.push(total_step);

        commit_buffs(striker, target, pending);

        let result = AttackResult {
            attacker: striker.name.clone(),
            defender: target.name.clone(),
            damage: total,
            ko: !target.is_alive(),
            hp_before,
            hp_after: target.hp,
            hit_damages,
            steps,
            phase,
        };
        tracing::debug!("{}", result.summary());

        let ko = result.ko;
        self.attacks.push(result);
        ko
    }

    fn finish(self, attacker: &Combatant, defender: &Combatant) -> BattleResult {
        let winner = match (attacker.is_alive(), defender.is_alive()) {
            (true, false) => Some(attacker.name.clone()),
            (false, true) => Some(defender.name.clone()),
            _ => None,
        };
        tracing::debug!(
            "round over after {} attacks, winner: {}",
            self.attacks.len(),
            winner.as_deref().unwrap_or("none")
        );

        BattleResult {
            round_summary: self.attacks,
            winner,
            trace: self.trace,
        }
    }
}

/// Apply buffs queued by hooks during an attack. A hook that raises the same
/// buff again on a brave second hit is applied once; distinct hooks always stack.
fn commit_buffs(striker: &mut Combatant, target: &mut Combatant, pending: Vec<PendingBuff>) {
    let mut seen: HashSet<(Side, Stat, String)> = HashSet::new();
    for buff in pending {
        if !seen.insert((buff.target, buff.stat, buff.source.clone())) {
            continue;
        }
        let unit = match buff.target {
            Side::Attacker => &mut *striker,
            Side::Defender => &mut *target,
        };
        tracing::trace!("{} {:?} {:+} from {}", unit.name, buff.stat, buff.value, buff.source);
        unit.apply_buff(buff.stat, buff.value);
    }
}
