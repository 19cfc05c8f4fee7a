//! CombatContext - per-hit scratch state shared by hooks and the damage pipeline

use crate::combat::Phase;
use crate::types::{Side, Stat};
use crate::unit::{Combatant, StatLine};
use serde::{Deserialize, Serialize};

/// Modifiers hooks accumulate for one side of a hit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatModifiers {
    /// In-combat stat bonuses and penalties
    pub stats: StatLine,
    /// Added to damage when this side strikes
    pub fixed_damage: i32,
    /// Subtracted from damage when this side is struck
    pub fixed_reduction: i32,
    /// Percentage of damage negated when this side is struck (summed, capped at 100)
    pub percent_reduction: i32,
    pub adaptive_damage: bool,
}

/// A buff a hook asks the orchestrator to apply once the attack is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingBuff {
    pub target: Side,
    pub stat: Stat,
    pub value: i32,
    /// Bearer, hook id and list position of the hook that raised it
    pub source: String,
}

/// Context for a single hit.
///
/// Created by the orchestrator, mutated by hooks in order, read by the
/// damage pipeline, then dropped. Hooks never touch the combatants directly.
#[derive(Debug)]
pub struct CombatContext<'a> {
    pub attacker: &'a Combatant,
    pub defender: &'a Combatant,
    pub phase: Phase,
    /// 0 for the first hit of an attack, 1 for a brave follow-through
    pub hit_index: u8,
    /// Which side of this hit started the round
    pub initiator: Side,
    /// Final damage, set by the pipeline
    pub damage: u32,
    pub attacker_mods: CombatModifiers,
    pub defender_mods: CombatModifiers,
    /// Position of the running hook in its bearer's hook list
    hook_position: usize,
    pending_buffs: Vec<PendingBuff>,
    log: Vec<String>,
}

impl<'a> CombatContext<'a> {
    pub fn new(attacker: &'a Combatant, defender: &'a Combatant, phase: Phase) -> Self {
        CombatContext {
            attacker,
            defender,
            phase,
            hit_index: 0,
            initiator: phase.initiator(),
            damage: 0,
            attacker_mods: CombatModifiers::default(),
            defender_mods: CombatModifiers::default(),
            hook_position: 0,
            pending_buffs: Vec::new(),
            log: Vec::new(),
        }
    }

    pub fn with_hit_index(mut self, hit_index: u8) -> Self {
        self.hit_index = hit_index;
        self
    }

    /// The combatant on the given side of this hit
    pub fn unit(&self, side: Side) -> &'a Combatant {
        match side {
            Side::Attacker => self.attacker,
            Side::Defender => self.defender,
        }
    }

    pub fn modifiers(&self, side: Side) -> &CombatModifiers {
        match side {
            Side::Attacker => &self.attacker_mods,
            Side::Defender => &self.defender_mods,
        }
    }

    pub fn modifiers_mut(&mut self, side: Side) -> &mut CombatModifiers {
        match side {
            Side::Attacker => &mut self.attacker_mods,
            Side::Defender => &mut self.defender_mods,
        }
    }

    /// Whether the unit on `side` started the round
    pub fn is_initiator(&self, side: Side) -> bool {
        self.initiator == side
    }

    pub fn hook_position(&self) -> usize {
        self.hook_position
    }

    pub(crate) fn set_hook_position(&mut self, position: usize) {
        self.hook_position = position;
    }

    pub fn queue_buff(&mut self, buff: PendingBuff) {
        self.pending_buffs.push(buff);
    }

    pub fn pending_buffs(&self) -> &[PendingBuff] {
        &self.pending_buffs
    }

    pub fn take_pending_buffs(&mut self) -> Vec<PendingBuff> {
        std::mem::take(&mut self.pending_buffs)
    }

    pub fn add_log(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn take_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }
}
