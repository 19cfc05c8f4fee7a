//! Round results - per-attack outcomes, the round trace and the winner

use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attack phase within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Initiator's first attack
    Init,
    /// Defender's retaliation
    Counter,
    /// Initiator's second attack
    FollowUp,
    /// Initiator's extra attack after its follow-up
    Potent,
    /// Defender's second attack
    FollowUpCounter,
    /// Defender's extra attack after its follow-up
    PotentCounter,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::Counter => "counter",
            Phase::FollowUp => "follow_up",
            Phase::Potent => "potent",
            Phase::FollowUpCounter => "follow_up_counter",
            Phase::PotentCounter => "potent_counter",
        }
    }

    /// Which side of this phase's strike started the round
    pub fn initiator(self) -> Side {
        match self {
            Phase::Init | Phase::FollowUp | Phase::Potent => Side::Attacker,
            Phase::Counter | Phase::FollowUpCounter | Phase::PotentCounter => Side::Defender,
        }
    }

    pub fn is_potent(self) -> bool {
        matches!(self, Phase::Potent | Phase::PotentCounter)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One annotated value in a breakdown or trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageStep {
    pub label: String,
    pub value: i64,
    #[serde(default)]
    pub note: String,
}

impl DamageStep {
    pub fn new(label: impl Into<String>, value: impl Into<i64>, note: impl Into<String>) -> Self {
        DamageStep {
            label: label.into(),
            value: value.into(),
            note: note.into(),
        }
    }
}

/// Outcome of one attack (one or two hits) within a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub attacker: String,
    pub defender: String,
    /// Total damage of all hits in this attack
    pub damage: u32,
    /// Whether the defender ended this attack at 0 HP
    pub ko: bool,
    pub hp_before: u32,
    pub hp_after: u32,
    pub hit_damages: Vec<u32>,
    /// Step-level annotations; empty unless detailed mode is on
    #[serde(default)]
    pub steps: Vec<DamageStep>,
    pub phase: Phase,
}

impl AttackResult {
    pub fn hit_count(&self) -> usize {
        self.hit_damages.len()
    }

    /// HP actually removed from the defender
    pub fn hp_lost(&self) -> u32 {
        self.hp_before - self.hp_after
    }

    pub fn summary(&self) -> String {
        let hits = if self.hit_damages.len() > 1 {
            let parts: Vec<String> = self.hit_damages.iter().map(|d| d.to_string()).collect();
            format!(" ({})", parts.join(" + "))
        } else {
            String::new()
        };
        let mut line = format!(
            "[{}] {} hits {} for {}{}, HP {} -> {}",
            self.phase,
            self.attacker,
            self.defender,
            self.damage,
            hits,
            self.hp_before,
            self.hp_after
        );
        if self.ko {
            line.push_str(", KO");
        }
        line
    }
}

/// Append-only record of every hit and attack total in a round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTrace {
    steps: Vec<DamageStep>,
}

impl RoundTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: DamageStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[DamageStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether any step was recorded for the given phase
    pub fn contains_phase(&self, phase: Phase) -> bool {
        let prefix = format!("{}_", phase.as_str());
        self.steps.iter().any(|s| {
            s.label
                .strip_prefix(&prefix)
                .is_some_and(|rest| rest.starts_with("hit") || rest == "total")
        })
    }
}

/// Outcome of a full round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Attacks in the order they happened
    pub round_summary: Vec<AttackResult>,
    /// Sole survivor, or `None` for a draw or mutual KO
    pub winner: Option<String>,
    #[serde(default)]
    pub trace: RoundTrace,
}

impl BattleResult {
    pub fn phases(&self) -> Vec<Phase> {
        self.round_summary.iter().map(|a| a.phase).collect()
    }

    pub fn attack(&self, phase: Phase) -> Option<&AttackResult> {
        self.round_summary.iter().find(|a| a.phase == phase)
    }

    pub fn has_phase(&self, phase: Phase) -> bool {
        self.attack(phase).is_some()
    }

    /// Total damage dealt by the named combatant
    pub fn damage_dealt_by(&self, name: &str) -> u32 {
        self.round_summary
            .iter()
            .filter(|a| a.attacker == name)
            .map(|a| a.damage)
            .sum()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self.round_summary.iter().map(AttackResult::summary).collect();
        match &self.winner {
            Some(name) => lines.push(format!("Winner: {}", name)),
            None => lines.push("No winner".to_string()),
        }
        lines.join("\n")
    }
}
