//! DamageBreakdown - every intermediate value of one damage calculation

use crate::combat::DamageStep;
use crate::types::Stat;
use serde::{Deserialize, Serialize};

/// Intermediate values of a single hit, in pipeline order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Visible attack plus in-combat modifiers
    pub visible_attack: i32,
    /// Def or Res
    pub defensive_stat_kind: Stat,
    /// Defensive stat before terrain and specials
    pub defensive_stat: i32,
    /// 1 advantage, -1 disadvantage, 0 neutral
    pub triangle_advantage: i32,
    pub attack_after_triangle: i32,
    pub effective: bool,
    pub attack_after_effectiveness: i32,
    pub defensive_terrain: bool,
    pub defensive_after_terrain: i32,
    pub defensive_after_special: i32,
    pub special_bonus: i32,
    pub fixed_damage: i32,
    pub percent_reduction: i32,
    pub fixed_reduction: i32,
    pub staff: bool,
    /// Damage before the final floor
    pub base_damage: i32,
    /// Final damage dealt
    pub damage: u32,
    /// Messages hooks left in the context
    #[serde(default)]
    pub hook_log: Vec<String>,
}

impl Default for DamageBreakdown {
    fn default() -> Self {
        DamageBreakdown {
            visible_attack: 0,
            defensive_stat_kind: Stat::Def,
            defensive_stat: 0,
            triangle_advantage: 0,
            attack_after_triangle: 0,
            effective: false,
            attack_after_effectiveness: 0,
            defensive_terrain: false,
            defensive_after_terrain: 0,
            defensive_after_special: 0,
            special_bonus: 0,
            fixed_damage: 0,
            percent_reduction: 0,
            fixed_reduction: 0,
            staff: false,
            base_damage: 0,
            damage: 0,
            hook_log: Vec::new(),
        }
    }
}

impl DamageBreakdown {
    /// Step-level annotations, each label prefixed (e.g. "init_hit1")
    pub fn steps(&self, prefix: &str) -> Vec<DamageStep> {
        let defensive_note = match self.defensive_stat_kind {
            Stat::Res => "Targets resistance",
            _ => "Targets defense",
        };
        let triangle_note = match self.triangle_advantage {
            1 => "Triangle advantage",
            -1 => "Triangle disadvantage",
            _ => "Triangle neutral",
        };

        let step = |name: &str, value: i32, note: &str| {
            DamageStep::new(format!("{prefix}_{name}"), value, note)
        };

        // Hooks run first, so their log entries lead the breakdown
        let mut steps: Vec<DamageStep> = self
            .hook_log
            .iter()
            .enumerate()
            .map(|(i, entry)| step(format!("hook{}", i + 1).as_str(), 0, entry.as_str()))
            .collect();

        steps.push(step(
            "visible_attack",
            self.visible_attack,
            "Atk + might + buffs + in-combat",
        ));
        steps.push(step("defensive_stat", self.defensive_stat, defensive_note));
        steps.push(step("triangle", self.attack_after_triangle, triangle_note));

        if self.effective {
            steps.push(step(
                "effective",
                self.attack_after_effectiveness,
                "Effective against target",
            ));
        }
        if self.defensive_terrain {
            steps.push(step(
                "terrain",
                self.defensive_after_terrain,
                "Defensive terrain",
            ));
        }
        if self.defensive_after_special != self.defensive_after_terrain {
            steps.push(step(
                "special_pierce",
                self.defensive_after_special,
                "Special ignores part of the defensive stat",
            ));
        }
        if self.special_bonus != 0 {
            steps.push(step("special_bonus", self.special_bonus, "Special bonus damage"));
        }
        if self.fixed_damage != 0 {
            steps.push(step("fixed_damage", self.fixed_damage, "Fixed damage"));
        }
        if self.percent_reduction != 0 {
            steps.push(step(
                "percent_reduction",
                self.percent_reduction,
                "Percent damage reduction",
            ));
        }
        if self.fixed_reduction != 0 {
            steps.push(step(
                "fixed_reduction",
                self.fixed_reduction,
                "Fixed damage reduction",
            ));
        }
        if self.staff {
            steps.push(step("staff", self.base_damage, "Staff damage halved"));
        }
        steps.push(step("base_damage", self.base_damage, "Before floor"));
        steps
    }
}
