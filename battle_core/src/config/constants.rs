//! Ruleset constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable ruleset constants. Defaults match the reference ruleset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    /// Speed lead needed for a follow-up
    #[serde(default = "default_follow_up_threshold")]
    pub follow_up_threshold: i32,
    /// Attack bonus/penalty from the weapon triangle, in percent
    #[serde(default = "default_triangle_percent")]
    pub triangle_percent: i32,
    /// Attack bonus against an effective target, in percent
    #[serde(default = "default_effective_percent")]
    pub effective_percent: i32,
    /// Defensive stat bonus on defensive terrain, in percent
    #[serde(default = "default_terrain_percent")]
    pub terrain_percent: i32,
    /// Share of damage staves deal, in percent
    #[serde(default = "default_staff_percent")]
    pub staff_percent: i32,
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset {
            follow_up_threshold: default_follow_up_threshold(),
            triangle_percent: default_triangle_percent(),
            effective_percent: default_effective_percent(),
            terrain_percent: default_terrain_percent(),
            staff_percent: default_staff_percent(),
        }
    }
}

impl Ruleset {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.follow_up_threshold < 0 {
            return Err(ConfigError::ValidationError(
                "follow_up_threshold must not be negative".to_string(),
            ));
        }
        if !(0..=100).contains(&self.triangle_percent) {
            return Err(ConfigError::ValidationError(format!(
                "triangle_percent {} outside 0..=100",
                self.triangle_percent
            )));
        }
        if self.effective_percent < 0 || self.terrain_percent < 0 {
            return Err(ConfigError::ValidationError(
                "effective_percent and terrain_percent must not be negative".to_string(),
            ));
        }
        if !(0..=100).contains(&self.staff_percent) {
            return Err(ConfigError::ValidationError(format!(
                "staff_percent {} outside 0..=100",
                self.staff_percent
            )));
        }
        Ok(())
    }
}

fn default_follow_up_threshold() -> i32 {
    5
}
fn default_triangle_percent() -> i32 {
    20
}
fn default_effective_percent() -> i32 {
    50
}
fn default_terrain_percent() -> i32 {
    30
}
fn default_staff_percent() -> i32 {
    50
}
