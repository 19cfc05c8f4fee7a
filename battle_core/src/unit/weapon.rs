//! Weapon - equipped item supplying might, color and hooks

use crate::effect::Hook;
use crate::types::{Color, MoveType, WeaponType};
use serde::{Deserialize, Serialize};

/// A weapon as supplied by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Base power added to the wielder's attack
    pub might: i32,
    #[serde(default = "default_color")]
    pub color: Color,
    /// 1 = melee, 2 = ranged
    #[serde(default = "default_range")]
    pub range: u8,
    pub weapon_type: WeaponType,
    /// Movement categories this weapon deals effective damage against
    #[serde(default)]
    pub effective_against: Vec<MoveType>,
    /// Effect hooks, applied in order
    #[serde(default)]
    pub hooks: Vec<Hook>,
}

fn default_color() -> Color {
    Color::Colorless
}

fn default_range() -> u8 {
    1
}

impl Weapon {
    /// Create a weapon with the category's default range and no hooks
    pub fn new(name: impl Into<String>, might: i32, color: Color, weapon_type: WeaponType) -> Self {
        Weapon {
            name: name.into(),
            might,
            color,
            range: weapon_type.default_range(),
            weapon_type,
            effective_against: Vec::new(),
            hooks: Vec::new(),
        }
    }

    pub fn with_range(mut self, range: u8) -> Self {
        self.range = range;
        self
    }

    pub fn with_effective_against(mut self, movement: MoveType) -> Self {
        if !self.effective_against.contains(&movement) {
            self.effective_against.push(movement);
        }
        self
    }

    pub fn with_hook(mut self, hook: Hook) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn is_ranged(&self) -> bool {
        self.range >= 2
    }
}
