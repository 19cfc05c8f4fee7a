//! StatLine - one signed value per combat stat

use crate::types::Stat;
use serde::{Deserialize, Serialize};

/// Atk/Spd/Def/Res values. Used for base stats, buffs and in-combat modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatLine {
    #[serde(default)]
    pub atk: i32,
    #[serde(default)]
    pub spd: i32,
    #[serde(default)]
    pub def: i32,
    #[serde(default)]
    pub res: i32,
}

impl StatLine {
    pub fn new(atk: i32, spd: i32, def: i32, res: i32) -> Self {
        StatLine { atk, spd, def, res }
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Spd => self.spd,
            Stat::Def => self.def,
            Stat::Res => self.res,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Atk => &mut self.atk,
            Stat::Spd => &mut self.spd,
            Stat::Def => &mut self.def,
            Stat::Res => &mut self.res,
        }
    }

    /// Net-add a signed amount to one stat
    pub fn add(&mut self, stat: Stat, amount: i32) {
        *self.get_mut(stat) += amount;
    }

    pub fn is_zero(&self) -> bool {
        *self == StatLine::default()
    }
}
