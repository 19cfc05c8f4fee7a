//! Core types shared across the battle engine

use serde::{Deserialize, Serialize};

/// Weapon color for the weapon triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Blue,
    Green,
    /// Takes no part in the triangle
    Colorless,
}

impl Color {
    /// The color this one beats in the red > green > blue > red cycle
    pub fn beats(self) -> Option<Color> {
        match self {
            Color::Red => Some(Color::Green),
            Color::Green => Some(Color::Blue),
            Color::Blue => Some(Color::Red),
            Color::Colorless => None,
        }
    }

    /// Triangle standing against a foe's color: 1 advantage, -1 disadvantage, 0 neutral
    pub fn advantage_against(self, foe: Color) -> i32 {
        if self.beats() == Some(foe) {
            1
        } else if foe.beats() == Some(self) {
            -1
        } else {
            0
        }
    }
}

/// Weapon category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Sword,
    Lance,
    Axe,
    Bow,
    Dagger,
    Tome,
    /// Dragonstones
    Breath,
    Beast,
    Staff,
}

impl WeaponType {
    /// Whether attacks with this weapon target resistance instead of defense
    pub fn targets_resistance(self) -> bool {
        matches!(self, WeaponType::Tome | WeaponType::Breath | WeaponType::Staff)
    }

    /// Whether this is the healing staff category
    pub fn is_staff(self) -> bool {
        self == WeaponType::Staff
    }

    /// Default range for the category
    pub fn default_range(self) -> u8 {
        match self {
            WeaponType::Bow | WeaponType::Dagger | WeaponType::Tome | WeaponType::Staff => 2,
            _ => 1,
        }
    }
}

/// Movement category, also the tag effectiveness bonuses key on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    Infantry,
    Armored,
    Cavalry,
    Flying,
}

/// Stats that buffs, debuffs and in-combat modifiers can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Atk,
    Spd,
    Def,
    Res,
}

/// Ability slot. Ordering here is the hook application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSlot {
    A,
    B,
    C,
    Seal,
    Special,
    Assist,
    X,
}

/// Which side of the current strike a participant is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

/// Terrain under the defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Plain,
    Defensive,
}
