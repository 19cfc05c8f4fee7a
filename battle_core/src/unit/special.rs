//! Specials - named charge effects that add damage or pierce defenses

use serde::{Deserialize, Serialize};

/// A named special, resolved from its display name when a unit is built
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Special {
    Moonbow,
    Luna,
    Glimmer,
    NightSky,
    Astra,
    /// Recognized by name only; contributes nothing
    Other(String),
}

/// What a special does to a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialEffect {
    None,
    /// Ignore this percentage of the defensive stat
    IgnoreDefense { percent: i32 },
    /// Add this percentage of the pre-special damage
    BonusDamage { percent: i32 },
}

impl Special {
    /// Resolve a display name. Matching ignores case, spaces and hyphens.
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "moonbow" => Special::Moonbow,
            "luna" => Special::Luna,
            "glimmer" => Special::Glimmer,
            "nightsky" => Special::NightSky,
            "astra" => Special::Astra,
            _ => Special::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Special::Moonbow => "Moonbow",
            Special::Luna => "Luna",
            Special::Glimmer => "Glimmer",
            Special::NightSky => "Night Sky",
            Special::Astra => "Astra",
            Special::Other(name) => name,
        }
    }

    pub fn effect(&self) -> SpecialEffect {
        match self {
            Special::Moonbow => SpecialEffect::IgnoreDefense { percent: 30 },
            Special::Luna => SpecialEffect::IgnoreDefense { percent: 50 },
            Special::Glimmer | Special::NightSky => SpecialEffect::BonusDamage { percent: 50 },
            Special::Astra => SpecialEffect::BonusDamage { percent: 150 },
            Special::Other(_) => SpecialEffect::None,
        }
    }
}

impl From<String> for Special {
    fn from(name: String) -> Self {
        Special::from_name(&name)
    }
}

impl From<&str> for Special {
    fn from(name: &str) -> Self {
        Special::from_name(name)
    }
}

impl From<Special> for String {
    fn from(special: Special) -> Self {
        special.name().to_string()
    }
}
