//! Options for a single round

use crate::config::{self, ConfigError, Ruleset};
use crate::damage::DamageOverrides;
use crate::types::Terrain;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Caller-supplied round configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOptions {
    /// Keep step-level annotations in each attack result
    #[serde(default)]
    pub detailed: bool,
    /// Terrain under the defender for this round only
    #[serde(default)]
    pub terrain: Option<Terrain>,
    #[serde(default)]
    pub ruleset: Ruleset,
}

impl BattleOptions {
    pub fn detailed() -> Self {
        BattleOptions {
            detailed: true,
            ..Default::default()
        }
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    /// Parse options from a TOML string and validate the ruleset
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let options: BattleOptions = config::parse_toml(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file and validate the ruleset
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let options: BattleOptions = config::load_toml(path)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ruleset.validate()
    }

    pub(crate) fn damage_overrides(&self) -> DamageOverrides {
        DamageOverrides {
            weapon_type: None,
            terrain: self.terrain,
        }
    }
}
