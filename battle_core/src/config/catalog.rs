//! Catalog configuration - weapons, abilities and unit definitions

use super::ConfigError;
use crate::types::MoveType;
use crate::unit::{Ability, Capabilities, Combatant, EquipError, Special, StatLine, Weapon};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Why a combatant could not be built from the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),
    #[error("Unknown ability: {0}")]
    UnknownAbility(String),
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Equip failed: {0}")]
    Equip(#[from] EquipError),
}

/// Raw catalog file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub units: Vec<UnitDef>,
}

/// A unit as written in a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDef {
    pub name: String,
    pub hp: u32,
    pub atk: i32,
    pub spd: i32,
    pub def: i32,
    pub res: i32,
    #[serde(default = "default_movement")]
    pub movement: MoveType,
    /// Weapon name, looked up in the catalog
    #[serde(default)]
    pub weapon: Option<String>,
    /// Ability names, looked up in the catalog
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub special: Option<Special>,
    #[serde(default)]
    pub effective_against: Vec<MoveType>,
    #[serde(default)]
    pub on_defensive_tile: bool,

    // === Capabilities ===
    #[serde(default)]
    pub guaranteed_follow_up: bool,
    #[serde(default)]
    pub denies_foe_follow_up: bool,
    #[serde(default)]
    pub potent: bool,
    #[serde(default)]
    pub brave: bool,
    #[serde(default)]
    pub adaptive_damage: bool,
}

fn default_movement() -> MoveType {
    MoveType::Infantry
}

impl UnitDef {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            guaranteed_follow_up: self.guaranteed_follow_up.into(),
            denies_foe_follow_up: self.denies_foe_follow_up.into(),
            potent: self.potent.into(),
            brave: self.brave.into(),
            adaptive_damage: self.adaptive_damage,
        }
    }
}

/// Name-indexed catalog used to assemble combatants
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    weapons: HashMap<String, Weapon>,
    abilities: HashMap<String, Ability>,
    units: HashMap<String, UnitDef>,
}

impl Catalog {
    pub fn from_config(config: CatalogConfig) -> Self {
        let mut catalog = Catalog::default();
        for weapon in config.weapons {
            catalog.weapons.insert(weapon.name.clone(), weapon);
        }
        for ability in config.abilities {
            catalog.abilities.insert(ability.name.clone(), ability);
        }
        for unit in config.units {
            catalog.units.insert(unit.name.clone(), unit);
        }
        catalog
    }

    /// Parse a catalog from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = super::parse_toml(content)?;
        Ok(Self::from_config(config))
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: CatalogConfig = super::load_toml(path)?;
        Ok(Self::from_config(config))
    }

    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.get(name)
    }

    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.get(name)
    }

    pub fn unit(&self, name: &str) -> Option<&UnitDef> {
        self.units.get(name)
    }

    /// Build a full-HP combatant from a unit definition.
    ///
    /// The weapon is equipped before abilities so weapon restrictions see it.
    pub fn build_combatant(&self, name: &str) -> Result<Combatant, CatalogError> {
        let def = self
            .units
            .get(name)
            .ok_or_else(|| CatalogError::UnknownUnit(name.to_string()))?;

        let mut unit = Combatant::new(
            def.name.clone(),
            def.hp,
            StatLine::new(def.atk, def.spd, def.def, def.res),
        )
        .with_movement(def.movement)
        .with_capabilities(def.capabilities())
        .on_defensive_tile(def.on_defensive_tile);

        for movement in &def.effective_against {
            unit = unit.with_effective_against(*movement);
        }
        if let Some(special) = &def.special {
            unit = unit.with_special(special.clone());
        }

        if let Some(weapon_name) = &def.weapon {
            let weapon = self
                .weapons
                .get(weapon_name)
                .ok_or_else(|| CatalogError::UnknownWeapon(weapon_name.clone()))?;
            unit.equip_weapon(weapon.clone());
        }

        for ability_name in &def.abilities {
            let ability = self
                .abilities
                .get(ability_name)
                .ok_or_else(|| CatalogError::UnknownAbility(ability_name.clone()))?;
            unit.equip_ability(ability.clone())?;
        }

        tracing::debug!("built combatant {} from catalog", unit.name);
        Ok(unit)
    }
}
