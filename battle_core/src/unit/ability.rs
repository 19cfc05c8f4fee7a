//! Ability - slotted skill with usability restrictions and hooks

use crate::effect::Hook;
use crate::types::{MoveType, SkillSlot, WeaponType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an ability could not be equipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipError {
    #[error("{ability} cannot be used by {movement:?} units")]
    MovementRestricted { ability: String, movement: MoveType },
    #[error("{ability} cannot be used with {weapon_type:?}")]
    WeaponRestricted {
        ability: String,
        weapon_type: Option<WeaponType>,
    },
}

/// A skill as supplied by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub slot: SkillSlot,
    #[serde(default)]
    pub description: String,
    /// Allowed movement categories; empty means unrestricted
    #[serde(default)]
    pub movement_restrictions: Vec<MoveType>,
    /// Allowed weapon categories; empty means unrestricted
    #[serde(default)]
    pub weapon_restrictions: Vec<WeaponType>,
    #[serde(default)]
    pub hooks: Vec<Hook>,
    #[serde(default)]
    pub refinable: bool,
}

impl Ability {
    pub fn new(name: impl Into<String>, slot: SkillSlot) -> Self {
        Ability {
            name: name.into(),
            slot,
            description: String::new(),
            movement_restrictions: Vec::new(),
            weapon_restrictions: Vec::new(),
            hooks: Vec::new(),
            refinable: false,
        }
    }

    pub fn with_hook(mut self, hook: Hook) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn restricted_to_movement(mut self, movement: &[MoveType]) -> Self {
        self.movement_restrictions = movement.to_vec();
        self
    }

    pub fn restricted_to_weapons(mut self, weapons: &[WeaponType]) -> Self {
        self.weapon_restrictions = weapons.to_vec();
        self
    }

    /// Check both allow-lists against a unit's movement and weapon
    pub fn check_usable(
        &self,
        movement: MoveType,
        weapon_type: Option<WeaponType>,
    ) -> Result<(), EquipError> {
        if !self.movement_restrictions.is_empty()
            && !self.movement_restrictions.contains(&movement)
        {
            return Err(EquipError::MovementRestricted {
                ability: self.name.clone(),
                movement,
            });
        }

        let weapon_allowed = match weapon_type {
            Some(wt) => self.weapon_restrictions.contains(&wt),
            None => false,
        };
        if !self.weapon_restrictions.is_empty() && !weapon_allowed {
            return Err(EquipError::WeaponRestricted {
                ability: self.name.clone(),
                weapon_type,
            });
        }

        Ok(())
    }

    pub fn is_usable_by(&self, movement: MoveType, weapon_type: Option<WeaponType>) -> bool {
        self.check_usable(movement, weapon_type).is_ok()
    }
}
