//! Combatant - a fully equipped unit taking part in a round

mod ability;
mod capability;
mod special;
mod stat_line;
mod weapon;

pub use ability::{Ability, EquipError};
pub use capability::{Capabilities, Capability, Flag, FlagPredicate, FoePredicate};
pub use special::{Special, SpecialEffect};
pub use stat_line::StatLine;
pub use weapon::Weapon;

use crate::effect::Hook;
use crate::types::{Color, MoveType, SkillSlot, Stat, WeaponType};
use std::collections::{BTreeMap, BTreeSet};

/// Complete combat state for one unit
///
/// Built by the catalog layer; resolution only touches `hp` and `buffs`.
#[derive(Debug, Clone)]
pub struct Combatant {
    // === Identity ===
    pub name: String,
    pub movement: MoveType,

    // === Resources ===
    /// Current hit points, never negative; 0 means dead
    pub hp: u32,
    pub max_hp: u32,

    // === Stats ===
    pub base: StatLine,
    /// Net buffs minus debuffs per stat
    pub buffs: StatLine,

    // === Equipment ===
    weapon: Option<Weapon>,
    abilities: BTreeMap<SkillSlot, Ability>,
    pub special: Option<Special>,

    // === Combat Flags ===
    /// Movement categories this unit deals effective damage against
    pub effective_against: BTreeSet<MoveType>,
    pub on_defensive_tile: bool,
    pub capabilities: Capabilities,
}

impl Combatant {
    /// Create an unequipped infantry unit at full health
    pub fn new(name: impl Into<String>, max_hp: u32, base: StatLine) -> Self {
        Combatant {
            name: name.into(),
            movement: MoveType::Infantry,
            hp: max_hp,
            max_hp,
            base,
            buffs: StatLine::default(),
            weapon: None,
            abilities: BTreeMap::new(),
            special: None,
            effective_against: BTreeSet::new(),
            on_defensive_tile: false,
            capabilities: Capabilities::default(),
        }
    }

    pub fn with_movement(mut self, movement: MoveType) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_special(mut self, special: impl Into<Special>) -> Self {
        self.special = Some(special.into());
        self
    }

    pub fn with_effective_against(mut self, movement: MoveType) -> Self {
        self.effective_against.insert(movement);
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn on_defensive_tile(mut self, flag: bool) -> Self {
        self.on_defensive_tile = flag;
        self
    }

    // === Health ===

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtract damage, clamping at 0. Returns the HP actually lost.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        let lost = damage.min(self.hp);
        self.hp -= lost;
        lost
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    // === Visible stats ===

    /// Base + net buff, floored at 0. Attack does not include might here.
    pub fn visible(&self, stat: Stat) -> i32 {
        (self.base.get(stat) + self.buffs.get(stat)).max(0)
    }

    /// Base attack + weapon might + net attack buff, floored at 0
    pub fn visible_attack(&self) -> i32 {
        (self.base.atk + self.might() + self.buffs.atk).max(0)
    }

    pub fn visible_speed(&self) -> i32 {
        self.visible(Stat::Spd)
    }

    pub fn visible_defense(&self) -> i32 {
        self.visible(Stat::Def)
    }

    pub fn visible_resistance(&self) -> i32 {
        self.visible(Stat::Res)
    }

    // === Buffs ===

    /// Net-add a buff (positive) or debuff (negative)
    pub fn apply_buff(&mut self, stat: Stat, amount: i32) {
        self.buffs.add(stat, amount);
    }

    pub fn clear_buffs(&mut self) {
        self.buffs = StatLine::default();
    }

    // === Weapon ===

    /// Swap in a weapon, returning the previously equipped one
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    pub fn unequip_weapon(&mut self) -> Option<Weapon> {
        self.weapon.take()
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn has_weapon(&self) -> bool {
        self.weapon.is_some()
    }

    /// Might of the equipped weapon, 0 when unarmed
    pub fn might(&self) -> i32 {
        self.weapon.as_ref().map_or(0, |w| w.might)
    }

    pub fn weapon_type(&self) -> Option<WeaponType> {
        self.weapon.as_ref().map(|w| w.weapon_type)
    }

    /// Color of the equipped weapon; `None` when unarmed
    pub fn color(&self) -> Option<Color> {
        self.weapon.as_ref().map(|w| w.color)
    }

    // === Abilities ===

    /// Equip an ability into its slot after checking its restrictions.
    /// Returns whatever previously occupied the slot.
    pub fn equip_ability(&mut self, ability: Ability) -> Result<Option<Ability>, EquipError> {
        ability.check_usable(self.movement, self.weapon_type())?;
        Ok(self.abilities.insert(ability.slot, ability))
    }

    pub fn unequip_ability(&mut self, slot: SkillSlot) -> Option<Ability> {
        self.abilities.remove(&slot)
    }

    pub fn ability(&self, slot: SkillSlot) -> Option<&Ability> {
        self.abilities.get(&slot)
    }

    /// Equipped abilities in slot order
    pub fn abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.values()
    }

    // === Derived combat checks ===

    /// Weapon hooks first, then ability hooks in slot order
    pub fn hooks(&self) -> impl Iterator<Item = &Hook> {
        self.weapon
            .iter()
            .flat_map(|w| w.hooks.iter())
            .chain(self.abilities.values().flat_map(|a| a.hooks.iter()))
    }

    /// Whether this unit deals effective damage to the given movement category,
    /// from either its own tags or its weapon
    pub fn is_effective_against(&self, movement: MoveType) -> bool {
        self.effective_against.contains(&movement)
            || self
                .weapon
                .as_ref()
                .is_some_and(|w| w.effective_against.contains(&movement))
    }
}
