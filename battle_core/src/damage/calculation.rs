//! Damage calculation - turning two combatants into a single hit's damage

use super::DamageBreakdown;
use crate::combat::Phase;
use crate::config::Ruleset;
use crate::effect::{apply_hooks, CombatContext};
use crate::types::{Stat, Terrain, WeaponType};
use crate::unit::{Combatant, SpecialEffect};

/// Per-call overrides for the damage pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageOverrides {
    /// Use this weapon category instead of the attacker's equipped one
    pub weapon_type: Option<WeaponType>,
    /// Terrain under the defender for this calculation
    pub terrain: Option<Terrain>,
}

/// Scale by `(100 + percent) / 100`, truncating toward zero
fn apply_percent(value: i32, percent: i32) -> i32 {
    value * (100 + percent) / 100
}

/// Triangle standing of the attacker's weapon against the defender's.
/// Neutral unless both sides hold a weapon.
pub fn triangle_advantage(attacker: &Combatant, defender: &Combatant) -> i32 {
    match (attacker.color(), defender.color()) {
        (Some(own), Some(foe)) => own.advantage_against(foe),
        _ => 0,
    }
}

/// Calculate one hit's damage
///
/// Pipeline order:
/// 1. Effect hooks mutate the context
/// 2. Visible attack
/// 3. Defensive stat selection (adaptive, magic → Res, else Def)
/// 4. Weapon triangle ±triangle%
/// 5. Effectiveness +effective%
/// 6. Defensive terrain +terrain% to the defensive stat
/// 7. Staff flag
/// 8. Special (pierce the defensive stat, or bonus % of pre-special damage)
/// 9. Fixed damage / fixed reduction
/// 10. Percent reduction
/// 11. base = atk - def + special + fixed damage, then percent reduction,
///     then fixed reduction, then staff
/// 12. Floor at 0
///
/// Every scaling step truncates toward zero. Sets `ctx.damage`.
pub fn calculate_damage(
    ctx: &mut CombatContext<'_>,
    overrides: &DamageOverrides,
    rules: &Ruleset,
) -> DamageBreakdown {
    // Step 1: Hooks run before any stat is read
    apply_hooks(ctx);

    let attacker = ctx.attacker;
    let defender = ctx.defender;
    let atk_mods = ctx.attacker_mods;
    let def_mods = ctx.defender_mods;
    let mut breakdown = DamageBreakdown::default();

    // Step 2: Visible attack
    let mut attack = (attacker.visible_attack() + atk_mods.stats.atk).max(0);
    breakdown.visible_attack = attack;

    // Step 3: Defensive stat
    let def = (defender.visible_defense() + def_mods.stats.def).max(0);
    let res = (defender.visible_resistance() + def_mods.stats.res).max(0);
    let weapon_type = overrides.weapon_type.or_else(|| attacker.weapon_type());
    let adaptive = attacker.capabilities.adaptive_damage || atk_mods.adaptive_damage;

    let (kind, mut defensive) = if adaptive {
        if res < def {
            (Stat::Res, res)
        } else {
            (Stat::Def, def)
        }
    } else if weapon_type.is_some_and(WeaponType::targets_resistance) {
        (Stat::Res, res)
    } else {
        (Stat::Def, def)
    };
    breakdown.defensive_stat_kind = kind;
    breakdown.defensive_stat = defensive;

    // Step 4: Weapon triangle
    breakdown.triangle_advantage = triangle_advantage(attacker, defender);
    attack = apply_percent(attack, breakdown.triangle_advantage * rules.triangle_percent);
    breakdown.attack_after_triangle = attack;

    // Step 5: Effectiveness
    breakdown.effective = attacker.is_effective_against(defender.movement);
    if breakdown.effective {
        attack = apply_percent(attack, rules.effective_percent);
    }
    breakdown.attack_after_effectiveness = attack;

    // Step 6: Terrain
    breakdown.defensive_terrain =
        overrides.terrain == Some(Terrain::Defensive) || defender.on_defensive_tile;
    if breakdown.defensive_terrain {
        defensive = apply_percent(defensive, rules.terrain_percent);
    }
    breakdown.defensive_after_terrain = defensive;

    // Step 7: Staff, applied last
    breakdown.staff = weapon_type.is_some_and(WeaponType::is_staff);

    // Step 8: Special
    let special = attacker
        .special
        .as_ref()
        .map_or(SpecialEffect::None, |s| s.effect());
    match special {
        SpecialEffect::IgnoreDefense { percent } => {
            defensive = apply_percent(defensive, -percent);
        }
        SpecialEffect::BonusDamage { percent } => {
            breakdown.special_bonus = (attack - defensive).max(0) * percent / 100;
        }
        SpecialEffect::None => {}
    }
    breakdown.defensive_after_special = defensive;

    // Steps 9 and 10: Fixed adjustments and percent reduction
    breakdown.fixed_damage = atk_mods.fixed_damage;
    breakdown.fixed_reduction = def_mods.fixed_reduction;
    breakdown.percent_reduction = def_mods.percent_reduction.clamp(0, 100);

    // Step 11: Base damage
    let mut base = attack - defensive + breakdown.special_bonus + breakdown.fixed_damage;
    base = apply_percent(base, -breakdown.percent_reduction);
    base -= breakdown.fixed_reduction;
    if breakdown.staff {
        base = base * rules.staff_percent / 100;
    }
    breakdown.base_damage = base;

    // Step 12: Floor
    breakdown.damage = base.max(0) as u32;
    ctx.damage = breakdown.damage;
    breakdown.hook_log = ctx.take_log();

    tracing::trace!(
        "{} -> {}: atk {} vs {:?} {} = {}",
        attacker.name,
        defender.name,
        attack,
        kind,
        defensive,
        breakdown.damage
    );

    breakdown
}

/// Calculate damage outside a round, as an initiating attack
pub fn calculate_damage_between(
    attacker: &Combatant,
    defender: &Combatant,
    overrides: &DamageOverrides,
    rules: &Ruleset,
) -> DamageBreakdown {
    let mut ctx = CombatContext::new(attacker, defender, Phase::Init);
    calculate_damage(&mut ctx, overrides, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{Condition, Hook};
    use crate::types::{Color, MoveType};
    use crate::unit::{Capabilities, StatLine, Weapon};

    fn swordsman(color: Color) -> Combatant {
        Combatant::new("Eliwood", 40, StatLine::new(30, 40, 25, 20))
            .with_weapon(Weapon::new("Iron Sword", 10, color, WeaponType::Sword))
    }

    fn target(color: Color) -> Combatant {
        Combatant::new("Lute", 35, StatLine::new(32, 25, 15, 30))
            .with_weapon(Weapon::new("Fire", 8, color, WeaponType::Tome))
    }

    fn breakdown_of(attacker: &Combatant, defender: &Combatant) -> DamageBreakdown {
        let overrides = DamageOverrides::default();
        calculate_damage_between(attacker, defender, &overrides, &Ruleset::default())
    }

    fn damage(attacker: &Combatant, defender: &Combatant) -> u32 {
        breakdown_of(attacker, defender).damage
    }

    #[test]
    fn test_physical_uses_defense() {
        let breakdown = calculate_damage_between(
            &swordsman(Color::Red),
            &target(Color::Red),
            &DamageOverrides::default(),
            &Ruleset::default(),
        );
        assert_eq!(breakdown.visible_attack, 40);
        assert_eq!(breakdown.defensive_stat_kind, Stat::Def);
        assert_eq!(breakdown.damage, 25);
    }

    #[test]
    fn test_triangle_advantage_and_disadvantage() {
        // 40 * 1.2 = 48, 40 * 0.8 = 32
        assert_eq!(damage(&swordsman(Color::Red), &target(Color::Green)), 33);
        assert_eq!(damage(&swordsman(Color::Red), &target(Color::Blue)), 17);
    }

    #[test]
    fn test_triangle_truncates_toward_zero() {
        let attacker = Combatant::new("A", 40, StatLine::new(27, 0, 0, 0))
            .with_weapon(Weapon::new("Iron Sword", 6, Color::Red, WeaponType::Sword));
        let defender = Combatant::new("B", 40, StatLine::default())
            .with_weapon(Weapon::new("Iron Axe", 6, Color::Green, WeaponType::Axe));
        // 33 * 1.2 = 39.6
        assert_eq!(damage(&attacker, &defender), 39);

        let defender =
            defender.with_weapon(Weapon::new("Iron Lance", 6, Color::Blue, WeaponType::Lance));
        // 33 * 0.8 = 26.4
        assert_eq!(damage(&attacker, &defender), 26);
    }

    #[test]
    fn test_triangle_neutral_when_unarmed_or_colorless() {
        let unarmed = Combatant::new("Lute", 35, StatLine::new(32, 25, 15, 30));
        assert_eq!(damage(&swordsman(Color::Red), &unarmed), 25);
        assert_eq!(damage(&swordsman(Color::Red), &target(Color::Colorless)), 25);
    }

    #[test]
    fn test_magic_targets_resistance() {
        let mage = Combatant::new("Lute", 35, StatLine::new(32, 25, 15, 30))
            .with_weapon(Weapon::new("Thunder", 8, Color::Blue, WeaponType::Tome));
        let breakdown = calculate_damage_between(
            &mage,
            &swordsman(Color::Red),
            &DamageOverrides::default(),
            &Ruleset::default(),
        );
        assert_eq!(breakdown.defensive_stat_kind, Stat::Res);
        // 40 * 1.2 = 48 vs res 20
        assert_eq!(breakdown.damage, 28);
    }

    #[test]
    fn test_weapon_type_override() {
        let overrides = DamageOverrides {
            weapon_type: Some(WeaponType::Tome),
            ..Default::default()
        };
        let breakdown = calculate_damage_between(
            &swordsman(Color::Red),
            &target(Color::Red),
            &overrides,
            &Ruleset::default(),
        );
        assert_eq!(breakdown.defensive_stat_kind, Stat::Res);
        assert_eq!(breakdown.damage, 10);
    }

    #[test]
    fn test_adaptive_picks_lower() {
        let attacker = swordsman(Color::Red).with_capabilities(Capabilities {
            adaptive_damage: true,
            ..Default::default()
        });
        let defender = Combatant::new("Knight", 40, StatLine::new(30, 10, 35, 5));
        let breakdown = breakdown_of(&attacker, &defender);
        assert_eq!(breakdown.defensive_stat_kind, Stat::Res);
        assert_eq!(breakdown.damage, 35);
    }

    #[test]
    fn test_effectiveness() {
        let archer = Combatant::new("Rebecca", 35, StatLine::new(30, 30, 15, 15)).with_weapon(
            Weapon::new("Iron Bow", 6, Color::Colorless, WeaponType::Bow)
                .with_effective_against(MoveType::Flying),
        );
        let flier = Combatant::new("Florina", 30, StatLine::new(25, 30, 20, 30))
            .with_movement(MoveType::Flying)
            .with_weapon(Weapon::new("Iron Lance", 6, Color::Blue, WeaponType::Lance));
        // 36 * 1.5 = 54 vs def 20
        assert_eq!(damage(&archer, &flier), 34);

        let grounded = flier.with_movement(MoveType::Infantry);
        assert_eq!(damage(&archer, &grounded), 16);
    }

    #[test]
    fn test_terrain_from_flag_or_override() {
        let attacker = swordsman(Color::Red);
        let on_tile = target(Color::Red).on_defensive_tile(true);
        // def 15 * 1.3 = 19.5 -> 19
        assert_eq!(damage(&attacker, &on_tile), 21);

        let overrides = DamageOverrides {
            terrain: Some(Terrain::Defensive),
            ..Default::default()
        };
        let breakdown = calculate_damage_between(
            &attacker,
            &target(Color::Red),
            &overrides,
            &Ruleset::default(),
        );
        assert!(breakdown.defensive_terrain);
        assert_eq!(breakdown.damage, 21);
    }

    #[test]
    fn test_moonbow_ignores_defense() {
        let attacker = swordsman(Color::Red).with_special("Moonbow");
        // def 15 * 0.7 = 10.5 -> 10
        assert_eq!(damage(&attacker, &target(Color::Red)), 30);
    }

    #[test]
    fn test_moonbow_after_terrain() {
        let attacker = swordsman(Color::Red).with_special("Moonbow");
        let defender = target(Color::Red).on_defensive_tile(true);
        // 15 -> 19 -> 13
        let breakdown = breakdown_of(&attacker, &defender);
        assert_eq!(breakdown.defensive_after_terrain, 19);
        assert_eq!(breakdown.defensive_after_special, 13);
        assert_eq!(breakdown.damage, 27);
    }

    #[test]
    fn test_bonus_special() {
        let attacker = swordsman(Color::Red).with_special("Glimmer");
        // 25 + 12
        assert_eq!(damage(&attacker, &target(Color::Red)), 37);

        let attacker = swordsman(Color::Red).with_special("Unknown Special");
        assert_eq!(damage(&attacker, &target(Color::Red)), 25);
    }

    #[test]
    fn test_staff_halves_last() {
        let cleric = Combatant::new("Serra", 30, StatLine::new(30, 20, 10, 20))
            .with_weapon(Weapon::new("Gravity", 9, Color::Colorless, WeaponType::Staff));
        let defender = swordsman(Color::Red);
        // 39 - res 20 = 19 -> 9
        let breakdown = breakdown_of(&cleric, &defender);
        assert!(breakdown.staff);
        assert_eq!(breakdown.damage, 9);
    }

    #[test]
    fn test_reduction_order() {
        let attacker = swordsman(Color::Red).with_weapon(
            Weapon::new("Wo Dao", 10, Color::Red, WeaponType::Sword).with_hook(Hook::FixedDamage {
                value: 10,
                when: Condition::Always,
            }),
        );
        let defender = target(Color::Red).with_weapon(
            Weapon::new("Fire", 8, Color::Red, WeaponType::Tome)
                .with_hook(Hook::PercentReduction {
                    percent: 30,
                    when: Condition::Always,
                })
                .with_hook(Hook::FixedReduction {
                    value: 5,
                    when: Condition::Always,
                }),
        );
        // (40 - 15 + 10) * 0.7 = 24.5 -> 24, then -5
        let breakdown = breakdown_of(&attacker, &defender);
        assert_eq!(breakdown.fixed_damage, 10);
        assert_eq!(breakdown.percent_reduction, 30);
        assert_eq!(breakdown.damage, 19);
        assert_eq!(breakdown.hook_log.len(), 3);
    }

    #[test]
    fn test_hook_stat_bonus_read_by_pipeline() {
        let attacker = swordsman(Color::Red).with_weapon(
            Weapon::new("Slaying Edge", 10, Color::Red, WeaponType::Sword).with_hook(
                Hook::StatBonus {
                    stat: Stat::Atk,
                    value: 6,
                    when: Condition::Initiating,
                },
            ),
        );
        assert_eq!(damage(&attacker, &target(Color::Red)), 31);
    }

    #[test]
    fn test_damage_floor() {
        let weak = Combatant::new("Weak", 20, StatLine::new(5, 5, 5, 5));
        let wall = Combatant::new("Wall", 50, StatLine::new(5, 5, 50, 50));
        let breakdown = breakdown_of(&weak, &wall);
        assert_eq!(breakdown.base_damage, -45);
        assert_eq!(breakdown.damage, 0);
    }

    #[test]
    fn test_context_damage_is_set() {
        let attacker = swordsman(Color::Red);
        let defender = target(Color::Red);
        let mut ctx = CombatContext::new(&attacker, &defender, Phase::Init);
        let breakdown =
            calculate_damage(&mut ctx, &DamageOverrides::default(), &Ruleset::default());
        assert_eq!(ctx.damage, breakdown.damage);
    }
}
