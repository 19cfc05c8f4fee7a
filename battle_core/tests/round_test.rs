//! Full-round scenarios through the public API

use battle_core::prelude::*;
use battle_core::{preview_round, resolve_follow_ups, FollowUps};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

fn eliwood() -> Combatant {
    Combatant::new("Eliwood", 40, StatLine::new(30, 40, 25, 20))
        .with_movement(MoveType::Cavalry)
        .with_weapon(Weapon::new("Iron Sword", 10, Color::Red, WeaponType::Sword))
}

fn lute() -> Combatant {
    Combatant::new("Lute", 35, StatLine::new(32, 25, 15, 30))
        .with_weapon(Weapon::new("Fire", 8, Color::Blue, WeaponType::Tome))
}

#[test]
fn test_reference_scenario() {
    let mut a = eliwood();
    let mut d = lute();
    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());

    assert!(result.has_phase(Phase::Init));
    assert!(result.has_phase(Phase::Counter));
    assert!(result.has_phase(Phase::FollowUp));
    assert!(!result.has_phase(Phase::FollowUpCounter));

    // Sword reads Def; red is at a disadvantage against blue: 40 -> 32
    let init = result.attack(Phase::Init).unwrap();
    assert_eq!(init.damage, 17);
    assert_eq!(init.hp_after, 35 - 17);
    assert_eq!(result.winner, None);
}

#[test]
fn test_guarantee_beats_denial() {
    let mut a = Combatant::new("Slow", 60, StatLine::new(20, 10, 20, 20))
        .with_weapon(Weapon::new("Iron Lance", 6, Color::Blue, WeaponType::Lance))
        .with_capabilities(Capabilities {
            guaranteed_follow_up: Capability::when(|_| true),
            ..Default::default()
        });
    let mut d = Combatant::new("Wall", 60, StatLine::new(20, 10, 20, 20))
        .with_weapon(Weapon::new("Iron Lance", 6, Color::Blue, WeaponType::Lance))
        .with_capabilities(Capabilities {
            denies_foe_follow_up: Capability::when(|_| true),
            ..Default::default()
        });

    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());
    assert!(result.has_phase(Phase::FollowUp));
    assert!(result.trace.contains_phase(Phase::FollowUp));
}

#[test]
fn test_denial_removes_follow_up() {
    let mut a = eliwood();
    let mut d = lute().with_capabilities(Capabilities {
        denies_foe_follow_up: Capability::when(|foe| foe.movement == MoveType::Cavalry),
        ..Default::default()
    });

    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());
    assert_eq!(result.phases(), vec![Phase::Init, Phase::Counter]);
    assert!(!result.trace.contains_phase(Phase::FollowUp));
}

#[test]
fn test_both_sides_follow_up() {
    let mut a = Combatant::new("A", 80, StatLine::new(25, 10, 20, 20))
        .with_weapon(Weapon::new("Iron Sword", 6, Color::Red, WeaponType::Sword))
        .with_capabilities(Capabilities {
            guaranteed_follow_up: true.into(),
            ..Default::default()
        });
    let mut d = Combatant::new("B", 80, StatLine::new(25, 30, 20, 20))
        .with_weapon(Weapon::new("Iron Sword", 6, Color::Red, WeaponType::Sword));

    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());
    assert_eq!(
        result.phases(),
        vec![Phase::Init, Phase::Counter, Phase::FollowUp, Phase::FollowUpCounter]
    );
    assert_eq!(
        resolve_follow_ups(&a, &d, &Ruleset::default()),
        FollowUps {
            attacker: true,
            defender: true
        }
    );
}

#[test]
fn test_follow_up_ko_skips_potent_and_counter_follow_up() {
    let mut a = eliwood().with_capabilities(Capabilities {
        potent: true.into(),
        ..Default::default()
    });
    let mut d = lute().with_capabilities(Capabilities {
        guaranteed_follow_up: true.into(),
        ..Default::default()
    });
    d.hp = 30;

    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());
    assert_eq!(result.phases(), vec![Phase::Init, Phase::Counter, Phase::FollowUp]);
    assert!(result.attack(Phase::FollowUp).unwrap().ko);
    assert_eq!(d.hp, 0);
    assert_eq!(result.winner, Some("Eliwood".to_string()));
}

#[test]
fn test_brave_hits_against_current_hp() {
    let mut a = eliwood().with_capabilities(Capabilities {
        brave: true.into(),
        ..Default::default()
    });
    let mut d = Combatant::new("Tank", 100, StatLine::new(10, 10, 15, 10));

    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());
    let init = result.attack(Phase::Init).unwrap();
    assert_eq!(init.hit_damages, vec![25, 25]);
    assert_eq!(init.damage, 50);
    assert!(result.trace.steps().iter().any(|s| s.label == "init_hit2"));
    // Unarmed: no counter. Brave follow-up finishes the job.
    assert_eq!(result.phases(), vec![Phase::Init, Phase::FollowUp]);
    assert_eq!(d.hp, 0);
    assert_eq!(result.attack(Phase::FollowUp).unwrap().hp_lost(), 50);
}

#[test]
fn test_stateful_brave_evaluated_per_attack() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    // Brave only on the first attack of the round
    let brave = Flag::when(move || counter.fetch_add(1, Ordering::SeqCst) == 0);

    let mut a = eliwood().with_capabilities(Capabilities {
        brave,
        ..Default::default()
    });
    let mut d = Combatant::new("Tank", 100, StatLine::new(10, 10, 15, 10));

    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());
    assert_eq!(result.attack(Phase::Init).unwrap().hit_count(), 2);
    assert_eq!(result.attack(Phase::FollowUp).unwrap().hit_count(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_counter_potent_tag() {
    let mut a = Combatant::new("Slow", 80, StatLine::new(20, 10, 20, 20))
        .with_weapon(Weapon::new("Iron Axe", 6, Color::Green, WeaponType::Axe));
    let mut d = Combatant::new("Fast", 80, StatLine::new(20, 30, 20, 20))
        .with_weapon(Weapon::new("Iron Axe", 6, Color::Green, WeaponType::Axe))
        .with_capabilities(Capabilities {
            potent: true.into(),
            ..Default::default()
        });

    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());
    assert!(result.has_phase(Phase::PotentCounter));
    assert!(!result.has_phase(Phase::Potent));
    assert_eq!(result.damage_dealt_by("Fast"), 18);
}

#[test]
fn test_determinism() {
    let options = BattleOptions::detailed();
    let (a1, d1, r1) = preview_round(&eliwood(), &lute(), &options);
    let (a2, d2, r2) = preview_round(&eliwood(), &lute(), &options);
    assert_eq!(r1, r2);
    assert_eq!(r1.to_json().unwrap(), r2.to_json().unwrap());
    assert_eq!((a1.hp, d1.hp), (a2.hp, d2.hp));
}

#[test]
fn test_hooks_shape_the_round() {
    let blade =
        Weapon::new("Wo Dao", 9, Color::Red, WeaponType::Sword).with_hook(Hook::FixedDamage {
            value: 10,
            when: Condition::Always,
        });
    let death_blow = Ability::new("Death Blow 3", SkillSlot::A).with_hook(Hook::StatBonus {
        stat: Stat::Atk,
        value: 6,
        when: Condition::Initiating,
    });
    let mut a = Combatant::new("Lyn", 60, StatLine::new(30, 20, 20, 20)).with_weapon(blade);
    a.equip_ability(death_blow).unwrap();

    let guard = Ability::new("Close Guard", SkillSlot::B).with_hook(Hook::PercentReduction {
        percent: 50,
        when: Condition::Defending,
    });
    let mut d = Combatant::new("Knight", 60, StatLine::new(10, 20, 20, 20))
        .with_movement(MoveType::Armored)
        .with_weapon(Weapon::new("Iron Sword", 6, Color::Red, WeaponType::Sword));
    d.equip_ability(guard).unwrap();

    let result = resolve_round(&mut a, &mut d, &BattleOptions::detailed());
    // (30 + 9 + 6) - 20 + 10 = 35, halved to 17
    assert_eq!(result.attack(Phase::Init).unwrap().damage, 17);
    let hooks = result
        .attack(Phase::Init)
        .unwrap()
        .steps
        .iter()
        .filter(|s| s.label.starts_with("init_hit1_hook"))
        .count();
    assert_eq!(hooks, 3);
    // Counter: Knight strikes, Lyn's Death Blow still applies to Lyn; Knight's guard does not
    assert_eq!(result.attack(Phase::Counter).unwrap().damage, 0);
}

#[test]
fn test_terrain_override_only_for_the_round() {
    let mut a = eliwood();
    let mut d = lute();
    let options = BattleOptions::default().with_terrain(Terrain::Defensive);
    let result = resolve_round(&mut a, &mut d, &options);
    assert_eq!(result.attack(Phase::Init).unwrap().damage, 13);
    assert!(!d.on_defensive_tile);
}

#[test]
fn test_dead_defender_is_never_attacked() {
    let mut a = eliwood();
    let mut d = lute();
    d.hp = 0;
    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());
    assert!(result.round_summary.is_empty());
    assert!(result.trace.is_empty());
    assert_eq!(result.winner, Some("Eliwood".to_string()));
}

#[test]
fn test_catalog_round() {
    let catalog = Catalog::parse(
        r#"
[[weapons]]
name = "Iron Sword"
might = 10
color = "red"
weapon_type = "sword"

[[weapons]]
name = "Fire"
might = 8
color = "blue"
weapon_type = "tome"

[[units]]
name = "Eliwood"
hp = 40
atk = 30
spd = 40
def = 25
res = 20
weapon = "Iron Sword"

[[units]]
name = "Lute"
hp = 35
atk = 32
spd = 25
def = 15
res = 30
weapon = "Fire"
"#,
    )
    .unwrap();

    let mut a = catalog.build_combatant("Eliwood").unwrap();
    let mut d = catalog.build_combatant("Lute").unwrap();
    let result = resolve_round(&mut a, &mut d, &BattleOptions::default());
    assert_eq!(result.phases(), vec![Phase::Init, Phase::Counter, Phase::FollowUp]);
    assert_eq!(d.hp, 1);
}
