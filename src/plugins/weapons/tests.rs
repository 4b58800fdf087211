use bevy::prelude::*;

use super::*;
use crate::common::config::{CombatConfig, WeaponChanceConfig};
use crate::common::rng::CombatRng;

fn named(name: &str) -> Weapon {
    Weapon::new(WeaponSpec { name: name.into(), ..WeaponSpec::default() })
}

fn table(weights: &[(&str, f32)]) -> Vec<WeaponChance> {
    weights
        .iter()
        .map(|&(name, weight)| WeaponChance { weapon: named(name), weight })
        .collect()
}

fn picked(entries: &[WeaponChance], roll: f32) -> String {
    select_with_roll(entries, roll)
        .map(|e| e.weapon.name.clone())
        .unwrap_or_default()
}

#[test]
fn fixed_rolls_use_inclusive_boundaries() {
    let entries = table(&[("A", 30.0), ("B", 70.0)]);

    assert_eq!(picked(&entries, 25.0), "A");
    assert_eq!(picked(&entries, 30.0), "A");
    assert_eq!(picked(&entries, 30.0001), "B");
    assert_eq!(picked(&entries, 100.0), "B");
}

#[test]
fn tie_at_boundary_prefers_earlier_entry_even_with_zero_weight_gap() {
    // B has zero weight, so cumulative after B equals cumulative after A.
    let entries = table(&[("A", 50.0), ("B", 0.0), ("C", 50.0)]);
    assert_eq!(picked(&entries, 50.0), "A");
    assert_eq!(picked(&entries, 50.5), "C");
}

#[test]
fn roll_past_total_falls_back_to_last_entry() {
    let entries = table(&[("A", 1.0), ("B", 1.0)]);
    assert_eq!(picked(&entries, 5.0), "B");
}

#[test]
fn select_fails_for_empty_or_non_positive_tables() {
    let mut rng = CombatRng::seeded(1);

    assert!(WeaponCatalog::select(&[], &mut rng).is_none());
    assert!(WeaponCatalog::select(&table(&[("A", 0.0), ("B", 0.0)]), &mut rng).is_none());
    assert!(WeaponCatalog::select(&table(&[("A", -5.0), ("B", 2.0)]), &mut rng).is_none());
}

#[test]
fn empirical_frequencies_converge_to_weights() {
    let entries = table(&[("A", 10.0), ("B", 30.0), ("C", 60.0)]);
    let mut rng = CombatRng::seeded(0xC0FFEE);

    const N: usize = 100_000;
    let mut counts = [0usize; 3];
    for _ in 0..N {
        let weapon = WeaponCatalog::select(&entries, &mut rng).expect("positive total");
        let idx = entries
            .iter()
            .position(|e| Weapon::same(&e.weapon, &weapon))
            .expect("selected weapon comes from the table");
        counts[idx] += 1;
    }

    let total = total_weight(&entries);
    for (entry, count) in entries.iter().zip(counts) {
        let expected = entry.weight / total;
        let observed = count as f32 / N as f32;
        assert!(
            (observed - expected).abs() < 0.01,
            "{}: expected {expected}, observed {observed}",
            entry.weapon.name
        );
    }
}

#[test]
fn selection_shares_the_spec_instead_of_copying_it() {
    let entries = table(&[("only", 1.0)]);
    let mut rng = CombatRng::seeded(3);
    let weapon = WeaponCatalog::select(&entries, &mut rng).unwrap();
    assert!(Weapon::same(&weapon, &entries[0].weapon));
}

#[test]
fn catalog_resolves_chance_tables_and_skips_unknown_names() {
    let catalog = WeaponCatalog::from_specs(CombatConfig::default().weapons);
    let chances = catalog.chances(&[
        WeaponChanceConfig { weapon: "pebble".into(), weight: 40.0 },
        WeaponChanceConfig { weapon: "missing".into(), weight: 60.0 },
    ]);

    assert_eq!(chances.len(), 1);
    assert!(Weapon::same(&chances[0].weapon, catalog.get("pebble").unwrap()));
}

#[test]
fn dropped_weapon_slot_is_taken_once() {
    let mut slot = DroppedWeapon::default();
    slot.put(named("dart"));
    assert_eq!(slot.peek().map(|w| w.name.as_str()), Some("dart"));
    assert!(slot.take().is_some());
    assert!(slot.take().is_none());
}

#[test]
fn plugin_builds_catalog_from_config() {
    let mut app = App::new();
    app.insert_resource(CombatConfig::default());
    plugin(&mut app);

    let catalog = app.world().resource::<WeaponCatalog>();
    assert_eq!(catalog.len(), 3);
    assert!(app.world().get_resource::<DroppedWeapon>().is_some());
}
