//! Weapons: shared weapon specs, the weapon registry and weighted selection.
//!
//! A `WeaponSpec` is immutable and shared. Every holder (enemy armament, player arsenal,
//! in-flight projectile, dropped-weapon slot) keeps a `Weapon`, which is an `Arc` handle:
//! cloning it never copies the spec.

use std::ops::Deref;
use std::sync::Arc;

use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::config::{CombatConfig, WeaponChanceConfig};
use crate::common::rng::CombatRng;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponSpec {
    pub name: String,
    pub damage: i32,
    /// Projectile speed in world units per second.
    pub speed: f32,
    /// Seconds between shots.
    pub fire_rate: f32,
    pub scale: f32,
    pub ricochet: bool,
    pub stick_to_walls: bool,
    pub spin: bool,
    pub spin_speed: f32,
}

impl Default for WeaponSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            damage: 1,
            speed: 5.0,
            fire_rate: 1.0,
            scale: 1.0,
            ricochet: false,
            stick_to_walls: false,
            spin: false,
            spin_speed: 0.0,
        }
    }
}

/// Shared, read-only handle to a `WeaponSpec`.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon(Arc<WeaponSpec>);

impl Weapon {
    pub fn new(spec: WeaponSpec) -> Self {
        Self(Arc::new(spec))
    }

    /// True if both handles point at the same spec instance.
    #[inline]
    pub fn same(a: &Weapon, b: &Weapon) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for Weapon {
    type Target = WeaponSpec;

    fn deref(&self) -> &WeaponSpec {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeaponChance {
    pub weapon: Weapon,
    pub weight: f32,
}

#[inline]
pub fn total_weight(entries: &[WeaponChance]) -> f32 {
    entries.iter().map(|e| e.weight).sum()
}

/// Inverse-CDF lookup for a given roll.
///
/// Returns the first entry whose cumulative weight is `>= roll`, so a roll that lands
/// exactly on a boundary belongs to the earlier entry. A roll past the total falls back
/// to the last entry.
pub fn select_with_roll(entries: &[WeaponChance], roll: f32) -> Option<&WeaponChance> {
    let mut cumulative = 0.0;
    for entry in entries {
        cumulative += entry.weight;
        if roll <= cumulative {
            return Some(entry);
        }
    }
    entries.last()
}

/// Registry of every configured weapon, by name.
#[derive(Resource, Debug, Default, Clone)]
pub struct WeaponCatalog {
    by_name: HashMap<String, Weapon>,
}

impl WeaponCatalog {
    pub fn from_specs(specs: impl IntoIterator<Item = WeaponSpec>) -> Self {
        let by_name = specs
            .into_iter()
            .map(|spec| (spec.name.clone(), Weapon::new(spec)))
            .collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&Weapon> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Resolve a configured chance table into shared handles.
    ///
    /// Unknown names are skipped; `CombatConfig::validate` rejects them up front.
    pub fn chances(&self, table: &[WeaponChanceConfig]) -> Vec<WeaponChance> {
        table
            .iter()
            .filter_map(|entry| match self.get(&entry.weapon) {
                Some(weapon) => Some(WeaponChance { weapon: weapon.clone(), weight: entry.weight }),
                None => {
                    warn!("Skipping unknown weapon `{}` in chance table", entry.weapon);
                    None
                }
            })
            .collect()
    }

    /// Weighted random pick.
    ///
    /// Fails (returns `None`) when the table is empty or its total weight is not positive.
    pub fn select(entries: &[WeaponChance], rng: &mut CombatRng) -> Option<Weapon> {
        let total = total_weight(entries);
        if total <= 0.0 {
            return None;
        }
        let roll = rng.range(0.0, total);
        select_with_roll(entries, roll).map(|e| e.weapon.clone())
    }
}

/// Slot holding the weapon most recently dropped by a killed shooter.
///
/// Consumed by the player's arsenal (pickup).
#[derive(Resource, Debug, Default)]
pub struct DroppedWeapon {
    slot: Option<Weapon>,
}

impl DroppedWeapon {
    pub fn put(&mut self, weapon: Weapon) {
        self.slot = Some(weapon);
    }

    pub fn take(&mut self) -> Option<Weapon> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&Weapon> {
        self.slot.as_ref()
    }
}

pub fn plugin(app: &mut App) {
    let catalog = app
        .world()
        .get_resource::<CombatConfig>()
        .map(|config| WeaponCatalog::from_specs(config.weapons.iter().cloned()))
        .unwrap_or_default();

    debug!("Weapon catalog loaded with {} weapons", catalog.len());
    app.insert_resource(catalog);
    app.init_resource::<DroppedWeapon>();
}

#[cfg(test)]
mod tests;
