//! Core plugin: shared resources and global settings.
//!
//! Resources inserted before the plugin runs (tests, a loaded config file) win over
//! the defaults.

use bevy::prelude::*;

use crate::common::config::CombatConfig;
use crate::common::rng::CombatRng;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::default());
    }
    if !app.world().contains_resource::<CombatConfig>() {
        app.insert_resource(CombatConfig::default());
    }

    let rng = match app.world().resource::<CombatConfig>().seed {
        Some(seed) => {
            info!("Combat RNG seeded with {seed}");
            CombatRng::seeded(seed)
        }
        None => CombatRng::from_entropy(),
    };
    app.insert_resource(rng);
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}

#[cfg(test)]
mod tests;
