//! Feature plugins.
//!
//! Registration order matters: later plugins read resources inserted by earlier ones
//! at build time (config, tunables, weapon catalog).

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod combat;
pub mod core;
pub mod enemies;
pub mod flow;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod scoring;
pub mod spawner;
pub mod viewport;
pub mod weapons;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    viewport::plugin(app);
    combat::plugin(app);
    weapons::plugin(app);
    enemies::plugin(app);
    app.add_plugins(ProjectilesPlugin);
    spawner::plugin(app);
    scoring::plugin(app);
    player::plugin(app);
    flow::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}
