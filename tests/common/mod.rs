//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `tilt_thrower::game::configure_headless` to install gameplay plugins.
//!
//! Time advances by a fixed step per `update()` so cycle timing is deterministic.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use tilt_thrower::common::config::CombatConfig;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    app_with_config(CombatConfig { seed: Some(1), ..default() })
}

pub fn app_with_config(config: CombatConfig) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(config);

    tilt_thrower::game::configure_headless(&mut app);
    // `App::run` would do this; tests drive `update()` directly.
    app.finish();
    app.cleanup();
    app
}

/// Run `secs` worth of frames.
pub fn run_for(app: &mut App, secs: f32) {
    let frames = (secs / FRAME.as_secs_f32()).round() as usize;
    for _ in 0..frames {
        app.update();
    }
}

pub fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, F>()
        .iter(app.world())
        .count()
}
