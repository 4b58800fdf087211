//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use std::path::Path;

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::config::{CombatConfig, ConfigError};
use crate::common::state::{self, GameState};
use crate::plugins;

/// Optional balance overrides, read from the working directory.
pub const CONFIG_PATH: &str = "combat.toml";

pub fn run() -> Result<(), ConfigError> {
    let config = load_config(CONFIG_PATH)?;
    App::new().insert_resource(config).add_plugins(configure_full).run();
    Ok(())
}

/// Load the combat config, falling back to the stock balance when the file is absent.
pub fn load_config(path: impl AsRef<Path>) -> Result<CombatConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(CombatConfig::default());
    }
    CombatConfig::load(path)
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Tilt Thrower".into(),
            resolution: WindowResolution::new(1280, 720),
            ..default()
        }),
        ..default()
    }));

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (camera).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    state::configure_sets(app);
    plugins::register_gameplay(app);
}
