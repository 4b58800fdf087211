//! Camera plugin (render-only).
//!
//! Spawns the main 2D camera framing the configured viewport. Gameplay never reads the
//! camera directly; the viewport plugin mirrors its position into `Viewport`.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Reference window height the camera scale is computed against.
const REFERENCE_HEIGHT_PX: f32 = 720.0;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    // World units are small; scale the camera so the viewport height fills the window.
    let scale = tunables.viewport_half_extents.y * 2.0 / REFERENCE_HEIGHT_PX;

    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 999.0).with_scale(Vec3::new(scale, scale, 1.0)),
    ));
}
