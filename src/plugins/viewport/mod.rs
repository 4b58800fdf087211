//! Viewport plugin: the screen-space bounds provider.
//!
//! Gameplay works in world units; boundary rules (projectile exits, melee exit,
//! shooter patrol bounds) are expressed against the visible area. `Viewport` converts
//! between the two. When a `MainCamera` exists its translation moves the viewport;
//! headless apps keep the configured default.

use bevy::prelude::*;

use crate::common::state::CombatSet;
use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Viewport {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self { center, half_extents }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// World position to normalized screen coordinates: (0,0) bottom-left, (1,1) top-right.
    #[inline]
    pub fn to_normalized(&self, world: Vec2) -> Vec2 {
        (world - self.min()) / (self.half_extents * 2.0)
    }

    /// Left and right world-space x limits, shrunk by `padding` on each side.
    #[inline]
    pub fn horizontal_bounds(&self, padding: f32) -> (f32, f32) {
        (self.min().x + padding, self.max().x - padding)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Tunables::default().viewport_half_extents)
    }
}

pub fn plugin(app: &mut App) {
    let half_extents = app
        .world()
        .get_resource::<Tunables>()
        .map(|t| t.viewport_half_extents)
        .unwrap_or_else(|| Tunables::default().viewport_half_extents);

    app.insert_resource(Viewport::new(Vec2::ZERO, half_extents));
    app.add_systems(Update, follow_main_camera.before(CombatSet::Spawn));
}

fn follow_main_camera(q_cam: Query<&Transform, With<MainCamera>>, mut viewport: ResMut<Viewport>) {
    let Ok(tf) = q_cam.single() else {
        return;
    };
    let center = tf.translation.truncate();
    if viewport.center != center {
        viewport.center = center;
    }
}
