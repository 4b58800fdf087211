//! Tunable simulation constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Avian length unit (world units per "meter").
    pub length_unit: f32,
    /// Half size of the visible play area in world units.
    pub viewport_half_extents: Vec2,
    /// Distance kept from the screen edges by patrolling shooters.
    pub shooter_bound_padding: f32,
    /// Normalized viewport y below which a melee enemy counts as gone.
    pub melee_exit_threshold: f32,
    /// Grace period before a projectile stuck to a wall is removed.
    pub stick_grace_secs: f64,
    pub projectile_pool_capacity: usize,
    /// Distance from the shooter's center at which its projectile appears.
    pub projectile_spawn_offset: f32,
    pub actor_radius: f32,
    pub projectile_radius: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            length_unit: 1.0,
            viewport_half_extents: Vec2::new(8.0, 5.0),
            shooter_bound_padding: 0.5,
            melee_exit_threshold: -0.1,
            stick_grace_secs: 5.0,
            projectile_pool_capacity: 256,
            projectile_spawn_offset: 0.5,
            actor_radius: 0.4,
            projectile_radius: 0.12,
        }
    }
}
