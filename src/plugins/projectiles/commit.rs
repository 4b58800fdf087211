//! Return commit: recycle projectiles back into the pool.
//!
//! Owner of the inactive invariants: no weapon, zero direction, empty collision filters.
//! Overwriting the state also drops a pending stuck deadline.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileEntity, ProjectileState};
use super::pool::{inactive_layers, ProjectilePool};

pub fn return_to_pool_commit(
    mut pool: ResMut<ProjectilePool>,
    mut q: Query<
        (Entity, &mut ProjectileState, &mut Projectile, &mut CollisionLayers),
        With<PooledProjectile>,
    >,
) {
    for (e, mut state, mut projectile, mut layers) in &mut q {
        if *state != ProjectileState::PendingReturn {
            continue;
        }

        *state = ProjectileState::Inactive;
        projectile.disarm();
        *layers = inactive_layers();

        pool.push_free(ProjectileEntity(e));
    }
}
