//! Spawn consumer: activate projectiles from the pool.
//!
//! The free list only ever holds pooled projectile entities, so a pooled entity that
//! fails the query is a bug and we `expect()` on it.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileEntity, ProjectileState};
use super::flight::facing;
use super::messages::SpawnProjectileRequest;
use super::pool::{active_layers, ProjectilePool};

pub fn allocate_projectiles(
    mut pool: ResMut<ProjectilePool>,
    mut reader: MessageReader<SpawnProjectileRequest>,
    mut q: Query<
        (&mut ProjectileState, &mut Projectile, &mut Transform, &mut CollisionLayers),
        With<PooledProjectile>,
    >,
) {
    for req in reader.read() {
        let Some(ProjectileEntity(e)) = pool.pop_free() else {
            // Capacity decision, not a correctness failure.
            debug!("Projectile pool exhausted, dropping {} shot", req.weapon.name);
            continue;
        };

        let (mut state, mut projectile, mut tf, mut layers) =
            q.get_mut(e).expect("ProjectilePool contained an entity missing projectile components");

        *state = ProjectileState::Flying;
        projectile.arm(req.weapon.clone(), req.direction, req.team);
        tf.translation = req.origin.extend(2.0);
        tf.rotation = facing(req.direction);
        tf.scale = Vec3::splat(req.weapon.scale);
        *layers = active_layers(req.team);
    }
}
