use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileEntity, ProjectileState};
use crate::common::layers::Layer;
use crate::common::tunables::Tunables;
use crate::plugins::combat::Team;

#[derive(Resource, Debug)]
pub struct ProjectilePool {
    free: Vec<ProjectileEntity>,
    capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self { free: Vec::with_capacity(capacity), capacity }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<ProjectileEntity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: ProjectileEntity) {
        debug_assert!(self.free.len() < self.capacity, "projectile returned to a full pool");
        self.free.push(e);
    }
}

/// Layers for a live projectile fired by `team`.
#[inline]
pub fn active_layers(team: Team) -> CollisionLayers {
    match team {
        Team::Player => CollisionLayers::new(Layer::PlayerProjectile, [Layer::Enemy]),
        Team::Enemy => CollisionLayers::new(Layer::EnemyProjectile, [Layer::Player]),
    }
}

/// Empty filters: an inactive projectile collides with nothing.
#[inline]
pub fn inactive_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::EnemyProjectile, [] as [Layer; 0])
}

/// Pre-spawn every projectile, inactive.
///
/// Physics components stay on the entity for its whole life; activation only rewrites
/// component values, so firing never moves an entity between archetypes.
pub fn init_projectile_pool(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut pool: ResMut<ProjectilePool>,
) {
    pool.free.clear();
    let cap = pool.capacity;
    pool.free.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Projectile(Pooled)"),
                PooledProjectile,
                ProjectileState::Inactive,
                Projectile::default(),
                Transform::from_xyz(0.0, 0.0, 2.0),
                RigidBody::Dynamic,
                Collider::circle(tunables.projectile_radius),
                Sensor,
                inactive_layers(),
                CollisionEventsEnabled,
            ))
            .id();

        pool.free.push(ProjectileEntity(e));
    }
    debug!("Projectile pool ready with {cap} entities");
}
