//! Projectile hit resolution.
//!
//! Physics reports overlaps as `CollisionStart` messages; this system turns them into
//! damage. A projectile hits at most one actor: the first accepted hit returns it to the
//! pool, and the per-frame `seen` set drops any further contact it reported this frame.
//! A projectile stuck to a wall still hurts whatever walks into it.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileState};
use crate::plugins::combat::{ActorKind, CombatEvents, Health, Invulnerability, Team};
use crate::plugins::enemies::Enemy;

#[derive(Clone, Copy, Debug)]
pub(crate) struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    /// Gameplay components live on the body when the collider is a child.
    #[inline]
    pub(crate) fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
pub(crate) fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget { collider: ev.collider1, body: ev.body1 },
        CollisionTarget { collider: ev.collider2, body: ev.body2 },
    )
}

pub fn process_projectile_hits(
    mut started: MessageReader<CollisionStart>,
    mut events: CombatEvents,
    q_is_projectile: Query<(), With<PooledProjectile>>,
    mut q_projectiles: Query<(&Projectile, &mut ProjectileState), With<PooledProjectile>>,
    mut q_targets: Query<
        (&Team, &mut Health, Option<&mut Invulnerability>, Option<&Enemy>),
        Without<PooledProjectile>,
    >,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let p1 = q_is_projectile.contains(t1.collider);
        let p2 = q_is_projectile.contains(t2.collider);
        if !(p1 ^ p2) {
            continue; // exactly one projectile
        }
        let (projectile_side, other_side) = if p1 { (t1, t2) } else { (t2, t1) };

        if seen.contains(&projectile_side.collider) {
            continue;
        }

        let Ok((projectile, mut state)) = q_projectiles.get_mut(projectile_side.collider) else {
            continue;
        };
        if !state.is_live() {
            continue;
        }
        let Some(weapon) = projectile.weapon.as_ref() else {
            continue;
        };

        let target = other_side.gameplay_owner();
        let Ok((team, mut health, shield, enemy)) = q_targets.get_mut(target) else {
            continue;
        };
        if *team == projectile.ignore || !health.is_alive() {
            continue;
        }

        seen.insert(projectile_side.collider);
        events.apply_damage(
            target,
            ActorKind::of(enemy),
            &mut health,
            shield.map(Mut::into_inner),
            weapon.damage,
        );
        *state = ProjectileState::PendingReturn;
    }
}
