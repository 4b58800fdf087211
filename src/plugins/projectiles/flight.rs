//! Projectile motion and viewport boundary rules.
//!
//! Each tick a flying projectile moves towards `position + direction * speed` by at most
//! `speed * dt`, so one tick never covers more than one second of travel.
//!
//! Leaving through a side edge depends on the weapon: ricochet flips the horizontal
//! direction, stick freezes the projectile for a grace period, anything else is removed.
//! Leaving through the top or bottom always removes it.

use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileState};
use crate::common::tunables::Tunables;
use crate::plugins::viewport::Viewport;
use crate::plugins::weapons::WeaponSpec;

/// Degrees per second of spin for `spin_speed == 1`.
const SPIN_DEGREES_PER_SEC: f32 = 400.0;

/// Move `current` towards `target` by at most `max_delta`, never overshooting.
#[inline]
pub fn step_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let to_target = target - current;
    let dist = to_target.length();
    if dist <= max_delta || dist == 0.0 {
        target
    } else {
        current + to_target / dist * max_delta
    }
}

/// Rotation that points the local +X axis along `direction`.
#[inline]
pub fn facing(direction: Vec2) -> Quat {
    if direction == Vec2::ZERO {
        Quat::IDENTITY
    } else {
        Quat::from_rotation_z(direction.to_angle())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryAction {
    Continue,
    Ricochet,
    Stick,
    Remove,
}

/// Decide what happens to a projectile at viewport-normalized `pos`.
pub fn boundary_action(pos: Vec2, direction: Vec2, weapon: &WeaponSpec) -> BoundaryAction {
    if pos.y < 0.0 || pos.y > 1.0 {
        return BoundaryAction::Remove;
    }
    if pos.x >= 0.0 && pos.x <= 1.0 {
        return BoundaryAction::Continue;
    }

    if weapon.ricochet {
        let heading_out = (pos.x < 0.0 && direction.x < 0.0) || (pos.x > 1.0 && direction.x > 0.0);
        if heading_out {
            BoundaryAction::Ricochet
        } else {
            BoundaryAction::Continue
        }
    } else if weapon.stick_to_walls {
        BoundaryAction::Stick
    } else {
        BoundaryAction::Remove
    }
}

pub fn advance_projectiles(
    time: Res<Time>,
    tunables: Res<Tunables>,
    viewport: Res<Viewport>,
    mut q: Query<(&mut Projectile, &mut ProjectileState, &mut Transform), With<PooledProjectile>>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs_f64();

    for (mut projectile, mut state, mut tf) in &mut q {
        if *state != ProjectileState::Flying {
            continue;
        }
        let Some(weapon) = projectile.weapon.clone() else {
            *state = ProjectileState::PendingReturn;
            continue;
        };

        let pos = tf.translation.truncate();
        let pos = step_towards(pos, pos + projectile.direction * weapon.speed, weapon.speed * dt);
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;

        if weapon.spin {
            tf.rotate_z((weapon.spin_speed * SPIN_DEGREES_PER_SEC * dt).to_radians());
        } else {
            tf.rotation = facing(projectile.direction);
        }

        match boundary_action(viewport.to_normalized(pos), projectile.direction, &weapon) {
            BoundaryAction::Continue => {}
            BoundaryAction::Ricochet => projectile.direction.x = -projectile.direction.x,
            BoundaryAction::Stick => {
                projectile.direction = Vec2::ZERO;
                *state = ProjectileState::Stuck { despawn_at: now + tunables.stick_grace_secs };
            }
            BoundaryAction::Remove => *state = ProjectileState::PendingReturn,
        }
    }
}

/// Remove stuck projectiles whose grace period is over.
pub fn expire_stuck(time: Res<Time>, mut q: Query<&mut ProjectileState, With<PooledProjectile>>) {
    let now = time.elapsed_secs_f64();
    for mut state in &mut q {
        if let ProjectileState::Stuck { despawn_at } = *state {
            if now >= despawn_at {
                *state = ProjectileState::PendingReturn;
            }
        }
    }
}
