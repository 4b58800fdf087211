use bevy::prelude::*;

use super::components::{Armament, Enemy, MeleeHeading, MeleeMovement, ShooterPatrol, ShooterState};
use super::fire_cycle::FireCycle;
use crate::common::rng::CombatRng;
use crate::common::tunables::Tunables;
use crate::plugins::combat::{ActorKind, CombatEvents, DestroyCause, Destroyed, Health, Team};
use crate::plugins::player::Player;
use crate::plugins::projectiles::messages::SpawnProjectileRequest;
use crate::plugins::viewport::Viewport;
use crate::plugins::weapons::DroppedWeapon;

/// Move melee enemies and destroy the ones that left through the bottom edge.
pub fn advance_melee(
    time: Res<Time>,
    tunables: Res<Tunables>,
    viewport: Res<Viewport>,
    mut events: CombatEvents,
    q_player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut q_melee: Query<(Entity, &Enemy, &MeleeMovement, &mut Transform, &mut Health), Without<Player>>,
) {
    let dt = time.delta_secs();
    let player_pos = q_player.single().ok().map(|tf| tf.translation.truncate());

    for (e, enemy, movement, mut tf, mut health) in &mut q_melee {
        if !health.is_alive() {
            continue;
        }

        let pos = tf.translation.truncate();
        let direction = match movement.heading {
            MeleeHeading::StraightDown => Vec2::NEG_Y,
            MeleeHeading::ChasePlayer => match player_pos {
                Some(target) => (target - pos).normalize_or_zero(),
                None => Vec2::ZERO,
            },
        };
        let pos = pos + direction * movement.speed * dt;
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;

        if viewport.to_normalized(pos).y < tunables.melee_exit_threshold {
            debug!("Melee enemy {e:?} left the viewport");
            events.destroy(e, ActorKind::Enemy(enemy.class), &mut health, DestroyCause::LeftViewport);
        }
    }
}

/// Horizontal patrol for shooters in the `Moving` state.
pub fn patrol_shooters(
    time: Res<Time>,
    tunables: Res<Tunables>,
    viewport: Res<Viewport>,
    mut rng: ResMut<CombatRng>,
    mut q: Query<(&mut Transform, &mut ShooterPatrol, &ShooterState, &Health), With<Enemy>>,
) {
    let dt = time.delta_secs();
    let (left, right) = viewport.horizontal_bounds(tunables.shooter_bound_padding);

    for (mut tf, mut patrol, state, health) in &mut q {
        if *state != ShooterState::Moving || !health.is_alive() {
            continue;
        }

        tf.translation.x += patrol.direction * patrol.speed * dt;

        let x = tf.translation.x;
        let heading_out = (x <= left && patrol.direction < 0.0) || (x >= right && patrol.direction > 0.0);
        if heading_out {
            patrol.reverse();
        }
        if patrol.randomize && rng.unit() < patrol.change_chance {
            patrol.reverse();
        }
    }
}

/// Resume due fire cycles and emit the shots they produce.
pub fn run_fire_cycles(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut requests: MessageWriter<SpawnProjectileRequest>,
    q_player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut q: Query<(Entity, &Transform, &Armament, &mut FireCycle, &mut ShooterState, &Health), With<Enemy>>,
) {
    let now = time.elapsed_secs_f64();
    let player_pos = q_player.single().ok().map(|tf| tf.translation.truncate());

    for (e, tf, armament, mut cycle, mut state, health) in &mut q {
        let Some(weapon) = armament.weapon.as_ref() else {
            continue;
        };
        if !health.is_alive() || !cycle.is_running() {
            continue;
        }

        let shots = cycle.resume(weapon, now, &mut state);
        if shots == 0 {
            continue;
        }

        let Some(target) = player_pos else {
            debug!("Shooter {e:?} has no player to aim at, skipping shot");
            continue;
        };

        let origin = tf.translation.truncate();
        let direction = (target - origin).normalize_or(Vec2::NEG_Y);
        for _ in 0..shots {
            requests.write(SpawnProjectileRequest {
                weapon: weapon.clone(),
                origin: origin + direction * tunables.projectile_spawn_offset,
                direction,
                team: Team::Enemy,
            });
        }
    }
}

pub fn cancel_fire_cycles(mut q: Query<(&mut FireCycle, &mut ShooterState)>) {
    let mut cancelled = 0;
    for (mut cycle, mut state) in &mut q {
        if cycle.cancel(&mut state) {
            cancelled += 1;
        }
    }
    debug!("Cancelled {cancelled} fire cycles");
}

/// Start a fresh cycle for every armed shooter. The assigned weapon is kept.
pub fn resume_fire_cycles(
    time: Res<Time>,
    mut q: Query<(&Armament, &mut FireCycle, &Health), With<Enemy>>,
) {
    let now = time.elapsed_secs_f64();
    for (armament, mut cycle, health) in &mut q {
        if let (Some(weapon), true) = (armament.weapon.as_ref(), health.is_alive()) {
            cycle.start(weapon, now);
        }
    }
}

/// Stop the fire cycle of destroyed shooters and drop their weapon for pickup.
pub fn on_enemy_destroyed(
    mut destroyed: MessageReader<Destroyed>,
    mut dropped: ResMut<DroppedWeapon>,
    mut q: Query<(&Armament, &mut FireCycle, &mut ShooterState), With<Enemy>>,
) {
    for ev in destroyed.read() {
        if !matches!(ev.kind, ActorKind::Enemy(_)) {
            continue;
        }
        let Ok((armament, mut cycle, mut state)) = q.get_mut(ev.entity) else {
            continue;
        };
        cycle.cancel(&mut state);

        if ev.cause == DestroyCause::Killed {
            if let Some(weapon) = armament.weapon.clone() {
                debug!("Shooter {:?} dropped {}", ev.entity, weapon.name);
                dropped.put(weapon);
            }
        }
    }
}
