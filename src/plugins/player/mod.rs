//! Player plugin.
//!
//! The player is the only damageable actor with an invulnerability window. Its weapon
//! fires on `PlayerFireRequest` (written by whatever input layer drives the game) and is
//! replaced when a killed shooter drops its weapon.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::config::CombatConfig;
use crate::common::cycle::ClockSecs;
use crate::common::layers::Layer;
use crate::common::state::{CombatSet, GameState};
use crate::common::tunables::Tunables;
use crate::plugins::combat::{CombatEvents, Health, Invulnerability, PendingDespawn, Team};
use crate::plugins::enemies::systems::on_enemy_destroyed;
use crate::plugins::projectiles::messages::SpawnProjectileRequest;
use crate::plugins::weapons::{DroppedWeapon, Weapon, WeaponCatalog};

#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// Request to fire the player's weapon along `direction`.
#[derive(Message, Debug, Clone, Copy)]
pub struct PlayerFireRequest {
    pub direction: Vec2,
}

#[derive(Component, Debug, Clone, Default)]
pub struct PlayerArsenal {
    pub weapon: Option<Weapon>,
    next_fire_at: ClockSecs,
}

impl PlayerArsenal {
    pub fn new(weapon: Option<Weapon>) -> Self {
        Self { weapon, next_fire_at: 0.0 }
    }

    /// Consume the cooldown and return the weapon to fire, if it is ready.
    pub fn try_fire(&mut self, now: ClockSecs) -> Option<Weapon> {
        let weapon = self.weapon.as_ref()?;
        if now < self.next_fire_at {
            return None;
        }
        self.next_fire_at = now + f64::from(weapon.fire_rate.max(0.0));
        Some(weapon.clone())
    }

    /// Swap in a new weapon. The running cooldown is kept.
    pub fn equip(&mut self, weapon: Weapon) {
        self.weapon = Some(weapon);
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<PlayerFireRequest>()
        .add_systems(Startup, spawn)
        .add_systems(OnExit(GameState::GameOver), spawn)
        .add_systems(
            Update,
            (tick_invulnerability, fire_weapon).in_set(CombatSet::Behavior),
        )
        .add_systems(
            Update,
            adopt_dropped_weapon
                .in_set(CombatSet::Lifecycle)
                .after(on_enemy_destroyed),
        );
}

/// Spawn the player unless a live one already exists.
fn spawn(
    mut commands: Commands,
    q_existing: Query<(), (With<Player>, Without<PendingDespawn>)>,
    config: Res<CombatConfig>,
    catalog: Res<WeaponCatalog>,
    tunables: Res<Tunables>,
    mut events: CombatEvents,
) {
    if !q_existing.is_empty() {
        return;
    }

    let profile = &config.player;
    let weapon = profile
        .start_weapon
        .as_deref()
        .and_then(|name| catalog.get(name))
        .cloned();

    let layers = CollisionLayers::new(Layer::Player, [Layer::Enemy, Layer::EnemyProjectile]);
    let health = Health::new(profile.max_health);
    let [x, y] = profile.position;

    let e = commands
        .spawn((
            Name::new("Player"),
            Player,
            health,
            Team::Player,
            Invulnerability::new(profile.invulnerability_secs),
            PlayerArsenal::new(weapon),
            Transform::from_xyz(x, y, 1.0),
            RigidBody::Kinematic,
            Collider::circle(tunables.actor_radius),
            Sensor,
            layers,
            CollisionEventsEnabled,
        ))
        .id();

    events.report_health(e, &health);
    info!("Player spawned with {} health", profile.max_health);
}

fn tick_invulnerability(time: Res<Time>, mut q: Query<&mut Invulnerability, With<Player>>) {
    for mut shield in &mut q {
        shield.tick(time.delta());
    }
}

fn fire_weapon(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut requests: MessageReader<PlayerFireRequest>,
    mut shots: MessageWriter<SpawnProjectileRequest>,
    mut q: Query<(&Transform, &mut PlayerArsenal, &Health), With<Player>>,
) {
    let now = time.elapsed_secs_f64();
    let Ok((tf, mut arsenal, health)) = q.single_mut() else {
        requests.clear();
        return;
    };

    for req in requests.read() {
        let Some(direction) = req.direction.try_normalize() else {
            continue;
        };
        if !health.is_alive() {
            continue;
        }
        let Some(weapon) = arsenal.try_fire(now) else {
            continue;
        };
        let origin = tf.translation.truncate() + direction * tunables.projectile_spawn_offset;
        shots.write(SpawnProjectileRequest { weapon, origin, direction, team: Team::Player });
    }
}

fn adopt_dropped_weapon(
    mut dropped: ResMut<DroppedWeapon>,
    mut q: Query<&mut PlayerArsenal, With<Player>>,
) {
    let Ok(mut arsenal) = q.single_mut() else {
        return;
    };
    if let Some(weapon) = dropped.take() {
        info!("Player picked up {}", weapon.name);
        arsenal.equip(weapon);
    }
}
