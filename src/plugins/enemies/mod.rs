//! Enemy behavior engine.
//!
//! Two classes share one damage contract (`Health` + `Team::Enemy`):
//! - **Melee** walks straight down (or at the player) and leaves through the bottom edge.
//! - **Shooter** patrols horizontally and fires its assigned weapon on a timed cycle
//!   (see `fire_cycle`).
//!
//! Enemies are spawned by the spawner through `spawn_enemy`; this plugin only drives them.

pub mod components;
pub mod fire_cycle;
pub mod systems;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::config::EnemyProfile;
use crate::common::cycle::ClockSecs;
use crate::common::layers::Layer;
use crate::common::rng::CombatRng;
use crate::common::state::{CombatSet, GameState};
use crate::plugins::combat::{Health, Team};
use crate::plugins::weapons::{Weapon, WeaponCatalog, WeaponChance};

pub use components::{
    Armament, Enemy, EnemyClass, MeleeHeading, MeleeMovement, ShooterPatrol, ShooterState,
};
pub use fire_cycle::{FireCycle, FirePhase};

/// Everything needed to spawn one enemy of a class, resolved once from config.
#[derive(Debug, Clone)]
pub struct EnemyBlueprint {
    pub class: EnemyClass,
    pub profile: EnemyProfile,
    pub weapons: Vec<WeaponChance>,
    pub radius: f32,
}

impl EnemyBlueprint {
    pub fn from_profile(class: EnemyClass, profile: &EnemyProfile, catalog: &WeaponCatalog) -> Self {
        Self {
            class,
            profile: profile.clone(),
            weapons: catalog.chances(&profile.weapons),
            radius: 0.4,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Weighted weapon pick for a new shooter. Melee enemies carry no weapon.
    pub fn roll_weapon(&self, rng: &mut CombatRng) -> Option<Weapon> {
        if self.class != EnemyClass::Shooter {
            return None;
        }
        let weapon = WeaponCatalog::select(&self.weapons, rng);
        if weapon.is_none() {
            warn!("Weapon selection failed for {}, it will only patrol", self.class.label());
        }
        weapon
    }
}

#[inline]
fn enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::Player, Layer::PlayerProjectile])
}

/// Spawn one enemy at `pos`. A shooter with a weapon starts its fire cycle at `now`.
pub fn spawn_enemy(
    commands: &mut Commands,
    blueprint: &EnemyBlueprint,
    pos: Vec2,
    weapon: Option<Weapon>,
    now: ClockSecs,
) -> Entity {
    let profile = &blueprint.profile;
    let mut entity = commands.spawn((
        Name::new(format!("Enemy({})", blueprint.class.label())),
        Enemy { class: blueprint.class },
        Health::new(profile.health),
        Team::Enemy,
        Transform::from_translation(pos.extend(1.0)),
        RigidBody::Dynamic,
        Collider::circle(blueprint.radius),
        Sensor,
        enemy_layers(),
        CollisionEventsEnabled,
    ));

    match blueprint.class {
        EnemyClass::Melee => {
            let heading = if profile.chase_player {
                MeleeHeading::ChasePlayer
            } else {
                MeleeHeading::StraightDown
            };
            entity.insert(MeleeMovement { speed: profile.move_speed, heading });
        }
        EnemyClass::Shooter => {
            let mut cycle = FireCycle::new(profile.pause_before_shooting, profile.pause_after_shooting);
            if let Some(weapon) = weapon.as_ref() {
                cycle.start(weapon, now);
            }
            entity.insert((
                ShooterState::Moving,
                ShooterPatrol {
                    speed: profile.horizontal_speed,
                    direction: 1.0,
                    randomize: profile.randomize_direction,
                    change_chance: profile.direction_change_chance,
                },
                Armament { weapon },
                cycle,
            ));
        }
    }

    entity.id()
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            systems::advance_melee,
            systems::patrol_shooters,
            systems::run_fire_cycles,
        )
            .chain()
            .in_set(CombatSet::Behavior),
    );
    app.add_systems(Update, systems::on_enemy_destroyed.in_set(CombatSet::Lifecycle));

    app.add_systems(OnEnter(GameState::Playing), systems::resume_fire_cycles);
    app.add_systems(OnEnter(GameState::Paused), systems::cancel_fire_cycles);
    app.add_systems(OnEnter(GameState::GameOver), systems::cancel_fire_cycles);
}
