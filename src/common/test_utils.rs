//! Test helpers.
//!
//! Bevy provides `World::run_system_once` (via the `RunSystemOnce` trait) for quickly
//! executing a system in tests without building a full schedule.
//!
//! Systems that use `Commands` enqueue structural changes; applying them is normally handled by
//! `ApplyDeferred` / schedule boundaries. We call `world.flush()` after running so queued commands
//! are applied before assertions.

use std::time::Duration;

use avian2d::prelude::CollisionStart;
use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::plugins::combat::messages::{Damaged, Destroyed, HealthChanged};
use crate::plugins::player::PlayerFireRequest;
use crate::plugins::projectiles::messages::SpawnProjectileRequest;
use crate::plugins::scoring::{HighScoreChanged, ScoreChanged};

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Insert the message buffers every combat system may read or write.
pub fn init_combat_messages(world: &mut World) {
    world.init_resource::<Messages<Destroyed>>();
    world.init_resource::<Messages<Damaged>>();
    world.init_resource::<Messages<HealthChanged>>();
    world.init_resource::<Messages<SpawnProjectileRequest>>();
    world.init_resource::<Messages<PlayerFireRequest>>();
    world.init_resource::<Messages<ScoreChanged>>();
    world.init_resource::<Messages<HighScoreChanged>>();
    world.init_resource::<Messages<CollisionStart>>();
}

/// Drain all pending messages of type `M` (both buffers) into a `Vec`.
pub fn drain_messages<M: Message + Clone>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}

/// Insert a simulation clock at t = 0.
pub fn insert_clock(world: &mut World) {
    world.insert_resource(Time::<()>::default());
}

/// Advance the simulation clock by `secs`, updating both elapsed time and delta.
pub fn advance_clock(world: &mut World, secs: f64) {
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f64(secs));
}
