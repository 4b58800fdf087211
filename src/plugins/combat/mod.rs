//! Combat plugin: the shared damage contract and the event bus around it.
//!
//! ```text
//!   producers                         bus                       consumers
//!   ---------                         ---                       ---------
//!   projectile hits  ─┐                                   ┌─> spawner (population)
//!   contact hits     ─┼─> CombatEvents ─> Destroyed ──────┼─> scoring
//!   melee exit       ─┘        │          Damaged         ├─> enemy lifecycle (drop weapon)
//!                              │          HealthChanged   ├─> flow (player death)
//!                              └─ Health alive gate       └─> mark_destroyed (despawn)
//! ```
//!
//! Every lethal transition goes through the `Health` alive gate inside `CombatEvents`,
//! so `Destroyed` is written at most once per actor no matter how many hits land in the
//! same frame.
//!
//! Destroyed actors are not despawned on the spot. They are marked `PendingDespawn`
//! and removed in `PostUpdate`, after every consumer had a chance to look at them.

pub mod contact;
pub mod health;
pub mod messages;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::common::state::{CombatSet, GameState};
use crate::plugins::enemies::Enemy;

pub use health::{DamageOutcome, Health, Invulnerability, Team};
pub use messages::{ActorKind, Damaged, DestroyCause, Destroyed, HealthChanged};

/// Marker: actor should be removed from the world at the end of the frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

impl ActorKind {
    /// Damageable actors are either enemies or the player.
    #[inline]
    pub fn of(enemy: Option<&Enemy>) -> Self {
        match enemy {
            Some(enemy) => ActorKind::Enemy(enemy.class),
            None => ActorKind::Player,
        }
    }
}

/// Writer side of the combat bus.
#[derive(SystemParam)]
pub struct CombatEvents<'w> {
    destroyed: MessageWriter<'w, Destroyed>,
    damaged: MessageWriter<'w, Damaged>,
    health_changed: MessageWriter<'w, HealthChanged>,
}

impl CombatEvents<'_> {
    /// Apply `amount` damage and publish the result.
    ///
    /// Rejected hits (dead target, active invulnerability) publish nothing. An accepted
    /// hit starts the invulnerability window if the target has one.
    pub fn apply_damage(
        &mut self,
        entity: Entity,
        kind: ActorKind,
        health: &mut Health,
        shield: Option<&mut Invulnerability>,
        amount: i32,
    ) -> DamageOutcome {
        if let Some(shield) = shield {
            if shield.is_active() {
                return DamageOutcome::Ignored;
            }
            if health.is_alive() {
                shield.start();
            }
        }

        let outcome = health.take_damage(amount);
        if outcome == DamageOutcome::Ignored {
            return outcome;
        }

        if outcome == DamageOutcome::Killed {
            self.destroyed.write(Destroyed { entity, kind, cause: DestroyCause::Killed });
        }
        self.damaged.write(Damaged { entity, kind, amount, remaining: health.current() });
        self.health_changed.write(HealthChanged {
            entity,
            current: health.current(),
            max: health.max(),
        });
        outcome
    }

    /// Destroy without damage. Returns `false` if the actor was already dead.
    pub fn destroy(
        &mut self,
        entity: Entity,
        kind: ActorKind,
        health: &mut Health,
        cause: DestroyCause,
    ) -> bool {
        if !health.kill() {
            return false;
        }
        self.destroyed.write(Destroyed { entity, kind, cause });
        true
    }

    /// Publish the current health, e.g. right after spawning.
    pub fn report_health(&mut self, entity: Entity, health: &Health) {
        self.health_changed.write(HealthChanged {
            entity,
            current: health.current(),
            max: health.max(),
        });
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<Destroyed>()
        .add_message::<Damaged>()
        .add_message::<HealthChanged>();

    app.add_systems(
        FixedPostUpdate,
        contact::process_contact_hits
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::Playing)),
    );
    app.add_systems(Update, mark_destroyed.in_set(CombatSet::Lifecycle));
    app.add_systems(PostUpdate, despawn_marked);
}

/// Mark every destroyed actor for end-of-frame removal.
pub fn mark_destroyed(mut commands: Commands, mut destroyed: MessageReader<Destroyed>) {
    for ev in destroyed.read() {
        commands.entity(ev.entity).try_insert(PendingDespawn);
    }
}

/// Despawn actors marked for removal.
///
/// Centralizing despawn in one system keeps structural changes predictable.
pub fn despawn_marked(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).try_despawn();
    }
}
