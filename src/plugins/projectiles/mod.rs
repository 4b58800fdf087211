//! Projectile simulator: message-based producer → consumer spawning over a fixed pool.
//!
//! # Data flow
//! ```text
//!   Update (variable dt), gated on Playing
//!┌──────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producers: shooter fire cycles, player fire requests                │
//!│      - writes: SpawnProjectileRequest                                    │
//!│                                                                          │
//!│  (B) Consumer: allocate_projectiles                                      │
//!│      - mutates: ProjectilePool free list                                 │
//!│      - writes: ProjectileState::Flying, Projectile, Transform, layers    │
//!│                                                                          │
//!│  (C) advance_projectiles / expire_stuck                                  │
//!│      - bounded step, spin or facing, viewport boundary rules             │
//!│      - Flying -> Stuck { despawn_at } | PendingReturn                    │
//!└──────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate, after CollisionEventSystems
//!┌──────────────────────────────────────────────────────────────────────────┐
//!│  (D) process_projectile_hits                                             │
//!│      - reads: CollisionStart                                             │
//!│      - damage through CombatEvents, Flying | Stuck -> PendingReturn      │
//!└──────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   PostUpdate
//!┌──────────────────────────────────────────────────────────────────────────┐
//!│  (E) return_to_pool_commit: PendingReturn -> Inactive, push free         │
//!└──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never borrow the pool. The allocator is its only reader and the commit
//! system its only writer back, so pool mutation stays in two places.
//!
//! The pool has a fixed capacity. When it runs dry the request is dropped; that is a
//! capacity decision, everything else is treated as an invariant.

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod flight;
pub mod messages;
pub mod pool;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::{CombatSet, GameState};
use crate::common::tunables::Tunables;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let capacity = app
            .world()
            .get_resource::<Tunables>()
            .map(|t| t.projectile_pool_capacity)
            .unwrap_or_else(|| Tunables::default().projectile_pool_capacity);

        app.insert_resource(pool::ProjectilePool::new(capacity))
            .add_message::<messages::SpawnProjectileRequest>()
            .add_systems(Startup, pool::init_projectile_pool);

        app.add_systems(
            Update,
            (
                allocator::allocate_projectiles,
                flight::advance_projectiles,
                flight::expire_stuck,
            )
                .chain()
                .in_set(CombatSet::Projectiles),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::process_projectile_hits
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(PostUpdate, commit::return_to_pool_commit);
    }
}
