//! Combat event bus.
//!
//! Producers (collision resolution, enemy behavior) write these messages; consumers
//! (spawner population tracking, scoring, enemy/player lifecycle, presentation) read them
//! with their own cursors. No component ever calls another directly.

use bevy::prelude::*;

use crate::plugins::enemies::EnemyClass;

/// Which kind of actor a message is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Enemy(EnemyClass),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestroyCause {
    /// Health reached zero.
    Killed,
    /// Melee enemy left the bottom of the viewport.
    LeftViewport,
    /// Enemy collided with the player.
    Contact,
    /// Removed by something outside the combat core.
    Removed,
}

/// Written exactly once per actor, before any destruction side effect runs.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct Destroyed {
    pub entity: Entity,
    pub kind: ActorKind,
    pub cause: DestroyCause,
}

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct Damaged {
    pub entity: Entity,
    pub kind: ActorKind,
    pub amount: i32,
    pub remaining: i32,
}

/// Presentation feed: current and max health after any change.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: i32,
    pub max: i32,
}
