//! Buffered spawn requests.
//!
//! Shooters and the player only write intent; the allocator is the single consumer
//! that touches the pool.

use bevy::prelude::*;

use crate::plugins::combat::Team;
use crate::plugins::weapons::Weapon;

#[derive(Message, Clone, Debug)]
pub struct SpawnProjectileRequest {
    pub weapon: Weapon,
    pub origin: Vec2,
    /// Unit travel direction.
    pub direction: Vec2,
    /// Team of the shooter; the projectile never hits this team.
    pub team: Team,
}
