use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::plugins::weapons::Weapon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyClass {
    Shooter,
    Melee,
}

impl EnemyClass {
    pub const ALL: [EnemyClass; 2] = [EnemyClass::Shooter, EnemyClass::Melee];

    pub fn label(self) -> &'static str {
        match self {
            EnemyClass::Shooter => "shooter",
            EnemyClass::Melee => "melee",
        }
    }
}

/// Enemy marker. The class never changes after spawn.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub class: EnemyClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeleeHeading {
    StraightDown,
    ChasePlayer,
}

/// Continuous melee motion; melee enemies have no explicit state.
#[derive(Component, Debug, Clone, Copy)]
pub struct MeleeMovement {
    pub speed: f32,
    pub heading: MeleeHeading,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShooterState {
    #[default]
    Moving,
    Shooting,
}

/// Horizontal patrol of a shooter.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShooterPatrol {
    pub speed: f32,
    /// +1 right, -1 left.
    pub direction: f32,
    pub randomize: bool,
    /// Per-tick probability of reversing direction.
    pub change_chance: f32,
}

impl ShooterPatrol {
    #[inline]
    pub fn reverse(&mut self) {
        self.direction = -self.direction;
    }
}

/// Weapon assigned at spawn. `None` when the weighted pick failed.
#[derive(Component, Debug, Clone, Default)]
pub struct Armament {
    pub weapon: Option<Weapon>,
}
