use bevy::prelude::*;

use crate::common::cycle::ClockSecs;
use crate::plugins::combat::Team;
use crate::plugins::weapons::Weapon;

#[derive(Component, Debug, Clone, Copy)]
pub struct PooledProjectile;

/// Pool handle. Only the pool hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileEntity(pub Entity);

#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Flying,
    /// Frozen against a side wall until `despawn_at`.
    Stuck { despawn_at: ClockSecs },
    PendingReturn,
}

impl ProjectileState {
    #[inline]
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Flying | Self::Stuck { .. })
    }
}

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub weapon: Option<Weapon>,
    pub direction: Vec2,
    pub ignore: Team,
}

impl Default for Projectile {
    fn default() -> Self {
        Self { weapon: None, direction: Vec2::ZERO, ignore: Team::Enemy }
    }
}

impl Projectile {
    #[inline]
    pub fn arm(&mut self, weapon: Weapon, direction: Vec2, ignore: Team) {
        self.weapon = Some(weapon);
        self.direction = direction;
        self.ignore = ignore;
    }

    #[inline]
    pub fn disarm(&mut self) {
        self.weapon = None;
        self.direction = Vec2::ZERO;
    }
}
