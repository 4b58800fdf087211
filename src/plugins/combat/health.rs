//! Damage and lethality shared by every damageable actor.

use bevy::prelude::*;

/// Team tag used for collision-ignore filtering.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Actor already dead, or shielded.
    Ignored,
    Survived { remaining: i32 },
    Killed,
}

/// Health of a damageable actor.
///
/// `alive` is the lethality flag: it flips to `false` exactly once and never back.
/// `current` may go below zero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
    alive: bool,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max, alive: max > 0 }
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if !self.alive {
            return DamageOutcome::Ignored;
        }
        self.current -= amount;
        if self.current <= 0 {
            self.alive = false;
            DamageOutcome::Killed
        } else {
            DamageOutcome::Survived { remaining: self.current }
        }
    }

    /// Kill without damage (left the screen, contact, external removal).
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}

/// Post-hit invulnerability window. Hits are rejected while it runs.
#[derive(Component, Debug, Clone)]
pub struct Invulnerability {
    timer: Timer,
    active: bool,
}

impl Invulnerability {
    pub fn new(secs: f32) -> Self {
        Self { timer: Timer::from_seconds(secs.max(0.0), TimerMode::Once), active: false }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        self.timer.reset();
        self.active = true;
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        if !self.active {
            return;
        }
        self.timer.tick(delta);
        if self.timer.is_finished() {
            self.active = false;
        }
    }
}
