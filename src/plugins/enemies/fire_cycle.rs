//! Shooter fire cycle.
//!
//! ```text
//!   Approach ──(fire_rate - pause_before)──> Aim ──(pause_before)──> FIRE
//!      ^            state: Moving             state: Shooting          │
//!      │                                                               v
//!      └──────────────────(pause_after)────────────────────────── Recover
//!                         state: Shooting -> Moving
//! ```
//!
//! The cycle is a `CycleTask` owned by the enemy. `cancel` drops the task, so a wait
//! that was in flight can never produce its shot; `start` always builds a fresh task.

use bevy::prelude::*;

use super::components::ShooterState;
use crate::common::cycle::{ClockSecs, CycleTask};
use crate::plugins::weapons::WeaponSpec;

/// A lap can fire at most once, so one resume never walks more than one lap.
const MAX_STEPS_PER_RESUME: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirePhase {
    /// Moving, waiting for the next shot to come due.
    Approach,
    /// Stopped, about to fire.
    Aim,
    /// Fired, waiting before moving again.
    Recover,
}

#[derive(Component, Debug, Clone)]
pub struct FireCycle {
    pub pause_before: f32,
    pub pause_after: f32,
    task: Option<CycleTask<FirePhase>>,
}

impl FireCycle {
    pub fn new(pause_before: f32, pause_after: f32) -> Self {
        Self { pause_before, pause_after, task: None }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn phase(&self) -> Option<FirePhase> {
        self.task.as_ref().map(CycleTask::phase)
    }

    #[inline]
    fn approach_wait(&self, weapon: &WeaponSpec) -> f64 {
        f64::from(weapon.fire_rate - self.pause_before)
    }

    /// Start a fresh cycle. No-op if one is already running.
    pub fn start(&mut self, weapon: &WeaponSpec, now: ClockSecs) -> bool {
        if self.task.is_some() {
            return false;
        }
        self.task = Some(CycleTask::new(FirePhase::Approach, now, self.approach_wait(weapon)));
        true
    }

    /// Stop the cycle and return the shooter to `Moving`.
    pub fn cancel(&mut self, state: &mut ShooterState) -> bool {
        *state = ShooterState::Moving;
        self.task.take().is_some()
    }

    /// Resume the cycle at `now`. Returns the number of shots that came due.
    pub fn resume(&mut self, weapon: &WeaponSpec, now: ClockSecs, state: &mut ShooterState) -> u32 {
        let approach_wait = self.approach_wait(weapon);
        let pause_before = f64::from(self.pause_before);
        let pause_after = f64::from(self.pause_after);

        let Some(task) = self.task.as_mut() else {
            return 0;
        };

        let mut shots = 0;
        for _ in 0..MAX_STEPS_PER_RESUME {
            if !task.is_due(now) {
                break;
            }
            match task.phase() {
                FirePhase::Approach => {
                    *state = ShooterState::Shooting;
                    task.rearm(FirePhase::Aim, pause_before);
                }
                FirePhase::Aim => {
                    shots += 1;
                    task.rearm(FirePhase::Recover, pause_after);
                }
                FirePhase::Recover => {
                    *state = ShooterState::Moving;
                    task.rearm(FirePhase::Approach, approach_wait);
                }
            }
        }
        shots
    }
}
