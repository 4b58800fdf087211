//! Cooperative timed tasks.
//!
//! A `CycleTask` is a resumable step machine parked at a wake-up checkpoint on the
//! monotonic simulation clock (`Time::elapsed_secs_f64`). The owning system resumes it
//! once `now >= wake_at`, runs one step and re-arms it for the next wait.
//!
//! Cancellation is dropping the value (`Option::take`): a task that no longer exists
//! cannot resume, so a cancelled wait never produces its pending action.
//!
//! Re-arming adds the wait to the previous deadline rather than to `now`, so a cycle
//! does not drift with frame timing.

/// Seconds on the monotonic simulation clock.
pub type ClockSecs = f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleTask<P> {
    phase: P,
    wake_at: ClockSecs,
}

impl<P: Copy> CycleTask<P> {
    /// Park a new task in `phase`, waking `wait` seconds after `now`.
    ///
    /// Negative waits are treated as zero.
    #[inline]
    pub fn new(phase: P, now: ClockSecs, wait: f64) -> Self {
        Self { phase, wake_at: now + wait.max(0.0) }
    }

    #[inline]
    pub fn phase(&self) -> P {
        self.phase
    }

    #[inline]
    pub fn wake_at(&self) -> ClockSecs {
        self.wake_at
    }

    #[inline]
    pub fn is_due(&self, now: ClockSecs) -> bool {
        now >= self.wake_at
    }

    /// Move to `phase` and sleep `wait` seconds past the previous checkpoint.
    #[inline]
    pub fn rearm(&mut self, phase: P, wait: f64) {
        self.phase = phase;
        self.wake_at += wait.max(0.0);
    }
}
