//! Global state machine and the per-frame combat ordering.

use bevy::prelude::*;

/// Run state of a combat session.
///
/// Entering `Paused` or `GameOver` cancels every fire and spawn cycle;
/// entering `Playing` restarts them as fresh cycles.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
    GameOver,
}

/// Per-frame ordering of the combat simulation in `Update`.
///
/// ```text
/// Spawn -> Behavior -> Projectiles -> Lifecycle
/// ```
///
/// The first three only run while `Playing`. `Lifecycle` holds the message
/// consumers (population tracking, scoring, death handling) and always runs so
/// that destruction bookkeeping is never skipped.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatSet {
    Spawn,
    Behavior,
    Projectiles,
    Lifecycle,
}

pub fn configure_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (CombatSet::Spawn, CombatSet::Behavior, CombatSet::Projectiles)
            .chain()
            .run_if(in_state(GameState::Playing)),
    );
    app.configure_sets(Update, CombatSet::Lifecycle.after(CombatSet::Projectiles));
}
