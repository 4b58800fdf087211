//! Game-state flow: pause / resume / restart requests and player death.
//!
//! ```text
//!            Pause                      player Destroyed
//!   Playing ───────> Paused    Playing ──────────────────> GameOver
//!      ^               │                                      │
//!      └─── Resume ────┘           Playing <──── Restart ─────┘
//! ```
//!
//! Entering a state is what starts or stops the timed cycles (see the spawner and enemy
//! plugins). Besides deciding transitions, this module freezes the virtual clock while
//! paused so deadlines such as stuck-projectile expiry and the player's cooldown hold.

use bevy::prelude::*;

use crate::common::state::{CombatSet, GameState};
use crate::plugins::combat::{ActorKind, CombatEvents, DestroyCause, Destroyed, Health};
use crate::plugins::enemies::Enemy;
use crate::plugins::projectiles::components::ProjectileState;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRequest {
    Pause,
    Resume,
    Restart,
}

impl FlowRequest {
    /// Target state if the request is valid from `from`.
    pub fn target(self, from: GameState) -> Option<GameState> {
        match (self, from) {
            (FlowRequest::Pause, GameState::Playing) => Some(GameState::Paused),
            (FlowRequest::Resume, GameState::Paused) => Some(GameState::Playing),
            (FlowRequest::Restart, GameState::GameOver) => Some(GameState::Playing),
            _ => None,
        }
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<FlowRequest>()
        .add_systems(Update, apply_flow_requests.before(CombatSet::Spawn))
        .add_systems(Update, game_over_on_player_death.in_set(CombatSet::Lifecycle))
        .add_systems(OnEnter(GameState::Paused), freeze_clock)
        .add_systems(OnEnter(GameState::Playing), thaw_clock)
        .add_systems(OnExit(GameState::GameOver), clear_field);
}

fn freeze_clock(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn thaw_clock(mut time: ResMut<Time<Virtual>>) {
    if time.is_paused() {
        time.unpause();
    }
}

pub fn apply_flow_requests(
    mut requests: MessageReader<FlowRequest>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let mut current = *state.get();
    for req in requests.read() {
        match req.target(current) {
            Some(target) => {
                info!("{req:?}: {current:?} -> {target:?}");
                next.set(target);
                current = target;
            }
            None => debug!("Ignoring {req:?} while {current:?}"),
        }
    }
}

pub fn game_over_on_player_death(
    mut destroyed: MessageReader<Destroyed>,
    mut next: ResMut<NextState<GameState>>,
) {
    if destroyed.read().any(|ev| ev.kind == ActorKind::Player) {
        info!("Player destroyed, game over");
        next.set(GameState::GameOver);
    }
}

/// Remove the previous run's enemies and projectiles before a restart.
fn clear_field(
    mut events: CombatEvents,
    mut q_enemies: Query<(Entity, &Enemy, &mut Health)>,
    mut q_projectiles: Query<&mut ProjectileState>,
) {
    for (e, enemy, mut health) in &mut q_enemies {
        events.destroy(e, ActorKind::Enemy(enemy.class), &mut health, DestroyCause::Removed);
    }
    for mut state in &mut q_projectiles {
        if state.is_live() {
            *state = ProjectileState::PendingReturn;
        }
    }
}
