mod common;

use bevy::prelude::*;
use tilt_thrower::common::state::GameState;
use tilt_thrower::plugins::player::Player;
use tilt_thrower::plugins::projectiles::pool::ProjectilePool;
use tilt_thrower::plugins::spawner::SpawnController;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::Playing);
    assert_eq!(common::count::<With<Player>>(&mut app), 1);
}

#[test]
fn startup_prepares_pool_and_spawning() {
    let mut app = common::app_headless();
    app.update();

    let pool = app.world().resource::<ProjectilePool>();
    assert_eq!(pool.free_len(), pool.capacity());
    assert!(app.world().resource::<SpawnController>().is_running());
}
