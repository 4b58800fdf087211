mod common;

use bevy::prelude::*;
use tilt_thrower::common::config::CombatConfig;
use tilt_thrower::plugins::enemies::{Enemy, EnemyClass};
use tilt_thrower::plugins::projectiles::components::ProjectileState;
use tilt_thrower::plugins::spawner::SpawnController;

fn melee_only() -> CombatConfig {
    let mut config = CombatConfig { seed: Some(7), ..default() };
    config.shooter.spawn.max_alive = 0;
    config.melee.spawn.max_alive = 2;
    config.melee.spawn.interval_secs = 0.5;
    config.melee.spawn.spawn_chance = 1.0;
    // Away from the player's column so no melee dies on contact.
    config.melee.spawn.spawn_points = vec![[-5.0, 4.0], [5.0, 4.0]];
    config
}

fn shooter_only() -> CombatConfig {
    let mut config = CombatConfig { seed: Some(7), ..default() };
    config.melee.spawn.max_alive = 0;
    config.shooter.spawn.max_alive = 1;
    config.shooter.spawn.interval_secs = 0.2;
    config
}

#[test]
fn melee_population_respects_cap() {
    let mut app = common::app_with_config(melee_only());

    for _ in 0..30 {
        app.update();
        assert!(common::count::<With<Enemy>>(&mut app) <= 2);
    }
    assert_eq!(app.world().resource::<SpawnController>().alive(EnemyClass::Melee), 2);
}

#[test]
fn melee_leaving_the_screen_frees_its_slot() {
    let mut app = common::app_with_config(melee_only());

    // Spawned at y = 4 moving down at 2/s; the exit line is y = -6.
    common::run_for(&mut app, 1.5);
    let first_wave: Vec<Entity> = app
        .world_mut()
        .query_filtered::<Entity, With<Enemy>>()
        .iter(app.world())
        .collect();
    assert_eq!(first_wave.len(), 2);

    common::run_for(&mut app, 6.0);
    for e in first_wave {
        assert!(app.world().get_entity(e).is_err(), "melee {e:?} should be gone");
    }
    assert!(app.world().resource::<SpawnController>().alive(EnemyClass::Melee) <= 2);
    assert!(common::count::<With<Enemy>>(&mut app) >= 1, "replacements spawn");
}

#[test]
fn shooter_fires_at_the_player() {
    let mut app = common::app_with_config(shooter_only());

    let mut saw_projectile = false;
    for _ in 0..40 {
        app.update();
        let flying = app
            .world_mut()
            .query::<&ProjectileState>()
            .iter(app.world())
            .any(|s| *s == ProjectileState::Flying);
        saw_projectile |= flying;
    }

    assert_eq!(common::count::<With<Enemy>>(&mut app), 1);
    assert!(saw_projectile, "shooter should have fired within four seconds");
}
