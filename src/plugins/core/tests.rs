use bevy::prelude::*;

use crate::common::config::CombatConfig;
use crate::common::rng::CombatRng;
use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<CombatConfig>().is_some());
    assert!(app.world().get_resource::<CombatRng>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_preinserted_config_and_seeds_rng() {
    let mut app = App::new();
    app.insert_resource(CombatConfig { seed: Some(5), spawning_enabled: false, ..default() });
    app.insert_resource(Tunables { projectile_pool_capacity: 4, ..default() });
    core::plugin(&mut app);

    assert!(!app.world().resource::<CombatConfig>().spawning_enabled);
    assert_eq!(app.world().resource::<Tunables>().projectile_pool_capacity, 4);

    let mut expected = CombatRng::seeded(5);
    let roll = app.world_mut().resource_mut::<CombatRng>().unit();
    assert_eq!(roll, expected.unit());
}
