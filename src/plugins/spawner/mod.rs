//! Spawn controller: per-class admission control over timed spawn cycles.
//!
//! Every class runs its own repeating `CycleTask`. On each due step it spawns one enemy
//! if the class is under its cap and the chance roll passes. Population is tracked
//! through a subscription table: an entry is added per spawned enemy and removed exactly
//! once, on its `Destroyed` message or, failing that, when the entity leaves the world.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::common::config::{CombatConfig, SpawnClassConfig};
use crate::common::cycle::{ClockSecs, CycleTask};
use crate::common::rng::CombatRng;
use crate::common::state::{CombatSet, GameState};
use crate::common::tunables::Tunables;
use crate::plugins::combat::Destroyed;
use crate::plugins::enemies::{spawn_enemy, Enemy, EnemyBlueprint, EnemyClass};
use crate::plugins::weapons::WeaponCatalog;

#[derive(Debug, Clone)]
pub struct ClassSpawner {
    pub settings: SpawnClassConfig,
    pub blueprint: EnemyBlueprint,
    alive: u32,
    task: Option<CycleTask<()>>,
}

impl ClassSpawner {
    pub fn new(settings: SpawnClassConfig, blueprint: EnemyBlueprint) -> Self {
        Self { settings, blueprint, alive: 0, task: None }
    }

    #[inline]
    pub fn class(&self) -> EnemyClass {
        self.blueprint.class
    }

    #[inline]
    pub fn alive(&self) -> u32 {
        self.alive
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    #[inline]
    fn interval(&self) -> f64 {
        f64::from(self.settings.interval_secs)
    }

    /// Start a fresh cycle; the first step comes due one interval from `now`.
    pub fn start(&mut self, now: ClockSecs) {
        if self.task.is_none() {
            self.task = Some(CycleTask::new((), now, self.interval()));
        }
    }

    pub fn stop(&mut self) {
        self.task = None;
    }

    /// Advance the cycle by at most one step. Returns `true` if a step came due.
    pub fn poll(&mut self, now: ClockSecs) -> bool {
        let interval = self.interval();
        match self.task.as_mut() {
            Some(task) if task.is_due(now) => {
                task.rearm((), interval);
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn has_room(&self) -> bool {
        self.alive < self.settings.max_alive
    }

    /// Chance gate. A non-positive chance never admits, even on a zero roll.
    #[inline]
    pub fn admits(&self, roll: f32) -> bool {
        self.settings.spawn_chance > 0.0 && roll <= self.settings.spawn_chance
    }

    pub fn pick_position(&self, rng: &mut CombatRng) -> Vec2 {
        let points = &self.settings.spawn_points;
        if !points.is_empty() {
            let [x, y] = points[rng.index(points.len())];
            return Vec2::new(x, y);
        }
        let area = self.settings.area;
        Vec2::new(area.x + rng.range(0.0, area.w), area.y + rng.range(0.0, area.h))
    }
}

#[derive(Resource, Debug, Default)]
pub struct SpawnController {
    pub enabled: bool,
    classes: Vec<ClassSpawner>,
    subscriptions: HashMap<Entity, EnemyClass>,
}

impl SpawnController {
    pub fn new(enabled: bool, classes: Vec<ClassSpawner>) -> Self {
        Self { enabled, classes, subscriptions: HashMap::default() }
    }

    pub fn from_config(config: &CombatConfig, catalog: &WeaponCatalog, radius: f32) -> Self {
        let classes = [
            (EnemyClass::Shooter, &config.shooter),
            (EnemyClass::Melee, &config.melee),
        ]
        .into_iter()
        .map(|(class, cfg)| {
            let blueprint = EnemyBlueprint::from_profile(class, &cfg.profile, catalog).with_radius(radius);
            ClassSpawner::new(cfg.spawn.clone(), blueprint)
        })
        .collect();
        Self::new(config.spawning_enabled, classes)
    }

    pub fn class(&self, class: EnemyClass) -> Option<&ClassSpawner> {
        self.classes.iter().find(|c| c.class() == class)
    }

    pub fn class_mut(&mut self, class: EnemyClass) -> Option<&mut ClassSpawner> {
        self.classes.iter_mut().find(|c| c.class() == class)
    }

    pub fn alive(&self, class: EnemyClass) -> u32 {
        self.class(class).map_or(0, ClassSpawner::alive)
    }

    pub fn is_running(&self) -> bool {
        self.classes.iter().any(ClassSpawner::is_running)
    }

    /// Idempotent. Does nothing while spawning is disabled.
    pub fn start(&mut self, now: ClockSecs) {
        if !self.enabled {
            return;
        }
        for spawner in &mut self.classes {
            spawner.start(now);
        }
    }

    /// Idempotent. A later `start` builds fresh cycles.
    pub fn stop(&mut self) {
        for spawner in &mut self.classes {
            spawner.stop();
        }
    }

    pub fn register(&mut self, entity: Entity, class: EnemyClass) {
        if self.subscriptions.insert(entity, class).is_none() {
            if let Some(spawner) = self.class_mut(class) {
                spawner.alive += 1;
            }
        }
    }

    /// Drop the subscription for `entity`. Only the first call per entity counts.
    pub fn release(&mut self, entity: Entity) -> Option<EnemyClass> {
        let class = self.subscriptions.remove(&entity)?;
        if let Some(spawner) = self.class_mut(class) {
            spawner.alive = spawner.alive.saturating_sub(1);
        }
        Some(class)
    }
}

pub fn plugin(app: &mut App) {
    let world = app.world();
    let radius = world
        .get_resource::<Tunables>()
        .map_or_else(|| Tunables::default().actor_radius, |t| t.actor_radius);
    let controller = match (world.get_resource::<CombatConfig>(), world.get_resource::<WeaponCatalog>()) {
        (Some(config), Some(catalog)) => SpawnController::from_config(config, catalog, radius),
        _ => SpawnController::default(),
    };

    app.insert_resource(controller)
        .add_systems(Update, run_spawn_cycles.in_set(CombatSet::Spawn))
        .add_systems(Update, track_population.in_set(CombatSet::Lifecycle))
        .add_systems(OnEnter(GameState::Playing), start_spawning)
        .add_systems(OnEnter(GameState::Paused), stop_spawning)
        .add_systems(OnEnter(GameState::GameOver), stop_spawning);
}

pub fn run_spawn_cycles(
    mut commands: Commands,
    time: Res<Time>,
    mut rng: ResMut<CombatRng>,
    mut controller: ResMut<SpawnController>,
) {
    let now = time.elapsed_secs_f64();
    let mut spawned = Vec::new();

    for spawner in &mut controller.classes {
        if !spawner.poll(now) || !spawner.has_room() {
            continue;
        }
        if !spawner.admits(rng.unit()) {
            continue;
        }

        let pos = spawner.pick_position(&mut rng);
        let weapon = spawner.blueprint.roll_weapon(&mut rng);
        let e = spawn_enemy(&mut commands, &spawner.blueprint, pos, weapon, now);
        debug!("Spawned {} {e:?} at {pos}", spawner.class().label());
        spawned.push((e, spawner.class()));
    }

    for (e, class) in spawned {
        controller.register(e, class);
    }
}

/// Release subscriptions for destroyed or vanished enemies.
pub fn track_population(
    mut controller: ResMut<SpawnController>,
    mut destroyed: MessageReader<Destroyed>,
    mut removed: RemovedComponents<Enemy>,
) {
    for ev in destroyed.read() {
        if let Some(class) = controller.release(ev.entity) {
            debug!("{} population now {}", class.label(), controller.alive(class));
        }
    }
    for e in removed.read() {
        controller.release(e);
    }
}

fn start_spawning(time: Res<Time>, mut controller: ResMut<SpawnController>) {
    controller.start(time.elapsed_secs_f64());
    if controller.is_running() {
        info!("Enemy spawning started");
    }
}

fn stop_spawning(mut controller: ResMut<SpawnController>) {
    controller.stop();
    info!("Enemy spawning stopped");
}
