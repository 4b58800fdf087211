//! Scoring: points for kills, and a high score kept behind a storage seam.

use bevy::prelude::*;

use crate::common::config::{CombatConfig, ScoreValues};
use crate::common::state::{CombatSet, GameState};
use crate::plugins::combat::{ActorKind, DestroyCause, Destroyed};
use crate::plugins::enemies::EnemyClass;

/// Where the high score lives between runs.
pub trait HighScoreStore: std::fmt::Debug + Send + Sync {
    fn load(&self) -> u32;
    fn save(&mut self, score: u32);
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryHighScore {
    best: u32,
}

impl HighScoreStore for InMemoryHighScore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, score: u32) {
        self.best = score;
    }
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChanged {
    pub score: u32,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreChanged {
    pub high_score: u32,
}

#[derive(Resource, Debug)]
pub struct ScoreBoard {
    current: u32,
    high: u32,
    store: Box<dyn HighScoreStore>,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::with_store(Box::new(InMemoryHighScore::default()))
    }
}

impl ScoreBoard {
    pub fn with_store(store: Box<dyn HighScoreStore>) -> Self {
        let high = store.load();
        Self { current: 0, high, store }
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn high(&self) -> u32 {
        self.high
    }

    /// Add points. Returns `true` if the high score moved.
    pub fn add(&mut self, points: u32) -> bool {
        self.current = self.current.saturating_add(points);
        if self.current <= self.high {
            return false;
        }
        self.high = self.current;
        self.store.save(self.high);
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[inline]
pub fn points_for(values: &ScoreValues, class: EnemyClass) -> u32 {
    match class {
        EnemyClass::Shooter => values.shooter,
        EnemyClass::Melee => values.melee,
    }
}

pub fn plugin(app: &mut App) {
    let values = app
        .world()
        .get_resource::<CombatConfig>()
        .map(|config| config.scoring)
        .unwrap_or_default();

    app.insert_resource(values)
        .init_resource::<ScoreBoard>()
        .add_message::<ScoreChanged>()
        .add_message::<HighScoreChanged>()
        .add_systems(Update, award_score.in_set(CombatSet::Lifecycle))
        .add_systems(OnExit(GameState::GameOver), reset_score);
}

/// Award points for enemies killed by damage. Other causes score nothing.
pub fn award_score(
    values: Res<ScoreValues>,
    mut board: ResMut<ScoreBoard>,
    mut destroyed: MessageReader<Destroyed>,
    mut score_changed: MessageWriter<ScoreChanged>,
    mut high_changed: MessageWriter<HighScoreChanged>,
) {
    for ev in destroyed.read() {
        let ActorKind::Enemy(class) = ev.kind else {
            continue;
        };
        if ev.cause != DestroyCause::Killed {
            continue;
        }

        let beat_high = board.add(points_for(&values, class));
        score_changed.write(ScoreChanged { score: board.current() });
        if beat_high {
            high_changed.write(HighScoreChanged { high_score: board.high() });
        }
    }
}

fn reset_score(mut board: ResMut<ScoreBoard>, mut score_changed: MessageWriter<ScoreChanged>) {
    board.reset();
    score_changed.write(ScoreChanged { score: 0 });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::{drain_messages, init_combat_messages, run_system_once};

    fn world() -> World {
        let mut world = World::new();
        init_combat_messages(&mut world);
        world.insert_resource(ScoreValues::default());
        world.init_resource::<ScoreBoard>();
        world
    }

    fn destroyed(world: &mut World, class: EnemyClass, cause: DestroyCause) {
        let entity = world.spawn_empty().id();
        world.write_message(Destroyed { entity, kind: ActorKind::Enemy(class), cause });
    }

    #[test]
    fn kills_score_by_class() {
        let mut world = world();
        destroyed(&mut world, EnemyClass::Shooter, DestroyCause::Killed);
        destroyed(&mut world, EnemyClass::Melee, DestroyCause::Killed);
        run_system_once(&mut world, award_score);

        assert_eq!(world.resource::<ScoreBoard>().current(), 300);
        let scores: Vec<_> = drain_messages::<ScoreChanged>(&mut world)
            .into_iter()
            .map(|m| m.score)
            .collect();
        assert_eq!(scores, vec![200, 300]);
    }

    #[test]
    fn other_causes_and_player_death_score_nothing() {
        let mut world = world();
        destroyed(&mut world, EnemyClass::Melee, DestroyCause::LeftViewport);
        destroyed(&mut world, EnemyClass::Melee, DestroyCause::Contact);
        let player = world.spawn_empty().id();
        world.write_message(Destroyed {
            entity: player,
            kind: ActorKind::Player,
            cause: DestroyCause::Killed,
        });
        run_system_once(&mut world, award_score);

        assert_eq!(world.resource::<ScoreBoard>().current(), 0);
        assert!(drain_messages::<ScoreChanged>(&mut world).is_empty());
    }

    #[derive(Debug, Default)]
    struct RecordingStore {
        saved: Vec<u32>,
    }

    impl HighScoreStore for RecordingStore {
        fn load(&self) -> u32 {
            250
        }

        fn save(&mut self, score: u32) {
            self.saved.push(score);
        }
    }

    #[test]
    fn high_score_persists_only_when_beaten() {
        let mut board = ScoreBoard::with_store(Box::new(RecordingStore::default()));
        assert_eq!(board.high(), 250);

        assert!(!board.add(200));
        assert!(board.add(100));
        assert_eq!(board.high(), 300);

        board.reset();
        assert_eq!(board.current(), 0);
        assert_eq!(board.high(), 300);
        assert!(!board.add(100));
    }

    #[test]
    fn high_score_message_follows_new_record() {
        let mut world = world();
        destroyed(&mut world, EnemyClass::Melee, DestroyCause::Killed);
        run_system_once(&mut world, award_score);

        let highs = drain_messages::<HighScoreChanged>(&mut world);
        assert_eq!(highs, vec![HighScoreChanged { high_score: 100 }]);
    }
}
