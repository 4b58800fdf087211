//! Data-driven combat configuration.
//!
//! Weapons, enemy profiles and spawn settings are plain serde structs that can be read
//! from TOML. `CombatConfig::default()` reproduces the stock game balance.
//!
//! ```toml
//! seed = 7
//!
//! [[weapons]]
//! name = "pebble"
//! damage = 1
//! speed = 6.0
//! fire_rate = 1.5
//!
//! [shooter.spawn]
//! max_alive = 3
//! interval_secs = 2.0
//!
//! [[shooter.profile.weapons]]
//! weapon = "pebble"
//! weight = 100.0
//! ```

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::plugins::weapons::WeaponSpec;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    UnknownWeapon { owner: String, weapon: String },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read combat config: {e}"),
            Self::Parse(e) => write!(f, "failed to parse combat config: {e}"),
            Self::UnknownWeapon { owner, weapon } => {
                write!(f, "{owner} references unknown weapon `{weapon}`")
            }
            Self::Invalid(msg) => write!(f, "invalid combat config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// Axis-aligned spawn rectangle: origin corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnClassConfig {
    pub max_alive: u32,
    pub interval_secs: f32,
    /// Probability in `[0, 1]` that an eligible tick spawns.
    pub spawn_chance: f32,
    /// Fixed spawn positions; when empty, positions are drawn from `area`.
    pub spawn_points: Vec<[f32; 2]>,
    pub area: SpawnArea,
}

impl Default for SpawnClassConfig {
    fn default() -> Self {
        Self {
            max_alive: 5,
            interval_secs: 2.0,
            spawn_chance: 1.0,
            spawn_points: Vec::new(),
            area: SpawnArea { x: -7.0, y: 3.0, w: 14.0, h: 1.5 },
        }
    }
}

impl SpawnClassConfig {
    pub fn spawn_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.spawn_points.iter().map(|&[x, y]| Vec2::new(x, y))
    }
}

/// One entry of a shooter's weapon table, by weapon name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponChanceConfig {
    pub weapon: String,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyProfile {
    pub health: i32,
    /// Melee speed (world units per second).
    pub move_speed: f32,
    /// Melee heading: chase the player instead of moving straight down.
    pub chase_player: bool,
    pub horizontal_speed: f32,
    pub pause_before_shooting: f32,
    pub pause_after_shooting: f32,
    pub randomize_direction: bool,
    /// Per-tick probability of reversing patrol direction.
    pub direction_change_chance: f32,
    pub weapons: Vec<WeaponChanceConfig>,
}

impl Default for EnemyProfile {
    fn default() -> Self {
        Self {
            health: 3,
            move_speed: 2.0,
            chase_player: false,
            horizontal_speed: 1.5,
            pause_before_shooting: 0.5,
            pause_after_shooting: 0.3,
            randomize_direction: true,
            direction_change_chance: 0.01,
            weapons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassConfig {
    pub spawn: SpawnClassConfig,
    pub profile: EnemyProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub max_health: i32,
    pub invulnerability_secs: f32,
    pub position: [f32; 2],
    pub start_weapon: Option<String>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            max_health: 5,
            invulnerability_secs: 1.0,
            position: [0.0, -4.0],
            start_weapon: Some("pebble".into()),
        }
    }
}

/// Points per enemy class, also inserted as a resource by the scoring plugin.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreValues {
    pub shooter: u32,
    pub melee: u32,
}

impl Default for ScoreValues {
    fn default() -> Self {
        Self { shooter: 200, melee: 100 }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub spawning_enabled: bool,
    /// Damage a touching enemy deals to the player.
    pub contact_damage: i32,
    pub weapons: Vec<WeaponSpec>,
    pub shooter: ClassConfig,
    pub melee: ClassConfig,
    pub player: PlayerProfile,
    pub scoring: ScoreValues,
}

impl Default for CombatConfig {
    fn default() -> Self {
        let weapons = vec![
            WeaponSpec {
                name: "pebble".into(),
                damage: 1,
                speed: 6.0,
                fire_rate: 1.5,
                scale: 1.0,
                ..WeaponSpec::default()
            },
            WeaponSpec {
                name: "boomerang".into(),
                damage: 1,
                speed: 4.5,
                fire_rate: 2.5,
                scale: 1.2,
                ricochet: true,
                spin: true,
                spin_speed: 2.0,
                ..WeaponSpec::default()
            },
            WeaponSpec {
                name: "dart".into(),
                damage: 2,
                speed: 9.0,
                fire_rate: 2.0,
                scale: 0.8,
                stick_to_walls: true,
                ..WeaponSpec::default()
            },
        ];

        let shooter = ClassConfig {
            spawn: SpawnClassConfig { max_alive: 3, interval_secs: 3.0, ..default() },
            profile: EnemyProfile {
                weapons: vec![
                    WeaponChanceConfig { weapon: "pebble".into(), weight: 60.0 },
                    WeaponChanceConfig { weapon: "boomerang".into(), weight: 25.0 },
                    WeaponChanceConfig { weapon: "dart".into(), weight: 15.0 },
                ],
                ..default()
            },
        };

        let melee = ClassConfig {
            spawn: SpawnClassConfig {
                max_alive: 5,
                interval_secs: 2.0,
                spawn_chance: 0.8,
                ..default()
            },
            profile: EnemyProfile { health: 2, ..default() },
        };

        Self {
            seed: None,
            spawning_enabled: true,
            contact_damage: 1,
            weapons,
            shooter,
            melee,
            player: PlayerProfile::default(),
            scoring: ScoreValues::default(),
        }
    }
}

impl CombatConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check weapon references and value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let known = |name: &str| self.weapons.iter().any(|w| w.name == name);

        for (owner, class) in [("shooter", &self.shooter), ("melee", &self.melee)] {
            if let Some(missing) = class.profile.weapons.iter().find(|c| !known(&c.weapon)) {
                return Err(ConfigError::UnknownWeapon {
                    owner: owner.into(),
                    weapon: missing.weapon.clone(),
                });
            }
            let spawn = &class.spawn;
            if !(0.0..=1.0).contains(&spawn.spawn_chance) {
                return Err(ConfigError::Invalid(format!(
                    "{owner}.spawn.spawn_chance must be within [0, 1], got {}",
                    spawn.spawn_chance
                )));
            }
            if spawn.interval_secs < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{owner}.spawn.interval_secs must not be negative"
                )));
            }
            if class.profile.health <= 0 {
                return Err(ConfigError::Invalid(format!("{owner}.profile.health must be positive")));
            }
        }

        if let Some(start) = &self.player.start_weapon {
            if !known(start) {
                return Err(ConfigError::UnknownWeapon {
                    owner: "player".into(),
                    weapon: start.clone(),
                });
            }
        }
        if self.player.max_health <= 0 {
            return Err(ConfigError::Invalid("player.max_health must be positive".into()));
        }

        Ok(())
    }
}
