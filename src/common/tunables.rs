//! Tunable gameplay constants.
//!
//! Loaded from `tunables.ron` when present. Every field has a default, so a partial
//! file only overrides what it names.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const TUNABLES_FILE: &str = "tunables.ron";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub pixels_per_meter: f32,

    pub arena_width: f32,
    pub arena_height: f32,

    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_height: f32,

    pub turret_width: f32,
    pub turret_height: f32,
    pub turret_speed: f32,

    pub shell_width: f32,
    pub shell_height: f32,
    pub shell_speed: f32,

    pub enemy_size: f32,
    pub enemy_attack_speed: f32,
    /// Probability that a broken brick releases an enemy.
    pub brick_spawn_chance: f64,
    /// `None` lets the enemy pool grow without bound.
    pub enemy_pool_cap: Option<usize>,
    pub first_enemy_spawn: [f32; 2],

    pub initial_lives: u32,
    /// An enemy reaching the turret also clears the shell in flight.
    pub turret_hit_clears_shell: bool,

    /// Seconds between two trail particles of one emitter.
    pub trail_interval_secs: f32,
    pub seed: u64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            arena_width: 600.0,
            arena_height: 800.0,
            brick_rows: 7,
            brick_cols: 10,
            brick_height: 30.0,
            turret_width: 75.0,
            turret_height: 40.0,
            turret_speed: 300.0,
            shell_width: 12.0,
            shell_height: 60.0,
            shell_speed: 1200.0,
            enemy_size: 28.0,
            enemy_attack_speed: 300.0,
            brick_spawn_chance: 0.5,
            enemy_pool_cap: None,
            first_enemy_spawn: [-260.0, 150.0],
            initial_lives: 3,
            turret_hit_clears_shell: true,
            trail_interval_secs: 0.02,
            seed: 0x5EED_B41C,
        }
    }
}

impl Tunables {
    /// Parse a RON document. Non-finite numbers are replaced, see [`Tunables::sanitized`].
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str::<Self>(text).map(Self::sanitized)
    }

    /// Swap every NaN or infinite number for its default.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            pixels_per_meter: finite_or(self.pixels_per_meter, d.pixels_per_meter),
            arena_width: finite_or(self.arena_width, d.arena_width),
            arena_height: finite_or(self.arena_height, d.arena_height),
            brick_height: finite_or(self.brick_height, d.brick_height),
            turret_width: finite_or(self.turret_width, d.turret_width),
            turret_height: finite_or(self.turret_height, d.turret_height),
            turret_speed: finite_or(self.turret_speed, d.turret_speed),
            shell_width: finite_or(self.shell_width, d.shell_width),
            shell_height: finite_or(self.shell_height, d.shell_height),
            shell_speed: finite_or(self.shell_speed, d.shell_speed),
            enemy_size: finite_or(self.enemy_size, d.enemy_size),
            enemy_attack_speed: finite_or(self.enemy_attack_speed, d.enemy_attack_speed),
            brick_spawn_chance: if self.brick_spawn_chance.is_finite() {
                self.brick_spawn_chance
            } else {
                warn!("Non-finite brick_spawn_chance, using {}", d.brick_spawn_chance);
                d.brick_spawn_chance
            },
            first_enemy_spawn: [
                finite_or(self.first_enemy_spawn[0], d.first_enemy_spawn[0]),
                finite_or(self.first_enemy_spawn[1], d.first_enemy_spawn[1]),
            ],
            trail_interval_secs: finite_or(self.trail_interval_secs, d.trail_interval_secs),
            ..self
        }
    }

    /// Load from `path`, or fall back to defaults if the file is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No tunables file at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(tunables) => {
                    info!("Loaded tunables from {}", path.display());
                    tunables
                }
                Err(e) => {
                    warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    #[inline]
    pub fn half_arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height) * 0.5
    }

    #[inline]
    pub fn brick_size(&self) -> Vec2 {
        Vec2::new(self.arena_width / self.brick_cols.max(1) as f32, self.brick_height)
    }
}

#[inline]
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!("Non-finite tunable {value}, using {fallback}");
        fallback
    }
}
