//! Lifecycle transitions: enemy spawn/kill, turret hit/defeat, lives.
//!
//! Enemy: `Alive` (active) -> killed -> `Dead` (pooled) -> reacquired -> `Alive` ...
//! Turret: `Alive` -> `Hit { remaining }` ... -> `Defeated` (terminal).

use bevy::log::{debug, info};
use bevy::math::Vec2;
use rand::Rng;

use super::fx::{FxRequest, TrailEmitter};
use super::pool::EnemyId;
use super::targeting::{aim_velocity, random_arc_velocity};
use super::world::GameWorld;

/// How a freshly spawned enemy picks its velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnMode {
    /// Head straight for the turret's current centre.
    Chase,
    /// Launch off the wall with a randomized horizontal speed and constant total speed.
    FixedArc,
}

/// Outcome of a turret hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurretState {
    Alive,
    Hit { remaining: u32 },
    Defeated,
}

/// Lives counter. Only ever goes down during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lives {
    remaining: u32,
    initial: u32,
}

impl Lives {
    pub fn new(initial: u32) -> Self {
        Self { remaining: initial, initial }
    }

    #[inline]
    pub fn remaining(self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn initial(self) -> u32 {
        self.initial
    }

    #[inline]
    pub fn is_exhausted(self) -> bool {
        self.remaining == 0
    }

    /// Take one life; saturates at zero. Returns what is left.
    #[inline]
    pub fn lose_one(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }
}

impl GameWorld {
    /// Bring an enemy into play at `at`.
    ///
    /// `None` when the pool is capped and full; that only costs this spawn.
    pub fn spawn_enemy(&mut self, at: Vec2, mode: SpawnMode) -> Option<EnemyId> {
        let id = match self.enemies.acquire(at, TrailEmitter::default) {
            Ok(id) => id,
            Err(e) => {
                debug!("No enemy spawned at {at}: {e}");
                return None;
            }
        };

        let speed = self.tunables.enemy_attack_speed;
        let velocity = match mode {
            SpawnMode::Chase => aim_velocity(at, self.turret.position, speed),
            SpawnMode::FixedArc => random_arc_velocity(&mut self.rng, speed),
        };

        if let Some(slot) = self.enemies.get_mut(id) {
            slot.body.velocity = velocity;
        }
        debug!("Spawned enemy {id:?} at {at} ({mode:?}, v={velocity})");
        Some(id)
    }

    /// Kill an enemy: back to the pool, emitter off, explosion at its last position.
    ///
    /// Killing a dead (or unknown) enemy does nothing and returns `false`.
    pub fn kill_enemy(&mut self, id: EnemyId) -> bool {
        let Some(at) = self.enemies.get(id).map(|s| s.body.position) else {
            return false;
        };
        if !self.enemies.release(id) {
            return false;
        }
        self.fx.push(FxRequest::enemy_explosion(at));
        true
    }

    /// Take one life from the turret; the last one defeats it.
    pub fn hit_turret(&mut self) -> TurretState {
        if self.defeated {
            return TurretState::Defeated;
        }

        let remaining = self.lives.lose_one();
        if !self.lives.is_exhausted() {
            debug!("Turret hit, {remaining} lives left");
            return TurretState::Hit { remaining };
        }

        self.defeated = true;
        self.turret.kill();
        self.fx.push(FxRequest::turret_explosion(self.turret.position));
        info!("Turret defeated after {} ticks", self.tick);
        TurretState::Defeated
    }

    /// Current turret state without changing anything.
    pub fn turret_state(&self) -> TurretState {
        if self.defeated {
            TurretState::Defeated
        } else if self.lives.remaining() < self.lives.initial() {
            TurretState::Hit { remaining: self.lives.remaining() }
        } else {
            TurretState::Alive
        }
    }

    /// Roll the brick spawn chance on the world's RNG. A NaN chance never spawns.
    pub(crate) fn roll_brick_spawn(&mut self) -> bool {
        let chance = self.tunables.brick_spawn_chance;
        if chance.is_nan() {
            return false;
        }
        self.rng.gen_bool(chance.clamp(0.0, 1.0))
    }
}
