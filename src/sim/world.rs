//! `GameWorld`: the single owner of all simulation state.

use bevy::log::info;
use bevy::math::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::common::tunables::Tunables;

use super::body::Body;
use super::fx::{FxRequest, TrailEmitter};
use super::lifecycle::{Lives, SpawnMode};
use super::pool::Pool;

/// One cell of the brick wall. Never reused once dead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
    pub body: Body,
}

#[derive(Debug, Clone)]
pub struct GameWorld {
    pub(crate) tunables: Tunables,
    pub(crate) turret: Body,
    pub(crate) shell: Body,
    pub(crate) shell_trail: TrailEmitter,
    pub(crate) bricks: Vec<Brick>,
    pub(crate) enemies: Pool<TrailEmitter>,
    pub(crate) lives: Lives,
    pub(crate) defeated: bool,
    pub(crate) fx: Vec<FxRequest>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) tick: u64,
}

impl GameWorld {
    /// Lay out the wall, park the turret at the bottom centre and holster the shell.
    ///
    /// No enemy exists yet; see [`GameWorld::spawn_opening_wave`].
    pub fn new(tunables: Tunables) -> Self {
        let half = tunables.half_arena();
        let brick_size = tunables.brick_size();

        let bricks = (0..tunables.brick_rows)
            .flat_map(|row| (0..tunables.brick_cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let centre = Vec2::new(
                    -half.x + (col as f32 + 0.5) * brick_size.x,
                    half.y - (row as f32 + 0.5) * brick_size.y,
                );
                Brick { row, col, body: Body::new(centre, brick_size) }
            })
            .collect();

        let turret_size = Vec2::new(tunables.turret_width, tunables.turret_height);
        let turret = Body::new(Vec2::new(0.0, -half.y + turret_size.y * 0.5), turret_size);

        let shell_size = Vec2::new(tunables.shell_width, tunables.shell_height);
        let shell = Body::dead(turret.top_centre(), shell_size);

        let enemies = Pool::new(Vec2::splat(tunables.enemy_size), tunables.enemy_pool_cap);

        Self {
            lives: Lives::new(tunables.initial_lives),
            rng: ChaCha8Rng::seed_from_u64(tunables.seed),
            turret,
            shell,
            shell_trail: TrailEmitter::default(),
            bricks,
            enemies,
            defeated: false,
            fx: Vec::new(),
            tick: 0,
            tunables,
        }
    }

    /// The round's fixed opening: a single chaser below the wall.
    pub fn spawn_opening_wave(&mut self) {
        let [x, y] = self.tunables.first_enemy_spawn;
        let spawned = self.spawn_enemy(Vec2::new(x, y), SpawnMode::Chase);
        info!(
            "Round started: {} bricks, {} lives, opening enemy {:?}",
            self.bricks.len(),
            self.lives.remaining(),
            spawned
        );
    }

    #[inline]
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    #[inline]
    pub fn turret(&self) -> &Body {
        &self.turret
    }

    #[inline]
    pub fn turret_mut(&mut self) -> &mut Body {
        &mut self.turret
    }

    #[inline]
    pub fn shell(&self) -> &Body {
        &self.shell
    }

    #[inline]
    pub fn shell_mut(&mut self) -> &mut Body {
        &mut self.shell
    }

    #[inline]
    pub fn shell_trail(&self) -> &TrailEmitter {
        &self.shell_trail
    }

    #[inline]
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    #[inline]
    pub fn bricks_mut(&mut self) -> &mut [Brick] {
        &mut self.bricks
    }

    pub fn bricks_alive(&self) -> usize {
        self.bricks.iter().filter(|b| b.body.is_alive()).count()
    }

    #[inline]
    pub fn enemies(&self) -> &Pool<TrailEmitter> {
        &self.enemies
    }

    #[inline]
    pub fn enemies_mut(&mut self) -> &mut Pool<TrailEmitter> {
        &mut self.enemies
    }

    #[inline]
    pub fn lives_remaining(&self) -> u32 {
        self.lives.remaining()
    }

    #[inline]
    pub fn initial_lives(&self) -> u32 {
        self.lives.initial()
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Effect requests queued since the last drain, in the order they were raised.
    pub fn drain_fx(&mut self) -> Vec<FxRequest> {
        std::mem::take(&mut self.fx)
    }

    pub fn pending_fx(&self) -> &[FxRequest] {
        &self.fx
    }

    #[inline]
    pub(crate) fn half_arena(&self) -> Vec2 {
        self.tunables.half_arena()
    }
}
