//! Particle sprites: one-shot bursts from `FxRequest`s and continuous trails from the
//! round's emitters (the shell and every live enemy).
//!
//! Particles are plain sprites with no collider. They age on virtual time, so pausing
//! the app pauses them too.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::round::Round;
use crate::sim::{FxKind, FxRequest};

const TRAIL_LIFETIME_SECS: f32 = 0.35;
const DRAG_PER_SEC: f32 = 1.5;

// -----------------------------------------------------------------------------
// Components / resources
// -----------------------------------------------------------------------------

/// A fading sprite with its own drift. Despawned once `age` reaches `lifetime`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub velocity: Vec2,
    pub age: f32,
    pub lifetime: f32,
}

impl Particle {
    pub fn new(velocity: Vec2, lifetime: f32) -> Self {
        Self { velocity, age: 0.0, lifetime: lifetime.max(0.01) }
    }

    /// 1 when fresh, 0 when expired.
    #[inline]
    pub fn remaining_fraction(&self) -> f32 {
        (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }
}

/// RNG for cosmetic spread only; the round has its own.
#[derive(Resource, Debug)]
pub struct FxRng(pub ChaCha8Rng);

/// Paces trail emission at `Tunables::trail_interval_secs`.
#[derive(Resource, Debug)]
pub struct TrailClock(pub Timer);

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BurstStyle {
    pub(crate) color: Color,
    pub(crate) size: f32,
    pub(crate) min_speed: f32,
    pub(crate) max_speed: f32,
}

/// How a burst looks. `None` for kinds that are not particle bursts.
pub(crate) fn burst_style(kind: FxKind) -> Option<BurstStyle> {
    let style = match kind {
        FxKind::BrickShatter => BurstStyle {
            color: Color::srgb(0.95, 0.6, 0.3),
            size: 6.0,
            min_speed: 40.0,
            max_speed: 160.0,
        },
        FxKind::MuzzleFlash => BurstStyle {
            color: Color::srgb(1.0, 0.9, 0.5),
            size: 4.0,
            min_speed: 20.0,
            max_speed: 90.0,
        },
        FxKind::EnemyExplosion => BurstStyle {
            color: Color::srgb(0.9, 0.25, 0.25),
            size: 5.0,
            min_speed: 60.0,
            max_speed: 220.0,
        },
        FxKind::TurretExplosion => BurstStyle {
            color: Color::srgb(0.3, 0.85, 1.0),
            size: 7.0,
            min_speed: 80.0,
            max_speed: 360.0,
        },
        FxKind::ScreenFlash => return None,
    };
    Some(style)
}

// -----------------------------------------------------------------------------
// Plugin
// -----------------------------------------------------------------------------

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>();
    let rng = FxRng(ChaCha8Rng::seed_from_u64(tunables.seed.rotate_left(32)));
    let clock = TrailClock(Timer::from_seconds(
        tunables.trail_interval_secs.max(0.001),
        TimerMode::Repeating,
    ));

    app.insert_resource(rng).insert_resource(clock);
    app.add_systems(
        Update,
        (spawn_bursts, emit_trails, advance_particles)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

fn spawn_particle(commands: &mut Commands, at: Vec2, particle: Particle, color: Color, size: f32) {
    commands.spawn((
        particle,
        Sprite {
            color,
            custom_size: Some(Vec2::splat(size)),
            ..default()
        },
        Transform::from_translation(at.extend(5.0)),
        DespawnOnExit(GameState::InGame),
    ));
}

pub(crate) fn spawn_bursts(
    mut commands: Commands,
    mut reader: MessageReader<FxRequest>,
    mut rng: ResMut<FxRng>,
) {
    for req in reader.read() {
        let Some(style) = burst_style(req.kind) else {
            continue;
        };
        for _ in 0..req.count {
            let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.0.gen_range(style.min_speed..=style.max_speed);
            let lifetime = req.lifetime_secs * rng.0.gen_range(0.6..=1.0);
            let particle = Particle::new(Vec2::from_angle(angle) * speed, lifetime);
            spawn_particle(&mut commands, req.at, particle, style.color, style.size);
        }
    }
}

/// One particle per lit emitter per clock pulse. Emitters are read off the round, never
/// written.
pub(crate) fn emit_trails(
    mut commands: Commands,
    time: Res<Time>,
    round: Res<Round>,
    mut clock: ResMut<TrailClock>,
    mut rng: ResMut<FxRng>,
) {
    clock.0.tick(time.delta());
    let pulses = clock.0.times_finished_this_tick();
    if pulses == 0 {
        return;
    }

    let shell = round.shell_trail();
    let origins: Vec<(Vec2, Color)> = shell
        .emitting
        .then_some((shell.origin, Color::srgb(1.0, 0.85, 0.35)))
        .into_iter()
        .chain(
            round
                .enemies()
                .iter()
                .filter(|(_, slot)| slot.emitter.emitting)
                .map(|(_, slot)| (slot.emitter.origin, Color::srgb(0.7, 0.2, 0.2))),
        )
        .collect();

    for _ in 0..pulses {
        for &(origin, color) in &origins {
            let jitter = Vec2::new(rng.0.gen_range(-8.0..=8.0), rng.0.gen_range(-8.0..=8.0));
            let particle = Particle::new(jitter, TRAIL_LIFETIME_SECS);
            spawn_particle(&mut commands, origin, particle, color, 3.0);
        }
    }
}

pub(crate) fn advance_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Particle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    let drag = (1.0 - DRAG_PER_SEC * dt).max(0.0);

    for (e, mut p, mut tf, mut sprite) in &mut q {
        p.age += dt;
        if p.is_expired() {
            commands.entity(e).despawn();
            continue;
        }

        tf.translation += (p.velocity * dt).extend(0.0);
        p.velocity *= drag;

        let mut c = sprite.color.to_srgba();
        c.alpha = p.remaining_fraction();
        sprite.color = c.into();
    }
}
