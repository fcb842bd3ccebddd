//! World plugin: arena walls, backdrop and the brick wall.
//!
//! Walls are static bodies just outside the arena so enemies bounce at its edges.
//! Bricks mirror `Round` bricks one-to-one; a brick the round has killed is despawned in
//! Push, because unlike enemies it is never reused.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::round::{self, Round, RoundSystems};

const WALL_THICKNESS: f32 = 30.0;
const BACKDROP_TILE: f32 = 50.0;

/// Index into `GameWorld::bricks`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickBody(pub usize);

// -----------------------------------------------------------------------------
// Plugin
// -----------------------------------------------------------------------------

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::InGame),
        (spawn_arena, spawn_backdrop, spawn_bricks.after(round::start_round)),
    )
    .add_systems(FixedUpdate, despawn_dead_bricks.in_set(RoundSystems::Push));
}

// -----------------------------------------------------------------------------
// Arena
// -----------------------------------------------------------------------------

/// Four static walls hugging the arena from outside. They stop the turret and bounce
/// enemies; the shell passes through and is expired by the round instead.
fn spawn_arena(mut commands: Commands, tunables: Res<Tunables>) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let half = tunables.half_arena();
    let t = WALL_THICKNESS;

    let wall_layers = CollisionLayers::new(
        Layer::World,
        [Layer::Turret, Layer::Enemy],
    );

    let mut spawn_wall = |name: &str, pos: Vec2, size: Vec2| {
        commands.spawn((
            Name::new(name.to_owned()),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    };

    let horizontal = Vec2::new(half.x * 2.0 + t * 2.0, t);
    let vertical = Vec2::new(t, half.y * 2.0);
    spawn_wall("WallTop", Vec2::new(0.0, half.y + t * 0.5), horizontal);
    spawn_wall("WallBottom", Vec2::new(0.0, -half.y - t * 0.5), horizontal);
    spawn_wall("WallLeft", Vec2::new(-half.x - t * 0.5, 0.0), vertical);
    spawn_wall("WallRight", Vec2::new(half.x + t * 0.5, 0.0), vertical);
}

/// Checkerboard behind the play field, built from plain sprites.
fn spawn_backdrop(mut commands: Commands, tunables: Res<Tunables>) {
    let half = tunables.half_arena();
    let cols = (half.x * 2.0 / BACKDROP_TILE).ceil() as i32;
    let rows = (half.y * 2.0 / BACKDROP_TILE).ceil() as i32;

    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let pos = Vec3::new(
                -half.x + (x as f32 + 0.5) * BACKDROP_TILE,
                -half.y + (y as f32 + 0.5) * BACKDROP_TILE,
                -1.0,
            );
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.14, 0.14, 0.16)
            } else {
                Color::srgb(0.12, 0.12, 0.14)
            };

            commands.spawn((
                Sprite::from_color(color, Vec2::splat(BACKDROP_TILE)),
                Transform::from_translation(pos),
                DespawnOnExit(GameState::InGame),
            ));
        });
}

// -----------------------------------------------------------------------------
// Bricks
// -----------------------------------------------------------------------------

/// Row colour, warm at the top fading to cool at the bottom.
fn brick_color(row: usize, rows: usize) -> Color {
    let t = if rows > 1 {
        row as f32 / (rows - 1) as f32
    } else {
        0.0
    };
    Color::srgb(0.95 - 0.6 * t, 0.45 + 0.2 * t, 0.25 + 0.6 * t)
}

fn spawn_bricks(mut commands: Commands, round: Res<Round>) {
    let layers = CollisionLayers::new(Layer::Brick, [Layer::Enemy, Layer::Shell]);
    let rows = round.tunables().brick_rows;

    for (i, brick) in round.bricks().iter().enumerate() {
        if !brick.body.is_alive() {
            continue;
        }
        let size = brick.body.size();
        commands.spawn((
            Name::new(format!("Brick{}x{}", brick.row, brick.col)),
            BrickBody(i),
            Sprite {
                color: brick_color(brick.row, rows),
                // 1px gap so the grid reads as separate bricks.
                custom_size: Some(size - Vec2::ONE),
                ..default()
            },
            Transform::from_translation(brick.body.position.extend(0.5)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Bricks never come back within a round, so a dead one loses its entity.
fn despawn_dead_bricks(
    mut commands: Commands,
    round: Res<Round>,
    q: Query<(Entity, &BrickBody)>,
) {
    for (e, BrickBody(i)) in &q {
        let dead = round.bricks().get(*i).is_none_or(|b| !b.body.is_alive());
        if dead {
            commands.entity(e).despawn();
        }
    }
}
