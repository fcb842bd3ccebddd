//! Enemies plugin: one avian body per pool slot.
//!
//! The round's `Pool` is the truth; this plugin keeps a parallel `Vec<Entity>` indexed by
//! slot. A slot gets its entity the first Push after it is allocated and keeps it for the
//! rest of the round. Dead slots are parked, never despawned:
//!
//! ```text
//!  slot alive  -> Visibility::Inherited, velocity from core, Enemy vs World/Brick
//!  slot dead   -> Visibility::Hidden,    velocity ZERO,      Enemy vs nothing
//! ```
//!
//! Avian owns the bounce. Pull copies the post-step position and velocity back into the
//! slot, so a chaser that hit a wall keeps its reflected heading.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::round::{self, Round, RoundSystems, mirror_body};
use crate::sim::{Body, EnemyId};

// -----------------------------------------------------------------------------
// Components / resources
// -----------------------------------------------------------------------------

/// Pool slot this entity stands in for. Fixed for the entity's lifetime.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyBody(pub EnemyId);

/// Entity for each pool slot, by slot index.
///
/// Its length is the number of slots that already have an entity, so anything past it
/// in the pool still needs one. Cleared on round start; the entities themselves go with
/// `DespawnOnExit`.
#[derive(Resource, Debug, Default)]
pub struct EnemyBodies(pub Vec<Entity>);

// -----------------------------------------------------------------------------
// Plugin
// -----------------------------------------------------------------------------

pub fn plugin(app: &mut App) {
    app.init_resource::<EnemyBodies>()
        .add_systems(
            OnEnter(GameState::InGame),
            reset_enemy_bodies.after(round::start_round),
        )
        .add_systems(FixedUpdate, pull_enemies.in_set(RoundSystems::Pull))
        .add_systems(FixedUpdate, push_enemies.in_set(RoundSystems::Push));
}

// -----------------------------------------------------------------------------
// Collision filters
// -----------------------------------------------------------------------------

/// Live enemy: bounces off walls and bricks. Shell and turret contacts are resolved by
/// the round from positions, so avian never sees them.
#[inline]
pub fn active_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Brick])
}

#[inline]
pub fn inactive_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

#[inline]
fn layers_for(body: &Body) -> CollisionLayers {
    if body.is_alive() {
        active_enemy_layers()
    } else {
        inactive_enemy_layers()
    }
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

fn reset_enemy_bodies(mut bodies: ResMut<EnemyBodies>) {
    bodies.0.clear();
}

fn pull_enemies(
    mut round: ResMut<Round>,
    q: Query<(&EnemyBody, &Transform, &LinearVelocity)>,
) {
    let pool = round.enemies_mut();
    for (EnemyBody(id), tf, vel) in &q {
        let Some(slot) = pool.get_mut(*id) else {
            continue;
        };
        if slot.body.is_alive() {
            slot.body.position = tf.translation.truncate();
            slot.body.velocity = vel.0;
        }
    }
}

/// Mirror every slot that has an entity, then give new slots theirs.
fn push_enemies(
    mut commands: Commands,
    round: Res<Round>,
    mut bodies: ResMut<EnemyBodies>,
    mut q: Query<
        (
            &EnemyBody,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
    >,
) {
    for (EnemyBody(id), mut tf, mut vel, mut vis, mut layers) in &mut q {
        let Some(slot) = round.enemies().get(*id) else {
            continue;
        };
        mirror_body(&slot.body, &mut tf, &mut vel, &mut vis);
        *layers = layers_for(&slot.body);
    }

    // Slots allocated since the last Push.
    for (id, slot) in round.enemies().iter().skip(bodies.0.len()) {
        let e = spawn_enemy_body(&mut commands, id, &slot.body);
        bodies.0.push(e);
    }
}

fn spawn_enemy_body(commands: &mut Commands, id: EnemyId, body: &Body) -> Entity {
    let size = body.size();
    let radius = size.x.min(size.y) * 0.5;
    let visibility = if body.is_alive() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    commands
        .spawn((
            Name::new(format!("Enemy{}", id.0)),
            EnemyBody(id),
            Sprite {
                color: Color::srgb(0.9, 0.25, 0.25),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(body.position.extend(1.0)),
            visibility,
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            Restitution::new(1.0).with_combine_rule(CoefficientCombine::Max),
            Friction::ZERO,
            LinearVelocity(body.velocity),
            layers_for(body),
            Occluder2d::circle(radius),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

#[cfg(test)]
mod tests;
