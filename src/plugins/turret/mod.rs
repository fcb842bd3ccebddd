//! Turret plugin.
//!
//! Pipeline:
//! - PreUpdate (after input): sample keys into `PlayerInput`
//! - FixedUpdate / Pull: clamp the kinematic body to the arena, copy its position into the round
//! - FixedUpdate / Push: write the round's turret back (velocity, visibility, layers)

use avian2d::prelude::*;
use bevy::input::InputSystems;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::round::{self, PlayerInput, Round, RoundSystems, mirror_body};
use crate::sim::PlayerIntent;

// -----------------------------------------------------------------------------
// Components
// -----------------------------------------------------------------------------

/// Marker for the one turret entity of a round.
///
/// The round owns the turret's truth; this entity is its kinematic stand-in. It is never
/// despawned mid-round, a defeated turret is hidden and drops its collision filters.
#[derive(Component)]
pub struct TurretBody;

// -----------------------------------------------------------------------------
// Plugin
// -----------------------------------------------------------------------------

/// Input is sampled in `PreUpdate`, ahead of `RunFixedMainLoop`, so every round step of
/// a frame sees that frame's keys.
pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::InGame),
        spawn.after(round::start_round),
    )
    .add_systems(PreUpdate, gather_input.after(InputSystems))
    .add_systems(FixedUpdate, pull_turret.in_set(RoundSystems::Pull))
    .add_systems(FixedUpdate, push_turret.in_set(RoundSystems::Push));
}

// -----------------------------------------------------------------------------
// Collision filters
// -----------------------------------------------------------------------------

/// Live turret: stopped by walls, touched by enemies.
#[inline]
fn active_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Turret, [Layer::World, Layer::Enemy])
}

/// Defeated turret: collides with nothing.
#[inline]
fn inactive_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Turret, [] as [Layer; 0])
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

fn spawn(mut commands: Commands, round: Res<Round>) {
    let body = round.turret();
    let size = body.size();

    commands.spawn((
        Name::new("Turret"),
        TurretBody,
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(body.position.extend(1.0)),
        RigidBody::Kinematic,
        Collider::rectangle(size.x, size.y),
        active_layers(),
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

/// Keys to intent. No keyboard (headless) means no intent.
fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        input.intent = PlayerIntent::default();
        return;
    };

    input.intent = PlayerIntent {
        move_left: keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]),
        move_right: keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]),
        fire: keys.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW, KeyCode::Space]),
    };
}

/// Largest |x| the turret centre may reach.
#[inline]
fn turret_x_limit(tunables: &Tunables) -> f32 {
    (tunables.half_arena().x - tunables.turret_width * 0.5).max(0.0)
}

/// Physics -> round. The kinematic body may have been pushed past a wall between steps,
/// so it is clamped before its x is trusted. A dead turret keeps its last round position.
fn pull_turret(
    tunables: Res<Tunables>,
    mut round: ResMut<Round>,
    mut q: Query<&mut Transform, With<TurretBody>>,
) {
    let Ok(mut tf) = q.single_mut() else {
        return;
    };

    let limit = turret_x_limit(&tunables);
    tf.translation.x = tf.translation.x.clamp(-limit, limit);

    let turret = round.turret_mut();
    if turret.is_alive() {
        turret.position = tf.translation.truncate();
    }
}

/// Round -> physics: steering velocity, visibility and collision filters.
fn push_turret(
    round: Res<Round>,
    mut q: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<TurretBody>,
    >,
) {
    let Ok((mut tf, mut vel, mut vis, mut layers)) = q.single_mut() else {
        return;
    };

    mirror_body(round.turret(), &mut tf, &mut vel, &mut vis);
    *layers = if round.turret().is_alive() {
        active_layers()
    } else {
        inactive_layers()
    };
}
