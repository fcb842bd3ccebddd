//! Shell plugin: the single pooled projectile.
//!
//! The shell entity is spawned once per round and never despawned. Between shots it is
//! parked in the inactive state:
//! - `Visibility::Hidden`
//! - `LinearVelocity::ZERO`
//! - membership `Shell`, empty filters (no contacts at all)
//!
//! Only the round decides when it is live; this plugin just mirrors it.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::round::{self, Round, RoundSystems, mirror_body};

/// Marker for the shell entity. At most one per round.
#[derive(Component)]
pub struct ShellBody;

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::InGame),
        spawn.after(round::start_round),
    )
    .add_systems(FixedUpdate, pull_shell.in_set(RoundSystems::Pull))
    .add_systems(FixedUpdate, push_shell.in_set(RoundSystems::Push));
}

// -----------------------------------------------------------------------------
// Collision filters
// -----------------------------------------------------------------------------

/// In flight: reported against bricks and enemies. Walls are left to the round's
/// out-of-bounds check.
#[inline]
pub fn active_shell_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Shell, [Layer::Brick, Layer::Enemy])
}

#[inline]
pub fn inactive_shell_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Shell, [] as [Layer; 0])
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

fn spawn(mut commands: Commands, round: Res<Round>) {
    let body = round.shell();
    let size = body.size();

    commands.spawn((
        Name::new("Shell"),
        ShellBody,
        Sprite {
            color: Color::srgb(1.0, 0.85, 0.35),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(body.position.extend(2.0)),
        Visibility::Hidden,
        RigidBody::Kinematic,
        Collider::rectangle(size.x, size.y),
        inactive_shell_layers(),
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

/// Only a live shell reports its position; a parked one keeps the round's.
fn pull_shell(mut round: ResMut<Round>, q: Query<&Transform, With<ShellBody>>) {
    let Ok(tf) = q.single() else {
        return;
    };

    let shell = round.shell_mut();
    if shell.is_alive() {
        shell.position = tf.translation.truncate();
    }
}

fn push_shell(
    round: Res<Round>,
    mut q: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<ShellBody>,
    >,
) {
    let Ok((mut tf, mut vel, mut vis, mut layers)) = q.single_mut() else {
        return;
    };
    mirror_body(round.shell(), &mut tf, &mut vel, &mut vis);
    *layers = if round.shell().is_alive() {
        active_shell_layers()
    } else {
        inactive_shell_layers()
    };
}

#[cfg(test)]
mod tests;
