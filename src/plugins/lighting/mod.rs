//! Lighting plugin (Firefly) (render-only).
//!
//! A warm light rides on the turret; enemies carry occluders, so they cast shadows up
//! the arena as they close in.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::turret::TurretBody;

/// Point light that tracks the turret and goes dark with it.
#[derive(Component)]
pub struct TurretLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, follow_turret.run_if(in_state(GameState::InGame)));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("TurretLight"),
        TurretLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            radius: 900.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_turret(
    q_turret: Query<(&Transform, &Visibility), (With<TurretBody>, Without<TurretLight>)>,
    mut q_light: Query<(&mut Transform, &mut Visibility), (With<TurretLight>, Without<TurretBody>)>,
) {
    let Ok((tf_turret, vis_turret)) = q_turret.single() else {
        return;
    };
    let Ok((mut tf_light, mut vis_light)) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_turret.translation.x;
    tf_light.translation.y = tf_turret.translation.y;
    // The light goes out with the turret.
    *vis_light = *vis_turret;
}
