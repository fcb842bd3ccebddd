use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::{run_system_once, world_with_round};
use crate::common::tunables::Tunables;
use crate::plugins::round::{PlayerInput, Round};
use crate::sim::{self, PlayerIntent};

use super::{ShellBody, active_shell_layers, inactive_shell_layers};

fn spawned() -> (World, Entity) {
    let mut world = world_with_round(Tunables::default());
    run_system_once(&mut world, super::spawn);
    let e = world
        .query_filtered::<Entity, With<ShellBody>>()
        .single(&world)
        .unwrap();
    (world, e)
}

fn fire(world: &mut World) {
    world.resource_mut::<PlayerInput>().intent = PlayerIntent {
        fire: true,
        ..default()
    };
    let intent = world.resource::<PlayerInput>().intent;
    sim::tick(&mut world.resource_mut::<Round>(), intent);
}

#[test]
fn shell_starts_parked() {
    let (world, e) = spawned();
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);
    assert_eq!(*world.get::<CollisionLayers>(e).unwrap(), inactive_shell_layers());
}

#[test]
fn fired_shell_is_mirrored_live() {
    let (mut world, e) = spawned();
    fire(&mut world);

    run_system_once(&mut world, super::push_shell);

    let speed = Tunables::default().shell_speed;
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::new(0.0, speed));
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Inherited);
    assert_eq!(*world.get::<CollisionLayers>(e).unwrap(), active_shell_layers());
}

#[test]
fn pull_follows_physics_only_while_live() {
    let (mut world, e) = spawned();
    let parked = world.resource::<Round>().shell().position;

    world.get_mut::<Transform>(e).unwrap().translation = Vec3::new(50.0, 50.0, 2.0);
    run_system_once(&mut world, super::pull_shell);
    assert_eq!(world.resource::<Round>().shell().position, parked);

    fire(&mut world);
    world.get_mut::<Transform>(e).unwrap().translation = Vec3::new(0.0, 120.0, 2.0);
    run_system_once(&mut world, super::pull_shell);
    assert_eq!(world.resource::<Round>().shell().position, Vec2::new(0.0, 120.0));
}
