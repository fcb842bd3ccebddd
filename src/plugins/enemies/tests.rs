use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::{run_system_once, world_with_round};
use crate::common::tunables::Tunables;
use crate::plugins::round::Round;
use crate::sim::{EnemyId, SpawnMode};

use super::{EnemyBodies, EnemyBody, active_enemy_layers, inactive_enemy_layers};

fn world() -> World {
    let mut world = world_with_round(Tunables::default());
    world.init_resource::<EnemyBodies>();
    world
}

fn spawn_chaser(world: &mut World, at: Vec2) -> EnemyId {
    world
        .resource_mut::<Round>()
        .spawn_enemy(at, SpawnMode::Chase)
        .unwrap()
}

fn entity_for(world: &World, id: EnemyId) -> Entity {
    world.resource::<EnemyBodies>().0[id.0]
}

#[test]
fn push_spawns_one_entity_per_new_slot() {
    let mut world = world();
    spawn_chaser(&mut world, Vec2::new(-100.0, 0.0));
    spawn_chaser(&mut world, Vec2::new(100.0, 0.0));

    run_system_once(&mut world, super::push_enemies);
    run_system_once(&mut world, super::push_enemies);

    assert_eq!(world.resource::<EnemyBodies>().0.len(), 2);
    let count = world.query::<&EnemyBody>().iter(&world).count();
    assert_eq!(count, 2);
}

#[test]
fn new_entity_carries_core_velocity() {
    let mut world = world();
    let id = spawn_chaser(&mut world, Vec2::new(-100.0, 0.0));
    run_system_once(&mut world, super::push_enemies);

    let expected = world.resource::<Round>().enemies().get(id).unwrap().body.velocity;
    let e = entity_for(&world, id);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, expected);
    assert_eq!(*world.get::<CollisionLayers>(e).unwrap(), active_enemy_layers());
}

#[test]
fn killed_enemy_is_parked_not_despawned() {
    let mut world = world();
    let id = spawn_chaser(&mut world, Vec2::ZERO);
    run_system_once(&mut world, super::push_enemies);

    world.resource_mut::<Round>().kill_enemy(id);
    run_system_once(&mut world, super::push_enemies);

    let e = entity_for(&world, id);
    assert!(world.get_entity(e).is_ok());
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::ZERO);
    assert_eq!(*world.get::<CollisionLayers>(e).unwrap(), inactive_enemy_layers());
}

#[test]
fn reused_slot_keeps_its_entity() {
    let mut world = world();
    let first = spawn_chaser(&mut world, Vec2::ZERO);
    run_system_once(&mut world, super::push_enemies);
    let e = entity_for(&world, first);

    world.resource_mut::<Round>().kill_enemy(first);
    let again = spawn_chaser(&mut world, Vec2::new(40.0, 40.0));
    assert_eq!(again, first);
    run_system_once(&mut world, super::push_enemies);

    assert_eq!(world.resource::<EnemyBodies>().0.len(), 1);
    assert_eq!(entity_for(&world, again), e);
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Inherited);
    assert_eq!(world.get::<Transform>(e).unwrap().translation.truncate(), Vec2::new(40.0, 40.0));
}

#[test]
fn pull_copies_bounced_velocity() {
    let mut world = world();
    let id = spawn_chaser(&mut world, Vec2::ZERO);
    run_system_once(&mut world, super::push_enemies);

    let e = entity_for(&world, id);
    world.get_mut::<LinearVelocity>(e).unwrap().0 = Vec2::new(120.0, -45.0);
    world.get_mut::<Transform>(e).unwrap().translation = Vec3::new(8.0, 9.0, 1.0);

    run_system_once(&mut world, super::pull_enemies);

    let round = world.resource::<Round>();
    let body = &round.enemies().get(id).unwrap().body;
    assert_eq!(body.velocity, Vec2::new(120.0, -45.0));
    assert_eq!(body.position, Vec2::new(8.0, 9.0));
}

#[test]
fn pull_ignores_dead_slots() {
    let mut world = world();
    let id = spawn_chaser(&mut world, Vec2::ZERO);
    run_system_once(&mut world, super::push_enemies);
    world.resource_mut::<Round>().kill_enemy(id);

    let e = entity_for(&world, id);
    world.get_mut::<Transform>(e).unwrap().translation = Vec3::new(99.0, 99.0, 1.0);
    run_system_once(&mut world, super::pull_enemies);

    let round = world.resource::<Round>();
    assert_eq!(round.enemies().get(id).unwrap().body.position, Vec2::ZERO);
}
