//! Test helpers.
//!
//! `World::run_system_once` runs a system without building a schedule. Systems that use
//! `Commands` only queue their structural changes, so we flush before returning.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::round::{PlayerInput, Round};
use crate::sim::GameWorld;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A bare world holding a fresh round (no opening enemy), its tunables and a neutral intent.
pub fn world_with_round(tunables: Tunables) -> World {
    let mut world = World::new();
    world.insert_resource(Round(GameWorld::new(tunables.clone())));
    world.insert_resource(tunables);
    world.insert_resource(PlayerInput::default());
    world
}
