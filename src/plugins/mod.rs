//! Feature plugins.
//!
//! Order matters: `core` inserts `Tunables`, which `physics` and `round` read while building.

use bevy::prelude::*;

pub mod core;
pub mod enemies;
pub mod fx;
pub mod hud;
pub mod physics;
pub mod round;
pub mod shell;
pub mod turret;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    round::plugin(app);
    world::plugin(app);
    turret::plugin(app);
    shell::plugin(app);
    enemies::plugin(app);
    fx::plugin(app);
    hud::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}
