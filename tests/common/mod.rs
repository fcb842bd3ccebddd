//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `brickfall::game::configure_headless` to install gameplay plugins.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

pub fn app_headless() -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so SceneSpawner and asset-backed components exist.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    brickfall::game::configure_headless(&mut app);
    app
}

/// Headless app whose clock advances exactly one fixed step per `update()`, so avian
/// actually moves bodies between round ticks.
pub fn app_headless_stepping() -> App {
    let mut app = app_headless();
    if !app.is_plugin_added::<TransformPlugin>() {
        app.add_plugins(TransformPlugin);
    }
    let step = app.world().resource::<Time<Fixed>>().timestep();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    // `App::run` would do this; avian registers some resources in `Plugin::finish`.
    app.finish();
    app.cleanup();
    app
}

/// Hold keys for every following frame. Nothing clears them without `InputPlugin`.
pub fn hold_keys(app: &mut App, held: &[KeyCode]) {
    let mut keys = ButtonInput::<KeyCode>::default();
    for key in held {
        keys.press(*key);
    }
    app.insert_resource(keys);
}

pub fn run_for(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
