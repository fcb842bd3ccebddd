//! Core plugin: shared resources and global settings.

use crate::common::tunables::{TUNABLES_FILE, Tunables};
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    // Tests and tools may insert their own tunables before the plugin runs.
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::load_or_default(TUNABLES_FILE));
    }
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}

#[cfg(test)]
mod tests;
