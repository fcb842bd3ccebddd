//! FX plugin: turns the round's `FxRequest` messages and trail emitters into something
//! you can see.
//!
//! - `particles`: burst and trail sprites with a lifetime (bricks, muzzle, explosions).
//! - `screen`: the white full-arena flash when an enemy reaches the turret.
//!
//! Nothing here feeds back into the round, and nothing here touches game time.

pub mod particles;
pub mod screen;

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    particles::plugin(app);
    screen::plugin(app);
}
