//! Collision layers.
//!
//! The solver only pushes enemies around (off walls and bricks). Shell and turret hits
//! are decided by the simulation core, so their pairs never produce a response.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Brick,
    Turret,
    Enemy,
    Shell,
}
