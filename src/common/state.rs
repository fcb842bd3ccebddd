//! App-level state.
//!
//! A round lives entirely inside `InGame`: the round resource is rebuilt on enter and every
//! entity mirroring it carries `DespawnOnExit(InGame)`.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
