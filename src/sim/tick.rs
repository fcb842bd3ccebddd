//! One discrete simulation step.
//!
//! Order within a tick is fixed:
//! 1. shell vs wall, then shell out of bounds
//! 2. every live enemy: track its emitter, enemy vs shell, enemy vs turret
//! 3. turret steering from horizontal intent
//! 4. firing
//!
//! So a shell that breaks a brick is already dead when enemies are checked, and a shot
//! fired this tick only meets enemies on the next one.

use bevy::math::Vec2;

use super::collision::{expire_shell_out_of_bounds, resolve_enemy_contacts, resolve_shell_vs_bricks};
use super::fx::FxRequest;
use super::pool::Emitter;
use super::world::GameWorld;

/// Player intent for one tick. Each flag is sampled once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

impl PlayerIntent {
    /// -1, 0 or +1. Left wins when both directions are held.
    #[inline]
    pub fn horizontal(self) -> f32 {
        if self.move_left {
            -1.0
        } else if self.move_right {
            1.0
        } else {
            0.0
        }
    }
}

/// Advance `world` by one tick.
pub fn tick(world: &mut GameWorld, intent: PlayerIntent) {
    world.tick += 1;

    resolve_shell_vs_bricks(world);
    expire_shell_out_of_bounds(world);
    if world.shell.is_alive() {
        world.shell_trail.track(world.shell.position);
    }

    for id in world.enemies.alive_ids() {
        if let Some(slot) = world.enemies.get_mut(id) {
            let at = slot.body.position;
            slot.emitter.track(at);
        }
        resolve_enemy_contacts(world, id);
    }

    steer_turret(world, intent);
    try_fire(world, intent);
}

/// A defeated turret stays put whatever the intent.
fn steer_turret(world: &mut GameWorld, intent: PlayerIntent) {
    if !world.turret.is_alive() {
        world.turret.velocity = Vec2::ZERO;
        return;
    }
    world.turret.velocity = Vec2::new(intent.horizontal() * world.tunables.turret_speed, 0.0);
}

/// Fire if the shell is free and the turret still stands. Returns whether a shot left.
fn try_fire(world: &mut GameWorld, intent: PlayerIntent) -> bool {
    if !intent.fire || world.shell.is_alive() || !world.turret.is_alive() {
        return false;
    }

    let muzzle = muzzle_point(world);
    world.shell.revive_at(muzzle);
    world.shell.velocity = Vec2::new(0.0, world.tunables.shell_speed);
    world.shell_trail.track(muzzle);
    world.shell_trail.set_emitting(true);
    world.fx.push(FxRequest::muzzle_flash(world.turret.top_centre()));
    true
}

/// Where a new shell appears: centred on the turret, poking slightly above its top edge.
pub fn muzzle_point(world: &GameWorld) -> Vec2 {
    let shell_height = world.shell.size().y;
    Vec2::new(
        world.turret.position.x,
        world.turret.top() + shell_height * (1.0 / 1.75 - 0.5),
    )
}
