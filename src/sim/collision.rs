//! Collision resolver.
//!
//! Detection and resolution are split: the `*_overlaps` / `enemy_contacts` functions only
//! enumerate overlapping pairs (read-only), and each pair is then handed to a named
//! transition (`on_*`). Handlers re-check liveness, so a body consumed by an earlier pair
//! in the same tick is skipped.
//!
//! Enemy-vs-brick and enemy-vs-arena bounces are not resolved here; the physics layer
//! owns those.

use super::fx::FxRequest;
use super::lifecycle::SpawnMode;
use super::pool::EnemyId;
use super::world::GameWorld;

/// Something an enemy is touching this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Shell,
    Turret,
}

/// Indices of live bricks overlapping the shell, in grid (row-major) order.
pub fn shell_brick_overlaps(world: &GameWorld) -> Vec<usize> {
    world
        .bricks
        .iter()
        .enumerate()
        .filter(|(_, brick)| brick.body.overlaps(&world.shell))
        .map(|(i, _)| i)
        .collect()
}

/// What enemy `id` touches, shell first, then turret.
pub fn enemy_contacts(world: &GameWorld, id: EnemyId) -> Vec<Contact> {
    let Some(slot) = world.enemies.get(id) else {
        return Vec::new();
    };

    let mut contacts = Vec::with_capacity(2);
    if slot.body.overlaps(&world.shell) {
        contacts.push(Contact::Shell);
    }
    if slot.body.overlaps(&world.turret) {
        contacts.push(Contact::Turret);
    }
    contacts
}

/// Shell vs wall: the first overlapping brick (grid order) takes the shot.
///
/// Returns the index of the brick that broke, if any.
pub fn resolve_shell_vs_bricks(world: &mut GameWorld) -> Option<usize> {
    let first = shell_brick_overlaps(world).into_iter().next()?;
    on_shell_hits_brick(world, first);
    Some(first)
}

/// Run every contact of enemy `id` through its transition.
pub fn resolve_enemy_contacts(world: &mut GameWorld, id: EnemyId) {
    for contact in enemy_contacts(world, id) {
        match contact {
            Contact::Shell => on_enemy_hits_shell(world, id),
            Contact::Turret => on_enemy_hits_turret(world, id),
        }
    }
}

/// The shell left the arena.
pub fn expire_shell_out_of_bounds(world: &mut GameWorld) -> bool {
    let half = world.half_arena();
    if !world.shell.is_alive() || !world.shell.is_outside(half) {
        return false;
    }
    retire_shell(world);
    true
}

fn on_shell_hits_brick(world: &mut GameWorld, index: usize) {
    let Some(brick) = world.bricks.get_mut(index) else {
        return;
    };
    if !brick.body.kill() {
        return;
    }
    let centre = brick.body.position;
    let shatter_at = brick.body.top_centre();

    retire_shell(world);
    world.fx.push(FxRequest::brick_shatter(shatter_at));

    if world.roll_brick_spawn() {
        world.spawn_enemy(centre, SpawnMode::FixedArc);
    }
}

fn on_enemy_hits_shell(world: &mut GameWorld, id: EnemyId) {
    if !enemy_alive(world, id) || !world.shell.is_alive() {
        return;
    }
    retire_shell(world);
    world.kill_enemy(id);
}

fn on_enemy_hits_turret(world: &mut GameWorld, id: EnemyId) {
    if !enemy_alive(world, id) || !world.turret.is_alive() {
        return;
    }
    if world.tunables.turret_hit_clears_shell {
        retire_shell(world);
    }
    world.kill_enemy(id);
    world.hit_turret();
    world.fx.push(FxRequest::screen_flash());
}

/// Shell out of play, trail off.
pub(crate) fn retire_shell(world: &mut GameWorld) {
    world.shell.kill();
    world.shell_trail.emitting = false;
}

#[inline]
fn enemy_alive(world: &GameWorld, id: EnemyId) -> bool {
    world.enemies.get(id).is_some_and(|s| s.body.is_alive())
}
