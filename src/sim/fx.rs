//! Effect-trigger requests and trail emitter handles.
//!
//! The core never draws anything. It queues `FxRequest`s for the visual layer and keeps
//! `TrailEmitter` state (on/off + where to emit) that the visual layer reads every frame.

use bevy::prelude::*;

use super::pool::Emitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FxKind {
    BrickShatter,
    MuzzleFlash,
    EnemyExplosion,
    TurretExplosion,
    ScreenFlash,
}

/// One particle burst (or screen effect) at a position.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct FxRequest {
    pub kind: FxKind,
    pub at: Vec2,
    pub count: u32,
    pub lifetime_secs: f32,
}

impl FxRequest {
    pub fn brick_shatter(at: Vec2) -> Self {
        Self { kind: FxKind::BrickShatter, at, count: 10, lifetime_secs: 3.0 }
    }

    pub fn muzzle_flash(at: Vec2) -> Self {
        Self { kind: FxKind::MuzzleFlash, at, count: 5, lifetime_secs: 1.5 }
    }

    pub fn enemy_explosion(at: Vec2) -> Self {
        Self { kind: FxKind::EnemyExplosion, at, count: 12, lifetime_secs: 1.2 }
    }

    pub fn turret_explosion(at: Vec2) -> Self {
        Self { kind: FxKind::TurretExplosion, at, count: 40, lifetime_secs: 3.0 }
    }

    pub fn screen_flash() -> Self {
        Self { kind: FxKind::ScreenFlash, at: Vec2::ZERO, count: 1, lifetime_secs: 0.3 }
    }
}

/// Continuous emitter state: the visual layer emits at `origin` while `emitting`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrailEmitter {
    pub emitting: bool,
    pub origin: Vec2,
}

impl Emitter for TrailEmitter {
    fn set_emitting(&mut self, on: bool) {
        self.emitting = on;
    }

    fn track(&mut self, at: Vec2) {
        self.origin = at;
    }
}
