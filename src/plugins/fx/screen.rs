//! Full-arena white flash when an enemy reaches the turret.
//!
//! One `ScreenFlash` sprite per round sits above everything else. A `ScreenFlash` request
//! lights it at full strength and it fades out linearly over the request's lifetime.
//! Only the sprite's colour and visibility are touched here.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::round::{self, Round};
use crate::sim::{FxKind, FxRequest};

/// Strongest overlay alpha, right as the flash starts.
pub(crate) const FLASH_PEAK_ALPHA: f32 = 0.85;

/// Flash countdown. Idle while `remaining` is zero.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenFlash {
    pub remaining: f32,
    pub lifetime: f32,
}

impl ScreenFlash {
    /// Restart at full strength; a longer flash already running is kept.
    pub fn light(&mut self, lifetime: f32) {
        let lifetime = lifetime.max(0.0);
        if lifetime >= self.remaining {
            self.remaining = lifetime;
            self.lifetime = lifetime;
        }
    }

    #[inline]
    pub fn is_lit(&self) -> bool {
        self.remaining > 0.0
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        FLASH_PEAK_ALPHA * (self.remaining / self.lifetime).clamp(0.0, 1.0)
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::InGame),
        spawn_flash_overlay.after(round::start_round),
    )
    .add_systems(
        Update,
        (light_on_request, fade_flash)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}

pub(crate) fn spawn_flash_overlay(mut commands: Commands, round: Res<Round>) {
    let t = round.tunables();
    commands.spawn((
        Name::new("ScreenFlash"),
        ScreenFlash::default(),
        Sprite {
            color: Color::srgba(1.0, 1.0, 1.0, 0.0),
            custom_size: Some(Vec2::new(t.arena_width, t.arena_height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 900.0),
        Visibility::Hidden,
        DespawnOnExit(GameState::InGame),
    ));
}

pub(crate) fn light_on_request(
    mut reader: MessageReader<FxRequest>,
    mut q_flash: Query<&mut ScreenFlash>,
) {
    for req in reader.read().filter(|r| r.kind == FxKind::ScreenFlash) {
        for mut flash in &mut q_flash {
            flash.light(req.lifetime_secs);
        }
    }
}

pub(crate) fn fade_flash(
    time: Res<Time>,
    mut q_flash: Query<(&mut ScreenFlash, &mut Sprite, &mut Visibility)>,
) {
    let dt = time.delta_secs();
    for (mut flash, mut sprite, mut vis) in &mut q_flash {
        if !flash.is_lit() {
            *vis = Visibility::Hidden;
            continue;
        }

        *vis = Visibility::Visible;
        sprite.color = sprite.color.with_alpha(flash.alpha());
        flash.remaining = (flash.remaining - dt).max(0.0);
    }
}
