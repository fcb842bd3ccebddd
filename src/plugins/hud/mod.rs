//! HUD plugin: lives indicator and the defeat banner.
//!
//! Both are world-space sprites read straight off `Round` every frame:
//! - one `LifeIcon` per initial life, dimmed once that life is lost
//! - a hidden `DefeatBanner` that fades in after the turret is defeated

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::round::{self, Round};
use crate::sim::TurretState;

const ICON_SIZE: f32 = 14.0;
const ICON_GAP: f32 = 8.0;
const BANNER_FADE_SECS: f32 = 0.8;

const ICON_LIT: Color = Color::srgb(0.2, 0.75, 0.9);
const ICON_SPENT: Color = Color::srgba(0.2, 0.75, 0.9, 0.2);

/// Life slot `n` (0-based) is lit while `n < lives_remaining`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeIcon(pub u32);

#[derive(Component, Debug, Clone, Copy)]
pub struct DefeatBanner;

/// Fade-in progress of the banner, in virtual seconds.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct BannerTween {
    pub elapsed: f32,
}

impl BannerTween {
    #[inline]
    pub fn alpha(&self) -> f32 {
        smootherstep((self.elapsed / BANNER_FADE_SECS).clamp(0.0, 1.0))
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::InGame),
        (spawn_life_icons, spawn_banner).after(round::start_round),
    )
    .add_systems(
        Update,
        (update_life_icons, reveal_banner).run_if(in_state(GameState::InGame)),
    );
}

/// Quintic ease, 0..1 -> 0..1.
#[inline]
pub(crate) fn smootherstep(x: f32) -> f32 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

#[inline]
fn icon_color(index: u32, remaining: u32) -> Color {
    if index < remaining { ICON_LIT } else { ICON_SPENT }
}

fn spawn_life_icons(mut commands: Commands, round: Res<Round>) {
    let half = round.tunables().half_arena();
    let base = Vec2::new(-half.x + ICON_GAP + ICON_SIZE * 0.5, -half.y + 60.0);

    for i in 0..round.initial_lives() {
        let at = base + Vec2::new(i as f32 * (ICON_SIZE + ICON_GAP), 0.0);
        commands.spawn((
            Name::new(format!("LifeIcon{i}")),
            LifeIcon(i),
            Sprite {
                color: icon_color(i, round.lives_remaining()),
                custom_size: Some(Vec2::splat(ICON_SIZE)),
                ..default()
            },
            Transform::from_translation(at.extend(20.0)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn spawn_banner(mut commands: Commands, round: Res<Round>) {
    let width = round.tunables().arena_width;

    commands
        .spawn((
            Name::new("DefeatBanner"),
            DefeatBanner,
            BannerTween::default(),
            Sprite {
                color: Color::srgba(0.0, 0.0, 0.0, 0.0),
                custom_size: Some(Vec2::new(width, 120.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 50.0),
            Visibility::Hidden,
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|banner| {
            banner.spawn((
                Text2d::new("GAME OVER"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 0.35, 0.3, 0.0)),
                Transform::from_xyz(0.0, 0.0, 1.0),
            ));
        });
}

fn update_life_icons(round: Res<Round>, mut q: Query<(&LifeIcon, &mut Sprite)>) {
    let remaining = round.lives_remaining();
    for (LifeIcon(i), mut sprite) in &mut q {
        sprite.color = icon_color(*i, remaining);
    }
}

fn reveal_banner(
    time: Res<Time>,
    round: Res<Round>,
    mut q_banner: Query<(&mut BannerTween, &mut Sprite, &mut Visibility, &Children), With<DefeatBanner>>,
    mut q_text: Query<&mut TextColor>,
) {
    let Ok((mut tween, mut sprite, mut vis, children)) = q_banner.single_mut() else {
        return;
    };

    if round.turret_state() != TurretState::Defeated {
        *vis = Visibility::Hidden;
        tween.elapsed = 0.0;
        return;
    }

    *vis = Visibility::Inherited;
    tween.elapsed += time.delta_secs();
    let alpha = tween.alpha();

    sprite.color = Color::srgba(0.0, 0.0, 0.0, 0.7 * alpha);
    for child in children.iter() {
        if let Ok(mut text) = q_text.get_mut(child) {
            text.0 = text.0.with_alpha(alpha);
        }
    }
}

#[cfg(test)]
mod tests;
