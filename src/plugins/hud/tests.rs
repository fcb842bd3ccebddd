use std::time::Duration;

use bevy::prelude::*;

use crate::common::test_utils::{run_system_once, world_with_round};
use crate::common::tunables::Tunables;
use crate::plugins::round::Round;

use super::{BannerTween, DefeatBanner, ICON_LIT, ICON_SPENT, LifeIcon, smootherstep};

fn hud_world() -> World {
    let mut world = world_with_round(Tunables::default());
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_secs_f32(0.1));
    world.insert_resource(time);
    run_system_once(&mut world, super::spawn_life_icons);
    run_system_once(&mut world, super::spawn_banner);
    world
}

fn icon_colors(world: &mut World) -> Vec<(u32, Color)> {
    let mut icons: Vec<(u32, Color)> = world
        .query::<(&LifeIcon, &Sprite)>()
        .iter(world)
        .map(|(i, s)| (i.0, s.color))
        .collect();
    icons.sort_by_key(|(i, _)| *i);
    icons
}

fn defeat(world: &mut World) {
    let mut round = world.resource_mut::<Round>();
    while !round.is_defeated() {
        round.hit_turret();
    }
}

#[test]
fn smootherstep_endpoints_and_monotonic() {
    assert_eq!(smootherstep(0.0), 0.0);
    assert_eq!(smootherstep(1.0), 1.0);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = smootherstep(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn one_lit_icon_per_life() {
    let mut world = hud_world();
    let icons = icon_colors(&mut world);
    assert_eq!(icons.len() as u32, Tunables::default().initial_lives);
    assert!(icons.iter().all(|(_, c)| *c == ICON_LIT));
}

#[test]
fn lost_lives_dim_from_the_end() {
    let mut world = hud_world();
    world.resource_mut::<Round>().hit_turret();

    run_system_once(&mut world, super::update_life_icons);

    let icons = icon_colors(&mut world);
    assert_eq!(icons[0].1, ICON_LIT);
    assert_eq!(icons[1].1, ICON_LIT);
    assert_eq!(icons[2].1, ICON_SPENT);
}

#[test]
fn banner_hidden_while_turret_stands() {
    let mut world = hud_world();
    run_system_once(&mut world, super::reveal_banner);

    let vis = world
        .query_filtered::<&Visibility, With<DefeatBanner>>()
        .single(&world)
        .unwrap();
    assert_eq!(*vis, Visibility::Hidden);
}

#[test]
fn banner_stays_hidden_after_a_survivable_hit() {
    let mut world = hud_world();
    world.resource_mut::<Round>().hit_turret();
    run_system_once(&mut world, super::reveal_banner);

    let (tween, vis) = world
        .query_filtered::<(&BannerTween, &Visibility), With<DefeatBanner>>()
        .single(&world)
        .unwrap();
    assert_eq!(*vis, Visibility::Hidden);
    assert_eq!(tween.elapsed, 0.0);
}

#[test]
fn banner_fades_in_after_defeat() {
    let mut world = hud_world();
    defeat(&mut world);

    run_system_once(&mut world, super::reveal_banner);
    let first = *world
        .query_filtered::<&BannerTween, With<DefeatBanner>>()
        .single(&world)
        .unwrap();

    for _ in 0..20 {
        run_system_once(&mut world, super::reveal_banner);
    }
    let (tween, vis) = world
        .query_filtered::<(&BannerTween, &Visibility), With<DefeatBanner>>()
        .single(&world)
        .unwrap();

    assert_eq!(*vis, Visibility::Inherited);
    assert!(first.alpha() > 0.0 && first.alpha() < 1.0);
    assert_eq!(tween.alpha(), 1.0);

    let text = world.query::<&TextColor>().single(&world).unwrap();
    assert_eq!(text.0.alpha(), 1.0);
}
