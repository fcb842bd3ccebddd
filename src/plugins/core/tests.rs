use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::Tunables;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_preinserted_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables { initial_lives: 9, ..Tunables::default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().initial_lives, 9);
}

#[test]
fn partial_ron_overrides_only_named_fields() {
    let t = Tunables::from_ron("(initial_lives: 5, enemy_pool_cap: Some(16))").unwrap();
    assert_eq!(t.initial_lives, 5);
    assert_eq!(t.enemy_pool_cap, Some(16));
    assert_eq!(t.arena_width, Tunables::default().arena_width);
}

#[test]
fn invalid_ron_is_an_error() {
    assert!(Tunables::from_ron("(initial_lives: \"three\")").is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let t = Tunables::load_or_default("definitely/not/here/tunables.ron");
    assert_eq!(t, Tunables::default());
}

#[test]
fn shipped_file_matches_defaults() {
    let shipped = Tunables::from_ron(include_str!("../../../tunables.ron")).unwrap();
    assert_eq!(shipped, Tunables::default());
}

#[test]
fn non_finite_numbers_fall_back_to_defaults() {
    let t = Tunables::from_ron("(brick_spawn_chance: NaN, enemy_attack_speed: inf, turret_speed: 120.0)").unwrap();
    let d = Tunables::default();
    assert_eq!(t.brick_spawn_chance, d.brick_spawn_chance);
    assert_eq!(t.enemy_attack_speed, d.enemy_attack_speed);
    assert_eq!(t.turret_speed, 120.0);

    let t = Tunables {
        first_enemy_spawn: [f32::NAN, 10.0],
        trail_interval_secs: f32::NEG_INFINITY,
        ..d.clone()
    }
    .sanitized();
    assert_eq!(t.first_enemy_spawn, [d.first_enemy_spawn[0], 10.0]);
    assert_eq!(t.trail_interval_secs, d.trail_interval_secs);
}
