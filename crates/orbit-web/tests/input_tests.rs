// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::{Vec2, Vec3};
use input::*;
use orbit_core::{BodyId, CategoryId};

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    let t = t.expect("ray along +Z hits sphere at z=5");
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(3.0, 0.0, 5.0), 1.0).is_none());
}

#[test]
fn pick_nearest_prefers_closest_hit() {
    let targets = vec![
        (BodyId::Planet(CategoryId::Business), Vec3::new(0.0, 0.0, -10.0), 1.0),
        (BodyId::Satellite(CategoryId::Business, 0), Vec3::new(0.0, 0.0, -4.0), 0.3),
        (BodyId::Core, Vec3::new(5.0, 0.0, -4.0), 1.2),
    ];
    let hit = pick_nearest(&targets, Vec3::ZERO, Vec3::NEG_Z);
    assert_eq!(hit, Some(BodyId::Satellite(CategoryId::Business, 0)));
    assert_eq!(pick_nearest(&targets, Vec3::ZERO, Vec3::Y), None);
    assert_eq!(pick_nearest(&[], Vec3::ZERO, Vec3::NEG_Z), None);
}

#[test]
fn short_press_is_a_click() {
    let mut p = PointerState::default();
    p.press(Vec2::new(100.0, 100.0));
    assert_eq!(p.drag_delta(Vec2::new(101.0, 101.0)), None);
    assert!(!p.dragging);
    assert!(p.release());
    assert!(!p.down);
}

#[test]
fn travel_past_threshold_becomes_drag() {
    let mut p = PointerState::default();
    p.press(Vec2::new(0.0, 0.0));
    let first = p.drag_delta(Vec2::new(10.0, 0.0)).expect("drag starts");
    assert_eq!(first, Vec2::new(10.0, 0.0));
    // once dragging, every move reports a delta, even tiny ones
    let second = p.drag_delta(Vec2::new(11.0, 2.0)).expect("drag continues");
    assert_eq!(second, Vec2::new(1.0, 2.0));
    assert!(!p.release(), "a drag is not a click");
}

#[test]
fn moves_without_press_are_not_drags() {
    let mut p = PointerState::default();
    assert_eq!(p.drag_delta(Vec2::new(50.0, 50.0)), None);
    assert!(!p.release());
}

#[test]
fn wheel_up_zooms_in_and_is_clamped() {
    assert!(wheel_steps(-100.0) > 0.0);
    assert!(wheel_steps(100.0) < 0.0);
    assert_eq!(wheel_steps(0.0), 0.0);
    assert_eq!(wheel_steps(-1e6), 5.0);
    assert_eq!(wheel_steps(1e6), -5.0);
}

#[test]
fn escape_disengages_only_when_engaged() {
    use orbit_core::SceneEvent;
    assert_eq!(key_event("Escape", true), Some(SceneEvent::Disengage));
    assert_eq!(key_event("Escape", false), None);
    assert_eq!(key_event("Enter", true), None);
    assert_eq!(key_event("t", true), None);
}
