// Host-side tests for orbital motion and hover pause.

use glam::{Vec3, Vec4};
use orbit_core::orbit::{approach, evaluate, planet_layout, OrbitPath, OrbitingBody};
use orbit_core::CategoryId;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn satellite_follows_parametric_path() {
    let mut body = OrbitingBody::satellite(1, 2, Vec4::ONE);
    let dt = 1.0 / 60.0;
    for _ in 0..37 {
        let before = body.accumulated_time;
        body.advance(dt, 1.0, true);
        let expected_acc = before + dt * body.angular_speed;
        assert!((body.accumulated_time - expected_acc).abs() < 1e-6);
        let expected = evaluate(OrbitPath::Tilted, expected_acc + body.phase_offset, body.orbit_radius);
        assert!(close(body.position(), expected));
    }
}

#[test]
fn speed_multiplier_scales_accumulation() {
    let mut a = OrbitingBody::satellite(0, 1, Vec4::ONE);
    let mut b = a.clone();
    a.advance(0.5, 1.0, true);
    b.advance(0.5, 0.5, true);
    assert!((a.accumulated_time - 2.0 * b.accumulated_time).abs() < 1e-6);
}

#[test]
fn hovered_body_is_frozen() {
    let mut body = OrbitingBody::satellite(0, 3, Vec4::ONE);
    body.advance(0.25, 1.0, true);
    body.hovered = true;
    let pos = body.position();
    let acc = body.accumulated_time;
    let rot = body.rotation;
    for _ in 0..500 {
        body.advance(1.0 / 60.0, 1.0, true);
    }
    assert_eq!(body.position(), pos);
    assert_eq!(body.accumulated_time, acc);
    assert_eq!(body.rotation, rot);

    // resumes from where it stopped, no jump
    body.hovered = false;
    body.advance(0.0, 1.0, true);
    assert!(close(body.position(), pos));
}

#[test]
fn hover_does_not_freeze_scale() {
    let mut body = OrbitingBody::planet(3.5, 0.25, Vec4::ONE, 0.0);
    body.hovered = true;
    for _ in 0..200 {
        body.approach_scale(1.5, 0.1);
    }
    assert_eq!(body.scale, 1.5);
}

#[test]
fn satellite_phases_are_evenly_spaced() {
    let a = OrbitingBody::satellite(0, 2, Vec4::ONE);
    let b = OrbitingBody::satellite(1, 2, Vec4::ONE);
    assert_eq!(a.phase_offset, 0.0);
    assert!((b.phase_offset - std::f32::consts::PI).abs() < 1e-6);
    // opposite sides of the parent
    assert!(close(a.position() + b.position(), Vec3::new(0.0, a.position().y + b.position().y, 0.0)));
}

#[test]
fn tilted_path_is_closed_and_non_planar() {
    let r = 1.0;
    let start = evaluate(OrbitPath::Tilted, 0.3, r);
    // sin(1.5t) has period 4pi, so the loop closes after two turns
    let end = evaluate(OrbitPath::Tilted, 0.3 + 4.0 * std::f32::consts::PI, r);
    assert!(close(start, end));
    let max_y = (0..100)
        .map(|i| evaluate(OrbitPath::Tilted, i as f32 * 0.1, r).y.abs())
        .fold(0.0f32, f32::max);
    assert!(max_y > 0.25 && max_y <= 0.3 + 1e-6);
}

#[test]
fn planet_launch_ramp_spreads_out_then_matches_path() {
    let (radius, speed, delay) = planet_layout(CategoryId::Tech);
    let mut planet = OrbitingBody::planet(radius, speed, Vec4::ONE, delay);
    assert_eq!(planet.accumulated_time, 0.5);
    planet.advance(1.0 / 60.0, 1.0, false);
    assert_eq!(planet.current_radius, 0.0);
    for _ in 0..600 {
        planet.advance(1.0 / 60.0, 1.0, true);
    }
    assert_eq!(planet.current_radius, radius);
    let acc = planet.accumulated_time;
    planet.advance(0.1, 1.0, true);
    let expected = evaluate(OrbitPath::Planar, acc + 0.1 * speed, radius);
    assert!(close(planet.position(), expected));
    assert_eq!(planet.position().y, 0.0);
}

#[test]
fn approach_snaps_near_target() {
    let mut v = 0.0;
    for _ in 0..1000 {
        v = approach(v, 2.0, 0.05);
    }
    assert_eq!(v, 2.0);
    assert_eq!(approach(1.0, 1.0, 0.5), 1.0);
}
