// Host-side tests for the camera follow controller.

use glam::Vec3;
use orbit_core::camera::{CameraRig, FollowMode, OrbitControls};
use orbit_core::constants::*;
use orbit_core::{BodyId, CategoryId};

#[test]
fn tracking_look_at_converges_monotonically() {
    let mut rig = CameraRig::default();
    let body = Vec3::new(3.0, 0.0, -2.0);
    rig.engage(BodyId::Planet(CategoryId::Design), Vec3::new(1.5, 3.5, -1.0));
    let mut prev = (rig.look_at - body).length();
    for _ in 0..200 {
        rig.advance(Some(body));
        let d = (rig.look_at - body).length();
        assert!(d <= prev);
        prev = d;
    }
    assert!(prev < 1e-3);
    assert!((rig.position - Vec3::new(1.5, 3.5, -1.0)).length() < 1e-3);
}

#[test]
fn overview_look_at_returns_to_origin() {
    let mut rig = CameraRig::default();
    rig.look_at = Vec3::new(4.0, 1.0, 4.0);
    let mut prev = rig.look_at.length();
    for _ in 0..60 {
        rig.advance(None);
        let d = rig.look_at.length();
        assert!(d <= prev);
        prev = d;
    }
    assert!(prev < 1e-4);
}

#[test]
fn tracking_ignores_missing_position() {
    let mut rig = CameraRig::default();
    rig.engage(BodyId::Planet(CategoryId::Tech), Vec3::new(0.0, 3.5, 2.0));
    rig.look_at = Vec3::new(1.0, 0.0, 0.0);
    rig.advance(None);
    assert_eq!(rig.look_at, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn engage_and_disengage_toggle_mode_and_auto_rotate() {
    let mut rig = CameraRig::default();
    assert_eq!(rig.mode, FollowMode::Overview);
    assert!(rig.controls.auto_rotate);
    let body = BodyId::Planet(CategoryId::Business);
    rig.engage(body, Vec3::ONE);
    assert_eq!(rig.tracked(), Some(body));
    assert!(!rig.controls.auto_rotate);
    rig.disengage();
    assert_eq!(rig.tracked(), None);
    assert_eq!(rig.target_position, initial_camera_position());
    assert!(rig.controls.auto_rotate);
}

#[test]
fn force_reset_snaps_once() {
    let mut rig = CameraRig::default();
    rig.engage(BodyId::Planet(CategoryId::Design), Vec3::new(1.0, 3.5, 1.0));
    for _ in 0..10 {
        rig.advance(Some(Vec3::new(2.0, 0.0, 2.0)));
    }
    rig.controls.drag(120.0, 40.0);
    rig.controls.wheel(3.0);
    rig.disengage();
    rig.force_reset();
    assert_eq!(rig.position, initial_camera_position());
    assert_eq!(rig.look_at, Vec3::ZERO);
    assert_eq!(rig.controls.azimuth, 0.0);
    assert_eq!(rig.controls.zoom, 1.0);
    assert_eq!(rig.eye(), rig.controls.apply(rig.position, rig.look_at));
}

#[test]
fn position_eases_toward_target_regardless_of_mode() {
    let mut rig = CameraRig::default();
    rig.set_target_position(Vec3::new(0.0, 10.0, 10.0));
    let start = (rig.position - rig.target_position).length();
    rig.advance(None);
    let after = (rig.position - rig.target_position).length();
    assert!((after - start * (1.0 - CAMERA_POSITION_LERP)).abs() < 1e-4);
}

#[test]
fn controls_clamp_distance_and_polar_angle() {
    let mut controls = OrbitControls::default();
    let look_at = Vec3::ZERO;
    // straight overhead and very close
    let eye = controls.apply(Vec3::new(0.0, 1.0, 0.001), look_at);
    let r = eye.length();
    assert!((r - CONTROLS_MIN_DISTANCE).abs() < 1e-3);
    let polar = (eye.y / r).acos();
    assert!((polar - CONTROLS_MIN_POLAR).abs() < 1e-3);

    controls.wheel(-200.0);
    let far = controls.apply(initial_camera_position(), look_at);
    assert!(far.length() <= CONTROLS_MAX_DISTANCE + 1e-3);
}

#[test]
fn untouched_controls_keep_overview_eye() {
    let controls = OrbitControls::default();
    let eye = controls.apply(initial_camera_position(), Vec3::ZERO);
    assert!((eye - initial_camera_position()).length() < 1e-3);
}

#[test]
fn auto_rotate_only_in_overview() {
    let mut rig = CameraRig::default();
    rig.advance(None);
    assert!(rig.controls.azimuth < 0.0);
    rig.engage(BodyId::Planet(CategoryId::Design), Vec3::ONE);
    let az = rig.controls.azimuth;
    rig.advance(Some(Vec3::ZERO));
    assert_eq!(rig.controls.azimuth, az);
}

#[test]
fn drag_back_after_polar_limit_moves_immediately() {
    let mut rig = CameraRig::default();
    rig.drag(0.0, 2000.0);
    let pinned = rig.eye();
    let polar = (pinned.y / pinned.length()).acos();
    assert!((polar - CONTROLS_MIN_POLAR).abs() < 1e-3);

    rig.drag(0.0, -100.0);
    let back = rig.eye();
    assert!((back - pinned).length() > 0.5);
    assert!((back.y / back.length()).acos() > CONTROLS_MIN_POLAR + 0.1);
}

#[test]
fn zoom_out_after_min_distance_moves_immediately() {
    let mut rig = CameraRig::default();
    for _ in 0..60 {
        rig.wheel(5.0);
    }
    let closest = (rig.eye() - rig.look_at).length();
    assert!((closest - CONTROLS_MIN_DISTANCE).abs() < 1e-3);

    rig.wheel(-5.0);
    let after = (rig.eye() - rig.look_at).length();
    assert!(after > closest + 0.5);
}
