// Host-side tests for the screen/world projection helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::Vec3;
use orbit_core::{Camera, CameraRig};

fn test_camera() -> Camera {
    CameraRig::default().camera(16.0 / 9.0)
}

#[test]
fn centre_ray_points_at_look_target() {
    let cam = test_camera();
    let (ro, rd) = screen_to_world_ray(&cam, 800.0, 450.0, 1600.0, 900.0);
    assert!((ro - cam.eye).length() < 1e-5);
    let expected = (cam.target - cam.eye).normalize();
    assert!(rd.dot(expected) > 0.9999, "rd={rd:?} expected={expected:?}");
}

#[test]
fn look_target_projects_to_viewport_centre() {
    let cam = test_camera();
    let p = world_to_screen(cam.view_proj(), cam.target, 1600.0, 900.0).expect("visible");
    assert!((p.x - 800.0).abs() < 0.5);
    assert!((p.y - 450.0).abs() < 0.5);
}

#[test]
fn points_behind_camera_are_not_projected() {
    let cam = test_camera();
    let behind = cam.eye + (cam.eye - cam.target).normalize() * 5.0;
    assert!(world_to_screen(cam.view_proj(), behind, 800.0, 600.0).is_none());
}

#[test]
fn screen_y_grows_downward() {
    let cam = test_camera();
    let vp = cam.view_proj();
    let above = world_to_screen(vp, Vec3::new(0.0, 2.0, 0.0), 800.0, 600.0).expect("visible");
    let below = world_to_screen(vp, Vec3::new(0.0, -2.0, 0.0), 800.0, 600.0).expect("visible");
    assert!(above.y < below.y);
}

#[test]
fn ray_through_projected_point_passes_near_it() {
    let cam = test_camera();
    let world = Vec3::new(3.0, 0.5, -2.0);
    let p = world_to_screen(cam.view_proj(), world, 1200.0, 800.0).expect("visible");
    let (ro, rd) = screen_to_world_ray(&cam, p.x, p.y, 1200.0, 800.0);
    let to_point = world - ro;
    let miss = (to_point - rd * to_point.dot(rd)).length();
    assert!(miss < 1e-3, "miss distance {miss}");
}

#[test]
fn billboard_axes_are_orthonormal() {
    let cam = test_camera();
    let (right, up) = billboard_axes(cam.view_matrix());
    assert!((right.length() - 1.0).abs() < 1e-5);
    assert!((up.length() - 1.0).abs() < 1e-5);
    assert!(right.dot(up).abs() < 1e-5);
    // right is horizontal for a camera with world-up Y
    assert!(right.y.abs() < 1e-5);
}
