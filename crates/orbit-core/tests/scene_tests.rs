// Host-side tests for scene selection, hover and frame stepping.

use glam::Vec3;
use orbit_core::scene::{RETURN_TEXT, WELCOME_TEXT};
use orbit_core::{
    advance, initial_camera_position, BodyId, CategoryId, Route, SceneEvent, SceneState, Theme,
    UiHint,
};

const DT: f32 = 1.0 / 60.0;

fn launched() -> SceneState {
    let mut s = SceneState::new();
    s.handle(SceneEvent::Launch);
    for _ in 0..120 {
        s = advance(s, DT);
    }
    s
}

#[test]
fn new_scene_is_in_overview() {
    let s = SceneState::new();
    assert_eq!(s.active_category, None);
    assert_eq!(s.hud_text.as_deref(), Some(WELCOME_TEXT));
    assert_eq!(s.global_speed, 1.0);
    assert_eq!(s.hud_badge(), "SYSTEM");
    assert_eq!(s.theme, Theme::Dark);
    assert_eq!(s.planets.len(), 3);
    assert_eq!(s.planets[0].satellites.len(), 2);
    assert_eq!(s.camera.position, initial_camera_position());
}

#[test]
fn planets_stay_collapsed_until_launch() {
    let mut s = SceneState::new();
    for _ in 0..30 {
        s = advance(s, DT);
    }
    assert!(s.planets.iter().all(|p| p.body.current_radius == 0.0));
    s.handle(SceneEvent::Launch);
    s = advance(s, DT);
    assert!(s.planets.iter().all(|p| p.body.current_radius > 0.0));
}

#[test]
fn select_then_disengage_restores_overview() {
    let mut s = launched();
    assert_eq!(s.handle(SceneEvent::Click(BodyId::Planet(CategoryId::Tech))), None);
    assert_eq!(s.active_category, Some(CategoryId::Tech));
    assert_eq!(s.global_speed, 0.5);
    assert_eq!(s.hud_badge(), "FOCUS");
    assert_eq!(
        s.hud_text.as_deref(),
        Some("Connected: TECHNOLOGY orbit. Exploring key projects...")
    );
    assert_eq!(s.camera.tracked(), Some(BodyId::Planet(CategoryId::Tech)));
    assert_eq!(s.camera.target_position.y, 3.5);

    for _ in 0..90 {
        s = advance(s, DT);
    }
    let planet = s.body_position(BodyId::Planet(CategoryId::Tech)).unwrap();
    assert!((s.camera.look_at - planet).length() < 1.0);

    s.handle(SceneEvent::Disengage);
    assert_eq!(s.active_category, None);
    assert_eq!(s.global_speed, 1.0);
    assert_eq!(s.hud_text.as_deref(), Some(RETURN_TEXT));
    assert_eq!(s.camera.position, Vec3::new(0.0, 6.0, 16.0));
    assert_eq!(s.camera.look_at, Vec3::ZERO);
    assert_eq!(s.camera.tracked(), None);
}

#[test]
fn disengage_from_overview_is_harmless() {
    let mut s = SceneState::new();
    s.handle(SceneEvent::Disengage);
    assert_eq!(s.active_category, None);
    assert_eq!(s.camera.position, initial_camera_position());
}

#[test]
fn clicks_on_core_and_satellites_navigate() {
    let mut s = launched();
    assert_eq!(s.handle(SceneEvent::Click(BodyId::Core)), Some(Route::About));
    assert_eq!(
        s.handle(SceneEvent::Click(BodyId::Satellite(CategoryId::Design, 0))),
        Some(Route::Project("tag-tracks".to_string()))
    );
    assert_eq!(
        s.handle(SceneEvent::Click(BodyId::Satellite(CategoryId::Business, 1))),
        Some(Route::Project("snyping-game".to_string()))
    );
    assert_eq!(s.handle(SceneEvent::Click(BodyId::Satellite(CategoryId::Business, 9))), None);
    assert_eq!(s.active_category, None);
}

#[test]
fn hovering_a_satellite_freezes_only_that_satellite() {
    let mut s = launched();
    let id = BodyId::Satellite(CategoryId::Design, 1);
    s.set_hovered(Some(id));
    assert_eq!(s.hovered(), Some(id));
    assert_eq!(s.hint, UiHint::Pointer);
    assert!(s.hud_text.as_deref().unwrap().starts_with("Project: Business Pitch Projects // "));

    let frozen = s.planets[0].satellites[1].body.accumulated_time;
    let sibling = s.planets[0].satellites[0].body.accumulated_time;
    for _ in 0..100 {
        s = advance(s, DT);
    }
    assert_eq!(s.planets[0].satellites[1].body.accumulated_time, frozen);
    assert!(s.planets[0].satellites[0].body.accumulated_time > sibling);

    let labels = s.labels();
    assert_eq!(labels.iter().filter(|l| l.body == id).count(), 2);
    assert!(labels.iter().any(|l| l.card));

    s.set_hovered(None);
    assert_eq!(s.hovered(), None);
    assert_eq!(s.hint, UiHint::Default);
    assert_eq!(s.hud_text, None);
    assert!(!s.planets[0].satellites[1].body.hovered);
}

#[test]
fn hover_moves_between_bodies() {
    let mut s = launched();
    s.set_hovered(Some(BodyId::Planet(CategoryId::Design)));
    assert_eq!(s.hud_text.as_deref(), Some("Orbit: DESIGN // Click to focus."));
    s.set_hovered(Some(BodyId::Core));
    assert!(!s.planets[0].body.hovered);
    assert!(s.core.hovered);
    assert_eq!(s.hint, UiHint::Pointer);
    assert!(s.labels().iter().any(|l| l.text == "ABOUT"));
}

#[test]
fn hovered_planet_grows_and_stops() {
    let mut s = launched();
    let id = BodyId::Planet(CategoryId::Business);
    s.set_hovered(Some(id));
    let pos = s.body_position(id).unwrap();
    for _ in 0..200 {
        s = advance(s, DT);
    }
    assert_eq!(s.body_position(id).unwrap(), pos);
    assert_eq!(s.planets[2].body.scale, 1.5);
}

#[test]
fn focused_planet_keeps_hud_on_pointer_out() {
    let mut s = launched();
    let id = BodyId::Planet(CategoryId::Design);
    s.set_hovered(Some(id));
    s.handle(SceneEvent::Click(id));
    s.set_hovered(None);
    assert!(s.hud_text.as_deref().unwrap().starts_with("Connected: DESIGN"));
}

#[test]
fn theme_toggle_flips_and_hides_stars() {
    let mut s = SceneState::new();
    assert!(s.theme.shows_stars());
    s.handle(SceneEvent::ToggleTheme);
    assert_eq!(s.theme, Theme::Light);
    assert!(!s.theme.shows_stars());
    s.handle(SceneEvent::ToggleTheme);
    assert_eq!(s.theme, Theme::Dark);
}

#[test]
fn pick_targets_cover_every_body() {
    let s = launched();
    let targets = s.pick_targets();
    assert_eq!(targets.len(), 1 + 3 + 6);
    for (id, centre, _) in &targets {
        assert_eq!(s.body_position(*id), Some(*centre));
    }
}

#[test]
fn geometry_counts() {
    let s = launched();
    assert_eq!(s.body_instances().len(), 10);
    let mut lines = Vec::new();
    s.line_vertices(&mut lines);
    // three rings of 128 segments plus full trails
    let trails = 3 * (8 - 1) + 6 * (15 - 1);
    assert_eq!(lines.len(), 2 * (3 * 128 + trails));
}

#[test]
fn settle_finishes_launch_ramp() {
    let mut s = SceneState::new();
    s.settle();
    assert!(s.started);
    for p in &s.planets {
        assert_eq!(p.body.current_radius, p.body.orbit_radius);
        assert!((p.body.position().length() - p.body.orbit_radius).abs() < 1e-4);
    }
}
