use glam::{Vec3, Vec4};
use orbit_core::backdrop::{pseudo_random, starfield, star_vertices, wave_line, wave_vertices};
use orbit_core::color::{hex_or_white, hsl, parse_hex};
use orbit_core::constants::*;
use orbit_core::trail::Trail;

#[test]
fn starfield_is_deterministic_and_in_shell() {
    let a = starfield(STAR_SEED, 500, STAR_RADIUS, STAR_DEPTH, 0.5);
    let b = starfield(STAR_SEED, 500, STAR_RADIUS, STAR_DEPTH, 0.5);
    assert_eq!(a.len(), 500);
    for (sa, sb) in a.iter().zip(&b) {
        assert_eq!(sa.position, sb.position);
        let r = sa.position.length();
        assert!(r <= STAR_RADIUS + STAR_DEPTH + 1e-3);
        assert!(r >= STAR_RADIUS - 1e-3);
    }
    let mut out = Vec::new();
    star_vertices(&a, 0.3, &mut out);
    assert_eq!(out.len(), 500);
}

#[test]
fn pseudo_random_is_unit_interval() {
    for i in 0..200 {
        let v = pseudo_random(i as f32);
        assert!((0.0..1.0).contains(&v));
    }
    assert_eq!(pseudo_random(3.0), pseudo_random(3.0));
}

#[test]
fn wave_lines_span_the_grid() {
    let line = wave_line(0, 1.0);
    assert_eq!(line.len(), WAVE_POINTS_PER_LINE);
    assert!((line[0].x + WAVE_LINE_WIDTH / 2.0).abs() < 1e-4);
    assert!(line.iter().all(|p| p.y.abs() <= 1.6 + 1e-4));
    let mut out = Vec::new();
    wave_vertices(2.0, Vec4::ONE, &mut out);
    assert_eq!(out.len(), WAVE_LINE_COUNT * (WAVE_POINTS_PER_LINE - 1) * 2);
}

#[test]
fn trail_keeps_newest_points_and_fades_tail() {
    let mut trail = Trail::new(3);
    for i in 0..5 {
        trail.push(Vec3::splat(i as f32));
    }
    assert_eq!(trail.len(), 3);
    let pts: Vec<_> = trail.points().copied().collect();
    assert_eq!(pts, vec![Vec3::splat(2.0), Vec3::splat(3.0), Vec3::splat(4.0)]);
    assert_eq!(trail.attenuation(0), 0.0);
    assert_eq!(trail.attenuation(2), 1.0);
    assert_eq!(trail.attenuation(1), 0.25);
    let mut out = Vec::new();
    trail.push_lines(&mut out, Vec4::ONE);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0].color[3], 0.0);
}

#[test]
fn hex_colors_parse() {
    assert_eq!(parse_hex("#ffffff"), Some(Vec4::ONE));
    assert_eq!(parse_hex("#000"), Some(Vec4::new(0.0, 0.0, 0.0, 1.0)));
    assert_eq!(parse_hex("ffffff"), None);
    assert_eq!(parse_hex("#ggg"), None);
    assert_eq!(parse_hex("#ÿÿ"), None);
    assert_eq!(hex_or_white("nope"), Vec4::ONE);
    let red = hsl(0.0, 1.0, 0.5);
    assert!((red - Vec4::new(1.0, 0.0, 0.0, 1.0)).length() < 1e-5);
}
