//! Decorative backdrops: the rotating starfield behind the orbit scene and
//! the undulating wave lines on the start page.

use crate::color::hsl;
use crate::constants::*;
use crate::geometry::LineVertex;
use glam::{Quat, Vec3, Vec4};
use rand::prelude::*;

/// Deterministic hash in [0, 1) used for per-line phase offsets.
#[inline]
pub fn pseudo_random(seed: f32) -> f32 {
    let x = (seed * 13445.89 + 489.133).sin() * 43758.5453;
    x - x.floor()
}

#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec3,
    pub color: Vec4,
    pub size: f32,
}

/// Stars scattered through a spherical shell between `radius` and
/// `radius + depth`, hue sweeping with index.
pub fn starfield(seed: u64, count: usize, radius: f32, depth: f32, saturation: f32) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut r = radius + depth;
    let increment = depth / count.max(1) as f32;
    (0..count)
        .map(|i| {
            r -= increment * rng.gen::<f32>();
            let phi = (1.0 - rng.gen::<f32>() * 2.0).acos();
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            Star {
                position: Vec3::new(
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                    r * phi.sin() * theta.cos(),
                ),
                color: hsl(i as f32 / count as f32, saturation, 0.9),
                size: 0.5 + 0.5 * rng.gen::<f32>(),
            }
        })
        .collect()
}

/// Star vertices rotated by the accumulated starfield spin.
pub fn star_vertices(stars: &[Star], rotation_y: f32, out: &mut Vec<LineVertex>) {
    let rot = Quat::from_rotation_y(rotation_y);
    out.extend(stars.iter().map(|s| LineVertex {
        position: (rot * s.position).to_array(),
        size: s.size,
        color: s.color.to_array(),
    }));
}

/// Vertical displacement of wave line `line` at horizontal position `x`.
#[inline]
pub fn wave_height(line: usize, x: f32, time: f32) -> f32 {
    let i = line as f32;
    let phase = pseudo_random(i + 1.0) * std::f32::consts::TAU;
    let speed = 2.5 + (i * 0.05).sin();
    let y = (x * 0.3 + time * speed + phase).sin() * 2.0;
    y * (0.5 + 0.5 * (time * 0.5 + i * 0.2).sin()) * 0.8
}

/// Points of one wave line in group space (before the group transform).
pub fn wave_line(line: usize, time: f32) -> Vec<Vec3> {
    let z = (line as f32 / WAVE_LINE_COUNT as f32 - 0.5) * WAVE_LINE_DEPTH;
    (0..WAVE_POINTS_PER_LINE)
        .map(|j| {
            let x = (j as f32 / WAVE_POINTS_PER_LINE as f32 - 0.5) * WAVE_LINE_WIDTH;
            Vec3::new(x, wave_height(line, x, time), z)
        })
        .collect()
}

/// Gentle sway of the whole wave group about Y.
#[inline]
pub fn wave_sway(time: f32) -> f32 {
    (time * 0.1).sin() * 0.05
}

/// All wave lines as line-list vertices in world space: the group sits
/// below the horizon, tilted toward the viewer.
pub fn wave_vertices(time: f32, color: Vec4, out: &mut Vec<LineVertex>) {
    let group = Quat::from_rotation_x(-std::f32::consts::PI / 10.0)
        * Quat::from_rotation_y(wave_sway(time));
    let offset = Vec3::new(0.0, -15.0, 0.0);
    for line in 0..WAVE_LINE_COUNT {
        let pts = wave_line(line, time);
        for seg in pts.windows(2) {
            out.push(LineVertex::new(group * seg[0] + offset, color));
            out.push(LineVertex::new(group * seg[1] + offset, color));
        }
    }
}
