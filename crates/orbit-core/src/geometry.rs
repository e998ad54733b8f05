//! GPU-facing vertex and instance layouts, plus small builders for line
//! geometry. Kept here so the layouts can be checked by host tests.

use glam::{Vec3, Vec4};

/// Colored vertex used for stars (point list) and all line-list geometry.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

impl LineVertex {
    #[inline]
    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            size: 1.0,
            color: color.to_array(),
        }
    }
}

/// One glowing body billboard.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    /// x: emissive intensity, y: spin angle, z: facet count, w: unused
    pub params: [f32; 4],
}

/// Append a polyline as line-list segments. `colors` must match `points`.
pub fn push_polyline(out: &mut Vec<LineVertex>, points: &[Vec3], colors: &[Vec4]) {
    for (p, c) in points.windows(2).zip(colors.windows(2)) {
        out.push(LineVertex::new(p[0], c[0]));
        out.push(LineVertex::new(p[1], c[1]));
    }
}

/// Flat ring in the XZ plane centred on the origin, as line-list segments.
pub fn push_ring(out: &mut Vec<LineVertex>, radius: f32, segments: usize, color: Vec4) {
    let segments = segments.max(3);
    let point = |i: usize| {
        let a = std::f32::consts::TAU * (i % segments) as f32 / segments as f32;
        Vec3::new(a.cos() * radius, 0.0, a.sin() * radius)
    };
    for i in 0..segments {
        out.push(LineVertex::new(point(i), color));
        out.push(LineVertex::new(point(i + 1), color));
    }
}
