//! Per-body orbital motion.
//!
//! Each body owns a phase accumulator that only advances while the body is not
//! hovered, so pausing and resuming never makes a body jump along its path.

use crate::catalog::CategoryId;
use crate::constants::*;
use glam::{Vec3, Vec4};

/// Stable identity of a pickable body in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Core,
    Planet(CategoryId),
    /// Project satellite: parent category and index into its project list.
    Satellite(CategoryId, usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitPath {
    /// Flat circle in the XZ plane.
    Planar,
    /// Closed ellipse-like loop with a vertical wobble at 1.5x the orbit rate.
    Tilted,
}

/// Evaluate an orbit path at phase `t` for the given radius.
#[inline]
pub fn evaluate(path: OrbitPath, t: f32, radius: f32) -> Vec3 {
    match path {
        OrbitPath::Planar => Vec3::new(t.cos() * radius, 0.0, t.sin() * radius),
        OrbitPath::Tilted => Vec3::new(
            t.cos() * radius,
            (t * SATELLITE_VERTICAL_FREQ).sin() * radius * SATELLITE_VERTICAL_AMPLITUDE,
            t.sin() * radius,
        ),
    }
}

#[derive(Clone, Debug)]
pub struct OrbitingBody {
    pub path: OrbitPath,
    pub orbit_radius: f32,
    /// Base angular speed in radians per second at multiplier 1.
    pub angular_speed: f32,
    pub color: Vec4,
    pub phase_offset: f32,
    pub hovered: bool,
    pub accumulated_time: f32,
    /// Euler spin (x, y, z) in radians.
    pub rotation: Vec3,
    /// Radius actually used this frame; ramps toward `orbit_radius` once launched.
    pub current_radius: f32,
    pub scale: f32,
    spin_axes: Vec3,
    position: Vec3,
}

impl OrbitingBody {
    /// A category planet. It starts collapsed at the origin and spreads out
    /// once the scene is launched.
    pub fn planet(radius: f32, speed: f32, color: Vec4, initial_delay: f32) -> Self {
        Self {
            path: OrbitPath::Planar,
            orbit_radius: radius,
            angular_speed: speed,
            color,
            phase_offset: 0.0,
            hovered: false,
            accumulated_time: initial_delay,
            rotation: Vec3::ZERO,
            current_radius: 0.0,
            scale: 1.0,
            spin_axes: Vec3::new(0.0, PLANET_SPIN_PER_FRAME, 0.0),
            position: Vec3::ZERO,
        }
    }

    /// Satellite `index` of `count`, spaced evenly around its parent.
    pub fn satellite(index: usize, count: usize, color: Vec4) -> Self {
        let phase = std::f32::consts::TAU / count.max(1) as f32 * index as f32;
        let mut body = Self {
            path: OrbitPath::Tilted,
            orbit_radius: SATELLITE_ORBIT_RADIUS,
            angular_speed: SATELLITE_BASE_SPEED,
            color,
            phase_offset: phase,
            hovered: false,
            accumulated_time: 0.0,
            rotation: Vec3::ZERO,
            current_radius: SATELLITE_ORBIT_RADIUS,
            scale: 1.0,
            spin_axes: Vec3::new(SATELLITE_SPIN_PER_FRAME, SATELLITE_SPIN_PER_FRAME, 0.0),
            position: Vec3::ZERO,
        };
        body.position = body.evaluate_now();
        body
    }

    /// Jump the launch ramp to its end state.
    pub fn settle(&mut self) {
        self.current_radius = self.orbit_radius;
        self.position = self.evaluate_now();
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.accumulated_time + self.phase_offset
    }

    /// Hovered bodies are frozen regardless of the global multiplier.
    #[inline]
    pub fn effective_speed(&self, global_speed: f32) -> f32 {
        if self.hovered {
            0.0
        } else {
            global_speed
        }
    }

    /// Position relative to the orbit centre, as of the last advance.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    fn evaluate_now(&self) -> Vec3 {
        evaluate(self.path, self.phase(), self.current_radius)
    }

    /// Advance one frame. `launched` only matters for the planar launch ramp.
    pub fn advance(&mut self, dt_sec: f32, global_speed: f32, launched: bool) {
        let speed = self.effective_speed(global_speed);
        if speed <= 0.0 {
            return;
        }
        self.accumulated_time += dt_sec.max(0.0) * self.angular_speed * speed;
        if self.path == OrbitPath::Planar {
            let target = if launched { self.orbit_radius } else { 0.0 };
            self.current_radius = approach(self.current_radius, target, PLANET_RADIUS_LERP);
        }
        self.position = self.evaluate_now();
        self.rotation += self.spin_axes * speed;
    }

    /// Scale keeps easing even while hovered; only motion freezes.
    pub fn approach_scale(&mut self, target: f32, factor: f32) {
        self.scale = approach(self.scale, target, factor);
    }
}

/// One step of exponential approach, snapping once within float noise.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    let next = current + (target - current) * factor;
    if (target - next).abs() < 1e-5 {
        target
    } else {
        next
    }
}

/// Per-category planet layout: (orbit radius, angular speed, initial delay).
pub fn planet_layout(category: CategoryId) -> (f32, f32, f32) {
    match category {
        CategoryId::Design => (3.5, 0.25, 0.0),
        CategoryId::Tech => (5.5, 0.15, 0.5),
        CategoryId::Business => (7.5, 0.1, 1.0),
    }
}
