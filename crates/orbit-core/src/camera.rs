//! Camera description and the follow controller that drives it.
//!
//! The controller has two modes. In overview the look-at point eases back to
//! the origin; while tracking it eases toward a body's live position. The eye
//! eases toward an externally chosen target in both modes. User orbit input
//! (drag, wheel, auto-rotate) is kept as offsets on top of that, clamped the
//! same way regardless of mode.

use crate::constants::*;
use crate::orbit::BodyId;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowMode {
    Overview,
    Tracking(BodyId),
}

/// Accumulated user orbit input around the look-at point.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub azimuth: f32,
    pub polar_delta: f32,
    pub zoom: f32,
    pub auto_rotate: bool,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar_delta: 0.0,
            zoom: 1.0,
            auto_rotate: true,
        }
    }
}

impl OrbitControls {
    /// Radians of auto-rotation per frame (a full turn takes 60/speed seconds
    /// at 60 fps, matching three.js orbit controls).
    #[inline]
    pub fn auto_rotate_step() -> f32 {
        std::f32::consts::TAU / 60.0 / 60.0 * AUTO_ROTATE_SPEED
    }

    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        self.azimuth -= dx_px * DRAG_RADIANS_PER_PX;
        self.polar_delta = (self.polar_delta - dy_px * DRAG_RADIANS_PER_PX)
            .clamp(-CONTROLS_MAX_POLAR, CONTROLS_MAX_POLAR);
    }

    /// Positive `steps` zooms in.
    pub fn wheel(&mut self, steps: f32) {
        self.zoom = (self.zoom * ZOOM_STEP.powf(steps)).clamp(0.05, 20.0);
    }

    pub fn reset(&mut self) {
        let auto_rotate = self.auto_rotate;
        *self = Self {
            auto_rotate,
            ..Self::default()
        };
    }

    fn advance(&mut self) {
        if self.auto_rotate {
            self.azimuth -= Self::auto_rotate_step();
        }
    }

    /// Pull `polar_delta` and `zoom` back to the values `apply` would clamp
    /// them to for this eye, so input past a limit is not stored.
    fn clamp_to(&mut self, eye: Vec3, look_at: Vec3) {
        let Some((radius, base_polar)) = spherical(eye - look_at) else {
            return;
        };
        self.polar_delta = self
            .polar_delta
            .clamp(CONTROLS_MIN_POLAR - base_polar, CONTROLS_MAX_POLAR - base_polar);
        self.zoom = self
            .zoom
            .clamp(CONTROLS_MIN_DISTANCE / radius, CONTROLS_MAX_DISTANCE / radius);
    }

    /// Apply offsets to an eye orbiting `look_at`, clamped to the allowed
    /// distance and polar range.
    pub fn apply(&self, eye: Vec3, look_at: Vec3) -> Vec3 {
        let offset = eye - look_at;
        let Some((radius, base_polar)) = spherical(offset) else {
            return eye;
        };
        let theta = offset.x.atan2(offset.z) + self.azimuth;
        let phi = (base_polar + self.polar_delta).clamp(CONTROLS_MIN_POLAR, CONTROLS_MAX_POLAR);
        let r = (radius * self.zoom).clamp(CONTROLS_MIN_DISTANCE, CONTROLS_MAX_DISTANCE);
        look_at + Vec3::new(r * phi.sin() * theta.sin(), r * phi.cos(), r * phi.sin() * theta.cos())
    }
}

/// Radius and polar angle (from +Y) of `offset`; `None` when degenerate.
fn spherical(offset: Vec3) -> Option<(f32, f32)> {
    let radius = offset.length();
    if radius < 1e-6 {
        return None;
    }
    Some((radius, (offset.y / radius).clamp(-1.0, 1.0).acos()))
}

/// Follow controller state: interpolated eye, look-at point and mode.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
    pub target_position: Vec3,
    pub mode: FollowMode,
    pub controls: OrbitControls,
    overview_position: Vec3,
}

impl CameraRig {
    pub fn new(overview_position: Vec3) -> Self {
        Self {
            position: overview_position,
            look_at: Vec3::ZERO,
            target_position: overview_position,
            mode: FollowMode::Overview,
            controls: OrbitControls::default(),
            overview_position,
        }
    }

    #[inline]
    pub fn overview_position(&self) -> Vec3 {
        self.overview_position
    }

    #[inline]
    pub fn tracked(&self) -> Option<BodyId> {
        match self.mode {
            FollowMode::Tracking(body) => Some(body),
            FollowMode::Overview => None,
        }
    }

    /// Overview -> tracking `body`; the eye heads for `target_position`.
    pub fn engage(&mut self, body: BodyId, target_position: Vec3) {
        self.mode = FollowMode::Tracking(body);
        self.target_position = target_position;
        self.controls.auto_rotate = false;
    }

    /// Tracking -> overview; the eye heads back to the overview position.
    pub fn disengage(&mut self) {
        self.mode = FollowMode::Overview;
        self.target_position = self.overview_position;
        self.controls.auto_rotate = true;
    }

    pub fn set_target_position(&mut self, target_position: Vec3) {
        self.target_position = target_position;
    }

    /// Snap to the current target and the canonical look-at, dropping any
    /// user orbit offsets. One-shot; the next `advance` interpolates again.
    pub fn force_reset(&mut self) {
        self.position = self.target_position;
        self.look_at = Vec3::ZERO;
        self.controls.reset();
    }

    /// One frame. `tracked_position` is the live world position of the
    /// tracked body, if any; it is ignored in overview.
    pub fn advance(&mut self, tracked_position: Option<Vec3>) {
        self.position = self.position.lerp(self.target_position, CAMERA_POSITION_LERP);
        match (self.mode, tracked_position) {
            (FollowMode::Tracking(_), Some(p)) => {
                self.look_at = self.look_at.lerp(p, LOOK_AT_TRACK_LERP);
            }
            (FollowMode::Tracking(_), None) => {}
            (FollowMode::Overview, _) => {
                self.look_at = self.look_at.lerp(Vec3::ZERO, LOOK_AT_RETURN_LERP);
            }
        }
        self.controls.advance();
    }

    /// User drag in CSS pixels.
    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        self.controls.drag(dx_px, dy_px);
        self.controls.clamp_to(self.position, self.look_at);
    }

    /// User wheel input; positive `steps` zooms in.
    pub fn wheel(&mut self, steps: f32) {
        self.controls.wheel(steps);
        self.controls.clamp_to(self.position, self.look_at);
    }

    /// Final eye after user orbit offsets and clamping.
    pub fn eye(&self) -> Vec3 {
        self.controls.apply(self.position, self.look_at)
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.look_at,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(initial_camera_position())
    }
}
