use glam::Vec3;

// Shared scene tuning constants used by the web frontend and tests.

// Camera
pub const INITIAL_CAMERA_POSITION: [f32; 3] = [0.0, 6.0, 16.0]; // overview eye
pub const CAMERA_FOVY_DEGREES: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const FOCUS_CAMERA_HEIGHT: f32 = 3.5; // eye height while tracking a planet
pub const FOCUS_CAMERA_PULL: f32 = 0.5; // eye xz = planet xz * pull

// Per-frame exponential approach factors
pub const CAMERA_POSITION_LERP: f32 = 0.08;
pub const LOOK_AT_TRACK_LERP: f32 = 0.08;
pub const LOOK_AT_RETURN_LERP: f32 = 0.2;
pub const PLANET_RADIUS_LERP: f32 = 0.05; // launch ramp
pub const PLANET_SCALE_LERP: f32 = 0.1;

// Orbit controls
pub const CONTROLS_MIN_DISTANCE: f32 = 4.0;
pub const CONTROLS_MAX_DISTANCE: f32 = 50.0;
pub const CONTROLS_MIN_POLAR: f32 = std::f32::consts::PI / 3.0;
pub const CONTROLS_MAX_POLAR: f32 = std::f32::consts::PI / 1.5;
pub const AUTO_ROTATE_SPEED: f32 = 0.3; // 30s per orbit at 60fps when 2.0
pub const DRAG_RADIANS_PER_PX: f32 = 0.005;
pub const ZOOM_STEP: f32 = 0.95;

// Global speed
pub const OVERVIEW_SPEED: f32 = 1.0;
pub const FOCUS_SPEED: f32 = 0.5;

// Bodies
pub const CORE_SCALE: f32 = 1.2;
pub const CORE_SPIN_PER_FRAME: f32 = 0.003;
pub const PLANET_SPIN_PER_FRAME: f32 = 0.005;
pub const PLANET_BODY_RADIUS: f32 = 0.4;
pub const PLANET_PICK_RADIUS: f32 = 0.65; // invisible hit sphere around the planet
pub const PLANET_HOVER_SCALE: f32 = 1.5;
pub const PLANET_ACTIVE_SCALE: f32 = 1.2;
pub const SATELLITE_ORBIT_RADIUS: f32 = 1.0;
pub const SATELLITE_BASE_SPEED: f32 = 0.5;
pub const SATELLITE_SPIN_PER_FRAME: f32 = 0.05;
pub const SATELLITE_BODY_RADIUS: f32 = 0.15;
pub const SATELLITE_PICK_RADIUS: f32 = 0.3;
pub const SATELLITE_VERTICAL_FREQ: f32 = 1.5;
pub const SATELLITE_VERTICAL_AMPLITUDE: f32 = 0.3; // fraction of orbit radius

// Trails
pub const PLANET_TRAIL_LENGTH: usize = 8;
pub const SATELLITE_TRAIL_LENGTH: usize = 15;

// Backdrop
pub const STAR_COUNT: usize = 6000;
pub const STAR_RADIUS: f32 = 80.0;
pub const STAR_DEPTH: f32 = 60.0;
pub const STAR_SPIN_PER_FRAME: f32 = 0.0001;
pub const STAR_SEED: u64 = 42;
pub const WAVE_LINE_COUNT: usize = 40;
pub const WAVE_POINTS_PER_LINE: usize = 100;
pub const WAVE_LINE_WIDTH: f32 = 150.0;
pub const WAVE_LINE_DEPTH: f32 = 150.0;

// Fog (world units from the eye)
pub const FOG_NEAR: f32 = 15.0;
pub const FOG_FAR: f32 = 35.0;

// Launch delay before planets spread out from the core
pub const LAUNCH_DELAY_MS: i32 = 100;

#[inline]
pub fn initial_camera_position() -> Vec3 {
    Vec3::from_array(INITIAL_CAMERA_POSITION)
}
