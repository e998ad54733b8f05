// DOM wiring and interaction tuning for the web front-end.

// Element ids shared with index.html and the page templates
pub const CANVAS_ID: &str = "app-canvas";
pub const PAGE_ID: &str = "page";
pub const HUD_ID: &str = "hud";
pub const PANEL_ID: &str = "detail-panel";
pub const LABELS_ID: &str = "labels";
pub const WORKER_STATUS_ID: &str = "worker-status";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const MAIN_ROOT_ID: &str = "main-root";

// Pointer handling
pub const DRAG_THRESHOLD_PX: f32 = 4.0; // CSS px of travel before a press turns into a drag
pub const WHEEL_PX_PER_STEP: f32 = 100.0;

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after the tab was hidden
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Start page backdrop
pub const START_CAMERA_POSITION: [f32; 3] = [0.0, 5.0, 30.0];
pub const START_CAMERA_FOVY_DEGREES: f32 = 70.0;
pub const START_STAR_COUNT: usize = 5000;
pub const START_STAR_RADIUS: f32 = 100.0;
pub const START_STAR_DEPTH: f32 = 50.0;
pub const START_STAR_SPIN_PER_SEC: f32 = 0.01;
pub const START_BACKGROUND_HEX: &str = "#000000";

// Bloom
pub const BLOOM_THRESHOLD: f32 = 1.0; // HDR luminance; only emissive bodies exceed it
pub const BLOOM_STRENGTH: f32 = 0.85;
