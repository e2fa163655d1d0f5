// Shared visual tuning constants used by the web frontend and the core.

// Visual build parameters
pub const TOTAL_TUBES: usize = 40;
pub const TUBE_SIDES: u32 = 8;
pub const TUBE_SUBDIVISIONS: u32 = 300;
pub const TUBE_OPEN_ENDED: bool = false;

// Per-tube shader thickness range, sampled once at construction
pub const THICKNESS_MIN: f32 = 0.005;
pub const THICKNESS_MAX: f32 = 0.0075;

// Palette transition timing (seconds)
pub const RADIUS_TWEEN_DURATION: f32 = 0.5;
pub const STRENGTH_TWEEN_DURATION: f32 = 1.0;
pub const TRANSITION_DELAY_STEP: f32 = 0.004;

// Idle tube color before the first palette tap (#303030)
pub const BASE_COLOR: [f32; 3] = [0.188_235_3, 0.188_235_3, 0.188_235_3];

// Camera
pub const CAMERA_DISTANCE: f32 = 1.75;
pub const CAMERA_FOV_DEG: f32 = 65.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 10.0;

// Mouse parallax: max angular deflection and smoothing duration
pub const PARALLAX_ANGLE_OFFSET_DEG: f32 = 20.0;
pub const PARALLAX_SMOOTH_DURATION: f32 = 0.5;

// Frame throttle used when ?skipFrames is set (20 fps gate)
pub const FRAME_SKIP_INTERVAL_MS: f32 = 1000.0 / 20.0;

// Device pixel ratio cap when no override is given
pub const MAX_DPR: f32 = 2.0;
