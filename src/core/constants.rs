// Shared interaction/motion tuning constants used by the web frontend.

// Tilt maxima (degrees); Z is the subtle spin coupled to off-center distance
pub const MAX_TILT_X_DEG: f32 = 14.0;
pub const MAX_TILT_Y_DEG: f32 = 14.0;
pub const MAX_TILT_Z_DEG: f32 = 8.0;

// Per-frame lerp factor and the delta below which the loop snaps and stops
pub const SMOOTHING_FACTOR: f32 = 0.12;
pub const SMOOTHING_EPSILON_DEG: f32 = 0.01;

// Small screens get proportionally gentler tilt
pub const NARROW_VIEWPORT_PX: f32 = 480.0;
pub const NARROW_TILT_SCALE: f32 = 0.8;

// Release glide durations (ms); touch lifts are slightly snappier
pub const POINTER_RELEASE_MS: f64 = 600.0;
pub const TOUCH_RELEASE_MS: f64 = 500.0;

// Intro glide: simulated pointer parks near the top-right corner, then eases home
pub const INTRO_GLIDE_MS: f64 = 1500.0;
pub const INTRO_OFFSET_RIGHT_PX: f32 = 70.0;
pub const INTRO_OFFSET_TOP_PX: f32 = 60.0;

// Background parallax is mapped into a narrow band around center
pub const BACKGROUND_BAND_MIN_PCT: f32 = 35.0;
pub const BACKGROUND_BAND_MAX_PCT: f32 = 65.0;

// Device orientation mapping
pub const ORIENTATION_BETA_REST_DEG: f32 = 20.0; // typical in-hand pitch treated as neutral
pub const ORIENTATION_SENSITIVITY: f32 = 5.0; // px of synthetic pointer travel per degree

// Rolling gallery cylinder
pub const GALLERY_CYLINDER_WIDTH_PX: f32 = 2160.0;
pub const GALLERY_CYLINDER_WIDTH_NARROW_PX: f32 = 1320.0;
pub const GALLERY_NARROW_VIEWPORT_PX: f32 = 640.0;
pub const GALLERY_FACE_WIDTH_RATIO: f32 = 1.8; // faces overlap slightly for a denser ring
pub const GALLERY_DRAG_FACTOR: f32 = 0.05; // degrees of rotation per pixel dragged
pub const GALLERY_SPIN_PERIOD_SEC: f32 = 20.0; // one full revolution when autoplaying

// Text scramble cadence and noise tail
pub const SCRAMBLE_TICK_MS: f64 = 15.0;
pub const SCRAMBLE_NOISE_MAX: usize = 20;
pub const SCRAMBLE_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";
