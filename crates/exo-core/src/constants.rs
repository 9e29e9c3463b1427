use glam::Vec3;

// Shared gesture/scene tuning constants used by both the core and the web frontend.

// Landmark layout (MediaPipe hand model)
pub const LANDMARKS_PER_HAND: usize = 21;
pub const MAX_HANDS: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const PALM_CENTER: usize = 9; // middle-finger MCP, stable palm proxy

// Cursor smoothing
pub const CURSOR_ALPHA_ONE_HAND: f32 = 0.28;
pub const CURSOR_ALPHA_TWO_HANDS: f32 = 0.22; // two-hand gestures dominate intent
pub const CURSOR_DEAD_ZONE: f32 = 0.0025; // per-axis, normalized units

// Pinch
pub const PINCH_THRESHOLD: f32 = 0.045;
pub const DOUBLE_PINCH_WINDOW_MS: u64 = 280;

// Swipe: threshold = base + min(|dy|, cap)
pub const SWIPE_BASE_THRESHOLD: f32 = 0.022;
pub const SWIPE_VERTICAL_CAP: f32 = 0.018;

// Velocity gains
pub const ROTATION_GAIN: f32 = 5.2;
pub const ZOOM_GAIN: f32 = 3.7;
pub const SCROLL_GAIN: f32 = 14.0;

// Detector pass-through
pub const DETECTOR_MODEL_COMPLEXITY: u8 = 1;
pub const DETECTOR_MIN_DETECTION_CONFIDENCE: f32 = 0.72;
pub const DETECTOR_MIN_TRACKING_CONFIDENCE: f32 = 0.68;

// Variants per suit section
pub const VARIANTS_PER_SECTION: u8 = 3;

// Tier breakpoints (inclusive lower bounds)
pub const TIER_S_MIN: u32 = 320;
pub const TIER_A_MIN: u32 = 260;
pub const TIER_B_MIN: u32 = 200;

// Camera rig
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 1.2, 0.0);
pub const CAMERA_MIN_DISTANCE: f32 = 2.6;
pub const CAMERA_MAX_DISTANCE: f32 = 7.2;
pub const CAMERA_FOVY_DEG: f32 = 42.0;
pub const ARMOR_IDLE_SPIN: f32 = 0.0035; // radians per frame
pub const ARMOR_SPIN_PER_ROTATION: f32 = 0.012;
pub const ZOOM_VELOCITY_EPSILON: f32 = 0.0002;
pub const ZOOM_STEP_SCALE: f32 = 0.35;
pub const VIEW_TWEEN_STEP: f32 = 0.08;

// Default armor tint
pub const DEFAULT_ARMOR_COLOR: [u8; 3] = [0x5a, 0xf3, 0xff];

// Power card
pub const CARD_WIDTH: u32 = 1080;
pub const CARD_HEIGHT: u32 = 1350;
pub const CARD_STAT_FULL_SCALE: f32 = 140.0; // stat value that fills a bar
pub const PREVIEW_SIZE: u32 = 900; // square offscreen armor render
pub const PREVIEW_EYE: Vec3 = Vec3::new(1.8, 2.3, 4.7);
pub const PREVIEW_TARGET: Vec3 = Vec3::new(0.0, 1.1, 0.0);
pub const PREVIEW_FOVY_DEG: f32 = 40.0;
