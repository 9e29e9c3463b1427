// DOM ids and visual tuning for the web frontend

// Element ids expected in the host page
pub const HOLOGRAM_CANVAS_ID: &str = "hologram-canvas";
pub const CURSOR_ID: &str = "hand-cursor";
pub const HAND_STATUS_ID: &str = "hand-status";
pub const SUIT_NAME_ID: &str = "suit-name";
pub const SUIT_TIER_ID: &str = "suit-tier";
pub const MODULES_ID: &str = "suit-modules";
pub const TELEMETRY_ID: &str = "telemetry";
pub const EXPORT_BUTTON_ID: &str = "export-card";
pub const INTRO_OVERLAY_ID: &str = "intro-overlay";
pub const COLOR_INPUT_ID: &str = "armor-color";
// View buttons are `view-front`, `view-side`, ...
pub const VIEW_BUTTON_PREFIX: &str = "view-";
pub const SCROLL_PANEL_IDS: [&str; 2] = ["left-panel", "right-panel"];

// Intro overlay lifetime
pub const INTRO_MS: i32 = 1400;

// Hologram palette
pub const BACKGROUND: &str = "#040712";
pub const GROUND_COLOR: &str = "rgba(76, 232, 255, 0.18)";
pub const VISOR_COLOR: &str = "#111b29";
pub const CORE_COLOR: &str = "#56f5ff";
pub const ACTIVE_LINE_WIDTH: f64 = 2.2;
pub const IDLE_LINE_WIDTH: f64 = 1.1;
pub const IDLE_ALPHA: f32 = 0.55;

// Ground disc under the suit
pub const GROUND_RADIUS: f32 = 4.2;
pub const GROUND_Y: f32 = -1.78;
pub const GROUND_STEPS: usize = 48;

// Telemetry bars saturate at this value
pub const TELEMETRY_BAR_MAX: u32 = 100;

// Cursor overlay grows while pinching
pub const CURSOR_PINCH_SCALE: f32 = 1.5;

// Power card palette
pub const CARD_BG_FROM: &str = "#060814";
pub const CARD_BG_TO: &str = "#07172b";
pub const CARD_BORDER_RINGS: u32 = 12;
pub const CARD_TITLE_FONT: &str = "700 56px Orbitron, sans-serif";
pub const CARD_BODY_FONT: &str = "400 30px Orbitron, sans-serif";
pub const CARD_ROW_FONT: &str = "400 26px Orbitron, sans-serif";
pub const CARD_TIER_FONT: &str = "700 52px Orbitron, sans-serif";
pub const CARD_FOOTER_FONT: &str = "400 24px Orbitron, sans-serif";
pub const CARD_BAR_FROM: &str = "#57f8ff";
pub const CARD_BAR_TO: &str = "#1e91ff";
