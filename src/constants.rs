// Scene
pub const CAMERA_DISTANCE: f64 = 15.0;
pub const CAMERA_FOV_DEG: f64 = 60.0;
pub const CAMERA_AUTO_ROTATE_SPEED: f64 = 0.3;
pub const TEXTURE_SIZE: u32 = 512;
/// World units of vertical lift per scrolled pixel, before the body's own multiplier.
pub const SCENE_SCROLL_FACTOR: f64 = 0.002;

// Scroll thresholds (px)
pub const SCENE_SCROLL_THRESHOLD: f64 = 0.5;
pub const BACKGROUND_SCROLL_THRESHOLD: f64 = 1.0;

// Background parallax: (x, y) multipliers of the scroll offset
pub const RADIAL_PARALLAX: (f64, f64) = (0.0, 0.3);
pub const GRID_PARALLAX: (f64, f64) = (0.0, 0.5);
pub const BLOB_PARALLAX: [(f64, f64); 3] = [(0.2, 0.4), (-0.3, -0.2), (-0.25, 0.35)];
pub const PARTICLE_COUNT: usize = 15;
pub const PARTICLE_BASE_PARALLAX: f64 = 0.1;
pub const PARTICLE_PARALLAX_STEP: f64 = 0.02;

// Layout
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;
pub const MOBILE_HEADER_SCROLL: f64 = 600.0;
pub const SCROLL_SPY_LINE: f64 = 150.0;
pub const DRAWER_SCROLL_DELAY_MS: u32 = 300;

// Card tilt
pub const CARD_MAX_TILT_DEG: f64 = 17.5;

// Lazy sections
pub const LAZY_THRESHOLD: f64 = 0.1;
pub const LAZY_ROOT_MARGIN: &str = "50px";

// Résumé button timing (ms)
pub const CV_PROCESSING_DELAY_MS: u32 = 1000;
pub const CV_DONE_RESET_MS: u32 = 3000;

/// Section ids in page order. Scroll spy picks the first one that spans the spy line.
pub const SECTION_IDS: [&str; 7] = ["home", "about", "skills", "experience", "services", "projects", "contact"];

// Theme
pub const ACCENT_COLOR: &str = "#10b981";
pub const PAGE_BACKGROUND: &str = "#020617";
