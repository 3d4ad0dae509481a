//! Application-wide constants.
//!
//! Centralizes tuning values for gestures, navigation and drawing so the
//! defaults in [`Settings`](crate::settings::Settings) and the adapters agree.

// ============================================================================
// Gestures
// ============================================================================

/// Window after a plain release in which a second press counts as alternate
pub const ALTERNATE_TIMEOUT_MS: u64 = 800;

/// Maximum pointer travel in pixels between release and alternate press
pub const MOVEMENT_THRESHOLD: f64 = 30.0;

/// Pressure reported for devices without pressure sensing
pub const DEFAULT_PRESSURE: f64 = 1.0;

// ============================================================================
// Navigation
// ============================================================================

/// Multiplier applied to primary scroll deltas before panning
pub const SCROLL_TRANSLATION_SCALING: f64 = 64.0;

/// Zoom limits (log2). Beyond these the projection loses precision or
/// overflows.
pub const MIN_SCALE: f64 = -64.0;
pub const MAX_SCALE: f64 = 64.0;

// ============================================================================
// Drawing
// ============================================================================

/// Screen-space radius of a tapped point at full pressure
pub const POINT_SIZE: f64 = 5.0;

/// Screen-space stroke width multiplier at full pressure
pub const LINE_WIDTH: f64 = 2.0;

/// Entities whose detail projects below this many pixels are culled
pub const DETAIL_THRESHOLD: f64 = 0.2;

/// Sample count when resampling a smoothed stroke
pub const SMOOTHING_SAMPLES: usize = 50;

/// Default entity colour, as stored in settings
pub const DEFAULT_COLOUR_HEX: &str = "#33b3b3";

/// How much selection outlines are lightened relative to blue
pub const SELECTION_LIGHTEN: f32 = 0.3;

// ============================================================================
// Performance
// ============================================================================

/// A single fold step slower than this is logged
pub const UPDATE_BUDGET_MS: f64 = 4.0;

/// Number of update timings kept for rolling statistics
pub const UPDATE_SAMPLE_COUNT: usize = 120;

// ============================================================================
// Files
// ============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "inkboard";

/// Settings file name inside [`CONFIG_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";
