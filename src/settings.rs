//! User settings, persisted as JSON in the platform config directory.
//!
//! Every field has a default, so a partial or empty file is valid. A file
//! that fails to parse is reported and replaced by defaults rather than
//! aborting startup.

use crate::app::{ClientModel, InteractionMappings, PointerMapping};
use crate::colour::Colour;
use crate::constants::{
    ALTERNATE_TIMEOUT_MS, CONFIG_DIR_NAME, DEFAULT_COLOUR_HEX, LINE_WIDTH, MOVEMENT_THRESHOLD, POINT_SIZE,
    SCROLL_TRANSLATION_SCALING, SETTINGS_FILE_NAME,
};
use crate::error::{InkboardError, InkboardResult};
use crate::input::GestureConfig;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

static SETTINGS_PATH: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME)));

/// `<config dir>/inkboard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    SETTINGS_PATH.clone()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub alternate_timeout_ms: u64,
    pub movement_threshold: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            alternate_timeout_ms: ALTERNATE_TIMEOUT_MS,
            movement_threshold: MOVEMENT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    pub scroll_translation_scale: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            scroll_translation_scale: SCROLL_TRANSLATION_SCALING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    pub colour: String,
    pub point_size: f64,
    pub line_width: f64,
    pub smooth_strokes: bool,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            colour: DEFAULT_COLOUR_HEX.to_string(),
            point_size: POINT_SIZE,
            line_width: LINE_WIDTH,
            smooth_strokes: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub gesture: GestureSettings,
    pub navigation: NavigationSettings,
    pub drawing: DrawingSettings,
    pub pointer_mappings: Vec<PointerMapping>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gesture: GestureSettings::default(),
            navigation: NavigationSettings::default(),
            drawing: DrawingSettings::default(),
            pointer_mappings: PointerMapping::defaults(),
        }
    }
}

impl Settings {
    /// Load from the default location, or defaults if there is none.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("No config directory; using default settings");
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file gives defaults silently; an
    /// unreadable or malformed one gives defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(InkboardError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file; using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load settings; using defaults");
                Self::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> InkboardResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self) -> InkboardResult<()> {
        let path = default_settings_path().ok_or(InkboardError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Write atomically: serialize into a temp file next to `path`, then
    /// rename it over the target.
    pub fn save_to(&self, path: &Path) -> InkboardResult<()> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        file.persist(path).map_err(|e| InkboardError::Io(e.error))?;

        info!(path = %path.display(), "Settings saved");
        Ok(())
    }

    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            alternate_timeout: Duration::from_millis(self.gesture.alternate_timeout_ms),
            movement_threshold: self.gesture.movement_threshold,
        }
    }

    /// Drawing style. An unparseable colour falls back to the default.
    pub fn client_model(&self) -> ClientModel {
        let colour = Colour::from_hex(&self.drawing.colour).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid drawing colour in settings; using default");
            Colour::default()
        });

        ClientModel {
            colour,
            point_size: self.drawing.point_size,
            line_width: self.drawing.line_width,
            smooth_strokes: self.drawing.smooth_strokes,
        }
    }

    pub fn interaction_mappings(&self) -> InkboardResult<InteractionMappings> {
        InteractionMappings::from_rows(&self.pointer_mappings)
    }
}
