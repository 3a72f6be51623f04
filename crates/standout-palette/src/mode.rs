//! Light and dark color modes.
//!
//! [`ColorMode`] names the two modes a palette or theme can be in. Palettes
//! are classified by comparing the luminance of their background and text
//! seeds (see [`PaletteEnds::is_light`](crate::PaletteEnds::is_light)).
//!
//! [`detect_color_mode`] asks the OS which mode the user prefers, so an
//! application can pick the right half of a
//! [`ThemePair`](crate::ThemePair). Override it with [`set_mode_detector`]:
//!
//! ```rust
//! use standout_palette::{detect_color_mode, set_mode_detector, ColorMode};
//!
//! set_mode_detector(|| ColorMode::Dark);
//! assert_eq!(detect_color_mode(), ColorMode::Dark);
//! # set_mode_detector(|| ColorMode::Light);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A palette's or user's color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ColorMode {
    /// The other mode.
    pub fn opposite(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("unknown color mode '{}' (expected light or dark)", other)),
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used by [`detect_color_mode`].
///
/// Useful for tests, or for applications that let the user pin a mode.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores OS-based detection.
pub fn reset_mode_detector() {
    set_mode_detector(os_mode_detector);
}

/// Detects the user's preferred color mode.
///
/// Uses the `dark-light` crate to query the OS unless a detector was set with
/// [`set_mode_detector`]. When the OS does not say, this is
/// [`ColorMode::Light`].
pub fn detect_color_mode() -> ColorMode {
    let detector = *MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        Ok(OsThemeMode::Dark) => ColorMode::Dark,
        Ok(OsThemeMode::Light) | Ok(OsThemeMode::Unspecified) => ColorMode::Light,
        Err(err) => {
            tracing::debug!(error = ?err, "os color mode detection failed, using light");
            ColorMode::Light
        }
    }
}
