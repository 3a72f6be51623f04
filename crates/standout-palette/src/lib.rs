//! # Standout Palette - Seed Colors to Light and Dark Themes
//!
//! `standout-palette` turns three seed colors into a ten-entry palette and a
//! set of semantic UI colors, for both light and dark mode.
//!
//! ## Core Concepts
//!
//! - [`BasicPalette`]: the seeds. `gr6` is the background, `gr0` the text and
//!   `ac3` the accent
//! - [`FullPalette`]: seeds plus five gray steps and two accent variants
//! - [`Theme`]: a full palette plus fourteen [`Role`]s (page, link, buttons...)
//! - [`ThemePair`]: the light and dark themes built from one palette
//! - [`ColorMode`]: light or dark, decided by comparing seed luminance
//! - [`ColorHex`]: `#rrggbb` strings, with `none` for colors that could not be
//!   computed
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_palette::{make_light_and_dark_themes, BasicPalette, ColorMode, PaletteEnds};
//!
//! let pair = make_light_and_dark_themes(BasicPalette::new("#ffffff", "#000000", "#ff0000"));
//!
//! assert_eq!(pair.light.card, "#ffffff");
//! assert_eq!(pair.light.page, "#c9c9c9");
//! assert_eq!(pair.light.faint_text, "#707070");
//! assert_eq!(pair.dark.card, "#000000");
//! assert_eq!(pair.dark.page, "#363636");
//! assert_eq!(pair.dark.mode(), ColorMode::Dark);
//! ```
//!
//! ## Gray Ramp
//!
//! Gray steps are interpolated from text (`gr0`) toward background (`gr6`):
//!
//! | Slot  | Position | Used by                        |
//! |-------|----------|--------------------------------|
//! | `gr5` | 0.79     | `page`                         |
//! | `gr4` | 0.60     | `textInputBorder`              |
//! | `gr3` | 0.44     | `faintText`, `quietButtonBg`   |
//! | `gr2` | 0.30     |                                |
//! | `gr1` | 0.16     |                                |
//!
//! Accent variants move `ac3` by 31% toward the background (`ac4`) or the text
//! (`ac2`). Dark palettes come from swapping the seeds and recomputing, so a
//! palette inverted twice is back where it started.
//!
//! ## Files
//!
//! Palettes load from YAML or JSON, and every type serializes back:
//!
//! ```rust
//! use standout_palette::{make_full_palette, BasicPalette, ExportFormat};
//!
//! let seeds = BasicPalette::from_yaml(r##"
//! gr6: "#f5f5f5"
//! gr0: "#1a1a1a"
//! ac3: "#0070f3"
//! "##).unwrap();
//!
//! let full = make_full_palette(&seeds);
//! assert_eq!(full.ac2, "#0855b0");
//!
//! let json = ExportFormat::Json.render(&full).unwrap();
//! assert!(json.contains("\"gr3\": \"#7a7a7a\""));
//! ```

pub mod color;
mod error;
pub mod export;
mod hex;
pub mod loader;
pub mod mode;
pub mod palette;
pub mod theme;

// Error type
pub use error::{PaletteError, Result};

// Color primitives
pub use color::{
    color_lerp, color_lerp_hex, contrast_ratio, hex_to_rgb, lerp, luminance, rgb_to_hex, ColorRgb,
};
pub use hex::{ColorHex, NONE};

// Palettes
pub use palette::{
    force_basic_palette_to_dark_mode, force_basic_palette_to_light_mode,
    force_basic_palette_to_mode, force_full_palette_to_dark_mode,
    force_full_palette_to_light_mode, force_full_palette_to_mode, invert_basic_palette,
    invert_full_palette, make_full_palette, palette_is_light, BasicPalette, FullPalette,
    PaletteEnds, Slot, ACCENT_STEP, GRAY_STEPS,
};

// Themes
pub use theme::{make_light_and_dark_themes, make_theme, PaletteInput, Role, Theme, ThemePair};

// Mode detection
pub use mode::{detect_color_mode, reset_mode_detector, set_mode_detector, ColorMode};

// Loading and export
pub use export::{color_map_to_hex_map, ExportFormat};
pub use loader::{PaletteFile, SourceFormat};
