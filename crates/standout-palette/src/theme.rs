//! Themes: palette colors assigned to UI roles.
//!
//! A theme is a full palette plus a fixed set of named roles (page
//! background, link, button parts, text input parts). Every role is a copy
//! of one palette entry or `none`; nothing is computed here.
//!
//! The role table, brightest roles first in light mode:
//!
//! | Role                | Source |
//! |---------------------|--------|
//! | `card`              | `gr6`  |
//! | `page`              | `gr5`  |
//! | `link`              | `ac3`  |
//! | `faintText`         | `gr3`  |
//! | `text`              | `gr0`  |
//! | `quietButtonBg`     | `gr3`  |
//! | `quietButtonBorder` | none   |
//! | `quietButtonText`   | `gr6`  |
//! | `loudButtonBg`      | `ac2`  |
//! | `loudButtonBorder`  | none   |
//! | `loudButtonText`    | `gr6`  |
//! | `textInputBg`       | none   |
//! | `textInputBorder`   | `gr4`  |
//! | `textInputText`     | `gr0`  |
//!
//! Themes come in pairs. [`make_light_and_dark_themes`] keeps the input
//! palette for its own mode and builds the other theme from the regenerated
//! inverted palette, not by swapping role assignments.
//!
//! ```rust
//! use standout_palette::{make_light_and_dark_themes, BasicPalette, ColorMode};
//!
//! let pair = make_light_and_dark_themes(BasicPalette::new("#ffffff", "#000000", "#0070f3"));
//! assert_eq!(pair.light.page, "#c9c9c9");
//! assert_eq!(pair.dark.page, "#363636");
//! assert_eq!(pair.get(ColorMode::Dark).text, "#ffffff");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::hex::ColorHex;
use crate::mode::{detect_color_mode, ColorMode};
use crate::palette::{
    invert_full_palette, make_full_palette, BasicPalette, FullPalette, PaletteEnds, Slot,
};

// ─── Roles ──────────────────────────────────────────────────────────────────

/// A named UI role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Card,
    Page,
    Link,
    FaintText,
    Text,
    QuietButtonBg,
    QuietButtonBorder,
    QuietButtonText,
    LoudButtonBg,
    LoudButtonBorder,
    LoudButtonText,
    TextInputBg,
    TextInputBorder,
    TextInputText,
}

impl Role {
    pub const ALL: [Role; 14] = [
        Role::Card,
        Role::Page,
        Role::Link,
        Role::FaintText,
        Role::Text,
        Role::QuietButtonBg,
        Role::QuietButtonBorder,
        Role::QuietButtonText,
        Role::LoudButtonBg,
        Role::LoudButtonBorder,
        Role::LoudButtonText,
        Role::TextInputBg,
        Role::TextInputBorder,
        Role::TextInputText,
    ];

    /// The key used when serializing a theme.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Card => "card",
            Role::Page => "page",
            Role::Link => "link",
            Role::FaintText => "faintText",
            Role::Text => "text",
            Role::QuietButtonBg => "quietButtonBg",
            Role::QuietButtonBorder => "quietButtonBorder",
            Role::QuietButtonText => "quietButtonText",
            Role::LoudButtonBg => "loudButtonBg",
            Role::LoudButtonBorder => "loudButtonBorder",
            Role::LoudButtonText => "loudButtonText",
            Role::TextInputBg => "textInputBg",
            Role::TextInputBorder => "textInputBorder",
            Role::TextInputText => "textInputText",
        }
    }

    /// The palette entry this role copies, or `None` for roles that are
    /// always `none`.
    pub const fn source(self) -> Option<Slot> {
        match self {
            Role::Card => Some(Slot::Gr6),
            Role::Page => Some(Slot::Gr5),
            Role::Link => Some(Slot::Ac3),
            Role::FaintText => Some(Slot::Gr3),
            Role::Text => Some(Slot::Gr0),
            Role::QuietButtonBg => Some(Slot::Gr3),
            Role::QuietButtonBorder => None,
            Role::QuietButtonText => Some(Slot::Gr6),
            Role::LoudButtonBg => Some(Slot::Ac2),
            Role::LoudButtonBorder => None,
            Role::LoudButtonText => Some(Slot::Gr6),
            Role::TextInputBg => None,
            Role::TextInputBorder => Some(Slot::Gr4),
            Role::TextInputText => Some(Slot::Gr0),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| format!("unknown theme role '{}'", s))
    }
}

// ─── Theme ──────────────────────────────────────────────────────────────────

/// A full palette with colors assigned to UI roles.
///
/// Serializes flat: the ten palette keys next to the fourteen role keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// The raw palette colors.
    #[serde(flatten)]
    pub palette: FullPalette,

    // brightest in light mode
    pub card: ColorHex,
    pub page: ColorHex,
    pub link: ColorHex,
    pub faint_text: ColorHex,
    pub text: ColorHex,

    pub quiet_button_bg: ColorHex,
    pub quiet_button_border: ColorHex,
    pub quiet_button_text: ColorHex,

    pub loud_button_bg: ColorHex,
    pub loud_button_border: ColorHex,
    pub loud_button_text: ColorHex,

    pub text_input_bg: ColorHex,
    pub text_input_border: ColorHex,
    pub text_input_text: ColorHex,
}

impl Theme {
    /// Returns the color assigned to `role`.
    pub fn get(&self, role: Role) -> &ColorHex {
        match role {
            Role::Card => &self.card,
            Role::Page => &self.page,
            Role::Link => &self.link,
            Role::FaintText => &self.faint_text,
            Role::Text => &self.text,
            Role::QuietButtonBg => &self.quiet_button_bg,
            Role::QuietButtonBorder => &self.quiet_button_border,
            Role::QuietButtonText => &self.quiet_button_text,
            Role::LoudButtonBg => &self.loud_button_bg,
            Role::LoudButtonBorder => &self.loud_button_border,
            Role::LoudButtonText => &self.loud_button_text,
            Role::TextInputBg => &self.text_input_bg,
            Role::TextInputBorder => &self.text_input_border,
            Role::TextInputText => &self.text_input_text,
        }
    }

    /// All fourteen roles in [`Role::ALL`] order.
    pub fn roles(&self) -> impl Iterator<Item = (Role, &ColorHex)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

impl PaletteEnds for Theme {
    fn gr6(&self) -> &ColorHex {
        &self.palette.gr6
    }

    fn gr0(&self) -> &ColorHex {
        &self.palette.gr0
    }
}

/// Assigns palette colors to roles.
pub fn make_theme(p: &FullPalette) -> Theme {
    Theme {
        palette: p.clone(),

        card: p.gr6.clone(),
        page: p.gr5.clone(),
        link: p.ac3.clone(),
        faint_text: p.gr3.clone(),
        text: p.gr0.clone(),

        quiet_button_bg: p.gr3.clone(),
        quiet_button_border: ColorHex::none(),
        quiet_button_text: p.gr6.clone(),

        loud_button_bg: p.ac2.clone(),
        loud_button_border: ColorHex::none(),
        loud_button_text: p.gr6.clone(),

        text_input_bg: ColorHex::none(),
        text_input_border: p.gr4.clone(),
        text_input_text: p.gr0.clone(),
    }
}

// ─── Light & dark pairs ─────────────────────────────────────────────────────

/// Either kind of palette, as accepted by [`make_light_and_dark_themes`].
///
/// When deserializing, a map that has the interior gray step `gr1` is read
/// as a full palette (and must then have all ten entries); anything else is
/// read as three seeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaletteInput {
    Basic(BasicPalette),
    Full(FullPalette),
}

impl PaletteInput {
    /// Expands to a full palette if needed.
    pub fn into_full(self) -> FullPalette {
        match self {
            PaletteInput::Basic(basic) => make_full_palette(&basic),
            PaletteInput::Full(full) => full,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, PaletteInput::Full(_))
    }
}

impl From<BasicPalette> for PaletteInput {
    fn from(p: BasicPalette) -> Self {
        PaletteInput::Basic(p)
    }
}

impl From<FullPalette> for PaletteInput {
    fn from(p: FullPalette) -> Self {
        PaletteInput::Full(p)
    }
}

impl From<&BasicPalette> for PaletteInput {
    fn from(p: &BasicPalette) -> Self {
        PaletteInput::Basic(p.clone())
    }
}

impl From<&FullPalette> for PaletteInput {
    fn from(p: &FullPalette) -> Self {
        PaletteInput::Full(p.clone())
    }
}

impl<'de> Deserialize<'de> for PaletteInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            gr6: ColorHex,
            gr5: Option<ColorHex>,
            gr4: Option<ColorHex>,
            gr3: Option<ColorHex>,
            gr2: Option<ColorHex>,
            gr1: Option<ColorHex>,
            gr0: ColorHex,
            ac4: Option<ColorHex>,
            ac3: ColorHex,
            ac2: Option<ColorHex>,
        }

        fn required<E: de::Error>(
            value: Option<ColorHex>,
            field: &'static str,
        ) -> Result<ColorHex, E> {
            value.ok_or_else(|| E::missing_field(field))
        }

        let raw = Raw::deserialize(deserializer)?;
        let Some(gr1) = raw.gr1 else {
            return Ok(PaletteInput::Basic(BasicPalette {
                gr6: raw.gr6,
                gr0: raw.gr0,
                ac3: raw.ac3,
            }));
        };

        Ok(PaletteInput::Full(FullPalette {
            gr6: raw.gr6,
            gr5: required(raw.gr5, "gr5")?,
            gr4: required(raw.gr4, "gr4")?,
            gr3: required(raw.gr3, "gr3")?,
            gr2: required(raw.gr2, "gr2")?,
            gr1,
            gr0: raw.gr0,
            ac4: required(raw.ac4, "ac4")?,
            ac3: raw.ac3,
            ac2: required(raw.ac2, "ac2")?,
        }))
    }
}

/// A light theme and its dark counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePair {
    #[serde(rename = "lightTheme")]
    pub light: Theme,
    #[serde(rename = "darkTheme")]
    pub dark: Theme,
}

impl ThemePair {
    pub fn get(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// The theme matching the user's preferred mode.
    ///
    /// See [`detect_color_mode`].
    pub fn current(&self) -> &Theme {
        self.get(detect_color_mode())
    }

    pub fn into_theme(self, mode: ColorMode) -> Theme {
        match mode {
            ColorMode::Light => self.light,
            ColorMode::Dark => self.dark,
        }
    }
}

/// Builds the light and dark themes for a palette.
///
/// Basic palettes are expanded first. The input is used as is for the theme
/// matching its own mode, and the other theme gets [`invert_full_palette`]
/// of it, so hand-edited interior steps survive on the input's side only.
///
/// A palette whose ends have equal luminance classifies as dark, so it
/// becomes the dark theme and its inversion (still not light) becomes the
/// light theme.
pub fn make_light_and_dark_themes(p: impl Into<PaletteInput>) -> ThemePair {
    let input = p.into();
    let was_full = input.is_full();
    let full = input.into_full();
    let input_mode = full.mode();
    let (light, dark) = match input_mode {
        ColorMode::Light => {
            let dark = invert_full_palette(&full);
            (full, dark)
        }
        ColorMode::Dark => (invert_full_palette(&full), full),
    };
    tracing::debug!(
        full_input = was_full,
        %input_mode,
        background = %light.gr6,
        text = %light.gr0,
        "built light and dark themes"
    );

    ThemePair {
        light: make_theme(&light),
        dark: make_theme(&dark),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
