//! Hex color strings.
//!
//! Palettes store their colors as text: either a 7-character `#rrggbb`
//! string or the sentinel `none` (no color, transparent). [`ColorHex`] keeps
//! that text verbatim so seed colors survive expansion byte for byte, and
//! parses on demand through [`ColorHex::to_rgb`].
//!
//! Anything that is not `#` followed by six hex digits is "no renderable
//! color". Callers treat an unparseable string and `none` the same way.
//!
//! ```rust
//! use standout_palette::ColorHex;
//!
//! let accent = ColorHex::new("#ff9900");
//! assert!(accent.to_rgb().is_some());
//!
//! assert!(ColorHex::none().to_rgb().is_none());
//! assert!(ColorHex::new("#f90").to_rgb().is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{hex_to_rgb, ColorRgb};
use crate::error::PaletteError;

/// The sentinel string meaning "no color".
pub const NONE: &str = "none";

/// A palette color as text: `#rrggbb` or `none`.
///
/// Construction with [`ColorHex::new`] (or `From<&str>`) never fails and
/// stores the string as given. Use [`FromStr`] when the value should be
/// rejected unless it is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorHex(String);

impl ColorHex {
    /// Wraps a color string without checking it.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The `none` sentinel.
    pub fn none() -> Self {
        Self(NONE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the literal `none`.
    pub fn is_none(&self) -> bool {
        self.0 == NONE
    }

    /// True if this string parses to a color.
    pub fn is_renderable(&self) -> bool {
        self.to_rgb().is_some()
    }

    /// Parses the color. `None` for `none` and for anything malformed.
    pub fn to_rgb(&self) -> Option<ColorRgb> {
        hex_to_rgb(&self.0)
    }

    /// True if this is a well-formed `#rrggbb` string or the literal `none`.
    pub fn is_well_formed(&self) -> bool {
        self.is_none() || self.is_renderable()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for ColorHex {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorHex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorHex {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ColorHex {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<ColorRgb> for ColorHex {
    fn from(c: ColorRgb) -> Self {
        c.to_hex()
    }
}

impl PartialEq<str> for ColorHex {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColorHex {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Strict parse: accepts `#rrggbb` (either case) or `none`, with no
/// surrounding whitespace.
impl FromStr for ColorHex {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = ColorHex::new(s);
        if hex.is_well_formed() {
            Ok(hex)
        } else {
            Err(PaletteError::InvalidColor {
                slot: "color",
                value: s.to_string(),
            })
        }
    }
}
