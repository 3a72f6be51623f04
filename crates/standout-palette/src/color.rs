//! Color math on normalized RGB.
//!
//! Everything here is pure and infallible except [`hex_to_rgb`], which is the
//! boundary between palette text and numbers. It returns `None` instead of
//! an error; downstream functions assume a well-formed [`ColorRgb`].
//!
//! # Channels
//!
//! Channels are `f64` values conceptually in `0.0..=1.0`. They are not
//! clamped while doing math, so interpolation can extrapolate past either
//! end. Clamping only happens when encoding back to hex in [`rgb_to_hex`].
//!
//! # Luminance and contrast
//!
//! [`luminance`] and [`contrast_ratio`] follow the W3C definitions of
//! relative luminance and contrast ratio. Note that the sRGB decoding
//! threshold is the WCAG `0.03928`, not the `0.04045` of the sRGB standard.
//!
//! ```rust
//! use standout_palette::color::{contrast_ratio, hex_to_rgb};
//!
//! let white = hex_to_rgb("#ffffff").unwrap();
//! let black = hex_to_rgb("#000000").unwrap();
//! assert_eq!(contrast_ratio(white, black), 21.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::hex::ColorHex;

// ─── RGB type ───────────────────────────────────────────────────────────────

/// An RGB color with normalized channels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorRgb {
    /// Red channel (nominally 0.0–1.0).
    pub r: f64,
    /// Green channel (nominally 0.0–1.0).
    pub g: f64,
    /// Blue channel (nominally 0.0–1.0).
    pub b: f64,
}

impl ColorRgb {
    pub const BLACK: ColorRgb = ColorRgb::new(0.0, 0.0, 0.0);
    pub const WHITE: ColorRgb = ColorRgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Parses `#rrggbb`. See [`hex_to_rgb`].
    pub fn from_hex(s: &str) -> Option<Self> {
        hex_to_rgb(s)
    }

    /// Encodes as `#rrggbb`. See [`rgb_to_hex`].
    pub fn to_hex(self) -> ColorHex {
        rgb_to_hex(self)
    }

    /// Per-channel linear interpolation toward `other`. See [`color_lerp`].
    pub fn lerp(self, other: ColorRgb, t: f64) -> Self {
        color_lerp(self, other, t)
    }

    /// W3C relative luminance. See [`luminance`].
    pub fn luminance(self) -> f64 {
        luminance(self)
    }

    /// W3C contrast ratio against `other`. See [`contrast_ratio`].
    pub fn contrast_ratio(self, other: ColorRgb) -> f64 {
        contrast_ratio(self, other)
    }
}

// ─── Hex conversion ─────────────────────────────────────────────────────────

/// Parses a `#rrggbb` string into a color.
///
/// Valid only if the string is exactly 7 bytes, starts with `#` and the
/// remaining six characters are hex digits (either case). Each channel is the
/// parsed byte divided by 255.
///
/// Returns `None` for the `none` sentinel, the empty string, wrong lengths,
/// a missing `#`, and non-hex digits.
pub fn hex_to_rgb(s: &str) -> Option<ColorRgb> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(ColorRgb::from_u8(
        channel(0..2)?,
        channel(2..4)?,
        channel(4..6)?,
    ))
}

/// Scales a channel to a byte, rounding to nearest and clamping to 0–255.
fn channel_to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Encodes a color as a lowercase `#rrggbb` string.
///
/// Channels outside 0.0–1.0 are clamped silently, so this is not an exact
/// inverse of [`hex_to_rgb`] for out-of-range input:
///
/// ```rust
/// use standout_palette::color::{rgb_to_hex, ColorRgb};
///
/// assert_eq!(rgb_to_hex(ColorRgb::new(2.2, 0.0, -1.1)), "#ff0000");
/// ```
pub fn rgb_to_hex(c: ColorRgb) -> ColorHex {
    ColorHex::new(format!(
        "#{:02x}{:02x}{:02x}",
        channel_to_byte(c.r),
        channel_to_byte(c.g),
        channel_to_byte(c.b)
    ))
}

// ─── Interpolation ──────────────────────────────────────────────────────────

/// `a + (b - a) * t`. Not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linearly interpolates each channel independently.
///
/// `t = 0` yields `c1`, `t = 1` yields `c2`; values outside that range
/// extrapolate.
pub fn color_lerp(c1: ColorRgb, c2: ColorRgb, t: f64) -> ColorRgb {
    ColorRgb {
        r: lerp(c1.r, c2.r, t),
        g: lerp(c1.g, c2.g, t),
        b: lerp(c1.b, c2.b, t),
    }
}

/// Interpolates between two hex strings.
///
/// If either side does not parse (including `none`) the result is `none`.
pub fn color_lerp_hex(c1: &ColorHex, c2: &ColorHex, t: f64) -> ColorHex {
    match (c1.to_rgb(), c2.to_rgb()) {
        (Some(a), Some(b)) => rgb_to_hex(color_lerp(a, b, t)),
        _ => ColorHex::none(),
    }
}

// ─── Luminance & contrast ───────────────────────────────────────────────────

/// Gamma-decodes one channel using the WCAG threshold.
fn decode_channel(v: f64) -> f64 {
    if v < 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// W3C relative luminance: 0.0 for black, 1.0 for white.
pub fn luminance(c: ColorRgb) -> f64 {
    let r = decode_channel(c.r);
    let g = decode_channel(c.g);
    let b = decode_channel(c.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// W3C contrast ratio, `(L_lighter + 0.05) / (L_darker + 0.05)`.
///
/// Symmetric in its arguments. Ranges from 1.0 (identical luminance) to 21.0
/// (black on white).
pub fn contrast_ratio(c1: ColorRgb, c2: ColorRgb) -> f64 {
    let l1 = luminance(c1);
    let l2 = luminance(c2);
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(s: &str) -> ColorRgb {
        hex_to_rgb(s).unwrap()
    }

    // =====================================================================
    // Hex parsing
    // =====================================================================

    #[test]
    fn parses_known_values() {
        let pairs = [
            ("#ffff00", ColorRgb::new(1.0, 1.0, 0.0)),
            ("#000100", ColorRgb::new(0.0, 1.0 / 255.0, 0.0)),
            ("#000200", ColorRgb::new(0.0, 2.0 / 255.0, 0.0)),
            ("#000300", ColorRgb::new(0.0, 3.0 / 255.0, 0.0)),
            ("#008000", ColorRgb::new(0.0, 128.0 / 255.0, 0.0)),
            ("#00fe00", ColorRgb::new(0.0, 254.0 / 255.0, 0.0)),
            ("#00ff00", ColorRgb::new(0.0, 255.0 / 255.0, 0.0)),
        ];
        for (s, expected) in pairs {
            assert_eq!(hex_to_rgb(s), Some(expected), "{s} --> {expected:?}");
            assert_eq!(rgb_to_hex(expected), s, "{s} <-- {expected:?}");
        }
    }

    #[test]
    fn uppercase_digits_parse() {
        assert_eq!(hex_to_rgb("#FF0000"), Some(ColorRgb::new(1.0, 0.0, 0.0)));
        assert_eq!(rgb_to_hex(rgb("#ABCDEF")), "#abcdef");
    }

    #[test]
    fn rejects_malformed() {
        for s in [
            "", "none", "#f90", "#12345", "#1234567", ":123456", "red", "#12345g", "#+f0000",
            "#ff00é",
        ] {
            assert_eq!(hex_to_rgb(s), None, "{s:?} should not parse");
        }
    }

    // =====================================================================
    // Hex encoding
    // =====================================================================

    #[test]
    fn encode_clamps_out_of_range() {
        assert_eq!(rgb_to_hex(ColorRgb::new(2.2, 0.0, -1.1)), "#ff0000");
    }

    #[test]
    fn encode_rounds_half_up() {
        // 0.3 * 255 = 76.5
        assert_eq!(rgb_to_hex(ColorRgb::new(0.3, 0.3, 0.3)), "#4d4d4d");
    }

    #[test]
    fn encode_nan_does_not_panic() {
        assert_eq!(rgb_to_hex(ColorRgb::new(f64::NAN, 1.0, 0.0)), "#00ff00");
    }

    #[test]
    fn encode_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(ColorRgb::from_u8(1, 10, 171)), "#010aab");
    }

    // =====================================================================
    // Interpolation
    // =====================================================================

    #[test]
    fn lerp_endpoints() {
        let c1 = ColorRgb::new(0.0, 0.5, 0.0);
        let c2 = ColorRgb::new(1.0, 0.0, 0.2);
        assert_eq!(color_lerp(c1, c2, 0.0), c1);
        assert_eq!(color_lerp(c1, c2, 1.0), c2);
    }

    #[test]
    fn lerp_inside_range() {
        let c1 = ColorRgb::new(0.0, 0.5, 0.0);
        let c2 = ColorRgb::new(1.0, 0.0, 0.2);
        assert_eq!(color_lerp(c1, c2, 0.5), ColorRgb::new(0.5, 0.25, 0.1));
        assert_eq!(color_lerp(c1, c2, 0.25), ColorRgb::new(0.25, 0.375, 0.05));
    }

    #[test]
    fn lerp_past_one_is_not_clamped() {
        let c1 = ColorRgb::new(0.0, 0.5, 0.0);
        let c2 = ColorRgb::new(1.0, 0.0, 0.2);
        assert_eq!(color_lerp(c1, c2, 2.0), ColorRgb::new(2.0, -0.5, 0.4));
    }

    #[test]
    fn lerp_hex_propagates_none() {
        let white = ColorHex::new("#ffffff");
        assert!(color_lerp_hex(&white, &ColorHex::none(), 0.5).is_none());
        assert!(color_lerp_hex(&ColorHex::new("red"), &white, 0.5).is_none());
    }

    #[test]
    fn lerp_hex_midpoint() {
        let black = ColorHex::new("#000000");
        let white = ColorHex::new("#ffffff");
        assert_eq!(color_lerp_hex(&black, &white, 0.5), "#808080");
        assert_eq!(color_lerp_hex(&black, &white, 0.0), "#000000");
    }

    // =====================================================================
    // Luminance & contrast
    // =====================================================================

    #[test]
    fn luminance_black_is_zero() {
        assert_eq!(luminance(rgb("#000000")), 0.0);
    }

    #[test]
    fn luminance_white_is_one() {
        assert_eq!(luminance(rgb("#ffffff")), 1.0);
    }

    #[test]
    fn luminance_weights_green_most() {
        let red = luminance(rgb("#ff0000"));
        let green = luminance(rgb("#00ff00"));
        let blue = luminance(rgb("#0000ff"));
        assert!((red - 0.2126).abs() < 1e-9);
        assert!((green - 0.7152).abs() < 1e-9);
        assert!((blue - 0.0722).abs() < 1e-9);
    }

    #[test]
    fn luminance_uses_linear_segment_for_dark_channels() {
        let c = ColorRgb::new(0.03, 0.03, 0.03);
        assert!((luminance(c) - 0.03 / 12.92).abs() < 1e-12);
    }

    #[test]
    fn contrast_same_color_is_one() {
        let c = rgb("#ff9900");
        assert_eq!(contrast_ratio(c, c), 1.0);
    }

    #[test]
    fn contrast_black_white_is_21() {
        assert_eq!(contrast_ratio(rgb("#ffffff"), rgb("#000000")), 21.0);
        assert_eq!(contrast_ratio(rgb("#000000"), rgb("#ffffff")), 21.0);
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = rgb("#336699");
        let b = rgb("#f5deb3");
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!(contrast_ratio(a, b) > 1.0);
    }

    #[test]
    fn methods_delegate_to_free_functions() {
        let a = ColorRgb::from_hex("#336699").unwrap();
        assert_eq!(a.to_hex(), "#336699");
        assert_eq!(a.luminance(), luminance(a));
        assert_eq!(a.contrast_ratio(ColorRgb::WHITE), contrast_ratio(a, ColorRgb::WHITE));
        assert_eq!(a.lerp(ColorRgb::BLACK, 1.0), ColorRgb::BLACK);
    }
}
