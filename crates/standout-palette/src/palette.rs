//! Palette generation and light/dark inversion.
//!
//! A palette is a set of colors that have not been assigned roles yet. Users
//! pick three seeds in a [`BasicPalette`]:
//!
//! | Seed  | Meaning                          |
//! |-------|----------------------------------|
//! | `gr6` | background (white in light mode) |
//! | `gr0` | text (black in light mode)       |
//! | `ac3` | accent                           |
//!
//! [`make_full_palette`] expands them into a ten-color [`FullPalette`]: a
//! seven-step gray ramp `gr0..=gr6` and a three-step accent ramp `ac2..=ac4`.
//! The interior steps are interpolated at fixed positions that were tuned by
//! eye for a perceptually even gradient (see [`GRAY_STEPS`] and
//! [`ACCENT_STEP`]). They are part of the palette format: changing them
//! changes every derived color.
//!
//! # Inversion
//!
//! Light and dark palettes are related by swapping `gr0` and `gr6`.
//! [`invert_full_palette`] does not reverse the stored ramp. It takes the
//! seeds, swaps them, and expands again, so the interior steps sit at the
//! same tuned positions measured from the new text color. Inverting twice
//! gives back exactly what expanding the original seeds gives.
//!
//! ```rust
//! use standout_palette::{invert_full_palette, make_full_palette, BasicPalette};
//!
//! let seeds = BasicPalette::new("#ffffff", "#000000", "#ff0000");
//! let light = make_full_palette(&seeds);
//! assert_eq!(light.gr2, "#4d4d4d");
//!
//! let dark = invert_full_palette(&light);
//! assert_eq!(dark.gr6, "#000000");
//! assert_eq!(dark.gr2, "#b3b3b3");
//!
//! assert_eq!(invert_full_palette(&dark), light);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{color_lerp_hex, luminance};
use crate::error::{PaletteError, Result};
use crate::hex::ColorHex;
use crate::mode::ColorMode;

/// Interior gray positions, from `gr0` (0.0) toward `gr6` (1.0).
pub const GRAY_STEPS: [(Slot, f64); 5] = [
    (Slot::Gr5, 0.79),
    (Slot::Gr4, 0.60),
    (Slot::Gr3, 0.44),
    (Slot::Gr2, 0.30),
    (Slot::Gr1, 0.16),
];

/// How far `ac4` moves from `ac3` toward `gr6`, and `ac2` toward `gr0`.
pub const ACCENT_STEP: f64 = 0.31;

// ─── Slots ──────────────────────────────────────────────────────────────────

/// Names one of the ten entries of a [`FullPalette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Gr0,
    Gr1,
    Gr2,
    Gr3,
    Gr4,
    Gr5,
    Gr6,
    Ac2,
    Ac3,
    Ac4,
}

impl Slot {
    pub const ALL: [Slot; 10] = [
        Slot::Gr6,
        Slot::Gr5,
        Slot::Gr4,
        Slot::Gr3,
        Slot::Gr2,
        Slot::Gr1,
        Slot::Gr0,
        Slot::Ac4,
        Slot::Ac3,
        Slot::Ac2,
    ];

    /// The seed slots that make up a [`BasicPalette`].
    pub const SEEDS: [Slot; 3] = [Slot::Gr6, Slot::Gr0, Slot::Ac3];

    pub const fn name(self) -> &'static str {
        match self {
            Slot::Gr0 => "gr0",
            Slot::Gr1 => "gr1",
            Slot::Gr2 => "gr2",
            Slot::Gr3 => "gr3",
            Slot::Gr4 => "gr4",
            Slot::Gr5 => "gr5",
            Slot::Gr6 => "gr6",
            Slot::Ac2 => "ac2",
            Slot::Ac3 => "ac3",
            Slot::Ac4 => "ac4",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.name() == s)
            .ok_or_else(|| format!("unknown palette slot '{}'", s))
    }
}

// ─── Palettes ───────────────────────────────────────────────────────────────

/// The three seed colors a palette is generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicPalette {
    /// Background (white, in light mode).
    pub gr6: ColorHex,
    /// Text (black, in light mode).
    pub gr0: ColorHex,
    /// Accent color.
    pub ac3: ColorHex,
}

impl BasicPalette {
    pub fn new(
        gr6: impl Into<ColorHex>,
        gr0: impl Into<ColorHex>,
        ac3: impl Into<ColorHex>,
    ) -> Self {
        Self {
            gr6: gr6.into(),
            gr0: gr0.into(),
            ac3: ac3.into(),
        }
    }

    /// Expands into a [`FullPalette`]. See [`make_full_palette`].
    pub fn expand(&self) -> FullPalette {
        make_full_palette(self)
    }

    /// Swaps background and text. See [`invert_basic_palette`].
    pub fn invert(&self) -> BasicPalette {
        invert_basic_palette(self)
    }

    /// Checks that every seed is `#rrggbb` or `none`.
    ///
    /// The generator itself accepts anything and turns unparseable seeds into
    /// `none`; this is for callers that want to reject such input up front.
    pub fn validate(&self) -> Result<()> {
        validate_slots([
            (Slot::Gr6, &self.gr6),
            (Slot::Gr0, &self.gr0),
            (Slot::Ac3, &self.ac3),
        ])
    }
}

/// A generated ten-color palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullPalette {
    /// Background (white, in light mode).
    pub gr6: ColorHex,
    pub gr5: ColorHex,
    pub gr4: ColorHex,
    /// Middle gray.
    pub gr3: ColorHex,
    pub gr2: ColorHex,
    pub gr1: ColorHex,
    /// Text (black, in light mode).
    pub gr0: ColorHex,

    /// Accent, lighter.
    pub ac4: ColorHex,
    /// Accent.
    pub ac3: ColorHex,
    /// Accent, darker.
    pub ac2: ColorHex,
}

impl FullPalette {
    /// Returns the color in `slot`.
    pub fn get(&self, slot: Slot) -> &ColorHex {
        match slot {
            Slot::Gr0 => &self.gr0,
            Slot::Gr1 => &self.gr1,
            Slot::Gr2 => &self.gr2,
            Slot::Gr3 => &self.gr3,
            Slot::Gr4 => &self.gr4,
            Slot::Gr5 => &self.gr5,
            Slot::Gr6 => &self.gr6,
            Slot::Ac2 => &self.ac2,
            Slot::Ac3 => &self.ac3,
            Slot::Ac4 => &self.ac4,
        }
    }

    /// All ten entries in [`Slot::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (Slot, &ColorHex)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// The seed colors this palette was (or could have been) expanded from.
    pub fn basic(&self) -> BasicPalette {
        BasicPalette {
            gr6: self.gr6.clone(),
            gr0: self.gr0.clone(),
            ac3: self.ac3.clone(),
        }
    }

    /// Swaps light and dark by regenerating. See [`invert_full_palette`].
    pub fn invert(&self) -> FullPalette {
        invert_full_palette(self)
    }

    /// Checks that every entry is `#rrggbb` or `none`.
    pub fn validate(&self) -> Result<()> {
        validate_slots(self.entries())
    }
}

fn validate_slots<'a>(slots: impl IntoIterator<Item = (Slot, &'a ColorHex)>) -> Result<()> {
    for (slot, color) in slots {
        if !color.is_well_formed() {
            return Err(PaletteError::InvalidColor {
                slot: slot.name(),
                value: color.to_string(),
            });
        }
    }
    Ok(())
}

// ─── Light / dark classification ────────────────────────────────────────────

/// Access to the background and text ends of a palette.
///
/// Implemented by every palette-shaped type so they can all be classified
/// as light or dark the same way.
pub trait PaletteEnds {
    /// Background color.
    fn gr6(&self) -> &ColorHex;

    /// Text color.
    fn gr0(&self) -> &ColorHex;

    /// True when the background is brighter than the text.
    ///
    /// If either end does not parse, reports light.
    fn is_light(&self) -> bool {
        match (self.gr0().to_rgb(), self.gr6().to_rgb()) {
            (Some(text), Some(background)) => luminance(background) > luminance(text),
            _ => true,
        }
    }

    fn mode(&self) -> ColorMode {
        if self.is_light() {
            ColorMode::Light
        } else {
            ColorMode::Dark
        }
    }
}

impl PaletteEnds for BasicPalette {
    fn gr6(&self) -> &ColorHex {
        &self.gr6
    }

    fn gr0(&self) -> &ColorHex {
        &self.gr0
    }
}

impl PaletteEnds for FullPalette {
    fn gr6(&self) -> &ColorHex {
        &self.gr6
    }

    fn gr0(&self) -> &ColorHex {
        &self.gr0
    }
}

/// True when the palette's background is brighter than its text.
pub fn palette_is_light<P: PaletteEnds + ?Sized>(palette: &P) -> bool {
    palette.is_light()
}

// ─── Generation ─────────────────────────────────────────────────────────────

/// Expands three seeds into the ten-color palette.
///
/// `gr0`, `gr6` and `ac3` are copied verbatim. If a seed does not parse, the
/// steps derived from it come out as `none`.
pub fn make_full_palette(basic: &BasicPalette) -> FullPalette {
    let gray = |t: f64| color_lerp_hex(&basic.gr0, &basic.gr6, t);
    let [gr5, gr4, gr3, gr2, gr1] = GRAY_STEPS.map(|(_, t)| gray(t));

    let full = FullPalette {
        gr6: basic.gr6.clone(),
        gr5,
        gr4,
        gr3,
        gr2,
        gr1,
        gr0: basic.gr0.clone(),

        ac4: color_lerp_hex(&basic.ac3, &basic.gr6, ACCENT_STEP),
        ac3: basic.ac3.clone(),
        ac2: color_lerp_hex(&basic.ac3, &basic.gr0, ACCENT_STEP),
    };
    tracing::trace!(gr6 = %full.gr6, gr0 = %full.gr0, ac3 = %full.ac3, "expanded palette");
    full
}

// ─── Inversion ──────────────────────────────────────────────────────────────

/// Swaps `gr0` and `gr6`; the accent stays.
pub fn invert_basic_palette(basic: &BasicPalette) -> BasicPalette {
    BasicPalette {
        gr6: basic.gr0.clone(),
        gr0: basic.gr6.clone(),
        ac3: basic.ac3.clone(),
    }
}

/// Inverts by regenerating from the swapped seeds.
///
/// Interior entries of the input are discarded; the result always equals
/// `make_full_palette(&invert_basic_palette(&full.basic()))`.
pub fn invert_full_palette(full: &FullPalette) -> FullPalette {
    tracing::debug!(gr6 = %full.gr6, gr0 = %full.gr0, "inverting full palette");
    make_full_palette(&invert_basic_palette(&full.basic()))
}

/// Returns the palette in `mode`, inverting once if it is not already.
pub fn force_basic_palette_to_mode(basic: &BasicPalette, mode: ColorMode) -> BasicPalette {
    if basic.mode() == mode {
        basic.clone()
    } else {
        tracing::debug!(target_mode = %mode, "inverting basic palette");
        invert_basic_palette(basic)
    }
}

/// Returns the palette in `mode`, regenerating it inverted if it is not
/// already. A palette already in `mode` is returned unchanged, including
/// any hand-edited interior steps.
pub fn force_full_palette_to_mode(full: &FullPalette, mode: ColorMode) -> FullPalette {
    if full.mode() == mode {
        full.clone()
    } else {
        invert_full_palette(full)
    }
}

pub fn force_basic_palette_to_light_mode(basic: &BasicPalette) -> BasicPalette {
    force_basic_palette_to_mode(basic, ColorMode::Light)
}

pub fn force_basic_palette_to_dark_mode(basic: &BasicPalette) -> BasicPalette {
    force_basic_palette_to_mode(basic, ColorMode::Dark)
}

pub fn force_full_palette_to_light_mode(full: &FullPalette) -> FullPalette {
    force_full_palette_to_mode(full, ColorMode::Light)
}

pub fn force_full_palette_to_dark_mode(full: &FullPalette) -> FullPalette {
    force_full_palette_to_mode(full, ColorMode::Dark)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
