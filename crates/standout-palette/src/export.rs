//! Flat exports of palettes and themes.
//!
//! Styling systems usually want a plain `name -> color` map (CSS custom
//! properties, template variables). [`FullPalette::to_hex_map`] and
//! [`Theme::to_hex_map`] produce one keyed by the same names used when
//! serializing. [`ExportFormat`] renders any palette type as JSON or YAML.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::color::{rgb_to_hex, ColorRgb};
use crate::error::Result;
use crate::hex::ColorHex;
use crate::palette::FullPalette;
use crate::theme::Theme;

/// Encodes a map of optional colors, writing `none` for missing ones.
pub fn color_map_to_hex_map<K>(colors: &BTreeMap<K, Option<ColorRgb>>) -> BTreeMap<K, ColorHex>
where
    K: Ord + Clone,
{
    colors
        .iter()
        .map(|(k, c)| (k.clone(), c.map(rgb_to_hex).unwrap_or_default()))
        .collect()
}

impl FullPalette {
    /// The ten entries keyed by slot name (`gr0`, ..., `ac4`).
    pub fn to_hex_map(&self) -> BTreeMap<String, String> {
        self.entries()
            .map(|(slot, color)| (slot.name().to_string(), color.to_string()))
            .collect()
    }
}

impl Theme {
    /// The palette entries and roles keyed by their serialized names
    /// (`gr3`, `faintText`, ...).
    pub fn to_hex_map(&self) -> BTreeMap<String, String> {
        let mut map = self.palette.to_hex_map();
        map.extend(
            self.roles()
                .map(|(role, color)| (role.name().to_string(), color.to_string())),
        );
        map
    }
}

/// Text formats palettes and themes can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Json,
    #[default]
    Yaml,
}

impl ExportFormat {
    /// Serializes `value` in this format.
    pub fn render<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
        let out = match self {
            ExportFormat::Json => serde_json::to_string_pretty(value)?,
            ExportFormat::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(out)
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(format!("unknown format '{}' (expected json or yaml)", other)),
        }
    }
}
