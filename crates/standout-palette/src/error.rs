//! Error types for palette loading, validation and export.
//!
//! Color math itself never fails: unparseable colors turn into "no value"
//! and propagate. Only the ambient layer (files, strict validation, output
//! encoding) reports errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading, validating or exporting palettes.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// YAML or JSON content could not be parsed into a palette.
    #[error("failed to parse palette{}: {message}", display_path(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// File loading error.
    #[error("{message}")]
    Load { message: String },

    /// The palette file extension is not one we know how to read.
    #[error("unsupported palette format '{extension}' (expected yaml, yml or json)")]
    UnsupportedFormat { extension: String },

    /// A seed color is neither `#rrggbb` nor the literal `none`.
    #[error("invalid color '{value}' for {slot} (expected #rrggbb or none)")]
    InvalidColor { slot: &'static str, value: String },

    /// Output serialization failed.
    #[error("failed to encode output: {0}")]
    Encode(String),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl From<serde_json::Error> for PaletteError {
    fn from(err: serde_json::Error) -> Self {
        PaletteError::Encode(err.to_string())
    }
}

impl From<serde_yaml::Error> for PaletteError {
    fn from(err: serde_yaml::Error) -> Self {
        PaletteError::Encode(err.to_string())
    }
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_mentions_path_when_known() {
        let err = PaletteError::Parse {
            path: Some(PathBuf::from("seeds/ocean.yaml")),
            message: "missing field `ac3`".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse palette seeds/ocean.yaml: missing field `ac3`"
        );
    }

    #[test]
    fn parse_error_without_path() {
        let err = PaletteError::Parse {
            path: None,
            message: "bad".into(),
        };
        assert_eq!(err.to_string(), "failed to parse palette: bad");
    }

    #[test]
    fn invalid_color_names_slot() {
        let err = PaletteError::InvalidColor {
            slot: "gr6",
            value: "#f90".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid color '#f90' for gr6 (expected #rrggbb or none)"
        );
    }
}
