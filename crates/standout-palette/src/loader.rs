//! Reading palettes from YAML and JSON.
//!
//! Palette files hold the three seeds, or all ten entries of a full palette:
//!
//! ```yaml
//! gr6: "#fdf6e3"
//! gr0: "#073642"
//! ac3: "#268bd2"
//! ```
//!
//! Colors are strings, so YAML needs them quoted (`#` starts a comment).
//! Loading does not validate colors; call
//! [`BasicPalette::validate`](crate::BasicPalette::validate) when malformed
//! seeds should be an error rather than turn into `none`.
//!
//! ```rust
//! use standout_palette::BasicPalette;
//!
//! let seeds = BasicPalette::from_yaml(r##"
//! gr6: "#fdf6e3"
//! gr0: "#073642"
//! ac3: "#268bd2"
//! "##).unwrap();
//! assert_eq!(seeds.ac3, "#268bd2");
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{PaletteError, Result};
use crate::palette::BasicPalette;
use crate::theme::PaletteInput;

/// Source formats for palette files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            "json" => Ok(SourceFormat::Json),
            _ => Err(PaletteError::UnsupportedFormat { extension }),
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str, path: Option<&Path>) -> Result<T> {
        let parsed = match self {
            SourceFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            SourceFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| PaletteError::Parse {
            path: path.map(Path::to_path_buf),
            message,
        })
    }
}

fn read_file(path: &Path) -> Result<(SourceFormat, String)> {
    let format = SourceFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| PaletteError::Load {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading palette file");
    Ok((format, content))
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let (format, content) = read_file(path)?;
    format.parse(&content, Some(path))
}

impl BasicPalette {
    /// Parses seeds from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Parse`] if the content is not a map with
    /// `gr6`, `gr0` and `ac3` strings.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        SourceFormat::Yaml.parse(yaml, None)
    }

    /// Parses seeds from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        SourceFormat::Json.parse(json, None)
    }

    /// Loads seeds from a `.yaml`, `.yml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns a [`PaletteError`] if the extension is unknown, or the file
    /// cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file(path.as_ref())
    }
}

impl PaletteInput {
    /// Parses a basic or full palette from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        SourceFormat::Yaml.parse(yaml, None)
    }

    /// Parses a basic or full palette from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        SourceFormat::Json.parse(json, None)
    }

    /// Loads a basic or full palette from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file(path.as_ref())
    }

    /// Checks every color in the palette. See
    /// [`BasicPalette::validate`](crate::BasicPalette::validate).
    pub fn validate(&self) -> Result<()> {
        match self {
            PaletteInput::Basic(basic) => basic.validate(),
            PaletteInput::Full(full) => full.validate(),
        }
    }
}

/// A palette file that was read from disk, kept with its path so it can be
/// reloaded after edits.
#[derive(Debug, Clone)]
pub struct PaletteFile {
    path: PathBuf,
    input: PaletteInput,
}

impl PaletteFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let input = load_file(&path)?;
        Ok(Self { path, input })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn input(&self) -> &PaletteInput {
        &self.input
    }

    pub fn into_input(self) -> PaletteInput {
        self.input
    }

    /// Re-reads the file. On error the previously loaded palette is kept.
    pub fn refresh(&mut self) -> Result<()> {
        self.input = load_file(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::make_full_palette;
    use std::io::Write;

    const SEEDS_YAML: &str = r##"
gr6: "#ffffff"
gr0: "#000000"
ac3: "#ff0000"
"##;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn yaml_seeds() {
        let seeds = BasicPalette::from_yaml(SEEDS_YAML).unwrap();
        assert_eq!(seeds, BasicPalette::new("#ffffff", "#000000", "#ff0000"));
    }

    #[test]
    fn json_seeds() {
        let seeds =
            BasicPalette::from_json(r##"{"gr6": "#ffffff", "gr0": "#000000", "ac3": "none"}"##)
                .unwrap();
        assert!(seeds.ac3.is_none());
    }

    #[test]
    fn missing_seed_is_parse_error() {
        let err = BasicPalette::from_yaml("gr6: \"#ffffff\"\n").unwrap_err();
        assert!(matches!(err, PaletteError::Parse { path: None, .. }), "{err:?}");
    }

    #[test]
    fn malformed_color_loads_verbatim() {
        let seeds = BasicPalette::from_yaml("gr6: red\ngr0: \"#000000\"\nac3: \"#f90\"\n").unwrap();
        assert_eq!(seeds.gr6, "red");
        assert!(seeds.validate().is_err());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(SourceFormat::from_path(Path::new("a.YML")).unwrap(), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("a.json")).unwrap(), SourceFormat::Json);
        assert!(matches!(
            SourceFormat::from_path(Path::new("a.toml")),
            Err(PaletteError::UnsupportedFormat { extension }) if extension == "toml"
        ));
        assert!(SourceFormat::from_path(Path::new("palette")).is_err());
    }

    #[test]
    fn loads_yaml_file() {
        let file = write_temp(".yaml", SEEDS_YAML);
        let seeds = BasicPalette::from_file(file.path()).unwrap();
        assert_eq!(seeds.gr0, "#000000");
    }

    #[test]
    fn parse_error_carries_path() {
        let file = write_temp(".json", "{ not json");
        match BasicPalette::from_file(file.path()).unwrap_err() {
            PaletteError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BasicPalette::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, PaletteError::Load { .. }));
    }

    #[test]
    fn input_detects_full_palette() {
        let full = make_full_palette(&BasicPalette::from_yaml(SEEDS_YAML).unwrap());
        let json = serde_json::to_string(&full).unwrap();
        assert_eq!(PaletteInput::from_json(&json).unwrap(), PaletteInput::Full(full));
        assert!(!PaletteInput::from_yaml(SEEDS_YAML).unwrap().is_full());
    }

    #[test]
    fn palette_file_refresh() {
        let file = write_temp(".yaml", SEEDS_YAML);
        let mut loaded = PaletteFile::open(file.path()).unwrap();
        assert!(!loaded.input().is_full());

        let full = make_full_palette(&BasicPalette::from_yaml(SEEDS_YAML).unwrap());
        std::fs::write(file.path(), serde_yaml::to_string(&full).unwrap()).unwrap();

        loaded.refresh().unwrap();
        assert_eq!(loaded.input(), &PaletteInput::Full(full));
        assert_eq!(loaded.path(), file.path());
    }

    #[test]
    fn failed_refresh_keeps_previous() {
        let file = write_temp(".yaml", SEEDS_YAML);
        let mut loaded = PaletteFile::open(file.path()).unwrap();
        std::fs::write(file.path(), "gr6: [").unwrap();

        assert!(loaded.refresh().is_err());
        assert_eq!(
            loaded.into_input(),
            PaletteInput::Basic(BasicPalette::new("#ffffff", "#000000", "#ff0000"))
        );
    }
}
