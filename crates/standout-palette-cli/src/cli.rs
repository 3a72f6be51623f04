//! Argument parsing and command execution for the `palette` binary.
//!
//! Every command writes to the `out` handle it is given, so tests drive
//! [`run`] with a buffer instead of spawning the binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use standout_palette::{
    contrast_ratio, hex_to_rgb, invert_basic_palette, invert_full_palette,
    make_light_and_dark_themes, ColorRgb, ExportFormat, PaletteEnds, PaletteInput,
};

/// Generate palettes and light/dark themes from three seed colors.
#[derive(Debug, Parser)]
#[command(name = "palette", version, about)]
pub struct Cli {
    /// Log decisions (inversions, file loading) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value_t = ExportFormat::Yaml)]
    pub format: ExportFormat,

    /// Reject palettes with colors that are not #rrggbb or none
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the ten-color palette for a palette file
    Expand { file: PathBuf },

    /// Print the theme(s) built from a palette file
    Theme {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = ThemeMode::Both)]
        mode: ThemeMode,
    },

    /// Print the palette with background and text swapped
    Invert { file: PathBuf },

    /// Print the WCAG contrast ratio between two colors
    Contrast { first: String, second: String },

    /// Print whether a palette is light or dark
    Mode { file: PathBuf },
}

/// Which theme `palette theme` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Light,
    Dark,
    Both,
    /// Follow the OS preference
    Auto,
}

pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Command::Expand { file } => {
            let full = load(file, cli.strict)?.into_full();
            emit(out, cli.format, &full)
        }
        Command::Theme { file, mode } => {
            let pair = make_light_and_dark_themes(load(file, cli.strict)?);
            match mode {
                ThemeMode::Light => emit(out, cli.format, &pair.light),
                ThemeMode::Dark => emit(out, cli.format, &pair.dark),
                ThemeMode::Both => emit(out, cli.format, &pair),
                ThemeMode::Auto => emit(out, cli.format, pair.current()),
            }
        }
        Command::Invert { file } => match load(file, cli.strict)? {
            PaletteInput::Basic(basic) => emit(out, cli.format, &invert_basic_palette(&basic)),
            PaletteInput::Full(full) => emit(out, cli.format, &invert_full_palette(&full)),
        },
        Command::Contrast { first, second } => {
            let ratio = contrast_ratio(parse_color(first)?, parse_color(second)?);
            writeln!(out, "{:.2}", ratio)?;
            Ok(())
        }
        Command::Mode { file } => {
            let mode = load(file, cli.strict)?.into_full().mode();
            writeln!(out, "{}", mode)?;
            Ok(())
        }
    }
}

fn load(path: &Path, strict: bool) -> anyhow::Result<PaletteInput> {
    let input = PaletteInput::from_file(path)
        .with_context(|| format!("could not load palette from {}", path.display()))?;

    match input.validate() {
        Ok(()) => {}
        Err(err) if strict => return Err(err.into()),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "palette has malformed colors, entries derived from them will be none"
            );
        }
    }
    Ok(input)
}

fn parse_color(s: &str) -> anyhow::Result<ColorRgb> {
    hex_to_rgb(s).ok_or_else(|| anyhow!("invalid color '{}' (expected #rrggbb)", s))
}

fn emit<T: Serialize + ?Sized>(
    out: &mut impl Write,
    format: ExportFormat,
    value: &T,
) -> anyhow::Result<()> {
    let text = format.render(value)?;
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
