//! stlview - view an ASCII STL mesh in the terminal
//!
//! Controls:
//!   - W/S: Move forward/back    A/D: Strafe
//!   - R/F: Move up/down         Q/E: Roll
//!   - Left/Right: Yaw           Up/Down: Pitch
//!   - O/P: Field of view        X/Esc: Quit

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use stlview_core::{stl, Mesh, ShadeColor};
use stlview_terminal::{TerminalApp, ViewerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

impl From<ColorArg> for ShadeColor {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Black => ShadeColor::Black,
            ColorArg::Red => ShadeColor::Red,
            ColorArg::Green => ShadeColor::Green,
            ColorArg::Yellow => ShadeColor::Yellow,
            ColorArg::Blue => ShadeColor::Blue,
            ColorArg::Magenta => ShadeColor::Magenta,
            ColorArg::Cyan => ShadeColor::Cyan,
            ColorArg::White => ShadeColor::White,
            ColorArg::Default => ShadeColor::Default,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "stlview")]
#[command(version)]
#[command(about = "Render an ASCII STL mesh in the terminal")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// ASCII STL file to load
    file: PathBuf,

    /// Multiplier applied to every coordinate in the file
    scale: f64,

    /// Spin the mesh about its vertical axis every frame
    #[arg(short, long)]
    rotate: bool,

    /// Foreground color of the shaded mesh
    #[arg(long, value_enum, default_value_t = ColorArg::Green)]
    color: ColorArg,

    /// Starting camera X position
    #[arg(long, default_value_t = 1000.0)]
    camera_x: f64,

    /// Starting field of view
    #[arg(long, default_value_t = 100.0)]
    fov: f64,

    /// Starting yaw in degrees
    #[arg(long, default_value_t = -90.0)]
    yaw: f64,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

impl Cli {
    fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            rotate: self.rotate,
            shade_color: self.color.into(),
            camera_x: self.camera_x,
            fov: self.fov,
            yaw: self.yaw.to_radians(),
            ..ViewerConfig::default()
        }
    }
}

/// Stdout is the render surface, so logs go to a file when one is given.
/// Otherwise they go to stderr and default to warnings only.
fn init_tracing(cli: &Cli) -> Result<()> {
    let default_level = if cli.log_file.is_some() { "info" } else { "warn" };
    let filter = match cli.log_level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    };

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let triangles = stl::read_stl(&cli.file, cli.scale).context("failed to load mesh")?;
    let mesh = Mesh::from_triangles(triangles);
    tracing::info!(
        file = %cli.file.display(),
        triangles = mesh.len(),
        scale = cli.scale,
        "mesh loaded"
    );
    if mesh.is_empty() {
        tracing::warn!(file = %cli.file.display(), "no facets found, nothing will be drawn");
    }

    let mut app = TerminalApp::new(mesh, cli.viewer_config())?;
    app.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["stlview", "model.stl", "2.5"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("model.stl"));
        assert_eq!(cli.scale, 2.5);
        assert!(!cli.rotate);
        assert_eq!(cli.viewer_config(), ViewerConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "stlview", "model.stl", "-0.5", "-r", "--color", "cyan", "--yaw", "-45", "--fov", "250",
        ])
        .unwrap();
        assert_eq!(cli.scale, -0.5);
        let config = cli.viewer_config();
        assert!(config.rotate);
        assert_eq!(config.shade_color, ShadeColor::Cyan);
        assert_eq!(config.fov, 250.0);
        assert!((config.yaw - (-45.0_f64).to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_bad_scale_is_rejected() {
        assert!(Cli::try_parse_from(["stlview", "model.stl", "big"]).is_err());
        assert!(Cli::try_parse_from(["stlview", "model.stl"]).is_err());
    }
}
