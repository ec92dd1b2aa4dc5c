// src/config.rs

use crate::model::lattice::{LatticeError, LatticeParameters, MassClass};
use crate::rendering::surface::Rgb;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

// --- Lattice ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeSettings {
  pub spacing: f64,
  pub mass_light: f64,
  pub mass_heavy: f64,
  pub atom_count: usize,
  /// Starting q; `None` means π / (2a)
  pub initial_wavenumber: Option<f64>,
}

impl Default for LatticeSettings {
  fn default() -> Self {
    Self {
      spacing: 100.0,
      mass_light: 1.0,
      mass_heavy: 2.0,
      atom_count: 7,
      initial_wavenumber: None,
    }
  }
}

impl LatticeSettings {
  pub fn to_parameters(&self) -> Result<LatticeParameters, LatticeError> {
    LatticeParameters::new(
      self.spacing,
      self.mass_light,
      self.mass_heavy,
      self.atom_count,
      self.initial_wavenumber,
    )
  }
}

// --- ChainStyle ---

/// Lattice parameter at which the chain style lengths apply unscaled.
pub const REFERENCE_SPACING: f64 = 100.0;

/// Radii and canvas height are given for a lattice parameter of
/// `REFERENCE_SPACING` and scale with the configured one.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainStyle {
  pub light_radius: f64,
  pub heavy_radius: f64,
  pub light_color: Rgb,
  pub heavy_color: Rgb,
  pub background_color: Rgb,
  /// Height of the chain canvas
  pub canvas_height: f64,
  /// Equilibrium marker length as a multiple of the atom radius
  pub marker_factor: f64,
}

impl Default for ChainStyle {
  fn default() -> Self {
    Self {
      light_radius: 20.0,
      heavy_radius: 30.0,
      light_color: (0.85, 0.1, 0.1),
      heavy_color: (0.1, 0.2, 0.85),
      background_color: (0.97, 0.97, 0.97),
      canvas_height: 120.0,
      marker_factor: 3.0,
    }
  }
}

impl ChainStyle {
  fn scale(spacing: f64) -> f64 {
    spacing / REFERENCE_SPACING
  }

  pub fn radius(&self, class: MassClass, spacing: f64) -> f64 {
    let radius = match class {
      MassClass::Light => self.light_radius,
      MassClass::Heavy => self.heavy_radius,
    };
    radius * Self::scale(spacing)
  }

  pub fn color(&self, class: MassClass) -> Rgb {
    match class {
      MassClass::Light => self.light_color,
      MassClass::Heavy => self.heavy_color,
    }
  }

  pub fn canvas_height_for(&self, spacing: f64) -> f64 {
    self.canvas_height * Self::scale(spacing)
  }
}

// --- PlotStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
  pub curve_samples: usize,
  pub point_radius: i32,
  pub curve_color: Rgb,
  pub point_color: Rgb,
}

impl Default for PlotStyle {
  fn default() -> Self {
    Self {
      curve_samples: 600,
      point_radius: 5,
      curve_color: (0.1, 0.3, 0.8),
      point_color: (0.85, 0.1, 0.1),
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub lattice: LatticeSettings,

  #[serde(default)]
  pub style: ChainStyle,

  #[serde(default)]
  pub plot: PlotStyle,
}

/// Settings file problems. A missing file is not one of them.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("cannot access {}: {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },
  #[error("malformed settings in {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },
}

impl Config {
  /// `settings.json` under the OS config dir (e.g. ~/.config/phonon-chain), or the working dir.
  pub fn settings_path() -> PathBuf {
    ProjectDirs::from("org", "example", "phonon-chain")
      .map(|dirs| dirs.config_dir().join("settings.json"))
      .unwrap_or_else(|| PathBuf::from("settings.json"))
  }

  /// Reads settings from `path`. `Ok(None)` when no file exists yet; nothing is written.
  pub fn read_from(path: &Path) -> Result<Option<Self>, ConfigError> {
    let file = match File::open(path) {
      Ok(file) => file,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(source) => return Err(ConfigError::Io { path: path.to_path_buf(), source }),
    };
    serde_json::from_reader(BufReader::new(file))
      .map(Some)
      .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
  }

  pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, self)
      .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    writer.flush().map_err(io_err)
  }
}
