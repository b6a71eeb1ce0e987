use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ron::de::from_reader;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::error;
use ultraviolet::UVec3;

use isosurface::builder::Algorithm;
use isosurface::field::{LATTICE_SIZE, ScalarField};
use isosurface::volume::{Noise, NoiseSettings, Plane, PlaneSettings, Sphere, SphereSettings, Terrain, TerrainSettings, Volume};

pub const CONFIG_FILE_PATH: &str = "mesher.ron";

// Config

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
  /// Number of samples along each axis.
  pub lattice_size: u32,
  pub algorithm: Algorithm,
  pub volume: VolumeConfig,
  /// Wavefront OBJ file to write the mesh to, if any.
  pub output: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      lattice_size: LATTICE_SIZE,
      algorithm: Algorithm::default(),
      volume: VolumeConfig::default(),
      output: None,
    }
  }
}

// Volume config

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub enum VolumeConfig {
  Plane(PlaneSettings),
  Sphere(SphereSettings),
  Terrain(TerrainSettings),
  Noise(NoiseSettings),
}

impl Default for VolumeConfig {
  fn default() -> Self { VolumeConfig::Terrain(TerrainSettings::default()) }
}

impl VolumeConfig {
  pub fn sample_field(&self, lattice_size: u32) -> ScalarField {
    let size = UVec3::new(lattice_size, lattice_size, lattice_size);
    match *self {
      VolumeConfig::Plane(settings) => Plane::new(settings).sample_field(size),
      VolumeConfig::Sphere(settings) => Sphere::new(settings).sample_field(size),
      VolumeConfig::Terrain(settings) => Terrain::new(settings).sample_field(size),
      VolumeConfig::Noise(settings) => Noise::new(settings).sample_field(size),
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      VolumeConfig::Plane(_) => "plane",
      VolumeConfig::Sphere(_) => "sphere",
      VolumeConfig::Terrain(_) => "terrain",
      VolumeConfig::Noise(_) => "noise",
    }
  }
}

// Deserialization

/// Deserializes `T` from the RON file at `path`. Returns the default when the file does not exist, and logs an error and
/// returns the default when it cannot be read or parsed.
pub fn deserialize_config<T: DeserializeOwned + Default>(path: &Path) -> T {
  if !path.exists() { return T::default(); }
  match File::open(path) {
    Ok(file) => match from_reader(BufReader::new(file)) {
      Ok(config) => config,
      Err(e) => {
        error!("Cannot deserialize mesher config, returning default config; failed to deserialize from file '{}': {:?}", path.display(), e);
        T::default()
      }
    }
    Err(e) => {
      error!("Cannot deserialize mesher config, returning default config; failed to open file '{}': {:?}", path.display(), e);
      T::default()
    }
  }
}
