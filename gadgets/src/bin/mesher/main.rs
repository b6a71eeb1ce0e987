use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use isosurface::builder::MeshBuilder;

use crate::config::{CONFIG_FILE_PATH, Config, deserialize_config};

mod config;
mod obj;

#[derive(Error, Debug)]
pub enum MesherError {
  #[error("Failed to create OBJ file '{}': {}", .path.display(), .source)]
  CreateObjFileFail { path: PathBuf, source: io::Error },
  #[error("Failed to write OBJ file: {0}")]
  WriteObjFail(#[from] io::Error),
}

fn main() {
  profiling::register_thread!();
  dotenv::dotenv().ok();
  let filter_layer = EnvFilter::from_env("MESHER_LOG");
  tracing_subscriber::registry()
    .with(filter_layer)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  if let Err(e) = run() {
    error!("{}", e);
    std::process::exit(1);
  }
}

fn run() -> Result<(), MesherError> {
  let config_path = std::env::args_os().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(CONFIG_FILE_PATH));
  let config: Config = deserialize_config(&config_path);
  info!("Meshing {} on a {}³ lattice with {}", config.volume.name(), config.lattice_size, config.algorithm);

  let sample_start = Instant::now();
  let field = config.volume.sample_field(config.lattice_size);
  let sample_duration = sample_start.elapsed();

  let mut builder = MeshBuilder::new();
  let build_start = Instant::now();
  let mesh = builder.rebuild(&field, config.algorithm);
  let build_duration = build_start.elapsed();
  info!(
    "Built {} vertices and {} triangles; sampling took {:?}, extraction took {:?}",
    mesh.vertex_count(),
    mesh.triangle_count(),
    sample_duration,
    build_duration
  );

  if let Some(path) = &config.output {
    let file = File::create(path).map_err(|source| MesherError::CreateObjFileFail { path: path.clone(), source })?;
    let mut writer = BufWriter::new(file);
    obj::write_obj(mesh, &mut writer)?;
    writer.flush()?;
    info!("Wrote mesh to '{}'", path.display());
  }
  profiling::finish_frame!();
  Ok(())
}
