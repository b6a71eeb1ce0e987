use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::field::ScalarField;
use crate::marching_cubes::{FlatMarchingCubes, SmoothMarchingCubes};
use crate::mesh::Mesh;
use crate::surface_nets::SurfaceNets;

// Extractor trait

/// Appends the isosurface of a field to a mesh. Normals are accumulated but not normalized.
pub trait Extractor {
  fn extract(&mut self, field: &ScalarField, mesh: &mut Mesh);
}

// Algorithm

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Algorithm {
  /// Marching cubes, vertices not shared between cells.
  Flat,
  /// Marching cubes, one vertex per edge crossing shared between cells.
  Smooth,
  /// Naive surface nets, one vertex per active cell.
  SurfaceNets,
}

impl Algorithm {
  pub const ALL: [Algorithm; 3] = [Algorithm::Flat, Algorithm::Smooth, Algorithm::SurfaceNets];
}

impl Default for Algorithm {
  #[inline]
  fn default() -> Self { Algorithm::Flat }
}

impl Display for Algorithm {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Algorithm::Flat => "Marching Cubes (flat shading)",
      Algorithm::Smooth => "Marching Cubes (smooth shading)",
      Algorithm::SurfaceNets => "Naive Surface Nets (smooth shading)",
    };
    f.write_str(name)
  }
}

// Builder

/// Owns the output mesh and the scratch caches of the extractors, so that repeated rebuilds reuse their allocations.
///
/// Rebuilding takes `&mut self`, so the mesh can only be read once a rebuild has completed.
#[derive(Default, Clone, Debug)]
pub struct MeshBuilder {
  mesh: Mesh,
  flat_marching_cubes: FlatMarchingCubes,
  smooth_marching_cubes: SmoothMarchingCubes,
  surface_nets: SurfaceNets,
}

impl MeshBuilder {
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Clears the mesh and extracts the isosurface of `field` with `algorithm`, returning the finished mesh.
  #[profiling::function]
  pub fn rebuild(&mut self, field: &ScalarField, algorithm: Algorithm) -> &Mesh {
    self.mesh.clear();
    match algorithm {
      Algorithm::Flat => self.flat_marching_cubes.extract(field, &mut self.mesh),
      Algorithm::Smooth => self.smooth_marching_cubes.extract(field, &mut self.mesh),
      Algorithm::SurfaceNets => self.surface_nets.extract(field, &mut self.mesh),
    }
    self.mesh.normalize_normals();
    debug!(
      "Extracted {} vertices and {} triangles from {} cells with {}",
      self.mesh.vertex_count(),
      self.mesh.triangle_count(),
      field.cell_count(),
      algorithm
    );
    &self.mesh
  }

  #[inline]
  pub fn mesh(&self) -> &Mesh { &self.mesh }

  #[inline]
  pub fn into_mesh(self) -> Mesh { self.mesh }
}


#[cfg(test)]
mod tests {
  use ultraviolet::UVec3;

  use crate::builder::{Algorithm, MeshBuilder};
  use crate::field::ScalarField;

  #[test]
  fn rebuild_starts_from_cleared_buffers() {
    let mut field = ScalarField::new(UVec3::new(3, 3, 3), 1.0);
    field.set(1, 1, 1, -1.0);
    let mut builder = MeshBuilder::new();
    for algorithm in Algorithm::ALL {
      let first = builder.rebuild(&field, algorithm).clone();
      let second = builder.rebuild(&field, algorithm);
      assert_eq!(first.vertices(), second.vertices());
      assert_eq!(first.indices(), second.indices());
    }
  }

  #[test]
  fn switching_algorithms_does_not_leak_state() {
    let mut field = ScalarField::new(UVec3::new(4, 4, 4), 1.0);
    field.set(1, 2, 1, -1.0);
    field.set(2, 2, 2, -1.0);
    let mut fresh = MeshBuilder::new();
    let expected = fresh.rebuild(&field, Algorithm::Smooth).clone();
    let mut reused = MeshBuilder::new();
    reused.rebuild(&field, Algorithm::SurfaceNets);
    reused.rebuild(&field, Algorithm::Flat);
    let actual = reused.rebuild(&field, Algorithm::Smooth);
    assert_eq!(expected.vertices(), actual.vertices());
    assert_eq!(expected.indices(), actual.indices());
  }

  #[test]
  fn uniform_field_has_no_geometry() {
    let mut builder = MeshBuilder::new();
    for sample in [1.0, -1.0] {
      let field = ScalarField::new(UVec3::new(5, 5, 5), sample);
      for algorithm in Algorithm::ALL {
        assert!(builder.rebuild(&field, algorithm).is_empty());
      }
    }
  }

  #[test]
  fn display_names() {
    assert_eq!(Algorithm::Smooth.to_string(), "Marching Cubes (smooth shading)");
  }
}
