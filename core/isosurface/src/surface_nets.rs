//! Naive surface nets implementation based on:
//!
//! * https://0fps.net/2012/07/12/smooth-voxel-terrain-part-2/
//! * https://bonsairobo.medium.com/smooth-voxel-mapping-a-technical-deep-dive-on-real-time-surface-nets-and-texturing-ef06d0f8ca14

use crate::builder::Extractor;
use crate::cache::CellCache;
use crate::cell::{Cell, classify, is_trivial};
use crate::edge::centroid_of_edge_crossings;
use crate::field::ScalarField;
use crate::mesh::Mesh;

/// Surface nets: one vertex per active cell, at the centroid of the cell's edge crossings, connected by one quad per
/// crossed lattice edge.
///
/// Quads are emitted from the cell at the minimal corner of the crossed edge, connecting it to the 3 cells around the
/// edge that lie one step back. Those were visited earlier, so only the current and previous layer of cell vertices
/// are kept, in a [`CellCache`].
#[derive(Default, Clone, Debug)]
pub struct SurfaceNets {
  cell_cache: CellCache,
}

impl SurfaceNets {
  #[inline]
  pub fn new() -> Self { Self::default() }

  #[inline]
  fn extract_cell(&mut self, cell: Cell, field: &ScalarField, mesh: &mut Mesh) {
    let values = cell.sample(field);
    let case = classify(&values);
    if is_trivial(case) { return; }
    let vertex_index = mesh.push_vertex(centroid_of_edge_crossings(cell, &values));
    self.cell_cache.insert(cell, vertex_index);

    // Orientation only looks at the minimal corner, which is shared by the 3 edges below.
    let flip = values[0] < 0.0;
    let Cell { x, y, z } = cell;
    // Edge along X
    if y > 0 && z > 0 && Self::crosses(values[0], values[1]) {
      let cache = &self.cell_cache;
      mesh.push_quad(flip, vertex_index, cache.get(x, y, z - 1), cache.get(x, y - 1, z - 1), cache.get(x, y - 1, z));
    }
    // Edge along Y
    if x > 0 && z > 0 && Self::crosses(values[0], values[2]) {
      let cache = &self.cell_cache;
      mesh.push_quad(flip, vertex_index, cache.get(x - 1, y, z), cache.get(x - 1, y, z - 1), cache.get(x, y, z - 1));
    }
    // Edge along Z
    if x > 0 && y > 0 && Self::crosses(values[0], values[4]) {
      let cache = &self.cell_cache;
      mesh.push_quad(flip, vertex_index, cache.get(x, y - 1, z), cache.get(x - 1, y - 1, z), cache.get(x - 1, y, z));
    }
  }

  #[inline]
  fn crosses(value_a: f32, value_b: f32) -> bool {
    (value_a < 0.0) != (value_b < 0.0)
  }
}

impl Extractor for SurfaceNets {
  #[profiling::function]
  fn extract(&mut self, field: &ScalarField, mesh: &mut Mesh) {
    let cells = field.cells();
    self.cell_cache.reset(cells);
    for z in 0..cells.z {
      self.cell_cache.begin_layer(z);
      for y in 0..cells.y {
        for x in 0..cells.x {
          self.extract_cell(Cell::new(x, y, z), field, mesh);
        }
      }
    }
  }
}
