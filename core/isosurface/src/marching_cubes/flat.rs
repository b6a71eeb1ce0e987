use crate::builder::Extractor;
use crate::cache::UNSET;
use crate::cell::{Cell, classify, is_trivial};
use crate::edge::EDGES;
use crate::field::ScalarField;
use crate::marching_cubes::push_triangles;
use crate::mesh::Mesh;

/// Marching cubes where every cell creates its own vertices, so neighbouring cells never share a vertex and each
/// triangle ends up with its own face normal.
#[derive(Default, Copy, Clone, Debug)]
pub struct FlatMarchingCubes;

impl FlatMarchingCubes {
  #[inline]
  pub fn new() -> Self { Self::default() }

  #[inline]
  fn extract_cell(cell: Cell, field: &ScalarField, mesh: &mut Mesh) {
    let values = cell.sample(field);
    let case = classify(&values);
    if is_trivial(case) { return; }
    let mut edge_vertex_indices = [UNSET; 12];
    for (i, edge) in EDGES.iter().enumerate() {
      if edge.has_crossing(&values) {
        edge_vertex_indices[i] = mesh.push_vertex(edge.crossing(cell, &values));
      }
    }
    push_triangles(case, &edge_vertex_indices, mesh);
  }
}

impl Extractor for FlatMarchingCubes {
  #[profiling::function]
  fn extract(&mut self, field: &ScalarField, mesh: &mut Mesh) {
    let cells = field.cells();
    for z in 0..cells.z {
      for y in 0..cells.y {
        for x in 0..cells.x {
          Self::extract_cell(Cell::new(x, y, z), field, mesh);
        }
      }
    }
  }
}
