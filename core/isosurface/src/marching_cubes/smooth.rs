use crate::builder::Extractor;
use crate::cache::{EdgeCache, UNSET};
use crate::cell::{Cell, classify, CORNER_OFFSETS, is_trivial};
use crate::edge::{Edge, EDGES};
use crate::field::ScalarField;
use crate::marching_cubes::push_triangles;
use crate::mesh::Mesh;

/// Marching cubes where each edge crossing becomes exactly one vertex, shared by all cells around that edge.
///
/// A crossing is created by the first cell in scan order that touches the edge, and stored in an [`EdgeCache`] under
/// the lattice point the edge starts at. For interior cells that is the 3 edges touching the maximal corner (edges 3,
/// 7, and 11); cells on the minimal boundary of the lattice also create the edges that no earlier cell touched. All
/// other crossings are read back from the cache, which only needs to hold the current and previous lattice layer.
#[derive(Default, Clone, Debug)]
pub struct SmoothMarchingCubes {
  edge_cache: EdgeCache,
}

impl SmoothMarchingCubes {
  #[inline]
  pub fn new() -> Self { Self::default() }

  #[inline]
  fn extract_cell(&mut self, cell: Cell, field: &ScalarField, mesh: &mut Mesh) {
    let values = cell.sample(field);
    let case = classify(&values);
    if is_trivial(case) { return; }
    let mut edge_vertex_indices = [UNSET; 12];
    for (i, edge) in EDGES.iter().enumerate() {
      if !edge.has_crossing(&values) { continue; }
      let start = cell.corner_position(edge.a as usize);
      edge_vertex_indices[i] = if Self::creates_vertex(cell, edge) {
        let index = mesh.push_vertex(edge.crossing(cell, &values));
        self.edge_cache.insert(start, edge.axis, index);
        index
      } else {
        self.edge_cache.get(start, edge.axis)
      };
    }
    push_triangles(case, &edge_vertex_indices, mesh);
  }

  /// Whether `cell` is the first cell in scan order to touch `edge`. The edge is also touched by the cells one step
  /// back along each of the two axes orthogonal to it, unless the edge lies on the far side of `cell` along that axis
  /// or `cell` is on the minimal boundary.
  #[inline]
  fn creates_vertex(cell: Cell, edge: &Edge) -> bool {
    let offset = CORNER_OFFSETS[edge.a as usize];
    let position = [cell.x, cell.y, cell.z];
    (0..3)
      .filter(|&axis| axis != edge.axis.index())
      .all(|axis| offset[axis] == 1 || position[axis] == 0)
  }
}

impl Extractor for SmoothMarchingCubes {
  #[profiling::function]
  fn extract(&mut self, field: &ScalarField, mesh: &mut Mesh) {
    let cells = field.cells();
    self.edge_cache.reset(field.size());
    for z in 0..cells.z {
      // Cells in layer z touch lattice layers z and z + 1.
      self.edge_cache.begin_layer(z + 1);
      for y in 0..cells.y {
        for x in 0..cells.x {
          self.extract_cell(Cell::new(x, y, z), field, mesh);
        }
      }
    }
  }
}


#[cfg(test)]
mod tests {
  use ultraviolet::UVec3;

  use crate::builder::Extractor;
  use crate::cell::Cell;
  use crate::edge::EDGES;
  use crate::field::ScalarField;
  use crate::marching_cubes::smooth::SmoothMarchingCubes;
  use crate::mesh::Mesh;

  #[test]
  fn interior_cell_creates_maximal_edges() {
    let cell = Cell::new(1, 1, 1);
    let created: Vec<usize> = (0..12).filter(|&i| SmoothMarchingCubes::creates_vertex(cell, &EDGES[i])).collect();
    assert_eq!(created, vec![3, 7, 11]);
  }

  #[test]
  fn origin_cell_creates_all_edges() {
    let cell = Cell::new(0, 0, 0);
    assert!((0..12).all(|i| SmoothMarchingCubes::creates_vertex(cell, &EDGES[i])));
  }

  #[test]
  fn boundary_cell_creates_edges_without_earlier_neighbour() {
    // On the y = 0 boundary, x-axis edges at y = 0 and z-axis edges at y = 0 have no earlier neighbour along y.
    let cell = Cell::new(1, 0, 1);
    let created: Vec<usize> = (0..12).filter(|&i| SmoothMarchingCubes::creates_vertex(cell, &EDGES[i])).collect();
    assert_eq!(created, vec![2, 3, 7, 9, 11]);
  }

  #[test]
  fn every_edge_crossing_is_created_once() {
    let size = UVec3::new(6, 5, 7);
    let field = ScalarField::from_fn(size, |x, y, z| {
      let (x, y, z) = (x as f32 - 2.3, y as f32 - 2.1, z as f32 - 3.2);
      x * x + y * y + z * z - 4.0
    });
    let mut crossings = 0;
    for z in 0..size.z {
      for y in 0..size.y {
        for x in 0..size.x {
          let value = field.sample(x, y, z);
          if x + 1 < size.x && (value < 0.0) != (field.sample(x + 1, y, z) < 0.0) { crossings += 1; }
          if y + 1 < size.y && (value < 0.0) != (field.sample(x, y + 1, z) < 0.0) { crossings += 1; }
          if z + 1 < size.z && (value < 0.0) != (field.sample(x, y, z + 1) < 0.0) { crossings += 1; }
        }
      }
    }
    let mut mesh = Mesh::new();
    SmoothMarchingCubes::new().extract(&field, &mut mesh);
    assert_eq!(mesh.vertex_count(), crossings);
  }

  #[test]
  fn cache_holds_two_lattice_layers() {
    let field = ScalarField::from_fn(UVec3::new(7, 5, 9), |x, y, z| x as f32 + y as f32 - z as f32 - 0.5);
    let mut extractor = SmoothMarchingCubes::new();
    let mut mesh = Mesh::new();
    extractor.extract(&field, &mut mesh);
    assert!(mesh.triangle_count() > 0);
    assert_eq!(extractor.edge_cache.len(), 2 * 7 * 5);
    // Resizing follows the lattice of the next field.
    extractor.extract(&ScalarField::new(UVec3::new(3, 4, 2), 1.0), &mut mesh);
    assert_eq!(extractor.edge_cache.len(), 2 * 3 * 4);
  }
}
