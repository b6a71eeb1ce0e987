//! Marching cubes implementation based on:
//!
//! * http://paulbourke.net/geometry/polygonise/
//! * https://people.eecs.berkeley.edu/~jrs/meshpapers/LorensenCline.pdf
//! * https://www.boristhebrave.com/2018/04/15/marching-cubes-tutorial/

use crate::cache::UNSET;
use crate::mesh::Mesh;
use crate::marching_cubes::tables::Triangulation;

pub mod tables;
pub mod flat;
pub mod smooth;

pub use flat::FlatMarchingCubes;
pub use smooth::SmoothMarchingCubes;

/// Emits the triangles of configuration `case`, given the vertex index of every edge crossing of the cell.
#[inline]
pub(crate) fn push_triangles(case: u8, edge_vertex_indices: &[u32; 12], mesh: &mut Mesh) {
  for [e1, e2, e3] in Triangulation::of(case).triangles() {
    let v1 = edge_vertex_indices[e1 as usize];
    let v2 = edge_vertex_indices[e2 as usize];
    let v3 = edge_vertex_indices[e3 as usize];
    debug_assert!(v1 != UNSET && v2 != UNSET && v3 != UNSET, "Case {} references an edge without vertex: {:?}", case, [e1, e2, e3]);
    mesh.push_triangle(v1, v2, v3);
  }
}
