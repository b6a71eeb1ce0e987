use bytemuck::{Pod, Zeroable};
use ultraviolet::Vec3;

// Mesh

/// Vertex buffer and triangle list index buffer. Indices come in triples, one triple per triangle.
#[derive(Clone, Default, Debug)]
pub struct Mesh {
  vertices: Vec<Vertex>,
  indices: Vec<u32>,
}

impl Mesh {
  #[inline]
  pub fn new() -> Self {
    Self::default()
  }


  #[inline]
  pub fn is_empty(&self) -> bool { self.vertices.is_empty() && self.indices.is_empty() }

  #[inline]
  pub fn vertices(&self) -> &[Vertex] {
    &self.vertices
  }

  #[inline]
  pub fn indices(&self) -> &[u32] {
    &self.indices
  }

  #[inline]
  pub fn vertex_count(&self) -> usize { self.vertices.len() }

  #[inline]
  pub fn triangle_count(&self) -> usize { self.indices.len() / 3 }

  #[inline]
  pub fn triangles(&self) -> impl Iterator<Item=[u32; 3]> + '_ {
    self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
  }


  /// Appends a vertex at `position` with a zero normal, returning its index.
  #[inline]
  pub fn push_vertex(&mut self, position: Vec3) -> u32 {
    let index = self.vertices.len();
    debug_assert!(index < u32::MAX as usize, "Tried to push vertex {} which does not fit a 32-bit index", index);
    self.vertices.push(Vertex::new(position));
    index as u32
  }

  /// Appends triangle `a`, `b`, `c` and adds its face normal to the normals of its vertices.
  #[inline]
  pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
    self.indices.extend_from_slice(&[a, b, c]);
    self.accumulate_face_normal(a, b, c);
  }

  /// Appends quad `a`, `b`, `c`, `d` as triangles `a`, `b`, `c` and `a`, `c`, `d`. With `flip`, `b` and `d` are
  /// swapped, reversing the winding.
  #[inline]
  pub fn push_quad(&mut self, flip: bool, a: u32, b: u32, c: u32, d: u32) {
    let (b, d) = if flip { (d, b) } else { (b, d) };
    self.push_triangle(a, b, c);
    self.push_triangle(a, c, d);
  }

  #[inline]
  fn accumulate_face_normal(&mut self, a: u32, b: u32, c: u32) {
    let (a, b, c) = (a as usize, b as usize, c as usize);
    let position_a = self.vertices[a].position;
    let position_b = self.vertices[b].position;
    let position_c = self.vertices[c].position;
    // Not normalized: larger triangles weigh more.
    let normal = (position_c - position_b).cross(position_a - position_b);
    self.vertices[a].normal += normal;
    self.vertices[b].normal += normal;
    self.vertices[c].normal += normal;
  }

  /// Turns the accumulated normals into unit normals. Vertices with a zero accumulated normal keep a zero normal.
  #[profiling::function]
  pub fn normalize_normals(&mut self) {
    for vertex in self.vertices.iter_mut() {
      let length = vertex.normal.mag();
      if length > 0.0 {
        vertex.normal /= length;
      }
    }
  }

  #[inline]
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
  }
}


// Vertex

#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Debug, Pod, Zeroable)]
pub struct Vertex {
  pub position: Vec3,
  pub normal: Vec3,
}

impl Vertex {
  #[inline]
  pub fn new(position: Vec3) -> Self {
    Self { position, normal: Vec3::zero() }
  }
}
