use ultraviolet::Vec3;

use crate::cell::Cell;

/// Lattice axis along which a cell edge runs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Axis {
  X,
  Y,
  Z,
}

impl Axis {
  #[inline]
  pub const fn index(self) -> usize {
    match self {
      Axis::X => 0,
      Axis::Y => 1,
      Axis::Z => 2,
    }
  }
}

/// A cell edge, running from its lower corner `a` to its upper corner `b` along `axis`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Edge {
  pub a: u8,
  pub b: u8,
  pub axis: Axis,
}

impl Edge {
  #[inline]
  const fn new(a: u8, b: u8, axis: Axis) -> Self {
    Self { a, b, axis }
  }

  /// Whether the surface crosses this edge, given the corner samples of a cell.
  #[inline]
  pub fn has_crossing(&self, values: &[f32; 8]) -> bool {
    (values[self.a as usize] < 0.0) != (values[self.b as usize] < 0.0)
  }

  /// Position where the surface crosses this edge of `cell`. Only meaningful when [`Self::has_crossing`] holds.
  #[inline]
  pub fn crossing(&self, cell: Cell, values: &[f32; 8]) -> Vec3 {
    let a = self.a as usize;
    let b = self.b as usize;
    crossing_position(Vec3::from(cell.corner_position(a)), values[a], Vec3::from(cell.corner_position(b)), values[b])
  }
}

/// The 12 edges of a cell, grouped by axis. This numbering is the one used by the triangulation table.
pub const EDGES: [Edge; 12] = [
  Edge::new(0, 1, Axis::X), // 0
  Edge::new(2, 3, Axis::X), // 1
  Edge::new(4, 5, Axis::X), // 2
  Edge::new(6, 7, Axis::X), // 3
  Edge::new(0, 2, Axis::Y), // 4
  Edge::new(1, 3, Axis::Y), // 5
  Edge::new(4, 6, Axis::Y), // 6
  Edge::new(5, 7, Axis::Y), // 7
  Edge::new(0, 4, Axis::Z), // 8
  Edge::new(1, 5, Axis::Z), // 9
  Edge::new(2, 6, Axis::Z), // 10
  Edge::new(3, 7, Axis::Z), // 11
];

/// Linearly interpolates the zero crossing between two samples of opposite sign.
#[inline]
pub fn crossing_position(position_a: Vec3, value_a: f32, position_b: Vec3, value_b: f32) -> Vec3 {
  debug_assert!((value_a < 0.0) != (value_b < 0.0), "Tried to interpolate edge without sign change, values: {}, {}", value_a, value_b);
  let t = value_a / (value_a - value_b);
  position_a + t * (position_b - position_a)
}

/// Average of all edge crossings of a cell. The cell must not be trivial.
#[inline]
pub fn centroid_of_edge_crossings(cell: Cell, values: &[f32; 8]) -> Vec3 {
  let mut count = 0;
  let mut sum = Vec3::zero();
  for edge in EDGES.iter() {
    if edge.has_crossing(values) {
      count += 1;
      sum += edge.crossing(cell, values);
    }
  }
  debug_assert!(count > 0, "Tried to place a vertex in cell {:?} without edge crossings", cell);
  sum / count as f32
}
