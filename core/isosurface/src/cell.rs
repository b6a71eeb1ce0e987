use ultraviolet::UVec3;

use crate::field::ScalarField;

/// Offsets of the 8 corners of a cell from its minimal corner. Bit 0 of the corner number selects x, bit 1 selects y,
/// and bit 2 selects z.
pub const CORNER_OFFSETS: [[u32; 3]; 8] = [
  [0, 0, 0], // 0
  [1, 0, 0], // 1
  [0, 1, 0], // 2
  [1, 1, 0], // 3
  [0, 0, 1], // 4
  [1, 0, 1], // 5
  [0, 1, 1], // 6
  [1, 1, 1], // 7
];

/// Position of the minimal corner (left, bottom, back) of a cell in the lattice.
#[derive(Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Cell {
  pub x: u32,
  pub y: u32,
  pub z: u32,
}

impl Cell {
  #[inline]
  pub const fn new(x: u32, y: u32, z: u32) -> Self {
    Self { x, y, z }
  }

  #[inline]
  pub fn corner_position(&self, corner: usize) -> UVec3 {
    let [dx, dy, dz] = CORNER_OFFSETS[corner];
    UVec3::new(self.x + dx, self.y + dy, self.z + dz)
  }

  /// Samples the 8 corners of this cell, in corner order.
  #[inline]
  pub fn sample(&self, field: &ScalarField) -> [f32; 8] {
    let (x, y, z) = (self.x, self.y, self.z);
    [
      field.sample(x, y, z),
      field.sample(x + 1, y, z),
      field.sample(x, y + 1, z),
      field.sample(x + 1, y + 1, z),
      field.sample(x, y, z + 1),
      field.sample(x + 1, y, z + 1),
      field.sample(x, y + 1, z + 1),
      field.sample(x + 1, y + 1, z + 1),
    ]
  }
}

/// Packs the inside/outside state of the 8 corner samples into a configuration number: bit `i` is set iff
/// `values[i] < 0.0`.
#[inline]
pub fn classify(values: &[f32; 8]) -> u8 {
  ((values[0] < 0.0) as u8) << 0
    | ((values[1] < 0.0) as u8) << 1
    | ((values[2] < 0.0) as u8) << 2
    | ((values[3] < 0.0) as u8) << 3
    | ((values[4] < 0.0) as u8) << 4
    | ((values[5] < 0.0) as u8) << 5
    | ((values[6] < 0.0) as u8) << 6
    | ((values[7] < 0.0) as u8) << 7
}

/// Whether a cell with this configuration is entirely inside or entirely outside, and thus produces no geometry.
#[inline]
pub fn is_trivial(case: u8) -> bool {
  case == 0 || case == 255
}


#[cfg(test)]
mod tests {
  use ultraviolet::UVec3;

  use crate::cell::{Cell, classify, CORNER_OFFSETS, is_trivial};
  use crate::field::ScalarField;

  #[test]
  fn classify_sets_bit_per_negative_corner() {
    assert_eq!(classify(&[1.0; 8]), 0);
    assert_eq!(classify(&[-1.0; 8]), 255);
    assert_eq!(classify(&[-1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]), 0b0000_0001);
    assert_eq!(classify(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -0.5]), 0b1000_0000);
    assert_eq!(classify(&[-1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0]), 0b0101_0101);
  }

  #[test]
  fn zero_counts_as_outside() {
    assert_eq!(classify(&[0.0; 8]), 0);
    assert_eq!(classify(&[-0.0; 8]), 0);
  }

  #[test]
  fn trivial_cases() {
    assert!(is_trivial(0));
    assert!(is_trivial(255));
    for case in 1..255 {
      assert!(!is_trivial(case));
    }
  }

  #[test]
  fn sample_follows_corner_order() {
    let field = ScalarField::from_fn(UVec3::new(3, 3, 3), |x, y, z| (x + 10 * y + 100 * z) as f32);
    let cell = Cell::new(1, 0, 1);
    let values = cell.sample(&field);
    for (corner, value) in values.iter().enumerate() {
      let position = cell.corner_position(corner);
      assert_eq!(*value, field.sample_position(position));
      let [dx, dy, dz] = CORNER_OFFSETS[corner];
      assert_eq!(position, UVec3::new(1 + dx, dy, 1 + dz));
    }
  }
}
