use ultraviolet::UVec3;

/// Number of samples along each axis of the default lattice.
pub const LATTICE_SIZE: u32 = 65;

// Scalar field

/// Dense lattice of density samples. Negative samples are inside the surface, all others are outside.
#[derive(Clone, Debug)]
pub struct ScalarField {
  size: UVec3,
  samples: Vec<f32>,
}

impl ScalarField {
  #[inline]
  pub fn new(size: UVec3, default: f32) -> Self {
    let len = size.x as usize * size.y as usize * size.z as usize;
    Self { size, samples: vec![default; len] }
  }

  /// Creates a field by evaluating `sample` at every lattice point, in z, y, x order.
  pub fn from_fn(size: UVec3, mut sample: impl FnMut(u32, u32, u32) -> f32) -> Self {
    let mut samples = Vec::with_capacity(size.x as usize * size.y as usize * size.z as usize);
    for z in 0..size.z {
      for y in 0..size.y {
        for x in 0..size.x {
          samples.push(sample(x, y, z));
        }
      }
    }
    Self { size, samples }
  }

  #[inline]
  pub fn from_samples(size: UVec3, samples: Vec<f32>) -> Self {
    assert_eq!(samples.len(), size.x as usize * size.y as usize * size.z as usize, "Sample count does not match lattice size {:?}", size);
    Self { size, samples }
  }


  /// Number of samples along each axis.
  #[inline]
  pub fn size(&self) -> UVec3 { self.size }

  /// Number of cells along each axis, one less than the number of samples.
  #[inline]
  pub fn cells(&self) -> UVec3 {
    UVec3::new(self.size.x.saturating_sub(1), self.size.y.saturating_sub(1), self.size.z.saturating_sub(1))
  }

  #[inline]
  pub fn cell_count(&self) -> usize {
    let cells = self.cells();
    cells.x as usize * cells.y as usize * cells.z as usize
  }

  #[inline]
  pub fn as_slice(&self) -> &[f32] { &self.samples }


  #[inline]
  pub fn index_from_xyz(&self, x: u32, y: u32, z: u32) -> usize {
    debug_assert!(x < self.size.x && y < self.size.y && z < self.size.z, "Tried to index sample ({}, {}, {}) outside of lattice {:?}", x, y, z, self.size);
    ((z as usize * self.size.y as usize + y as usize) * self.size.x as usize) + x as usize
  }

  #[inline]
  pub fn sample(&self, x: u32, y: u32, z: u32) -> f32 {
    self.samples[self.index_from_xyz(x, y, z)]
  }

  #[inline]
  pub fn sample_position(&self, position: UVec3) -> f32 {
    self.sample(position.x, position.y, position.z)
  }

  #[inline]
  pub fn set(&mut self, x: u32, y: u32, z: u32, sample: f32) {
    let index = self.index_from_xyz(x, y, z);
    self.samples[index] = sample;
  }

  #[inline]
  pub fn flip_all(&mut self) {
    for s in self.samples.iter_mut() {
      *s *= -1.0;
    }
  }
}

impl Default for ScalarField {
  #[inline]
  fn default() -> Self { Self::new(UVec3::new(LATTICE_SIZE, LATTICE_SIZE, LATTICE_SIZE), 0.0) }
}


#[cfg(test)]
mod tests {
  use ultraviolet::UVec3;

  use crate::field::{LATTICE_SIZE, ScalarField};

  #[test]
  fn linear_offset_is_x_fastest() {
    let field = ScalarField::new(UVec3::new(4, 3, 2), 0.0);
    assert_eq!(field.index_from_xyz(0, 0, 0), 0);
    assert_eq!(field.index_from_xyz(1, 0, 0), 1);
    assert_eq!(field.index_from_xyz(0, 1, 0), 4);
    assert_eq!(field.index_from_xyz(0, 0, 1), 12);
    assert_eq!(field.index_from_xyz(3, 2, 1), 23);
  }

  #[test]
  fn from_fn_matches_set() {
    let size = UVec3::new(3, 4, 5);
    let generated = ScalarField::from_fn(size, |x, y, z| (x * 100 + y * 10 + z) as f32);
    let mut written = ScalarField::new(size, 0.0);
    for z in 0..size.z {
      for y in 0..size.y {
        for x in 0..size.x {
          written.set(x, y, z, (x * 100 + y * 10 + z) as f32);
        }
      }
    }
    assert_eq!(generated.as_slice(), written.as_slice());
    assert_eq!(generated.sample(2, 3, 4), 234.0);
  }

  #[test]
  fn default_lattice() {
    let field = ScalarField::default();
    assert_eq!(field.size(), UVec3::new(LATTICE_SIZE, LATTICE_SIZE, LATTICE_SIZE));
    assert_eq!(field.cells(), UVec3::new(64, 64, 64));
    assert_eq!(field.cell_count(), 64 * 64 * 64);
    assert_eq!(field.as_slice().len(), 65 * 65 * 65);
  }

  #[test]
  fn from_samples_keeps_lattice_order() {
    let field = ScalarField::from_samples(UVec3::new(2, 2, 2), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    assert_eq!(field.sample(1, 0, 0), 1.0);
    assert_eq!(field.sample(0, 1, 0), 2.0);
    assert_eq!(field.sample(0, 0, 1), 4.0);
    assert_eq!(field.sample(1, 1, 1), 7.0);
  }

  #[test]
  #[should_panic(expected = "Sample count does not match lattice size")]
  fn from_samples_rejects_wrong_length() {
    ScalarField::from_samples(UVec3::new(2, 2, 2), vec![0.0; 7]);
  }

  #[test]
  fn flip_all_negates() {
    let mut field = ScalarField::new(UVec3::new(2, 2, 2), 0.5);
    field.set(1, 1, 1, -2.0);
    field.flip_all();
    assert_eq!(field.sample(0, 0, 0), -0.5);
    assert_eq!(field.sample(1, 1, 1), 2.0);
  }
}
