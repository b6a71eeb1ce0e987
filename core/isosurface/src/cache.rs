//! Rolling vertex index caches.
//!
//! Extraction visits cells in z, y, x order and only ever looks back one layer along z, so vertex indices are kept
//! for two z-layers only, addressed by the parity of the layer. This keeps memory proportional to one cross-section
//! of the lattice instead of its volume.

use std::fmt::Debug;

use ultraviolet::UVec3;

use crate::cell::Cell;
use crate::edge::Axis;

/// Marks a cache entry that has not been written in the current pass.
pub const UNSET: u32 = u32::MAX;

// Slab

/// Two z-layers of `width` × `height` entries.
#[derive(Clone, Debug)]
pub struct Slab<T> {
  width: u32,
  height: u32,
  /// Newest layer in use; layers `layer - 1` and `layer` are live.
  layer: u32,
  empty: T,
  entries: Vec<T>,
}

impl<T: Copy + Debug> Slab<T> {
  #[inline]
  pub fn new(empty: T) -> Self {
    Self { width: 0, height: 0, layer: 0, empty, entries: Vec::new() }
  }

  /// Resizes to `width` × `height` per layer, clears all entries, and rewinds to layer 0.
  pub fn reset(&mut self, width: u32, height: u32) {
    self.width = width;
    self.height = height;
    self.layer = 0;
    self.entries.clear();
    self.entries.resize(2 * Self::layer_len(width, height), self.empty);
  }

  /// Moves on to `layer`, which must be the current or the next layer. Entering the next layer recycles the storage of
  /// the layer two steps back.
  pub fn begin_layer(&mut self, layer: u32) {
    if layer == self.layer { return; }
    debug_assert!(layer == self.layer + 1, "Tried to skip from layer {} to layer {}", self.layer, layer);
    self.layer = layer;
    let len = Self::layer_len(self.width, self.height);
    let start = (layer % 2) as usize * len;
    for entry in self.entries[start..start + len].iter_mut() {
      *entry = self.empty;
    }
  }

  #[inline]
  pub fn layer(&self) -> u32 { self.layer }

  /// Number of entries over both layers.
  #[inline]
  pub fn len(&self) -> usize { self.entries.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  #[inline]
  pub fn entry(&self, x: u32, y: u32, z: u32) -> &T {
    let index = self.index(x, y, z);
    &self.entries[index]
  }

  #[inline]
  pub fn entry_mut(&mut self, x: u32, y: u32, z: u32) -> &mut T {
    let index = self.index(x, y, z);
    &mut self.entries[index]
  }

  #[inline]
  fn index(&self, x: u32, y: u32, z: u32) -> usize {
    debug_assert!(x < self.width && y < self.height, "Tried to access slab entry ({}, {}) outside of {}x{}", x, y, self.width, self.height);
    debug_assert!(z == self.layer || z + 1 == self.layer, "Tried to access layer {} while layers {} and {} are live", z, self.layer.saturating_sub(1), self.layer);
    (z % 2) as usize * Self::layer_len(self.width, self.height) + (y * self.width + x) as usize
  }

  #[inline]
  fn layer_len(width: u32, height: u32) -> usize { width as usize * height as usize }
}

// Edge cache

/// Vertex indices of edge crossings, keyed by the lattice point an edge starts at and the axis it runs along.
#[derive(Clone, Debug)]
pub struct EdgeCache {
  slab: Slab<[u32; 3]>,
}

impl Default for EdgeCache {
  #[inline]
  fn default() -> Self { Self { slab: Slab::new([UNSET; 3]) } }
}

impl EdgeCache {
  /// Prepares the cache for a lattice of `lattice_size` samples per axis.
  #[inline]
  pub fn reset(&mut self, lattice_size: UVec3) {
    self.slab.reset(lattice_size.x, lattice_size.y);
  }

  /// Moves on to lattice layer `z`; lattice layers `z - 1` and `z` are accessible afterwards.
  #[inline]
  pub fn begin_layer(&mut self, z: u32) { self.slab.begin_layer(z); }

  /// Number of lattice points covered, over both layers.
  #[inline]
  pub fn len(&self) -> usize { self.slab.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.slab.is_empty() }

  #[inline]
  pub fn insert(&mut self, start: UVec3, axis: Axis, vertex_index: u32) {
    let entry = &mut self.slab.entry_mut(start.x, start.y, start.z)[axis.index()];
    debug_assert!(*entry == UNSET, "Tried to write already set edge vertex index at {:?} along {:?}", start, axis);
    *entry = vertex_index;
  }

  #[inline]
  pub fn get(&self, start: UVec3, axis: Axis) -> u32 {
    let vertex_index = self.slab.entry(start.x, start.y, start.z)[axis.index()];
    debug_assert!(vertex_index != UNSET, "Tried to read unset edge vertex index at {:?} along {:?}", start, axis);
    vertex_index
  }
}

// Cell cache

/// Vertex index of the single vertex placed in a cell.
#[derive(Clone, Debug)]
pub struct CellCache {
  slab: Slab<u32>,
}

impl Default for CellCache {
  #[inline]
  fn default() -> Self { Self { slab: Slab::new(UNSET) } }
}

impl CellCache {
  /// Prepares the cache for `cells` cells per axis.
  #[inline]
  pub fn reset(&mut self, cells: UVec3) {
    self.slab.reset(cells.x, cells.y);
  }

  /// Moves on to cell layer `z`; cell layers `z - 1` and `z` are accessible afterwards.
  #[inline]
  pub fn begin_layer(&mut self, z: u32) { self.slab.begin_layer(z); }

  #[inline]
  pub fn insert(&mut self, cell: Cell, vertex_index: u32) {
    let entry = self.slab.entry_mut(cell.x, cell.y, cell.z);
    debug_assert!(*entry == UNSET, "Tried to write already set cell vertex index at {:?}", cell);
    *entry = vertex_index;
  }

  #[inline]
  pub fn get(&self, x: u32, y: u32, z: u32) -> u32 {
    let vertex_index = *self.slab.entry(x, y, z);
    debug_assert!(vertex_index != UNSET, "Tried to read unset cell vertex index at ({}, {}, {})", x, y, z);
    vertex_index
  }
}


#[cfg(test)]
mod tests {
  use ultraviolet::UVec3;

  use crate::cache::{CellCache, EdgeCache, Slab, UNSET};
  use crate::cell::Cell;
  use crate::edge::Axis;

  #[test]
  fn layers_alternate_storage() {
    let mut slab = Slab::new(UNSET);
    slab.reset(3, 2);
    *slab.entry_mut(2, 1, 0) = 7;
    slab.begin_layer(1);
    *slab.entry_mut(2, 1, 1) = 8;
    assert_eq!(*slab.entry(2, 1, 0), 7);
    assert_eq!(*slab.entry(2, 1, 1), 8);
    slab.begin_layer(2);
    // Layer 2 reuses the storage of layer 0, which is cleared.
    assert_eq!(*slab.entry(2, 1, 2), UNSET);
    assert_eq!(*slab.entry(2, 1, 1), 8);
  }

  #[test]
  fn begin_same_layer_keeps_entries() {
    let mut slab = Slab::new(UNSET);
    slab.reset(1, 1);
    *slab.entry_mut(0, 0, 0) = 3;
    slab.begin_layer(0);
    assert_eq!(*slab.entry(0, 0, 0), 3);
    assert_eq!(slab.layer(), 0);
  }

  #[test]
  fn reset_clears() {
    let mut slab = Slab::new(UNSET);
    slab.reset(2, 2);
    *slab.entry_mut(1, 1, 0) = 1;
    slab.begin_layer(1);
    slab.reset(2, 2);
    assert_eq!(slab.layer(), 0);
    assert_eq!(slab.len(), 8);
    assert_eq!(*slab.entry(1, 1, 0), UNSET);
  }

  #[test]
  fn edge_cache_keeps_axes_apart() {
    let mut cache = EdgeCache::default();
    cache.reset(UVec3::new(4, 4, 4));
    cache.begin_layer(1);
    let start = UVec3::new(1, 2, 1);
    cache.insert(start, Axis::X, 10);
    cache.insert(start, Axis::Z, 12);
    assert_eq!(cache.get(start, Axis::X), 10);
    assert_eq!(cache.get(start, Axis::Z), 12);
  }

  #[test]
  fn cell_cache_reads_previous_layer() {
    let mut cache = CellCache::default();
    cache.reset(UVec3::new(2, 2, 3));
    cache.insert(Cell::new(1, 1, 0), 4);
    cache.begin_layer(1);
    cache.insert(Cell::new(1, 1, 1), 5);
    assert_eq!(cache.get(1, 1, 0), 4);
    assert_eq!(cache.get(1, 1, 1), 5);
  }

  #[test]
  #[should_panic]
  #[cfg(debug_assertions)]
  fn reading_two_layers_back_is_fatal() {
    let mut cache = CellCache::default();
    cache.reset(UVec3::new(2, 2, 3));
    cache.insert(Cell::new(0, 0, 0), 1);
    cache.begin_layer(1);
    cache.begin_layer(2);
    cache.get(0, 0, 0);
  }

  #[test]
  #[should_panic]
  #[cfg(debug_assertions)]
  fn reading_unset_entry_is_fatal() {
    let mut cache = EdgeCache::default();
    cache.reset(UVec3::new(2, 2, 2));
    cache.get(UVec3::new(0, 0, 0), Axis::Y);
  }
}
