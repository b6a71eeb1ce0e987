//! Isosurface extraction over a regular lattice of density samples.
//!
//! Three extraction algorithms are provided, all selected through [`builder::MeshBuilder`]:
//!
//! * marching cubes with a fresh vertex per cell edge (flat shading),
//! * marching cubes with vertices shared between cells through a rolling two-layer cache (smooth shading),
//! * naive surface nets, placing one vertex per active cell and connecting them with quads.

pub mod field;
pub mod volume;
pub mod cell;
pub mod edge;
pub mod cache;
pub mod mesh;
pub mod marching_cubes;
pub mod surface_nets;
pub mod builder;
