use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use ultraviolet::{UVec3, Vec3};

use crate::field::ScalarField;

// Trait

pub trait Volume: Clone + Send + 'static {
  /// Samples a single lattice position, returning its density. Negative is inside.
  fn sample(&self, position: UVec3) -> f32;

  /// Samples every lattice position of a field of `size` samples per axis.
  #[profiling::function]
  fn sample_field(&self, size: UVec3) -> ScalarField {
    ScalarField::from_fn(size, |x, y, z| self.sample(UVec3::new(x, y, z)))
  }
}

// Plane

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PlaneSettings {
  pub height: f32,
}

impl Default for PlaneSettings {
  #[inline]
  fn default() -> Self {
    Self { height: 32.5 }
  }
}

/// Horizontal plane; everything below `height` is inside.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
  height: f32,
}

impl Plane {
  #[inline]
  pub fn new(settings: PlaneSettings) -> Self {
    Self { height: settings.height }
  }
}

impl Volume for Plane {
  #[inline]
  fn sample(&self, position: UVec3) -> f32 {
    position.y as f32 - self.height
  }
}

// Sphere

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SphereSettings {
  pub center: Vec3,
  pub radius: f32,
}

impl Default for SphereSettings {
  #[inline]
  fn default() -> Self {
    Self { center: Vec3::new(32.0, 32.0, 32.0), radius: 24.0 }
  }
}

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
  center: Vec3,
  radius: f32,
}

impl Sphere {
  #[inline]
  pub fn new(settings: SphereSettings) -> Self {
    Self { center: settings.center, radius: settings.radius }
  }
}

impl Volume for Sphere {
  #[inline]
  fn sample(&self, position: UVec3) -> f32 {
    (Vec3::from(position) - self.center).mag() - self.radius
  }
}

// Terrain

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TerrainSettings {
  pub seed: u32,
  /// Height used to normalize the y coordinate into 0..1.
  pub height: f32,
  /// Normalized height of the ground level.
  pub base: f32,
  /// Normalized height variation added by the noise.
  pub amplitude: f32,
  /// Horizontal distance, in samples, of one noise period.
  pub scale: f32,
}

impl Default for TerrainSettings {
  #[inline]
  fn default() -> Self {
    Self {
      seed: 0,
      height: 65.0,
      base: 0.25,
      amplitude: 0.25,
      scale: 16.0,
    }
  }
}

/// Height-field terrain: a ground plane displaced by 2D gradient noise over the x/z plane.
#[derive(Clone, Debug)]
pub struct Terrain {
  settings: TerrainSettings,
  perlin: Perlin,
}

impl Terrain {
  #[inline]
  pub fn new(settings: TerrainSettings) -> Self {
    Self { settings, perlin: Perlin::new(settings.seed) }
  }
}

impl Volume for Terrain {
  #[inline]
  fn sample(&self, position: UVec3) -> f32 {
    let TerrainSettings { height, base, amplitude, scale, .. } = self.settings;
    let noise = self.perlin.get([(position.x as f32 / scale) as f64, (position.z as f32 / scale) as f64]) as f32;
    position.y as f32 / height - base - noise * amplitude
  }
}

// Noise

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct NoiseSettings {
  pub seed: u32,
  pub frequency: f64,
  pub lacunarity: f64,
  pub persistence: f64,
  pub octaves: usize,
}

impl Default for NoiseSettings {
  #[inline]
  fn default() -> Self {
    Self {
      seed: 1337,
      frequency: 0.05,
      lacunarity: 2.0,
      persistence: 0.5,
      octaves: 3,
    }
  }
}

/// 3D fractal gradient noise. Produces many disconnected surfaces, useful to stress the extractors.
#[derive(Clone, Debug)]
pub struct Noise {
  fbm: Fbm<Perlin>,
}

impl Noise {
  #[inline]
  pub fn new(settings: NoiseSettings) -> Self {
    let fbm = Fbm::<Perlin>::new(settings.seed)
      .set_frequency(settings.frequency)
      .set_lacunarity(settings.lacunarity)
      .set_persistence(settings.persistence)
      .set_octaves(settings.octaves);
    Self { fbm }
  }
}

impl Volume for Noise {
  #[inline]
  fn sample(&self, position: UVec3) -> f32 {
    self.fbm.get([position.x as f64, position.y as f64, position.z as f64]) as f32
  }
}

// Plus

#[derive(Copy, Clone, Debug)]
pub struct Plus<V1: Volume, V2: Volume> {
  volume_1: V1,
  volume_2: V2,
}

impl<V1: Volume, V2: Volume> Plus<V1, V2> {
  #[inline]
  pub fn new(volume_1: V1, volume_2: V2) -> Self {
    Self { volume_1, volume_2 }
  }
}

impl<V1: Volume, V2: Volume> Volume for Plus<V1, V2> {
  #[inline]
  fn sample(&self, position: UVec3) -> f32 {
    self.volume_1.sample(position) + self.volume_2.sample(position)
  }
}


#[cfg(test)]
mod tests {
  use ultraviolet::{UVec3, Vec3};

  use crate::volume::{Plane, PlaneSettings, Plus, Sphere, SphereSettings, Terrain, TerrainSettings, Volume};

  #[test]
  fn plane_is_negative_below_height() {
    let plane = Plane::new(PlaneSettings { height: 32.5 });
    assert_eq!(plane.sample(UVec3::new(7, 32, 3)), -0.5);
    assert_eq!(plane.sample(UVec3::new(7, 33, 3)), 0.5);
  }

  #[test]
  fn sphere_is_negative_inside() {
    let sphere = Sphere::new(SphereSettings { center: Vec3::new(4.0, 4.0, 4.0), radius: 2.0 });
    assert_eq!(sphere.sample(UVec3::new(4, 4, 4)), -2.0);
    assert_eq!(sphere.sample(UVec3::new(4, 4, 7)), 1.0);
  }

  #[test]
  fn sample_field_uses_lattice_order() {
    let plane = Plane::new(PlaneSettings { height: 1.5 });
    let field = plane.sample_field(UVec3::new(2, 3, 2));
    assert_eq!(field.as_slice(), &[-1.5, -1.5, -0.5, -0.5, 0.5, 0.5, -1.5, -1.5, -0.5, -0.5, 0.5, 0.5]);
  }

  #[test]
  fn terrain_is_deterministic_and_bounded() {
    let settings = TerrainSettings::default();
    let a = Terrain::new(settings).sample_field(UVec3::new(9, 9, 9));
    let b = Terrain::new(settings).sample_field(UVec3::new(9, 9, 9));
    assert_eq!(a.as_slice(), b.as_slice());
    // Ground level is at 0.25 of the height, noise moves it by at most the amplitude.
    assert!(a.sample(4, 0, 4) < 0.0);
    let top = Terrain::new(settings).sample(UVec3::new(4, 64, 4));
    assert!(top > 0.0);
  }

  #[test]
  fn plus_adds_samples() {
    let plane = Plane::new(PlaneSettings { height: 1.0 });
    let plus = Plus::new(plane, plane);
    assert_eq!(plus.sample(UVec3::new(0, 3, 0)), 4.0);
  }
}
