//! Seeded continuous noise fields

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

/// Keeps axis-aligned slices such as `y = 0` off the integer lattice,
/// where Perlin gradients collapse to a single axis.
const SLICE_OFFSET: [f64; 2] = [0.318_309_886, 0.618_033_988];

/// A seeded, continuous, reproducible scalar field.
///
/// `sample` returns values in approximately [-1, 1]. Identical arguments must
/// always produce identical results for the lifetime of the field.
pub trait NoiseField: Send + Sync {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;

    /// Same kind of field under a different seed
    fn reseeded(&self, seed: u32) -> Box<dyn NoiseField>;

    /// Sample remapped into [0, 1]
    fn unit(&self, x: f64, y: f64, z: f64) -> f64 {
        ((self.sample(x, y, z) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Parameters controlling the fractal noise
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    pub octaves: u32,     // FBM octaves (detail levels)
    pub persistence: f64, // FBM persistence (0.5 typical)
    pub lacunarity: f64,  // FBM lacunarity (2.0 typical)
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Fractal Brownian motion over Perlin noise
pub struct FbmNoise {
    params: NoiseParams,
    noise: Fbm<Perlin>,
}

impl FbmNoise {
    /// Create a new noise field with the given seed and parameters
    pub fn new(seed: u32, params: NoiseParams) -> Self {
        let noise = Fbm::<Perlin>::new(seed)
            .set_octaves(params.octaves.max(1) as usize)
            .set_persistence(params.persistence)
            .set_lacunarity(params.lacunarity);

        Self { params, noise }
    }
}

impl NoiseField for FbmNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise
            .get([x, y + SLICE_OFFSET[0], z + SLICE_OFFSET[1]])
            .clamp(-1.0, 1.0)
    }

    fn reseeded(&self, seed: u32) -> Box<dyn NoiseField> {
        Box::new(FbmNoise::new(seed, self.params.clone()))
    }
}

/// Degenerate field returning the same value everywhere.
///
/// Useful for calibrating planners against featureless terrain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstantNoise(pub f64);

impl NoiseField for ConstantNoise {
    fn sample(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.0
    }

    fn reseeded(&self, _seed: u32) -> Box<dyn NoiseField> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_params_default() {
        let params = NoiseParams::default();
        assert_eq!(params.octaves, 4);
        assert_eq!(params.persistence, 0.5);
        assert_eq!(params.lacunarity, 2.0);
    }

    #[test]
    fn test_sample_consistency() {
        let field = FbmNoise::new(12345, NoiseParams::default());
        let positions = [(0.1, 0.0, 0.0), (3.7, 2.0, 0.0), (-15.2, 3.14, 0.0)];

        for (x, y, z) in positions {
            let a = field.sample(x, y, z);
            let b = field.sample(x, y, z);
            assert_eq!(a, b, "Noise should be consistent at ({}, {}, {})", x, y, z);
            assert!((-1.0..=1.0).contains(&a));
        }
    }

    #[test]
    fn test_unit_range() {
        let field = FbmNoise::new(7, NoiseParams::default());
        for i in 0..200 {
            let v = field.unit(i as f64 * 0.173, 0.5, 0.0);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = FbmNoise::new(1, NoiseParams::default());
        let b = FbmNoise::new(2, NoiseParams::default());
        let differs = (0..20).any(|i| {
            let x = i as f64 * 0.37 + 0.11;
            a.sample(x, 0.5, 0.25) != b.sample(x, 0.5, 0.25)
        });
        assert!(differs);
    }

    #[test]
    fn test_continuity() {
        let field = FbmNoise::new(99, NoiseParams::default());
        let a = field.sample(1.2345, 0.0, 0.0);
        let b = field.sample(1.2345 + 1e-6, 0.0, 0.0);
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn test_reseeded_keeps_params() {
        let params = NoiseParams { octaves: 2, ..Default::default() };
        let field = FbmNoise::new(5, params.clone());
        let same = field.reseeded(5);
        let fresh = FbmNoise::new(5, params);
        for i in 0..10 {
            let x = i as f64 * 0.41 + 0.07;
            assert_eq!(same.sample(x, 0.0, 0.0), fresh.sample(x, 0.0, 0.0));
        }
        assert_eq!(ConstantNoise(0.25).reseeded(9).sample(1.0, 2.0, 3.0), 0.25);
    }

    #[test]
    fn test_constant_noise() {
        let field = ConstantNoise(0.0);
        assert_eq!(field.sample(10.0, 20.0, 30.0), 0.0);
        assert_eq!(field.unit(10.0, 20.0, 30.0), 0.5);
    }
}
