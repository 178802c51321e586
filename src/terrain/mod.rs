//! Procedural noise sources

pub mod field;
pub use field::{ConstantNoise, FbmNoise, NoiseField, NoiseParams};
