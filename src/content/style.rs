//! Visual style options for the content generators.

use serde::{Deserialize, Serialize};

/// Colours and per-kind sizing used when painting placements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Outline and brush colour
    pub ink: String,
    /// Fill that occludes content drawn earlier
    pub paper: String,
    /// Pale fill for far-away shapes
    pub wash: String,
    /// Points sampled along each silhouette
    pub resolution: usize,
    /// Reflections sit this far below their mountain in draw order
    pub reflection_offset: f64,
    /// Replaces invalid numbers found in generated markup
    pub invalid_number_sentinel: f64,

    pub mountain_width: f64,
    pub mountain_height: f64,
    /// Mountains stronger than this carry vegetation
    pub vegetation_threshold: f64,

    pub ridge_height: f64,
    pub ridge_lengths: Vec<f64>,

    pub plateau_min_width: f64,
    pub plateau_width_spread: f64,
    pub plateau_height: f64,
    pub plateau_min_flatness: f64,
    pub plateau_flatness_spread: f64,

    /// Craft scale is `y / craft_scale_divisor`
    pub craft_scale_divisor: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            ink: "rgba(100,100,100,0.3)".to_string(),
            paper: "white".to_string(),
            wash: "rgba(100,100,100,0.1)".to_string(),
            resolution: 48,
            reflection_offset: 10000.0,
            invalid_number_sentinel: -1000.0,
            mountain_width: 500.0,
            mountain_height: 320.0,
            vegetation_threshold: 0.45,
            ridge_height: 150.0,
            ridge_lengths: vec![500.0, 1000.0, 1500.0],
            plateau_min_width: 600.0,
            plateau_width_spread: 400.0,
            plateau_height: 100.0,
            plateau_min_flatness: 0.5,
            plateau_flatness_spread: 0.2,
            craft_scale_divisor: 800.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StyleConfig::default();
        assert_eq!(style.reflection_offset, 10000.0);
        assert_eq!(style.invalid_number_sentinel, -1000.0);
        assert_eq!(style.ridge_lengths, vec![500.0, 1000.0, 1500.0]);
        assert!(style.resolution >= 3);
    }
}
