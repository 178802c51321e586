//! Distant ridgelines in pale wash.

use std::f64::consts::PI;

use rand::Rng;
use rand::rngs::StdRng;

use super::brush;
use super::style::StyleConfig;
use crate::core::DVec2;
use crate::generation::Placement;
use crate::terrain::NoiseField;

pub fn paint(
    noise: &dyn NoiseField,
    style: &StyleConfig,
    placement: &Placement,
    rng: &mut StdRng,
) -> String {
    let length = if style.ridge_lengths.is_empty() {
        1000.0
    } else {
        style.ridge_lengths[rng.random_range(0..style.ridge_lengths.len())]
    };
    let phase = rng.random::<f64>() * 100.0;
    let resolution = style.resolution.max(3) * 2;

    let mut svg = String::new();
    // Two passes: a faint broad wash, then a tighter darker band
    for pass in 0..2 {
        let height = style.ridge_height * (1.0 - pass as f64 * 0.35);
        let pts: Vec<DVec2> = (0..=resolution)
            .map(|i| {
                let t = i as f64 / resolution as f64;
                let bumps = noise.unit(t * length * 0.005, phase + pass as f64, 0.0);
                let rise = (t * PI).sin().powf(0.5) * (0.3 + 0.7 * bumps);
                DVec2::new(
                    placement.x + (t - 0.5) * length,
                    placement.y - height * rise,
                )
            })
            .collect();
        svg.push_str(&brush::polygon(&pts, &style.wash, "none", 0.0));
    }
    svg
}
