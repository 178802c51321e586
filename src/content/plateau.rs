//! Flat-topped filler mountains.

use std::f64::consts::PI;

use rand::Rng;
use rand::rngs::StdRng;

use super::brush;
use super::style::StyleConfig;
use crate::core::DVec2;
use crate::generation::Placement;
use crate::terrain::NoiseField;

/// Rise profile clipped at 1.0; lower `flatness` widens the flat top.
fn rise(t: f64, flatness: f64) -> f64 {
    ((t * PI).sin() / flatness.max(1e-3)).min(1.0)
}

pub fn paint(
    noise: &dyn NoiseField,
    style: &StyleConfig,
    placement: &Placement,
    rng: &mut StdRng,
) -> String {
    let width = style.plateau_min_width + rng.random::<f64>() * style.plateau_width_spread;
    let flatness = style.plateau_min_flatness + rng.random::<f64>() * style.plateau_flatness_spread;
    let phase = rng.random::<f64>() * 2.0 * PI;
    let height = style.plateau_height * (0.8 + 0.4 * placement.intensity);
    let resolution = style.resolution.max(3);

    let pts: Vec<DVec2> = (0..=resolution)
        .map(|i| {
            let t = i as f64 / resolution as f64;
            let grain = 0.85 + 0.15 * noise.unit(t * 5.0, phase, 2.0);
            DVec2::new(
                placement.x + (t - 0.5) * width,
                placement.y - height * rise(t, flatness) * grain,
            )
        })
        .collect();

    let mut svg = brush::polygon(&pts, &style.paper, &style.ink, 1.5);
    for k in 0..(width / 120.0) as usize {
        let t = rng.random_range(0.15..0.85);
        let top = DVec2::new(
            placement.x + (t - 0.5) * width,
            placement.y - height * rise(t, flatness) * 0.9,
        );
        let foot = top + DVec2::new(0.0, height * 0.4);
        svg.push_str(&brush::stroke(noise, &[top, foot], 2.0, &style.ink, phase + k as f64));
    }
    svg
}
