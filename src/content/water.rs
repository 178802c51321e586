//! Water reflections drawn under a mountain.

use rand::Rng;
use rand::rngs::StdRng;

use super::brush;
use super::style::StyleConfig;
use crate::core::DVec2;
use crate::generation::Placement;
use crate::terrain::NoiseField;

const RIPPLES: usize = 8;
const RIPPLE_POINTS: usize = 6;

pub fn paint(
    noise: &dyn NoiseField,
    style: &StyleConfig,
    placement: &Placement,
    rng: &mut StdRng,
) -> String {
    let span = style.mountain_width * (0.6 + placement.intensity);
    let mut svg = String::new();

    for k in 0..RIPPLES {
        let y = placement.y + 10.0 + k as f64 * 12.0 + rng.random::<f64>() * 6.0;
        let half = span * (0.15 + rng.random::<f64>() * 0.3) * (1.0 - k as f64 / RIPPLES as f64);
        let cx = placement.x + (rng.random::<f64>() - 0.5) * span * 0.5;
        let phase = rng.random::<f64>() * 50.0;

        let pts: Vec<DVec2> = (0..RIPPLE_POINTS)
            .map(|i| {
                let t = i as f64 / (RIPPLE_POINTS - 1) as f64;
                let wobble = (noise.unit(t * 2.0, phase, 1.0) - 0.5) * 6.0;
                DVec2::new(cx - half + t * 2.0 * half, y + wobble)
            })
            .collect();
        svg.push_str(&brush::stroke(noise, &pts, 1.5, &style.ink, phase));
    }

    svg
}
