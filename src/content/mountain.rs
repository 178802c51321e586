//! Mountain silhouettes with hatching and vegetation.

use std::f64::consts::PI;

use rand::Rng;
use rand::rngs::StdRng;

use super::brush;
use super::style::StyleConfig;
use crate::core::DVec2;
use crate::generation::Placement;
use crate::terrain::NoiseField;

const LAYERS: usize = 3;

/// Ridge line from the left base to the right base of a peak centred on `base`.
pub fn silhouette(
    noise: &dyn NoiseField,
    resolution: usize,
    base: DVec2,
    width: f64,
    height: f64,
    phase: f64,
) -> Vec<DVec2> {
    let resolution = resolution.max(3);
    (0..=resolution)
        .map(|i| {
            let t = i as f64 / resolution as f64;
            let rough = 0.65 + 0.35 * noise.unit(t * 3.0, phase, 0.0);
            let rise = (t * PI).sin().powf(1.4) * rough;
            DVec2::new(base.x + (t - 0.5) * width, base.y - height * rise)
        })
        .collect()
}

pub fn paint(
    noise: &dyn NoiseField,
    style: &StyleConfig,
    placement: &Placement,
    rng: &mut StdRng,
) -> String {
    let base = DVec2::new(placement.x, placement.y);
    let width = style.mountain_width * (0.6 + placement.intensity);
    let height = style.mountain_height * (0.4 + placement.intensity);
    let phase = rng.random::<f64>() * 100.0;

    let mut svg = String::new();
    let mut crest = Vec::new();
    for layer in 0..LAYERS {
        let shrink = 1.0 - layer as f64 * 0.2;
        let ridge = silhouette(
            noise,
            style.resolution,
            base,
            width * shrink,
            height * shrink,
            phase + layer as f64,
        );
        svg.push_str(&brush::polygon(&ridge, &style.paper, &style.ink, 2.0));
        if layer == 0 {
            crest = ridge;
        }
    }

    // Hatching from the crest downwards
    let hatches = (width / 40.0).ceil() as usize;
    for k in 0..hatches {
        let idx = rng.random_range(1..crest.len() - 1);
        let top = crest[idx];
        let depth = (base.y - top.y) * rng.random_range(0.2..0.6);
        let slant = (rng.random::<f64>() - 0.5) * 20.0;
        let pts = [
            top,
            top + DVec2::new(slant * 0.5, depth * 0.5),
            top + DVec2::new(slant, depth),
        ];
        svg.push_str(&brush::stroke(noise, &pts, 2.5, &style.ink, phase + k as f64));
    }

    if placement.intensity > style.vegetation_threshold {
        for top in crest.iter().skip(2).step_by(3) {
            if !rng.random_bool(0.4) {
                continue;
            }
            let trunk = 12.0 + rng.random::<f64>() * 10.0;
            let crown = *top - DVec2::new(0.0, trunk);
            svg.push_str(&brush::line(&[*top, crown], &style.ink, 1.5));
            svg.push_str(&brush::dot(crown, 3.0 + rng.random::<f64>() * 2.0, &style.ink));
        }
    }

    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::FeatureKind;
    use crate::terrain::{FbmNoise, NoiseParams};
    use rand::SeedableRng;

    #[test]
    fn test_silhouette_ends_at_base() {
        let noise = FbmNoise::new(1, NoiseParams::default());
        let base = DVec2::new(100.0, 400.0);
        let ridge = silhouette(&noise, 20, base, 200.0, 150.0, 0.0);
        assert_eq!(ridge.len(), 21);
        assert!((ridge[0].x - 0.0).abs() < 1e-9);
        assert!((ridge[20].x - 200.0).abs() < 1e-9);
        assert!((ridge[0].y - 400.0).abs() < 1e-9);
        assert!((ridge[20].y - 400.0).abs() < 1e-6);
        assert!(ridge.iter().all(|p| p.y <= 400.0 + 1e-9 && p.y >= 250.0 - 1e-9));
    }

    #[test]
    fn test_paint_mountain() {
        let noise = FbmNoise::new(1, NoiseParams::default());
        let style = StyleConfig::default();
        let placement = Placement::new(FeatureKind::Mountain, 250.0, 500.0, 0.8);
        let mut rng = StdRng::seed_from_u64(3);

        let svg = paint(&noise, &style, &placement, &mut rng);
        assert!(svg.matches("<polyline").count() >= LAYERS);
        assert!(svg.contains("<circle"), "strong mountains carry vegetation");
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_weak_mountain_has_no_vegetation() {
        let noise = FbmNoise::new(1, NoiseParams::default());
        let style = StyleConfig::default();
        let placement = Placement::new(FeatureKind::Mountain, 0.0, 400.0, 0.31);
        let mut rng = StdRng::seed_from_u64(3);

        let svg = paint(&noise, &style, &placement, &mut rng);
        assert!(!svg.contains("<circle"));
    }
}
