//! Content generators turning placement decisions into renderable chunks
//!
//! Each `FeatureKind` maps to exactly one generator; mountains additionally
//! produce a water reflection chunk ordered far beneath everything else.

pub mod brush;
pub mod craft;
pub mod mountain;
pub mod plateau;
pub mod ridge;
pub mod style;
pub mod water;

pub use style::StyleConfig;

use rand::rngs::StdRng;

use crate::generation::{FeatureKind, Placement};
use crate::streaming::Chunk;
use crate::terrain::NoiseField;

/// Paints placements using the scene's noise field and style.
pub struct ContentPainter<'a> {
    noise: &'a dyn NoiseField,
    style: &'a StyleConfig,
}

impl<'a> ContentPainter<'a> {
    pub fn new(noise: &'a dyn NoiseField, style: &'a StyleConfig) -> Self {
        Self { noise, style }
    }

    /// Generate the chunk(s) for one placement.
    pub fn paint(&self, placement: &Placement, rng: &mut StdRng) -> Vec<Chunk> {
        let Placement { kind, x, y, .. } = *placement;
        match kind {
            FeatureKind::Mountain => vec![
                Chunk::new(kind, x, y, mountain::paint(self.noise, self.style, placement, rng)),
                Chunk::new(
                    kind,
                    x,
                    y - self.style.reflection_offset,
                    water::paint(self.noise, self.style, placement, rng),
                ),
            ],
            FeatureKind::DistantRidge => vec![Chunk::new(
                kind,
                x,
                y,
                ridge::paint(self.noise, self.style, placement, rng),
            )],
            FeatureKind::FlatMountain => vec![Chunk::new(
                kind,
                x,
                y,
                plateau::paint(self.noise, self.style, placement, rng),
            )],
            FeatureKind::Craft => vec![Chunk::new(
                kind,
                x,
                y,
                craft::paint(self.noise, self.style, placement, rng),
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{FbmNoise, NoiseParams};
    use rand::SeedableRng;

    #[test]
    fn test_mountain_yields_reflection() {
        let noise = FbmNoise::new(1, NoiseParams::default());
        let style = StyleConfig::default();
        let painter = ContentPainter::new(&noise, &style);
        let mut rng = StdRng::seed_from_u64(1);

        let mountain = Placement::new(FeatureKind::Mountain, 40.0, 500.0, 0.6);
        let chunks = painter.paint(&mountain, &mut rng);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].y, 500.0);
        assert_eq!(chunks[1].y, 500.0 - 10000.0);
        assert_eq!(chunks[1].x, 40.0);
    }

    #[test]
    fn test_every_kind_paints_one_or_more_chunks() {
        let noise = FbmNoise::new(1, NoiseParams::default());
        let style = StyleConfig::default();
        let painter = ContentPainter::new(&noise, &style);
        let mut rng = StdRng::seed_from_u64(1);

        for kind in FeatureKind::ALL {
            let chunks = painter.paint(&Placement::new(kind, 0.0, 400.0, 0.5), &mut rng);
            assert!(!chunks.is_empty());
            for chunk in chunks {
                assert_eq!(chunk.kind, kind);
                assert!(!chunk.payload.is_empty());
            }
        }
    }

    #[test]
    fn test_painting_is_deterministic() {
        let noise = FbmNoise::new(9, NoiseParams::default());
        let style = StyleConfig::default();
        let painter = ContentPainter::new(&noise, &style);
        let placement = Placement::new(FeatureKind::FlatMountain, 10.0, 650.0, 0.2);

        let a = painter.paint(&placement, &mut StdRng::seed_from_u64(4));
        let b = painter.paint(&placement, &mut StdRng::seed_from_u64(4));
        assert_eq!(a[0].payload, b[0].payload);
    }
}
