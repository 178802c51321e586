//! Placement planner that decides where landscape features go in one new span
//!
//! Each call scans the span at a fixed step and runs four independent passes:
//! 1. Mountains at local maxima of the peak field (updates occupancy)
//! 2. Distant ridges once per ridge interval
//! 3. Flat filler clusters in buckets no mountain footprint has covered
//! 4. Sparse craft, widely spaced, ignoring occupancy
//!
//! Spacing is only enforced against decisions accepted within the same call.

use std::f64::consts::PI;

use rand::Rng;
use rand::rngs::StdRng;

use super::config::PlannerConfig;
use super::occupancy::OccupancyRecord;
use super::placement::{FeatureKind, Placement};
use super::span_rng;
use crate::math::Span;
use crate::terrain::NoiseField;

const PLANNER_SALT: u64 = 0x706C_616E;

/// Stateless planner borrowing the scene's noise field and configuration.
pub struct PlacementPlanner<'a> {
    noise: &'a dyn NoiseField,
    config: &'a PlannerConfig,
    seed: u32,
}

impl<'a> PlacementPlanner<'a> {
    pub fn new(noise: &'a dyn NoiseField, config: &'a PlannerConfig, seed: u32) -> Self {
        Self { noise, config, seed }
    }

    /// Peak field. Only the horizontal coordinate is sampled.
    pub fn peak(&self, x: f64, _y: f64) -> f64 {
        let n = self.noise.unit(x * self.config.sample_frequency, 0.0, 0.0);
        (n - self.config.peak_floor).max(0.0) * 2.0
    }

    /// Distance falloff: high where the peak field's base noise is low.
    pub fn falloff(&self, x: f64) -> f64 {
        1.0 - self.noise.unit(x * self.config.sample_frequency, 0.0, 0.0)
    }

    /// Secondary peak field at double frequency on a separate slice.
    pub fn secondary_peak(&self, x: f64) -> f64 {
        let n = self.noise.unit(x * self.config.sample_frequency * 2.0, 2.0, 0.0);
        (n - self.config.peak_floor).max(0.0) * 2.0
    }

    /// Ridge-height envelope in [0, 1] bounding candidate heights.
    pub fn envelope(&self, x: f64) -> f64 {
        self.noise.unit(x * self.config.envelope_frequency, PI, 0.0)
    }

    /// True if (x, y) exceeds the threshold and no neighbour is higher.
    fn is_local_max(&self, x: f64, y: f64) -> bool {
        let z0 = self.peak(x, y);
        if z0 <= self.config.peak_threshold {
            return false;
        }
        let r = self.config.neighborhood_radius;
        for dx in -r..=r {
            for dy in -r..=r {
                if self.peak(x + dx as f64, y + dy as f64) > z0 {
                    return false;
                }
            }
        }
        true
    }

    /// Ridge interval multiple inside the half-open step window starting at
    /// x, if any. Windows partition the span, so each multiple is claimed
    /// exactly once.
    fn ridge_in_window(&self, x: f64, span: Span) -> Option<f64> {
        let interval = self.config.ridge_interval;
        let next = (x / interval).ceil() * interval;
        (next < (x + self.config.step).min(span.max)).then_some(next)
    }

    /// Scan positions for the span: `span.min + i * step` below `span.max`.
    fn steps(&self, span: Span) -> impl Iterator<Item = f64> {
        let step = self.config.step;
        let count = if span.is_empty() || !(step > 0.0) {
            0
        } else {
            (span.width() / step).ceil() as usize
        };
        let min = span.min;
        (0..count).map(move |i| min + i as f64 * step)
    }

    /// Plan all features for `span`, updating `occupancy` for accepted mountains.
    pub fn plan(&self, span: Span, occupancy: &mut OccupancyRecord) -> Vec<Placement> {
        let mut accepted = AcceptedSet::default();
        if span.is_empty() || !(self.config.step > 0.0) {
            return accepted.into_inner();
        }

        let cfg = self.config;
        let mut rng = span_rng(self.seed, span, PLANNER_SALT);

        for x in self.steps(span) {
            self.place_mountains(x, &mut rng, &mut accepted, occupancy);

            if let Some(rx) = self.ridge_in_window(x, span) {
                let y = cfg.ridge_base_y - rng.random::<f64>() * cfg.ridge_y_spread;
                let ridge = Placement::new(FeatureKind::DistantRidge, rx, y, self.falloff(rx));
                accepted.try_add(ridge, cfg.min_distance);
            }
        }

        for x in self.steps(span) {
            if occupancy.count_at(x) != 0 || !chance(&mut rng, cfg.filler_probability) {
                continue;
            }
            if cfg.filler_max_count == 0 {
                continue;
            }
            let count = rng.random_range(1..=cfg.filler_max_count);
            for j in 0..count {
                let fx = x + jitter(&mut rng, cfg.filler_jitter);
                let fy = cfg.filler_base_y - j as f64 * cfg.filler_y_step;
                let intensity = self.secondary_peak(fx);
                let filler = Placement::new(FeatureKind::FlatMountain, fx, fy, intensity);
                accepted.try_add(filler, cfg.min_distance);
            }
        }

        for x in self.steps(span) {
            if !chance(&mut rng, cfg.craft_probability) {
                continue;
            }
            let nearness = rng.random::<f64>();
            let y = cfg.craft_base_y + nearness * cfg.craft_y_spread;
            accepted.try_add(
                Placement::new(FeatureKind::Craft, x, y, nearness),
                cfg.craft_min_distance,
            );
        }

        let placements = accepted.into_inner();
        log::debug!(
            "Planned span [{:.0}, {:.0}]: {} placements ({} mountains)",
            span.min,
            span.max,
            placements.len(),
            placements.iter().filter(|p| p.kind == FeatureKind::Mountain).count(),
        );
        placements
    }

    fn place_mountains(
        &self,
        x: f64,
        rng: &mut StdRng,
        accepted: &mut AcceptedSet,
        occupancy: &mut OccupancyRecord,
    ) {
        let cfg = self.config;
        let bound = self.envelope(x) * cfg.max_candidate_height;
        let mut j = 0;
        loop {
            let y = j as f64 * cfg.candidate_height_step;
            if !(y < bound) {
                break;
            }
            j += 1;
            if !self.is_local_max(x, y) {
                continue;
            }
            let mx = x + jitter(rng, cfg.peak_jitter);
            let mountain = Placement::new(
                FeatureKind::Mountain,
                mx,
                y + cfg.peak_y_offset,
                self.peak(x, y),
            );
            if accepted.try_add(mountain, cfg.min_distance) {
                occupancy.cover(mx, cfg.footprint_radius);
            }
        }
    }
}

/// Uniform offset in `[-amplitude, amplitude)`.
fn jitter(rng: &mut StdRng, amplitude: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * 2.0 * amplitude
}

/// Bernoulli draw that saturates out-of-range probabilities instead of panicking.
fn chance(rng: &mut StdRng, p: f64) -> bool {
    if !(p > 0.0) {
        false
    } else if p >= 1.0 {
        true
    } else {
        rng.random_bool(p)
    }
}

/// Decisions accepted so far in one planning call.
#[derive(Default)]
struct AcceptedSet {
    placements: Vec<Placement>,
}

impl AcceptedSet {
    /// Accept `candidate` if no accepted decision lies closer than `min_distance`.
    fn try_add(&mut self, candidate: Placement, min_distance: f64) -> bool {
        if self
            .placements
            .iter()
            .any(|p| (p.x - candidate.x).abs() < min_distance)
        {
            return false;
        }
        self.placements.push(candidate);
        true
    }

    fn into_inner(self) -> Vec<Placement> {
        self.placements
    }
}
