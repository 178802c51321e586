//! Placement planning for new spans of landscape
//!
//! The planner is stateless apart from the occupancy record it is handed:
//! 1. `PlannerConfig` holds every planning constant
//! 2. `OccupancyRecord` tracks horizontal coverage across calls
//! 3. `PlacementPlanner` turns a new span into `Placement` decisions

pub mod config;
pub mod occupancy;
pub mod placement;
pub mod planner;

pub use config::PlannerConfig;
pub use occupancy::OccupancyRecord;
pub use placement::{FeatureKind, Placement};
pub use planner::PlacementPlanner;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::math::Span;

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Random stream owned by one span, reproducible from the seed and the span start.
///
/// `salt` separates independent consumers of the same span.
pub fn span_rng(seed: u32, span: Span, salt: u64) -> StdRng {
    let key = splitmix64(seed as u64 ^ salt.rotate_left(32)) ^ span.min.to_bits();
    StdRng::seed_from_u64(splitmix64(key))
}
