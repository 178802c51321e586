//! Small boats drifting on the water.

use rand::Rng;
use rand::rngs::StdRng;

use super::brush;
use super::style::StyleConfig;
use crate::core::DVec2;
use crate::generation::Placement;
use crate::terrain::NoiseField;

const HULL: [(f64, f64); 5] = [(-60.0, -4.0), (-45.0, 8.0), (0.0, 12.0), (45.0, 8.0), (65.0, -6.0)];
const CABIN: [(f64, f64); 4] = [(-25.0, 6.0), (-20.0, -18.0), (20.0, -18.0), (25.0, 6.0)];

pub fn paint(
    noise: &dyn NoiseField,
    style: &StyleConfig,
    placement: &Placement,
    rng: &mut StdRng,
) -> String {
    let scale = placement.y / style.craft_scale_divisor;
    let facing = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
    let origin = DVec2::new(placement.x, placement.y);
    let at = |(x, y): (f64, f64)| origin + DVec2::new(x * facing, y) * scale;

    let hull: Vec<DVec2> = HULL.iter().copied().map(at).collect();
    let cabin: Vec<DVec2> = CABIN.iter().copied().map(at).collect();
    let mast = [at((-30.0, -18.0)), at((-30.0, -70.0))];

    let mut svg = brush::polygon(&cabin, &style.paper, &style.ink, 1.0);
    svg.push_str(&brush::polygon(&hull, &style.paper, &style.ink, 1.5));
    svg.push_str(&brush::stroke(noise, &hull, 3.0 * scale, &style.ink, rng.random::<f64>() * 10.0));
    svg.push_str(&brush::line(&mast, &style.ink, 1.5 * scale));
    svg
}
