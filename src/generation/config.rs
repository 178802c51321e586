//! Placement planner configuration.

use serde::{Deserialize, Serialize};

/// Constants driving the placement planner.
///
/// Distances are in world units, probabilities are per planner step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Horizontal scan step (also the occupancy bucket width).
    pub step: f64,
    /// Frequency applied to x before sampling the peak fields.
    pub sample_frequency: f64,
    /// Unit noise below this floor contributes nothing to the peak field.
    pub peak_floor: f64,
    /// Peak field value a local maximum must exceed.
    pub peak_threshold: f64,
    /// Half-size of the square neighbourhood checked for local maxima.
    pub neighborhood_radius: i32,
    /// Minimum horizontal distance between decisions of one planning call.
    pub min_distance: f64,
    /// Occupancy footprint radius around an accepted mountain.
    pub footprint_radius: f64,
    /// Candidate heights scan up to `envelope * max_candidate_height`.
    pub max_candidate_height: f64,
    pub candidate_height_step: f64,
    /// Added to the candidate height to give the mountain's base y.
    pub peak_y_offset: f64,
    /// Maximum horizontal jitter applied to an accepted mountain.
    pub peak_jitter: f64,
    /// Frequency of the ridge-height envelope field.
    pub envelope_frequency: f64,
    /// Distant ridges are emitted once per interval.
    pub ridge_interval: f64,
    pub ridge_base_y: f64,
    pub ridge_y_spread: f64,
    /// Chance per empty bucket of seeding a filler cluster.
    pub filler_probability: f64,
    pub filler_max_count: u32,
    pub filler_jitter: f64,
    pub filler_base_y: f64,
    pub filler_y_step: f64,
    /// Chance per step of emitting a craft.
    pub craft_probability: f64,
    pub craft_min_distance: f64,
    pub craft_base_y: f64,
    pub craft_y_spread: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            step: 5.0,
            sample_frequency: 0.03,
            peak_floor: 0.55,
            peak_threshold: 0.3,
            neighborhood_radius: 2,
            min_distance: 10.0,
            footprint_radius: 200.0,
            max_candidate_height: 480.0,
            candidate_height_step: 30.0,
            peak_y_offset: 300.0,
            peak_jitter: 500.0,
            envelope_frequency: 0.01,
            ridge_interval: 1000.0,
            ridge_base_y: 280.0,
            ridge_y_spread: 50.0,
            filler_probability: 0.01,
            filler_max_count: 4,
            filler_jitter: 700.0,
            filler_base_y: 700.0,
            filler_y_step: 50.0,
            craft_probability: 0.2,
            craft_min_distance: 400.0,
            craft_base_y: 300.0,
            craft_y_spread: 390.0,
        }
    }
}

impl PlannerConfig {
    /// Returns a description of the first invalid field, if any.
    pub fn invalid_field(&self) -> Option<&'static str> {
        if !(self.step > 0.0) {
            return Some("planner.step must be positive");
        }
        if !(self.candidate_height_step > 0.0) {
            return Some("planner.candidate_height_step must be positive");
        }
        if !(self.ridge_interval > 0.0) {
            return Some("planner.ridge_interval must be positive");
        }
        if self.neighborhood_radius < 0 {
            return Some("planner.neighborhood_radius must not be negative");
        }
        if self.min_distance < 0.0 || self.craft_min_distance < 0.0 || self.footprint_radius < 0.0 {
            return Some("planner distances must not be negative");
        }
        let probabilities = [self.filler_probability, self.craft_probability];
        if probabilities.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Some("planner probabilities must lie in [0, 1]");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.step, 5.0);
        assert_eq!(cfg.peak_threshold, 0.3);
        assert_eq!(cfg.neighborhood_radius, 2);
        assert_eq!(cfg.min_distance, 10.0);
        assert_eq!(cfg.footprint_radius, 200.0);
        assert_eq!(cfg.craft_min_distance, 400.0);
        assert!(cfg.invalid_field().is_none());
    }

    #[test]
    fn test_zero_step_rejected() {
        let cfg = PlannerConfig { step: 0.0, ..Default::default() };
        assert!(cfg.invalid_field().is_some());
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let cfg = PlannerConfig { craft_probability: 1.5, ..Default::default() };
        assert_eq!(cfg.invalid_field(), Some("planner probabilities must lie in [0, 1]"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: PlannerConfig = serde_json::from_str(r#"{"min_distance": 25.0}"#).unwrap();
        assert_eq!(cfg.min_distance, 25.0);
        assert_eq!(cfg.step, 5.0);
    }
}
