//! Scene configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::StyleConfig;
use crate::core::{Error, Result};
use crate::generation::PlannerConfig;
use crate::terrain::NoiseParams;

/// Configuration for one scrolling landscape session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Random seed for noise, planning and painting
    pub seed: u32,
    /// Width of each newly planned span
    pub chunk_width: f64,
    /// Chunks further than this many chunk widths from the viewport are evicted
    pub eviction_multiplier: f64,
    /// Extra distance either side of the viewport included when composing
    pub compose_margin: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Zoom applied to the view rectangle
    pub zoom: f64,
    /// Cursor position at session start
    pub initial_cursor: f64,
    pub noise: NoiseParams,
    pub planner: PlannerConfig,
    pub style: StyleConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            chunk_width: 512.0,
            eviction_multiplier: 10.0,
            compose_margin: 100.0,
            viewport_width: 3000.0,
            viewport_height: 800.0,
            zoom: 1.142,
            initial_cursor: 0.0,
            noise: NoiseParams::default(),
            planner: PlannerConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the scene cannot run with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("chunk_width", self.chunk_width),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("zoom", self.zoom),
        ];
        for (name, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(Error::Config(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !(self.eviction_multiplier >= 0.0) || !(self.compose_margin >= 0.0) {
            return Err(Error::Config(
                "eviction_multiplier and compose_margin must not be negative".into(),
            ));
        }
        if !self.initial_cursor.is_finite() {
            return Err(Error::Config("initial_cursor must be finite".into()));
        }
        if let Some(reason) = self.planner.invalid_field() {
            return Err(Error::Config(reason.into()));
        }
        Ok(())
    }

    /// Distance beyond the viewport at which chunks are evicted
    pub fn eviction_distance(&self) -> f64 {
        self.eviction_multiplier * self.chunk_width
    }
}
