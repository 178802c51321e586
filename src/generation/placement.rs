//! Placement decisions emitted by the planner.

use serde::{Deserialize, Serialize};

/// Kind of landscape feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Large mountain chosen at a local maximum of the peak field
    Mountain,
    /// Low-profile ridgeline far in the background
    DistantRidge,
    /// Low plateau filling an otherwise empty stretch
    FlatMountain,
    /// Small decorative boat
    Craft,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 4] = [
        FeatureKind::Mountain,
        FeatureKind::DistantRidge,
        FeatureKind::FlatMountain,
        FeatureKind::Craft,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::Mountain => "mountain",
            FeatureKind::DistantRidge => "distant_ridge",
            FeatureKind::FlatMountain => "flat_mountain",
            FeatureKind::Craft => "craft",
        }
    }
}

/// Where a feature goes and how strongly it expresses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: FeatureKind,
    pub x: f64,
    pub y: f64,
    pub intensity: f64,
}

impl Placement {
    pub fn new(kind: FeatureKind, x: f64, y: f64, intensity: f64) -> Self {
        Self { kind, x, y, intensity }
    }
}
