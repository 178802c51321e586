//! Positioned renderable scene content

use serde::Serialize;

use crate::generation::FeatureKind;

/// Marker left in markup by non-finite arithmetic
pub const INVALID_NUMBER: &str = "NaN";

/// A materialized piece of scene content derived from one placement
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chunk {
    pub kind: FeatureKind,
    /// Horizontal anchor used for eviction and visibility
    pub x: f64,
    /// Depth proxy; larger y draws later
    pub y: f64,
    /// Serialized SVG fragment
    #[serde(skip)]
    pub payload: String,
}

impl Chunk {
    pub fn new(kind: FeatureKind, x: f64, y: f64, payload: String) -> Self {
        Self { kind, x, y, payload }
    }

    /// True if the payload carries an invalid numeric artifact
    pub fn has_invalid_numbers(&self) -> bool {
        self.payload.contains(INVALID_NUMBER)
    }

    /// Replace invalid numeric artifacts with `sentinel`.
    ///
    /// Returns true if anything was replaced.
    pub fn sanitize(&mut self, sentinel: f64) -> bool {
        if !self.has_invalid_numbers() {
            return false;
        }
        self.payload = self.payload.replace(INVALID_NUMBER, &sentinel.to_string());
        true
    }
}
