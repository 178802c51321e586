//! Closed horizontal interval

use serde::{Deserialize, Serialize};

/// Horizontal interval `[min, max]` in world units
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    /// Create span from its bounds
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Zero-width span at a single position
    pub fn point(x: f64) -> Self {
        Self { min: x, max: x }
    }

    /// Get width (max - min), zero for empty or inverted spans
    pub fn width(&self) -> f64 {
        (self.max - self.min).max(0.0)
    }

    /// True when the span covers no horizontal extent
    pub fn is_empty(&self) -> bool {
        !(self.max > self.min)
    }

    /// Check if x lies inside the span (inclusive)
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Return the span grown by `margin` on both sides
    pub fn expanded(&self, margin: f64) -> Span {
        Span {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Clamp x into the span
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.min).min(self.max)
    }

    /// Distance from x to the nearest point of the span (zero inside)
    pub fn distance(&self, x: f64) -> f64 {
        (x - self.clamp(x)).abs()
    }

    /// Return merged span containing both
    pub fn merged(&self, other: &Span) -> Span {
        Span {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
