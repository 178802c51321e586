//! Inkscroll - an endlessly scrolling procedural ink-wash landscape

pub mod core;
pub mod math;
pub mod terrain;
pub mod generation;
pub mod content;
pub mod streaming;
pub mod scene;
