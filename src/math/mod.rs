//! Mathematical utilities

pub mod span;

pub use span::Span;
