//! Scene management for the scrolling landscape

pub mod config;
pub mod manager;
pub mod state;
pub mod viewport;

pub use config::SceneConfig;
pub use manager::{SceneManager, ScenePhase, ScrollOutcome};
pub use state::SceneState;
pub use viewport::Viewport;
