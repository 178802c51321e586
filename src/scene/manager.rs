//! Scene manager for growing, evicting and composing the endless landscape
//!
//! Every operation runs to completion synchronously. A scroll that crosses a
//! margin runs `load` → `evict` → `compose` in that order, so readers of the
//! render buffer never observe a partially updated chunk store.

use crate::content::ContentPainter;
use crate::core::Result;
use crate::generation::{PlacementPlanner, span_rng};
use crate::math::Span;
use crate::streaming::Chunk;
use crate::terrain::{FbmNoise, NoiseField};
use super::config::SceneConfig;
use super::state::SceneState;
use super::viewport::Viewport;

const CONTENT_SALT: u64 = 0x636F_6E74;

/// Lifecycle of the scene
///
/// `Loading`, `Evicting` and `Composing` are held only while that stage runs;
/// every stage returns the scene to `Steady` when it finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScenePhase {
    #[default]
    Uninitialized,
    Loading,
    Evicting,
    Composing,
    Steady,
}

/// What a scroll did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Scene was extended, evicted and recomposed
    Regenerated,
    /// Only the cursor moved; the host just needs a new view box
    ViewMoved,
}

/// Owns the scene state and keeps it consistent with the viewport.
pub struct SceneManager {
    config: SceneConfig,
    noise: Box<dyn NoiseField>,
    state: SceneState,
    phase: ScenePhase,
    spans_planned: usize,
}

impl SceneManager {
    /// Create a scene manager using fractal Perlin noise seeded from the config
    pub fn new(config: SceneConfig) -> Result<Self> {
        let noise = Box::new(FbmNoise::new(config.seed, config.noise.clone()));
        Self::with_noise(config, noise)
    }

    /// Create a scene manager over a caller-supplied noise field
    pub fn with_noise(config: SceneConfig, noise: Box<dyn NoiseField>) -> Result<Self> {
        config.validate()?;
        let state = SceneState::new(&config, config.initial_cursor);
        Ok(Self {
            config,
            noise,
            state,
            phase: ScenePhase::Uninitialized,
            spans_planned: 0,
        })
    }

    /// Extend the loaded span until the viewport has a chunk-width margin on
    /// both sides, planning and painting each new span.
    ///
    /// # Returns
    /// Number of spans planned
    pub fn load(&mut self) -> usize {
        self.phase = ScenePhase::Loading;
        let view = self.state.viewport.span();
        let width = self.config.chunk_width;
        let mut planned = 0;

        loop {
            let loaded = self.state.loaded;
            let span = if view.max > loaded.max - width {
                Span::new(loaded.max, loaded.max + width)
            } else if view.min < loaded.min + width {
                Span::new(loaded.min - width, loaded.min)
            } else {
                break;
            };

            log::debug!("Loading span [{:.0}, {:.0}]", span.min, span.max);
            self.load_span(span);
            self.state.loaded = loaded.merged(&span);
            planned += 1;
        }

        self.spans_planned += planned;
        self.phase = ScenePhase::Steady;
        planned
    }

    /// Plan one span and insert the painted chunks
    fn load_span(&mut self, span: Span) {
        let planner = PlacementPlanner::new(&*self.noise, &self.config.planner, self.config.seed);
        let plan = planner.plan(span, &mut self.state.occupancy);

        let painter = ContentPainter::new(&*self.noise, &self.config.style);
        let sentinel = self.config.style.invalid_number_sentinel;
        let mut rng = span_rng(self.config.seed, span, CONTENT_SALT);
        for placement in &plan {
            for chunk in painter.paint(placement, &mut rng) {
                self.state.insert_chunk(chunk, sentinel);
            }
        }
    }

    /// Drop chunks further than the eviction distance from the viewport
    ///
    /// # Returns
    /// Number of chunks removed
    pub fn evict(&mut self) -> usize {
        self.phase = ScenePhase::Evicting;
        let keep = self
            .state
            .viewport
            .span()
            .expanded(self.config.eviction_distance());
        let removed = self.state.chunks.evict_outside(keep);
        if removed > 0 {
            log::debug!(
                "Evicted {} chunks outside [{:.0}, {:.0}], {} remain",
                removed,
                keep.min,
                keep.max,
                self.state.chunks.len()
            );
        }
        self.phase = ScenePhase::Steady;
        removed
    }

    /// Rebuild the render buffer from visible chunks in draw order
    pub fn compose(&mut self) {
        self.phase = ScenePhase::Composing;
        let window = self.state.viewport.span().expanded(self.config.compose_margin);
        let SceneState { chunks, buffer, .. } = &mut self.state;

        buffer.clear();
        let mut count = 0;
        for chunk in chunks.visible(window) {
            buffer.push_str(&chunk.payload);
            count += 1;
        }
        log::trace!("Composed {} chunks ({} bytes)", count, buffer.len());
        self.phase = ScenePhase::Steady;
    }

    /// Run the full pipeline: load, evict, compose
    pub fn update(&mut self) {
        self.load();
        self.evict();
        self.compose();
    }

    /// True unless the cursor sits strictly inside the loaded span with a
    /// full viewport of planned content ahead of it
    pub fn needs_update(&self) -> bool {
        let cursor = self.state.viewport.cursor_x;
        let loaded = self.state.loaded;
        !(loaded.min < cursor && cursor < loaded.max - self.state.viewport.width)
    }

    /// Move the cursor, regenerating only when a margin is crossed
    pub fn scroll(&mut self, delta: f64) -> ScrollOutcome {
        self.state.viewport.cursor_x += delta;
        if self.needs_update() {
            self.update();
            ScrollOutcome::Regenerated
        } else {
            ScrollOutcome::ViewMoved
        }
    }

    /// Move the cursor without loading, evicting or composing
    pub fn set_cursor(&mut self, x: f64) {
        self.state.viewport.cursor_x = x;
    }

    /// Discard the scene and start again from the current cursor with a new
    /// seed, keeping the kind of noise field the manager was built with
    pub fn reseed(&mut self, seed: u32) {
        log::info!("Reseeding scene: {} -> {}", self.config.seed, seed);
        self.config.seed = seed;
        self.noise = self.noise.reseeded(seed);
        self.state = SceneState::new(&self.config, self.state.viewport.cursor_x);
        self.phase = ScenePhase::Uninitialized;
        self.spans_planned = 0;
    }

    /// Insert externally produced content, keeping draw order
    pub fn insert_chunk(&mut self, chunk: Chunk) -> usize {
        let sentinel = self.config.style.invalid_number_sentinel;
        self.state.insert_chunk(chunk, sentinel)
    }

    /// Last composed markup
    pub fn render_buffer(&self) -> &str {
        &self.state.buffer
    }

    /// View rectangle for the current cursor
    pub fn view_box(&self) -> String {
        self.state.viewport.view_box()
    }

    /// Render buffer wrapped in a standalone SVG document
    pub fn svg_document(&self) -> String {
        self.state.viewport.wrap_document(&self.state.buffer)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.state.viewport
    }

    pub fn loaded_span(&self) -> Span {
        self.state.loaded
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Chunk count currently held in the store
    pub fn chunk_count(&self) -> usize {
        self.state.chunks.len()
    }

    /// Total spans planned since the session (or last reseed) began
    pub fn spans_planned(&self) -> usize {
        self.spans_planned
    }
}
