//! Mutable scene state owned by the scene manager

use crate::generation::OccupancyRecord;
use crate::math::Span;
use crate::scene::config::SceneConfig;
use crate::scene::viewport::Viewport;
use crate::streaming::{Chunk, ChunkStore};

/// Everything a session accumulates: coverage, chunks, loaded span, viewport
/// and the last composed render buffer.
#[derive(Debug)]
pub struct SceneState {
    pub occupancy: OccupancyRecord,
    pub chunks: ChunkStore,
    /// Horizontal span already handed to the planner; never shrinks
    pub loaded: Span,
    pub viewport: Viewport,
    pub buffer: String,
}

impl SceneState {
    /// Fresh state with an empty loaded span aligned to the chunk grid
    pub fn new(config: &SceneConfig, cursor_x: f64) -> Self {
        let anchor = (cursor_x / config.chunk_width).floor() * config.chunk_width;
        Self {
            occupancy: OccupancyRecord::new(config.planner.step),
            chunks: ChunkStore::new(),
            loaded: Span::point(anchor),
            viewport: Viewport::new(
                cursor_x,
                config.viewport_width,
                config.viewport_height,
                config.zoom,
            ),
            buffer: String::new(),
        }
    }

    /// Sanitize and insert a chunk at its draw-order position
    pub fn insert_chunk(&mut self, mut chunk: Chunk, sentinel: f64) -> usize {
        if chunk.sanitize(sentinel) {
            log::warn!(
                "Replaced invalid numbers in {} chunk at x={:.1}",
                chunk.kind.name(),
                chunk.x
            );
        }
        self.chunks.insert(chunk)
    }
}
