//! Draw-ordered chunk store
//!
//! Keeps chunks sorted ascending by `y`, which is also the draw order:
//! earlier chunks are composited first and end up visually underneath.
//! Chunks with equal `y` keep their insertion order.

use crate::math::Span;
use crate::streaming::chunk::Chunk;

/// Ordered sequence of chunks with horizontal eviction
#[derive(Debug, Default)]
pub struct ChunkStore {
    /// Sorted by `y`, ties in insertion order
    chunks: Vec<Chunk>,
}

impl ChunkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Insert a chunk at its draw-order position
    ///
    /// # Returns
    /// The index the chunk was inserted at
    pub fn insert(&mut self, chunk: Chunk) -> usize {
        let index = self.chunks.partition_point(|c| c.y <= chunk.y);
        self.chunks.insert(index, chunk);
        index
    }

    /// Remove every chunk whose `x` lies outside `keep`
    ///
    /// # Returns
    /// Number of chunks removed
    pub fn evict_outside(&mut self, keep: Span) -> usize {
        let before = self.chunks.len();
        self.chunks.retain(|c| keep.contains(c.x));
        before - self.chunks.len()
    }

    /// Iterate, in draw order, over chunks whose `x` lies inside `window`
    pub fn visible(&self, window: Span) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(move |c| window.contains(c.x))
    }

    /// Iterate over all chunks in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter()
    }

    /// Get the number of chunks in the store
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Check the draw-order invariant
    pub fn is_ordered(&self) -> bool {
        self.chunks.windows(2).all(|w| w[0].y <= w[1].y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::FeatureKind;

    fn make_chunk(x: f64, y: f64, tag: &str) -> Chunk {
        Chunk::new(FeatureKind::Mountain, x, y, tag.to_string())
    }

    #[test]
    fn test_store_new() {
        let store = ChunkStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(store.is_ordered());
    }

    #[test]
    fn test_insert_keeps_y_order() {
        let mut store = ChunkStore::new();
        for (i, y) in [500.0, 300.0, 700.0, -9700.0, 450.0, 300.0].iter().enumerate() {
            store.insert(make_chunk(i as f64, *y, ""));
        }
        assert!(store.is_ordered());
        let ys: Vec<f64> = store.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![-9700.0, 300.0, 300.0, 450.0, 500.0, 700.0]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut store = ChunkStore::new();
        store.insert(make_chunk(0.0, 100.0, "first"));
        store.insert(make_chunk(0.0, 100.0, "second"));
        store.insert(make_chunk(0.0, 50.0, "under"));
        store.insert(make_chunk(0.0, 100.0, "third"));

        let tags: Vec<&str> = store.iter().map(|c| c.payload.as_str()).collect();
        assert_eq!(tags, vec!["under", "first", "second", "third"]);
    }

    #[test]
    fn test_insert_returns_index() {
        let mut store = ChunkStore::new();
        assert_eq!(store.insert(make_chunk(0.0, 10.0, "")), 0);
        assert_eq!(store.insert(make_chunk(0.0, 30.0, "")), 1);
        assert_eq!(store.insert(make_chunk(0.0, 20.0, "")), 1);
        assert_eq!(store.insert(make_chunk(0.0, 0.0, "")), 0);
    }

    #[test]
    fn test_evict_outside() {
        let mut store = ChunkStore::new();
        for x in [-6000.0, -100.0, 0.0, 2500.0, 9000.0] {
            store.insert(make_chunk(x, x * 0.01, ""));
        }
        let removed = store.evict_outside(Span::new(-5000.0, 8000.0));
        assert_eq!(removed, 2);
        assert_eq!(store.len(), 3);
        assert!(store.iter().all(|c| c.x >= -5000.0 && c.x <= 8000.0));
        assert!(store.is_ordered());
    }

    #[test]
    fn test_visible_preserves_draw_order() {
        let mut store = ChunkStore::new();
        store.insert(make_chunk(10.0, 600.0, "front"));
        store.insert(make_chunk(5000.0, 100.0, "far away"));
        store.insert(make_chunk(20.0, 200.0, "back"));

        let tags: Vec<&str> = store
            .visible(Span::new(0.0, 100.0))
            .map(|c| c.payload.as_str())
            .collect();
        assert_eq!(tags, vec!["back", "front"]);
    }
}
