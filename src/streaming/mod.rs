//! Materialized scene content and its draw-ordered storage

pub mod chunk;
pub mod chunk_store;

pub use chunk::{Chunk, INVALID_NUMBER};
pub use chunk_store::ChunkStore;
