pub mod vector;

pub use vector::{IndexError, ScoredChunk, VectorIndex};
