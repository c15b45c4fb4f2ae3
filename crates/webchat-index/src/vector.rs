use std::cmp::Ordering;
use thiserror::Error;
use tracing::debug;
use webchat_core::models::Chunk;

#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    #[error("cannot build an index without embedded chunks")]
    Empty,

    #[error("embedding for chunk {chunk} is empty")]
    EmptyVector { chunk: String },

    #[error("dimension mismatch: index has {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("query vector has zero magnitude")]
    ZeroQuery,
}

/// A chunk with its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: f32,
}

#[derive(Debug)]
struct Entry {
    chunk: Chunk,
    vector: Vec<f32>,
    norm: f32,
}

/// Exact cosine-similarity index over one document's chunks.
///
/// Built once and read-only afterwards; share it behind an `Arc`.
#[derive(Debug)]
pub struct VectorIndex {
    entries: Vec<Entry>,
    dimension: usize,
}

impl VectorIndex {
    pub fn build(items: Vec<(Chunk, Vec<f32>)>) -> Result<Self, IndexError> {
        let dimension = match items.first() {
            Some((chunk, vector)) if vector.is_empty() => {
                return Err(IndexError::EmptyVector {
                    chunk: chunk.id.clone(),
                })
            }
            Some((_, vector)) => vector.len(),
            None => return Err(IndexError::Empty),
        };

        let mut entries = Vec::with_capacity(items.len());
        for (chunk, vector) in items {
            if vector.len() != dimension {
                return Err(IndexError::DimensionMismatch {
                    expected: dimension,
                    actual: vector.len(),
                });
            }
            let norm = norm(&vector);
            entries.push(Entry {
                chunk,
                vector,
                norm,
            });
        }

        Ok(Self { entries, dimension })
    }

    /// The `k` chunks most similar to `query`, best first.
    ///
    /// Ties keep document order. Chunks whose vector has zero magnitude never match.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        if query.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }
        let query_norm = norm(query);
        if query_norm == 0.0 {
            return Err(IndexError::ZeroQuery);
        }

        let mut scored: Vec<(usize, f32)> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.norm > 0.0)
            .map(|(pos, entry)| (pos, dot(query, &entry.vector) / (query_norm * entry.norm)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then(a.0.cmp(&b.0)));
        scored.truncate(k);

        debug!(
            candidates = self.entries.len(),
            returned = scored.len(),
            top_score = scored.first().map(|s| s.1),
            "vector search"
        );

        Ok(scored
            .into_iter()
            .map(|(pos, score)| ScoredChunk {
                chunk: self.entries[pos].chunk.clone(),
                score,
            })
            .collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Indexed chunks in insertion order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.entries.iter().map(|e| &e.chunk)
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f32]) -> f32 {
    dot(v, v).sqrt()
}
