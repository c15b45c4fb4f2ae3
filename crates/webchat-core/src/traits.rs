use anyhow::Result;

/// Maps text to a fixed-dimension vector.
///
/// The same instance embeds both chunks and queries, so their vectors are
/// comparable.
pub trait Embedder: Send + Sync {
    fn model_name(&self) -> &str;
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}
