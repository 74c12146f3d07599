use crate::types::SearchHit;

/// Text-to-vector capability.
///
/// Implementations must be order-preserving and deterministic for a fixed
/// model: the same input yields the same vector, run to run.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}

/// Nearest-neighbor lookup over vectors stored with positional ids.
pub trait VectorIndex: Send + Sync {
    fn dim(&self) -> usize;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to `k` hits by ascending L2 distance, ties broken by lowest id.
    /// `k` larger than the stored count returns everything, in order.
    fn search(&self, query_vec: &[f32], k: usize) -> anyhow::Result<Vec<SearchHit>>;
}
