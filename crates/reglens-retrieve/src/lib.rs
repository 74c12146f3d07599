//! Query-side orchestration: embed the query, search the index, resolve ids
//! back to corpus chunks.

use reglens_core::error::{Error, Result};
use reglens_core::traits::{Embedder, VectorIndex};
use reglens_core::types::{Corpus, RetrievedChunk};

pub const DEFAULT_TOP_K: usize = 3;

pub struct SemanticSearcher<VI: VectorIndex> {
    embedder: Box<dyn Embedder>,
    index: VI,
}

impl<VI: VectorIndex> SemanticSearcher<VI> {
    pub fn new(embedder: Box<dyn Embedder>, index: VI) -> Self {
        Self { embedder, index }
    }

    /// Returns up to `top_k` chunks by ascending distance to the query.
    ///
    /// `top_k == 0` and an empty corpus are rejected before the index is
    /// touched. An id the corpus cannot resolve means index and corpus have
    /// drifted apart; that is a fatal logic error, never retried.
    pub fn search(&self, query: &str, corpus: &Corpus, top_k: usize) -> Result<Vec<RetrievedChunk>> {
        if top_k == 0 {
            return Err(Error::InvalidArgument("top_k must be at least 1".to_string()));
        }
        if corpus.is_empty() {
            return Err(Error::InvalidArgument("corpus is empty".to_string()));
        }

        let mut query_vecs = self
            .embedder
            .embed_batch(&[query.to_string()])
            .map_err(|e| Error::Embedding(e.to_string()))?;
        if query_vecs.is_empty() {
            return Err(Error::Embedding("embedder returned no query vector".to_string()));
        }
        let query_vec = query_vecs.remove(0);

        tracing::debug!(top_k, corpus_len = corpus.len(), "running semantic search");
        let hits = self
            .index
            .search(&query_vec, top_k)
            .map_err(|e| Error::Operation(e.to_string()))?;

        let mut results = Vec::with_capacity(hits.len());
        for hit in hits {
            let chunk = corpus.get(hit.id).ok_or(Error::IndexOutOfRange {
                id: hit.id,
                len: corpus.len(),
            })?;
            results.push(RetrievedChunk {
                chunk: chunk.clone(),
                distance: hit.distance,
            });
        }
        Ok(results)
    }
}
