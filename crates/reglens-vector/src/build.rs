use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};

use reglens_core::traits::{Embedder, VectorIndex};
use reglens_core::types::Corpus;

use crate::flat::FlatL2Index;

/// Embeds every chunk and fills a flat index in corpus order, so vector ids
/// and chunk ids stay in lockstep.
pub fn build_index(corpus: &Corpus, embedder: &dyn Embedder) -> Result<FlatL2Index> {
    let mut index = FlatL2Index::new(embedder.dim());
    if corpus.is_empty() {
        tracing::debug!("empty corpus, nothing to index");
        return Ok(index);
    }

    let pb = ProgressBar::new(corpus.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%)")?
            .progress_chars("#>-"),
    );
    for chunk in corpus.iter() {
        let mut vectors = embedder.embed_batch(std::slice::from_ref(&chunk.text))?;
        let vector = vectors
            .pop()
            .ok_or_else(|| anyhow!("embedder returned no vector for chunk {}", chunk.id))?;
        index.add(std::slice::from_ref(&vector))?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    tracing::info!(chunks = corpus.len(), dim = index.dim(), "built flat index");
    Ok(index)
}
