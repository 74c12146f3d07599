use std::cmp::Ordering;

use anyhow::{anyhow, Result};
use reglens_core::traits::VectorIndex;
use reglens_core::types::SearchHit;

/// Brute-force Euclidean nearest-neighbor index.
///
/// Vectors are stored flat in insertion order; a vector's id is its
/// insertion position, matching the corpus id space when filled in corpus
/// order. Search is an exact linear scan. `dim` must be positive. Nothing
/// is persisted; the index lives and dies with the run.
pub struct FlatL2Index {
    dim: usize,
    count: usize,
    data: Vec<f32>,
}

impl FlatL2Index {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            count: 0,
            data: Vec::new(),
        }
    }

    /// Appends vectors in order; ids continue from the current count.
    pub fn add(&mut self, vectors: &[Vec<f32>]) -> Result<()> {
        for v in vectors {
            if v.len() != self.dim {
                return Err(anyhow!(
                    "vector dim {} does not match index dim {}",
                    v.len(),
                    self.dim
                ));
            }
            self.data.extend_from_slice(v);
            self.count += 1;
        }
        Ok(())
    }
}

impl VectorIndex for FlatL2Index {
    fn dim(&self) -> usize {
        self.dim
    }

    fn len(&self) -> usize {
        self.count
    }

    fn search(&self, query_vec: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        if query_vec.len() != self.dim {
            return Err(anyhow!(
                "query dim {} does not match index dim {}",
                query_vec.len(),
                self.dim
            ));
        }
        if self.count == 0 {
            return Ok(Vec::new());
        }
        let mut hits: Vec<SearchHit> = self
            .data
            .chunks_exact(self.dim)
            .enumerate()
            .map(|(id, row)| SearchHit {
                id,
                distance: l2_distance(query_vec, row),
            })
            .collect();
        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        hits.truncate(k);
        Ok(hits)
    }
}

fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
