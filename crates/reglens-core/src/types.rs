//! Domain types shared by the retrieval pipeline and the rule layer.

use serde::{Deserialize, Serialize};

pub type ChunkId = usize;

/// A contiguous unit of source text, the atomic retrievable item.
///
/// - `id`: stable integer identity assigned at creation time; the owning
///   [`Corpus`] keeps `chunks[i].id == i`, which is the id space a vector
///   index built from the corpus resolves against
/// - `text`: trimmed, non-empty payload
/// - `source`: document label (e.g. "PRA Rulebook")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    pub text: String,
    pub source: String,
}

/// Raw nearest-neighbor hit from a vector index.
///
/// `id` matches `Chunk::id`. `distance` is Euclidean (L2); lower is closer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: ChunkId,
    pub distance: f32,
}

/// A hit resolved back to its corpus chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub chunk: Chunk,
    pub distance: f32,
}

/// Append-only ordered chunk collection, built once per run.
///
/// Ids are assigned on insertion and always equal the chunk's position, so
/// reordering or filtering cannot silently break the index/corpus
/// correspondence the retriever depends on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    chunks: Vec<Chunk>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn get(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(id)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    pub(crate) fn push_text(&mut self, text: String, source: &str) {
        let id = self.chunks.len();
        self.chunks.push(Chunk {
            id,
            text,
            source: source.to_string(),
        });
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
