use reglens_core::error::Error;
use reglens_core::types::Corpus;
use reglens_embed::FakeEmbedder;
use reglens_retrieve::SemanticSearcher;
use reglens_vector::{build_index, FlatL2Index};

fn sample_corpus() -> Corpus {
    let mut corpus = Corpus::new();
    corpus.add_document(
        "Own funds: the sum of tier 1 and tier 2 capital\nCET1 capital: ordinary shares and retained earnings\nLeverage: exposure measure rules\n",
        "PRA Rulebook",
    );
    corpus
}

fn searcher(corpus: &Corpus) -> SemanticSearcher<FlatL2Index> {
    let embedder = Box::new(FakeEmbedder::new(64));
    let index = build_index(corpus, embedder.as_ref()).expect("build index");
    SemanticSearcher::new(embedder, index)
}

#[test]
fn returns_exactly_k_resolved_chunks_in_distance_order() {
    let corpus = sample_corpus();
    assert_eq!(corpus.len(), 3);

    let results = searcher(&corpus).search("tier 1 capital", &corpus, 2).expect("search");
    assert_eq!(results.len(), 2);
    assert!(results[0].distance <= results[1].distance, "distances are non-decreasing");
    for r in &results {
        assert_eq!(
            corpus.get(r.chunk.id).map(|c| &c.text),
            Some(&r.chunk.text),
            "every result resolves to its corpus entry"
        );
    }
}

#[test]
fn top_k_beyond_corpus_returns_full_corpus() {
    let corpus = sample_corpus();
    let results = searcher(&corpus).search("anything at all", &corpus, 10).expect("search");
    assert_eq!(results.len(), corpus.len(), "no padding beyond corpus size");
}

#[test]
fn zero_top_k_is_rejected() {
    let corpus = sample_corpus();
    match searcher(&corpus).search("query", &corpus, 0) {
        Err(Error::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn empty_corpus_is_rejected_before_search() {
    let corpus = sample_corpus();
    let s = searcher(&corpus);
    let empty = Corpus::new();
    match s.search("query", &empty, 3) {
        Err(Error::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn desynchronized_corpus_is_a_fatal_range_error() {
    let corpus = sample_corpus();
    let s = searcher(&corpus);

    // A corpus shorter than the index the searcher was built against.
    let mut shorter = Corpus::new();
    shorter.add_document("Only: one clause here", "Doc");
    assert_eq!(shorter.len(), 1);

    match s.search("tier 1 capital", &shorter, 3) {
        Err(Error::IndexOutOfRange { id, len }) => {
            assert!(id >= len, "the unresolvable id lies past the corpus end");
        }
        other => panic!("expected IndexOutOfRange, got {:?}", other),
    }
}
