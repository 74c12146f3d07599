use reglens_core::traits::{Embedder, VectorIndex};
use reglens_core::types::Corpus;
use reglens_embed::FakeEmbedder;
use reglens_vector::{build_index, FlatL2Index};

#[test]
fn search_orders_by_distance_with_id_tiebreak() {
    let mut index = FlatL2Index::new(2);
    index
        .add(&[vec![0.0, 1.0], vec![1.0, 0.0], vec![0.0, 1.0]])
        .expect("add");

    let hits = index.search(&[0.0, 1.0], 3).expect("search");
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].id, 0, "tied distances resolve to the lowest id");
    assert_eq!(hits[1].id, 2);
    assert_eq!(hits[2].id, 1);
    assert!(hits[0].distance <= hits[1].distance && hits[1].distance <= hits[2].distance);
}

#[test]
fn k_larger_than_len_returns_everything() {
    let mut index = FlatL2Index::new(2);
    index.add(&[vec![0.0, 0.0], vec![3.0, 4.0]]).expect("add");

    let hits = index.search(&[0.0, 0.0], 10).expect("search");
    assert_eq!(hits.len(), 2, "no padding beyond the stored count");
    assert!((hits[1].distance - 5.0).abs() < 1e-6, "plain Euclidean distance");
}

#[test]
fn dimension_mismatches_are_rejected() {
    let mut index = FlatL2Index::new(3);
    assert!(
        index.add(&[vec![1.0, 2.0]]).is_err(),
        "adding a 2-dim vector to a 3-dim index fails"
    );
    index.add(&[vec![1.0, 2.0, 3.0]]).expect("add");
    assert!(index.search(&[1.0], 1).is_err(), "querying with the wrong dim fails");
}

#[test]
fn empty_index_returns_no_hits() {
    let index = FlatL2Index::new(4);
    assert!(index.is_empty());
    assert!(index.search(&[0.0; 4], 5).expect("search").is_empty());
}

#[test]
fn build_index_keeps_corpus_order() {
    let mut corpus = Corpus::new();
    corpus.add_document(
        "Own funds: capital instruments and reserves\nDeductions: goodwill and intangibles\n",
        "PRA Rulebook",
    );
    let embedder = FakeEmbedder::new(32);
    let index = build_index(&corpus, &embedder).expect("build");

    assert_eq!(index.len(), corpus.len());
    assert_eq!(index.dim(), 32);

    // A chunk's own embedding returns that chunk first, at distance zero.
    let chunk = corpus.get(1).expect("chunk");
    let embs = embedder.embed_batch(&[chunk.text.clone()]).expect("embed");
    let hits = index.search(&embs[0], 1).expect("search");
    assert_eq!(hits[0].id, 1);
    assert!(hits[0].distance.abs() < 1e-5);
}

#[test]
fn build_on_empty_corpus_yields_empty_index() {
    let corpus = Corpus::new();
    let index = build_index(&corpus, &FakeEmbedder::new(8)).expect("build");
    assert_eq!(index.len(), 0);
    assert!(index.search(&[0.0; 8], 3).expect("search").is_empty());
}
