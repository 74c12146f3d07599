use std::env;

use reglens_core::config::{expand_path, Config};
use reglens_core::types::Corpus;
use reglens_embed::default_embedder;
use reglens_retrieve::{SemanticSearcher, DEFAULT_TOP_K};
use reglens_vector::build_index;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [top_k]", args[0]);
        eprintln!("Example: {} 'ordinary shares issued' 3", args[0]);
        std::process::exit(1);
    }
    let query_text = &args[1];
    let top_k = args
        .get(2)
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_TOP_K);

    let config = Config::load()?;
    let pra_path: String = config
        .get("data.pra_rulebook_path")
        .unwrap_or_else(|_| "data/pra_rules.txt".to_string());
    let corep_path: String = config
        .get("data.corep_instructions_path")
        .unwrap_or_else(|_| "data/corep_instructions.txt".to_string());

    let mut corpus = Corpus::new();
    corpus.add_file(&expand_path(&pra_path), "PRA Rulebook")?;
    corpus.add_file(&expand_path(&corep_path), "COREP Instructions")?;

    let embedder = default_embedder()?;
    let index = build_index(&corpus, embedder.as_ref())?;
    let searcher = SemanticSearcher::new(embedder, index);

    let results = searcher.search(query_text, &corpus, top_k)?;

    println!("🔍 Found {} results for: \"{}\"", results.len(), query_text);
    for (i, r) in results.iter().enumerate() {
        println!(
            "\n  {}. distance={:.4}  id={}  source={}",
            i + 1,
            r.distance,
            r.chunk.id,
            r.chunk.source
        );
        println!("     📝 {}", r.chunk.text);
    }
    Ok(())
}
