use std::env;

use reglens_core::config::{expand_path, Config};
use reglens_core::types::Corpus;
use reglens_embed::default_embedder;
use reglens_retrieve::{SemanticSearcher, DEFAULT_TOP_K};
use reglens_rules::RuleSet;
use reglens_vector::build_index;

const DEFAULT_QUERY: &str = "The bank issued new ordinary shares this quarter";

fn parse_args() -> (Option<String>, Option<usize>) {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut query = None;
    let mut top_k = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--top-k" => {
                let parsed = args.get(i + 1).and_then(|v| v.parse::<usize>().ok());
                match parsed {
                    Some(k) => {
                        top_k = Some(k);
                        i += 1;
                    }
                    None => {
                        eprintln!("Error: --top-k requires a number");
                        std::process::exit(1);
                    }
                }
            }
            _ if query.is_none() => {
                query = Some(args[i].clone());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }
    (query, top_k)
}

fn load_corpus(config: &Config) -> anyhow::Result<Corpus> {
    let pra_path: String = config
        .get("data.pra_rulebook_path")
        .unwrap_or_else(|_| "data/pra_rules.txt".to_string());
    let corep_path: String = config
        .get("data.corep_instructions_path")
        .unwrap_or_else(|_| "data/corep_instructions.txt".to_string());

    let mut corpus = Corpus::new();
    corpus.add_file(&expand_path(&pra_path), "PRA Rulebook")?;
    corpus.add_file(&expand_path(&corep_path), "COREP Instructions")?;
    println!("Loaded {} chunks from 2 documents", corpus.len());
    Ok(corpus)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let (query, top_k_arg) = parse_args();
    let query = query.unwrap_or_else(|| DEFAULT_QUERY.to_string());
    let top_k = top_k_arg.unwrap_or_else(|| config.get("search.top_k").unwrap_or(DEFAULT_TOP_K));

    let corpus = load_corpus(&config)?;
    let embedder = default_embedder()?;
    let index = build_index(&corpus, embedder.as_ref())?;
    let searcher = SemanticSearcher::new(embedder, index);

    let retrieved = searcher.search(&query, &corpus, top_k)?;

    println!("\nUser Query:");
    println!("{}", query);

    println!("\nRetrieved Regulatory Context:");
    println!("{}", "-".repeat(40));
    for r in &retrieved {
        println!("{}", r.chunk.text);
        println!("Source: {} (distance {:.4})", r.chunk.source, r.distance);
        println!();
    }

    let outcome = RuleSet::default().reason_and_map(&retrieved);

    println!("Field Impact Decisions:");
    println!("{}", "-".repeat(40));
    if outcome.decisions.is_empty() {
        println!("No report fields triggered by the retrieved evidence.");
    }
    for (field, decision) in &outcome.decisions {
        println!("{} ({}): {}", field.label(), field, decision.impact);
        println!("  Reason: {}", decision.reason);
    }

    println!("\nAudit Trail:");
    println!("{}", "-".repeat(40));
    for chunk in &outcome.audit {
        println!("[{}] {}", chunk.source, chunk.text);
    }
    Ok(())
}
