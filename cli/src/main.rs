use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docrank_core::corpus::load_dir;
use docrank_core::{Hit, SearchEngine};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docrank")]
#[command(about = "Rank documents by tf-idf relevance and document distance", long_about = None)]
struct Cli {
    /// Directory whose files make up the corpus
    #[arg(long, env = "DOCRANK_CORPUS", default_value = "articles", global = true)]
    corpus: PathBuf,
    /// Maximum number of results
    #[arg(short, long, default_value_t = 5, global = true)]
    k: usize,
    /// Print results as JSON
    #[arg(long, default_value_t = false, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive query loop (the default)
    Repl,
    /// Run a single free-text query
    Search {
        query: Vec<String>,
    },
    /// Rank the documents closest to a document in the corpus
    Similar {
        title: String,
        /// Weight shared words by idf
        #[arg(long, default_value_t = false)]
        idf: bool,
    },
    /// Print corpus statistics
    Stats,
}

#[derive(Serialize)]
struct StatsReport {
    num_docs: usize,
    vocabulary: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let corpus = load_dir(&cli.corpus).with_context(|| format!("loading corpus from {}", cli.corpus.display()))?;
    let engine = SearchEngine::new(&corpus);
    tracing::info!(corpus = %cli.corpus.display(), num_docs = engine.stats().num_docs(), "engine ready");

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl(&engine, cli.k),
        Commands::Search { query } => {
            let hits = engine.search(&query.join(" "), cli.k);
            print_hits(&hits, cli.json, "score")
        }
        Commands::Similar { title, idf } => {
            let hits = engine.rank_by_similarity(&title, cli.k, idf).map_err(|err| {
                tracing::warn!(%title, "similarity query for a document outside the corpus");
                err
            })?;
            print_hits(&hits, cli.json, "distance")
        }
        Commands::Stats => {
            let report = StatsReport { num_docs: engine.stats().num_docs(), vocabulary: engine.stats().vocabulary_size() };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("documents: {}\nvocabulary: {}", report.num_docs, report.vocabulary);
            }
            Ok(())
        }
    }
}

fn repl(engine: &SearchEngine<'_>, k: usize) -> Result<()> {
    println!("Welcome to docrank! We hope you have a wonderful experience. To exit, type 'exit'.");
    println!("\nSuggested searches: the yummiest fruit in the world, child prodigy, operating system, red tree, coolest algorithm....");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nEnter query here: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let query = line?;
        let query = query.trim();
        if query == "exit" {
            break;
        }
        print_hits(&engine.search(query, k), false, "score")?;
    }
    println!("Good bye!");
    Ok(())
}

fn print_hits(hits: &[Hit], json: bool, label: &str) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(hits)?);
        return Ok(());
    }
    if hits.is_empty() {
        println!("There are no results for that query. :(");
        return Ok(());
    }
    println!("Top results: ");
    for hit in hits {
        println!("    - {} ({label} {:.6})", hit.id, hit.value);
    }
    Ok(())
}
