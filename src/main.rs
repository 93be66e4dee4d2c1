use std::path::PathBuf;

use clap::Parser;
use doc_similarity::{
    compare::CorpusComparator,
    config::{ComparisonConfig, StopWords},
    constants::{DEFAULT_DATA_PATH, DEFAULT_TOP_K, DEFAULT_TOP_M},
    corpus::load_directory,
    error::Result,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the documents to compare
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data_path: PathBuf,

    /// Number of highest-frequency words kept per document
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Number of document pairs to report
    #[arg(long, default_value_t = DEFAULT_TOP_M)]
    top_m: usize,

    /// Comma-separated stop words, replacing the built-in list
    #[arg(long, value_delimiter = ',')]
    stop_words: Option<Vec<String>>,

    /// Fail unless exactly this many documents are found
    #[arg(long)]
    expected_count: Option<usize>,

    /// Run on a single thread
    #[arg(long, default_value = "false")]
    sequential: bool,

    /// Print the ranking as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

impl Args {
    fn config(&self) -> ComparisonConfig {
        ComparisonConfig {
            top_k: self.top_k,
            top_m: self.top_m,
            stop_words: self
                .stop_words
                .as_ref()
                .map_or_else(StopWords::default, StopWords::new),
            parallel: !self.sequential,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("doc_similarity=info")),
        )
        .init();

    let args = Args::parse();
    let comparator = CorpusComparator::new(args.config())?;
    let documents = load_directory(&args.data_path, args.expected_count)?;

    // Time the comparison
    let start = std::time::Instant::now();
    let ranked = comparator.compare(&documents)?;
    info!(elapsed = ?start.elapsed(), "Comparison finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!("Top {} Similar Document Pairs:", ranked.len());
        for pair in &ranked {
            println!("{pair}");
        }
    }

    Ok(())
}
