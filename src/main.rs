use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minimr::map_reduce_apps::WordCount;
use minimr::{MapReduce, ParallelMapReduce};

/// Counts words across the given text files, one file per map record.
#[derive(Parser)]
struct Args {
    /// Input text files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of map workers
    #[arg(short, long, default_value_t = 4)]
    workers: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut records = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read file {}", path.display()))?;
        records.push(contents);
    }

    let mr = ParallelMapReduce::new(records, args.workers, WordCount::new());
    let output = mr.run().await?;

    let mut counts: Vec<_> = output.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    for (word, count) in counts {
        println!("{} {}", word, count);
    }

    Ok(())
}
