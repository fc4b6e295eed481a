use anyhow::Context;
use clap::Parser;
use std::io::{self, BufWriter};
use word_buckets::{analyze_path, logging, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init();

    let set = analyze_path(&config.input, config.capacity, config.policy())
        .with_context(|| format!("failed to analyze {}", config.input.display()))?;

    let stdout = io::stdout();
    let stats = set
        .report(BufWriter::new(stdout.lock()))
        .context("failed to write report")?;
    log::info!(
        "{} distinct words, {} empty slots, longest chain {}, load factor {:.3}",
        stats.total(),
        stats.empty_slots(),
        stats.longest_chain(),
        stats.load_factor()
    );
    Ok(())
}
