mod cli;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tricount_core::{count_source, top_sequences, write_report, InputSource, TrigramCounts};
use tricount_types::{ReportConfig, SequenceCount};

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = cli::Cli::parse();
    let source = cli.input_source();

    let sequences = collect_sequences(&source, &ReportConfig::default());

    write_report(io::stdout().lock(), &sequences).context("failed to write report")?;
    Ok(())
}

/// Counts `source` and selects the top entries.
///
/// A counting failure is logged and yields an empty list; the process
/// still exits successfully.
fn collect_sequences(source: &InputSource, config: &ReportConfig) -> Vec<SequenceCount> {
    let mut counts = TrigramCounts::default();

    let counts = match count_source(source, &mut counts) {
        Ok(stats) => {
            debug!(input = %source, %stats, "counted input");
            counts
        }
        Err(err) => {
            error!(category = ?err.category(), "{err}");
            TrigramCounts::default()
        }
    };

    let sequences = top_sequences(counts, config);
    if sequences.is_empty() {
        debug!(input = %source, "no sequences to report");
    }
    sequences
}
