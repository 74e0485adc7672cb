//! Trigram Counting Benchmark
//!
//! This binary measures the throughput of the counting pipeline on large text
//! files such as book dumps or Wikipedia abstracts.
//!
//! ## What It Benchmarks
//!
//! 1. **Scrub**: lowercasing and collapsing non-letter runs, line by line
//! 2. **Tokenize**: splitting pre-scrubbed lines into words
//! 3. **Count**: the full pass (scrub + tokenize + window + hash map), then top-K
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/count_bench /path/to/corpus.txt
//! ./target/release/count_bench /path/to/corpus.txt count
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Count ===
//! --------------------------------
//! Mode        : Count
//! Elapsed     : 0.812 s
//! Throughput  : 0.121 GiB/s
//! Tokens      : 17_005_207
//! Tokens/sec  : 20_942_373
//! --------------------------------
//!
//! Trigrams    : 17_005_205
//! Distinct    : 9_876_543 (58.1%)
//! Reported    : 100
//! ```
//!
//! Run in release mode on a file of 100MB or more for stable numbers.

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use tricount_core::analyzer::{LineScrubber, Tokenizer};
use tricount_core::{count_trigrams, top_sequences, CountStats, TrigramCounts};
use tricount_types::{CountError, ReportConfig};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<(), CountError> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: count_bench <path> [scrub|tokenize|count|all]");
        std::process::exit(1);
    }

    let path = &args[1];
    let mode = args.get(2).map(String::as_str).unwrap_or("all");

    println!("Loading file...");
    let input = fs::read_to_string(path).map_err(|source| CountError::FileOpen {
        path: path.into(),
        source,
    })?;

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    if matches!(mode, "scrub" | "all") {
        bench_scrub(&input)?;
    }
    if matches!(mode, "tokenize" | "all") {
        bench_tokenize(&input)?;
    }
    if matches!(mode, "count" | "all") {
        bench_count(&input)?;
    }

    Ok(())
}

fn bench_scrub(input: &str) -> Result<(), CountError> {
    let mut scrubber = LineScrubber::new()?;
    let mut out = String::with_capacity(1024);

    println!("=== Scrub ===");

    let mut run = || {
        for line in input.lines() {
            scrubber.scrub_into(line, &mut out);
            std::hint::black_box(&out);
        }
    };

    warmup(&mut run);
    let elapsed = measure(&mut run);

    print_perf("Scrub", input.len(), elapsed, 0);
    Ok(())
}

fn bench_tokenize(input: &str) -> Result<(), CountError> {
    let mut scrubber = LineScrubber::new()?;
    let scrubbed: Vec<String> = input.lines().map(|l| scrubber.scrub(l)).collect();
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    let mut tokens = 0u64;
    let mut run = || {
        let mut local = 0u64;
        for line in &scrubbed {
            local += tokenizer.count_words(line) as u64;
        }
        tokens = local;
        std::hint::black_box(tokens);
    };

    warmup(&mut run);
    let elapsed = measure(&mut run);

    print_perf("Tokenize", input.len(), elapsed, tokens);
    Ok(())
}

fn bench_count(input: &str) -> Result<(), CountError> {
    println!("=== Count ===");

    let mut outcome: Result<(CountStats, usize), CountError> = Ok((CountStats::default(), 0));
    let mut run = || {
        let mut counts = TrigramCounts::default();
        outcome = count_trigrams(io::Cursor::new(input), &mut counts).map(|stats| {
            let top = top_sequences(counts, &ReportConfig::default());
            (stats, std::hint::black_box(top).len())
        });
    };

    warmup(&mut run);
    let elapsed = measure(&mut run);
    let (stats, reported) = outcome?;

    print_perf("Count", input.len(), elapsed, stats.words_seen);
    println!("Trigrams    : {}", fmt_count(stats.trigrams_emitted));
    println!(
        "Distinct    : {} ({:.1}%)",
        fmt_count(stats.unique_trigrams as u64),
        stats.distinct_ratio() * 100.0
    );
    println!("Reported    : {}\n", reported);
    Ok(())
}

fn warmup<F: FnMut()>(f: &mut F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(f: &mut F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
