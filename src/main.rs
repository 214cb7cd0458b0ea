use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use percolation::{PercolationStats, SimulationConfig};

/// Parse a strictly positive integer
fn parse_positive(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|e| format!("Invalid number '{s}': {e}"))?;
    if value == 0 {
        return Err("Value must be greater than zero".to_string());
    }
    Ok(value)
}

/// percolation - Monte Carlo estimate of the site percolation threshold
///
/// Opens random sites on an n-by-n grid until the top row connects to the
/// bottom row, repeated over independent trials
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid side length
    #[clap(value_name = "N", value_parser = parse_positive)]
    n: usize,

    /// Number of independent trials
    #[clap(value_name = "TRIALS", value_parser = parse_positive)]
    trials: usize,

    /// Seed for reproducible runs
    #[clap(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of threads; more than one runs trials in parallel
    #[clap(short = 't', long = "threads", default_value = "1", value_parser = parse_positive)]
    threads: usize,

    /// Quiet mode (errors only on stderr)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    let mut config = SimulationConfig::new(args.n, args.trials)?.with_threads(args.threads);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!(
        "Running {} trials on a {}x{} grid ({} thread(s))",
        config.trials, config.grid_size, config.grid_size, config.threads
    );

    let stats = PercolationStats::run(&config).context("Simulation failed")?;

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
