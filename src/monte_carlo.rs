/// Monte Carlo estimation of the percolation threshold
///
/// Each trial opens uniformly random sites on a fresh grid until it percolates
/// and records the fraction of open sites at that moment.
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{PercolationError, Result};
use crate::grid::Percolation;
use crate::stats;

/// z-score of a two-sided 95% confidence interval
pub const CONFIDENCE_COEFFICIENT: f64 = 1.96;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub grid_size: usize,
    pub trials: usize,
    pub seed: Option<u64>, // None = fresh entropy per trial
    pub threads: usize,    // >1 runs trials on the rayon pool
}

impl SimulationConfig {
    pub fn new(grid_size: usize, trials: usize) -> Result<Self> {
        validate(grid_size, trials)?;
        Ok(SimulationConfig {
            grid_size,
            trials,
            seed: None,
            threads: 1,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}

/// Run one trial on a fresh n-by-n grid and return its threshold in (0, 1]
///
/// Draws may hit sites that are already open; those iterations are simply wasted.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);
        grid.open(row, col)?;
    }
    Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Per-trial thresholds and their summary statistics
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Perform `trials` independent trials on an n-by-n grid using the thread-local RNG
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_rng(n, trials, &mut rand::thread_rng())
    }

    /// Perform `trials` sequential trials drawing every site from `rng`
    pub fn with_rng<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        validate(n, trials)?;
        let thresholds = (0..trials)
            .map(|trial| {
                let threshold = run_trial(n, rng)?;
                debug!("trial {trial}: threshold {threshold:.6}");
                Ok(threshold)
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(Self::finish(n, thresholds))
    }

    /// Run the configured simulation
    ///
    /// Every trial owns its RNG, derived from `(seed, trial)` when a seed is set,
    /// so the sequential and parallel paths agree for the same seed.
    pub fn run(config: &SimulationConfig) -> Result<Self> {
        validate(config.grid_size, config.trials)?;
        let n = config.grid_size;
        let one_trial = |trial: usize| -> Result<f64> {
            let mut rng = trial_rng(config.seed, trial);
            let threshold = run_trial(n, &mut rng)?;
            debug!("trial {trial}: threshold {threshold:.6}");
            Ok(threshold)
        };

        let thresholds = if config.threads > 1 {
            (0..config.trials)
                .into_par_iter()
                .map(one_trial)
                .collect::<Result<Vec<f64>>>()?
        } else {
            (0..config.trials)
                .map(one_trial)
                .collect::<Result<Vec<f64>>>()?
        };
        Ok(Self::finish(n, thresholds))
    }

    fn finish(grid_size: usize, thresholds: Vec<f64>) -> Self {
        let stats = PercolationStats {
            grid_size,
            thresholds,
        };
        info!(
            "{} trials on {}x{} grid: mean {:.6}, stddev {:.6}",
            stats.trials(),
            grid_size,
            grid_size,
            stats.mean(),
            stats.stddev()
        );
        stats
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Thresholds in trial order
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold
    pub fn mean(&self) -> f64 {
        stats::mean(&self.thresholds)
    }

    /// Sample standard deviation; NaN for a single trial
    pub fn stddev(&self) -> f64 {
        stats::stddev(&self.thresholds)
    }

    /// Low endpoint of the 95% confidence interval
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_COEFFICIENT * self.stddev() / (self.trials() as f64).sqrt()
    }
}

fn trial_rng(seed: Option<u64>, trial: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(trial as u64)),
        None => StdRng::from_entropy(),
    }
}

fn validate(n: usize, trials: usize) -> Result<()> {
    if n == 0 || trials == 0 {
        return Err(PercolationError::InvalidArgument(format!(
            "grid size and number of trials must be greater than zero, got n={n}, trials={trials}"
        )));
    }
    Ok(())
}
