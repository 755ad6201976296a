//! Wall-clock timing of construction, multiplication and determinant on
//! large random matrices. Purely for reporting.
use std::fmt;
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use gauss::math::Matrix;
use gauss::EliminationConfig;

use crate::io::read_json;

/// Parameters for a timing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Matrices are `size x size`.
    pub size: usize,
    pub repetitions: usize,
    pub seed: u64,
    /// Value used for the constant-fill construction step.
    pub fill: f64,
    pub parallel: bool,
    pub elimination: EliminationConfig,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            size: 256,
            repetitions: 3,
            seed: 42,
            fill: 55.0,
            parallel: false,
            elimination: EliminationConfig::default(),
        }
    }
}

/// Best-of-`repetitions` durations for each step.
#[derive(Debug, Clone)]
pub struct TimingReport {
    pub size: usize,
    pub repetitions: usize,
    pub construct: Duration,
    pub multiply: Duration,
    pub determinant: Duration,
    /// Determinant of the last random matrix, so the work cannot be elided.
    pub last_determinant: f64,
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "size {0}x{0}, best of {1}",
            self.size, self.repetitions
        )?;
        writeln!(f, "  construct    {:>12.3?}", self.construct)?;
        writeln!(f, "  multiply     {:>12.3?}", self.multiply)?;
        writeln!(f, "  determinant  {:>12.3?}", self.determinant)?;
        write!(f, "  det = {:e}", self.last_determinant)
    }
}

pub fn load_timing_config<P: AsRef<Path>>(path: P) -> Result<TimingConfig> {
    read_json(path, "config")
}

/// `size x size` matrix with entries drawn uniformly from `[-1, 1)`.
pub fn random_matrix(rng: &mut StdRng, size: usize) -> Result<Matrix<f64>> {
    let data: Vec<f64> = (0..size * size).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Ok(Matrix::from_shape_vec((size, size), data)?)
}

pub fn run_timing(config: &TimingConfig) -> Result<TimingReport> {
    if config.repetitions == 0 {
        anyhow::bail!("repetitions must be at least 1");
    }
    log::info!(
        "Timing {}x{} matrices over {} repetitions (parallel: {})",
        config.size,
        config.size,
        config.repetitions,
        config.parallel
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut construct = Duration::MAX;
    let mut multiply = Duration::MAX;
    let mut determinant = Duration::MAX;
    let mut last_determinant = 0.0;

    for rep in 0..config.repetitions {
        let start = Instant::now();
        black_box(Matrix::filled(config.size, config.size, config.fill));
        construct = construct.min(start.elapsed());

        let a = random_matrix(&mut rng, config.size)?;
        let b = random_matrix(&mut rng, config.size)?;

        let start = Instant::now();
        let product = if config.parallel {
            a.par_matmul(&b)?
        } else {
            a.matmul(&b)?
        };
        multiply = multiply.min(start.elapsed());

        let start = Instant::now();
        let elimination = product.determinant_with(&config.elimination)?;
        determinant = determinant.min(start.elapsed());

        log::debug!(
            "Repetition {}: det = {:e}, {} row swaps",
            rep,
            elimination.determinant,
            elimination.row_swaps
        );
        last_determinant = elimination.determinant;
    }

    Ok(TimingReport {
        size: config.size,
        repetitions: config.repetitions,
        construct,
        multiply,
        determinant,
        last_determinant,
    })
}
