//! Parameter-sweep enumeration and sequential driving of the external
//! executable. Each sweep owns an immutable configuration struct; set
//! enumeration is pure and testable apart from the subprocess driving.

use crate::params::{CodeParameters, ParameterSet};
use crate::runner::{BenchmarkRunner, RunError, RunResult};

/// Inclusive stepped range: the last value is the largest one `<= end`
/// reachable from `start` in `step` increments. `step` must be non-zero.
pub fn step_range(start: u32, end: u32, step: u32) -> impl Iterator<Item = u32> {
    (start..=end).step_by(step as usize)
}

/// Fixed (g1, g2) pairs, each run twice: once generating matrices at
/// runtime, once reading pre-computed ones.
#[derive(Clone, Debug)]
pub struct PairedSweep {
    pub pairs: Vec<(CodeParameters, CodeParameters)>,
}

impl Default for PairedSweep {
    fn default() -> Self {
        Self {
            pairs: vec![
                (CodeParameters::new(25, 10, 5), CodeParameters::new(50, 10, 6)),
                (CodeParameters::new(40, 15, 6), CodeParameters::new(50, 15, 7)),
                (
                    CodeParameters::new(60, 20, 10),
                    CodeParameters::new(70, 20, 11),
                ),
            ],
        }
    }
}

impl PairedSweep {
    /// Two sets per pair, generated-first then pre-computed.
    pub fn parameter_sets(&self) -> Vec<ParameterSet> {
        let mut sets = Vec::with_capacity(self.pairs.len() * 2);
        for &(g1, g2) in &self.pairs {
            for use_precomputed_matrix in [false, true] {
                sets.push(ParameterSet {
                    g1,
                    g2,
                    custom_message: false,
                    use_precomputed_matrix,
                });
            }
        }
        sets
    }
}

/// Varying `n` with fixed `k` and `d`; g2's length trails g1's by 10.
#[derive(Clone, Copy, Debug)]
pub struct VaryN {
    pub k: u32,
    pub d: u32,
    pub n_start: u32,
    pub n_end: u32,
    pub n_step: u32,
}

impl Default for VaryN {
    fn default() -> Self {
        Self {
            k: 15,
            d: 6,
            n_start: 40,
            n_end: 100,
            n_step: 10,
        }
    }
}

impl VaryN {
    pub fn parameter_sets(&self) -> Vec<ParameterSet> {
        step_range(self.n_start, self.n_end, self.n_step)
            .map(|n| ParameterSet {
                g1: CodeParameters::new(n, self.k, self.d),
                g2: CodeParameters::new(n + 10, self.k, self.d),
                custom_message: false,
                use_precomputed_matrix: false,
            })
            .collect()
    }
}

/// Varying `k` with fixed `n` and `d`; g2's length trails g1's by 10.
#[derive(Clone, Copy, Debug)]
pub struct VaryK {
    pub n: u32,
    pub d: u32,
    pub k_start: u32,
    pub k_end: u32,
    pub k_step: u32,
}

impl Default for VaryK {
    fn default() -> Self {
        Self {
            n: 40,
            d: 6,
            k_start: 10,
            k_end: 20,
            k_step: 2,
        }
    }
}

impl VaryK {
    pub fn parameter_sets(&self) -> Vec<ParameterSet> {
        step_range(self.k_start, self.k_end, self.k_step)
            .map(|k| ParameterSet {
                g1: CodeParameters::new(self.n, k, self.d),
                g2: CodeParameters::new(self.n + 10, k, self.d),
                custom_message: false,
                use_precomputed_matrix: false,
            })
            .collect()
    }
}

fn drive(
    runner: &BenchmarkRunner,
    params: &ParameterSet,
    note: &str,
) -> Result<RunResult, RunError> {
    eprintln!("\nRun: {note}");
    let result = runner.run(params)?;
    if result.stderr.is_empty() {
        eprintln!("Run finished (exit status {})", result.exit_status);
    } else {
        eprintln!(
            "Run finished (exit status {}), stderr:\n{}",
            result.exit_status, result.stderr
        );
    }
    Ok(result)
}

/// Benchmark: generated vs pre-computed matrices.
pub fn run_paired(
    runner: &BenchmarkRunner,
    cfg: &PairedSweep,
) -> Result<Vec<RunResult>, RunError> {
    eprintln!("\n--- Benchmark: Generated vs Pre-computed Matrices ---");
    let mut results = Vec::new();
    for params in cfg.parameter_sets() {
        let note = if params.use_precomputed_matrix {
            "using pre-computed matrices..."
        } else {
            "generating matrices..."
        };
        results.push(drive(runner, &params, note)?);
    }
    Ok(results)
}

/// Benchmark: varying `n` with `k` and `d` held fixed.
pub fn run_vary_n(runner: &BenchmarkRunner, cfg: &VaryN) -> Result<Vec<RunResult>, RunError> {
    eprintln!("\n--- Benchmark: Varying n (fixed k and d) ---");
    let mut results = Vec::new();
    for params in cfg.parameter_sets() {
        let note = format!("varying n to {} (g1), {} (g2)...", params.g1.n, params.g2.n);
        results.push(drive(runner, &params, &note)?);
    }
    Ok(results)
}

/// Benchmark: varying `k` with `n` and `d` held fixed.
pub fn run_vary_k(runner: &BenchmarkRunner, cfg: &VaryK) -> Result<Vec<RunResult>, RunError> {
    eprintln!("\n--- Benchmark: Varying k (fixed n and d) ---");
    let mut results = Vec::new();
    for params in cfg.parameter_sets() {
        let note = format!("varying k to {} (g1 and g2)...", params.g1.k);
        results.push(drive(runner, &params, &note)?);
    }
    Ok(results)
}
