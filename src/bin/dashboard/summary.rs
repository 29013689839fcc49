// Multi-trial aggregation: N seeded runs per config, mean ± 95% CI

use serde::Serialize;

use volume_engine::{SimError, VolumeSimulation};

// ─── Statistics (per-metric aggregation) ────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── Trial Report ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct IntervalSummary {
    pub label: String,
    pub total: Stats,
}

#[derive(Debug, Serialize)]
pub struct TrialReport {
    pub n_trials: usize,
    pub base_seed: u64,
    pub intervals: Vec<IntervalSummary>,
    pub grand_total: Stats,
}

/// Run `n` independent simulations with seeds `base_seed..base_seed + n` and
/// aggregate per-interval totals.
pub fn run_trials(
    sim: &VolumeSimulation,
    n: usize,
    base_seed: u64,
) -> Result<TrialReport, SimError> {
    let mut labels: Vec<String> = Vec::new();
    let mut per_interval: Vec<Vec<f64>> = Vec::new();
    let mut grand: Vec<f64> = Vec::with_capacity(n);

    for i in 0..n {
        let run = sim.run_seeded(base_seed + i as u64)?;
        if i == 0 {
            labels = run.table.rows.iter().map(|r| r.label.clone()).collect();
            per_interval = vec![Vec::with_capacity(n); run.table.len()];
        }
        for (j, row) in run.table.rows.iter().enumerate() {
            per_interval[j].push(row.total as f64);
        }
        grand.push(run.table.grand_total() as f64);
    }

    let intervals = labels
        .into_iter()
        .zip(&per_interval)
        .map(|(label, samples)| IntervalSummary {
            label,
            total: Stats::from_samples(samples),
        })
        .collect();

    Ok(TrialReport {
        n_trials: n,
        base_seed,
        intervals,
        grand_total: Stats::from_samples(&grand),
    })
}
