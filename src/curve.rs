// Arrival curve generation: named shape functions over normalized positions,
// plus the custom raw-weight path. Every curve is normalized to sum to 1.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Seed for the Random pattern's dedicated source. Fixed so the Random curve
/// is reproducible across runs while channel sampling stays free-running.
pub const RANDOM_PATTERN_SEED: u64 = 42;

// ─── Patterns ────────────────────────────────────────────────────────────────

/// Named arrival-curve shapes, plus caller-edited raw weights.
///
/// The deterministic shapes are pure functions of normalized position
/// `x = i / (N - 1)`; a grid of one interval gets a flat run of ones.
/// `MiddaySpike` and `BellCurve` are the same shape under two names; the
/// duplication is deliberate and both names stay addressable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrivalPattern {
    Flat,
    MorningPeak,
    AfternoonPeak,
    MiddaySpike,
    BellCurve,
    UShape,
    FrontLoaded,
    BackLoaded,
    DoublePeaks,
    Random,
    Custom(Vec<f64>),
}

impl ArrivalPattern {
    /// Resolve a display name; anything unrecognized falls back to Flat.
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "flat" => Self::Flat,
            "morningpeak" => Self::MorningPeak,
            "afternoonpeak" => Self::AfternoonPeak,
            "middayspike" => Self::MiddaySpike,
            "bellcurve" => Self::BellCurve,
            "ushape" => Self::UShape,
            "frontloaded" => Self::FrontLoaded,
            "backloaded" => Self::BackLoaded,
            "doublepeaks" => Self::DoublePeaks,
            "random" => Self::Random,
            _ => Self::Flat,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::MorningPeak => "Morning Peak",
            Self::AfternoonPeak => "Afternoon Peak",
            Self::MiddaySpike => "Midday Spike",
            Self::BellCurve => "Bell Curve",
            Self::UShape => "U-Shape",
            Self::FrontLoaded => "Front-Loaded",
            Self::BackLoaded => "Back-Loaded",
            Self::DoublePeaks => "Double Peaks",
            Self::Random => "Random",
            Self::Custom(_) => "Custom",
        }
    }

    /// Raw shape value at normalized position `x` for the deterministic
    /// patterns. Random and Custom never reach this; the fallback arm keeps
    /// them on the Flat shape.
    fn shape_at(&self, x: f64) -> f64 {
        match self {
            Self::MorningPeak => bump(x, 0.3, 5.0),
            Self::AfternoonPeak => bump(x, 0.7, 5.0),
            Self::MiddaySpike | Self::BellCurve => bump(x, 0.5, 6.0),
            Self::UShape => 1.0 - (0.5 - x).abs(),
            Self::FrontLoaded => 1.0 - x,
            Self::BackLoaded => x,
            Self::DoublePeaks => bump(x, 0.3, 8.0) + bump(x, 0.7, 8.0),
            Self::Flat | Self::Random | Self::Custom(_) => 1.0,
        }
    }
}

/// Gaussian bump around `center`; `width` scales the distance before
/// squaring, so larger values make a narrower peak.
fn bump(x: f64, center: f64, width: f64) -> f64 {
    (-(width * (x - center)).powi(2)).exp()
}

// ─── Curve ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("arrival weights sum to zero and cannot be normalized")]
    ZeroWeightSum,

    #[error("arrival weight at index {index} is negative ({value})")]
    NegativeWeight { index: usize, value: f64 },

    #[error("expected {expected} custom weights, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Normalized weight per interval; weights sum to 1 (empty grid aside).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalCurve {
    weights: Vec<f64>,
}

impl ArrivalCurve {
    /// Generate a curve of `n` weights from a pattern.
    ///
    /// The Random pattern draws `n` uniform values from `rng`; the caller
    /// decides the seeding policy (see [`RANDOM_PATTERN_SEED`]). Custom
    /// weights must match `n` and go through the same normalization as the
    /// named shapes.
    pub fn from_pattern(
        pattern: &ArrivalPattern,
        n: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, CurveError> {
        if n == 0 {
            return Ok(Self { weights: Vec::new() });
        }
        let raw: Vec<f64> = match pattern {
            ArrivalPattern::Custom(weights) => {
                if weights.len() != n {
                    return Err(CurveError::LengthMismatch {
                        expected: n,
                        got: weights.len(),
                    });
                }
                weights.clone()
            }
            ArrivalPattern::Random => (0..n).map(|_| rng.gen::<f64>()).collect(),
            shaped => {
                if n == 1 {
                    vec![1.0]
                } else {
                    (0..n)
                        .map(|i| shaped.shape_at(i as f64 / (n - 1) as f64))
                        .collect()
                }
            }
        };
        Self::normalize(raw)
    }

    /// Normalize caller-supplied raw weights (the custom path).
    pub fn from_weights(raw: &[f64]) -> Result<Self, CurveError> {
        if raw.is_empty() {
            return Ok(Self { weights: Vec::new() });
        }
        Self::normalize(raw.to_vec())
    }

    fn normalize(raw: Vec<f64>) -> Result<Self, CurveError> {
        for (index, &value) in raw.iter().enumerate() {
            if value < 0.0 {
                return Err(CurveError::NegativeWeight { index, value });
            }
        }
        let sum: f64 = raw.iter().sum();
        if sum == 0.0 {
            return Err(CurveError::ZeroWeightSum);
        }
        Ok(Self {
            weights: raw.into_iter().map(|w| w / sum).collect(),
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Display form: weights rounded to 4 decimal places.
    pub fn rounded(&self) -> Vec<f64> {
        self.weights
            .iter()
            .map(|w| (w * 10_000.0).round() / 10_000.0)
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
