// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Contact Center Volume Simulation Suite ("The Queue") - Type Definitions

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::curve::ArrivalPattern;

// ─── Channel Mix ─────────────────────────────────────────────────────────────

/// One channel's share of the total volume, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelShare {
    pub name: String,
    pub percent: f64,
}

/// Errors raised when a channel mix cannot be rescaled.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MixError {
    #[error("channel shares sum to zero and cannot be rescaled to 100")]
    ZeroShareSum,

    #[error("channel {name:?} has a negative share ({percent})")]
    NegativeShare { name: String, percent: f64 },
}

/// Ordered percentage split of total volume across contact channels.
///
/// Shares do not have to sum to 100 on input; [`normalized`](Self::normalized)
/// rescales them proportionally (`p * 100 / sum`) and reports the raw sum so
/// the caller-facing layer can surface a warning. Normalization is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelMix {
    pub shares: Vec<ChannelShare>,
}

/// Rescale slack: a raw sum within this distance of 100 counts as already
/// normalized.
const MIX_SUM_TOLERANCE: f64 = 1e-9;

impl ChannelMix {
    pub fn new(shares: Vec<ChannelShare>) -> Self {
        Self { shares }
    }

    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            shares: pairs
                .iter()
                .map(|(name, percent)| ChannelShare {
                    name: (*name).to_string(),
                    percent: *percent,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn channel_names(&self) -> Vec<String> {
        self.shares.iter().map(|s| s.name.clone()).collect()
    }

    pub fn share_sum(&self) -> f64 {
        self.shares.iter().map(|s| s.percent).sum()
    }

    /// Proportionally rescale shares to sum to 100.
    ///
    /// Returns the rescaled mix and, when rescaling actually happened, the raw
    /// sum the input carried. Negative shares and an all-zero mix are typed
    /// errors; the division `p * 100 / 0` is undefined.
    pub fn normalized(&self) -> Result<(ChannelMix, Option<f64>), MixError> {
        for share in &self.shares {
            if share.percent < 0.0 {
                return Err(MixError::NegativeShare {
                    name: share.name.clone(),
                    percent: share.percent,
                });
            }
        }

        let sum = self.share_sum();
        if self.is_empty() || sum == 0.0 {
            return Err(MixError::ZeroShareSum);
        }
        if (sum - 100.0).abs() <= MIX_SUM_TOLERANCE {
            return Ok((self.clone(), None));
        }

        let rescaled = ChannelMix {
            shares: self
                .shares
                .iter()
                .map(|s| ChannelShare {
                    name: s.name.clone(),
                    percent: s.percent * 100.0 / sum,
                })
                .collect(),
        };
        Ok((rescaled, Some(sum)))
    }
}

// ─── Simulation Config ───────────────────────────────────────────────────────

/// Immutable parameter snapshot for one simulation run.
///
/// Every run is a pure function of this config plus the injected random
/// source; nothing is carried over between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// First interval starts here.
    pub open: NaiveTime,
    /// Half-open end of the operating window; the interval touching it is
    /// excluded.
    pub close: NaiveTime,
    pub contacts_per_hour: f64,
    pub pattern: ArrivalPattern,
    pub mix: ChannelMix,
}

// ─── Display / Report Types ──────────────────────────────────────────────────

/// One point of the display-ready arrival curve, weight rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub label: String,
    pub weight: f64,
}

/// Sampled counts for one interval, parallel to [`VolumeTable::channels`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeRow {
    pub label: String,
    pub counts: Vec<u32>,
    pub total: u32,
}

/// Per-interval, per-channel sampled contact counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeTable {
    pub channels: Vec<String>,
    pub rows: Vec<VolumeRow>,
}

impl VolumeTable {
    pub fn empty(channels: Vec<String>) -> Self {
        Self {
            channels,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn grand_total(&self) -> u64 {
        self.rows.iter().map(|r| r.total as u64).sum()
    }

    /// Largest interval total, used to scale chart bars.
    pub fn max_total(&self) -> u32 {
        self.rows.iter().map(|r| r.total).max().unwrap_or(0)
    }

    /// Cumulative count per channel across all intervals.
    pub fn channel_totals(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.channels.len()];
        for row in &self.rows {
            for (i, &count) in row.counts.iter().enumerate() {
                totals[i] += count as u64;
            }
        }
        totals
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_already_100_is_identity() {
        let mix = ChannelMix::from_pairs(&[("Voice", 50.0), ("Chat", 30.0), ("Email", 20.0)]);
        let (normalized, rescaled) = mix.normalized().expect("valid mix");
        assert_eq!(normalized, mix, "100-summing mix must pass through unchanged");
        assert!(rescaled.is_none());
    }

    #[test]
    fn normalize_rescales_proportionally() {
        let mix = ChannelMix::from_pairs(&[("Voice", 60.0), ("Chat", 60.0)]);
        let (normalized, rescaled) = mix.normalized().expect("valid mix");
        assert_eq!(rescaled, Some(120.0));
        assert!((normalized.shares[0].percent - 50.0).abs() < 1e-9);
        assert!((normalized.shares[1].percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mix = ChannelMix::from_pairs(&[("Voice", 3.0), ("Chat", 1.0)]);
        let (once, _) = mix.normalized().expect("valid mix");
        let (twice, rescaled) = once.normalized().expect("valid mix");
        assert!(rescaled.is_none(), "second pass must not rescale again");
        for (a, b) in once.shares.iter().zip(&twice.shares) {
            assert!((a.percent - b.percent).abs() < 1e-9);
        }
    }

    #[test]
    fn normalize_preserves_channel_order() {
        let mix = ChannelMix::from_pairs(&[("SMS", 10.0), ("Voice", 70.0), ("Chat", 40.0)]);
        let (normalized, _) = mix.normalized().expect("valid mix");
        assert_eq!(normalized.channel_names(), vec!["SMS", "Voice", "Chat"]);
    }

    #[test]
    fn normalize_zero_sum_fails() {
        let mix = ChannelMix::from_pairs(&[("Voice", 0.0), ("Chat", 0.0)]);
        assert_eq!(mix.normalized().unwrap_err(), MixError::ZeroShareSum);
        assert_eq!(
            ChannelMix::new(Vec::new()).normalized().unwrap_err(),
            MixError::ZeroShareSum
        );
    }

    #[test]
    fn normalize_negative_share_fails() {
        let mix = ChannelMix::from_pairs(&[("Voice", 120.0), ("Chat", -20.0)]);
        let err = mix.normalized().unwrap_err();
        assert!(
            matches!(err, MixError::NegativeShare { .. }),
            "expected NegativeShare, got: {err}"
        );
    }

    #[test]
    fn table_totals() {
        let table = VolumeTable {
            channels: vec!["Voice".into(), "Chat".into()],
            rows: vec![
                VolumeRow { label: "08:00".into(), counts: vec![10, 5], total: 15 },
                VolumeRow { label: "08:15".into(), counts: vec![20, 7], total: 27 },
            ],
        };
        assert_eq!(table.grand_total(), 42);
        assert_eq!(table.max_total(), 27);
        assert_eq!(table.channel_totals(), vec![30, 12]);
    }
}
