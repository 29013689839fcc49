// Channel volume sampler: per-interval expected volume from the arrival
// curve, Poisson-distributed counts per channel.

use rand::Rng;

use crate::curve::ArrivalCurve;
use crate::schedule::{IntervalGrid, INTERVALS_PER_HOUR};
use crate::types::{ChannelMix, MixError, VolumeRow, VolumeTable};

/// Poisson sampling via Knuth's direct method.
/// For λ < 30, uses the direct method. For larger λ, uses a normal
/// approximation.
pub fn poisson_sample(rng: &mut impl Rng, lambda: f64) -> u32 {
    if lambda <= 0.0 {
        return 0;
    }
    if lambda < 30.0 {
        // Knuth's algorithm
        let l = (-lambda).exp();
        let mut k: u32 = 0;
        let mut p: f64 = 1.0;
        loop {
            k += 1;
            p *= rng.gen::<f64>();
            if p <= l {
                return k - 1;
            }
        }
    } else {
        // Normal approximation for large lambda
        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();
        let z = (-2.0 * u1.max(f64::MIN_POSITIVE).ln()).sqrt()
            * (2.0 * std::f64::consts::PI * u2).cos();
        let result = lambda + lambda.sqrt() * z;
        result.round().max(0.0) as u32
    }
}

/// Sample a volume table for one run.
///
/// `total_volume = total_per_hour * interval_count / 4`, spread across
/// intervals by the curve weights. Each channel's count is drawn directly as
/// `Poisson(expected_total * share / 100)`, independently per channel; the
/// row total is recomputed as the sum of the sampled counts. A mix that does
/// not sum to 100 is rescaled proportionally first (warning via `log`).
///
/// An empty grid yields an empty table, and `total_per_hour = 0` yields
/// all-zero counts.
pub fn simulate_volume(
    grid: &IntervalGrid,
    curve: &ArrivalCurve,
    total_per_hour: f64,
    mix: &ChannelMix,
    rng: &mut impl Rng,
) -> Result<VolumeTable, MixError> {
    let (mix, rescaled) = mix.normalized()?;
    if let Some(sum) = rescaled {
        log::warn!("channel shares sum to {sum}, rescaling proportionally to 100");
    }

    let channels = mix.channel_names();
    if grid.is_empty() {
        return Ok(VolumeTable::empty(channels));
    }

    let total_volume = total_per_hour * grid.len() as f64 / INTERVALS_PER_HOUR;
    let rows = curve
        .weights()
        .iter()
        .enumerate()
        .map(|(i, &weight)| {
            let expected_total = total_volume * weight;
            let counts: Vec<u32> = mix
                .shares
                .iter()
                .map(|share| poisson_sample(rng, expected_total * share.percent / 100.0))
                .collect();
            let total = counts.iter().sum();
            VolumeRow {
                label: grid.label_of(i),
                counts,
                total,
            }
        })
        .collect();

    Ok(VolumeTable { channels, rows })
}
