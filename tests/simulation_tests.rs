#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use volume_engine::{
        ArrivalPattern, ChannelMix, SimConfig, SimError, VolumeSimulation,
    };

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("test: valid time")
    }

    fn standard_config() -> SimConfig {
        SimConfig {
            open: t(8, 0),
            close: t(9, 0),
            contacts_per_hour: 400.0,
            pattern: ArrivalPattern::Flat,
            mix: ChannelMix::from_pairs(&[("Voice", 50.0), ("Chat", 30.0), ("Email", 20.0)]),
        }
    }

    // ========== End-to-End: Flat Hour ==========

    #[test]
    fn test_flat_hour_curve_and_table_shape() {
        let sim = VolumeSimulation::new(standard_config());
        let run = sim.run_seeded(7).expect("run");

        let labels: Vec<&str> = run.curve.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["08:00", "08:15", "08:30", "08:45"]);
        for point in &run.curve {
            assert_eq!(point.weight, 0.25, "flat curve over 4 intervals");
        }

        assert_eq!(run.table.len(), 4);
        assert_eq!(run.table.channels, vec!["Voice", "Chat", "Email"]);
        for row in &run.table.rows {
            assert_eq!(row.counts.len(), 3);
            assert_eq!(row.total, row.counts.iter().sum::<u32>());
        }
        assert!(run.mix_rescaled.is_none());
    }

    #[test]
    fn test_flat_hour_mean_total_near_expected() {
        // 400/hr over 4 intervals, flat: expected 100 contacts per interval.
        // Seeded trials, so the outcome is fixed; assert the mean lands within
        // a statistical tolerance rather than any exact draw.
        let sim = VolumeSimulation::new(standard_config());
        let trials = 300;
        let mut sums = [0u64; 4];
        for seed in 0..trials {
            let run = sim.run_seeded(seed).expect("run");
            for (i, row) in run.table.rows.iter().enumerate() {
                sums[i] += row.total as u64;
            }
        }
        for (i, &sum) in sums.iter().enumerate() {
            let mean = sum as f64 / trials as f64;
            assert!(
                (mean - 100.0).abs() < 2.5,
                "interval {} mean {} far from expected 100",
                i,
                mean
            );
        }
    }

    // ========== Mix Rescaling ==========

    #[test]
    fn test_overweight_mix_rescales_to_even_split() {
        let mut config = standard_config();
        config.close = t(20, 0); // long window for a stable split
        config.contacts_per_hour = 1000.0;
        config.mix = ChannelMix::from_pairs(&[("Voice", 60.0), ("Chat", 60.0)]);
        let sim = VolumeSimulation::new(config);
        let run = sim.run_seeded(42).expect("run");

        assert_eq!(run.mix_rescaled, Some(120.0), "raw sum surfaced as a warning");

        let totals = run.table.channel_totals();
        let grand = run.table.grand_total() as f64;
        let voice_pct = totals[0] as f64 / grand * 100.0;
        assert!(
            (voice_pct - 50.0).abs() < 3.0,
            "Voice {:.1}% expected ~50% after rescale",
            voice_pct
        );
    }

    // ========== Empty / Zero Inputs ==========

    #[test]
    fn test_inverted_window_yields_empty_run() {
        let mut config = standard_config();
        config.open = t(17, 0);
        config.close = t(8, 0);
        let run = VolumeSimulation::new(config).run_seeded(1).expect("run");
        assert!(run.curve.is_empty());
        assert!(run.table.is_empty());
        assert_eq!(run.table.channels, vec!["Voice", "Chat", "Email"]);
    }

    #[test]
    fn test_zero_width_window_yields_empty_run() {
        let mut config = standard_config();
        config.close = config.open;
        let run = VolumeSimulation::new(config).run_seeded(1).expect("run");
        assert!(run.table.is_empty());
    }

    #[test]
    fn test_zero_rate_yields_zero_counts() {
        let mut config = standard_config();
        config.contacts_per_hour = 0.0;
        let run = VolumeSimulation::new(config).run_seeded(1).expect("run");
        assert_eq!(run.table.len(), 4);
        assert_eq!(run.table.grand_total(), 0);
        for row in &run.table.rows {
            assert!(row.counts.iter().all(|&c| c == 0));
        }
    }

    // ========== Custom Weights ==========

    #[test]
    fn test_custom_weights_flow_through() {
        let mut config = standard_config();
        config.pattern = ArrivalPattern::Custom(vec![1.0, 2.0, 1.0, 0.0]);
        let run = VolumeSimulation::new(config).run_seeded(3).expect("run");

        let weights: Vec<f64> = run.curve.iter().map(|p| p.weight).collect();
        assert_eq!(weights, vec![0.25, 0.5, 0.25, 0.0]);

        // Zero-weight interval draws nothing
        assert_eq!(run.table.rows[3].total, 0);
    }

    #[test]
    fn test_all_zero_custom_weights_fail() {
        let mut config = standard_config();
        config.pattern = ArrivalPattern::Custom(vec![0.0, 0.0, 0.0, 0.0]);
        let err = VolumeSimulation::new(config).run_seeded(1).unwrap_err();
        assert!(
            matches!(err, SimError::Curve(_)),
            "expected a curve error, got: {err}"
        );
    }

    // ========== Determinism ==========

    #[test]
    fn test_same_seed_reproduces_table() {
        let mut config = standard_config();
        config.close = t(18, 0);
        let sim = VolumeSimulation::new(config);
        let a = sim.run_seeded(5).expect("run");
        let b = sim.run_seeded(5).expect("run");
        assert_eq!(a.table, b.table);
        assert_eq!(a.curve, b.curve);
    }

    #[test]
    fn test_different_seeds_diverge() {
        // 40 intervals at 240/hr: two seeds agreeing on every count would be
        // astronomically unlikely.
        let mut config = standard_config();
        config.close = t(18, 0);
        config.contacts_per_hour = 240.0;
        let sim = VolumeSimulation::new(config);
        let a = sim.run_seeded(1).expect("run");
        let b = sim.run_seeded(2).expect("run");
        assert_ne!(a.table, b.table);
    }

    #[test]
    fn test_random_pattern_curve_reproducible() {
        let mut config = standard_config();
        config.close = t(14, 0);
        config.pattern = ArrivalPattern::Random;
        let sim = VolumeSimulation::new(config);
        let a = sim.run_seeded(1).expect("run");
        let b = sim.run_seeded(2).expect("run");
        assert_eq!(a.curve, b.curve, "Random curve is pinned to its own seed");
        assert_ne!(a.table, b.table, "sampling still follows the sampler seed");
    }

    // ========== Pattern Aliases ==========

    #[test]
    fn test_bell_curve_aliases_midday_spike() {
        let mut spike_config = standard_config();
        spike_config.close = t(12, 0);
        spike_config.pattern = ArrivalPattern::MiddaySpike;
        let mut bell_config = spike_config.clone();
        bell_config.pattern = ArrivalPattern::BellCurve;

        let spike = VolumeSimulation::new(spike_config).run_seeded(9).expect("run");
        let bell = VolumeSimulation::new(bell_config).run_seeded(9).expect("run");
        assert_eq!(spike.curve, bell.curve);
        assert_eq!(spike.table, bell.table);
    }
}
