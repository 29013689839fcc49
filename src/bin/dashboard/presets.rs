// Preset definitions: named parameter sets covering the common channel mixes
// and arrival shapes. All runtime behavior lives in the engine; a preset is
// just a config snapshot.

use chrono::NaiveTime;
use volume_engine::{ArrivalPattern, ChannelMix, SimConfig};

pub struct Preset {
    pub name: &'static str,
    pub label: &'static str,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub contacts_per_hour: f64,
    pub pattern: ArrivalPattern,
    pub mix: ChannelMix,
}

impl Preset {
    pub fn config(&self) -> SimConfig {
        SimConfig {
            open: self.start,
            close: self.end,
            contacts_per_hour: self.contacts_per_hour,
            pattern: self.pattern.clone(),
            mix: self.mix.clone(),
        }
    }
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("preset times are valid")
}

pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "WEEKDAY_BASELINE",
            label: "Weekday Baseline",
            start: t(8, 0),
            end: t(18, 0),
            contacts_per_hour: 240.0,
            pattern: ArrivalPattern::MorningPeak,
            mix: ChannelMix::from_pairs(&[("Voice", 50.0), ("Chat", 30.0), ("Email", 20.0)]),
        },
        Preset {
            name: "SUPPORT_EVENING",
            label: "Evening Support Desk",
            start: t(12, 0),
            end: t(22, 0),
            contacts_per_hour: 180.0,
            pattern: ArrivalPattern::AfternoonPeak,
            mix: ChannelMix::from_pairs(&[
                ("Voice", 40.0),
                ("Chat", 30.0),
                ("Email", 20.0),
                ("SMS", 10.0),
            ]),
        },
        Preset {
            name: "LUNCH_RUSH",
            label: "Lunch Rush",
            start: t(9, 0),
            end: t(17, 0),
            contacts_per_hour: 320.0,
            pattern: ArrivalPattern::MiddaySpike,
            mix: ChannelMix::from_pairs(&[("Voice", 45.0), ("Chat", 35.0), ("Email", 20.0)]),
        },
        Preset {
            name: "RETAIL_SPLIT_SHIFT",
            label: "Retail Split Shift",
            start: t(7, 0),
            end: t(19, 0),
            contacts_per_hour: 260.0,
            pattern: ArrivalPattern::DoublePeaks,
            mix: ChannelMix::from_pairs(&[
                ("Voice", 35.0),
                ("Chat", 30.0),
                ("Email", 20.0),
                ("SMS", 15.0),
            ]),
        },
        Preset {
            name: "BACKLOG_DRAIN",
            label: "Backlog Drain (front-loaded)",
            start: t(18, 0),
            end: t(23, 45),
            contacts_per_hour: 140.0,
            pattern: ArrivalPattern::FrontLoaded,
            mix: ChannelMix::from_pairs(&[("Voice", 70.0), ("Email", 30.0)]),
        },
        Preset {
            name: "CHAOS_DRILL",
            label: "Chaos Drill (random curve)",
            start: t(8, 0),
            end: t(16, 0),
            contacts_per_hour: 200.0,
            pattern: ArrivalPattern::Random,
            mix: ChannelMix::from_pairs(&[("Voice", 50.0), ("Chat", 30.0), ("Email", 20.0)]),
        },
    ]
}
