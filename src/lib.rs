// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Contact Center Volume Simulation Suite ("The Queue")

pub mod curve;
pub mod sampler;
pub mod schedule;
pub mod simulation;
pub mod types;

pub use curve::{ArrivalCurve, ArrivalPattern, CurveError, RANDOM_PATTERN_SEED};
pub use sampler::{poisson_sample, simulate_volume};
pub use schedule::{IntervalGrid, INTERVALS_PER_HOUR, INTERVAL_MINUTES};
pub use simulation::{SimError, SimulationRun, VolumeSimulation};
pub use types::*;
