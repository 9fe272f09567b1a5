//! # parscale-core
//!
//! Parallel scaling metrics. Turns timing series measured at increasing
//! worker counts into speedup, efficiency, throughput and overhead series,
//! and describes the experiments those series come from.

pub mod constants;
pub mod experiment;
pub mod metrics;
pub mod presets;
pub mod series;

// Re-exports
pub use constants::exit_codes;
pub use experiment::{Experiment, ExperimentKind, LabeledSeries, Workload};
pub use metrics::{EfficiencyBand, MetricsError};
pub use series::{DerivedSeries, MetricKind, RunSeries, Sample};
