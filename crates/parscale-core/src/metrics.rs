//! Derived performance metrics over run series.
//!
//! Every function here is pure and deterministic. Input that violates a
//! precondition is reported as a [`MetricsError`]; values are never clamped,
//! so super-linear speedups show up as efficiencies above 100%.

use crate::constants::{FAIR_EFFICIENCY, GOOD_EFFICIENCY, IDEAL_EFFICIENCY};
use crate::series::{DerivedSeries, MetricKind, RunSeries, Sample};

/// Error type for metric computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// Empty series, non-positive time or workload, malformed data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two series compared against each other are not index-aligned.
    #[error("mismatched series: {0}")]
    MismatchedSeries(String),
}

fn baseline(series: &RunSeries) -> Result<&Sample, MetricsError> {
    series
        .baseline()
        .ok_or_else(|| MetricsError::InvalidInput("series is empty".into()))
}

/// Check two series are non-empty and share the same worker counts in the
/// same order.
pub fn check_aligned(a: &RunSeries, b: &RunSeries) -> Result<(), MetricsError> {
    if a.len() != b.len() {
        return Err(MetricsError::MismatchedSeries(format!(
            "length {} vs {}",
            a.len(),
            b.len()
        )));
    }
    if let Some((i, (wa, wb))) = a
        .workers()
        .zip(b.workers())
        .enumerate()
        .find(|(_, (wa, wb))| wa != wb)
    {
        return Err(MetricsError::MismatchedSeries(format!(
            "worker count {wa} vs {wb} at index {i}"
        )));
    }
    if a.is_empty() {
        return Err(MetricsError::InvalidInput("series is empty".into()));
    }
    Ok(())
}

/// `S_i = t_0 / t_i`, relative to the smallest worker count.
pub fn speedup(series: &RunSeries) -> Result<DerivedSeries, MetricsError> {
    let t0 = baseline(series)?.seconds;
    Ok(DerivedSeries::from_run(MetricKind::Speedup, series, |s| {
        t0 / s.seconds
    }))
}

/// `E_i = (S_i / p_i) * 100`.
pub fn efficiency(series: &RunSeries) -> Result<DerivedSeries, MetricsError> {
    let t0 = baseline(series)?.seconds;
    Ok(DerivedSeries::from_run(MetricKind::Efficiency, series, |s| {
        (t0 / s.seconds) / f64::from(s.workers) * IDEAL_EFFICIENCY
    }))
}

/// `W_i = (t_0 / t_i) * 100`.
///
/// For weak scaling the problem size grows with the worker count, so the
/// ideal is a constant time and 100% means no loss.
pub fn weak_scaling_efficiency(series: &RunSeries) -> Result<DerivedSeries, MetricsError> {
    let t0 = baseline(series)?.seconds;
    Ok(DerivedSeries::from_run(
        MetricKind::WeakEfficiency,
        series,
        |s| t0 / s.seconds * IDEAL_EFFICIENCY,
    ))
}

/// Ideal linear speedup: `p_i`.
pub fn ideal_speedup(series: &RunSeries) -> Result<DerivedSeries, MetricsError> {
    baseline(series)?;
    Ok(DerivedSeries::from_run(MetricKind::IdealSpeedup, series, |s| {
        f64::from(s.workers)
    }))
}

/// `Th_i = workload_size / t_i`, in workload units per second.
pub fn throughput(series: &RunSeries, workload_size: f64) -> Result<DerivedSeries, MetricsError> {
    if !workload_size.is_finite() || workload_size <= 0.0 {
        return Err(MetricsError::InvalidInput(format!(
            "workload size must be positive, got {workload_size}"
        )));
    }
    baseline(series)?;
    Ok(DerivedSeries::from_run(MetricKind::Throughput, series, |s| {
        workload_size / s.seconds
    }))
}

/// `O_i = tA_i / tB_i`.
pub fn overhead_factor(a: &RunSeries, b: &RunSeries) -> Result<DerivedSeries, MetricsError> {
    check_aligned(a, b)?;
    Ok(DerivedSeries::from_pairs(
        MetricKind::OverheadFactor,
        a,
        b,
        |ta, tb| ta / tb,
    ))
}

/// `Δ_i = tA_i - tB_i`, in seconds.
pub fn time_difference(a: &RunSeries, b: &RunSeries) -> Result<DerivedSeries, MetricsError> {
    check_aligned(a, b)?;
    Ok(DerivedSeries::from_pairs(
        MetricKind::TimeDifference,
        a,
        b,
        |ta, tb| ta - tb,
    ))
}

/// `Pct_i = (tA_i - tB_i) / tB_i * 100`.
pub fn overhead_percentage(a: &RunSeries, b: &RunSeries) -> Result<DerivedSeries, MetricsError> {
    check_aligned(a, b)?;
    Ok(DerivedSeries::from_pairs(
        MetricKind::OverheadPercentage,
        a,
        b,
        |ta, tb| (ta - tb) / tb * 100.0,
    ))
}

/// Efficiency at one worker count, or `None` if it was not measured.
pub fn efficiency_at(series: &RunSeries, workers: u32) -> Result<Option<f64>, MetricsError> {
    Ok(efficiency(series)?.value_at(workers))
}

/// Qualitative efficiency classes used to colour efficiency charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyBand {
    /// At least [`GOOD_EFFICIENCY`] percent.
    Good,
    /// At least [`FAIR_EFFICIENCY`] percent.
    Fair,
    /// Below [`FAIR_EFFICIENCY`] percent.
    Poor,
}

impl EfficiencyBand {
    #[must_use]
    pub fn classify(efficiency: f64) -> Self {
        if efficiency >= GOOD_EFFICIENCY {
            Self::Good
        } else if efficiency >= FAIR_EFFICIENCY {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}
