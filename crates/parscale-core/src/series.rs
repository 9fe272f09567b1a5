//! Run series and the derived series computed from them.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::metrics::MetricsError;

/// A single measured run: worker count and wall-clock time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Number of workers (threads or cores) used for the run.
    pub workers: u32,
    /// Execution time in seconds.
    pub seconds: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(workers: u32, seconds: f64) -> Self {
        Self { workers, seconds }
    }
}

impl From<(u32, f64)> for Sample {
    fn from((workers, seconds): (u32, f64)) -> Self {
        Self::new(workers, seconds)
    }
}

/// Timing series ordered by increasing worker count.
///
/// Worker counts are unique and non-zero; every time is finite and strictly
/// positive. The first sample is the baseline all speedups are relative to.
/// An empty series can be built, but every metric rejects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct RunSeries {
    samples: Vec<Sample>,
}

impl RunSeries {
    /// Build a series, sorting the samples by worker count.
    pub fn new(mut samples: Vec<Sample>) -> Result<Self, MetricsError> {
        samples.sort_by_key(|s| s.workers);

        for s in &samples {
            if s.workers == 0 {
                return Err(MetricsError::InvalidInput(
                    "worker count must be positive".into(),
                ));
            }
            if !s.seconds.is_finite() || s.seconds <= 0.0 {
                return Err(MetricsError::InvalidInput(format!(
                    "time at {} workers must be positive, got {}",
                    s.workers, s.seconds
                )));
            }
        }

        if let Some(pair) = samples.windows(2).find(|w| w[0].workers == w[1].workers) {
            return Err(MetricsError::InvalidInput(format!(
                "duplicate worker count {}",
                pair[0].workers
            )));
        }

        Ok(Self { samples })
    }

    /// Build a series from parallel worker-count and time columns.
    pub fn from_columns(workers: &[u32], seconds: &[f64]) -> Result<Self, MetricsError> {
        if workers.len() != seconds.len() {
            return Err(MetricsError::InvalidInput(format!(
                "{} worker counts but {} timings",
                workers.len(),
                seconds.len()
            )));
        }
        Self::new(
            workers
                .iter()
                .zip(seconds)
                .map(|(&w, &s)| Sample::new(w, s))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The sample at the smallest worker count.
    #[must_use]
    pub fn baseline(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Worker counts in order.
    pub fn workers(&self) -> impl Iterator<Item = u32> + '_ {
        self.samples.iter().map(|s| s.workers)
    }

    /// Times in seconds, in worker order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.seconds)
    }
}

impl TryFrom<Vec<Sample>> for RunSeries {
    type Error = MetricsError;

    fn try_from(samples: Vec<Sample>) -> Result<Self, Self::Error> {
        Self::new(samples)
    }
}

impl From<RunSeries> for Vec<Sample> {
    fn from(series: RunSeries) -> Self {
        series.samples
    }
}

/// The metric a [`DerivedSeries`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Baseline time over time at `p` workers.
    Speedup,
    /// Speedup per worker, in percent.
    Efficiency,
    /// Baseline time over time at `p` workers with work grown with `p`, in percent.
    WeakEfficiency,
    /// Ideal linear speedup (`p`).
    IdealSpeedup,
    /// Workload per second.
    Throughput,
    /// Time under one strategy over time under another.
    OverheadFactor,
    /// Time under one strategy minus time under another, in seconds.
    TimeDifference,
    /// Time difference relative to the reference strategy, in percent.
    OverheadPercentage,
}

impl MetricKind {
    /// Human-readable metric name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Speedup => "Speedup",
            Self::Efficiency => "Efficiency",
            Self::WeakEfficiency => "Weak Scaling Efficiency",
            Self::IdealSpeedup => "Ideal Speedup",
            Self::Throughput => "Throughput",
            Self::OverheadFactor => "Overhead Factor",
            Self::TimeDifference => "Time Difference",
            Self::OverheadPercentage => "Overhead",
        }
    }

    /// Whether values are expressed in percent.
    #[must_use]
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            Self::Efficiency | Self::WeakEfficiency | Self::OverheadPercentage
        )
    }
}

/// One derived metric per sample, aligned index-for-index with the run series
/// it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSeries {
    metric: MetricKind,
    workers: Vec<u32>,
    values: Vec<f64>,
}

impl DerivedSeries {
    pub(crate) fn from_run<F>(metric: MetricKind, run: &RunSeries, f: F) -> Self
    where
        F: FnMut(&Sample) -> f64,
    {
        Self {
            metric,
            workers: run.workers().collect(),
            values: run.samples().iter().map(f).collect(),
        }
    }

    pub(crate) fn from_pairs<F>(metric: MetricKind, a: &RunSeries, b: &RunSeries, mut f: F) -> Self
    where
        F: FnMut(f64, f64) -> f64,
    {
        Self {
            metric,
            workers: a.workers().collect(),
            values: a.times().zip(b.times()).map(|(x, y)| f(x, y)).collect(),
        }
    }

    #[must_use]
    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    #[must_use]
    pub fn workers(&self) -> &[u32] {
        &self.workers
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a given worker count.
    #[must_use]
    pub fn value_at(&self, workers: u32) -> Option<f64> {
        self.workers
            .iter()
            .position(|&w| w == workers)
            .map(|i| self.values[i])
    }

    /// `(workers, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.workers.iter().copied().zip(self.values.iter().copied())
    }

    /// Largest value and the worker count it occurs at (first on ties).
    #[must_use]
    pub fn peak(&self) -> Option<(u32, f64)> {
        self.points().fold(None, |best, (w, v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((w, v)),
        })
    }
}

impl Index<usize> for DerivedSeries {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_by_workers() {
        let series = RunSeries::new(vec![
            Sample::new(4, 0.1),
            Sample::new(1, 0.4),
            Sample::new(2, 0.2),
        ])
        .unwrap();
        assert_eq!(series.workers().collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(series.baseline(), Some(&Sample::new(1, 0.4)));
    }

    #[test]
    fn new_rejects_duplicates() {
        let err = RunSeries::new(vec![Sample::new(2, 0.1), Sample::new(2, 0.2)]).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidInput(_)));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn new_rejects_non_positive_time() {
        assert!(RunSeries::new(vec![Sample::new(1, 0.0)]).is_err());
        assert!(RunSeries::new(vec![Sample::new(1, -0.5)]).is_err());
        assert!(RunSeries::new(vec![Sample::new(1, f64::NAN)]).is_err());
        assert!(RunSeries::new(vec![Sample::new(1, f64::INFINITY)]).is_err());
    }

    #[test]
    fn new_rejects_zero_workers() {
        let err = RunSeries::new(vec![Sample::new(0, 1.0)]).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidInput(_)));
    }

    #[test]
    fn empty_series_is_constructible() {
        let series = RunSeries::new(Vec::new()).unwrap();
        assert!(series.is_empty());
        assert!(series.baseline().is_none());
    }

    #[test]
    fn from_columns_length_mismatch() {
        let err = RunSeries::from_columns(&[1, 2], &[0.5]).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidInput(_)));
    }

    #[test]
    fn deserialize_validates() {
        let ok: RunSeries =
            serde_json::from_str(r#"[{"workers":2,"seconds":0.2},{"workers":1,"seconds":0.5}]"#)
                .unwrap();
        assert_eq!(ok.baseline().map(|s| s.workers), Some(1));

        let bad = serde_json::from_str::<RunSeries>(r#"[{"workers":1,"seconds":-1.0}]"#);
        assert!(bad.is_err());
    }

    #[test]
    fn peak_prefers_first_maximum() {
        let series = DerivedSeries {
            metric: MetricKind::Throughput,
            workers: vec![1, 2, 3, 4],
            values: vec![1.0, 3.0, 3.0, 2.0],
        };
        assert_eq!(series.peak(), Some((2, 3.0)));
        assert_eq!(series.value_at(4), Some(2.0));
        assert_eq!(series[0], 1.0);
    }

    #[test]
    fn peak_of_empty_series() {
        let series = DerivedSeries {
            metric: MetricKind::Speedup,
            workers: Vec::new(),
            values: Vec::new(),
        };
        assert!(series.peak().is_none());
    }

    #[test]
    fn percentage_kinds() {
        assert!(MetricKind::Efficiency.is_percentage());
        assert!(MetricKind::OverheadPercentage.is_percentage());
        assert!(!MetricKind::Speedup.is_percentage());
    }
}
