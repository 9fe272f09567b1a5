//! Experiment analysis: every derived series plus headline numbers.

use serde::Serialize;

use parscale_core::experiment::{Experiment, ExperimentKind, LabeledSeries, Workload};
use parscale_core::metrics::{self, MetricsError};
use parscale_core::series::{DerivedSeries, RunSeries};

/// Derived series of one strong-scaling run.
#[derive(Debug, Clone, Serialize)]
pub struct ScalingMetrics {
    pub run: RunSeries,
    pub speedup: DerivedSeries,
    pub ideal_speedup: DerivedSeries,
    pub efficiency: DerivedSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<RateSeries>,
}

/// Throughput series with its display metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RateSeries {
    /// Metric name, e.g. "Memory Bandwidth".
    pub label: String,
    /// Rate unit, e.g. "GB/s".
    pub unit: String,
    pub series: DerivedSeries,
}

/// Derived series of a weak-scaling run.
#[derive(Debug, Clone, Serialize)]
pub struct WeakMetrics {
    pub run: RunSeries,
    pub efficiency: DerivedSeries,
}

/// Derived series comparing two strategies.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonMetrics {
    pub subject_label: String,
    pub reference_label: String,
    pub subject: RunSeries,
    pub reference: RunSeries,
    pub overhead_factor: DerivedSeries,
    pub time_difference: DerivedSeries,
    pub overhead_percentage: DerivedSeries,
}

/// Analysis body, by experiment kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    Scaling(ScalingMetrics),
    StrongWeak {
        strong: ScalingMetrics,
        weak: WeakMetrics,
    },
    Comparison(ComparisonMetrics),
}

/// A headline number and where it occurs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub label: String,
    pub workers: u32,
    pub value: f64,
    pub unit: String,
}

impl Highlight {
    fn new(label: impl Into<String>, workers: u32, value: f64, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            workers,
            value,
            unit: unit.into(),
        }
    }
}

/// Complete analysis of one experiment.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub name: String,
    pub title: String,
    pub worker_label: String,
    pub body: ReportBody,
    pub highlights: Vec<Highlight>,
}

/// Compute every derived series of an experiment.
pub fn analyze(experiment: &Experiment) -> Result<ExperimentReport, MetricsError> {
    let body = match &experiment.kind {
        ExperimentKind::Scaling { run, workload } => {
            ReportBody::Scaling(scaling_metrics(run, workload.as_ref())?)
        }
        ExperimentKind::StrongWeak { strong, weak } => {
            // Both runs share one table and one x axis.
            metrics::check_aligned(strong, weak)?;
            ReportBody::StrongWeak {
                strong: scaling_metrics(strong, None)?,
                weak: WeakMetrics {
                    run: weak.clone(),
                    efficiency: metrics::weak_scaling_efficiency(weak)?,
                },
            }
        }
        ExperimentKind::Comparison { subject, reference } => {
            ReportBody::Comparison(comparison_metrics(subject, reference)?)
        }
    };

    let highlights = highlights(&body);
    tracing::debug!(
        experiment = %experiment.name,
        highlights = highlights.len(),
        "analysis complete"
    );

    Ok(ExperimentReport {
        name: experiment.name.clone(),
        title: experiment.title.clone(),
        worker_label: experiment.worker_label.clone(),
        body,
        highlights,
    })
}

fn scaling_metrics(
    run: &RunSeries,
    workload: Option<&Workload>,
) -> Result<ScalingMetrics, MetricsError> {
    let throughput = workload
        .map(|w| -> Result<RateSeries, MetricsError> {
            Ok(RateSeries {
                label: w.label.clone(),
                unit: w.rate_unit(),
                series: metrics::throughput(run, w.size)?,
            })
        })
        .transpose()?;

    Ok(ScalingMetrics {
        run: run.clone(),
        speedup: metrics::speedup(run)?,
        ideal_speedup: metrics::ideal_speedup(run)?,
        efficiency: metrics::efficiency(run)?,
        throughput,
    })
}

fn comparison_metrics(
    subject: &LabeledSeries,
    reference: &LabeledSeries,
) -> Result<ComparisonMetrics, MetricsError> {
    Ok(ComparisonMetrics {
        subject_label: subject.label.clone(),
        reference_label: reference.label.clone(),
        subject: subject.run.clone(),
        reference: reference.run.clone(),
        overhead_factor: metrics::overhead_factor(&subject.run, &reference.run)?,
        time_difference: metrics::time_difference(&subject.run, &reference.run)?,
        overhead_percentage: metrics::overhead_percentage(&subject.run, &reference.run)?,
    })
}

fn highlights(body: &ReportBody) -> Vec<Highlight> {
    let mut out = Vec::new();
    match body {
        ReportBody::Scaling(m) => scaling_highlights(m, "", &mut out),
        ReportBody::StrongWeak { strong, weak } => {
            scaling_highlights(strong, "Strong: ", &mut out);
            if let Some((w, v)) = weak.efficiency.points().last() {
                out.push(Highlight::new(format!("Weak: efficiency at {w}"), w, v, "%"));
            }
        }
        ReportBody::Comparison(m) => {
            if let Some((w, v)) = m.overhead_factor.peak() {
                out.push(Highlight::new("Max overhead factor", w, v, "x"));
            }
            if let Some((w, v)) = m.time_difference.peak() {
                out.push(Highlight::new("Max time difference", w, v, "s"));
            }
            if let Some((w, v)) = m.overhead_percentage.peak() {
                out.push(Highlight::new("Max overhead", w, v, "%"));
            }
        }
    }
    out
}

fn scaling_highlights(m: &ScalingMetrics, prefix: &str, out: &mut Vec<Highlight>) {
    if let Some((w, v)) = m.speedup.peak() {
        out.push(Highlight::new(format!("{prefix}Best speedup"), w, v, "x"));
        if let Some(e) = m.efficiency.value_at(w) {
            out.push(Highlight::new(
                format!("{prefix}Efficiency at best speedup"),
                w,
                e,
                "%",
            ));
        }
    }
    if let Some((w, e)) = m.efficiency.points().last() {
        out.push(Highlight::new(
            format!("{prefix}Efficiency at {w}"),
            w,
            e,
            "%",
        ));
    }
    if let Some(rate) = &m.throughput {
        if let Some((w, v)) = rate.series.peak() {
            out.push(Highlight::new(
                format!("{prefix}Peak {}", rate.label.to_lowercase()),
                w,
                v,
                rate.unit.clone(),
            ));
        }
    }
}
