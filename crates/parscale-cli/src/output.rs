//! CLI output formatting: metric tables and highlight values.

use std::fmt::Write;

use parscale_core::series::{DerivedSeries, MetricKind};
use parscale_report::analysis::{
    ComparisonMetrics, ExperimentReport, Highlight, ReportBody, ScalingMetrics,
};

/// Format a value with its unit the way the charts annotate it.
#[must_use]
pub fn format_value(value: f64, unit: &str) -> String {
    match unit {
        "s" => format!("{value:.3}s"),
        "x" => format!("{value:.2}x"),
        "%" => format!("{value:.1}%"),
        "" => format!("{value:.2}"),
        other => format!("{value:.2} {other}"),
    }
}

/// Format a highlight as `value at N workers`.
#[must_use]
pub fn format_highlight(highlight: &Highlight, worker_label: &str) -> String {
    format!(
        "{} at {} {}",
        format_value(highlight.value, &highlight.unit),
        highlight.workers,
        worker_label.to_lowercase()
    )
}

/// Lay out a table with right-aligned columns.
#[must_use]
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let line = |out: &mut String, cells: &[String]| {
        let formatted: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        let _ = writeln!(out, "{}", formatted.join("  ").trim_end());
    };

    line(&mut out, headers);
    let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let _ = writeln!(out, "{:-<total$}", "");
    for row in rows {
        line(&mut out, row);
    }
    out
}

fn column(series: &DerivedSeries, decimals: usize) -> Vec<String> {
    series
        .values()
        .iter()
        .map(|v| format!("{v:.decimals$}"))
        .collect()
}

/// Column header of a derived series: metric name plus its unit.
fn metric_header(prefix: &str, series: &DerivedSeries) -> String {
    let kind = series.metric();
    let unit = if kind.is_percentage() {
        " (%)"
    } else if kind == MetricKind::TimeDifference {
        " (s)"
    } else {
        ""
    };
    format!("{prefix}{}{unit}", kind.label())
}

/// Rows from columns; a short column leaves its cells blank.
fn transpose(columns: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let len = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..len)
        .map(|i| {
            columns
                .iter()
                .map(|c| c.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

fn scaling_columns(
    m: &ScalingMetrics,
    prefix: &str,
    verbose: bool,
    headers: &mut Vec<String>,
    columns: &mut Vec<Vec<String>>,
) {
    headers.push(format!("{prefix}Time (s)"));
    columns.push(m.run.times().map(|t| format!("{t:.3}")).collect());
    headers.push(metric_header(prefix, &m.speedup));
    columns.push(column(&m.speedup, 2));
    if verbose {
        headers.push(metric_header(prefix, &m.ideal_speedup));
        columns.push(column(&m.ideal_speedup, 0));
    }
    headers.push(metric_header(prefix, &m.efficiency));
    columns.push(column(&m.efficiency, 1));
    if let Some(rate) = &m.throughput {
        headers.push(format!("{} ({})", rate.label, rate.unit));
        columns.push(column(&rate.series, 2));
    }
}

fn comparison_columns(
    m: &ComparisonMetrics,
    headers: &mut Vec<String>,
    columns: &mut Vec<Vec<String>>,
) {
    headers.push(format!("{} (s)", m.subject_label));
    columns.push(m.subject.times().map(|t| format!("{t:.3}")).collect());
    headers.push(format!("{} (s)", m.reference_label));
    columns.push(m.reference.times().map(|t| format!("{t:.3}")).collect());
    for (series, decimals) in [
        (&m.overhead_factor, 2),
        (&m.time_difference, 3),
        (&m.overhead_percentage, 1),
    ] {
        headers.push(metric_header("", series));
        columns.push(column(series, decimals));
    }
}

/// Metrics table of a report, one row per worker count.
///
/// Verbose tables include the ideal speedup column.
#[must_use]
pub fn metrics_table(report: &ExperimentReport, verbose: bool) -> String {
    let mut headers = vec![report.worker_label.clone()];
    let mut columns: Vec<Vec<String>> = Vec::new();

    let workers: Vec<String> = match &report.body {
        ReportBody::Scaling(m) => {
            scaling_columns(m, "", verbose, &mut headers, &mut columns);
            m.run.workers().map(|w| w.to_string()).collect()
        }
        ReportBody::StrongWeak { strong, weak } => {
            scaling_columns(strong, "Strong ", verbose, &mut headers, &mut columns);
            headers.push("Weak Time (s)".to_string());
            columns.push(weak.run.times().map(|t| format!("{t:.3}")).collect());
            headers.push(metric_header("", &weak.efficiency));
            columns.push(column(&weak.efficiency, 1));
            strong.run.workers().map(|w| w.to_string()).collect()
        }
        ReportBody::Comparison(m) => {
            comparison_columns(m, &mut headers, &mut columns);
            m.subject.workers().map(|w| w.to_string()).collect()
        }
    };
    columns.insert(0, workers);

    render_table(&headers, &transpose(columns))
}
