//! Figure planning: which charts an experiment produces and what they show.
//!
//! Figures are plain data. A [`ChartRenderer`](crate::interfaces::ChartRenderer)
//! decides how they look on a particular backend.

use parscale_core::constants::{IDEAL_EFFICIENCY, PARITY_FACTOR};
use parscale_core::metrics;
use parscale_core::series::{DerivedSeries, RunSeries};

use crate::analysis::{ComparisonMetrics, ExperimentReport, RateSeries, ReportBody, ScalingMetrics};

/// Named series colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Red,
    Green,
    Purple,
    Orange,
    Brown,
    Gray,
}

/// Point markers for line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
    Diamond,
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesStyle {
    /// Line through the points with a marker at each point, optionally
    /// filled down to zero.
    Line { marker: Marker, fill: bool },
    /// One bar per point, `width` x-units wide and centred `offset` x-units
    /// from the point. Banded bars are coloured by efficiency band instead of
    /// the series colour.
    Bars { width: f64, offset: f64, banded: bool },
}

/// How value annotations are printed next to points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `0.471s`
    Seconds,
    /// `3.99x`
    Factor,
    /// `99.6%`
    Percent,
    /// Plain number with the given number of decimals.
    Fixed(usize),
}

impl ValueFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Seconds => format!("{value:.3}s"),
            Self::Factor => format!("{value:.2}x"),
            Self::Percent => format!("{value:.1}%"),
            Self::Fixed(decimals) => format!("{value:.decimals$}"),
        }
    }
}

/// One data series of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    /// Legend entry, if any.
    pub label: Option<String>,
    pub color: Color,
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
}

impl PlotSeries {
    #[must_use]
    pub fn line(color: Color, marker: Marker, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: None,
            color,
            style: SeriesStyle::Line {
                marker,
                fill: false,
            },
            points,
        }
    }

    #[must_use]
    pub fn bars(color: Color, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: None,
            color,
            style: SeriesStyle::Bars {
                width: 0.7,
                offset: 0.0,
                banded: false,
            },
            points,
        }
    }

    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Fill the area under a line series.
    #[must_use]
    pub fn filled(mut self) -> Self {
        if let SeriesStyle::Line { ref mut fill, .. } = self.style {
            *fill = true;
        }
        self
    }

    /// Colour bars by efficiency band.
    #[must_use]
    pub fn banded(mut self) -> Self {
        if let SeriesStyle::Bars { ref mut banded, .. } = self.style {
            *banded = true;
        }
        self
    }

    /// Narrow and shift bars so several series can share an x value.
    #[must_use]
    pub fn grouped(mut self, bar_width: f64, bar_offset: f64) -> Self {
        if let SeriesStyle::Bars {
            ref mut width,
            ref mut offset,
            ..
        } = self.style
        {
            *width = bar_width;
            *offset = bar_offset;
        }
        self
    }
}

/// Reference line drawn behind the data.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    /// Horizontal line at `y`.
    Horizontal { y: f64, label: String, color: Color },
    /// The line `y = x` (ideal linear speedup).
    Identity { label: String, color: Color },
}

/// Vertical axis scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    #[default]
    Linear,
    Log,
}

/// Value labels printed above every `stride`-th point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub format: ValueFormat,
    pub stride: usize,
}

/// Text pinned to one data point, above it or below it.
#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    pub at: (f64, f64),
    pub text: String,
    pub below: bool,
}

/// Data extent of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// One chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub scale: Scale,
    pub series: Vec<PlotSeries>,
    pub references: Vec<Reference>,
    pub annotation: Option<Annotation>,
    pub callouts: Vec<Callout>,
}

impl Panel {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            scale: Scale::Linear,
            series: Vec::new(),
            references: Vec::new(),
            annotation: None,
            callouts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: PlotSeries) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    #[must_use]
    pub fn annotated(mut self, format: ValueFormat, stride: usize) -> Self {
        self.annotation = Some(Annotation {
            format,
            stride: stride.max(1),
        });
        self
    }

    #[must_use]
    pub fn with_callouts(mut self, callouts: Vec<Callout>) -> Self {
        self.callouts.extend(callouts);
        self
    }

    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.scale = Scale::Log;
        self
    }

    /// Distinct x values of all series, ascending.
    #[must_use]
    pub fn x_ticks(&self) -> Vec<f64> {
        let mut xs: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(x, _)| x))
            .collect();
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        xs
    }

    /// Extent of the data and reference lines.
    ///
    /// Linear panels always include `y = 0`; log panels only consider
    /// positive values. `None` if there is nothing to draw.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let xs = self.x_ticks();
        let (&x_min, &x_max) = (xs.first()?, xs.last()?);

        let mut ys: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, y)| y))
            .collect();
        for reference in &self.references {
            match reference {
                Reference::Horizontal { y, .. } => ys.push(*y),
                Reference::Identity { .. } => ys.extend([x_min, x_max]),
            }
        }

        let (y_min, y_max) = match self.scale {
            Scale::Linear => ys
                .iter()
                .fold((0.0f64, 0.0f64), |(lo, hi), &y| (lo.min(y), hi.max(y))),
            Scale::Log => ys
                .iter()
                .filter(|&&y| y > 0.0)
                .fold(None, |acc: Option<(f64, f64)>, &y| match acc {
                    Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
                    None => Some((y, y)),
                })?,
        };

        Some(Bounds {
            x: (x_min, x_max),
            y: (y_min, y_max),
        })
    }
}

/// One image file: a single panel or a grid of panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// File name without extension.
    pub stem: String,
    /// Overall title above a grid.
    pub title: Option<String>,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Panel>,
}

impl Figure {
    #[must_use]
    pub fn single(stem: impl Into<String>, panel: Panel) -> Self {
        Self {
            stem: stem.into(),
            title: None,
            rows: 1,
            cols: 1,
            panels: vec![panel],
        }
    }

    #[must_use]
    pub fn grid(
        stem: impl Into<String>,
        title: impl Into<String>,
        rows: usize,
        cols: usize,
        panels: Vec<Panel>,
    ) -> Self {
        Self {
            stem: stem.into(),
            title: Some(title.into()),
            rows,
            cols,
            panels,
        }
    }
}

fn derived_points(series: &DerivedSeries) -> Vec<(f64, f64)> {
    series.points().map(|(w, v)| (f64::from(w), v)).collect()
}

fn time_points(run: &RunSeries) -> Vec<(f64, f64)> {
    run.samples()
        .iter()
        .map(|s| (f64::from(s.workers), s.seconds))
        .collect()
}

/// Panel factory for one report.
struct Planner<'a> {
    name: &'a str,
    workers: &'a str,
    x_label: String,
}

impl<'a> Planner<'a> {
    fn new(report: &'a ExperimentReport) -> Self {
        Self {
            name: &report.name,
            workers: &report.worker_label,
            x_label: format!("Number of {}", report.worker_label),
        }
    }

    fn stem(&self, suffix: &str) -> String {
        format!("{}_{suffix}", self.name)
    }

    fn time(&self, run: &RunSeries, prefix: &str, color: Color, marker: Marker) -> Panel {
        Panel::new(
            format!("{prefix}Execution Time vs {}", self.workers),
            &self.x_label,
            "Execution Time (seconds)",
        )
        .with_series(PlotSeries::line(color, marker, time_points(run)))
    }

    fn speedup(&self, m: &ScalingMetrics, prefix: &str, color: Color, ideal: Color) -> Panel {
        Panel::new(
            format!("{prefix}Speedup vs {}", self.workers),
            &self.x_label,
            "Speedup",
        )
        .with_series(
            PlotSeries::line(color, Marker::Circle, derived_points(&m.speedup))
                .labeled("Actual Speedup"),
        )
        .with_reference(Reference::Identity {
            label: "Ideal Speedup".into(),
            color: ideal,
        })
    }

    /// Efficiency labels on the speedup curve: at the second worker count,
    /// at the best speedup (above the point) and at the largest worker count.
    fn efficiency_callouts(m: &ScalingMetrics) -> Vec<Callout> {
        let workers: Vec<u32> = m.run.workers().collect();
        let best = m.speedup.peak().map(|(w, _)| w);
        let mut picks: Vec<u32> = [workers.get(1).copied(), best, workers.last().copied()]
            .into_iter()
            .flatten()
            .collect();
        picks.sort_unstable();
        picks.dedup();

        picks
            .into_iter()
            .filter_map(|w| {
                let efficiency = metrics::efficiency_at(&m.run, w).ok().flatten()?;
                let speedup = m.speedup.value_at(w)?;
                Some(Callout {
                    at: (f64::from(w), speedup),
                    text: format!("Efficiency: {efficiency:.1}%"),
                    below: Some(w) != best,
                })
            })
            .collect()
    }

    fn efficiency_line(&self, series: &DerivedSeries, title: String, color: Color) -> Panel {
        Panel::new(title, &self.x_label, "Efficiency (%)")
            .with_series(PlotSeries::line(color, Marker::Diamond, derived_points(series)))
            .with_reference(Reference::Horizontal {
                y: IDEAL_EFFICIENCY,
                label: "100% Efficiency".into(),
                color: Color::Red,
            })
    }

    fn efficiency_bars(&self, series: &DerivedSeries) -> Panel {
        Panel::new(
            format!("Parallel Efficiency vs {}", self.workers),
            &self.x_label,
            "Parallel Efficiency (%)",
        )
        .with_series(PlotSeries::bars(Color::Green, derived_points(series)).banded())
        .with_reference(Reference::Horizontal {
            y: IDEAL_EFFICIENCY,
            label: "100% Efficiency (Ideal)".into(),
            color: Color::Blue,
        })
    }

    fn rate(&self, rate: &RateSeries) -> Panel {
        let mut panel = Panel::new(
            format!("{} vs {}", rate.label, self.workers),
            &self.x_label,
            format!("{} ({})", rate.label, rate.unit),
        )
        .with_series(
            PlotSeries::line(Color::Purple, Marker::Triangle, derived_points(&rate.series))
                .filled(),
        );
        if let Some((_, peak)) = rate.series.peak() {
            panel = panel.with_reference(Reference::Horizontal {
                y: peak,
                label: format!("Peak: {peak:.2} {}", rate.unit),
                color: Color::Green,
            });
        }
        panel
    }

    fn comparison_times(&self, m: &ComparisonMetrics) -> Panel {
        Panel::new(
            format!("Execution Time: {} vs {}", m.subject_label, m.reference_label),
            &self.x_label,
            "Execution Time (seconds)",
        )
        .with_series(
            PlotSeries::line(Color::Red, Marker::Circle, time_points(&m.subject))
                .labeled(&m.subject_label),
        )
        .with_series(
            PlotSeries::line(Color::Green, Marker::Square, time_points(&m.reference))
                .labeled(&m.reference_label),
        )
    }

    fn overhead_factor(&self, m: &ComparisonMetrics) -> Panel {
        Panel::new(
            format!("{} Overhead vs {}", m.subject_label, m.reference_label),
            &self.x_label,
            format!("Overhead Factor ({} / {})", m.subject_label, m.reference_label),
        )
        .with_series(PlotSeries::line(
            Color::Purple,
            Marker::Triangle,
            derived_points(&m.overhead_factor),
        ))
        .with_reference(Reference::Horizontal {
            y: PARITY_FACTOR,
            label: "No difference".into(),
            color: Color::Red,
        })
    }

    fn time_difference(&self, m: &ComparisonMetrics) -> Panel {
        Panel::new(
            format!("Performance Gap: {} - {}", m.subject_label, m.reference_label),
            &self.x_label,
            "Time Difference (seconds)",
        )
        .with_series(PlotSeries::bars(Color::Orange, derived_points(&m.time_difference)))
    }

    fn overhead_percentage(&self, m: &ComparisonMetrics) -> Panel {
        Panel::new(
            format!("{} Overhead vs {}", m.subject_label, self.workers),
            &self.x_label,
            format!("{} Overhead (%)", m.subject_label),
        )
        .with_series(PlotSeries::line(
            Color::Brown,
            Marker::Diamond,
            derived_points(&m.overhead_percentage),
        ))
    }

    fn grouped_times(&self, m: &ComparisonMetrics) -> Panel {
        Panel::new(
            format!("{} vs {}", m.subject_label, m.reference_label),
            &self.x_label,
            "Execution Time (seconds)",
        )
        .with_series(
            PlotSeries::bars(Color::Red, time_points(&m.subject))
                .grouped(0.35, -0.175)
                .labeled(&m.subject_label),
        )
        .with_series(
            PlotSeries::bars(Color::Green, time_points(&m.reference))
                .grouped(0.35, 0.175)
                .labeled(&m.reference_label),
        )
    }

    fn scaling(&self, title: &str, m: &ScalingMetrics) -> Vec<Figure> {
        let mut figures = Vec::new();

        let dashboard = match &m.throughput {
            Some(rate) => Figure::grid(
                self.stem("analysis"),
                title,
                2,
                2,
                vec![
                    self.speedup(m, "", Color::Blue, Color::Gray),
                    self.efficiency_line(
                        &m.efficiency,
                        format!("Parallel Efficiency vs {}", self.workers),
                        Color::Green,
                    ),
                    self.rate(rate),
                    self.time(&m.run, "", Color::Orange, Marker::Diamond),
                ],
            ),
            None => Figure::grid(
                self.stem("analysis"),
                title,
                1,
                3,
                vec![
                    self.time(&m.run, "", Color::Blue, Marker::Circle),
                    self.speedup(m, "", Color::Blue, Color::Gray),
                    self.efficiency_line(
                        &m.efficiency,
                        format!("Parallel Efficiency vs {}", self.workers),
                        Color::Green,
                    ),
                ],
            ),
        };
        figures.push(dashboard);

        figures.push(Figure::single(
            self.stem("time"),
            self.time(&m.run, "", Color::Red, Marker::Circle)
                .annotated(ValueFormat::Seconds, 1),
        ));
        figures.push(Figure::single(
            self.stem("speedup"),
            self.speedup(m, "", Color::Green, Color::Red)
                .annotated(ValueFormat::Factor, 1)
                .with_callouts(Self::efficiency_callouts(m)),
        ));
        figures.push(Figure::single(
            self.stem("efficiency"),
            self.efficiency_bars(&m.efficiency)
                .annotated(ValueFormat::Percent, 1),
        ));
        if let Some(rate) = &m.throughput {
            figures.push(Figure::single(
                self.stem("throughput"),
                self.rate(rate).annotated(ValueFormat::Fixed(2), 1),
            ));
        }
        figures
    }

    fn strong_weak(
        &self,
        title: &str,
        strong: &ScalingMetrics,
        weak: &crate::analysis::WeakMetrics,
    ) -> Vec<Figure> {
        let weak_efficiency = |p: &Self| {
            p.efficiency_line(
                &weak.efficiency,
                format!("Weak Scaling: Efficiency vs {}", p.workers),
                Color::Orange,
            )
        };

        vec![
            Figure::grid(
                self.stem("analysis"),
                title,
                2,
                2,
                vec![
                    self.time(&strong.run, "Strong Scaling: ", Color::Blue, Marker::Circle),
                    self.speedup(strong, "Strong Scaling: ", Color::Green, Color::Gray),
                    self.time(&weak.run, "Weak Scaling: ", Color::Purple, Marker::Triangle),
                    weak_efficiency(self),
                ],
            ),
            Figure::single(
                self.stem("strong_time"),
                self.time(&strong.run, "Strong Scaling: ", Color::Blue, Marker::Circle)
                    .annotated(ValueFormat::Seconds, 1),
            ),
            Figure::single(
                self.stem("strong_speedup"),
                self.speedup(strong, "Strong Scaling: ", Color::Green, Color::Red)
                    .annotated(ValueFormat::Factor, 1),
            ),
            Figure::single(
                self.stem("weak_time"),
                self.time(&weak.run, "Weak Scaling: ", Color::Purple, Marker::Triangle)
                    .annotated(ValueFormat::Seconds, 1),
            ),
            Figure::single(
                self.stem("weak_efficiency"),
                weak_efficiency(self).annotated(ValueFormat::Percent, 1),
            ),
        ]
    }

    fn comparison(&self, title: &str, m: &ComparisonMetrics) -> Vec<Figure> {
        vec![
            Figure::grid(
                self.stem("analysis"),
                title,
                2,
                2,
                vec![
                    self.comparison_times(m),
                    self.overhead_factor(m),
                    self.time_difference(m),
                    self.overhead_percentage(m),
                ],
            ),
            Figure::single(self.stem("times"), self.grouped_times(m)),
            Figure::single(
                self.stem("overhead_factor"),
                self.overhead_factor(m).annotated(ValueFormat::Factor, 2),
            ),
            Figure::single(
                self.stem("times_log"),
                self.comparison_times(m).log_scale(),
            ),
        ]
    }
}

/// Plan every figure for a report.
#[must_use]
pub fn plan_figures(report: &ExperimentReport) -> Vec<Figure> {
    let planner = Planner::new(report);
    match &report.body {
        ReportBody::Scaling(m) => planner.scaling(&report.title, m),
        ReportBody::StrongWeak { strong, weak } => planner.strong_weak(&report.title, strong, weak),
        ReportBody::Comparison(m) => planner.comparison(&report.title, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use parscale_core::presets;

    fn plan(name: &str) -> Vec<Figure> {
        plan_figures(&analyze(&presets::find(name).unwrap()).unwrap())
    }

    fn stems(figures: &[Figure]) -> Vec<&str> {
        figures.iter().map(|f| f.stem.as_str()).collect()
    }

    #[test]
    fn value_formats() {
        assert_eq!(ValueFormat::Seconds.format(0.471), "0.471s");
        assert_eq!(ValueFormat::Factor.format(3.991_525), "3.99x");
        assert_eq!(ValueFormat::Percent.format(199.576), "199.6%");
        assert_eq!(ValueFormat::Fixed(2).format(27.586), "27.59");
    }

    #[test]
    fn scaling_with_workload() {
        let figures = plan("map-ops");
        assert_eq!(
            stems(&figures),
            vec![
                "map-ops_analysis",
                "map-ops_time",
                "map-ops_speedup",
                "map-ops_efficiency",
                "map-ops_throughput",
            ]
        );
        let dashboard = &figures[0];
        assert_eq!((dashboard.rows, dashboard.cols), (2, 2));
        assert_eq!(dashboard.panels.len(), 4);
        assert_eq!(dashboard.title.as_deref(), Some("Parallel Map"));
    }

    #[test]
    fn scaling_without_workload() {
        let figures = plan("vector-add");
        assert_eq!(figures.len(), 4);
        assert_eq!((figures[0].rows, figures[0].cols), (1, 3));
        assert!(!stems(&figures).contains(&"vector-add_throughput"));
    }

    #[test]
    fn speedup_has_ideal_line() {
        let figures = plan("triad");
        let speedup = &figures[2].panels[0];
        assert!(speedup
            .references
            .iter()
            .any(|r| matches!(r, Reference::Identity { .. })));
        assert_eq!(speedup.x_label, "Number of Cores");
        assert_eq!(speedup.annotation.map(|a| a.format), Some(ValueFormat::Factor));
    }

    #[test]
    fn speedup_carries_efficiency_callouts() {
        let figures = plan("triad");
        let callouts = &figures[2].panels[0].callouts;
        let xs: Vec<f64> = callouts.iter().map(|c| c.at.0).collect();
        assert_eq!(xs, vec![2.0, 9.0, 17.0]);
        // 0.419 / 0.087 / 9
        assert_eq!(callouts[1].text, "Efficiency: 53.5%");
        assert!((callouts[1].at.1 - 4.816).abs() < 0.001);
        let below: Vec<bool> = callouts.iter().map(|c| c.below).collect();
        assert_eq!(below, vec![true, false, true]);
    }

    #[test]
    fn callouts_only_on_single_speedup_chart() {
        let figures = plan("triad");
        assert!(figures[0].panels.iter().all(|p| p.callouts.is_empty()));
        assert!(plan("strong-weak").iter().all(|f| f.panels.iter().all(|p| p.callouts.is_empty())));
    }

    #[test]
    fn dashboard_ideal_line_is_gray() {
        let ideal_color = |panel: &Panel| {
            panel.references.iter().find_map(|r| match r {
                Reference::Identity { color, .. } => Some(*color),
                Reference::Horizontal { .. } => None,
            })
        };
        let figures = plan("triad");
        assert_eq!(ideal_color(&figures[0].panels[0]), Some(Color::Gray));
        assert_eq!(ideal_color(&figures[2].panels[0]), Some(Color::Red));
    }

    #[test]
    fn efficiency_bars_are_banded() {
        let figures = plan("triad");
        let efficiency = &figures[3].panels[0];
        assert!(matches!(
            efficiency.series[0].style,
            SeriesStyle::Bars { banded: true, .. }
        ));
    }

    #[test]
    fn throughput_has_peak_line() {
        let figures = plan("triad");
        let rate = &figures[4].panels[0];
        let peak = rate.references.iter().find_map(|r| match r {
            Reference::Horizontal { y, label, .. } => Some((*y, label.clone())),
            Reference::Identity { .. } => None,
        });
        let (y, label) = peak.unwrap();
        assert!((y - 27.586).abs() < 0.001);
        assert_eq!(label, "Peak: 27.59 GB/s");
        assert_eq!(rate.y_label, "Memory Bandwidth (GB/s)");
    }

    #[test]
    fn strong_weak_figures() {
        let figures = plan("strong-weak");
        assert_eq!(
            stems(&figures),
            vec![
                "strong-weak_analysis",
                "strong-weak_strong_time",
                "strong-weak_strong_speedup",
                "strong-weak_weak_time",
                "strong-weak_weak_efficiency",
            ]
        );
    }

    #[test]
    fn comparison_figures() {
        let figures = plan("false-sharing");
        assert_eq!(
            stems(&figures),
            vec![
                "false-sharing_analysis",
                "false-sharing_times",
                "false-sharing_overhead_factor",
                "false-sharing_times_log",
            ]
        );
        assert_eq!(figures[2].panels[0].annotation.map(|a| a.stride), Some(2));
        assert_eq!(figures[3].panels[0].scale, Scale::Log);

        let grouped = &figures[1].panels[0];
        assert_eq!(grouped.series.len(), 2);
        assert_eq!(grouped.series[0].label.as_deref(), Some("False Sharing"));
    }

    #[test]
    fn bounds_include_zero_and_references() {
        let panel = Panel::new("t", "x", "y")
            .with_series(PlotSeries::line(
                Color::Blue,
                Marker::Circle,
                vec![(1.0, 0.5), (4.0, 2.0)],
            ))
            .with_reference(Reference::Horizontal {
                y: 3.0,
                label: "ref".into(),
                color: Color::Red,
            });
        let bounds = panel.bounds().unwrap();
        assert_eq!(bounds.x, (1.0, 4.0));
        assert_eq!(bounds.y, (0.0, 3.0));
    }

    #[test]
    fn bounds_identity_spans_x_range() {
        let panel = Panel::new("t", "x", "y")
            .with_series(PlotSeries::line(
                Color::Blue,
                Marker::Circle,
                vec![(1.0, 1.0), (17.0, 4.3)],
            ))
            .with_reference(Reference::Identity {
                label: "ideal".into(),
                color: Color::Red,
            });
        assert_eq!(panel.bounds().unwrap().y, (0.0, 17.0));
    }

    #[test]
    fn bounds_log_scale_ignores_non_positive() {
        let panel = Panel::new("t", "x", "y")
            .log_scale()
            .with_series(PlotSeries::line(
                Color::Blue,
                Marker::Circle,
                vec![(1.0, 0.002), (2.0, 0.7)],
            ));
        assert_eq!(panel.bounds().unwrap().y, (0.002, 0.7));
    }

    #[test]
    fn bounds_of_empty_panel() {
        assert!(Panel::new("t", "x", "y").bounds().is_none());
    }

    #[test]
    fn x_ticks_are_unique() {
        let figures = plan("critical-vs-reduction");
        let ticks = figures[0].panels[0].x_ticks();
        assert_eq!(ticks.len(), 17);
        assert_eq!(ticks.first(), Some(&1.0));
    }
}
